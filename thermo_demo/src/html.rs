// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A standalone page that shows the screen inside a viewport-sized scroll region.

use std::fmt::Write as _;

use thermo_year::Viewport;

/// Wraps `svg` in a container of the viewport's size that scrolls vertically only and
/// hides its scrollbars.
pub(crate) fn page(title: &str, svg: &str, viewport: Viewport) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str("<style>\n");
    out.push_str("body { margin: 0; font-family: -apple-system, system-ui, sans-serif; }\n");
    let _ = writeln!(
        out,
        ".screen {{ width: {}px; height: {}px; overflow-y: auto; overflow-x: hidden; \
         scrollbar-width: none; }}",
        viewport.width, viewport.height
    );
    out.push_str(".screen::-webkit-scrollbar { display: none; }\n");
    out.push_str(".screen > svg { display: block; }\n");
    out.push_str("</style>\n</head>\n<body>\n<div class=\"screen\">\n");
    out.push_str(svg);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
