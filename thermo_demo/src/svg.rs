// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a scene's current frame.

use std::fmt::Write as _;

use peniko::{Brush, Color};
use thermo_charts::Size;
use thermo_core::{Mark, MarkPayload, Scene, TextAnchor, TextBaseline};

/// Serializes `scene` in paint order onto a `size` canvas filled with `background`.
pub(crate) fn render(scene: &Scene, size: Size, background: Color) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = size.width,
        h = size.height,
    );
    out.push_str(r#"<rect x="0" y="0" width="100%" height="100%""#);
    write_paint_attr(&mut out, "fill", &Brush::Solid(background));
    out.push_str("/>\n");

    for mark in scene.paint_order() {
        write_mark(&mut out, mark);
    }

    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            write_paint_attr(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                let _ = write!(
                    out,
                    r#" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round""#,
                    p.stroke_width
                );
            }
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Top => "text-before-edge",
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Bottom => "text-after-edge",
            };
            let anchor = match t.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
                t.pos.x, t.pos.y, t.font_size, t.font_weight.0,
            );
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

/// Returns the CSS hex color and, when not opaque, the opacity for `brush`.
fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (hex, opacity)
        }
        _ => ("none".to_owned(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    if opacity == Some(0.0) {
        let _ = write!(out, r#" {name}="none""#);
        return;
    }
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Point, Rect};
    use peniko::color::palette::css;
    use thermo_core::{FontWeight, MarkId};

    use super::*;

    #[test]
    fn legend_labels_are_escaped() {
        assert_eq!(escape_xml("<= 0"), "&lt;= 0");
        assert_eq!(escape_xml("> 20"), "&gt; 20");
        assert_eq!(escape_xml("a & 'b'"), "a &amp; &apos;b&apos;");
    }

    #[test]
    fn translucent_paint_carries_opacity() {
        let (hex, opacity) = svg_paint(&Brush::Solid(Color::from_rgba8(0x3C, 0x3C, 0x43, 0x99)));
        assert_eq!(hex, "#3c3c43");
        assert_eq!(opacity, Some(0.6));

        let mut out = String::new();
        write_paint_attr(&mut out, "fill", &Brush::Solid(css::TRANSPARENT));
        assert_eq!(out, r#" fill="none""#);
    }

    #[test]
    fn marks_are_written_in_paint_order() {
        let mut scene = Scene::new();
        let mut line = BezPath::new();
        line.move_to((0.0, 5.0));
        line.line_to((10.0, 5.0));
        scene.tick(vec![
            Mark::builder(MarkId(2))
                .z_index(40)
                .text(Point::new(5.0, 5.0), "<= 10")
                .font_weight(FontWeight::MEDIUM)
                .build(),
            Mark::builder(MarkId(1))
                .z_index(0)
                .rect(Rect::new(0.0, 0.0, 10.0, 10.0))
                .fill(css::RED)
                .build(),
            Mark::builder(MarkId(3))
                .z_index(10)
                .path(line)
                .no_fill()
                .stroke(css::ORANGE, 1.0)
                .build(),
        ]);

        let svg = render(&scene, Size::new(20.0, 10.0), css::WHITE);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10""#));
        let rect = svg.find(r#"<rect x="0" y="0" width="10""#).expect("rect written");
        let path = svg.find("<path").expect("path written");
        let text = svg.find("<text").expect("text written");
        assert!(rect < path && path < text);
        assert!(svg.contains(r#"font-weight="500""#));
        assert!(svg.contains("&lt;= 10</text>"));
        assert!(svg.contains(r##"stroke="#ffa500""##));
    }
}
