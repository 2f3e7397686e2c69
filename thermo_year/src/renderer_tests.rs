// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties shared by all four charts and the composed screen.

extern crate std;

use alloc::vec::Vec;

use thermo_charts::{HeuristicTextMeasurer, TextMeasurer};
use thermo_core::{Mark, MarkPayload, Scene};

use crate::charts::X_AXIS_ID_BASE;
use crate::{
    CHART_HEIGHT, ChartKind, LEGEND, RenderedChart, TemperatureRecord, Viewport, area_chart,
    bar_chart, compose, line_chart, rectangle_chart, temperatures,
};

const M: &dyn TextMeasurer = &HeuristicTextMeasurer;

fn all_charts(records: &[TemperatureRecord], width: f64) -> [RenderedChart; 4] {
    [
        bar_chart(records, &LEGEND, width, M),
        line_chart(records, width, M),
        rectangle_chart(records, &LEGEND, width, M),
        area_chart(records, width, M),
    ]
}

/// Data marks only: everything below the guide id ranges.
fn series(chart: &RenderedChart) -> Vec<&Mark> {
    chart.marks.iter().filter(|m| m.id.0 < X_AXIS_ID_BASE).collect()
}

fn vertical_extent(m: &Mark) -> Option<(f64, f64)> {
    match &m.payload {
        MarkPayload::Text(t) => Some((t.pos.y, t.pos.y)),
        p => p.bounds().map(|b| (b.y0, b.y1)),
    }
}

#[test]
fn rendering_is_idempotent() {
    let a = all_charts(temperatures(), 390.0);
    let b = all_charts(temperatures(), 390.0);
    assert_eq!(a, b);

    let mut scene = Scene::new();
    let screen = |w| compose(temperatures(), &LEGEND, Viewport::new(w, 844.0), M).marks;
    scene.tick(screen(390.0));
    assert!(scene.tick(screen(390.0)).is_empty(), "same input, no diffs");
}

#[test]
fn resize_changes_width_but_not_data_heights() {
    let narrow = all_charts(temperatures(), 390.0);
    let wide = all_charts(temperatures(), 844.0);
    for (n, w) in narrow.iter().zip(&wide) {
        assert!((n.size.width - 370.0).abs() < 1e-9);
        assert!((w.size.width - 824.0).abs() < 1e-9);
        assert_eq!(n.size.height, CHART_HEIGHT);
        assert_eq!(w.size.height, CHART_HEIGHT);

        let (sn, sw) = (series(n), series(w));
        assert_eq!(sn.len(), sw.len());
        for (a, b) in sn.iter().zip(&sw) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.z_index, b.z_index);
            let (Some((a0, a1)), Some((b0, b1))) = (vertical_extent(a), vertical_extent(b)) else {
                continue;
            };
            assert!((a0 - b0).abs() < 1e-6 && (a1 - b1).abs() < 1e-6, "{:?} keeps its y", a.id);
            match (&a.payload, &b.payload) {
                (MarkPayload::Rect(x), MarkPayload::Rect(y)) => assert_eq!(x.fill, y.fill),
                (MarkPayload::Path(x), MarkPayload::Path(y)) => {
                    assert_eq!(x.fill, y.fill);
                    assert_eq!(x.stroke, y.stroke);
                }
                (MarkPayload::Text(x), MarkPayload::Text(y)) => assert_eq!(x.text, y.text),
                _ => panic!("{:?} changed kind on resize", a.id),
            }
        }
    }
}

#[test]
fn resize_recomposition_only_updates() {
    let mut scene = Scene::new();
    let screen = |w| compose(temperatures(), &LEGEND, Viewport::new(w, 844.0), M).marks;
    let entered = scene.tick(screen(390.0)).len();
    let diffs = scene.tick(screen(600.0));
    assert!(!diffs.is_empty());
    assert!(
        diffs
            .iter()
            .all(|d| matches!(d, thermo_core::MarkDiff::Update { .. })),
        "no marks appear or disappear on resize"
    );
    assert_eq!(scene.len(), entered);
}

#[test]
fn empty_input_renders_empty_frames() {
    for chart in all_charts(&[], 390.0) {
        assert!(chart.marks.is_empty());
        assert!(chart.layout.is_none());
        assert!((chart.size.width - 370.0).abs() < 1e-9);
        assert_eq!(chart.size.height, CHART_HEIGHT);
    }
    let screen = compose(&[], &LEGEND, Viewport::new(390.0, 844.0), M);
    assert_eq!(screen.charts.len(), ChartKind::ALL.len());
    assert_eq!(screen.marks.len(), 1, "only the title remains");
}

#[test]
fn narrow_viewports_clamp_to_zero_width() {
    for chart in all_charts(temperatures(), 12.0) {
        assert_eq!(chart.size.width, 0.0);
        assert_eq!(chart.size.height, CHART_HEIGHT);
    }
}

#[test]
fn single_record_draws_without_panicking() {
    let one = [temperatures()[6]];
    let [bar, line, rect, area] = all_charts(&one, 390.0);
    assert_eq!(series(&bar).len(), 2, "one bar plus its annotation");
    assert_eq!(series(&line).len(), 2, "a degenerate line plus one symbol");
    assert_eq!(series(&rect).len(), 1);
    assert_eq!(series(&area).len(), 2, "one slice plus the mean rule");
}
