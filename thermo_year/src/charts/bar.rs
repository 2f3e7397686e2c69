// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use thermo_charts::{BarMarkSpec, TextMarkSpec, TextMeasurer, format_fixed};
use thermo_core::{FontWeight, MarkId};

use super::{ANNOTATION_ID_BASE, RenderedChart, SERIES_ID_BASE, chart_legend, render};
use crate::category::classify;
use crate::dataset::TemperatureRecord;
use crate::legend::{LegendEntry, category_legend_items};
use crate::palette::{CAPTION_FONT_SIZE, SECONDARY_LABEL};

const ANNOTATION_GAP: f64 = 2.0;

/// One bar per month from zero to the reading, colored by bucket, with the rounded
/// reading printed above each bar.
pub fn bar_chart(
    records: &[TemperatureRecord],
    legend_entries: &[LegendEntry],
    viewport_width: f64,
    measurer: &dyn TextMeasurer,
) -> RenderedChart {
    let legend = chart_legend(category_legend_items(legend_entries), legend_entries.len());
    render(records, viewport_width, Some(legend), measurer, |values, _, scales| {
        let bars = BarMarkSpec::new(SERIES_ID_BASE, scales.x, scales.y);
        let mut out = bars.marks_by(values, |_, v| classify(v).color().into());
        out.extend(values.iter().enumerate().map(|(i, &v)| {
            let top = bars.bar_rect(i, v).y0;
            TextMarkSpec::new(
                MarkId::from_raw(ANNOTATION_ID_BASE).offset(i as u64),
                Point::new(scales.x.center(i), top - ANNOTATION_GAP),
                format_fixed(v, 0),
            )
            .with_font_size(CAPTION_FONT_SIZE)
            .with_font_weight(FontWeight::MEDIUM)
            .with_fill(SECONDARY_LABEL)
            .mark()
        }));
        out
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use std::collections::HashSet;

    use peniko::Brush;
    use thermo_charts::HeuristicTextMeasurer;
    use thermo_core::{MarkPayload, Scene};

    use super::*;
    use crate::dataset::{Month, TemperatureRecord, temperatures};
    use crate::legend::LEGEND;

    #[test]
    fn bars_are_colored_by_bucket_and_annotated() {
        let chart = bar_chart(temperatures(), &LEGEND, 390.0, &HeuristicTextMeasurer);
        let bar_fills: Vec<Brush> = chart
            .marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r.fill.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(bar_fills.len(), 12);
        for (fill, r) in bar_fills.iter().zip(temperatures()) {
            assert_eq!(*fill, Brush::Solid(classify(r.celsius).color()));
        }

        let annotations: Vec<String> = chart
            .marks
            .iter()
            .filter(|m| (ANNOTATION_ID_BASE..ANNOTATION_ID_BASE + 12).contains(&m.id.0))
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(annotations[0], "-8");
        assert_eq!(annotations[6], "23");
    }

    #[test]
    fn annotations_sit_above_the_bar_top() {
        let chart = bar_chart(temperatures(), &LEGEND, 390.0, &HeuristicTextMeasurer);
        let bar = |i: u64| chart.marks.iter().find(|m| m.id.0 == SERIES_ID_BASE + i);
        let note = |i: u64| chart.marks.iter().find(|m| m.id.0 == ANNOTATION_ID_BASE + i);
        for i in [0, 6] {
            let (Some(b), Some(n)) = (bar(i), note(i)) else {
                panic!("bar {i} and its annotation exist");
            };
            let (MarkPayload::Rect(r), MarkPayload::Text(t)) = (&b.payload, &n.payload) else {
                panic!("bars are rects, annotations are text");
            };
            assert!(t.pos.y < r.rect.y0, "annotation {i} is above its bar");
            assert!((t.pos.x - r.rect.center().x).abs() < 1e-9);
        }
    }

    #[test]
    fn long_record_slices_keep_ids_unique() {
        let records: Vec<TemperatureRecord> = (0..1200)
            .map(|i| TemperatureRecord::new(Month::ALL[i % 12], (i % 40) as f64 - 10.0))
            .collect();
        let chart = bar_chart(&records, &LEGEND, 390.0, &HeuristicTextMeasurer);
        let ids: HashSet<u64> = chart.marks.iter().map(|m| m.id.0).collect();
        assert_eq!(ids.len(), chart.marks.len());

        let mut scene = Scene::new();
        scene.tick(chart.marks.clone());
        assert_eq!(scene.len(), chart.marks.len());
        assert!(chart.marks.iter().all(|m| m.id.0 < 1 << 32));
    }
}
