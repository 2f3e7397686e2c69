// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thermo_charts::{ANNOTATIONS, AreaMarkSpec, Interpolation, RuleMarkSpec, TextMeasurer};
use thermo_core::MarkId;

use super::{MEAN_RULE_ID, RenderedChart, SERIES_ID_BASE, render};
use crate::category::classify;
use crate::dataset::{TemperatureRecord, mean_celsius};
use crate::palette::SYSTEM_ORANGE;

const MEAN_RULE_WIDTH: f64 = 1.0;

/// The cardinal curve filled down to zero, colored per month by bucket, with an orange
/// rule at the yearly mean.
pub fn area_chart(
    records: &[TemperatureRecord],
    viewport_width: f64,
    measurer: &dyn TextMeasurer,
) -> RenderedChart {
    render(records, viewport_width, None, measurer, |values, layout, scales| {
        let mut out = AreaMarkSpec::new(SERIES_ID_BASE, scales.x, scales.y)
            .with_interpolation(Interpolation::CARDINAL)
            .marks_by(values, |_, v| classify(v).color().into());
        if let Some(mean) = mean_celsius(records) {
            let plot = layout.plot;
            out.push(
                RuleMarkSpec::horizontal(
                    MarkId::from_raw(MEAN_RULE_ID),
                    scales.y.map(mean),
                    plot.x0,
                    plot.x1,
                )
                .with_stroke(SYSTEM_ORANGE, MEAN_RULE_WIDTH)
                .with_z_index(ANNOTATIONS)
                .mark(),
            );
        }
        out
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use kurbo::{PathEl, Shape};
    use peniko::Brush;
    use thermo_charts::HeuristicTextMeasurer;
    use thermo_core::MarkPayload;

    use super::*;
    use crate::dataset::temperatures;

    #[test]
    fn mean_rule_spans_the_plot_at_the_mean() {
        let chart = area_chart(temperatures(), 390.0, &HeuristicTextMeasurer);
        let (Some(plot), Some(scales)) = (chart.plot(), chart.scales) else {
            panic!("sample data has a plot");
        };
        let rule = chart.marks.iter().find(|m| m.id.0 == MEAN_RULE_ID);
        let Some(MarkPayload::Path(p)) = rule.map(|m| &m.payload) else {
            panic!("the mean rule is a path");
        };
        assert_eq!(p.stroke, Brush::Solid(SYSTEM_ORANGE));
        let y = scales.y.map(7.5);
        assert_eq!(
            p.path.elements(),
            [PathEl::MoveTo((plot.x0, y).into()), PathEl::LineTo((plot.x1, y).into())]
        );
    }

    #[test]
    fn slices_tile_the_area_left_to_right() {
        let chart = area_chart(temperatures(), 390.0, &HeuristicTextMeasurer);
        let slices: Vec<(kurbo::Rect, Brush)> = chart
            .marks
            .iter()
            .filter(|m| (SERIES_ID_BASE..SERIES_ID_BASE + 12).contains(&m.id.0))
            .filter_map(|m| match &m.payload {
                MarkPayload::Path(p) => Some((p.path.bounding_box(), p.fill.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(slices.len(), 12);
        for pair in slices.windows(2) {
            assert!((pair[0].0.x1 - pair[1].0.x0).abs() < 1e-9, "slices abut");
        }
        for ((_, fill), r) in slices.iter().zip(temperatures()) {
            assert_eq!(*fill, Brush::Solid(classify(r.celsius).color()));
        }
    }
}
