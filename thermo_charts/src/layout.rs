// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small measure/arrange layout helper for charts.
//!
//! - **Measure**: guides report their desired thickness (axes) or size (legends).
//! - **Arrange**: the plot takes whatever the fixed view leaves over, and guides are
//!   placed against its edges.
//!
//! Vertical space is allotted from guide heights only, so a chart's plot height does not
//! change when only the view width does.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size, clamping negative extents to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Layout inputs for a single chart: a fixed view plus optional guides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// Outer chart bounds.
    pub view_size: Size,
    /// Right axis thickness.
    pub axis_right: Option<f64>,
    /// Bottom axis thickness.
    pub axis_bottom: Option<f64>,
    /// Legend size and its gap below the bottom axis.
    pub legend_bottom: Option<(Size, f64)>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds, with the origin at the top-left.
    pub view: Rect,
    /// Plot (data) rectangle.
    pub plot: Rect,
    /// Right axis rectangle.
    pub axis_right: Option<Rect>,
    /// Bottom axis rectangle.
    pub axis_bottom: Option<Rect>,
    /// Legend rectangle.
    pub legend: Option<Rect>,
}

impl ChartLayout {
    /// Arranges the plot and guides within `spec.view_size`.
    ///
    /// When guides need more room than the view offers, the plot collapses to zero size
    /// rather than going negative.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let thickness = |t: Option<f64>| t.map_or(0.0, |t| t.max(0.0));
        let right_w = thickness(spec.axis_right);
        let bottom_h = thickness(spec.axis_bottom);
        let legend_h = spec
            .legend_bottom
            .map_or(0.0, |(size, gap)| size.height.max(0.0) + gap.max(0.0));

        let view = Rect::new(0.0, 0.0, spec.view_size.width, spec.view_size.height);
        let plot_w = (view.width() - right_w).max(0.0);
        let plot_h = (view.height() - bottom_h - legend_h).max(0.0);
        let plot = Rect::new(0.0, 0.0, plot_w, plot_h);

        let axis_right = spec
            .axis_right
            .map(|_| Rect::new(plot.x1, plot.y0, plot.x1 + right_w, plot.y1));
        let axis_bottom = spec
            .axis_bottom
            .map(|_| Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + bottom_h));
        let legend = spec.legend_bottom.map(|(size, gap)| {
            let y = plot.y1 + bottom_h + gap.max(0.0);
            Rect::new(plot.x0, y, plot.x0 + size.width, y + size.height)
        });

        Self {
            view,
            plot,
            axis_right,
            axis_bottom,
            legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: f64) -> ChartLayoutSpec {
        ChartLayoutSpec {
            view_size: Size::new(width, 300.0),
            axis_right: Some(24.0),
            axis_bottom: Some(16.0),
            legend_bottom: Some((Size::new(200.0, 30.0), 8.0)),
        }
    }

    #[test]
    fn guides_surround_the_plot() {
        let layout = ChartLayout::arrange(&spec(370.0));
        assert_eq!(layout.plot, Rect::new(0.0, 0.0, 346.0, 246.0));
        assert_eq!(layout.axis_right, Some(Rect::new(346.0, 0.0, 370.0, 246.0)));
        assert_eq!(layout.axis_bottom, Some(Rect::new(0.0, 246.0, 346.0, 262.0)));
        assert_eq!(layout.legend, Some(Rect::new(0.0, 270.0, 200.0, 300.0)));
    }

    #[test]
    fn plot_height_ignores_view_width() {
        let narrow = ChartLayout::arrange(&spec(200.0));
        let wide = ChartLayout::arrange(&spec(900.0));
        assert_eq!(narrow.plot.height(), wide.plot.height());
        assert!(wide.plot.width() > narrow.plot.width());
    }

    #[test]
    fn oversized_guides_collapse_the_plot() {
        let layout = ChartLayout::arrange(&spec(10.0));
        assert_eq!(layout.plot.width(), 0.0);
    }
}
