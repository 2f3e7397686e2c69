// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the temperatures screen to a file.
//!
//! The screen is composed once for the configured viewport and then once more for each
//! `--resize-to` width, all through the same scene, so the log shows what a resize
//! touches. The last composition is written out.

use std::fs;

use anyhow::Result;
use clap::Parser;
use thermo_charts::{HeuristicTextMeasurer, TextMeasurer};
use thermo_core::{MarkDiff, Scene};
use thermo_year::{BACKGROUND, LEGEND, ScreenLayout, TITLE, Viewport, compose, temperatures};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod html;
mod svg;

use config::{Cli, DemoConfig, OutputFormat};
use error::DemoError;

#[derive(Debug, Default, PartialEq, Eq)]
struct DiffCounts {
    enter: usize,
    update: usize,
    exit: usize,
}

impl DiffCounts {
    fn of(diffs: &[MarkDiff]) -> Self {
        diffs.iter().fold(Self::default(), |mut c, d| {
            match d {
                MarkDiff::Enter { .. } => c.enter += 1,
                MarkDiff::Update { .. } => c.update += 1,
                MarkDiff::Exit { .. } => c.exit += 1,
            }
            c
        })
    }
}

/// Composes the screen for `viewport` and moves `scene` to it.
fn compose_into(
    scene: &mut Scene,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> (ScreenLayout, DiffCounts) {
    let mut layout = compose(temperatures(), &LEGEND, viewport, measurer);
    let marks = std::mem::take(&mut layout.marks);
    let counts = DiffCounts::of(&scene.tick(marks));
    info!(
        width = viewport.width,
        content_height = layout.content_size.height,
        enter = counts.enter,
        update = counts.update,
        exit = counts.exit,
        "composed screen"
    );
    for chart in &layout.charts {
        debug!(kind = ?chart.kind, frame = ?chart.frame, "placed chart");
    }
    (layout, counts)
}

fn render(scene: &Scene, layout: &ScreenLayout, format: OutputFormat) -> String {
    let svg = svg::render(scene, layout.content_size, BACKGROUND);
    match format {
        OutputFormat::Svg => svg,
        OutputFormat::Html => html::page(TITLE, &svg, layout.viewport),
    }
}

fn run(config: &DemoConfig) -> Result<()> {
    let measurer = HeuristicTextMeasurer;
    let mut scene = Scene::new();

    let (mut layout, _) = compose_into(&mut scene, config.viewport, &measurer);
    for &width in &config.resize_to {
        let viewport = Viewport::new(width, config.viewport.height);
        (layout, _) = compose_into(&mut scene, viewport, &measurer);
    }

    let document = render(&scene, &layout, config.format);
    fs::write(&config.output, document).map_err(|source| DemoError::OutputWrite {
        path: config.output.clone(),
        source,
    })?;
    info!(
        path = %config.output.display(),
        format = ?config.format,
        marks = scene.len(),
        "wrote screen"
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::resolve(Cli::parse())?;
    run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_only_updates_existing_marks() {
        let mut scene = Scene::new();
        let m = HeuristicTextMeasurer;
        let (_, first) = compose_into(&mut scene, Viewport::new(390.0, 844.0), &m);
        assert!(first.enter > 0);
        assert_eq!((first.update, first.exit), (0, 0));

        let (_, again) = compose_into(&mut scene, Viewport::new(390.0, 844.0), &m);
        assert_eq!(again, DiffCounts::default());

        let (_, resized) = compose_into(&mut scene, Viewport::new(600.0, 844.0), &m);
        assert_eq!((resized.enter, resized.exit), (0, 0));
        assert!(resized.update > 0);
    }

    #[test]
    fn writes_the_last_composition() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("screen.svg");
        let config = DemoConfig {
            viewport: Viewport::new(390.0, 844.0),
            resize_to: vec![500.0],
            output: output.clone(),
            format: OutputFormat::Svg,
        };
        run(&config).expect("render succeeds");

        let svg = fs::read_to_string(&output).expect("output written");
        assert!(svg.contains(r#"viewBox="0 0 500 "#));
        assert!(svg.contains(TITLE));
        assert!(svg.contains("&lt;= 0"));
    }

    #[test]
    fn html_wraps_the_svg() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("screen.html");
        let config = DemoConfig {
            viewport: Viewport::new(390.0, 844.0),
            resize_to: Vec::new(),
            output: output.clone(),
            format: OutputFormat::Html,
        };
        run(&config).expect("render succeeds");

        let html = fs::read_to_string(&output).expect("output written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("width: 390px; height: 844px;"));
        assert!(html.contains("<svg "));
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = DemoConfig {
            viewport: Viewport::new(390.0, 844.0),
            resize_to: Vec::new(),
            output: dir.path().join("missing").join("screen.html"),
            format: OutputFormat::Html,
        };
        let err = run(&config).expect_err("parent directory does not exist");
        assert!(matches!(
            err.downcast_ref::<DemoError>(),
            Some(DemoError::OutputWrite { .. })
        ));
    }
}
