// Copyright 2025 the Thermo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line and config file handling.
//!
//! Precedence: command line flags, then the config file, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thermo_year::Viewport;

use crate::error::{DemoError, Result};

const DEFAULT_WIDTH: f64 = 390.0;
const DEFAULT_HEIGHT: f64 = 844.0;
const DEFAULT_OUTPUT: &str = "temperatures.html";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// A page wrapping the SVG in a vertically scrolling viewport.
    Html,
    /// The bare SVG of the full screen.
    Svg,
}

/// Render "Temperatures in a year" for a given viewport.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Viewport width in layout units.
    #[arg(long)]
    pub(crate) width: Option<f64>,

    /// Viewport height in layout units.
    #[arg(long)]
    pub(crate) height: Option<f64>,

    /// Recompose at this width after the initial layout (repeatable).
    #[arg(long = "resize-to", value_name = "WIDTH")]
    pub(crate) resize_to: Vec<f64>,

    /// Output file.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// TOML config file.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) width: Option<f64>,
    pub(crate) height: Option<f64>,
    pub(crate) resize_to: Vec<f64>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) format: Option<OutputFormat>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DemoConfig {
    pub(crate) viewport: Viewport,
    pub(crate) resize_to: Vec<f64>,
    pub(crate) output: PathBuf,
    pub(crate) format: OutputFormat,
}

impl DemoConfig {
    pub(crate) fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: Cli, file: FileConfig) -> Result<Self> {
        let width = cli.width.or(file.width).unwrap_or(DEFAULT_WIDTH);
        let height = cli.height.or(file.height).unwrap_or(DEFAULT_HEIGHT);
        let viewport = checked_viewport(width, height)?;
        let resize_to = if cli.resize_to.is_empty() {
            file.resize_to
        } else {
            cli.resize_to
        };
        for &w in &resize_to {
            checked_viewport(w, height)?;
        }
        Ok(Self {
            viewport,
            resize_to,
            output: cli
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            format: cli.format.or(file.format).unwrap_or(OutputFormat::Html),
        })
    }
}

fn checked_viewport(width: f64, height: f64) -> Result<Viewport> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(Viewport::new(width, height))
    } else {
        Err(DemoError::InvalidViewport { width, height })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let argv = std::iter::once("thermo_demo").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let config = DemoConfig::resolve(cli(&[])).expect("defaults are valid");
        assert_eq!(config.viewport, Viewport::new(390.0, 844.0));
        assert_eq!(config.output, PathBuf::from("temperatures.html"));
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.resize_to.is_empty());
    }

    #[test]
    fn flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "width = 600.0\nheight = 900.0\nformat = \"svg\"\nresize_to = [320.0]"
        )
        .expect("write config");
        let path = file.path().to_str().expect("utf-8 path");

        let config =
            DemoConfig::resolve(cli(&["--config", path, "--width", "414"])).expect("valid");
        assert_eq!(config.viewport, Viewport::new(414.0, 900.0));
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.resize_to, [320.0]);

        let config = DemoConfig::resolve(cli(&["--config", path, "--resize-to", "500"]))
            .expect("valid");
        assert_eq!(config.resize_to, [500.0]);
    }

    #[test]
    fn repeated_resize_flags_accumulate() {
        let config = DemoConfig::resolve(cli(&["--resize-to", "500", "--resize-to", "700"]))
            .expect("valid");
        assert_eq!(config.resize_to, [500.0, 700.0]);
    }

    #[test]
    fn rejects_non_positive_viewports() {
        let err = DemoConfig::resolve(cli(&["--width", "0"])).expect_err("zero width");
        assert!(matches!(err, DemoError::InvalidViewport { .. }));
        let err = DemoConfig::resolve(cli(&["--resize-to", "0"])).expect_err("zero resize");
        assert!(matches!(err, DemoError::InvalidViewport { .. }));
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        let err = FileConfig::load(&missing).expect_err("missing file");
        assert!(matches!(err, DemoError::ConfigRead { .. }));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "colour = \"blue\"\n").expect("write config");
        let err = FileConfig::load(&bad).expect_err("unknown key");
        assert!(matches!(err, DemoError::ConfigParse { .. }));
    }
}
