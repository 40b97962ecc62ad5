// Copyright (c) 2024 Botho Foundation

//! Export of the net-gain series for external plotting.
//!
//! `.csv` paths get an `x,y` table; anything else gets JSON of the form
//! `{"x_label": .., "y_label": .., "points": [{"x": .., "y": ..}]}`.

use anyhow::{Context, Result};
use pbs_draw::ChartSeries;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Json,
    Csv,
}

impl ChartFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub fn to_json(series: &ChartSeries) -> Result<String> {
    serde_json::to_string_pretty(series).context("Failed to serialize chart series")
}

pub fn to_csv(series: &ChartSeries) -> String {
    let mut out = String::from("x,y\n");
    for point in series.points() {
        let _ = writeln!(out, "{},{}", point.x, point.y);
    }
    out
}

/// Write `series` to `path` in the format implied by its extension.
pub fn export(series: &ChartSeries, path: &Path) -> Result<()> {
    let contents = match ChartFormat::from_path(path) {
        ChartFormat::Json => to_json(series)?,
        ChartFormat::Csv => to_csv(series),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    info!(points = series.len(), "Chart written to {}", path.display());
    Ok(())
}
