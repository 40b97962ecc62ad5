// Copyright (c) 2024 Botho Foundation

//! Powerball simulator host.
//!
//! Wraps the `pbs-draw` engine with everything a terminal user needs:
//! configuration, logging, an auto-purchase timer, rendering of the running
//! statistics and export of the net-gain chart series.

#![deny(clippy::print_stdout)]

pub mod chart;
pub mod config;
pub mod display;
pub mod scheduler;
pub mod shell;
pub mod telemetry;

// Re-export commands module for CLI binary
pub mod commands;
