// Copyright (c) 2024 Botho Foundation

//! Simulator configuration file.
//!
//! ```toml
//! seed = 42              # optional; omit for an entropy-seeded RNG
//!
//! [ticket]
//! numbers = [1, 2, 3, 4, 5]
//! bonus = 6
//!
//! [purchase]
//! ticket_price = 2
//! tickets_per_purchase = 1
//! max_tickets_per_purchase = 99999
//! draw_mode = "distinct"  # or "independent"
//!
//! [auto]
//! interval_ms = 3000
//!
//! [display]
//! history_size = 100
//! chart_points = 1000
//! ```

use anyhow::{Context, Result};
use pbs_draw::{
    clamp_interval, clamp_ticket_count, clamp_ticket_price, DrawMode, PurchaseConfig,
    SessionConfig, Ticket, DEFAULT_AUTO_INTERVAL, MAX_CHART_POINTS, MAX_HISTORY_SIZE,
    MAX_TICKETS_PER_PURCHASE, TICKET_PRICE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Main configuration for the simulator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// RNG seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub ticket: TicketConfig,

    #[serde(default)]
    pub purchase: PurchaseSection,

    #[serde(default)]
    pub auto: AutoConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// The ticket played each purchase. Not validated here; an invalid ticket is
/// reported when a purchase is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketConfig {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<u32>,

    #[serde(default = "default_bonus")]
    pub bonus: u32,
}

fn default_numbers() -> Vec<u32> {
    Ticket::default().numbers
}

fn default_bonus() -> u32 {
    Ticket::default().bonus
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            bonus: default_bonus(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseSection {
    /// Dollars per ticket (clamped to 1..=1,000,000)
    #[serde(default = "default_ticket_price")]
    pub ticket_price: u64,

    /// Tickets bought per purchase (clamped to 1..=max_tickets_per_purchase)
    #[serde(default = "default_tickets_per_purchase")]
    pub tickets_per_purchase: u32,

    #[serde(default = "default_max_tickets")]
    pub max_tickets_per_purchase: u32,

    #[serde(default)]
    pub draw_mode: DrawMode,
}

fn default_ticket_price() -> u64 {
    TICKET_PRICE
}

fn default_tickets_per_purchase() -> u32 {
    1
}

fn default_max_tickets() -> u32 {
    MAX_TICKETS_PER_PURCHASE
}

impl Default for PurchaseSection {
    fn default() -> Self {
        Self {
            ticket_price: default_ticket_price(),
            tickets_per_purchase: default_tickets_per_purchase(),
            max_tickets_per_purchase: default_max_tickets(),
            draw_mode: DrawMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoConfig {
    /// Milliseconds between automatic purchases (clamped to 1ms..=1h)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    DEFAULT_AUTO_INTERVAL.as_millis() as u64
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
}

fn default_history_size() -> usize {
    MAX_HISTORY_SIZE
}

fn default_chart_points() -> usize {
    MAX_CHART_POINTS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            chart_points: default_chart_points(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load config from a file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if Self::exists(path) {
            Self::load(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Check if config file exists
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Session settings with every numeric value clamped into range
    pub fn session_config(&self) -> SessionConfig {
        let max_tickets = self.purchase.max_tickets_per_purchase.max(1);

        SessionConfig {
            ticket: Ticket::new(self.ticket.numbers.clone(), self.ticket.bonus),
            tickets_per_purchase: clamp_ticket_count(
                self.purchase.tickets_per_purchase,
                max_tickets,
            ),
            auto_interval: clamp_interval(Duration::from_millis(self.auto.interval_ms)),
            history_size: self.display.history_size.max(1),
            chart_points: self.display.chart_points.max(1),
            purchase: PurchaseConfig {
                ticket_price: clamp_ticket_price(self.purchase.ticket_price),
                draw_mode: self.purchase.draw_mode,
                max_tickets_per_purchase: max_tickets,
            },
        }
    }
}

/// Get the default config directory path
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pbs")
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}
