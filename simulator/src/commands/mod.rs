//! CLI command implementations.
//!
//! These modules implement the user-facing CLI commands and legitimately
//! use stdout for output.
#![allow(clippy::print_stdout)]

pub mod auto;
pub mod buy;
pub mod init;
pub mod interactive;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pbs_draw::{DrawMode, Session, SessionConfig, Ticket};
use tracing::debug;

use crate::chart;
use crate::config::Config;

/// Options shared by every command that plays a session
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Ticket to play, e.g. "1,2,3,4,5/6" (main numbers / Powerball)
    #[arg(short, long)]
    pub ticket: Option<Ticket>,

    /// Tickets bought per purchase (clamped to 1..=99999)
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// How winning numbers are drawn: distinct or independent
    #[arg(long)]
    pub draw_mode: Option<DrawMode>,

    /// Write the net-gain series here when done (.json or .csv)
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

impl SessionArgs {
    /// Merge the config file with command-line overrides
    pub fn session_config(&self, config: &Config) -> SessionConfig {
        let mut session_config = config.session_config();
        if let Some(ticket) = &self.ticket {
            session_config.ticket = ticket.clone();
        }
        if let Some(count) = self.count {
            session_config.tickets_per_purchase = pbs_draw::clamp_ticket_count(
                count,
                session_config.purchase.max_tickets_per_purchase,
            );
        }
        if let Some(mode) = self.draw_mode {
            session_config.purchase.draw_mode = mode;
        }
        session_config
    }

    /// Build a session from the config file plus overrides
    pub fn build_session(&self, config: &Config) -> Session {
        let seed = self.seed.or(config.seed);
        let session_config = self.session_config(config);
        debug!(?seed, ticket = %session_config.ticket, "Starting session");
        Session::with_seed(session_config, seed)
    }

    /// Write the chart if `--chart` was given
    pub fn export_chart(&self, session: &Session) -> Result<()> {
        match &self.chart {
            Some(path) => chart::export(session.chart(), path),
            None => Ok(()),
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("\x1b[32m{}\x1b[0m", message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("\x1b[33mWarning:\x1b[0m {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let mut config = Config::default();
        config.purchase.tickets_per_purchase = 3;

        let args = SessionArgs {
            ticket: Some(Ticket::new([10, 20, 30, 40, 50], 1)),
            count: Some(500_000),
            draw_mode: Some(DrawMode::Independent),
            ..Default::default()
        };
        let session_config = args.session_config(&config);

        assert_eq!(session_config.ticket, Ticket::new([10, 20, 30, 40, 50], 1));
        assert_eq!(session_config.tickets_per_purchase, 99_999);
        assert_eq!(session_config.purchase.draw_mode, DrawMode::Independent);
    }

    #[test]
    fn test_config_used_without_overrides() {
        let mut config = Config::default();
        config.purchase.tickets_per_purchase = 3;
        let session_config = SessionArgs::default().session_config(&config);
        assert_eq!(session_config.tickets_per_purchase, 3);
        assert_eq!(session_config.ticket, Ticket::default());
    }
}
