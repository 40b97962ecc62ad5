//! Session state: the user's ticket, settings and running totals.
//!
//! The engine functions in this crate are stateless; a [`Session`] owns
//! everything that accumulates while a user plays and threads it through
//! [`purchase`] on every buy.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::chart::{ChartSeries, MAX_CHART_POINTS};
use crate::history::{TicketHistory, MAX_HISTORY_SIZE};
use crate::purchase::{
    clamp_ticket_count, clamp_ticket_price, purchase, PurchaseConfig, PurchaseError,
    PurchaseOutcome,
};
use crate::tally::Tally;
use crate::ticket::Ticket;

/// Shortest auto-purchase interval.
pub const MIN_AUTO_INTERVAL: Duration = Duration::from_millis(1);

/// Longest auto-purchase interval.
pub const MAX_AUTO_INTERVAL: Duration = Duration::from_secs(3600);

/// Default auto-purchase interval.
pub const DEFAULT_AUTO_INTERVAL: Duration = Duration::from_millis(3000);

/// Tickets per year when playing both weekly drawings.
pub const TICKETS_PER_YEAR: u64 = 52 * 2;

/// Prizes at or above this amount are logged.
const NOTABLE_PRIZE: u64 = 50_000;

/// Clamp an auto-purchase interval into the supported range.
pub fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_AUTO_INTERVAL, MAX_AUTO_INTERVAL)
}

/// `won - spent`, saturating at the bounds of `i64`.
fn net_gain(won: u64, spent: u64) -> i64 {
    let net = i128::from(won) - i128::from(spent);
    net.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// User-adjustable session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// The ticket played on every purchase.
    pub ticket: Ticket,
    /// Tickets bought per purchase (manual or automatic).
    pub tickets_per_purchase: u32,
    /// Period of the auto-purchase timer.
    pub auto_interval: Duration,
    /// Winning tickets kept for display.
    pub history_size: usize,
    /// Points kept in the net-gain chart.
    pub chart_points: usize,
    /// Price, draw mode and per-purchase ceiling.
    pub purchase: PurchaseConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ticket: Ticket::default(),
            tickets_per_purchase: 1,
            auto_interval: DEFAULT_AUTO_INTERVAL,
            history_size: MAX_HISTORY_SIZE,
            chart_points: MAX_CHART_POINTS,
            purchase: PurchaseConfig::default(),
        }
    }
}

/// Derived statistics for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStats {
    pub money_spent: u64,
    pub money_won: u64,
    /// `money_won - money_spent`.
    pub net_gain: i64,
    /// `money_won / money_spent` as a percentage; 0 before the first purchase.
    pub winnings_percent: f64,
    /// Whole years it would take to buy this many tickets at two per week.
    pub years: u64,
    pub tickets_bought: u64,
}

/// One user's simulation session.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    config: SessionConfig,
    rng: R,
    money_spent: u64,
    money_won: u64,
    tickets_bought: u64,
    tally: Tally,
    history: TicketHistory,
    last_winning: Option<Ticket>,
    last_purchase_valid: bool,
    chart: ChartSeries,
}

impl Session<StdRng> {
    /// Create a session with a seeded RNG, or an entropy-seeded one if `seed` is `None`.
    pub fn with_seed(config: SessionConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(mut config: SessionConfig, rng: R) -> Self {
        config.tickets_per_purchase = clamp_ticket_count(
            config.tickets_per_purchase,
            config.purchase.max_tickets_per_purchase,
        );
        config.auto_interval = clamp_interval(config.auto_interval);
        config.purchase.ticket_price = clamp_ticket_price(config.purchase.ticket_price);

        let history = TicketHistory::new(config.history_size);
        let chart = ChartSeries::new("Tickets bought", "Net gain ($)", config.chart_points);

        Self {
            config,
            rng,
            money_spent: 0,
            money_won: 0,
            tickets_bought: 0,
            tally: Tally::new(),
            history,
            last_winning: None,
            last_purchase_valid: true,
            chart,
        }
    }

    /// Buy the configured number of tickets.
    pub fn buy(&mut self) -> Result<PurchaseOutcome, PurchaseError> {
        self.buy_tickets(self.config.tickets_per_purchase)
    }

    /// Buy `count` tickets (clamped) and fold the result into the totals.
    ///
    /// An invalid ticket only flips [`Session::last_purchase_valid`] to false.
    pub fn buy_tickets(&mut self, count: u32) -> Result<PurchaseOutcome, PurchaseError> {
        let result = purchase(
            &self.config.ticket,
            count,
            &mut self.rng,
            &mut self.tally,
            &mut self.history,
            &self.config.purchase,
        );

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(ticket = %self.config.ticket, "Purchase rejected: {}", e);
                self.last_purchase_valid = false;
                return Err(e);
            }
        };

        self.last_purchase_valid = true;
        self.money_spent = self.money_spent.saturating_add(outcome.cost);
        self.money_won = self.money_won.saturating_add(outcome.winnings);
        self.tickets_bought = self.tickets_bought.saturating_add(u64::from(outcome.tickets));
        self.last_winning = Some(outcome.last_ticket.clone());

        for (tier, ticket) in &outcome.wins {
            if tier.prize() >= NOTABLE_PRIZE {
                info!(tier = tier.label(), prize = tier.prize(), %ticket, "Big win");
            }
        }

        let stats = self.stats();
        self.chart
            .push(stats.tickets_bought as f64, stats.net_gain as f64);

        Ok(outcome)
    }

    pub fn stats(&self) -> SessionStats {
        let winnings_percent = if self.money_spent == 0 {
            0.0
        } else {
            self.money_won as f64 / self.money_spent as f64 * 100.0
        };

        SessionStats {
            money_spent: self.money_spent,
            money_won: self.money_won,
            net_gain: net_gain(self.money_won, self.money_spent),
            winnings_percent,
            years: self.tickets_bought / TICKETS_PER_YEAR,
            tickets_bought: self.tickets_bought,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn ticket(&self) -> &Ticket {
        &self.config.ticket
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn history(&self) -> &TicketHistory {
        &self.history
    }

    pub fn chart(&self) -> &ChartSeries {
        &self.chart
    }

    /// Winning ticket of the most recent successful purchase.
    pub fn last_winning(&self) -> Option<&Ticket> {
        self.last_winning.as_ref()
    }

    /// False after a purchase was rejected, until the next successful one.
    pub fn last_purchase_valid(&self) -> bool {
        self.last_purchase_valid
    }

    pub fn tickets_per_purchase(&self) -> u32 {
        self.config.tickets_per_purchase
    }

    pub fn auto_interval(&self) -> Duration {
        self.config.auto_interval
    }

    /// Replace the played ticket. Validity is checked at purchase time.
    pub fn set_ticket(&mut self, ticket: Ticket) {
        self.config.ticket = ticket;
    }

    /// Set main number `index` (0-based). Returns false if `index` is past the end.
    pub fn set_number(&mut self, index: usize, value: u32) -> bool {
        match self.config.ticket.numbers.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn set_bonus(&mut self, value: u32) {
        self.config.ticket.bonus = value;
    }

    /// Set tickets per purchase, clamped; returns the value actually stored.
    pub fn set_tickets_per_purchase(&mut self, count: u32) -> u32 {
        self.config.tickets_per_purchase =
            clamp_ticket_count(count, self.config.purchase.max_tickets_per_purchase);
        self.config.tickets_per_purchase
    }

    /// Set the auto-purchase interval, clamped; returns the value actually stored.
    pub fn set_auto_interval(&mut self, interval: Duration) -> Duration {
        self.config.auto_interval = clamp_interval(interval);
        self.config.auto_interval
    }

    /// Zero totals, tally, history and chart. Settings are kept.
    pub fn reset(&mut self) {
        self.money_spent = 0;
        self.money_won = 0;
        self.tickets_bought = 0;
        self.tally.reset();
        self.history.clear();
        self.last_winning = None;
        self.last_purchase_valid = true;
        self.chart.clear();
    }
}
