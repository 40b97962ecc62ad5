//! Batch ticket purchases.
//!
//! A purchase validates the user's ticket once, then performs N independent
//! draws against it. Either all N draws happen or, for an invalid ticket,
//! none do.

use displaydoc::Display;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::history::TicketHistory;
use crate::score::evaluate;
use crate::tally::Tally;
use crate::ticket::{DrawMode, Ticket, TicketError};
use crate::tier::PrizeTier;

/// Price of one ticket in dollars.
pub const TICKET_PRICE: u64 = 2;

/// Upper bound on tickets bought in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 99_999;

/// Upper bound on the configurable ticket price.
pub const MAX_TICKET_PRICE: u64 = 1_000_000;

/// Purchase failures.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum PurchaseError {
    /// Invalid ticket: {0}
    InvalidTicket(#[source] TicketError),
}

/// Parameters that apply to every draw in a purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseConfig {
    /// Cost of a single ticket.
    /// Default: 2
    pub ticket_price: u64,

    /// How winning main numbers are generated.
    pub draw_mode: DrawMode,

    /// Ceiling applied to the requested ticket count.
    /// Default: 99,999
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            ticket_price: TICKET_PRICE,
            draw_mode: DrawMode::default(),
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
        }
    }
}

/// Clamp a requested ticket count into `1..=ceiling`.
pub fn clamp_ticket_count(requested: u32, ceiling: u32) -> u32 {
    requested.clamp(1, ceiling.max(1))
}

/// Clamp a ticket price into `1..=MAX_TICKET_PRICE`.
pub fn clamp_ticket_price(price: u64) -> u64 {
    price.clamp(1, MAX_TICKET_PRICE)
}

/// Result of one batch purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseOutcome {
    /// Tickets actually drawn (after clamping).
    pub tickets: u32,
    /// `tickets * ticket_price`.
    pub cost: u64,
    /// Sum of prizes over every draw.
    pub winnings: u64,
    /// Winning ticket of the final draw.
    pub last_ticket: Ticket,
    /// Every winning draw of this purchase, in draw order.
    pub wins: Vec<(PrizeTier, Ticket)>,
}

impl PurchaseOutcome {
    /// Biggest tier hit in this purchase.
    pub fn best_tier(&self) -> Option<PrizeTier> {
        self.wins.iter().map(|(tier, _)| *tier).min()
    }
}

/// Buy `count` tickets for `user`.
///
/// The count is clamped to `1..=config.max_tickets_per_purchase`. On an
/// invalid ticket nothing is drawn and neither `tally` nor `history` is
/// modified.
pub fn purchase<R: Rng + ?Sized>(
    user: &Ticket,
    count: u32,
    rng: &mut R,
    tally: &mut Tally,
    history: &mut TicketHistory,
    config: &PurchaseConfig,
) -> Result<PurchaseOutcome, PurchaseError> {
    user.validate().map_err(PurchaseError::InvalidTicket)?;

    let tickets = clamp_ticket_count(count, config.max_tickets_per_purchase);
    let mut winnings = 0u64;
    let mut wins = Vec::new();

    let mut draw = |rng: &mut R| {
        let winning = Ticket::random(rng, config.draw_mode);
        let evaluation = evaluate(user, &winning);
        if let Some(tier) = evaluation.tier {
            tally.record(tier);
            winnings = winnings.saturating_add(evaluation.prize);
            wins.push((tier, winning.clone()));
        }
        history.push(winning.clone());
        winning
    };

    let mut last_ticket = draw(rng);
    for _ in 1..tickets {
        last_ticket = draw(rng);
    }

    debug!(tickets, winnings, wins = wins.len(), "purchase complete");

    Ok(PurchaseOutcome {
        tickets,
        cost: u64::from(tickets).saturating_mul(config.ticket_price),
        winnings,
        last_ticket,
        wins,
    })
}
