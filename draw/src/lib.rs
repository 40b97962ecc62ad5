//! Powerball draw and scoring engine.
//!
//! This crate implements the rules of a 5/69 + 1/26 lottery and the
//! bookkeeping needed to simulate buying tickets over and over:
//!
//! 1. **Tickets**: five distinct main numbers in 1-69 and one bonus number in
//!    1-26. User tickets are validated before any draw.
//!
//! 2. **Scoring**: the number of user main numbers found among the winning
//!    main numbers, together with whether the bonus numbers match, selects one
//!    of nine prize tiers (or no prize).
//!
//! 3. **Purchases**: a batch of N independent draws against one user ticket,
//!    accumulating cost, winnings, a per-tier tally and a bounded history.
//!
//! ## Prize Table
//!
//! | Matches | Bonus | Prize       |
//! |---------|-------|-------------|
//! | 5       | yes   | 250,000,000 |
//! | 5       | no    | 1,000,000   |
//! | 4       | yes   | 50,000      |
//! | 4       | no    | 100         |
//! | 3       | yes   | 100         |
//! | 3       | no    | 7           |
//! | 2       | yes   | 7           |
//! | 1       | yes   | 4           |
//! | 0       | yes   | 4           |
//!
//! ## State
//!
//! Scoring and purchasing hold no state of their own. Totals, tally and
//! history live in a caller-owned [`Session`] (or in whatever the caller
//! passes to [`purchase`]).

pub mod chart;
pub mod history;
pub mod purchase;
pub mod session;

mod score;
mod tally;
mod ticket;
mod tier;

pub use chart::{ChartPoint, ChartSeries, MAX_CHART_POINTS};
pub use history::{TicketHistory, MAX_HISTORY_SIZE};
pub use purchase::{
    clamp_ticket_count, clamp_ticket_price, purchase, PurchaseConfig, PurchaseError,
    PurchaseOutcome, MAX_TICKETS_PER_PURCHASE, MAX_TICKET_PRICE, TICKET_PRICE,
};
pub use score::{evaluate, score, DrawEvaluation};
pub use session::{
    clamp_interval, Session, SessionConfig, SessionStats, DEFAULT_AUTO_INTERVAL,
    MAX_AUTO_INTERVAL, MIN_AUTO_INTERVAL, TICKETS_PER_YEAR,
};
pub use tally::Tally;
pub use ticket::{
    DrawMode, Ticket, TicketError, BONUS_NUMBER_MAX, MAIN_NUMBER_COUNT, MAIN_NUMBER_MAX,
    MIN_NUMBER,
};
pub use tier::{PrizeTier, TIER_COUNT};
