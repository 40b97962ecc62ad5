//! Scoring a user ticket against a winning ticket.

use crate::tally::Tally;
use crate::ticket::Ticket;
use crate::tier::PrizeTier;

/// Outcome of comparing one user ticket with one winning ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawEvaluation {
    /// User main numbers found among the winning main numbers (0-5).
    pub match_count: usize,
    /// Whether the bonus numbers are equal.
    pub bonus_matched: bool,
    /// Tier won, if any.
    pub tier: Option<PrizeTier>,
    /// Prize in dollars; 0 when `tier` is `None`.
    pub prize: u64,
}

/// Compare `user` against `winning` without touching any counters.
pub fn evaluate(user: &Ticket, winning: &Ticket) -> DrawEvaluation {
    let match_count = user.matches_in(winning);
    let bonus_matched = user.bonus == winning.bonus;
    let tier = PrizeTier::classify(match_count, bonus_matched);

    DrawEvaluation {
        match_count,
        bonus_matched,
        tier,
        prize: tier.map(PrizeTier::prize).unwrap_or(0),
    }
}

/// Score one draw: classify it, bump the matching tally counter and return the prize.
///
/// Losing draws leave the tally untouched.
pub fn score(user: &Ticket, winning: &Ticket, tally: &mut Tally) -> u64 {
    let evaluation = evaluate(user, winning);
    if let Some(tier) = evaluation.tier {
        tally.record(tier);
    }
    evaluation.prize
}
