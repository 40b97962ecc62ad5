//! Per-tier win counters.

use crate::tier::{PrizeTier, TIER_COUNT};

/// Win counts for each prize tier, accumulated over a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    counts: [u64; TIER_COUNT],
}

impl Tally {
    /// Create an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one win in `tier`.
    pub fn record(&mut self, tier: PrizeTier) {
        self.counts[tier.index()] += 1;
    }

    /// Wins recorded for `tier`.
    pub fn count(&self, tier: PrizeTier) -> u64 {
        self.counts[tier.index()]
    }

    /// Wins across every tier.
    pub fn total_wins(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(tier, count)` pairs in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (PrizeTier, u64)> + '_ {
        PrizeTier::ALL.iter().map(|&tier| (tier, self.count(tier)))
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.counts = [0; TIER_COUNT];
    }
}
