//! Prize tiers.
//!
//! | Main matches | Bonus | Tier          | Prize       |
//! |--------------|-------|---------------|-------------|
//! | 5            | yes   | Jackpot       | 250,000,000 |
//! | 5            | no    | Match 5       | 1,000,000   |
//! | 4            | yes   | Match 4 + PB  | 50,000      |
//! | 4            | no    | Match 4       | 100         |
//! | 3            | yes   | Match 3 + PB  | 100         |
//! | 3            | no    | Match 3       | 7           |
//! | 2            | yes   | Match 2 + PB  | 7           |
//! | 1            | yes   | Match 1 + PB  | 4           |
//! | 0            | yes   | PB only       | 4           |
//!
//! Every other combination wins nothing and has no tier.

/// Number of prize tiers.
pub const TIER_COUNT: usize = 9;

/// One of the nine prize brackets, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrizeTier {
    Jackpot,
    Match5,
    Match4Bonus,
    Match4,
    Match3Bonus,
    Match3,
    Match2Bonus,
    Match1Bonus,
    BonusOnly,
}

impl PrizeTier {
    /// All tiers in table order.
    pub const ALL: [PrizeTier; TIER_COUNT] = [
        PrizeTier::Jackpot,
        PrizeTier::Match5,
        PrizeTier::Match4Bonus,
        PrizeTier::Match4,
        PrizeTier::Match3Bonus,
        PrizeTier::Match3,
        PrizeTier::Match2Bonus,
        PrizeTier::Match1Bonus,
        PrizeTier::BonusOnly,
    ];

    /// Map a (main matches, bonus matched) pair to its tier.
    ///
    /// Returns `None` for the losing combinations: two, one or zero main
    /// matches without the bonus, and anything above five.
    pub fn classify(match_count: usize, bonus_matched: bool) -> Option<Self> {
        match (match_count, bonus_matched) {
            (5, true) => Some(Self::Jackpot),
            (5, false) => Some(Self::Match5),
            (4, true) => Some(Self::Match4Bonus),
            (4, false) => Some(Self::Match4),
            (3, true) => Some(Self::Match3Bonus),
            (3, false) => Some(Self::Match3),
            (2, true) => Some(Self::Match2Bonus),
            (1, true) => Some(Self::Match1Bonus),
            (0, true) => Some(Self::BonusOnly),
            _ => None,
        }
    }

    /// Prize amount in dollars.
    pub fn prize(self) -> u64 {
        match self {
            Self::Jackpot => 250_000_000,
            Self::Match5 => 1_000_000,
            Self::Match4Bonus => 50_000,
            Self::Match4 => 100,
            Self::Match3Bonus => 100,
            Self::Match3 => 7,
            Self::Match2Bonus => 7,
            Self::Match1Bonus => 4,
            Self::BonusOnly => 4,
        }
    }

    /// Position in [`PrizeTier::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Jackpot => "Jackpot",
            Self::Match5 => "Match 5",
            Self::Match4Bonus => "Match 4 + Powerball",
            Self::Match4 => "Match 4",
            Self::Match3Bonus => "Match 3 + Powerball",
            Self::Match3 => "Match 3",
            Self::Match2Bonus => "Match 2 + Powerball",
            Self::Match1Bonus => "Match 1 + Powerball",
            Self::BonusOnly => "Powerball only",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_full_table() {
        let expected = [
            (5, true, Some(PrizeTier::Jackpot), 250_000_000),
            (5, false, Some(PrizeTier::Match5), 1_000_000),
            (4, true, Some(PrizeTier::Match4Bonus), 50_000),
            (4, false, Some(PrizeTier::Match4), 100),
            (3, true, Some(PrizeTier::Match3Bonus), 100),
            (3, false, Some(PrizeTier::Match3), 7),
            (2, true, Some(PrizeTier::Match2Bonus), 7),
            (2, false, None, 0),
            (1, true, Some(PrizeTier::Match1Bonus), 4),
            (1, false, None, 0),
            (0, true, Some(PrizeTier::BonusOnly), 4),
            (0, false, None, 0),
        ];

        for (matches, bonus, tier, prize) in expected {
            let got = PrizeTier::classify(matches, bonus);
            assert_eq!(got, tier, "classify({matches}, {bonus})");
            assert_eq!(got.map(PrizeTier::prize).unwrap_or(0), prize);
        }
    }

    #[test]
    fn test_classify_out_of_range_count() {
        assert_eq!(PrizeTier::classify(6, true), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, tier) in PrizeTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn test_tiers_ordered_best_first() {
        assert!(PrizeTier::Jackpot < PrizeTier::Match5);
        assert!(PrizeTier::ALL.windows(2).all(|w| w[0].prize() >= w[1].prize()));
    }
}
