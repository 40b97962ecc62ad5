//! Tickets: the user's pick and the randomly drawn winning numbers.
//!
//! A ticket is five main numbers in `1..=69` plus one bonus number in `1..=26`.
//! Values are stored as `u32` so that anything a user types can be held and
//! then rejected by [`Ticket::validate`] instead of failing to parse.

use std::fmt;
use std::str::FromStr;

use displaydoc::Display;
use rand::Rng;
use thiserror::Error;

/// Number of main numbers on a ticket.
pub const MAIN_NUMBER_COUNT: usize = 5;

/// Smallest value for both main and bonus numbers.
pub const MIN_NUMBER: u32 = 1;

/// Largest main number.
pub const MAIN_NUMBER_MAX: u32 = 69;

/// Largest bonus number.
pub const BONUS_NUMBER_MAX: u32 = 26;

/// Reasons a ticket is rejected.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum TicketError {
    /// Expected 5 main numbers, got {0}
    WrongCount(usize),

    /// Main number {0} is outside 1..=69
    MainOutOfRange(u32),

    /// Main number {0} appears more than once
    DuplicateMain(u32),

    /// Bonus number {0} is outside 1..=26
    BonusOutOfRange(u32),

    /// Could not parse ticket: {0}
    Parse(String),
}

/// How the main numbers of a winning ticket are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DrawMode {
    /// Five distinct numbers, like a physical ball machine.
    #[default]
    Distinct,

    /// Five independent draws; the same number may come up twice.
    Independent,
}

impl FromStr for DrawMode {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distinct" => Ok(Self::Distinct),
            "independent" => Ok(Self::Independent),
            other => Err(TicketError::Parse(format!("unknown draw mode '{other}'"))),
        }
    }
}

/// A lottery ticket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    /// Main numbers, in the order they were entered or drawn.
    pub numbers: Vec<u32>,
    /// Bonus ("Powerball") number.
    pub bonus: u32,
}

impl Ticket {
    /// Create a ticket without validating it.
    pub fn new(numbers: impl Into<Vec<u32>>, bonus: u32) -> Self {
        Self {
            numbers: numbers.into(),
            bonus,
        }
    }

    /// Draw a random ticket.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, mode: DrawMode) -> Self {
        let numbers = match mode {
            DrawMode::Distinct => {
                rand::seq::index::sample(rng, MAIN_NUMBER_MAX as usize, MAIN_NUMBER_COUNT)
                    .into_iter()
                    .map(|i| i as u32 + MIN_NUMBER)
                    .collect()
            }
            DrawMode::Independent => (0..MAIN_NUMBER_COUNT)
                .map(|_| rng.gen_range(MIN_NUMBER..=MAIN_NUMBER_MAX))
                .collect(),
        };
        let bonus = rng.gen_range(MIN_NUMBER..=BONUS_NUMBER_MAX);

        Self { numbers, bonus }
    }

    /// Check the ticket against the game rules.
    ///
    /// Rules are checked in a fixed order (count, range, duplicates, bonus)
    /// and the first violation is returned.
    pub fn validate(&self) -> Result<(), TicketError> {
        if self.numbers.len() != MAIN_NUMBER_COUNT {
            return Err(TicketError::WrongCount(self.numbers.len()));
        }

        if let Some(&n) = self
            .numbers
            .iter()
            .find(|&&n| !(MIN_NUMBER..=MAIN_NUMBER_MAX).contains(&n))
        {
            return Err(TicketError::MainOutOfRange(n));
        }

        let mut seen = [false; MAIN_NUMBER_MAX as usize + 1];
        for &n in &self.numbers {
            if seen[n as usize] {
                return Err(TicketError::DuplicateMain(n));
            }
            seen[n as usize] = true;
        }

        if !(MIN_NUMBER..=BONUS_NUMBER_MAX).contains(&self.bonus) {
            return Err(TicketError::BonusOutOfRange(self.bonus));
        }

        Ok(())
    }

    /// Boolean form of [`Ticket::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// How many of this ticket's main numbers appear in `other`'s.
    pub fn matches_in(&self, other: &Ticket) -> usize {
        self.numbers
            .iter()
            .filter(|n| other.numbers.contains(n))
            .count()
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self::new([1, 2, 3, 4, 5], 6)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{} | PB {}", numbers.join(", "), self.bonus)
    }
}

/// Parses `"1,2,3,4,5/6"`. Main numbers may be separated by commas or spaces.
///
/// Parsing does not validate; `"1,1,2/99"` parses to an invalid ticket.
impl FromStr for Ticket {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (main, bonus) = s
            .split_once('/')
            .ok_or_else(|| TicketError::Parse(format!("missing '/' before bonus in '{s}'")))?;

        let numbers = main
            .split([',', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| TicketError::Parse(format!("'{part}' is not a number")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bonus = bonus.trim();
        let bonus = bonus
            .parse::<u32>()
            .map_err(|_| TicketError::Parse(format!("'{bonus}' is not a number")))?;

        Ok(Self { numbers, bonus })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_ticket_is_valid() {
        assert!(Ticket::default().is_valid());
    }

    #[test]
    fn test_validate_rejects_wrong_count() {
        assert_eq!(
            Ticket::new([1, 2, 3, 4], 6).validate(),
            Err(TicketError::WrongCount(4))
        );
        assert_eq!(
            Ticket::new([1, 2, 3, 4, 5, 7], 6).validate(),
            Err(TicketError::WrongCount(6))
        );
        assert_eq!(
            Ticket::new(Vec::new(), 6).validate(),
            Err(TicketError::WrongCount(0))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_main() {
        assert_eq!(
            Ticket::new([0, 2, 3, 4, 5], 6).validate(),
            Err(TicketError::MainOutOfRange(0))
        );
        assert_eq!(
            Ticket::new([1, 2, 3, 4, 70], 6).validate(),
            Err(TicketError::MainOutOfRange(70))
        );
        assert_eq!(
            Ticket::new([1, 2, 3, 4, u32::MAX], 6).validate(),
            Err(TicketError::MainOutOfRange(u32::MAX))
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let ticket = Ticket::new([1, 1, 2, 3, 4], 6);
        assert_eq!(ticket.validate(), Err(TicketError::DuplicateMain(1)));
        assert!(!ticket.is_valid());
    }

    #[test]
    fn test_validate_rejects_bad_bonus() {
        assert_eq!(
            Ticket::new([1, 2, 3, 4, 5], 0).validate(),
            Err(TicketError::BonusOutOfRange(0))
        );
        assert_eq!(
            Ticket::new([1, 2, 3, 4, 5], 27).validate(),
            Err(TicketError::BonusOutOfRange(27))
        );
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        assert!(Ticket::new([1, 69, 2, 68, 35], 1).is_valid());
        assert!(Ticket::new([69, 68, 67, 66, 65], 26).is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let good = Ticket::default();
        let bad = Ticket::new([1, 1, 2, 3, 4], 6);
        for _ in 0..10 {
            assert!(good.is_valid());
            assert!(!bad.is_valid());
        }
    }

    #[test]
    fn test_random_distinct_tickets_are_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let ticket = Ticket::random(&mut rng, DrawMode::Distinct);
            assert!(ticket.is_valid(), "generated invalid ticket {ticket}");
        }
    }

    #[test]
    fn test_random_independent_tickets_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut saw_duplicate = false;
        for _ in 0..5000 {
            let ticket = Ticket::random(&mut rng, DrawMode::Independent);
            assert_eq!(ticket.numbers.len(), MAIN_NUMBER_COUNT);
            assert!(ticket
                .numbers
                .iter()
                .all(|n| (MIN_NUMBER..=MAIN_NUMBER_MAX).contains(n)));
            assert!((MIN_NUMBER..=BONUS_NUMBER_MAX).contains(&ticket.bonus));
            if matches!(ticket.validate(), Err(TicketError::DuplicateMain(_))) {
                saw_duplicate = true;
            }
        }
        // P(no duplicate in 5 of 69) is ~0.86, so 5000 draws all distinct is impossible in practice
        assert!(saw_duplicate);
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                Ticket::random(&mut a, DrawMode::Distinct),
                Ticket::random(&mut b, DrawMode::Distinct)
            );
        }
    }

    #[test]
    fn test_matches_in_counts_membership() {
        let user = Ticket::new([1, 2, 3, 4, 5], 6);
        assert_eq!(user.matches_in(&Ticket::new([5, 4, 3, 2, 1], 1)), 5);
        assert_eq!(user.matches_in(&Ticket::new([1, 2, 3, 99, 98], 7)), 3);
        assert_eq!(user.matches_in(&Ticket::new([10, 20, 30, 40, 50], 6)), 0);
        // Repeated winning numbers still count each user number once
        assert_eq!(user.matches_in(&Ticket::new([1, 1, 1, 1, 1], 6)), 1);
    }

    #[test]
    fn test_parse_ticket() {
        let ticket: Ticket = "1,2,3,4,5/6".parse().unwrap();
        assert_eq!(ticket, Ticket::new([1, 2, 3, 4, 5], 6));

        let ticket: Ticket = "10 20 30 40 50 / 26".parse().unwrap();
        assert_eq!(ticket, Ticket::new([10, 20, 30, 40, 50], 26));

        // Parses but does not validate
        let ticket: Ticket = "1,1,2/99".parse().unwrap();
        assert!(!ticket.is_valid());
    }

    #[test]
    fn test_parse_ticket_errors() {
        assert!(matches!("1,2,3,4,5".parse::<Ticket>(), Err(TicketError::Parse(_))));
        assert!(matches!("1,x,3,4,5/6".parse::<Ticket>(), Err(TicketError::Parse(_))));
        assert!(matches!("1,2,3,4,5/".parse::<Ticket>(), Err(TicketError::Parse(_))));
        assert!(matches!("-1,2,3,4,5/6".parse::<Ticket>(), Err(TicketError::Parse(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ticket::default().to_string(), "1, 2, 3, 4, 5 | PB 6");
    }

    #[test]
    fn test_draw_mode_parse() {
        assert_eq!("distinct".parse::<DrawMode>().unwrap(), DrawMode::Distinct);
        assert_eq!("Independent".parse::<DrawMode>().unwrap(), DrawMode::Independent);
        assert!("sometimes".parse::<DrawMode>().is_err());
    }
}
