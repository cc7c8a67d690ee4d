//! Puzzle identity and event calendar

use crate::error::InvalidPuzzle;
use std::fmt;

/// First year Advent of Code ran
pub const FIRST_YEAR: u16 = 2015;

/// Number of puzzle days in a given event year
///
/// Events up to 2024 ran for 25 days; from 2025 on the calendar has 12.
pub const fn days_in_year(year: u16) -> u8 {
    if year < 2025 { 25 } else { 12 }
}

/// URL of the event landing page for a year
pub fn event_url(year: u16) -> String {
    format!("https://adventofcode.com/{}", year)
}

/// Identity of a single puzzle: one year, one day
///
/// Ordering is by year, then day, which is also the order the runner reports results in.
///
/// # Example
///
/// ```
/// use aoc_solver::PuzzleId;
///
/// let id = PuzzleId::new(2015, 1).unwrap();
/// assert_eq!(id.to_string(), "2015/01");
/// assert_eq!(id.url(), "https://adventofcode.com/2015/day/1");
/// assert!(PuzzleId::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// Create a puzzle identity, validating the year and the day against the event calendar
    pub fn new(year: u16, day: u8) -> Result<Self, InvalidPuzzle> {
        if year < FIRST_YEAR || day == 0 || day > days_in_year(year) {
            return Err(InvalidPuzzle { year, day });
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Official problem page for this puzzle
    pub fn url(&self) -> String {
        format!("{}/day/{}", event_url(self.year), self.day)
    }

    /// Every puzzle of an event year, in day order
    pub fn all_in_year(year: u16) -> impl Iterator<Item = PuzzleId> {
        let last = if year < FIRST_YEAR { 0 } else { days_in_year(year) };
        (1..=last).map(move |day| PuzzleId { year, day })
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

impl TryFrom<(u16, u8)> for PuzzleId {
    type Error = InvalidPuzzle;

    fn try_from((year, day): (u16, u8)) -> Result<Self, Self::Error> {
        Self::new(year, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_length() {
        assert_eq!(days_in_year(2015), 25);
        assert_eq!(days_in_year(2024), 25);
        assert_eq!(days_in_year(2025), 12);
        assert_eq!(days_in_year(2099), 12);
    }

    #[test]
    fn test_rejects_out_of_calendar() {
        assert!(PuzzleId::new(2014, 1).is_err());
        assert!(PuzzleId::new(2015, 0).is_err());
        assert!(PuzzleId::new(2015, 26).is_err());
        assert!(PuzzleId::new(2025, 13).is_err());
        assert!(PuzzleId::new(2099, 1).is_ok());
    }

    #[test]
    fn test_ordering_is_year_then_day() {
        let a = PuzzleId::new(2015, 25).unwrap();
        let b = PuzzleId::new(2016, 1).unwrap();
        let c = PuzzleId::new(2016, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_all_in_year() {
        assert_eq!(PuzzleId::all_in_year(2020).count(), 25);
        assert_eq!(PuzzleId::all_in_year(2025).count(), 12);
        assert_eq!(PuzzleId::all_in_year(2010).count(), 0);
        let last = PuzzleId::all_in_year(2025).last().unwrap();
        assert_eq!(last.to_string(), "2025/12");
    }
}
