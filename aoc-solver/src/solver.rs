//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parsing half of a day module
///
/// `SharedData` is what both parts work on. It may borrow from the input (`&'a str`,
/// `Vec<&'a str>`) or own a parsed structure, and it may hold intermediate results that
/// part two reuses from part one.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    /// Parse the raw puzzle input
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a day module
///
/// The const generic `N` is the part number, so a missing part is a compile error at the
/// dispatch site generated by `#[derive(AocSolver)]`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = Depths::parse("199\n200\n208\n210\n200").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut depths).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day module: parsing plus dispatch over its parts
///
/// Usually derived with `#[derive(AocSolver)]`, which routes `solve_part(shared, n)` to
/// `<Self as PartSolver<n>>::solve`. Hand-written implementations look like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Floors {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 let up = shared.chars().filter(|&c| c == '(').count() as i64;
///                 let down = shared.chars().filter(|&c| c == ')').count() as i64;
///                 Ok((up - down).to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Floors::parse("(((").unwrap();
/// assert_eq!(Floors::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by solver instances
pub trait SolverExt: Solver {
    /// Like `solve_part`, but rejects `0` and anything above `PARTS` with `PartOutOfRange`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
