//! Parsed, ready-to-solve puzzle instances

use crate::error::{ParseError, SolveError};
use crate::puzzle::PuzzleId;
use crate::solver::SolverExt;
use chrono::{DateTime, TimeDelta, Utc};

/// Answer to one part, with the wall-clock window it took to compute
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A day module bound to one parsed input
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on the same
/// `SharedData`, so a later part can pick up whatever an earlier part stored there.
pub struct SolverInstance<'a, S: SolverExt> {
    puzzle: PuzzleId,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    /// Parse `input` for `puzzle`, recording how long parsing took
    pub fn new(puzzle: PuzzleId, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            puzzle,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Borrow the shared data, mostly useful in tests
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view over any [`SolverInstance`]
///
/// The registry hands these out so the runner can drive every day the same way.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) {
///     println!("{} parsed in {}", solver.puzzle(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(result) => println!("part {}: {} ({})", part, result.answer, result.duration()),
///             Err(e) => eprintln!("part {}: {}", part, e),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, timing the computation
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn puzzle(&self) -> PuzzleId;

    /// Number of parts the underlying day module implements
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
