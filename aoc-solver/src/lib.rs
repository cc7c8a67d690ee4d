//! Advent of Code solver framework
//!
//! Day modules implement [`AocParser`] and one [`PartSolver`] per part, derive [`Solver`]
//! dispatch with `#[derive(AocSolver)]`, and announce themselves to the registry with
//! `#[derive(AutoRegisterSolver)]`. The runner builds a [`SolverRegistry`] from those
//! plugins and looks days up by [`PuzzleId`].
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, PuzzleId, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .trim()
//!             .chars()
//!             .map(|c| match c {
//!                 '(' => Ok(1),
//!                 ')' => Ok(-1),
//!                 other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other))),
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(steps.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let mut floor = 0;
//!         for (pos, step) in steps.iter().enumerate() {
//!             floor += step;
//!             if floor < 0 {
//!                 return Ok((pos + 1).to_string());
//!             }
//!         }
//!         Err(SolveError::failed("never reaches the basement"))
//!     }
//! }
//!
//! let puzzle = PuzzleId::new(2015, 1).unwrap();
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Floors>(puzzle, "Not Quite Lisp", &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(puzzle, "(()))(").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "0");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Part Dependencies
//!
//! Both parts receive `&mut SharedData`. Independent parts just read it; a part that
//! can reuse work from another stores it in the shared data (for example in an
//! `Option` field filled by `get_or_insert_with`).

mod error;
mod instance;
mod puzzle;
mod registry;
mod solver;

pub use error::{InvalidPuzzle, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use puzzle::{FIRST_YEAR, PuzzleId, days_in_year, event_url};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macros expand to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
