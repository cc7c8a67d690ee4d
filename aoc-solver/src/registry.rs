//! Solver registry: maps puzzle identities to factories for their day modules

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::puzzle::PuzzleId;
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Factory turning raw input into a parsed, type-erased solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata kept for every registered day module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub puzzle: PuzzleId,
    /// Puzzle title, e.g. "Not Quite Lisp"
    pub title: &'static str,
    /// Number of parts the day module implements
    pub parts: u8,
    pub tags: &'static [&'static str],
}

impl SolverInfo {
    pub fn has_tags<S: AsRef<str>>(&self, wanted: &[S]) -> bool {
        wanted.iter().all(|w| self.tags.contains(&w.as_ref()))
    }
}

struct SolverEntry {
    info: SolverInfo,
    factory: SolverFactory,
}

/// Builder for an immutable [`SolverRegistry`]
///
/// Registration rejects a second solver for the same puzzle.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PuzzleId, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let puzzle = PuzzleId::new(2015, 1).unwrap();
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(puzzle, "Echo", &[])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(puzzle, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<PuzzleId, SolverEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a raw factory for `info.puzzle`
    pub fn register<F>(mut self, info: SolverInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&info.puzzle) {
            return Err(RegistrationError::DuplicateSolver(info.puzzle));
        }
        self.solvers.insert(
            info.puzzle,
            SolverEntry {
                info,
                factory: Box::new(factory),
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type; the factory parses input into a [`SolverInstance`]
    pub fn register_solver<S>(
        self,
        puzzle: PuzzleId,
        title: &'static str,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let info = SolverInfo {
            puzzle,
            title,
            parts: S::PARTS,
            tags,
        };
        self.register(info, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(puzzle, input)?))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let only_2015 = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2015)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                let puzzle = PuzzleId::new(plugin.year, plugin.day)?;
                self = plugin
                    .solver
                    .register_with(self, puzzle, plugin.title, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from puzzle to day module
///
/// Iteration is always in (year, day) order.
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, SolverEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the day module registered for `puzzle`
    ///
    /// # Returns
    /// * `Err(SolverError::NotImplemented)` - nothing is registered for the puzzle
    /// * `Err(SolverError::ParseError)` - the day module rejected the input
    pub fn create_solver<'a>(
        &self,
        puzzle: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&puzzle)
            .ok_or(SolverError::NotImplemented(puzzle))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn info(&self, puzzle: PuzzleId) -> Option<&SolverInfo> {
        self.solvers.get(&puzzle).map(|e| &e.info)
    }

    pub fn contains(&self, puzzle: PuzzleId) -> bool {
        self.solvers.contains_key(&puzzle)
    }

    pub fn iter_info(&self) -> impl Iterator<Item = &SolverInfo> + '_ {
        self.solvers.values().map(|e| &e.info)
    }

    /// Distinct years with at least one registered day, ascending
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.solvers.keys().map(PuzzleId::year).collect();
        years.dedup();
        years
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe registration hook, implemented for every [`Solver`]
///
/// This is what lets plugins of different solver types sit in one `inventory` collection.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        puzzle: PuzzleId,
        title: &'static str,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        puzzle: PuzzleId,
        title: &'static str,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(puzzle, title, tags)
    }
}

/// A day module submitted for automatic registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; the year and day are validated
/// when the registry is built, not at submission.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type by year and day, using the type name as its title
///
/// Evaluates to `Result<RegistryBuilder, RegistrationError>`.
///
/// ```
/// use aoc_solver::{register_solver, AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Nothing;
///
/// impl AocParser for Nothing {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Nothing {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// let builder = register_solver!(RegistryBuilder::new(), Nothing, 2015, 1).unwrap();
/// assert_eq!(builder.build().len(), 1);
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $crate::PuzzleId::new($year, $day)
            .map_err($crate::RegistrationError::from)
            .and_then(|puzzle| {
                $builder.register_solver::<$solver>(puzzle, stringify!($solver), &[])
            })
    };
}
