//! Executor: turns a day selection into work items and runs them

use crate::aggregator::ResultKey;
use crate::cli::{DaySelector, ParallelizeBy};
use crate::config::RunConfig;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputLoader;
use aoc_solver::{DynSolver, PuzzleId, SolverError, SolverInfo, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info_span};

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub puzzle: PuzzleId,
    pub title: &'static str,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub solve_duration: TimeDelta,
    /// Parse time of the day's input, carried by the first part reported for the day
    pub parse_duration: Option<TimeDelta>,
}

impl SolverResult {
    fn failed(work: &WorkItem, part: u8, error: ArcExecutorError) -> Self {
        Self {
            puzzle: work.info.puzzle,
            title: work.info.title,
            part,
            answer: Err(error),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }
}

/// Work item representing one day to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub info: SolverInfo,
    pub parts: RangeInclusive<u8>,
}

impl WorkItem {
    /// Aggregator keys for every part this item will report
    pub fn keys(&self) -> impl Iterator<Item = ResultKey> + '_ {
        self.parts.clone().map(|part| ResultKey {
            puzzle: self.info.puzzle,
            part,
        })
    }
}

/// What a selection resolves to against the registry
#[derive(Debug, Default)]
pub struct Plan {
    /// Implemented days to run, in (year, day) order
    pub work_items: Vec<WorkItem>,
    /// Selected days that have no module
    pub not_implemented: Vec<PuzzleId>,
}

/// Executor for running day modules
pub struct Executor {
    context: ExecutionContext,
    selection: Selection,
    /// Only built when a parallel mode is requested
    thread_pool: Option<rayon::ThreadPool>,
}

struct ExecutionContext {
    registry: SolverRegistry,
    loader: InputLoader,
    parallelize_by: ParallelizeBy,
}

struct Selection {
    year_filter: Option<u16>,
    day: DaySelector,
    part_filter: Option<u8>,
    tags: Vec<String>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(
        registry: SolverRegistry,
        loader: InputLoader,
        config: &RunConfig,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = match config.parallelize_by {
            ParallelizeBy::Sequential => None,
            ParallelizeBy::Year | ParallelizeBy::Day => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.thread_count)
                    .build()
                    .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?,
            ),
        };

        Ok(Self {
            context: ExecutionContext {
                registry,
                loader,
                parallelize_by: config.parallelize_by,
            },
            selection: Selection {
                year_filter: config.year_filter,
                day: config.day,
                part_filter: config.part_filter,
                tags: config.tags.clone(),
            },
            thread_pool,
        })
    }

    /// Resolve the selection into work items and unimplemented days
    pub fn plan(&self) -> Plan {
        let registry = &self.context.registry;
        let mut plan = Plan::default();

        for puzzle in self.requested_puzzles() {
            let Some(info) = registry.info(puzzle) else {
                plan.not_implemented.push(puzzle);
                continue;
            };
            if !info.has_tags(&self.selection.tags) {
                debug!(%puzzle, tags = ?info.tags, "skipped by tag filter");
                continue;
            }
            let parts = self.filter_parts(info.parts);
            if parts.is_empty() {
                continue;
            }
            plan.work_items.push(WorkItem { info: *info, parts });
        }

        plan
    }

    /// Every (year, day) the selection names, in order
    fn requested_puzzles(&self) -> Vec<PuzzleId> {
        let registry = &self.context.registry;
        match (self.selection.year_filter, self.selection.day) {
            (Some(year), DaySelector::All) => PuzzleId::all_in_year(year).collect(),
            (Some(year), DaySelector::Day(day)) => PuzzleId::new(year, day).into_iter().collect(),
            (None, DaySelector::All) => registry.iter_info().map(|info| info.puzzle).collect(),
            (None, DaySelector::Day(day)) => registry
                .years()
                .into_iter()
                .filter_map(|year| PuzzleId::new(year, day).ok())
                .filter(|&puzzle| registry.contains(puzzle))
                .collect(),
        }
    }

    /// Filter parts based on the part filter and the day's number of parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.selection.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    ///
    /// Failures of individual days travel as results; only plumbing failures are returned.
    pub fn execute(
        &self,
        work_items: Vec<WorkItem>,
        tx: Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let pool = match (&self.thread_pool, self.context.parallelize_by) {
            (Some(pool), ParallelizeBy::Year | ParallelizeBy::Day) => pool,
            _ => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work_item(work, &tx, &self.context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                return collected_error.map_or(Ok(()), Err);
            }
        };

        let groups: Vec<Vec<WorkItem>> = match self.context.parallelize_by {
            ParallelizeBy::Year => work_items
                .into_iter()
                .chunk_by(|w| w.info.puzzle.year())
                .into_iter()
                .map(|(_, group)| group.collect())
                .collect(),
            _ => work_items.into_iter().map(|w| vec![w]).collect(),
        };

        let context = &self.context;
        pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in &items {
                        if let Err(e) = run_work_item(work, &tx, context) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Load, parse and solve one day, sending a result for each of its parts
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let puzzle = work.info.puzzle;
    let _span = info_span!("day", %puzzle).entered();

    let input = match context.loader.load(puzzle) {
        Ok(input) => input,
        Err(e) => return send_failure(work, ExecutorError::from(e).into(), tx),
    };

    let mut solver = match context.registry.create_solver(puzzle, &input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(work, ExecutorError::from(e).into(), tx),
    };

    let mut parse_duration = Some(solver.parse_duration());
    debug!(parse_duration = ?parse_duration, "parsed input");

    for part in work.parts.clone() {
        let mut result = solve_part(work, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Report the same failure for every part of a day
fn send_failure(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    debug!(%error, "day failed before solving");
    for part in work.parts.clone() {
        tx.send(SolverResult::failed(work, part, error.clone()))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            puzzle: work.info.puzzle,
            title: work.info.title,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult::failed(
            work,
            part,
            ExecutorError::from(SolverError::from(e)).into(),
        ),
    }
}
