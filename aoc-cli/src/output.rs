//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::PuzzleId;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    show_description: bool,
    start_time: std::time::Instant,
    /// Day whose description line was printed last
    current: Option<PuzzleId>,
}

impl OutputFormatter {
    pub fn new(quiet: bool, show_description: bool) -> Self {
        Self {
            quiet,
            show_description,
            start_time: std::time::Instant::now(),
            current: None,
        }
    }

    /// Format and print a single result
    pub fn print_result(&mut self, result: &SolverResult) {
        if self.current != Some(result.puzzle) {
            self.current = Some(result.puzzle);
            if self.show_description && !self.quiet {
                eprintln!("{}", format_description(result.puzzle, result.title));
            }
        }

        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Report selected days that have no module
    pub fn print_not_implemented(&self, puzzles: &[PuzzleId]) {
        for puzzle in puzzles {
            eprintln!("{}: not implemented", puzzle);
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult], not_implemented: usize) {
        if self.quiet {
            return;
        }

        let summary = Summary::from_results(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed",
            summary.successes, summary.failures
        );
        if not_implemented > 0 {
            println!("Days not implemented: {}", not_implemented);
        }
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Totals over a finished run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub successes: usize,
    pub failures: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn from_results(results: &[SolverResult]) -> Self {
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        Self {
            successes,
            failures: results.len() - successes,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results
                .iter()
                .filter(|r| r.answer.is_ok())
                .map(|r| r.solve_duration)
                .sum(),
        }
    }
}

/// `>> running 2015/01: Not Quite Lisp`
pub fn format_description(puzzle: PuzzleId, title: &str) -> String {
    format!(">> running {}: {}", puzzle, title)
}

/// One line per part: `2015/01 Part 1: 280 (parse: 12µs, solve: 3µs)`
pub fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{} Part {}", result.puzzle, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
