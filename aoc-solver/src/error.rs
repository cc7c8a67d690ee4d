//! Error types for the solver library

use crate::puzzle::PuzzleId;
use thiserror::Error;

/// A (year, day) pair outside the event calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("year {year} day {day} is not a valid puzzle")]
pub struct InvalidPuzzle {
    pub year: u16,
    pub day: u8,
}

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The computation itself failed (no answer exists for this input, etc.)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Shorthand for a failed computation described by a message
    pub fn failed(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::SolveFailed(message.into())
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No day module is registered for the puzzle
    #[error("{0}: not implemented")]
    NotImplemented(PuzzleId),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a puzzle that already has one
    #[error("Duplicate solver registration for {0}")]
    DuplicateSolver(PuzzleId),
    /// The plugin names a year/day outside the event calendar
    #[error("Cannot register solver: {0}")]
    InvalidPuzzle(#[from] InvalidPuzzle),
}
