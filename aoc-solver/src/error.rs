//! Errors raised while registering, parsing and solving days

use thiserror::Error;

/// Input could not be turned into a day's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Text is present but malformed, e.g. `(line 3) expected 'Game <id>:'`
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs is absent: an empty input, no start tile, an unreadable file
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// A part could not produce an answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// Dispatch reached a part number the day has no `PartSolver` for
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Rejected before dispatch: 0 or above the day's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Parsed input that has no answer (unreachable goal, no periodic structure, ...)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Anything that can go wrong between a `(year, day)` lookup and an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is outside the supported years and days")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Rejected registry entry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("A solver is already registered for {0}/{1:02}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register a solver for {0}/{1:02}: outside the supported years and days")]
    InvalidYearDay(u16, u8),
}
