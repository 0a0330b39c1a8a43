//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Failure to load a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// No file at the expected location
    #[error("input file {} not found", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(err: &ArcExecutorError) -> usize {
        match err.inner() {
            ExecutorError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }

    #[test]
    fn test_combine_flattens_multiples() {
        let a: ArcExecutorError = ExecutorError::ChannelSend.into();
        let b: ArcExecutorError = ExecutorError::ThreadPool("boom".into()).into();
        let pair = ArcExecutorError::combine(a.clone(), b.clone());
        assert_eq!(count(&pair), 2);

        let three = ArcExecutorError::combine(pair.clone(), a.clone());
        assert_eq!(count(&three), 3);
        let three = ArcExecutorError::combine(b, pair.clone());
        assert_eq!(count(&three), 3);
        let four = ArcExecutorError::combine(pair.clone(), pair);
        assert_eq!(count(&four), 4);
        assert_eq!(four.to_string(), "Multiple errors occurred (4 total)");
    }

    #[test]
    fn test_combine_opt() {
        let a: ArcExecutorError = ExecutorError::ChannelSend.into();
        assert_eq!(count(&ArcExecutorError::combine_opt(None, a.clone())), 1);
        assert_eq!(count(&ArcExecutorError::combine_opt(Some(a.clone()), a)), 2);
    }

    #[test]
    fn test_input_error_names_path() {
        let err = InputError::Missing {
            path: PathBuf::from("inputs/2023/day05.txt"),
        };
        assert_eq!(err.to_string(), "input file inputs/2023/day05.txt not found");
    }
}
