//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::input::{InputSource, InputStore};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory, `~` already expanded
    pub input_dir: PathBuf,
    /// Explicit input file for a single day
    pub input_file: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config(
                "--input needs a DAY to run against".to_string(),
            ));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }

    /// Where inputs come from: the explicit file if given, else the input directory
    pub fn input_source(&self) -> InputSource {
        match &self.input_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Store(InputStore::new(self.input_dir.clone())),
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config, CliError> {
        let mut argv = vec!["aoc2023", "--input-dir", "puzzles"];
        argv.extend_from_slice(args);
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/in")), home.join("aoc/in"));
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
    }

    #[test]
    fn test_filters_and_threads() {
        let config = config(&["12", "-y", "2023", "-p", "1", "--threads", "3"]).unwrap();
        assert_eq!(config.day_filter, Some(12));
        assert_eq!(config.year_filter, Some(2023));
        assert_eq!(config.part_filter, Some(1));
        assert_eq!(config.thread_count, 3);
        assert_eq!(config.input_dir, PathBuf::from("puzzles"));
        assert!(matches!(config.input_source(), InputSource::Store(_)));
    }

    #[test]
    fn test_input_file_requires_day() {
        assert!(matches!(
            config(&["--input", "day.txt"]),
            Err(CliError::Config(_))
        ));

        let config = config(&["3", "--input", "day.txt"]).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("day.txt")));
        assert!(matches!(config.input_source(), InputSource::File(_)));
    }

    #[test]
    fn test_default_thread_count_is_positive() {
        assert!(config(&[]).unwrap().thread_count >= 1);
    }
}
