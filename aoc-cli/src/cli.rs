//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code 2023 solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc2023", about = "Run Advent of Code 2023 solutions", version)]
pub struct Args {
    /// Day to run (runs every registered day if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Read the puzzle input from this file instead of the input directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `{year}/day{DD}.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_day_and_flags() {
        let args = Args::try_parse_from([
            "aoc2023",
            "7",
            "-p",
            "2",
            "--tags",
            "2023,sorting",
            "--parallelize-by",
            "part",
        ])
        .unwrap();
        assert_eq!(args.day, Some(7));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["2023", "sorting"]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
        assert!(!args.quiet);
    }

    #[test]
    fn test_day_and_part_ranges() {
        assert!(Args::try_parse_from(["aoc2023", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc2023", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc2023", "1", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc2023", "seven"]).is_err());
    }

    #[test]
    fn test_no_day_runs_everything() {
        let args = Args::try_parse_from(["aoc2023", "--input-dir", "puzzles", "-q"]).unwrap();
        assert_eq!(args.day, None);
        assert_eq!(args.input_dir, PathBuf::from("puzzles"));
        assert!(args.quiet);
    }
}
