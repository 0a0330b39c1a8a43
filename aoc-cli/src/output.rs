//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let compute = summary.parse_time + summary.solve_time;
            let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!(
                "Speedup factor: {:.2}x",
                compute_secs / elapsed_time.as_secs_f64()
            );
        }
    }
}

/// Totals over the successful results
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let solved: Vec<&SolverResult> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            solved: solved.len(),
            failed: results.len() - solved.len(),
            parse_time: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

/// `YYYY/DD Part N: answer (parse: …, solve: …)` or the error
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
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

/// Format a std Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{SolveError, SolverError};
    use std::sync::Arc;

    fn result(part: u8, answer: Result<&str, SolverError>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 7,
            part,
            answer: answer.map(str::to_string).map_err(Arc::new),
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(3),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(12)), "12µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-3)), "-3µs");
        assert_eq!(format_std_duration(Duration::from_millis(20)), "20.00ms");
    }

    #[test]
    fn test_format_result_line() {
        assert_eq!(
            format_result(&result(1, Ok("6440"))),
            "2023/07 Part 1: 6440 (parse: 250µs, solve: 3.00ms)"
        );
        assert_eq!(
            format_result(&result(2, Ok("5905"))),
            "2023/07 Part 2: 5905 (solve: 3.00ms)"
        );
        assert_eq!(
            format_result(&result(2, Err(SolveError::PartOutOfRange(2).into()))),
            "2023/07 Part 2: Error - Solve error: Part 2 is out of range"
        );
    }

    #[test]
    fn test_summary_counts_only_successes() {
        let results = [
            result(1, Ok("1")),
            result(2, Ok("2")),
            result(1, Err(SolverError::NotFound(2023, 7))),
        ];
        assert_eq!(
            Summary::of(&results),
            Summary {
                solved: 2,
                failed: 1,
                parse_time: TimeDelta::microseconds(250),
                solve_time: TimeDelta::milliseconds(6),
            }
        );
    }
}
