use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration(shared, true)
    }
}

fn sum_calibration(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            calibration_value(line, spelled).ok_or_else(|| {
                SolveError::SolveFailed(format!("(line {}) no digit in {line:?}", idx + 1).into())
            })
        })
        .sum::<Result<u32, _>>()
        .map(|sum| sum.to_string())
}

fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let bytes = line.as_bytes();
    let first = (0..bytes.len()).find_map(|i| digit_at(bytes, i, spelled))?;
    let last = (0..bytes.len()).rev().find_map(|i| digit_at(bytes, i, spelled))?;
    Some(first * 10 + last)
}

/// Digit starting at byte `i`, either literal or (when `spelled`) a word
fn digit_at(bytes: &[u8], i: usize, spelled: bool) -> Option<u32> {
    if bytes[i].is_ascii_digit() {
        return Some(u32::from(bytes[i] - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| bytes[i..].starts_with(word.as_bytes()))
        .map(|idx| idx as u32 + 1)
}
