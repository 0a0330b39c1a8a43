use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{line_error, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["2023", "sequences"])]
pub struct Solver;

/// Next value of `seq` by repeated differencing
fn extrapolate(seq: &[i64]) -> i64 {
    if seq.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = seq.iter().tuple_windows().map(|(a, b)| b - a).collect();
    seq[seq.len() - 1] + extrapolate(&diffs)
}

fn extrapolate_back(seq: &[i64]) -> i64 {
    let reversed: Vec<i64> = seq.iter().rev().copied().collect();
    extrapolate(&reversed)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let histories: Vec<Vec<i64>> = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| numbers(line).map_err(|e| line_error(idx, e)))
            .collect::<Result<_, _>>()?;

        if histories.is_empty() {
            return Err(ParseError::MissingData("no histories".into()));
        }
        Ok(histories)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|seq| extrapolate(seq)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|seq| extrapolate_back(seq))
            .sum::<i64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;
    use proptest::prelude::*;

    const EXAMPLE: &str = "0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "114");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "2");
    }

    #[test]
    fn test_single_value_repeats() {
        assert_eq!(extrapolate(&[5]), 5);
        assert_eq!(extrapolate_back(&[5]), 5);
    }

    proptest! {
        #[test]
        fn prop_quadratics_extend_exactly(
            a in -50i64..50,
            b in -50i64..50,
            c in -10i64..10,
            len in 4usize..12,
        ) {
            let f = |x: i64| a + b * x + c * x * x;
            let seq: Vec<i64> = (0..len as i64).map(f).collect();
            prop_assert_eq!(extrapolate(&seq), f(len as i64));
            prop_assert_eq!(extrapolate_back(&seq), f(-1));
        }
    }
}
