use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{line_error, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "counting"])]
pub struct Solver;

/// Number of winning numbers found on a card
fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after card id"))?;
    let (winning, have) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' between number lists"))?;

    let winning: HashSet<u32> = numbers(winning)?.into_iter().collect();
    Ok(numbers::<u32>(have)?
        .into_iter()
        .filter(|n| winning.contains(n))
        .count())
}

impl AocParser for Solver {
    /// Matching-number count per card, in card order
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_card(line).map_err(|e| line_error(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .filter(|&&matches| matches > 0)
            .try_fold(0u64, |total, &matches| {
                let points = u32::try_from(matches - 1)
                    .ok()
                    .and_then(|shift| 1u64.checked_shl(shift))?;
                total.checked_add(points)
            })
            .map(|points| points.to_string())
            .ok_or_else(|| SolveError::SolveFailed("card points overflow u64".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (card, &matches) in shared.iter().enumerate() {
            let end = (card + matches).min(shared.len() - 1);
            for won in card + 1..=end {
                copies[won] = copies[won]
                    .checked_add(copies[card])
                    .ok_or_else(|| SolveError::SolveFailed("card copies overflow u64".into()))?;
            }
        }
        copies
            .iter()
            .try_fold(0u64, |total, &n| total.checked_add(n))
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::SolveFailed("card copies overflow u64".into()))
    }
}
