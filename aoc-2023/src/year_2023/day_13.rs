use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["2023", "grid"])]
pub struct Solver;

/// Rocks (`#`) as `true`, ash as `false`
pub type Pattern = Grid<bool>;

/// Row of the first horizontal mirror line with exactly `smudges` mismatched
/// cells, counted as the number of rows above it
fn mirror_row(pattern: &Pattern, smudges: usize) -> Option<usize> {
    (1..pattern.height()).find(|&split| {
        let mismatches: usize = (0..split.min(pattern.height() - split))
            .map(|k| {
                pattern
                    .row(split - 1 - k)
                    .iter()
                    .zip(pattern.row(split + k))
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        mismatches == smudges
    })
}

fn mirror_col(pattern: &Pattern, smudges: usize) -> Option<usize> {
    (1..pattern.width()).find(|&split| {
        let mismatches = (0..split.min(pattern.width() - split))
            .flat_map(|k| (0..pattern.height()).map(move |y| (split - 1 - k, split + k, y)))
            .filter(|&(left, right, y)| pattern[(left, y)] != pattern[(right, y)])
            .count();
        mismatches == smudges
    })
}

fn summarize(patterns: &[Pattern], smudges: usize) -> Result<String, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(idx, pattern)| {
            mirror_row(pattern, smudges)
                .map(|rows| 100 * rows)
                .or_else(|| mirror_col(pattern, smudges))
                .ok_or_else(|| {
                    SolveError::SolveFailed(
                        format!("pattern {} has no mirror line with {smudges} smudges", idx + 1)
                            .into(),
                    )
                })
        })
        .sum::<Result<usize, _>>()
        .map(|total| total.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
        for line in input.lines().map(str::trim) {
            match blocks.last_mut() {
                Some(block) if !line.is_empty() => block.push(line),
                Some(block) if !block.is_empty() => blocks.push(Vec::new()),
                _ => {}
            }
        }

        let patterns = blocks
            .iter()
            .filter(|block| !block.is_empty())
            .map(|block| {
                Grid::parse(&block.join("\n"), |c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    other => Err(ParseError::InvalidFormat(format!("unexpected {other:?}"))),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if patterns.is_empty() {
            return Err(ParseError::MissingData("no patterns".into()));
        }
        Ok(patterns)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        summarize(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        summarize(shared, 1)
    }
}
