use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["2023", "grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<Pos>,
    /// Number of galaxy-free columns left of each column
    empty_cols_before: Vec<u64>,
    /// Number of galaxy-free rows above each row
    empty_rows_before: Vec<u64>,
}

fn empty_prefix(len: usize, occupied: impl Iterator<Item = usize>) -> Vec<u64> {
    let mut used = vec![false; len];
    occupied.for_each(|i| used[i] = true);
    used.iter()
        .scan(0u64, |empty, &used| {
            let before = *empty;
            *empty += u64::from(!used);
            Some(before)
        })
        .collect()
}

impl Image {
    /// Sum of shortest distances between all galaxy pairs, with every
    /// empty row and column replaced by `factor` copies of itself
    fn total_distance(&self, factor: u64) -> u64 {
        let expanded: Vec<(u64, u64)> = self
            .galaxies
            .iter()
            .map(|&(x, y)| {
                (
                    x as u64 + (factor - 1) * self.empty_cols_before[x],
                    y as u64 + (factor - 1) * self.empty_rows_before[y],
                )
            })
            .collect();

        expanded
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!("unexpected {other:?} in image"))),
        })?;

        let galaxies: Vec<Pos> = grid.iter().filter(|(_, galaxy)| **galaxy).map(|(pos, _)| pos).collect();
        Ok(Image {
            empty_cols_before: empty_prefix(grid.width(), galaxies.iter().map(|p| p.0)),
            empty_rows_before: empty_prefix(grid.height(), galaxies.iter().map(|p| p.1)),
            galaxies,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(1_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE: &str = "...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "374");
    }

    #[test]
    fn test_larger_expansion_factors() {
        let image = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(image.total_distance(10), 1030);
        assert_eq!(image.total_distance(100), 8410);
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(empty_prefix(5, [1, 3].into_iter()), vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_no_galaxies() {
        assert_eq!(run_part::<Solver, 2>("...\n...").unwrap(), "0");
    }
}
