use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A run of digits on one row of the schematic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartNumber {
    value: u64,
    y: usize,
    x_start: usize,
    x_end: usize,
}

impl PartNumber {
    fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.x_start..=self.x_end).map(|x| (x, self.y))
    }
}

#[derive(Debug)]
pub struct Schematic {
    grid: Grid<char>,
    numbers: Vec<PartNumber>,
}

impl Schematic {
    fn is_symbol(c: char) -> bool {
        c != '.' && !c.is_ascii_digit()
    }

    /// Distinct cells around `number` whose character satisfies `pred`
    fn adjacent(&self, number: &PartNumber, pred: impl Fn(char) -> bool) -> HashSet<Pos> {
        number
            .cells()
            .flat_map(|cell| self.grid.neighbors8(cell))
            .filter(|&pos| pred(self.grid[pos]))
            .collect()
    }
}

fn find_numbers(grid: &Grid<char>) -> Vec<PartNumber> {
    let mut numbers = Vec::new();
    for (y, row) in grid.rows().enumerate() {
        let mut x = 0;
        while x < row.len() {
            if !row[x].is_ascii_digit() {
                x += 1;
                continue;
            }
            let x_start = x;
            let mut value = 0u64;
            while let Some(d) = row.get(x).and_then(|c| c.to_digit(10)) {
                value = value * 10 + u64::from(d);
                x += 1;
            }
            numbers.push(PartNumber {
                value,
                y,
                x_start,
                x_end: x - 1,
            });
        }
    }
    numbers
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, |c| {
            if c.is_ascii_graphic() {
                Ok(c)
            } else {
                Err(ParseError::InvalidFormat(format!(
                    "unexpected character {c:?} in schematic"
                )))
            }
        })?;
        let numbers = find_numbers(&grid);
        Ok(Schematic { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .numbers
            .iter()
            .filter(|number| !shared.adjacent(number, Schematic::is_symbol).is_empty())
            .map(|number| number.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Pos, Vec<u64>> = HashMap::new();
        for number in &shared.numbers {
            for star in shared.adjacent(number, |c| c == '*') {
                gears.entry(star).or_default().push(number.value);
            }
        }

        let sum: u64 = gears
            .values()
            .filter(|values| values.len() == 2)
            .map(|values| values[0] * values[1])
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "4361");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "467835");
    }

    #[test]
    fn test_numbers_at_row_end() {
        let grid = Grid::parse_chars("..12\n*..7").unwrap();
        let numbers = find_numbers(&grid);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[0].value, 12);
        assert_eq!((numbers[0].x_start, numbers[0].x_end), (2, 3));
        assert_eq!(numbers[1].value, 7);
    }

    #[test]
    fn test_star_with_three_numbers_is_not_gear() {
        let input = "1.2\n.*.\n3..";
        assert_eq!(run_part::<Solver, 2>(input).unwrap(), "0");
        assert_eq!(run_part::<Solver, 1>(input).unwrap(), "6");
    }
}
