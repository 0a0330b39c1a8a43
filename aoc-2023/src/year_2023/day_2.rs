use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{line_error, value};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

/// Cube counts of one handful
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_within(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<Cubes>,
}

impl Game {
    fn minimum_bag(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |acc, &draw| acc.max(draw))
    }
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after game id"))?;
    let id = head
        .trim()
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("line must start with 'Game'"))?
        .trim()
        .parse()?;

    let draws = body
        .split(';')
        .map(|draw| {
            let mut cubes = Cubes::default();
            for entry in draw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let (count, colour) = entry
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("expected '<count> <colour>', got {entry:?}"))?;
                let count: u32 = value(count, "cube count")?;
                match colour.trim() {
                    "red" => cubes.red += count,
                    "green" => cubes.green += count,
                    "blue" => cubes.blue += count,
                    other => bail!("unknown colour {other:?}"),
                }
            }
            Ok(cubes)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_game(line).map_err(|e| line_error(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_within(BAG)))
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.iter().map(|game| game.minimum_bag().power()).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "8");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "2286");
    }

    #[test]
    fn test_minimum_bag() {
        let game = parse_game("Game 7: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(
            game.minimum_bag(),
            Cubes {
                red: 4,
                green: 2,
                blue: 6
            }
        );
    }

    #[test]
    fn test_unknown_colour_reports_line() {
        let err = Solver::parse("Game 1: 1 red\nGame 2: 2 purple").unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
