use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["2023", "grid", "cycle-detection"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rock {
    Round,
    Cube,
    Empty,
}

pub type Platform = Grid<Rock>;

/// Lines of cells ordered from the wall `dir` points at
fn lanes(width: usize, height: usize, dir: Direction) -> Vec<Vec<Pos>> {
    match dir {
        Direction::North => (0..width).map(|x| (0..height).map(|y| (x, y)).collect()).collect(),
        Direction::South => (0..width)
            .map(|x| (0..height).rev().map(|y| (x, y)).collect())
            .collect(),
        Direction::West => (0..height).map(|y| (0..width).map(|x| (x, y)).collect()).collect(),
        Direction::East => (0..height)
            .map(|y| (0..width).rev().map(|x| (x, y)).collect())
            .collect(),
    }
}

fn tilt(platform: &mut Platform, lanes: &[Vec<Pos>]) {
    for lane in lanes {
        let mut free = 0;
        for (i, &pos) in lane.iter().enumerate() {
            match platform[pos] {
                Rock::Cube => free = i + 1,
                Rock::Round => {
                    if free != i {
                        platform[lane[free]] = Rock::Round;
                        platform[pos] = Rock::Empty;
                    }
                    free += 1;
                }
                Rock::Empty => {}
            }
        }
    }
}

fn north_load(platform: &Platform) -> usize {
    platform
        .iter()
        .filter(|(_, rock)| **rock == Rock::Round)
        .map(|((_, y), _)| platform.height() - y)
        .sum()
}

/// Load after `cycles` spin cycles, jumping ahead once the platform
/// returns to a layout it has been in before
fn load_after_spins(start: &Platform, cycles: usize) -> usize {
    let spin: Vec<Vec<Vec<Pos>>> = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ]
    .into_iter()
    .map(|dir| lanes(start.width(), start.height(), dir))
    .collect();

    let mut platform = start.clone();
    let mut seen: HashMap<Platform, usize> = HashMap::new();
    let mut loads = Vec::new();

    for done in 0..=cycles {
        if let Some(&first) = seen.get(&platform) {
            let period = done - first;
            log::debug!("platform repeats after {done} spins with period {period}");
            return loads[first + (cycles - first) % period];
        }
        loads.push(north_load(&platform));
        if done == cycles {
            break;
        }
        seen.insert(platform.clone(), done);
        for order in &spin {
            tilt(&mut platform, order);
        }
    }
    north_load(&platform)
}

impl AocParser for Solver {
    type SharedData<'a> = Platform;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c {
            'O' => Ok(Rock::Round),
            '#' => Ok(Rock::Cube),
            '.' => Ok(Rock::Empty),
            other => Err(ParseError::InvalidFormat(format!("unknown rock {other:?}"))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        let north = lanes(platform.width(), platform.height(), Direction::North);
        tilt(&mut platform, &north);
        Ok(north_load(&platform).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(load_after_spins(shared, SPIN_CYCLES).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE: &str = "O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

    const AFTER_ONE_CYCLE: &str = ".....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "136");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "64");
    }

    #[test]
    fn test_single_spin_cycle() {
        let mut platform = Solver::parse(EXAMPLE).unwrap();
        for dir in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            let order = lanes(platform.width(), platform.height(), dir);
            tilt(&mut platform, &order);
        }
        assert_eq!(platform, Solver::parse(AFTER_ONE_CYCLE).unwrap());
    }

    #[test]
    fn test_few_spins_match_direct_simulation() {
        let platform = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(load_after_spins(&platform, 0), north_load(&platform));
        assert_eq!(
            load_after_spins(&platform, 1),
            north_load(&Solver::parse(AFTER_ONE_CYCLE).unwrap())
        );
    }
}
