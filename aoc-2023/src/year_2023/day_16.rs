use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["2023", "grid", "bfs"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// `/`
    MirrorForward,
    /// `\`
    MirrorBack,
    SplitVertical,
    SplitHorizontal,
}

impl Tile {
    /// Directions a beam leaves this tile in when travelling `dir`
    fn outgoing(self, dir: Direction) -> impl Iterator<Item = Direction> {
        use Direction::*;
        let (first, second) = match (self, dir) {
            (Tile::Empty, d) => (d, None),
            (Tile::MirrorForward, East) => (North, None),
            (Tile::MirrorForward, North) => (East, None),
            (Tile::MirrorForward, West) => (South, None),
            (Tile::MirrorForward, South) => (West, None),
            (Tile::MirrorBack, East) => (South, None),
            (Tile::MirrorBack, South) => (East, None),
            (Tile::MirrorBack, West) => (North, None),
            (Tile::MirrorBack, North) => (West, None),
            (Tile::SplitVertical, East | West) => (North, Some(South)),
            (Tile::SplitHorizontal, North | South) => (East, Some(West)),
            (Tile::SplitVertical | Tile::SplitHorizontal, d) => (d, None),
        };
        std::iter::once(first).chain(second)
    }
}

/// Number of tiles a beam entering at `start` heading `dir` passes through
fn energized(grid: &Grid<Tile>, start: Pos, dir: Direction) -> usize {
    let mut seen = vec![0u8; grid.width() * grid.height()];
    let mut stack = vec![(start, dir)];

    while let Some((pos, dir)) = stack.pop() {
        let mask = &mut seen[pos.1 * grid.width() + pos.0];
        let bit = 1 << dir.index();
        if *mask & bit != 0 {
            continue;
        }
        *mask |= bit;

        for out in grid[pos].outgoing(dir) {
            if let Some(next) = grid.step(pos, out) {
                stack.push((next, out));
            }
        }
    }

    seen.iter().filter(|&&mask| mask != 0).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Tile>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c {
            '.' => Ok(Tile::Empty),
            '/' => Ok(Tile::MirrorForward),
            '\\' => Ok(Tile::MirrorBack),
            '|' => Ok(Tile::SplitVertical),
            '-' => Ok(Tile::SplitHorizontal),
            other => Err(ParseError::InvalidFormat(format!("unknown tile {other:?}"))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, (0, 0), Direction::East).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (w, h) = (shared.width(), shared.height());
        let entries: Vec<(Pos, Direction)> = (0..w)
            .flat_map(|x| [((x, 0), Direction::South), ((x, h - 1), Direction::North)])
            .chain((0..h).flat_map(|y| [((0, y), Direction::East), ((w - 1, y), Direction::West)]))
            .collect();

        let grid: &Grid<Tile> = shared;
        entries
            .par_iter()
            .map(|&(pos, dir)| energized(grid, pos, dir))
            .max()
            .map(|best| best.to_string())
            .ok_or_else(|| SolveError::SolveFailed("grid has no edge tiles".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "46");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "51");
    }

    #[test]
    fn test_mirror_at_origin_turns_first_beam() {
        let grid = Solver::parse("\\..\n...\n...").unwrap();
        assert_eq!(energized(&grid, (0, 0), Direction::East), 3);
    }

    #[test]
    fn test_splitter_loop_terminates() {
        let grid = Solver::parse("-.|\n...\n|.-").unwrap();
        assert!(energized(&grid, (0, 0), Direction::East) > 0);
    }
}
