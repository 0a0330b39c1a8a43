use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["2023", "grid", "geometry"])]
pub struct Solver;

/// The two directions a pipe tile connects, `None` for ground and start
fn connections(tile: char) -> Option<[Direction; 2]> {
    use Direction::*;
    match tile {
        '|' => Some([North, South]),
        '-' => Some([East, West]),
        'L' => Some([North, East]),
        'J' => Some([North, West]),
        '7' => Some([South, West]),
        'F' => Some([South, East]),
        _ => None,
    }
}

fn connects(tile: char, dir: Direction) -> bool {
    connections(tile).is_some_and(|dirs| dirs.contains(&dir))
}

/// Closed pipe loop through the start tile
#[derive(Debug)]
pub struct PipeLoop {
    /// Every tile of the loop in walking order, starting at `S`
    tiles: Vec<Pos>,
}

impl PipeLoop {
    /// Twice the enclosed area, by the shoelace formula over tile centres
    fn double_area(&self) -> i64 {
        self.tiles
            .iter()
            .circular_tuple_windows()
            .map(|(&(x1, y1), &(x2, y2))| x1 as i64 * y2 as i64 - x2 as i64 * y1 as i64)
            .sum::<i64>()
            .abs()
    }

    /// Tiles strictly inside the loop, by Pick's theorem
    fn enclosed(&self) -> i64 {
        let boundary = self.tiles.len() as i64;
        (self.double_area() - boundary) / 2 + 1
    }
}

/// Follow the pipes from `start` heading `heading` until the walk comes back to `start`
fn walk(grid: &Grid<char>, start: Pos, mut heading: Direction) -> Result<Vec<Pos>, ParseError> {
    let mut tiles = vec![start];
    let mut pos = start;
    loop {
        pos = grid
            .step(pos, heading)
            .ok_or_else(|| ParseError::InvalidFormat(format!("loop leaves the grid at {pos:?}")))?;
        if pos == start {
            return Ok(tiles);
        }
        let [a, b] = connections(grid[pos])
            .filter(|dirs| dirs.contains(&heading.opposite()))
            .ok_or_else(|| ParseError::InvalidFormat(format!("broken pipe at {pos:?}")))?;
        heading = if a == heading.opposite() { b } else { a };
        tiles.push(pos);
        if tiles.len() > grid.width() * grid.height() {
            return Err(ParseError::InvalidFormat("pipe walk never returns to 'S'".into()));
        }
    }
}

/// The loop through `S`; neighbours that point at `S` without closing a loop are ignored
fn trace_loop(grid: &Grid<char>) -> Result<PipeLoop, ParseError> {
    let start = grid
        .find(|&c| c == 'S')
        .ok_or_else(|| ParseError::MissingData("no start tile 'S'".into()))?;

    let mut last_error = ParseError::InvalidFormat("start tile connects to no pipe".into());
    for dir in Direction::ALL {
        let points_back = grid
            .step(start, dir)
            .is_some_and(|next| connects(grid[next], dir.opposite()));
        if !points_back {
            continue;
        }
        match walk(grid, start, dir) {
            Ok(tiles) => return Ok(PipeLoop { tiles }),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

impl AocParser for Solver {
    type SharedData<'a> = PipeLoop;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '|' | '-' | 'L' | 'J' | '7' | 'F' | '.' | 'S' => Ok(c),
            other => Err(ParseError::InvalidFormat(format!("unknown tile {other:?}"))),
        })?;
        trace_loop(&grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.tiles.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.enclosed().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const SIMPLE: &str = ".....
.S-7.
.|.|.
.L-J.
.....";

    const COMPLEX: &str = "..F7.
.FJ|.
SJ.L7
|F--J
LJ...";

    const ENCLOSED_4: &str = "...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";

    const ENCLOSED_8: &str = ".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";

    const ENCLOSED_10: &str = "FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L";

    #[test]
    fn test_part1_examples() {
        assert_eq!(run_part::<Solver, 1>(SIMPLE).unwrap(), "4");
        assert_eq!(run_part::<Solver, 1>(COMPLEX).unwrap(), "8");
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(run_part::<Solver, 2>(SIMPLE).unwrap(), "1");
        assert_eq!(run_part::<Solver, 2>(ENCLOSED_4).unwrap(), "4");
        assert_eq!(run_part::<Solver, 2>(ENCLOSED_8).unwrap(), "8");
        assert_eq!(run_part::<Solver, 2>(ENCLOSED_10).unwrap(), "10");
    }

    #[test]
    fn test_stray_pipes_pointing_at_start() {
        let stray_west = ".....\n-S-7.\n.|.|.\n.L-J.\n.....";
        assert_eq!(run_part::<Solver, 1>(stray_west).unwrap(), "4");
        assert_eq!(run_part::<Solver, 2>(stray_west).unwrap(), "1");

        // tried first, dead-ends at the grid edge
        let stray_north = ".|...\n.S-7.\n.|.|.\n.L-J.\n.....";
        assert_eq!(run_part::<Solver, 1>(stray_north).unwrap(), "4");
        assert_eq!(run_part::<Solver, 2>(stray_north).unwrap(), "1");
    }

    #[test]
    fn test_start_without_closed_loop() {
        assert!(Solver::parse("-S-\n...").is_err());
    }

    #[test]
    fn test_start_without_two_connections() {
        assert!(Solver::parse("...\n.S.\n...").is_err());
        assert!(Solver::parse("...\n...").is_err());
    }

    #[test]
    fn test_unknown_tile() {
        assert!(Solver::parse("S-7\n|#|\nL-J").is_err());
    }
}
