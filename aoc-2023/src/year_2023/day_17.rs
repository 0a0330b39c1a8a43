use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["2023", "grid", "dijkstra"])]
pub struct Solver;

/// Axis of the last straight run; the next run must use the other one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn turns(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::North, Direction::South],
            Axis::Vertical => [Direction::East, Direction::West],
        }
    }

    fn of(dir: Direction) -> Self {
        match dir {
            Direction::East | Direction::West => Axis::Horizontal,
            Direction::North | Direction::South => Axis::Vertical,
        }
    }
}

/// Least heat loss from the top-left to the bottom-right block when the
/// crucible moves between `min_run` and `max_run` blocks before each turn.
///
/// Each search step is one whole straight run followed by a turn, so the
/// state is just the position and the axis of the run that reached it.
fn least_heat_loss(grid: &Grid<u8>, min_run: usize, max_run: usize) -> Option<u32> {
    let goal = (grid.width() - 1, grid.height() - 1);
    let slot = |(x, y): Pos, axis: Axis| (y * grid.width() + x) * 2 + axis as usize;

    let mut best = vec![u32::MAX; grid.width() * grid.height() * 2];
    let mut queue = BinaryHeap::new();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        best[slot((0, 0), axis)] = 0;
        queue.push(Reverse((0u32, (0usize, 0usize), axis)));
    }

    while let Some(Reverse((loss, pos, axis))) = queue.pop() {
        if pos == goal {
            return Some(loss);
        }
        if loss > best[slot(pos, axis)] {
            continue;
        }

        for dir in axis.turns() {
            let mut next = pos;
            let mut next_loss = loss;
            for run in 1..=max_run {
                let Some(step) = grid.step(next, dir) else {
                    break;
                };
                next = step;
                next_loss += u32::from(grid[next]);
                if run < min_run {
                    continue;
                }
                let entry = &mut best[slot(next, Axis::of(dir))];
                if next_loss < *entry {
                    *entry = next_loss;
                    queue.push(Reverse((next_loss, next, Axis::of(dir))));
                }
            }
        }
    }
    None
}

fn solve_with(grid: &Grid<u8>, min_run: usize, max_run: usize) -> Result<String, SolveError> {
    least_heat_loss(grid, min_run, max_run)
        .map(|loss| loss.to_string())
        .ok_or_else(|| SolveError::SolveFailed("the factory block is unreachable".into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c.to_digit(10) {
            Some(d @ 1..=9) => Ok(d as u8),
            _ => Err(ParseError::InvalidFormat(format!("heat loss must be 1-9, got {c:?}"))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 4, 10)
    }
}
