use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::Direction;
use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 18, tags = ["2023", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dig {
    dir: Direction,
    len: i64,
}

/// Each plan line read both ways: the plain instruction and the one
/// hidden in the colour code
#[derive(Debug, Clone, Copy)]
pub struct PlanLine {
    plain: Dig,
    decoded: Dig,
}

fn parse_line(line: &str) -> anyhow::Result<PlanLine> {
    let (dir, len, colour) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected '<dir> <len> (#rrggbb)'"))?;

    let dir = match dir {
        "U" => Direction::North,
        "R" => Direction::East,
        "D" => Direction::South,
        "L" => Direction::West,
        other => bail!("unknown direction {other:?}"),
    };
    let len: u32 = len.parse()?;
    if len == 0 {
        bail!("dig length must be positive");
    }
    let plain = Dig {
        dir,
        len: i64::from(len),
    };

    let hex = colour
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .filter(|hex| hex.len() == 6 && hex.is_ascii())
        .ok_or_else(|| anyhow!("colour must look like (#rrggbb), got {colour:?}"))?;
    let decoded = Dig {
        len: i64::from_str_radix(&hex[..5], 16)?,
        dir: match &hex[5..] {
            "0" => Direction::East,
            "1" => Direction::South,
            "2" => Direction::West,
            "3" => Direction::North,
            other => bail!("unknown encoded direction {other:?}"),
        },
    };

    Ok(PlanLine { plain, decoded })
}

/// Cubic metres of lava the trench holds, counting the trench itself.
///
/// Shoelace gives the area of the polygon through the trench centres;
/// Pick's theorem turns that into interior points, and every boundary
/// point is one more cube.
fn lagoon_volume(digs: impl Iterator<Item = Dig>) -> Result<i64, SolveError> {
    let overflow = || SolveError::SolveFailed("lagoon too large".into());
    let (mut x, mut y) = (0i64, 0i64);
    let mut double_area = 0i64;
    let mut boundary = 0i64;

    for Dig { dir, len } in digs {
        let (dx, dy) = dir.offset();
        let (nx, ny) = (x + dx * len, y + dy * len);
        let term = x
            .checked_mul(ny)
            .zip(nx.checked_mul(y))
            .and_then(|(a, b)| a.checked_sub(b))
            .ok_or_else(overflow)?;
        double_area = double_area.checked_add(term).ok_or_else(overflow)?;
        boundary += len;
        (x, y) = (nx, ny);
    }

    if (x, y) != (0, 0) {
        return Err(SolveError::SolveFailed(
            format!("dig plan ends at {x},{y} instead of closing the trench").into(),
        ));
    }
    Ok(double_area.abs() / 2 + boundary / 2 + 1)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PlanLine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_line(line).map_err(|e| line_error(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lagoon_volume(shared.iter().map(|line| line.plain)).map(|v| v.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lagoon_volume(shared.iter().map(|line| line.decoded)).map(|v| v.to_string())
    }
}
