use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::math::lcm_all;
use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["2023", "graph", "lcm"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

/// Desert map with node names borrowed from the input
#[derive(Debug)]
pub struct Network<'a> {
    turns: Vec<Turn>,
    names: Vec<&'a str>,
    /// `(left, right)` successor indices per node
    links: Vec<(usize, usize)>,
}

impl<'a> Network<'a> {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    /// Steps from `start` until a node satisfying `is_end` is reached.
    ///
    /// At least one step is taken. Returns `None` once the walk has gone
    /// through every `(node, turn index)` state without reaching an end.
    fn steps_until(&self, start: usize, is_end: impl Fn(&str) -> bool) -> Option<u64> {
        let limit = self.names.len() * self.turns.len();
        let mut node = start;
        for (step, turn) in self.turns.iter().cycle().enumerate().take(limit) {
            let (left, right) = self.links[node];
            node = match turn {
                Turn::Left => left,
                Turn::Right => right,
            };
            if is_end(self.names[node]) {
                return Some(step as u64 + 1);
            }
        }
        None
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut lines = input.lines().map(str::trim).enumerate().filter(|(_, l)| !l.is_empty());

    let (_, turn_line) = lines.next().ok_or_else(|| anyhow!("missing turn instructions"))?;
    let turns = turn_line
        .chars()
        .map(|c| match c {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => Err(anyhow!("unknown turn {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut entries = Vec::new();
    for (idx, line) in lines {
        let parsed = line
            .split_once('=')
            .and_then(|(name, targets)| {
                let (left, right) = targets
                    .trim()
                    .strip_prefix('(')?
                    .strip_suffix(')')?
                    .split_once(',')?;
                Some((name.trim(), left.trim(), right.trim()))
            })
            .ok_or_else(|| line_error(idx, "expected 'NODE = (LEFT, RIGHT)'"))?;
        entries.push(parsed);
    }

    let index: HashMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, &(name, _, _))| (name, i))
        .collect();
    let lookup = |name: &str| {
        index
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("node {name:?} is referenced but never defined"))
    };
    let links = entries
        .iter()
        .map(|&(_, left, right)| Ok((lookup(left)?, lookup(right)?)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Network {
        turns,
        names: entries.iter().map(|&(name, _, _)| name).collect(),
        links,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let network = parse_network(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if network.turns.is_empty() || network.names.is_empty() {
            return Err(ParseError::MissingData("no turns or no nodes".into()));
        }
        Ok(network)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared
            .index_of("AAA")
            .ok_or_else(|| SolveError::SolveFailed("no node AAA".into()))?;
        if shared.index_of("ZZZ").is_none() {
            return Err(SolveError::SolveFailed("no node ZZZ".into()));
        }
        shared
            .steps_until(start, |name| name == "ZZZ")
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed("ZZZ is unreachable from AAA".into()))
    }
}

impl PartSolver<2> for Solver {
    /// Each ghost's route is assumed to loop back onto its first `..Z`
    /// node with the same period, so the answer is the LCM of the
    /// individual distances.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cycles = shared
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.ends_with('A'))
            .map(|(start, name)| {
                shared
                    .steps_until(start, |n| n.ends_with('Z'))
                    .inspect(|steps| log::debug!("ghost from {name} reaches a Z node after {steps} steps"))
                    .ok_or_else(|| {
                        SolveError::SolveFailed(format!("no ..Z node reachable from {name}").into())
                    })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        lcm_all(cycles)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no ..A start nodes".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE_1: &str = "RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)";

    const EXAMPLE_2: &str = "LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)";

    const EXAMPLE_GHOSTS: &str = "LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)";

    #[test]
    fn test_part1_examples() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE_1).unwrap(), "2");
        assert_eq!(run_part::<Solver, 1>(EXAMPLE_2).unwrap(), "6");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE_GHOSTS).unwrap(), "6");
    }

    #[test]
    fn test_unreachable_target_fails() {
        let input = "L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)";
        assert!(run_part::<Solver, 1>(input).is_err());
    }

    #[test]
    fn test_missing_start_fails_solve_not_parse() {
        let input = "L\n\nBBB = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)";
        assert!(Solver::parse(input).is_ok());
        assert!(run_part::<Solver, 1>(input).is_err());
    }

    #[test]
    fn test_undefined_node_is_parse_error() {
        assert!(Solver::parse("L\n\nAAA = (QQQ, ZZZ)\nZZZ = (ZZZ, ZZZ)").is_err());
    }
}
