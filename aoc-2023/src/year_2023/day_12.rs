use std::iter;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["2023", "dp"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spring {
    Operational,
    Damaged,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct Record {
    springs: Vec<Spring>,
    groups: Vec<usize>,
}

impl Record {
    /// The record repeated `times` times, springs joined by an unknown
    fn unfold(&self, times: usize) -> Record {
        let springs = iter::repeat_n(self.springs.as_slice(), times)
            .collect_vec()
            .join(&Spring::Unknown);
        Record {
            springs,
            groups: self.groups.repeat(times),
        }
    }

    fn arrangements(&self) -> u64 {
        let cache = DpCache::with_problem(HashMapBackend::new(), Arrangements { record: self });
        cache.get(&(0, 0))
    }
}

/// Index `(i, j)`: ways to place `groups[j..]` in `springs[i..]`
struct Arrangements<'r> {
    record: &'r Record,
}

impl Arrangements<'_> {
    /// Whether a damaged group of length `len` can start at `i`
    fn group_fits(&self, i: usize, len: usize) -> bool {
        let springs = &self.record.springs;
        i + len <= springs.len()
            && springs[i..i + len].iter().all(|&s| s != Spring::Operational)
            && springs.get(i + len) != Some(&Spring::Damaged)
    }
}

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(i, j): &(usize, usize)) -> Vec<(usize, usize)> {
        let Record { springs, groups } = self.record;
        let Some(&spring) = springs.get(i) else {
            return vec![];
        };

        let mut deps = Vec::with_capacity(2);
        if spring != Spring::Damaged {
            deps.push((i + 1, j));
        }
        if spring != Spring::Operational {
            if let Some(&len) = groups.get(j) {
                if self.group_fits(i, len) {
                    deps.push(((i + len + 1).min(springs.len()), j + 1));
                }
            }
        }
        deps
    }

    fn compute(&self, &(i, j): &(usize, usize), deps: Vec<u64>) -> u64 {
        if i >= self.record.springs.len() {
            u64::from(j == self.record.groups.len())
        } else {
            deps.into_iter().sum()
        }
    }
}

fn parse_record(line: &str) -> anyhow::Result<Record> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<springs> <groups>'"))?;
    let springs = springs
        .chars()
        .map(|c| match c {
            '.' => Ok(Spring::Operational),
            '#' => Ok(Spring::Damaged),
            '?' => Ok(Spring::Unknown),
            other => Err(anyhow!("unknown spring {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let groups = groups
        .trim()
        .split(',')
        .map(|g| match g.trim().parse::<usize>() {
            Ok(0) => Err(anyhow!("group sizes must be positive")),
            Ok(len) => Ok(len),
            Err(e) => Err(anyhow!("invalid group size {g:?}: {e}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Record { springs, groups })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_record(line).map_err(|e| line_error(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(Record::arrangements).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|r| r.unfold(5).arrangements()).sum();
        Ok(total.to_string())
    }
}
