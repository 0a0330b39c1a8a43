use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::value;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["2023", "hashing"])]
pub struct Solver;

/// The HASH algorithm: `(h + byte) * 17 mod 256` over every byte
pub fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |h, b| (h + usize::from(b)) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    raw: &'a str,
    label: &'a str,
    op: Operation,
}

fn parse_step(raw: &str) -> Result<Step<'_>, ParseError> {
    let (label, op) = if let Some(label) = raw.strip_suffix('-') {
        (label, Operation::Remove)
    } else if let Some((label, focal)) = raw.split_once('=') {
        (label, Operation::Insert(value(focal, "focal length")?))
    } else {
        return Err(ParseError::InvalidFormat(format!(
            "step {raw:?} is neither 'label-' nor 'label=N'"
        )));
    };
    Ok(Step { raw, label, op })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::MissingData("empty initialization sequence".into()));
        }
        trimmed
            .split(',')
            .map(|raw| parse_step(raw.trim()))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|step| hash(step.raw)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in shared.iter() {
            let lenses = &mut boxes[hash(step.label)];
            let slot = lenses.iter().position(|(label, _)| *label == step.label);
            match (step.op, slot) {
                (Operation::Remove, Some(i)) => {
                    lenses.remove(i);
                }
                (Operation::Remove, None) => {}
                (Operation::Insert(focal), Some(i)) => lenses[i].1 = focal,
                (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
            }
        }

        let power: usize = boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * usize::from(focal))
            })
            .sum();
        Ok(power.to_string())
    }
}
