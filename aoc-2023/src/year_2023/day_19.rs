use std::collections::HashMap;
use std::ops::Range;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["2023", "intervals"])]
pub struct Solver;

const CATEGORIES: [char; 4] = ['x', 'm', 'a', 's'];
const START: &str = "in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Accept,
    Reject,
    Workflow(&'a str),
}

impl<'a> Target<'a> {
    fn parse(s: &'a str) -> Self {
        match s {
            "A" => Target::Accept,
            "R" => Target::Reject,
            name => Target::Workflow(name),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Less,
    Greater,
}

#[derive(Debug, Clone, Copy)]
struct Rule<'a> {
    category: usize,
    cmp: Comparison,
    value: u64,
    target: Target<'a>,
}

impl Rule<'_> {
    fn matches(&self, part: &[u64; 4]) -> bool {
        let rating = part[self.category];
        match self.cmp {
            Comparison::Less => rating < self.value,
            Comparison::Greater => rating > self.value,
        }
    }

    /// Split `range` into the sub-ranges that do and do not match
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        match self.cmp {
            Comparison::Less => (
                range.start..range.end.min(self.value),
                range.start.max(self.value)..range.end,
            ),
            Comparison::Greater => (
                range.start.max(self.value.saturating_add(1))..range.end,
                range.start..range.end.min(self.value.saturating_add(1)),
            ),
        }
    }
}

#[derive(Debug, Clone)]
struct Workflow<'a> {
    rules: Vec<Rule<'a>>,
    fallback: Target<'a>,
}

#[derive(Debug)]
pub struct System<'a> {
    workflows: HashMap<&'a str, Workflow<'a>>,
    parts: Vec<[u64; 4]>,
}

impl<'a> System<'a> {
    fn workflow(&self, name: &str) -> Result<&Workflow<'a>, SolveError> {
        self.workflows
            .get(name)
            .ok_or_else(|| SolveError::SolveFailed(format!("unknown workflow {name:?}").into()))
    }

    fn accepts(&self, part: &[u64; 4]) -> Result<bool, SolveError> {
        let mut current = Target::Workflow(START);
        // Any route longer than the workflow count revisits one
        for _ in 0..=self.workflows.len() {
            let name = match current {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(name) => name,
            };
            let workflow = self.workflow(name)?;
            current = workflow
                .rules
                .iter()
                .find(|rule| rule.matches(part))
                .map_or(workflow.fallback, |rule| rule.target);
        }
        Err(SolveError::SolveFailed("workflows loop forever".into()))
    }

    /// Number of rating combinations within `ranges` that `target` accepts
    fn count_accepted(
        &self,
        target: Target<'a>,
        mut ranges: [Range<u64>; 4],
        depth: usize,
    ) -> Result<u64, SolveError> {
        let name = match target {
            Target::Accept => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
            Target::Reject => return Ok(0),
            Target::Workflow(name) => name,
        };
        if depth > self.workflows.len() {
            return Err(SolveError::SolveFailed("workflows loop forever".into()));
        }

        let workflow = self.workflow(name)?;
        let mut total = 0;
        for rule in &workflow.rules {
            let (matched, rest) = rule.split(&ranges[rule.category]);
            if !matched.is_empty() {
                let mut sub = ranges.clone();
                sub[rule.category] = matched;
                total += self.count_accepted(rule.target, sub, depth + 1)?;
            }
            if rest.is_empty() {
                return Ok(total);
            }
            ranges[rule.category] = rest;
        }
        Ok(total + self.count_accepted(workflow.fallback, ranges, depth + 1)?)
    }
}

fn parse_rule(rule: &str) -> anyhow::Result<Rule<'_>> {
    let (condition, target) = rule
        .split_once(':')
        .ok_or_else(|| anyhow!("rule {rule:?} has no ':'"))?;
    let mut chars = condition.chars();
    let category = chars
        .next()
        .and_then(|c| CATEGORIES.iter().position(|&cat| cat == c))
        .ok_or_else(|| anyhow!("unknown category in {rule:?}"))?;
    let cmp = match chars.next() {
        Some('<') => Comparison::Less,
        Some('>') => Comparison::Greater,
        _ => bail!("expected '<' or '>' in {rule:?}"),
    };
    Ok(Rule {
        category,
        cmp,
        value: chars.as_str().parse()?,
        target: Target::parse(target),
    })
}

fn parse_workflow(line: &str) -> anyhow::Result<(&str, Workflow<'_>)> {
    let (name, body) = line
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("expected 'name{{rules}}'"))?;
    let mut steps: Vec<&str> = body.split(',').collect();
    let fallback = steps
        .pop()
        .filter(|s| !s.is_empty() && !s.contains(':'))
        .ok_or_else(|| anyhow!("workflow {name:?} must end with a fallback target"))?;
    let rules = steps.into_iter().map(parse_rule).collect::<anyhow::Result<_>>()?;
    Ok((
        name,
        Workflow {
            rules,
            fallback: Target::parse(fallback),
        },
    ))
}

fn parse_part(line: &str) -> anyhow::Result<[u64; 4]> {
    let body = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(|| anyhow!("expected '{{x=..,m=..,a=..,s=..}}'"))?;
    let mut part = [0; 4];
    for (slot, entry) in body.split(',').enumerate() {
        let (name, rating) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("rating {entry:?} has no '='"))?;
        if slot >= 4 || name.len() != 1 || !name.starts_with(CATEGORIES[slot]) {
            bail!("ratings must be listed as x, m, a, s");
        }
        part[slot] = rating.parse()?;
    }
    Ok(part)
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut workflows = HashMap::new();
        let mut parts = Vec::new();

        for (idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            if line.starts_with('{') {
                parts.push(parse_part(line).map_err(|e| line_error(idx, e))?);
            } else {
                let (name, workflow) = parse_workflow(line).map_err(|e| line_error(idx, e))?;
                workflows.insert(name, workflow);
            }
        }

        if !workflows.contains_key(START) {
            return Err(ParseError::MissingData(format!("no {START:?} workflow")));
        }
        Ok(System { workflows, parts })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for part in &shared.parts {
            if shared.accepts(part)? {
                total = part
                    .iter()
                    .try_fold(total, |acc: u64, &rating| acc.checked_add(rating))
                    .ok_or_else(|| SolveError::SolveFailed("rating total overflows".into()))?;
            }
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = [1..4001, 1..4001, 1..4001, 1..4001];
        Ok(shared
            .count_accepted(Target::Workflow(START), full, 0)?
            .to_string())
    }
}
