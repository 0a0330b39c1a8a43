use std::collections::{HashMap, VecDeque};

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::math::lcm_all;
use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 20, tags = ["2023", "simulation", "lcm"])]
pub struct Solver;

const BROADCASTER: &str = "broadcaster";
const PRESSES: usize = 1000;
const MAX_PRESSES: u64 = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcaster,
    FlipFlop,
    Conjunction,
    /// Named only as a destination
    Sink,
}

/// Module graph with names borrowed from the input
#[derive(Debug)]
pub struct Network<'a> {
    names: Vec<&'a str>,
    kinds: Vec<Kind>,
    /// `(destination, slot in the destination's inputs)` per module
    outputs: Vec<Vec<(usize, usize)>>,
    inputs: Vec<Vec<usize>>,
    broadcaster: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pulse {
    from: usize,
    to: usize,
    high: bool,
}

/// Mutable module state for one simulation run
struct State {
    flip_flops: Vec<bool>,
    memory: Vec<Vec<bool>>,
    /// Count of remembered high pulses per conjunction
    highs: Vec<usize>,
}

impl<'a> Network<'a> {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    fn fresh_state(&self) -> State {
        State {
            flip_flops: vec![false; self.names.len()],
            memory: self.inputs.iter().map(|inputs| vec![false; inputs.len()]).collect(),
            highs: vec![0; self.names.len()],
        }
    }

    /// Push the button once, reporting every pulse (the button's included)
    fn press(&self, state: &mut State, mut observe: impl FnMut(Pulse)) {
        let mut queue = VecDeque::from([(
            Pulse {
                from: self.broadcaster,
                to: self.broadcaster,
                high: false,
            },
            0,
        )]);

        while let Some((pulse, slot)) = queue.pop_front() {
            observe(pulse);
            let module = pulse.to;
            let send = match self.kinds[module] {
                Kind::Broadcaster => Some(pulse.high),
                Kind::FlipFlop if pulse.high => None,
                Kind::FlipFlop => {
                    state.flip_flops[module] = !state.flip_flops[module];
                    Some(state.flip_flops[module])
                }
                Kind::Conjunction => {
                    let remembered = &mut state.memory[module][slot];
                    if *remembered != pulse.high {
                        *remembered = pulse.high;
                        if pulse.high {
                            state.highs[module] += 1;
                        } else {
                            state.highs[module] -= 1;
                        }
                    }
                    Some(state.highs[module] != self.inputs[module].len())
                }
                Kind::Sink => None,
            };

            if let Some(high) = send {
                for &(to, slot) in &self.outputs[module] {
                    queue.push_back((
                        Pulse {
                            from: module,
                            to,
                            high,
                        },
                        slot,
                    ));
                }
            }
        }
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut declared: Vec<(Kind, &str, Vec<&str>)> = Vec::new();
    for (idx, line) in input.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        let (module, targets) = line
            .split_once("->")
            .ok_or_else(|| line_error(idx, "expected 'module -> targets'"))?;
        let module = module.trim();
        let (kind, name) = if module == BROADCASTER {
            (Kind::Broadcaster, module)
        } else if let Some(name) = module.strip_prefix('%') {
            (Kind::FlipFlop, name)
        } else if let Some(name) = module.strip_prefix('&') {
            (Kind::Conjunction, name)
        } else {
            return Err(line_error(idx, format!("unknown module type in {module:?}")).into());
        };
        let targets = targets
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        declared.push((kind, name, targets));
    }

    let mut names = Vec::new();
    let mut kinds = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for &(kind, name, _) in &declared {
        if index.insert(name, names.len()).is_some() {
            return Err(anyhow!("module {name:?} is declared twice"));
        }
        names.push(name);
        kinds.push(kind);
    }
    for &target in declared.iter().flat_map(|(_, _, targets)| targets) {
        if !index.contains_key(target) {
            index.insert(target, names.len());
            names.push(target);
            kinds.push(Kind::Sink);
        }
    }

    let mut outputs = vec![Vec::new(); names.len()];
    let mut inputs = vec![Vec::new(); names.len()];
    for (from, (_, _, targets)) in declared.iter().enumerate() {
        for target in targets {
            let to = index[target];
            outputs[from].push((to, inputs[to].len()));
            inputs[to].push(from);
        }
    }

    let broadcaster = index
        .get(BROADCASTER)
        .copied()
        .ok_or_else(|| anyhow!("no {BROADCASTER} module"))?;

    Ok(Network {
        names,
        kinds,
        outputs,
        inputs,
        broadcaster,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut state = shared.fresh_state();
        let (mut low, mut high) = (0u64, 0u64);
        for _ in 0..PRESSES {
            shared.press(&mut state, |pulse| {
                if pulse.high {
                    high += 1;
                } else {
                    low += 1;
                }
            });
        }
        Ok((low * high).to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Presses until `rx` gets a low pulse.
    ///
    /// `rx` must be fed by a single conjunction. That conjunction sends low
    /// once all its inputs last sent high, and each input is assumed to
    /// fire high on a fixed period, so the answer is the LCM of the first
    /// press on which each input sends high.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rx = shared
            .index_of("rx")
            .ok_or_else(|| SolveError::SolveFailed("no rx module".into()))?;
        let hub = match shared.inputs[rx][..] {
            [hub] if shared.kinds[hub] == Kind::Conjunction => hub,
            _ => {
                return Err(SolveError::SolveFailed(
                    "rx must be fed by exactly one conjunction".into(),
                ));
            }
        };
        let watched = &shared.inputs[hub];
        let mut first_high: Vec<Option<u64>> = vec![None; watched.len()];
        let mut state = shared.fresh_state();

        for presses in 1..=MAX_PRESSES {
            shared.press(&mut state, |pulse| {
                if pulse.to == hub && pulse.high {
                    if let Some(i) = watched.iter().position(|&w| w == pulse.from) {
                        first_high[i].get_or_insert(presses);
                    }
                }
            });

            if let Some(periods) = first_high.iter().copied().collect::<Option<Vec<u64>>>() {
                for (&input, period) in watched.iter().zip(&periods) {
                    log::debug!("{} first sends high on press {period}", shared.names[input]);
                }
                return lcm_all(periods)
                    .map(|presses| presses.to_string())
                    .ok_or_else(|| SolveError::SolveFailed("rx feeder has no inputs".into()));
            }
        }

        Err(SolveError::SolveFailed(
            format!("rx still silent after {MAX_PRESSES} presses").into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;

    const EXAMPLE_1: &str = "broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a";

    const EXAMPLE_2: &str = "broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output";

    const COUNTERS: &str = "broadcaster -> a
%a -> x, b
%b -> y
&x -> hub
&y -> hub
&hub -> rx";

    #[test]
    fn test_part1_examples() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE_1).unwrap(), "32000000");
        assert_eq!(run_part::<Solver, 1>(EXAMPLE_2).unwrap(), "11687500");
    }

    #[test]
    fn test_part2_counter_network() {
        assert_eq!(run_part::<Solver, 2>(COUNTERS).unwrap(), "4");
    }

    #[test]
    fn test_part2_requires_rx() {
        assert!(run_part::<Solver, 2>(EXAMPLE_1).is_err());
        assert!(run_part::<Solver, 2>("broadcaster -> a\n%a -> rx").is_err());
    }

    #[test]
    fn test_single_press_pulses() {
        let network = Solver::parse(EXAMPLE_1).unwrap();
        let mut state = network.fresh_state();
        let mut pulses = Vec::new();
        network.press(&mut state, |p| pulses.push(p.high));
        assert_eq!(pulses.iter().filter(|&&h| !h).count(), 8);
        assert_eq!(pulses.iter().filter(|&&h| h).count(), 4);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("%a -> b").is_err());
        assert!(Solver::parse("broadcaster -> a\n?a -> b").is_err());
        assert!(Solver::parse("broadcaster -> a\n%a -> b\n&a -> b").is_err());
    }
}
