use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{numbers, value};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn beats(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Number of hold times that travel further than the record.
    ///
    /// Distance `h * (t - h)` is symmetric around `t / 2`, so the winners
    /// form `lo..=t - lo` for the smallest winning `lo`.
    fn ways_to_win(&self) -> u64 {
        let t = self.time as f64;
        let disc = t * t - 4.0 * self.record as f64;
        if disc < 0.0 {
            return 0;
        }

        let mut lo = ((t - disc.sqrt()) / 2.0).floor().max(0.0) as u64;
        lo = lo.min(self.time / 2);
        while lo > 0 && self.beats(lo - 1) {
            lo -= 1;
        }
        while lo <= self.time / 2 && !self.beats(lo) {
            lo += 1;
        }

        if lo > self.time / 2 {
            0
        } else {
            self.time - 2 * lo + 1
        }
    }
}

#[derive(Debug)]
pub struct Races {
    races: Vec<Race>,
    /// The single race read by ignoring the spaces between numbers
    joined: Race,
}

fn labelled<'a>(line: Option<&'a str>, label: &str) -> Result<&'a str, ParseError> {
    line.and_then(|l| l.trim().strip_prefix(label))
        .ok_or_else(|| ParseError::InvalidFormat(format!("expected a line starting with {label:?}")))
}

impl AocParser for Solver {
    type SharedData<'a> = Races;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let times = labelled(lines.next(), "Time:")?;
        let records = labelled(lines.next(), "Distance:")?;

        let time_values: Vec<u64> = numbers(times)?;
        let record_values: Vec<u64> = numbers(records)?;
        if time_values.len() != record_values.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                time_values.len(),
                record_values.len()
            )));
        }

        let joined_digits = |s: &str| s.split_whitespace().collect::<String>();
        let joined = Race {
            time: value(&joined_digits(times), "joined time")?,
            record: value(&joined_digits(records), "joined distance")?,
        };

        let races = time_values
            .into_iter()
            .zip(record_values)
            .map(|(time, record)| Race { time, record })
            .collect();
        Ok(Races { races, joined })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared.races.iter().map(Race::ways_to_win).product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.joined.ways_to_win().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;
    use proptest::prelude::*;

    const EXAMPLE: &str = "Time:      7  15   30
Distance:  9  40  200";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "288");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "71503");
    }

    #[test]
    fn test_unbeatable_race() {
        let race = Race { time: 4, record: 4 };
        assert_eq!(race.ways_to_win(), 0);
        let race = Race { time: 4, record: 3 };
        assert_eq!(race.ways_to_win(), 1);
    }

    #[test]
    fn test_mismatched_columns() {
        assert!(Solver::parse("Time: 1 2\nDistance: 3").is_err());
        assert!(Solver::parse("Distance: 3\nTime: 1").is_err());
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(time in 0u64..300, record in 0u64..25_000) {
            let race = Race { time, record };
            let brute = (0..=time).filter(|&h| race.beats(h)).count() as u64;
            prop_assert_eq!(race.ways_to_win(), brute);
        }
    }
}
