use std::ops::Range;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{line_error, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "intervals"])]
pub struct Solver;

/// `source..source + len` maps onto `dest..dest + len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapRange {
    dest: u64,
    source: u64,
    len: u64,
}

impl MapRange {
    fn source_range(&self) -> Range<u64> {
        self.source..self.source + self.len
    }

    fn shift(&self, value: u64) -> u64 {
        value - self.source + self.dest
    }
}

/// One `x-to-y map:` section
#[derive(Debug, Clone, Default)]
struct Mapping {
    ranges: Vec<MapRange>,
}

impl Mapping {
    /// Values not covered by any range pass through unchanged
    fn apply(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find(|range| range.source_range().contains(&value))
            .map_or(value, |range| range.shift(value))
    }

    fn apply_ranges(&self, input: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut mapped = Vec::new();
        let mut pending = input;

        for range in &self.ranges {
            let source = range.source_range();
            let mut unmatched = Vec::new();
            for r in pending {
                let before = r.start..r.end.min(source.start);
                let overlap = r.start.max(source.start)..r.end.min(source.end);
                let after = r.start.max(source.end)..r.end;

                if !overlap.is_empty() {
                    mapped.push(range.shift(overlap.start)..range.shift(overlap.end - 1) + 1);
                }
                unmatched.extend([before, after].into_iter().filter(|r| !r.is_empty()));
            }
            pending = unmatched;
        }

        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    mappings: Vec<Mapping>,
}

fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let mut lines = input.lines().map(str::trim).enumerate();

    let (_, first) = lines
        .find(|(_, line)| !line.is_empty())
        .ok_or_else(|| ParseError::MissingData("empty almanac".into()))?;
    let seeds = first
        .strip_prefix("seeds:")
        .ok_or_else(|| ParseError::InvalidFormat("almanac must start with 'seeds:'".into()))
        .and_then(numbers)?;

    let mut mappings: Vec<Mapping> = Vec::new();
    for (idx, line) in lines.filter(|(_, line)| !line.is_empty()) {
        if line.ends_with("map:") {
            mappings.push(Mapping::default());
            continue;
        }
        let current = mappings
            .last_mut()
            .ok_or_else(|| line_error(idx, "range listed before any map header"))?;
        match numbers::<u64>(line).map_err(|e| line_error(idx, e))?[..] {
            [dest, source, len] => {
                if source.checked_add(len).is_none() || dest.checked_add(len).is_none() {
                    return Err(line_error(idx, anyhow!("range end overflows u64")));
                }
                current.ranges.push(MapRange { dest, source, len })
            }
            _ => return Err(line_error(idx, anyhow!("expected three numbers"))),
        }
    }

    Ok(Almanac { seeds, mappings })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.mappings.iter().fold(seed, |v, m| m.apply(v)))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no seeds listed".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                "seed ranges need an even number of values".into(),
            ));
        }
        let seeds: Vec<Range<u64>> = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| {
                pair[0]
                    .checked_add(pair[1])
                    .map(|end| pair[0]..end)
                    .ok_or_else(|| SolveError::SolveFailed("seed range end overflows u64".into()))
            })
            .filter(|r| !matches!(r, Ok(range) if range.is_empty()))
            .collect::<Result<_, _>>()?;

        shared
            .mappings
            .iter()
            .fold(seeds, |ranges, m| m.apply_ranges(ranges))
            .iter()
            .map(|r| r.start)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no seed ranges listed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2023::test_util::run_part;
    use proptest::prelude::*;

    const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

    #[test]
    fn test_part1_example() {
        assert_eq!(run_part::<Solver, 1>(EXAMPLE).unwrap(), "35");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(run_part::<Solver, 2>(EXAMPLE).unwrap(), "46");
    }

    #[test]
    fn test_unmapped_values_pass_through() {
        let almanac = parse_almanac(EXAMPLE).unwrap();
        assert_eq!(almanac.mappings[0].apply(10), 10);
        assert_eq!(almanac.mappings[0].apply(98), 50);
        assert_eq!(almanac.mappings[0].apply(53), 55);
    }

    #[test]
    fn test_odd_seed_count_fails_part2() {
        let input = "seeds: 1 2 3\n\nseed-to-soil map:\n5 1 1";
        assert_eq!(run_part::<Solver, 1>(input).unwrap(), "2");
        assert!(run_part::<Solver, 2>(input).is_err());
    }

    proptest! {
        #[test]
        fn prop_range_mapping_matches_pointwise(
            start in 0u64..200,
            len in 1u64..60,
        ) {
            let almanac = parse_almanac(EXAMPLE).unwrap();
            let mapped = almanac
                .mappings
                .iter()
                .fold(vec![start..start + len], |ranges, m| m.apply_ranges(ranges));

            let pointwise = (start..start + len)
                .map(|seed| almanac.mappings.iter().fold(seed, |v, m| m.apply(v)))
                .min()
                .unwrap();
            let via_ranges = mapped.iter().map(|r| r.start).min().unwrap();
            prop_assert_eq!(pointwise, via_ranges);

            let total: u64 = mapped.iter().map(|r| r.end - r.start).sum();
            prop_assert_eq!(total, len);
        }
    }

    #[test]
    fn test_overflowing_ranges() {
        let map = "seeds: 1 2\n\nseed-to-soil map:\n0 18446744073709551615 2";
        assert!(matches!(Solver::parse(map), Err(ParseError::InvalidFormat(_))));

        let seeds = "seeds: 18446744073709551615 2\n\nseed-to-soil map:\n0 1 2";
        assert!(matches!(
            run_part::<Solver, 2>(seeds),
            Err(aoc_solver::SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }
}
