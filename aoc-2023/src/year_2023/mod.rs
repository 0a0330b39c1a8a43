//! Solutions for the 2023 event, one module per day

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;
pub mod day_7;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_17;
pub mod day_18;
pub mod day_19;
pub mod day_20;

#[cfg(test)]
pub(crate) mod test_util {
    use aoc_solver::{PartSolver, SolverError};

    /// Parse `input` with `S` and solve part `N`
    pub fn run_part<S, const N: u8>(input: &str) -> Result<String, SolverError>
    where
        S: PartSolver<N>,
    {
        let mut shared = S::parse(input)?;
        Ok(S::solve(&mut shared)?)
    }
}
