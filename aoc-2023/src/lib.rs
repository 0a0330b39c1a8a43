//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day lives in its own module under [`year_2023`] and registers itself
//! with the solver framework through `#[derive(AutoRegisterSolver)]`; linking
//! this crate is enough for `SolverRegistryBuilder::register_all_plugins` to
//! find them. Days share nothing except the helpers in [`utils`].

pub mod utils;

#[cfg(feature = "year-2023")]
pub mod year_2023;
