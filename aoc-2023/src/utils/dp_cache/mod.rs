//! Dynamic programming cache with lazy evaluation
//!
//! Memoises problems whose values depend on other values in a directed
//! acyclic graph. A problem is described by [`DpProblem`] and values are stored in a
//! [`Backend`]:
//!
//! - [`VecBackend`]: dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: any hashable index, e.g. `(usize, usize)` states
//!
//! **No cycle detection.** Dependencies must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_2023::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
//!         match (r, c) {
//!             (0, 0) => vec![],
//!             (0, c) => vec![(0, c - 1)],
//!             (r, 0) => vec![(r - 1, 0)],
//!             (r, c) => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4)
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
