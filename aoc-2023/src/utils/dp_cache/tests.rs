//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_tuple_index_with_hashmap_backend() {
    // Binomial coefficients via Pascal's rule
    struct Binomial;

    impl DpProblem<(u32, u32), u64> for Binomial {
        fn deps(&self, &(n, k): &(u32, u32)) -> Vec<(u32, u32)> {
            if k == 0 || k == n {
                vec![]
            } else {
                vec![(n - 1, k - 1), (n - 1, k)]
            }
        }

        fn compute(&self, _: &(u32, u32), deps: Vec<u64>) -> u64 {
            deps.iter().sum::<u64>().max(1)
        }
    }

    let cache = DpCache::with_problem(HashMapBackend::new(), Binomial);
    assert_eq!(cache.get(&(10, 3)), 120);
    assert_eq!(cache.get(&(30, 15)), 155_117_520);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);

    assert_eq!(*backend.get_or_insert(5, || 42), 42);
    assert_eq!(*backend.get_or_insert(5, || 999), 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.get(&10), None);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<&str, usize> = HashMapBackend::default();

    assert_eq!(*backend.get_or_insert("a", || 1), 1);
    assert_eq!(*backend.get_or_insert("a", || 2), 1);
    assert_eq!(backend.get(&"b"), None);
    assert_eq!(backend.len(), 1);
}
