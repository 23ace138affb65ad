// File: crates/movie-stats/src/group.rs
// Summary: Insertion-ordered key -> accumulator table for group-by-reduce.

use std::collections::HashMap;
use std::hash::Hash;

/// Groups keep the order in which their key was first seen, independent of
/// the hash map's iteration order.
pub struct Grouped<K, A> {
    index: HashMap<K, usize>,
    groups: Vec<(K, A)>,
}

impl<K: Eq + Hash + Clone, A> Grouped<K, A> {
    pub fn new() -> Self {
        Self { index: HashMap::new(), groups: Vec::new() }
    }

    /// Accumulator for `key`, created with `init` on first sight.
    pub fn entry(&mut self, key: K, init: impl FnOnce() -> A) -> &mut A {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.groups.len();
                self.index.insert(key.clone(), i);
                self.groups.push((key, init()));
                i
            }
        };
        &mut self.groups[i].1
    }

    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Groups in first-appearance order.
    pub fn into_groups(self) -> Vec<(K, A)> {
        self.groups
    }
}

impl<K: Eq + Hash + Clone, A> Default for Grouped<K, A> {
    fn default() -> Self { Self::new() }
}

/// Running arithmetic mean (sum / count, summed in insertion order).
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanAcc {
    pub sum: f64,
    pub count: usize,
}

impl MeanAcc {
    pub fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.sum / self.count as f64) }
    }
}
