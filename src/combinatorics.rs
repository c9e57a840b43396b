//! Provides combinatorial utilities for enumerating permutations.
//!
//! # Examples
//!
//! ```rust
//! use numtower::combinatorics::PermutationIterator;
//!
//! let mut p = PermutationIterator::new(3);
//! let mut permutations = vec![];
//! while let Some((a, even)) = p.next() {
//!     permutations.push((a.to_vec(), even));
//! }
//!
//! assert_eq!(permutations.len(), 6);
//! assert_eq!(permutations[0], (vec![0, 1, 2], true));
//! assert_eq!(permutations[1], (vec![1, 0, 2], false));
//! ```
use smallvec::SmallVec;

/// An iterator over all permutations of `0..n`, together with their parity.
///
/// Consecutive permutations differ by a single transposition (Heap's algorithm),
/// so the parity alternates. The first permutation is the identity.
pub struct PermutationIterator {
    indices: SmallVec<[usize; 8]>,
    counters: SmallVec<[usize; 8]>,
    level: usize,
    even: bool,
    init: bool,
}

impl PermutationIterator {
    /// Creates a new `PermutationIterator` over the `n!` permutations of `0..n`.
    pub fn new(n: usize) -> PermutationIterator {
        PermutationIterator {
            indices: (0..n).collect(),
            counters: SmallVec::from_elem(0, n),
            level: 1,
            even: true,
            init: false,
        }
    }

    /// Advances the iterator and returns the next permutation and `true` if it is even.
    pub fn next(&mut self) -> Option<(&[usize], bool)> {
        if !self.init {
            self.init = true;
            return Some((&self.indices[..], self.even));
        }

        let n = self.indices.len();
        while self.level < n {
            let i = self.level;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.indices.swap(0, i);
                } else {
                    self.indices.swap(self.counters[i], i);
                }
                self.even = !self.even;
                self.counters[i] += 1;
                self.level = 1;
                return Some((&self.indices[..], self.even));
            }

            self.counters[i] = 0;
            self.level += 1;
        }

        None
    }
}
