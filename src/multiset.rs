//! Sorted integer multisets.
//!
//! A [`TokenMultiset`] stores the tokens of a single Petri-net place as an
//! ascending-sorted sequence of `i32` values with duplicates. Keeping the
//! sequence canonically sorted makes equality, ordering and hashing
//! order-independent without resorting to set semantics: two multisets are
//! equal iff their sorted sequences are equal.

use std::fmt;

/// Initial storage capacity of a fresh multiset.
pub const INIT_CAPACITY: usize = 2;

/// Fixed growth increment applied when the storage is full.
///
/// Growth is by a fixed step, not geometric. Places hold a handful of tokens
/// in practice, so the simpler policy keeps memory tight and predictable.
pub const GROW_BY: usize = 4;

/// A sorted multiset of integer tokens.
///
/// # Invariants
///
/// - The contents are always sorted ascending.
/// - Duplicates are allowed.
/// - Equality, ordering and hashing are defined only over the sorted
///   sequence.
///
/// `Clone` performs a deep copy with independent storage. Shared, read-only
/// aliasing is done one level up by wrapping the multiset in `Rc` (see
/// [`Marking`][crate::marking::Marking]).
#[derive(Debug, Clone)]
pub struct TokenMultiset {
    data: Vec<i32>,
}

impl TokenMultiset {
    /// Creates an empty multiset with [`INIT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INIT_CAPACITY),
        }
    }

    /// Number of tokens, counting repetitions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> i32 {
        self.data[index]
    }

    /// The sorted token sequence.
    pub fn tokens(&self) -> &[i32] {
        &self.data
    }

    /// Inserts `value`, keeping the sequence sorted.
    ///
    /// When the storage is full it grows by exactly [`GROW_BY`] slots. The
    /// value is placed before the first element that is `>= value`, shifting
    /// the tail right by one.
    pub fn add(&mut self, value: i32) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(GROW_BY);
        }
        let pos = self
            .data
            .iter()
            .position(|&x| x >= value)
            .unwrap_or(self.data.len());
        self.data.insert(pos, value);
    }

    /// Removes one occurrence equal to `value`, if any.
    ///
    /// The first match (by scan) is overwritten with the last element and the
    /// whole sequence is re-sorted. Deliberately simple rather than
    /// asymptotically optimal. A missing value is a silent no-op.
    pub fn remove_by_value(&mut self, value: i32) {
        if let Some(pos) = self.data.iter().position(|&x| x == value) {
            self.data.swap_remove(pos);
            self.data.sort_unstable();
        }
    }

    /// Removes the token at `index`, shifting later elements left by one.
    ///
    /// The order is preserved, so no re-sort is needed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_by_index(&mut self, index: usize) {
        assert!(
            index < self.data.len(),
            "Index {} out of bounds (size {})",
            index,
            self.data.len()
        );
        self.data.remove(index);
    }

    /// Order-dependent hash over the sorted sequence.
    ///
    /// Folds each element from the highest index down to the lowest via
    /// `h = (h ^ (h << 5)) ^ element` in wrapping `i32` arithmetic, then
    /// zero-extends the result. The fold direction and operator sequence are
    /// kept exactly; only the final widening to `u64` differs from the
    /// original 32-bit scheme.
    pub fn hash_value(&self) -> u64 {
        let mut h: i32 = 0;
        for &value in self.data.iter().rev() {
            h ^= h.wrapping_shl(5);
            h ^= value;
        }
        h as u32 as u64
    }
}

impl Default for TokenMultiset {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TokenMultiset {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for TokenMultiset {}

impl PartialOrd for TokenMultiset {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TokenMultiset {
    /// Total order: size first (fewer is less), then element-wise from the
    /// highest index down. The direction is arbitrary but fixed, since it
    /// decides which of two non-equal multisets is reported less.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.data.len().cmp(&other.data.len()).then_with(|| {
            for (&a, &b) in self.data.iter().rev().zip(other.data.iter().rev()) {
                let ord = a.cmp(&b);
                if ord != std::cmp::Ordering::Equal {
                    return ord;
                }
            }
            std::cmp::Ordering::Equal
        })
    }
}

impl std::hash::Hash for TokenMultiset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl FromIterator<i32> for TokenMultiset {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut ms = Self::new();
        for value in iter {
            ms.add(value);
        }
        ms
    }
}

impl fmt::Display for TokenMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
