//! Markings: per-place token multisets with a composite identity.
//!
//! A [`Marking`] is a snapshot of token contents across all places of a net,
//! one [`TokenMultiset`][crate::multiset::TokenMultiset] per place. Places
//! are held behind `Rc`, so cloning a marking is cheap (per-place handle
//! copy) and mutation is copy-on-write: a place shared with another marking
//! is deep-copied before it is changed, which makes mutating through an
//! alias impossible.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::multiset::TokenMultiset;

/// Seed of the composite marking hash.
const HASH_SEED: u64 = 0xDEADDAD;

/// Initial multiplier of the composite marking hash.
const HASH_MULT: u64 = 0xBADBEEF;

/// A marking: one token multiset per place, arity fixed at construction.
///
/// Two markings are equal iff every place's multiset is equal. The hash is
/// consistent with equality. A marking is never mutated once it is handed to
/// the adapter layer; mutation is only used while building one.
#[derive(Debug, Clone)]
pub struct Marking {
    places: Vec<Rc<TokenMultiset>>,
}

impl Marking {
    /// Creates a marking with `num_places` empty places.
    pub fn new(num_places: usize) -> Self {
        let places = (0..num_places)
            .map(|_| Rc::new(TokenMultiset::new()))
            .collect();
        Self { places }
    }

    /// Builds a marking from per-place token slices.
    pub fn from_tokens(tokens: &[&[i32]]) -> Self {
        let places = tokens
            .iter()
            .map(|ts| Rc::new(ts.iter().copied().collect::<TokenMultiset>()))
            .collect();
        Self { places }
    }

    /// Number of places.
    pub fn num_places(&self) -> usize {
        self.places.len()
    }

    /// Read access to the place at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn place(&self, index: usize) -> &TokenMultiset {
        &self.places[index]
    }

    /// Mutable access to the place at `index`.
    ///
    /// If the place is shared with another marking it is deep-copied first
    /// (`Rc::make_mut`), so the other marking is never affected.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn place_mut(&mut self, index: usize) -> &mut TokenMultiset {
        Rc::make_mut(&mut self.places[index])
    }

    /// Composite hash over the per-place hashes, in slot order.
    ///
    /// Starting from a fixed seed, each place hash is folded in via
    /// `h = (h ^ place_hash) * mult` with an evolving multiplier
    /// (`mult += 82520 + 2*i` after place `i`), all wrapping. Consistent
    /// with equality: equal markings yield equal hashes.
    pub fn hash_value(&self) -> u64 {
        let mut h = HASH_SEED;
        let mut mult = HASH_MULT;
        for (i, place) in self.places.iter().enumerate() {
            h = (h ^ place.hash_value()).wrapping_mul(mult);
            mult = mult.wrapping_add(82520 + 2 * i as u64);
        }
        h
    }

    /// Renders the marking as `"name: [tokens], ..."`, places sorted by name.
    ///
    /// # Panics
    ///
    /// Panics if `names.len()` differs from the number of places.
    pub fn dump(&self, names: &[String]) -> String {
        assert_eq!(
            names.len(),
            self.places.len(),
            "Place name count must match the marking arity"
        );
        let mut order: Vec<usize> = (0..names.len()).collect();
        order.sort_by(|&a, &b| names[a].cmp(&names[b]));
        let mut s = String::new();
        for (k, &i) in order.iter().enumerate() {
            if k > 0 {
                s.push_str(", ");
            }
            s.push_str(&names[i]);
            s.push_str(": ");
            s.push_str(&self.places[i].to_string());
        }
        s
    }
}

impl PartialEq for Marking {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Marking {}

impl PartialOrd for Marking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Marking {
    /// Total order: place count first, then per-place order in slot order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.places.len().cmp(&other.places.len()).then_with(|| {
            for (a, b) in self.places.iter().zip(other.places.iter()) {
                let ord = a.cmp(b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        })
    }
}

impl std::hash::Hash for Marking {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, place) in self.places.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", place)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_from_tokens() {
        let m = Marking::from_tokens(&[&[5, 3, 3], &[]]);
        assert_eq!(m.num_places(), 2);
        assert_eq!(m.place(0).tokens(), &[3, 3, 5]);
        assert!(m.place(1).is_empty());
    }

    #[test]
    fn test_eq_and_hash_consistency() {
        let a = Marking::from_tokens(&[&[1, 2], &[7]]);
        let b = Marking::from_tokens(&[&[2, 1], &[7]]);
        assert_eq!(a, b);
        assert_eq!(a.hash_value(), b.hash_value());

        let c = Marking::from_tokens(&[&[1, 2], &[8]]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_stable_across_calls() {
        let m = Marking::from_tokens(&[&[1], &[2, 3], &[]]);
        assert_eq!(m.hash_value(), m.hash_value());
    }

    #[test]
    fn test_empty_markings_of_different_arity() {
        let a = Marking::new(2);
        let b = Marking::new(3);
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_clone_shares_places_until_mutation() {
        let a = Marking::from_tokens(&[&[1, 2]]);
        let mut b = a.clone();
        assert_eq!(a, b);

        // Mutation copies the shared place; the original stays intact.
        b.place_mut(0).add(9);
        assert_eq!(a.place(0).tokens(), &[1, 2]);
        assert_eq!(b.place(0).tokens(), &[1, 2, 9]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ordering_slot_order() {
        let a = Marking::from_tokens(&[&[1], &[5]]);
        let b = Marking::from_tokens(&[&[2], &[0]]);
        // First place decides: [1] < [2].
        assert!(a < b);
    }

    #[test]
    fn test_dump_sorts_places_by_name() {
        let m = Marking::from_tokens(&[&[1, 2], &[], &[5]]);
        let names = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(m.dump(&names), "a: [], b: [5], c: [1, 2]");
    }

    #[test]
    #[should_panic(expected = "match the marking arity")]
    fn test_dump_arity_mismatch() {
        let m = Marking::new(2);
        m.dump(&["only".to_string()]);
    }

    #[test]
    fn test_display() {
        let m = Marking::from_tokens(&[&[2, 1], &[]]);
        assert_eq!(m.to_string(), "[1, 2], []");
    }
}
