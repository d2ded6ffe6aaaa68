//! The net-model facade contract.
//!
//! The adapter layer never looks inside a marking; everything it needs is
//! behind [`NetModel`]: the initial marking, successor markings, identity
//! (hash/compare), cloning, a textual dump, and atomic-proposition checks.
//! The model is injected into the adapter at construction time, so there is
//! no global instance anywhere.

use std::cmp::Ordering;
use std::fmt;

/// A net-model atomic-proposition identifier.
///
/// This is the small integer embedded in proposition names (`p0`, `p1`, ...)
/// by the formula layer; the model decides what each identifier means.
/// Unlike [`Var`][crate::types::Var], zero is a valid identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PropId(u32);

impl PropId {
    pub fn new(id: u32) -> Self {
        PropId(id)
    }

    /// Returns the raw identifier as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<PropId> for u32 {
    fn from(prop: PropId) -> Self {
        prop.0
    }
}

/// The external net-model collaborator.
///
/// `Marking` is an opaque shared handle: cloning it acquires another strong
/// reference to the same marking (cheap), while [`marking_clone`] produces an
/// independent deep copy. All operations are synchronous and free of I/O.
///
/// # Contract
///
/// - [`marking_hash`] is consistent with [`marking_compare`]: markings that
///   compare `Equal` hash identically.
/// - [`marking_compare`] is a total order; only `Equal` is semantically
///   meaningful, the rest is tie-breaking.
/// - [`successors`] returns fresh handles in a deterministic, model-defined
///   order; the adapter passes them through unchanged.
///
/// [`marking_clone`]: NetModel::marking_clone
/// [`marking_hash`]: NetModel::marking_hash
/// [`marking_compare`]: NetModel::marking_compare
/// [`successors`]: NetModel::successors
pub trait NetModel {
    /// Shared marking handle; `Clone` acquires another reference.
    type Marking: Clone;

    /// The initial marking, as a fresh handle owned by the caller.
    fn initial_marking(&self) -> Self::Marking;

    /// All successor markings of `marking`, each a fresh handle.
    ///
    /// An empty vector means the marking is terminal (a deadlock).
    fn successors(&self, marking: &Self::Marking) -> Vec<Self::Marking>;

    /// Hash of the marking; consistent with [`marking_compare`][NetModel::marking_compare].
    fn marking_hash(&self, marking: &Self::Marking) -> u64;

    /// Total order over markings; `Equal` iff the markings are equal.
    fn marking_compare(&self, a: &Self::Marking, b: &Self::Marking) -> Ordering;

    /// An independent deep copy of the marking.
    fn marking_clone(&self, marking: &Self::Marking) -> Self::Marking;

    /// Human-readable dump of the marking, as an owned string.
    fn marking_dump(&self, marking: &Self::Marking) -> String;

    /// Evaluates the atomic proposition `prop` on `marking`.
    fn check(&self, marking: &Self::Marking, prop: PropId) -> bool;
}
