//! States: one marking handle under the engine's identity contract.
//!
//! A [`State`] wraps one marking handle together with the model that owns
//! it. Holding the state holds one strong reference on the marking; the
//! reference is released when the state is dropped, on every exit path.
//! Hash, equality and ordering all delegate to the model, so the engine's
//! visited-state table sees exactly the identity the net model defines.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::model::NetModel;

/// One state of the marking graph.
///
/// The model type is a compile-time parameter, so states of different model
/// types cannot meet in a comparison at all; states of the same type but
/// different model instances are rejected by a runtime assertion.
pub struct State<M: NetModel> {
    model: Rc<M>,
    marking: M::Marking,
}

impl<M: NetModel> State<M> {
    /// Wraps `marking`, taking ownership of one handle.
    pub fn new(model: Rc<M>, marking: M::Marking) -> Self {
        Self { model, marking }
    }

    /// The wrapped marking handle.
    pub fn marking(&self) -> &M::Marking {
        &self.marking
    }

    pub(crate) fn model(&self) -> &Rc<M> {
        &self.model
    }

    /// The marking's hash, recomputed on every call.
    ///
    /// A pure pass-through to the model; callers that need it repeatedly
    /// should cache it on their side.
    pub fn hash_value(&self) -> u64 {
        self.model.marking_hash(&self.marking)
    }

    /// Total order over states of one model.
    ///
    /// `Equal` iff the markings are equal; the rest of the order is only
    /// tie-breaking.
    ///
    /// # Panics
    ///
    /// Panics if the states belong to different model instances.
    pub fn compare(&self, other: &Self) -> Ordering {
        assert!(
            Rc::ptr_eq(&self.model, &other.model),
            "States must belong to the same model instance"
        );
        self.model.marking_compare(&self.marking, &other.marking)
    }
}

impl<M: NetModel> Clone for State<M> {
    /// An independent deep copy of the state.
    ///
    /// The marking is cloned through the model, so the copy outlives the
    /// original and any iterator that produced it.
    fn clone(&self) -> Self {
        Self {
            model: Rc::clone(&self.model),
            marking: self.model.marking_clone(&self.marking),
        }
    }
}

impl<M: NetModel> PartialEq for State<M> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<M: NetModel> Eq for State<M> {}

impl<M: NetModel> PartialOrd for State<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<M: NetModel> Ord for State<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<M: NetModel> std::hash::Hash for State<M> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl<M: NetModel> fmt::Debug for State<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("marking", &self.model.marking_dump(&self.marking))
            .finish()
    }
}
