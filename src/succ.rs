//! Cursor-based successor enumeration.
//!
//! A [`SuccIter`] is handed a fully computed successor list and edge
//! condition at construction and exposes the `first` / `next` / `done` /
//! `current` protocol the verification engine drives. The protocol is a
//! small state machine: not started, positioned, exhausted. Violating it
//! (advancing before `first`, reading past the end) is a programming error
//! and panics; everything the engine does along the happy path is
//! non-panicking.
//!
//! Every successor handle the engine never consumed is released when the
//! iterator is dropped, so a search that abandons an iterator halfway leaks
//! nothing.

use std::rc::Rc;

use log::debug;

use crate::cond::Cond;
use crate::model::NetModel;
use crate::state::State;

/// Enumerator over the successor markings of one state.
///
/// Restartable: `first()` rewinds to the beginning at any time. The
/// enumeration order is exactly the order of the list the iterator was
/// constructed with.
pub struct SuccIter<M: NetModel> {
    model: Rc<M>,
    cond: Cond,
    succs: Vec<M::Marking>,
    cursor: usize,
    started: bool,
}

impl<M: NetModel> SuccIter<M> {
    pub(crate) fn new(model: Rc<M>, cond: Cond, succs: Vec<M::Marking>) -> Self {
        Self {
            model,
            cond,
            succs,
            cursor: 0,
            started: false,
        }
    }

    /// Rewinds to the first successor; returns whether any exists.
    pub fn first(&mut self) -> bool {
        debug!("first() over {} successors", self.succs.len());
        self.started = true;
        self.cursor = 0;
        !self.done()
    }

    /// Advances the cursor; returns whether more successors remain.
    ///
    /// # Panics
    ///
    /// Panics if called before `first()`.
    pub fn next(&mut self) -> bool {
        assert!(self.started, "next() requires first() to be called before");
        self.cursor += 1;
        !self.done()
    }

    /// True iff the cursor is past the last successor.
    ///
    /// Safe to call in any phase.
    pub fn done(&self) -> bool {
        self.cursor >= self.succs.len()
    }

    /// Wraps the successor at the cursor in a new [`State`].
    ///
    /// Each call acquires a fresh handle, so calling `current()` twice at
    /// the same position yields two independent states.
    ///
    /// # Panics
    ///
    /// Panics if called before `first()` or when the iterator is exhausted.
    pub fn current(&self) -> State<M> {
        assert!(
            self.started,
            "current() requires first() to be called before"
        );
        assert!(!self.done(), "current() called on an exhausted iterator");
        State::new(Rc::clone(&self.model), self.succs[self.cursor].clone())
    }

    /// The edge condition, with the dead/alive marker already folded in.
    pub fn cond(&self) -> &Cond {
        &self.cond
    }

    /// Number of successors in the list.
    pub fn len(&self) -> usize {
        self.succs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.succs.is_empty()
    }
}
