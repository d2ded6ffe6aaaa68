//! # kripke-rs: On-the-fly Kripke structures over Petri-net marking graphs
//!
//! **`kripke-rs`** is the adapter layer between a Petri-net state space and an
//! automata-theoretic LTL model checker. It wraps markings as engine-facing
//! **states** with a strict identity contract, enumerates successors lazily
//! through a cursor protocol, and encodes atomic-proposition truth values as
//! conjunctions of symbolic literals --- so the engine can explore the
//! reachable state space **on the fly**, without ever materializing it.
//!
//! ## Why an adapter?
//!
//! A search engine only needs four things from a state space: an initial
//! state, the successors of any state, a propositional label for every edge,
//! and a stable hash/equality/clone contract so its visited table works. The
//! net model behind those operations stays opaque; this crate pins down the
//! contract and provides the plumbing.
//!
//! ## Key Features
//!
//! - **Strict identity contract**: hashing, equality and ordering of a
//!   [`State`][crate::state::State] delegate to the net model and are
//!   mutually consistent, so visited tables behave.
//! - **Safe lifetimes**: markings are shared, reference-counted handles;
//!   acquire/release is tied to scope. A partially-consumed successor
//!   iterator releases everything it still holds on drop --- nothing leaks.
//! - **No stranded states**: deadlock markings get a self-loop labeled with
//!   the *dead* marker, so every state has at least one outgoing edge.
//! - **Compile-time adapter safety**: states are generic over the model
//!   type; comparing states from different adapters is a type error, not a
//!   runtime surprise.
//! - **Deterministic enumeration**: successors come out exactly in model
//!   order, duplicates included; deduplication belongs to the engine.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kripke_rs::ap::DeadProp;
//! use kripke_rs::dict::VarDict;
//! use kripke_rs::explicit::ExplicitNet;
//! use kripke_rs::kripke::MarkingGraph;
//!
//! # fn main() -> Result<(), kripke_rs::error::KripkeError> {
//! // 1. Describe a small marking graph (two markings in a cycle).
//! let mut net = ExplicitNet::new(["free", "busy"]);
//! let idle = net.add_marking(&[&[1], &[]]);
//! let work = net.add_marking(&[&[], &[1]]);
//! net.add_arc(idle, work);
//! net.add_arc(work, idle);
//! net.add_prop(0, |m| !m.place(1).is_empty());
//!
//! // 2. Build the adapter: proposition "p0" is bound to check #0.
//! let graph = MarkingGraph::new(
//!     Rc::new(net),
//!     Rc::new(VarDict::new()),
//!     ["p0"],
//!     DeadProp::True,
//! )?;
//!
//! // 3. Drive it the way a model checker would.
//! let init = graph.init_state();
//! let mut it = graph.succ_iter(&init);
//! assert!(it.first());
//! let succ = it.current();
//! assert!(!it.next()); // single successor
//! assert_ne!(init, succ);
//! assert_eq!(graph.format_state(&succ), "busy: [1], free: []");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Components
//!
//! - **[`kripke`]**: the [`MarkingGraph`][crate::kripke::MarkingGraph]
//!   adapter --- initial state, successor iterators, conditions, formatting.
//! - **[`state`]** and **[`succ`]**: the engine-facing state wrapper and the
//!   `first`/`next`/`done`/`current` cursor protocol.
//! - **[`ap`]**, **[`cond`]**, **[`dict`]**, **[`types`]**: atomic
//!   propositions, edge conditions, and symbolic variable slots.
//! - **[`model`]**: the [`NetModel`][crate::model::NetModel] facade every
//!   net backend implements; **[`explicit`]** is the in-crate one.
//! - **[`marking`]** and **[`multiset`]**: the concrete marking
//!   representation and its sorted token container.

pub mod ap;
pub mod cond;
pub mod dict;
pub mod error;
pub mod explicit;
pub mod kripke;
pub mod marking;
pub mod model;
pub mod multiset;
pub mod state;
pub mod succ;
pub mod types;
