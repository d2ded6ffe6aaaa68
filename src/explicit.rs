//! An explicitly-listed marking graph.
//!
//! [`ExplicitNet`] implements [`NetModel`] over a graph whose markings and
//! arcs are enumerated up front by the caller, standing in for compiled net
//! semantics. There are no firing rules here: whoever builds the net decides
//! which marking follows which. This is the model used by the examples,
//! benches and tests; a generated backend would plug into the same trait.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::marking::Marking;
use crate::model::{NetModel, PropId};

type PropCheck = Box<dyn Fn(&Marking) -> bool>;

/// A net model backed by an explicit marking table and arc lists.
///
/// Markings are identified **by value**: a deep copy of a stored marking
/// resolves to the same node. Successor order is arc insertion order and is
/// never reordered or deduplicated.
pub struct ExplicitNet {
    place_names: Vec<String>,
    nodes: Vec<Rc<Marking>>,
    index: HashMap<Rc<Marking>, usize>,
    arcs: Vec<Vec<usize>>,
    initial: usize,
    checks: HashMap<PropId, PropCheck>,
}

impl ExplicitNet {
    /// Creates an empty net with the given place names.
    ///
    /// The initial marking defaults to the first one added; override with
    /// [`set_initial`][ExplicitNet::set_initial].
    pub fn new(places: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            place_names: places.into_iter().map(Into::into).collect(),
            nodes: Vec::new(),
            index: HashMap::new(),
            arcs: Vec::new(),
            initial: 0,
            checks: HashMap::new(),
        }
    }

    /// Adds a marking node from per-place token slices and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the arity does not match the place count, or if an equal
    /// marking is already present (nodes are identified by value).
    pub fn add_marking(&mut self, tokens: &[&[i32]]) -> usize {
        assert_eq!(
            tokens.len(),
            self.place_names.len(),
            "Marking arity must match the place count"
        );
        let marking = Rc::new(Marking::from_tokens(tokens));
        assert!(
            !self.index.contains_key(marking.as_ref()),
            "Marking already present: {}",
            marking.dump(&self.place_names)
        );
        let id = self.nodes.len();
        self.index.insert(Rc::clone(&marking), id);
        self.nodes.push(marking);
        self.arcs.push(Vec::new());
        id
    }

    /// Adds an arc; successors are enumerated in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if either node id is unknown.
    pub fn add_arc(&mut self, from: usize, to: usize) {
        assert!(from < self.nodes.len(), "Unknown source node {}", from);
        assert!(to < self.nodes.len(), "Unknown target node {}", to);
        self.arcs[from].push(to);
    }

    /// Selects the initial marking.
    ///
    /// # Panics
    ///
    /// Panics if the node id is unknown.
    pub fn set_initial(&mut self, id: usize) {
        assert!(id < self.nodes.len(), "Unknown node {}", id);
        self.initial = id;
    }

    /// Registers the check for atomic proposition `id`.
    pub fn add_prop(&mut self, id: u32, check: impl Fn(&Marking) -> bool + 'static) {
        self.checks.insert(PropId::new(id), Box::new(check));
    }

    /// Place names, in slot order.
    pub fn place_names(&self) -> &[String] {
        &self.place_names
    }

    /// Number of marking nodes.
    pub fn num_markings(&self) -> usize {
        self.nodes.len()
    }

    fn node_id(&self, marking: &Rc<Marking>) -> usize {
        match self.index.get(marking.as_ref()) {
            Some(&id) => id,
            None => panic!(
                "Unknown marking: {}",
                marking.dump(&self.place_names)
            ),
        }
    }
}

impl NetModel for ExplicitNet {
    type Marking = Rc<Marking>;

    fn initial_marking(&self) -> Self::Marking {
        assert!(!self.nodes.is_empty(), "Net has no markings");
        Rc::clone(&self.nodes[self.initial])
    }

    fn successors(&self, marking: &Self::Marking) -> Vec<Self::Marking> {
        let id = self.node_id(marking);
        let succs: Vec<_> = self.arcs[id]
            .iter()
            .map(|&to| Rc::clone(&self.nodes[to]))
            .collect();
        debug!("successors(node {}) -> {} markings", id, succs.len());
        succs
    }

    fn marking_hash(&self, marking: &Self::Marking) -> u64 {
        marking.hash_value()
    }

    fn marking_compare(&self, a: &Self::Marking, b: &Self::Marking) -> Ordering {
        a.cmp(b)
    }

    fn marking_clone(&self, marking: &Self::Marking) -> Self::Marking {
        // Fresh top-level marking; place storage is shared copy-on-write.
        Rc::new(Marking::clone(marking))
    }

    fn marking_dump(&self, marking: &Self::Marking) -> String {
        marking.dump(&self.place_names)
    }

    fn check(&self, marking: &Self::Marking, prop: PropId) -> bool {
        match self.checks.get(&prop) {
            Some(check) => check(marking),
            None => {
                warn!("check: invalid proposition identifier {}", prop);
                false
            }
        }
    }
}

impl fmt::Debug for ExplicitNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplicitNet")
            .field("places", &self.place_names.len())
            .field("markings", &self.nodes.len())
            .field("arcs", &self.arcs.iter().map(Vec::len).sum::<usize>())
            .field("props", &self.checks.len())
            .finish()
    }
}
