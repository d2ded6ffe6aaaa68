//! The Kripke adapter over a net model.
//!
//! [`MarkingGraph`] is the object the verification engine talks to. It owns
//! a handle on the net model and the proposition encoder, and exposes the
//! four operations the engine drives: the initial state, a successor
//! iterator for any state, the propositional condition of a state, and a
//! textual rendering of a state.
//!
//! Deadlock markings never strand the engine: when the model reports no
//! successors, the adapter injects a self-loop on the same marking and folds
//! the dead marker into the edge condition, so every state has at least one
//! outgoing edge. Live edges get the alive marker; the real successors pass
//! through in model order, duplicates included.

use std::rc::Rc;

use log::debug;

use crate::ap::{ApBinding, ApEncoder, DeadProp};
use crate::cond::Cond;
use crate::dict::VarDict;
use crate::error::KripkeError;
use crate::model::NetModel;
use crate::state::State;
use crate::succ::SuccIter;

/// On-the-fly marking graph in the shape a model checker expects.
///
/// The model and the variable dictionary are injected at construction; there
/// is no global instance. All state-accepting operations require states
/// created by this adapter (same model instance).
#[derive(Debug)]
pub struct MarkingGraph<M: NetModel> {
    model: Rc<M>,
    dict: Rc<VarDict>,
    encoder: ApEncoder,
}

impl<M: NetModel> MarkingGraph<M> {
    /// Builds the adapter, binding `props` in order.
    ///
    /// Fails with [`KripkeError::InvalidProposition`] if any proposition
    /// name (other than a named dead proposition) does not carry a net-model
    /// identifier.
    pub fn new(
        model: Rc<M>,
        dict: Rc<VarDict>,
        props: impl IntoIterator<Item = impl Into<String>>,
        dead: DeadProp,
    ) -> Result<Self, KripkeError> {
        let encoder = ApEncoder::new(props, dead, &dict)?;
        debug!("new marking graph with {} bindings", encoder.bindings().len());
        Ok(Self {
            model,
            dict,
            encoder,
        })
    }

    /// The initial state. Each call yields an independent state.
    pub fn init_state(&self) -> State<M> {
        debug!("init_state()");
        State::new(Rc::clone(&self.model), self.model.initial_marking())
    }

    /// A successor iterator for `state`.
    ///
    /// The edge condition is the state's condition with the dead marker
    /// folded in for a deadlock (plus an injected self-loop) or the alive
    /// marker otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `state` belongs to a different model instance.
    pub fn succ_iter(&self, state: &State<M>) -> SuccIter<M> {
        self.check_owned(state);
        let mut cond = self.encoder.condition(&*self.model, state.marking());
        let mut succs = self.model.successors(state.marking());
        if succs.is_empty() {
            debug!("succ_iter: deadlock, injecting self-loop");
            self.encoder.apply_dead(&mut cond);
            succs.push(state.marking().clone());
        } else {
            self.encoder.apply_alive(&mut cond);
        }
        debug!("succ_iter: {} successors, cond = {}", succs.len(), cond);
        SuccIter::new(Rc::clone(&self.model), cond, succs)
    }

    /// The condition of `state`: one literal per binding, in binding order,
    /// without the dead/alive marker.
    ///
    /// # Panics
    ///
    /// Panics if `state` belongs to a different model instance.
    pub fn state_cond(&self, state: &State<M>) -> Cond {
        self.check_owned(state);
        self.encoder.condition(&*self.model, state.marking())
    }

    /// A textual rendering of `state`, as an owned string.
    ///
    /// # Panics
    ///
    /// Panics if `state` belongs to a different model instance.
    pub fn format_state(&self, state: &State<M>) -> String {
        self.check_owned(state);
        self.model.marking_dump(state.marking())
    }

    /// The shared variable dictionary.
    pub fn dict(&self) -> &Rc<VarDict> {
        &self.dict
    }

    /// The proposition bindings, in binding order.
    pub fn bindings(&self) -> &[ApBinding] {
        self.encoder.bindings()
    }

    fn check_owned(&self, state: &State<M>) {
        assert!(
            Rc::ptr_eq(state.model(), &self.model),
            "State must belong to this adapter's model instance"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cmp::Ordering;

    use crate::explicit::ExplicitNet;
    use crate::types::{Lit, Var};

    use test_log::test;

    /// Two live markings in a cycle plus a branch into a deadlock.
    fn diamond_net() -> Rc<ExplicitNet> {
        let mut net = ExplicitNet::new(["free", "busy"]);
        let m0 = net.add_marking(&[&[1, 1], &[]]);
        let m1 = net.add_marking(&[&[1], &[1]]);
        let m2 = net.add_marking(&[&[], &[1, 1]]);
        net.add_arc(m0, m1);
        net.add_arc(m0, m2);
        net.add_arc(m1, m0);
        net.add_prop(0, |m| !m.place(1).is_empty());
        Rc::new(net)
    }

    fn deadlocked_net() -> Rc<ExplicitNet> {
        let mut net = ExplicitNet::new(["p"]);
        net.add_marking(&[&[1]]);
        net.add_prop(0, |m| !m.place(0).is_empty());
        Rc::new(net)
    }

    fn graph(
        net: &Rc<ExplicitNet>,
        dead: DeadProp,
    ) -> MarkingGraph<ExplicitNet> {
        MarkingGraph::new(Rc::clone(net), Rc::new(VarDict::new()), ["p0"], dead).unwrap()
    }

    #[test]
    fn test_init_state_is_independent_per_call() {
        let net = diamond_net();
        let graph = graph(&net, DeadProp::True);
        let a = graph.init_state();
        let b = graph.init_state();
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(graph.format_state(&a), "busy: [], free: [1, 1]");
    }

    #[test]
    fn test_two_successors_pass_through_in_order() {
        let net = diamond_net();
        let graph = graph(&net, DeadProp::Named("dead".to_string()));
        let init = graph.init_state();

        let mut it = graph.succ_iter(&init);
        assert_eq!(it.len(), 2);
        assert!(it.first());
        let s1 = it.current();
        assert!(it.next());
        let s2 = it.current();
        assert!(!it.next());
        assert_ne!(s1, s2);
        assert_eq!(graph.format_state(&s1), "busy: [1], free: [1]");
        assert_eq!(graph.format_state(&s2), "busy: [1, 1], free: []");

        // Alive marker: negative dead literal after the binding literal.
        let dead_var = graph.dict().lookup("dead").unwrap();
        let cond = it.cond();
        assert_eq!(cond.lits().len(), 2);
        assert_eq!(cond.lits()[1], Lit::neg(dead_var));
        assert!(!cond.is_false());
    }

    #[test]
    fn test_deadlock_injects_self_loop() {
        let net = deadlocked_net();
        let graph = graph(&net, DeadProp::Named("dead".to_string()));
        let init = graph.init_state();

        let mut it = graph.succ_iter(&init);
        assert_eq!(it.len(), 1);
        assert!(it.first());
        let loop_state = it.current();
        assert_eq!(loop_state.compare(&init), Ordering::Equal);
        assert!(!it.next());

        // Dead marker: positive dead literal after the binding literal.
        let dead_var = graph.dict().lookup("dead").unwrap();
        assert_eq!(it.cond().lits().len(), 2);
        assert_eq!(it.cond().lits()[0], Lit::pos(Var::new(1)));
        assert_eq!(it.cond().lits()[1], Lit::pos(dead_var));
    }

    #[test]
    fn test_deadlock_with_false_config_is_unsatisfiable() {
        let net = deadlocked_net();
        let graph = graph(&net, DeadProp::False);
        let init = graph.init_state();
        let it = graph.succ_iter(&init);
        assert_eq!(it.len(), 1);
        assert!(it.cond().is_false());
    }

    #[test]
    fn test_deadlock_with_true_config_leaves_cond_unchanged() {
        let net = deadlocked_net();
        let graph = graph(&net, DeadProp::True);
        let init = graph.init_state();
        let it = graph.succ_iter(&init);
        assert_eq!(it.len(), 1);
        assert_eq!(it.cond().lits().len(), 1);
        assert!(!it.cond().is_false());
    }

    #[test]
    fn test_state_cond_excludes_marker() {
        let net = diamond_net();
        let graph = graph(&net, DeadProp::Named("dead".to_string()));
        let init = graph.init_state();
        let cond = graph.state_cond(&init);
        // Exactly one literal per binding, no marker.
        assert_eq!(cond.lits().len(), 1);
        // Initial marking has an empty busy place, so p0 is false.
        assert_eq!(cond.lits()[0], Lit::neg(Var::new(1)));
    }

    #[test]
    fn test_no_state_without_successors() {
        let net = diamond_net();
        let graph = graph(&net, DeadProp::True);
        let mut stack = vec![graph.init_state()];
        let mut visited = std::collections::HashSet::new();
        while let Some(state) = stack.pop() {
            if !visited.insert(state.clone()) {
                continue;
            }
            let mut it = graph.succ_iter(&state);
            assert!(it.first(), "every state must have an outgoing edge");
            while !it.done() {
                stack.push(it.current());
                it.next();
            }
        }
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_self_loop_shares_the_marking() {
        let net = deadlocked_net();
        let graph = graph(&net, DeadProp::True);
        let init = graph.init_state();
        let mut it = graph.succ_iter(&init);
        assert!(it.first());
        // The injected successor is the same marking, not a deep copy.
        assert!(Rc::ptr_eq(it.current().marking(), init.marking()));
    }

    #[test]
    #[should_panic(expected = "this adapter's model")]
    fn test_foreign_state_panics() {
        let net1 = deadlocked_net();
        let net2 = deadlocked_net();
        let graph1 = graph(&net1, DeadProp::True);
        let graph2 = graph(&net2, DeadProp::True);
        let foreign = graph2.init_state();
        let _ = graph1.succ_iter(&foreign);
    }

    #[test]
    fn test_invalid_prop_fails_construction() {
        let net = deadlocked_net();
        let err = MarkingGraph::new(
            Rc::clone(&net),
            Rc::new(VarDict::new()),
            ["p0", "bogus"],
            DeadProp::True,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            KripkeError::InvalidProposition { name } if name == "bogus"
        ));
    }

    #[test]
    fn test_bindings_accessor() {
        let net = deadlocked_net();
        let graph = graph(&net, DeadProp::True);
        let bindings = graph.bindings();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name, "p0");
    }
}
