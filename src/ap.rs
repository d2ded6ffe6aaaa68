//! Atomic-proposition encoding.
//!
//! The formula layer names its atomic propositions `p<id>`, where `<id>` is
//! the net-model proposition identifier. [`ApEncoder`] binds every
//! proposition of a formula to a symbolic variable slot and the parsed
//! identifier, skipping the designated dead proposition, and computes the
//! per-state condition by querying the model once per binding.
//!
//! The dead/alive marker distinguishes deadlock self-loops from real
//! transitions. Its three configurations follow the driver convention:
//! `"true"` (marker disabled), `"false"` (deadlock edges become
//! unsatisfiable), or a proposition name (a dedicated variable is positive
//! on deadlock edges and negative on live ones).

use log::debug;

use crate::cond::Cond;
use crate::dict::VarDict;
use crate::error::KripkeError;
use crate::model::{NetModel, PropId};
use crate::types::{Lit, Var};

/// One bound atomic proposition.
#[derive(Debug, Clone)]
pub struct ApBinding {
    /// The proposition name as it appears in the formula.
    pub name: String,
    /// The symbolic variable slot allocated for it.
    pub var: Var,
    /// The net-model proposition identifier parsed out of the name.
    pub prop: PropId,
}

/// Dead-proposition configuration.
///
/// [`DeadProp::parse`] applies the textual convention used by drivers:
/// exactly `"true"` or `"false"` select the constant configurations,
/// anything else is a proposition name.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DeadProp {
    /// Dead is constant false: deadlock edges become unsatisfiable.
    False,
    /// Dead is constant true: the marker is a no-op on every edge.
    True,
    /// Dead is a dedicated proposition with its own variable slot.
    Named(String),
}

impl DeadProp {
    pub fn parse(s: &str) -> Self {
        match s {
            "true" => DeadProp::True,
            "false" => DeadProp::False,
            _ => DeadProp::Named(s.to_string()),
        }
    }
}

impl Default for DeadProp {
    fn default() -> Self {
        DeadProp::True
    }
}

/// The resolved dead/alive marker.
#[derive(Debug, Copy, Clone)]
enum DeadMarker {
    False,
    True,
    Var(Var),
}

/// Binds a formula's propositions and folds the dead/alive marker.
#[derive(Debug)]
pub struct ApEncoder {
    bindings: Vec<ApBinding>,
    dead: DeadMarker,
}

impl ApEncoder {
    /// Binds `props` in order, skipping the dead proposition if named.
    ///
    /// Every remaining name must follow the `p<id>` convention (§ module
    /// docs); the first malformed name fails the whole construction. Slots
    /// are registered in `dict` in binding order, then the dead proposition
    /// (if named) gets its own slot.
    pub fn new(
        props: impl IntoIterator<Item = impl Into<String>>,
        dead: DeadProp,
        dict: &VarDict,
    ) -> Result<Self, KripkeError> {
        let mut bindings = Vec::new();
        let dead_name = match &dead {
            DeadProp::Named(name) => Some(name.clone()),
            _ => None,
        };
        for name in props {
            let name = name.into();
            if dead_name.as_deref() == Some(name.as_str()) {
                continue;
            }
            let prop = parse_prop_id(&name)?;
            let var = dict.register(&name);
            debug!("bind {} -> {} as {}", name, var, prop);
            bindings.push(ApBinding { name, var, prop });
        }
        let dead = match dead {
            DeadProp::False => DeadMarker::False,
            DeadProp::True => DeadMarker::True,
            DeadProp::Named(name) => DeadMarker::Var(dict.register(&name)),
        };
        Ok(Self { bindings, dead })
    }

    /// The bindings, in registration order.
    pub fn bindings(&self) -> &[ApBinding] {
        &self.bindings
    }

    /// The condition of `marking`: one literal per binding, in binding
    /// order, positive iff the model's check holds. The dead/alive marker is
    /// not included; the successor-iterator construction folds it in.
    pub fn condition<M: NetModel>(&self, model: &M, marking: &M::Marking) -> Cond {
        let mut cond = Cond::top();
        for binding in &self.bindings {
            if model.check(marking, binding.prop) {
                cond.and_lit(Lit::pos(binding.var));
            } else {
                cond.and_lit(Lit::neg(binding.var));
            }
        }
        cond
    }

    /// Folds the dead marker into `cond` (deadlock edge).
    pub(crate) fn apply_dead(&self, cond: &mut Cond) {
        match self.dead {
            DeadMarker::False => cond.and_false(),
            DeadMarker::True => {}
            DeadMarker::Var(var) => cond.and_lit(Lit::pos(var)),
        }
    }

    /// Folds the alive marker into `cond` (live edge).
    pub(crate) fn apply_alive(&self, cond: &mut Cond) {
        match self.dead {
            DeadMarker::False => {}
            DeadMarker::True => {}
            DeadMarker::Var(var) => cond.and_lit(Lit::neg(var)),
        }
    }
}

/// Parses the net-model identifier out of a proposition name.
///
/// Accepted form: a literal `p`, optional ASCII whitespace, then decimal
/// digits up to the end of the string (`p42`, `p 7`). Anything else is a
/// broken formula-to-model linkage and is rejected.
fn parse_prop_id(name: &str) -> Result<PropId, KripkeError> {
    let invalid = || KripkeError::InvalidProposition {
        name: name.to_string(),
    };
    let rest = name.strip_prefix('p').ok_or_else(invalid)?;
    let digits = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let id = digits.parse::<u32>().map_err(|_| invalid())?;
    Ok(PropId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::explicit::ExplicitNet;

    use test_log::test;

    #[test]
    fn test_parse_prop_id() {
        assert_eq!(parse_prop_id("p0").unwrap(), PropId::new(0));
        assert_eq!(parse_prop_id("p42").unwrap(), PropId::new(42));
        assert_eq!(parse_prop_id("p 7").unwrap(), PropId::new(7));
    }

    #[test]
    fn test_parse_prop_id_invalid() {
        for name in ["q1", "p", "px", "p-1", "p1x", "", "1"] {
            let err = parse_prop_id(name).unwrap_err();
            match err {
                KripkeError::InvalidProposition { name: n } => assert_eq!(n, name),
            }
        }
    }

    #[test]
    fn test_bindings_in_insertion_order() {
        let dict = VarDict::new();
        let enc = ApEncoder::new(["p3", "p1"], DeadProp::True, &dict).unwrap();
        let bindings = enc.bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].name, "p3");
        assert_eq!(bindings[0].var, Var::new(1));
        assert_eq!(bindings[0].prop, PropId::new(3));
        assert_eq!(bindings[1].name, "p1");
        assert_eq!(bindings[1].var, Var::new(2));
        assert_eq!(bindings[1].prop, PropId::new(1));
    }

    #[test]
    fn test_named_dead_prop_is_skipped_and_registered_last() {
        let dict = VarDict::new();
        let enc = ApEncoder::new(
            ["p0", "dead", "p1"],
            DeadProp::Named("dead".to_string()),
            &dict,
        )
        .unwrap();
        assert_eq!(enc.bindings().len(), 2);
        assert_eq!(dict.num_vars(), 3);
        assert_eq!(dict.lookup("dead"), Some(Var::new(3)));
    }

    #[test]
    fn test_malformed_name_fails_construction() {
        let dict = VarDict::new();
        let err = ApEncoder::new(["p0", "oops"], DeadProp::True, &dict).unwrap_err();
        assert!(matches!(
            err,
            KripkeError::InvalidProposition { name } if name == "oops"
        ));
    }

    #[test]
    fn test_condition_one_literal_per_binding() {
        let mut net = ExplicitNet::new(["a"]);
        net.add_marking(&[&[1]]);
        net.add_prop(0, |m| !m.place(0).is_empty());
        net.add_prop(1, |m| m.place(0).len() > 5);

        let dict = VarDict::new();
        let enc = ApEncoder::new(["p0", "p1"], DeadProp::True, &dict).unwrap();
        let init = net.initial_marking();
        let cond = enc.condition(&net, &init);
        assert_eq!(cond.lits().len(), 2);
        assert_eq!(cond.lits()[0], Lit::pos(Var::new(1)));
        assert_eq!(cond.lits()[1], Lit::neg(Var::new(2)));
    }

    #[test]
    fn test_unbound_prop_id_yields_negative_literal() {
        let mut net = ExplicitNet::new(["a"]);
        net.add_marking(&[&[1]]);

        let dict = VarDict::new();
        let enc = ApEncoder::new(["p9"], DeadProp::True, &dict).unwrap();
        let init = net.initial_marking();
        let cond = enc.condition(&net, &init);
        assert_eq!(cond.lits(), &[Lit::neg(Var::new(1))]);
    }

    #[test]
    fn test_dead_marker_configs() {
        let dict = VarDict::new();

        let enc = ApEncoder::new(["p0"], DeadProp::False, &dict).unwrap();
        let mut cond = Cond::top();
        enc.apply_dead(&mut cond);
        assert!(cond.is_false());
        let mut cond = Cond::top();
        enc.apply_alive(&mut cond);
        assert!(cond.is_true());

        let enc = ApEncoder::new(["p0"], DeadProp::True, &dict).unwrap();
        let mut cond = Cond::top();
        enc.apply_dead(&mut cond);
        assert!(cond.is_true());
        let mut cond = Cond::top();
        enc.apply_alive(&mut cond);
        assert!(cond.is_true());

        let enc =
            ApEncoder::new(["p0"], DeadProp::Named("dead".to_string()), &dict).unwrap();
        let dead_var = dict.lookup("dead").unwrap();
        let mut cond = Cond::top();
        enc.apply_dead(&mut cond);
        assert_eq!(cond.lits(), &[Lit::pos(dead_var)]);
        let mut cond = Cond::top();
        enc.apply_alive(&mut cond);
        assert_eq!(cond.lits(), &[Lit::neg(dead_var)]);
    }

    #[test]
    fn test_dead_prop_parse() {
        assert_eq!(DeadProp::parse("true"), DeadProp::True);
        assert_eq!(DeadProp::parse("false"), DeadProp::False);
        assert_eq!(
            DeadProp::parse("dead"),
            DeadProp::Named("dead".to_string())
        );
    }
}
