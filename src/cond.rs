//! Edge conditions: conjunctions of literals.
//!
//! A [`Cond`] is the propositional label the adapter attaches to an outgoing
//! edge: one literal per registered atomic proposition, optionally followed
//! by the dead/alive marker. The symbolic engine would build a BDD from
//! these; here the conjunction stays a flat, inspectable literal vector,
//! with a separate flag for the constant-false condition (an edge the engine
//! can never take).

use std::fmt;

use crate::dict::VarDict;
use crate::types::Lit;

/// A conjunction of literals, or the constant false.
///
/// The empty conjunction is true. When the condition has been forced false,
/// the literals collected so far are retained for inspection, but the
/// condition renders (and means) `false`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Cond {
    lits: Vec<Lit>,
    false_: bool,
}

impl Cond {
    /// The empty conjunction (true).
    pub fn top() -> Self {
        Self::default()
    }

    /// Conjoins one literal.
    pub fn and_lit(&mut self, lit: Lit) {
        self.lits.push(lit);
    }

    /// Conjoins the constant false, making the condition unsatisfiable.
    pub fn and_false(&mut self) {
        self.false_ = true;
    }

    pub fn is_false(&self) -> bool {
        self.false_
    }

    /// True iff the condition is the empty conjunction.
    pub fn is_true(&self) -> bool {
        !self.false_ && self.lits.is_empty()
    }

    /// The collected literals, in conjunction order.
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// Renders the condition with proposition names from `dict`.
    pub fn render(&self, dict: &VarDict) -> String {
        if self.false_ {
            return "false".to_string();
        }
        if self.lits.is_empty() {
            return "true".to_string();
        }
        let mut s = String::new();
        for (i, lit) in self.lits.iter().enumerate() {
            if i > 0 {
                s.push_str(" & ");
            }
            if lit.is_negated() {
                s.push('~');
            }
            s.push_str(&dict.name(lit.var()));
        }
        s
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.false_ {
            return write!(f, "false");
        }
        if self.lits.is_empty() {
            return write!(f, "true");
        }
        for (i, lit) in self.lits.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
