//! The variable dictionary shared between the adapter and the engine.
//!
//! A [`VarDict`] maps proposition names to symbolic variable slots. The
//! engine and any number of adapters hold the same dictionary through `Rc`,
//! so a proposition registered twice (by name) lands on the same slot.
//! Interior mutability keeps registration behind `&self`, matching how the
//! dictionary is threaded through shared handles.

use std::cell::RefCell;

use crate::types::Var;

/// Name-to-slot registry for symbolic variables.
///
/// Slots are allocated sequentially starting from `Var(1)`; slot 0 is never
/// handed out. Registration is idempotent per name.
#[derive(Debug, Default)]
pub struct VarDict {
    names: RefCell<Vec<String>>,
}

impl VarDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `name`, allocating the next one if unknown.
    pub fn register(&self, name: &str) -> Var {
        let mut names = self.names.borrow_mut();
        if let Some(pos) = names.iter().position(|n| n == name) {
            return Var::new(pos as u32 + 1);
        }
        names.push(name.to_string());
        Var::new(names.len() as u32)
    }

    /// Returns the slot for `name` without allocating.
    pub fn lookup(&self, name: &str) -> Option<Var> {
        self.names
            .borrow()
            .iter()
            .position(|n| n == name)
            .map(|pos| Var::new(pos as u32 + 1))
    }

    /// Returns the name registered for `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` was not allocated by this dictionary.
    pub fn name(&self, var: Var) -> String {
        let names = self.names.borrow();
        let index = var.id() as usize - 1;
        assert!(index < names.len(), "Unregistered variable {}", var);
        names[index].clone()
    }

    /// Number of allocated slots.
    pub fn num_vars(&self) -> usize {
        self.names.borrow().len()
    }
}
