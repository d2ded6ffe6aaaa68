//! Type-safe wrappers for symbolic variable slots and literals.
//!
//! This module provides newtype wrappers that enforce compile-time
//! distinction between variable slots and signed literals, preventing common
//! mistakes in condition-building code.

use std::fmt;
use std::ops::Neg;

/// A symbolic variable slot (1-indexed).
///
/// Each atomic proposition registered with the adapter occupies one slot.
/// Slot identities are stable for the lifetime of the dictionary that
/// allocated them.
///
/// # Invariants
///
/// - Slot IDs must be >= 1 (0 is reserved)
/// - Slot order carries no meaning beyond registration order
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A signed literal over a [`Var`]: positive or negated occurrence.
///
/// Internally a nonzero `i32` whose sign carries the negation, so a literal
/// fits in a register and negation is cheap.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Lit(i32);

impl Lit {
    /// The positive literal of `var`.
    pub fn pos(var: Var) -> Self {
        assert!(var.id() <= i32::MAX as u32, "Variable ID too large");
        Lit(var.id() as i32)
    }

    /// The negated literal of `var`.
    pub fn neg(var: Var) -> Self {
        -Self::pos(var)
    }

    /// The underlying variable.
    pub fn var(self) -> Var {
        Var::new(self.0.unsigned_abs())
    }

    pub fn is_negated(self) -> bool {
        self.0 < 0
    }

    /// Return the internal signed representation.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            if self.is_negated() { "~" } else { "" },
            self.var()
        )
    }
}
