/*! Defines the syntax for first-order terms. */

use super::{formula::Equals, Fof, C, V};
use std::fmt;

/// Represents a first-order term: either a variable or a constant.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var(V),

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::C
    Const(C),
}

impl Term {
    /// Returns the variable symbol of the receiver, if it is a variable term.
    pub fn as_var(&self) -> Option<&V> {
        match self {
            Self::Var(variable) => Some(variable),
            Self::Const(_) => None,
        }
    }

    /// Returns the constant symbol of the receiver, if it is a constant term.
    pub fn as_const(&self) -> Option<&C> {
        match self {
            Self::Var(_) => None,
            Self::Const(constant) => Some(constant),
        }
    }

    /// Returns an [equation] (formula) between the receiver and `term`.
    ///
    /// [equation]: crate::syntax::Fof::Equals
    pub fn equals(self, term: Term) -> Fof {
        Equals::new(self, term).into()
    }

    // replaces the receiver with `constant` if it is the variable `variable`.
    pub(crate) fn instantiate(&self, variable: &V, constant: &C) -> Self {
        match self {
            Self::Var(v) if v == variable => Self::Const(constant.clone()),
            _ => self.clone(),
        }
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var(variable)
    }
}

impl From<&V> for Term {
    fn from(variable: &V) -> Self {
        Self::Var(variable.clone())
    }
}

impl From<C> for Term {
    fn from(constant: C) -> Self {
        Self::Const(constant)
    }
}

impl From<&C> for Term {
    fn from(constant: &C) -> Self {
        Self::Const(constant.clone())
    }
}

impl From<&Term> for Term {
    fn from(term: &Term) -> Self {
        term.clone()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var(variable) => write!(f, "{}", variable),
            Self::Const(constant) => write!(f, "{}", constant),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
