/*! Defines an abstract syntax tree (AST) for first-order terms and formulae with equality. */

mod fof;
mod formula;
mod list;
mod signature;
mod symbol;
mod term;
mod theory;

pub use fof::Fof;
pub use formula::{And, Atom, Connective, Equals, Exists, Forall, Formula, Iff, Implies, Not, Or, Quantifier};
pub use list::{and_list, or_list};
pub use signature::{PredSig, Sig};
pub use symbol::{Pred, C, V};
#[cfg(test)]
pub(crate) use symbol::KEYWORDS;
pub use term::Term;
pub use theory::Theory;

use thiserror::Error;

/// Is the type of errors arising from building or validating formulae.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a constructor receives operands of the wrong shape or count.
    #[error("{constructor} requires {expected}, got {found}")]
    MalformedFormula {
        constructor: &'static str,
        expected: String,
        found: String,
    },

    /// Is returned by the scope check when a variable occurs outside of any binder for it.
    #[error("variable `{variable}` is not bound by a quantifier in `{formula}`")]
    UnboundVariable { variable: V, formula: Fof },

    /// Is returned when a predicate is used with two different arities.
    #[error("predicate `{}` is used with arity {} and arity {}", .this.symbol, .this.arity, .other.arity)]
    ArityMismatch { this: PredSig, other: PredSig },
}

impl Error {
    pub(crate) fn malformed<E, F>(constructor: &'static str, expected: E, found: F) -> Self
    where
        E: Into<String>,
        F: Into<String>,
    {
        Self::MalformedFormula {
            constructor,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
