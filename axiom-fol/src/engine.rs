/*! Defines the interface to an inference engine that answers queries against a theory.

The crate does not implement inference itself: an [`Engine`] receives a [`Theory`] as its
knowledge base and a query formula, and returns an [`Answer`].

[`Theory`]: crate::syntax::Theory
*/
use crate::syntax::{Fof, Formula, Theory, C, V};
use itertools::Itertools;
use std::{collections::BTreeMap, fmt};

/// Is an assignment of constants to the free variables of a query.
pub type Binding = BTreeMap<V, C>;

/// Is the answer of an [`Engine`] to a query.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Answer {
    /// Is the answer to a query with no free variables: whether the theory entails it.
    Entailed(bool),

    /// Is the answer to a query with free variables: one binding per satisfying
    /// assignment.
    Bindings(Vec<Binding>),
}

impl Answer {
    /// Returns the answer to `query` given the bindings of its free variables that an
    /// engine has found. A ground query is entailed when it has (the empty) binding.
    pub fn for_query(query: &Fof, bindings: Vec<Binding>) -> Self {
        if query.free_vars().is_empty() {
            Self::Entailed(!bindings.is_empty())
        } else {
            Self::Bindings(bindings)
        }
    }

    /// Returns true if the answer is positive: the query is entailed or has at least one
    /// binding.
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Entailed(entailed) => *entailed,
            Self::Bindings(bindings) => !bindings.is_empty(),
        }
    }

    /// Returns the bindings of the answer; empty for a ground query.
    pub fn bindings(&self) -> &[Binding] {
        match self {
            Self::Entailed(_) => &[],
            Self::Bindings(bindings) => bindings,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Entailed(true) => write!(f, "entailed"),
            Self::Entailed(false) => write!(f, "not entailed"),
            Self::Bindings(bindings) if bindings.is_empty() => write!(f, "no bindings"),
            Self::Bindings(bindings) => {
                let bindings = bindings.iter().map(|binding| {
                    let pairs = binding.iter().map(|(v, c)| format!("{} ↦ {}", v, c));
                    format!("{{{}}}", pairs.format(", "))
                });
                write!(f, "{}", bindings.format("\n"))
            }
        }
    }
}

/// Is implemented by inference engines that answer queries against a theory.
///
/// The free variables of `query` are the ones the engine is asked to bind; the formulae of
/// `theory` are expected to be sentences (see [`Theory::validate`]).
///
/// [`Theory::validate`]: crate::syntax::Theory::validate
pub trait Engine {
    /// Is the type of errors reported by the engine.
    type Error: std::error::Error;

    /// Answers `query` against the knowledge base `theory`.
    fn ask(&self, theory: &Theory, query: &Fof) -> Result<Answer, Self::Error>;
}

impl<E: Engine> Engine for &E {
    type Error = E::Error;

    fn ask(&self, theory: &Theory, query: &Fof) -> Result<Answer, Self::Error> {
        (*self).ask(theory, query)
    }
}
