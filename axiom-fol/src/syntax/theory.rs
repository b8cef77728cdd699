/*! Defines theories (knowledge bases) of first-order formulae. */

use super::{Error, Fof, Formula, Sig, V};
use std::{fmt, iter::FromIterator, ops::Deref};
use itertools::Itertools;

/// Is a first-order theory, an ordered list of formulae taken as given facts and axioms.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Theory(Vec<Fof>);

impl Theory {
    /// Returns the formulae of this theory.
    pub fn formulae(&self) -> &[Fof] {
        &self.0
    }

    /// Appends `formula` at the end of this theory.
    pub fn push(&mut self, formula: Fof) {
        self.0.push(formula);
    }

    /// Extends this theory with additional formulae.
    pub fn extend<I: IntoIterator<Item = Fof>>(&mut self, iter: I) {
        self.0.extend(iter);
    }

    /// Validates the receiver against a `query` before they are handed to an inference
    /// engine, and returns their joint signature.
    ///
    /// It fails if a predicate is used with different arities anywhere in the theory or the
    /// query, or if a formula of the theory has a free variable. The free variables of the
    /// query are its designated free variables and are allowed.
    pub fn validate(&self, query: &Fof) -> Result<Sig, Error> {
        let sig = Sig::from_signatures(
            self.iter()
                .chain(std::iter::once(query))
                .map(|f| f.signature())
                .collect::<Result<Vec<_>, _>>()?,
        )?;
        for formula in self.iter() {
            formula.check_scope(&[])?;
        }
        Ok(sig)
    }
}

impl FromIterator<Fof> for Theory {
    fn from_iter<I: IntoIterator<Item = Fof>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Fof>> for Theory {
    fn from(formulae: Vec<Fof>) -> Self {
        Self(formulae)
    }
}

impl Deref for Theory {
    type Target = [Fof];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Theory {
    type Item = Fof;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Formula for Theory {
    fn signature(&self) -> Result<Sig, Error> {
        Sig::from_signatures(
            self.iter()
                .map(|c| c.signature())
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    fn free_vars(&self) -> Vec<&V> {
        self.iter().flat_map(|f| f.free_vars()).unique().collect()
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.iter().join("\n"))
    }
}
