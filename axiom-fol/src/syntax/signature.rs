/*! Defines a ['Sig'] to represent the signature of first-order theories.

['Sig']: crate::syntax::Sig
*/
use super::{Error, Pred, C};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// Contains the signature information for a predicate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PredSig {
    /// Is the predicate symbol.
    pub symbol: Pred,

    /// Is the arity of the predicate.
    pub arity: usize,
}

impl fmt::Display for PredSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}/{}", self.symbol, self.arity)
    }
}

/// Is the signature of a first-order theory: its constants and the arities of its
/// predicates, both kept in symbol order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sig {
    /// Is the constant symbols in a theory.
    constants: BTreeSet<C>,

    /// Is the signature of predicates in a theory.
    predicates: BTreeMap<Pred, PredSig>,
}

impl Sig {
    /// Creates an empty signature.
    pub(crate) fn new() -> Self {
        Self {
            constants: BTreeSet::new(),
            predicates: BTreeMap::new(),
        }
    }

    /// Creates a new signature by merging the items of an iterator over signatures.
    pub(crate) fn from_signatures<I>(value: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Sig>,
    {
        let mut sig = Self::new();
        for s in value {
            sig = sig.merge(s)?;
        }
        Ok(sig)
    }

    /// Inserts a new constant in the receiver signature.
    pub(crate) fn add_constant(&mut self, constant: C) {
        self.constants.insert(constant);
    }

    /// Adds the signature of a predicate to the reciever.
    pub(crate) fn add_predicate(&mut self, predicate: PredSig) -> Result<(), Error> {
        if let Some(sig) = self.predicates.get(&predicate.symbol) {
            if *sig != predicate {
                return Err(Error::ArityMismatch {
                    this: sig.clone(),
                    other: predicate,
                });
            }
        } else {
            self.predicates.insert(predicate.symbol.clone(), predicate);
        }
        Ok(())
    }

    /// Returns a signature that combines the receiver signature with the signature of `other`.
    /// When several predicates conflict, the first one in symbol order is reported.
    pub(crate) fn merge(mut self, other: Self) -> Result<Self, Error> {
        for c in other.constants {
            self.add_constant(c);
        }
        for p in other.predicates.into_values() {
            self.add_predicate(p)?;
        }

        Ok(self)
    }

    /// Returns the constants of this signature.
    pub fn constants(&self) -> &BTreeSet<C> {
        &self.constants
    }

    /// Returns the predicates of this signature.
    pub fn predicates(&self) -> &BTreeMap<Pred, PredSig> {
        &self.predicates
    }

    /// Returns the arity of `predicate` if it belongs to this signature.
    pub fn arity(&self, predicate: &Pred) -> Option<usize> {
        self.predicates.get(predicate).map(|sig| sig.arity)
    }
}

impl Default for Sig {
    fn default() -> Self {
        Self::new()
    }
}
