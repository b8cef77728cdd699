/*! Folds ordered lists of formulae into conjunctions and disjunctions. */
use super::Fof;

/// Returns the conjunction of `formulae`, as a left-associated chain that preserves the
/// order of the list. An empty list yields [`Fof::Top`] and a single formula is returned
/// as is.
///
/// **Example**:
/// ```rust
/// # use axiom_fol::syntax::{and_list, Fof, Pred};
/// let p = Pred::new("P").unwrap().app0();
/// let q = Pred::new("Q").unwrap().app0();
/// let r = Pred::new("R").unwrap().app0();
///
/// assert_eq!(Fof::Top, and_list(vec![]));
/// assert_eq!(p, and_list(vec![p.clone()]));
/// assert_eq!("(P() ∧ Q()) ∧ R()", and_list(vec![p, q, r]).to_string());
/// ```
pub fn and_list<I>(formulae: I) -> Fof
where
    I: IntoIterator<Item = Fof>,
{
    let mut iter = formulae.into_iter();
    match iter.next() {
        Some(first) => iter.fold(first, Fof::and),
        None => Fof::Top,
    }
}

/// Returns the disjunction of `formulae`, as a left-associated chain that preserves the
/// order of the list. An empty list yields [`Fof::Bottom`] and a single formula is returned
/// as is.
pub fn or_list<I>(formulae: I) -> Fof
where
    I: IntoIterator<Item = Fof>,
{
    let mut iter = formulae.into_iter();
    match iter.next() {
        Some(first) => iter.fold(first, Fof::or),
        None => Fof::Bottom,
    }
}

impl Fof {
    /// Returns the operands of the chain of conjunctions at the root of the receiver, from
    /// left to right. A formula that is not a conjunction is its own single conjunct.
    pub fn conjuncts(&self) -> Vec<&Fof> {
        match self {
            Fof::And(this) => {
                let mut result = this.left().conjuncts();
                result.extend(this.right().conjuncts());
                result
            }
            _ => vec![self],
        }
    }

    /// Returns the operands of the chain of disjunctions at the root of the receiver, from
    /// left to right. A formula that is not a disjunction is its own single disjunct.
    pub fn disjuncts(&self) -> Vec<&Fof> {
        match self {
            Fof::Or(this) => {
                let mut result = this.left().disjuncts();
                result.extend(this.right().disjuncts());
                result
            }
            _ => vec![self],
        }
    }
}
