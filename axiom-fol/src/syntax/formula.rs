/*! Introduces an abstraction for formulae and the connectives and quantifiers that are the
ingredients for constructing them.*/
use super::{Error, Fof, Pred, PredSig, Sig, Term, V};
use itertools::Itertools;

/// Is the trait of formulae, including first-order formulae and theories.
pub trait Formula {
    /// Returns the signature on which the receiver is defined. It fails if the same
    /// predicate is used with different arities.
    fn signature(&self) -> Result<Sig, Error>;

    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula. Variables are
    /// listed in the order of their first occurrence.
    ///
    /// **Example**:
    /// ```rust
    /// # use axiom_fol::syntax::{V, Fof};
    /// use axiom_fol::syntax::Formula;
    ///
    /// let x = V::new("x").unwrap();
    /// let y = V::new("y").unwrap();
    ///
    /// // ∀ x. P(x, y)
    /// let formula: Fof = "forall x. P(x, y)".parse().unwrap();
    /// assert_eq!(vec![&y], formula.free_vars());
    ///
    /// // P(x) ∧ Q(y, x)
    /// let formula: Fof = "P(x) & Q(y, x)".parse().unwrap();
    /// assert_eq!(vec![&x, &y], formula.free_vars());
    /// ```
    fn free_vars(&self) -> Vec<&V>;
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Atom {
    predicate: Pred,
    terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms the predicate is applied on.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }
}

impl Formula for Atom {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        sig.add_predicate(PredSig {
            symbol: self.predicate.clone(),
            arity: self.arity(),
        })?;
        for constant in self.terms.iter().filter_map(Term::as_const) {
            sig.add_constant(constant.clone());
        }
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&V> {
        self.terms.iter().filter_map(Term::as_var).unique().collect()
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate, self.terms.iter().join(", "))
    }
}

/// Represents an equation between two terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Equals {
    left: Term,
    right: Term,
}

impl Equals {
    /// Creates a new equation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the equation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the equation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

impl Formula for Equals {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        for constant in [&self.left, &self.right]
            .iter()
            .copied()
            .filter_map(Term::as_const)
        {
            sig.add_constant(constant.clone());
        }
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&V> {
        [&self.left, &self.right]
            .iter()
            .copied()
            .filter_map(Term::as_var)
            .unique()
            .collect()
    }
}

impl std::fmt::Display for Equals {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Not {
    pub(crate) formula: Fof,
}

impl Not {
    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Fof {
        &self.formula
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct And {
    pub(crate) left: Fof,
    pub(crate) right: Fof,
}

impl And {
    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Fof {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Fof {
        &self.right
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Or {
    pub(crate) left: Fof,
    pub(crate) right: Fof,
}

impl Or {
    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Fof {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Fof {
        &self.right
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Implies {
    pub(crate) premise: Fof,
    pub(crate) consequence: Fof,
}

impl Implies {
    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &Fof {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &Fof {
        &self.consequence
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Iff {
    pub(crate) left: Fof,
    pub(crate) right: Fof,
}

impl Iff {
    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Fof {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Fof {
        &self.right
    }
}

/// Represents an existentially quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Exists {
    pub(crate) variable: V,
    pub(crate) formula: Fof,
}

impl Exists {
    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Fof {
        &self.formula
    }
}

/// Represents a universally quantified formula, binding a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Forall {
    pub(crate) variable: V,
    pub(crate) formula: Fof,
}

impl Forall {
    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the body of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Fof {
        &self.formula
    }
}

/// Names the Boolean connectives, for building formulae from a dynamically sized list of
/// operands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    /// Returns the number of operands the connective takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    /// Returns the name of the constructor for the connective.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::Implies => "Implies",
            Self::Iff => "Iff",
        }
    }

    /// Applies the connective on `operands`. It fails if the number of operands is not the
    /// arity of the connective.
    ///
    /// **Example**:
    /// ```rust
    /// # use axiom_fol::syntax::{Connective, Pred};
    /// let p = Pred::new("P").unwrap().app0();
    /// let q = Pred::new("Q").unwrap().app0();
    ///
    /// let formula = Connective::Implies.apply(vec![p.clone(), q]).unwrap();
    /// assert_eq!("P() → Q()", formula.to_string());
    ///
    /// let error = Connective::And.apply(vec![p]).unwrap_err();
    /// assert_eq!("And requires exactly two operands, got 1", error.to_string());
    /// ```
    pub fn apply(self, operands: Vec<Fof>) -> Result<Fof, Error> {
        let count = operands.len();
        let mut operands = operands.into_iter();
        match (self, operands.next(), operands.next(), operands.next()) {
            (Self::Not, Some(formula), None, None) => Ok(Fof::not(formula)),
            (Self::And, Some(left), Some(right), None) => Ok(left.and(right)),
            (Self::Or, Some(left), Some(right), None) => Ok(left.or(right)),
            (Self::Implies, Some(left), Some(right), None) => Ok(left.implies(right)),
            (Self::Iff, Some(left), Some(right), None) => Ok(left.iff(right)),
            _ => {
                let expected = match self.arity() {
                    1 => "exactly one operand",
                    _ => "exactly two operands",
                };
                Err(Error::malformed(self.name(), expected, count.to_string()))
            }
        }
    }
}

/// Names the quantifiers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    /// Binds `variable` in `formula`.
    pub fn bind(self, variable: V, formula: Fof) -> Fof {
        match self {
            Self::Forall => Fof::forall(variable, formula),
            Self::Exists => Fof::exists(variable, formula),
        }
    }

    /// Binds every variable of `variables` in `formula`, one quantifier per variable with the
    /// first variable outermost.
    pub fn bind_all(self, variables: Vec<V>, formula: Fof) -> Fof {
        variables
            .into_iter()
            .rev()
            .fold(formula, |formula, variable| self.bind(variable, formula))
    }
}
