/*! Defines the syntax of first-order formulae with equality.*/
use super::{formula::*, Error, Sig, C, V};
use itertools::Itertools;
use std::fmt;

/// Is an abstract syntax tree (AST) for first-order formulae.
///
/// Values of this type are immutable: every connective and quantifier consumes its operands
/// and returns a new formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fof {
    /// Is logical top (⊤) or truth, the identity of conjunction.
    Top,

    /// Is logical bottom (⟘) or falsehood, the identity of disjunction.
    Bottom,

    /// Is an atomic first-order formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is a first-order equality, wrapping an [`Equals`].
    ///
    /// **Note**: Equality is a special type of atomic first-order formula.
    Equals(Equals),

    /// Is the negation of a first-order formula, wrapping a [`Not`].
    Not(Box<Not>),

    /// Is a conjunction of two first-order formulae, wrapping an [`And`].
    And(Box<And>),

    /// Is a disjunction of two first-order formulae, wrapping an [`Or`].
    Or(Box<Or>),

    /// Is an implication between two first-order formulae, wrapping an [`Implies`].
    Implies(Box<Implies>),

    /// Is an bi-implication between two first-order formulae, wrapping an [`Iff`].
    Iff(Box<Iff>),

    /// Is an existentially quantified first-order formula, wrapping an [`Exists`].
    Exists(Box<Exists>),

    /// Is a universally quantified first-order formula, wrapping a [`Forall`].
    Forall(Box<Forall>),
}

impl From<Atom> for Fof {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Equals> for Fof {
    fn from(value: Equals) -> Self {
        Self::Equals(value)
    }
}

impl From<Not> for Fof {
    fn from(value: Not) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And> for Fof {
    fn from(value: And) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or> for Fof {
    fn from(value: Or) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies> for Fof {
    fn from(value: Implies) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff> for Fof {
    fn from(value: Iff) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Exists> for Fof {
    fn from(value: Exists) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall> for Fof {
    fn from(value: Forall) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl Fof {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns an existentially quantified formula, binding `variable` in `formula`.
    #[inline(always)]
    pub fn exists(variable: V, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    /// Returns a universally quantified formula, binding `variable` in `formula`.
    #[inline(always)]
    pub fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns `formula` existentially quantified over every variable in `variables`, the
    /// first variable being the outermost.
    pub fn exists_all(variables: Vec<V>, formula: Self) -> Self {
        Quantifier::Exists.bind_all(variables, formula)
    }

    /// Returns `formula` universally quantified over every variable in `variables`, the
    /// first variable being the outermost.
    pub fn forall_all(variables: Vec<V>, formula: Self) -> Self {
        Quantifier::Forall.bind_all(variables, formula)
    }

    /// Returns a conjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn and(self, formula: Self) -> Self {
        And {
            left: self,
            right: formula,
        }
        .into()
    }

    /// Returns a disjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn or(self, formula: Self) -> Self {
        Or {
            left: self,
            right: formula,
        }
        .into()
    }

    /// Returns an implication between the receiver and `formula`.
    #[inline(always)]
    pub fn implies(self, formula: Self) -> Self {
        Implies {
            premise: self,
            consequence: formula,
        }
        .into()
    }

    /// Returns a bi-implication between the receiver and `formula`.
    #[inline(always)]
    pub fn iff(self, formula: Self) -> Self {
        Iff {
            left: self,
            right: formula,
        }
        .into()
    }

    /// Replaces every free occurrence of `variable` in the receiver with `constant`.
    /// Occurrences under a quantifier that rebinds `variable` are left untouched.
    ///
    /// **Example**:
    /// ```rust
    /// # use axiom_fol::syntax::{C, Fof, V};
    /// let formula: Fof = "P(x) & (exists x. Q(x))".parse().unwrap();
    /// let x = V::new("x").unwrap();
    /// let n = C::new("n").unwrap();
    ///
    /// assert_eq!("P('n) ∧ (∃ x. Q(x))", formula.instantiate(&x, &n).to_string());
    /// ```
    pub fn instantiate(&self, variable: &V, constant: &C) -> Self {
        match self {
            Self::Top | Self::Bottom => self.clone(),
            Self::Atom(this) => Atom::new(
                this.predicate().clone(),
                this.terms()
                    .iter()
                    .map(|t| t.instantiate(variable, constant))
                    .collect(),
            )
            .into(),
            Self::Equals(this) => this
                .left()
                .instantiate(variable, constant)
                .equals(this.right().instantiate(variable, constant)),
            Self::Not(this) => Self::not(this.formula.instantiate(variable, constant)),
            Self::And(this) => this
                .left
                .instantiate(variable, constant)
                .and(this.right.instantiate(variable, constant)),
            Self::Or(this) => this
                .left
                .instantiate(variable, constant)
                .or(this.right.instantiate(variable, constant)),
            Self::Implies(this) => this
                .premise
                .instantiate(variable, constant)
                .implies(this.consequence.instantiate(variable, constant)),
            Self::Iff(this) => this
                .left
                .instantiate(variable, constant)
                .iff(this.right.instantiate(variable, constant)),
            Self::Exists(this) if &this.variable == variable => self.clone(),
            Self::Exists(this) => Self::exists(
                this.variable.clone(),
                this.formula.instantiate(variable, constant),
            ),
            Self::Forall(this) if &this.variable == variable => self.clone(),
            Self::Forall(this) => Self::forall(
                this.variable.clone(),
                this.formula.instantiate(variable, constant),
            ),
        }
    }

    /// Checks that every variable occurring in the receiver is bound by an enclosing
    /// quantifier, except for the variables in `free`, which are designated free variables
    /// (e.g. the variables of a query).
    ///
    /// **Example**:
    /// ```rust
    /// # use axiom_fol::syntax::{Fof, V};
    /// let query: Fof = "CrashedServer(x)".parse().unwrap();
    /// let x = V::new("x").unwrap();
    ///
    /// assert!(query.check_scope(&[x]).is_ok());
    /// assert_eq!(
    ///     "variable `x` is not bound by a quantifier in `CrashedServer(x)`",
    ///     query.check_scope(&[]).unwrap_err().to_string(),
    /// );
    /// ```
    pub fn check_scope(&self, free: &[V]) -> Result<(), Error> {
        match self.free_vars().into_iter().find(|v| !free.contains(v)) {
            Some(variable) => Err(Error::UnboundVariable {
                variable: variable.clone(),
                formula: self.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Formula for Fof {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Top | Self::Bottom => Ok(Sig::new()),
            Self::Atom(this) => this.signature(),
            Self::Equals(this) => this.signature(),
            Self::Not(this) => this.formula.signature(),
            Self::And(this) => this.left.signature()?.merge(this.right.signature()?),
            Self::Or(this) => this.left.signature()?.merge(this.right.signature()?),
            Self::Implies(this) => this
                .premise
                .signature()?
                .merge(this.consequence.signature()?),
            Self::Iff(this) => this.left.signature()?.merge(this.right.signature()?),
            Self::Exists(this) => this.formula.signature(),
            Self::Forall(this) => this.formula.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&V> {
        fn binary<'a>(left: &'a Fof, right: &'a Fof) -> Vec<&'a V> {
            left.free_vars()
                .into_iter()
                .chain(right.free_vars())
                .unique()
                .collect()
        }

        match self {
            Self::Top | Self::Bottom => Vec::new(),
            Self::Atom(this) => this.free_vars(),
            Self::Equals(this) => this.free_vars(),
            Self::Not(this) => this.formula.free_vars(),
            Self::And(this) => binary(&this.left, &this.right),
            Self::Or(this) => binary(&this.left, &this.right),
            Self::Implies(this) => binary(&this.premise, &this.consequence),
            Self::Iff(this) => binary(&this.left, &this.right),
            Self::Exists(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| *v != &this.variable)
                .collect(),
            Self::Forall(this) => this
                .formula
                .free_vars()
                .into_iter()
                .filter(|v| *v != &this.variable)
                .collect(),
        }
    }
}

// the symbols used for rendering formulae.
struct Notation {
    top: &'static str,
    bottom: &'static str,
    not: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
    forall: &'static str,
    exists: &'static str,
}

const MATH: Notation = Notation {
    top: "⊤",
    bottom: "⟘",
    not: "¬",
    and: "∧",
    or: "∨",
    implies: "→",
    iff: "⇔",
    forall: "∀",
    exists: "∃",
};

// contains no non-ascii characters
const ASCII: Notation = Notation {
    top: "true",
    bottom: "false",
    not: "~",
    and: "&",
    or: "|",
    implies: "->",
    iff: "<=>",
    forall: "!",
    exists: "?",
};

// Atoms and sentinels are written bare; every other operand is parenthesized so that the
// structure of a formula is recoverable from its text alone.
fn write_operand(formula: &Fof, notation: &Notation, f: &mut fmt::Formatter) -> fmt::Result {
    match formula {
        Fof::Top | Fof::Bottom | Fof::Atom(_) => write_formula(formula, notation, f),
        _ => {
            write!(f, "(")?;
            write_formula(formula, notation, f)?;
            write!(f, ")")
        }
    }
}

fn write_binary(
    left: &Fof,
    symbol: &str,
    right: &Fof,
    notation: &Notation,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    write_operand(left, notation, f)?;
    write!(f, " {} ", symbol)?;
    write_operand(right, notation, f)
}

fn write_formula(formula: &Fof, notation: &Notation, f: &mut fmt::Formatter) -> fmt::Result {
    match formula {
        Fof::Top => write!(f, "{}", notation.top),
        Fof::Bottom => write!(f, "{}", notation.bottom),
        Fof::Atom(this) => write!(f, "{}", this),
        Fof::Equals(this) => write!(f, "{}", this),
        Fof::Not(this) => {
            write!(f, "{}", notation.not)?;
            write_operand(&this.formula, notation, f)
        }
        Fof::And(this) => write_binary(&this.left, notation.and, &this.right, notation, f),
        Fof::Or(this) => write_binary(&this.left, notation.or, &this.right, notation, f),
        Fof::Implies(this) => write_binary(
            &this.premise,
            notation.implies,
            &this.consequence,
            notation,
            f,
        ),
        Fof::Iff(this) => write_binary(&this.left, notation.iff, &this.right, notation, f),
        Fof::Exists(this) => {
            write!(f, "{} {}. ", notation.exists, this.variable)?;
            write_operand(&this.formula, notation, f)
        }
        Fof::Forall(this) => {
            write!(f, "{} {}. ", notation.forall, this.variable)?;
            write_operand(&this.formula, notation, f)
        }
    }
}

// used for pretty printing a formula
impl fmt::Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write_formula(self, &MATH, f)
    }
}

impl fmt::Debug for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write_formula(self, &ASCII, f)
    }
}
