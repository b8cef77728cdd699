/*! Defines the symbols ['V'], ['C'] and ['Pred'] for making terms and formulae.

['V']: crate::syntax::V
['C']: crate::syntax::C
['Pred']: crate::syntax::Pred
*/

use super::{formula::Atom, Error, Fof, Term};
use std::fmt;

/// Words of the formula notation that cannot be used as variable names.
pub(crate) const KEYWORDS: [&str; 9] = [
    "true", "false", "not", "and", "or", "implies", "iff", "forall", "exists",
];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// checks `name` against a lexical class: a first character accepted by `first`, followed by
// word characters.
fn check_name(
    constructor: &'static str,
    what: &str,
    pattern: &str,
    name: &str,
    first: fn(char) -> bool,
) -> Result<(), Error> {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        None => {
            return Err(Error::malformed(
                constructor,
                format!("a non-empty {}", what),
                "an empty string",
            ))
        }
        Some(c) => first(c) && chars.all(is_word_char),
    };
    if !well_formed {
        return Err(Error::malformed(
            constructor,
            format!("a {} matching `{}`", what, pattern),
            format!("`{}`", name),
        ));
    }
    Ok(())
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(String);

impl V {
    /// Creates a variable symbol. `name` must start with a lowercase letter or `_`, continue
    /// with letters, digits or `_`, and must not be a keyword of the formula notation
    /// (`not`, `forall`, ...).
    ///
    /// **Example**:
    /// ```rust
    /// # use axiom_fol::syntax::V;
    /// assert!(V::new("x_1").is_ok());
    /// assert!(V::new("X").is_err());
    /// assert!(V::new("exists").is_err());
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        check_name("Variable", "name", "[a-z_][A-Za-z0-9_]*", &name, |c| {
            c.is_ascii_lowercase() || c == '_'
        })?;
        if KEYWORDS.contains(&name.as_str()) {
            return Err(Error::malformed(
                "Variable",
                "a name that is not a keyword",
                format!("`{}`", name),
            ));
        }
        Ok(Self(name))
    }

    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: A constant and a variable with the same name are different symbols; the two
/// are distinguished by their type and by their rendering (constants are prefixed by `'`).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(String);

impl C {
    /// Creates a constant symbol. `name` is written without the `'` prefix and consists of
    /// letters, digits and `_` only.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        check_name("Constant", "name", "[A-Za-z0-9_]+", &name, is_word_char)?;
        Ok(Self(name))
    }

    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "'{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Represents a predicate symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(String);

impl Pred {
    /// Creates a predicate symbol, failing unless `name` starts with an uppercase letter
    /// followed by letters, digits or `_`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        check_name(
            "Atom",
            "predicate name",
            "[A-Z][A-Za-z0-9_]*",
            &name,
            |c| c.is_ascii_uppercase(),
        )?;
        Ok(Self(name))
    }

    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms.
    ///
    /// **Note**: the definition of [`Pred`] does not impose any restrictions on the arity of
    /// predicate symbols. Inconsistent uses of the same predicate are reported by
    /// [`Formula::signature`].
    ///
    /// [`Pred`]: crate::syntax::Pred
    /// [`Formula::signature`]: crate::syntax::Formula::signature
    pub fn app(&self, terms: Vec<Term>) -> Fof {
        Atom::new(self.clone(), terms).into()
    }

    /// Returns a nullary (propositional) atom of the receiver.
    pub fn app0(&self) -> Fof {
        self.app(Vec::new())
    }

    /// Applies the receiver on one term.
    pub fn app1<T: Into<Term>>(&self, first: T) -> Fof {
        self.app(vec![first.into()])
    }

    /// Applies the receiver on two terms.
    pub fn app2<T: Into<Term>, U: Into<Term>>(&self, first: T, second: U) -> Fof {
        self.app(vec![first.into(), second.into()])
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
