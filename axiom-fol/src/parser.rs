//! Implements a parser for first-order formulae and theories.
//!
//! The module provides a parser for first-order formulae by implementing [`FromStr`] for
//! [`Fof`] and [`Theory`]. The parser accepts both the mathematical notation used by
//! `Display` and the ASCII notation used by `Debug`, so every rendered formula can be read
//! back.
//!
//! **Example**:
//! ```rust
//! use axiom_fol::syntax::Fof;
//!
//! let formula: Fof = "exists x. Person(x) & ~Parent(x, 'elena)".parse().unwrap();
//! assert_eq!("∃ x. (Person(x) ∧ (¬Parent(x, 'elena)))", formula.to_string());
//! ```
//!
//! A [`Theory`] is a list of formulae, each terminated by `;`:
//! ```rust
//! use axiom_fol::syntax::Theory;
//!
//! let theory: Theory = r#"
//!    // mathematical notation:
//!    ∀ x. (Female(x) ∨ Male(x));
//!    // verbose notation:
//!    forall x, y. (Child(x, y) implies Parent(y, x));
//!    // compact notation:
//!    ! x. (Mother(x) <=> Female(x) & (? y. Child(y, x)));
//! "#.parse().unwrap();
//!
//! assert_eq!("∀ x. (Female(x) ∨ Male(x))\n\
//! ∀ x. (∀ y. (Child(x, y) → Parent(y, x)))\n\
//! ∀ x. (Mother(x) ⇔ (Female(x) ∧ (∃ y. Child(y, x))))", theory.to_string());
//! ```
//!
//! [`Fof`]: crate::syntax::Fof
//! [`Theory`]: crate::syntax::Theory
//! [`FromStr`]: std::str::FromStr
use super::syntax::{self, Fof, Formula, Sig, Theory};
use lalrpop_util::ParseError;
use std::{fmt, str::FromStr};
use thiserror::Error;

lalrpop_mod!(
    #[allow(clippy::all)]
    pub grammar
); // synthesized by LALRPOP

/// Is the kind of token the parser would have accepted where parsing failed. Connectives
/// and quantifiers are reported in the notation that formulae are displayed in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Expected {
    Comma,
    Dot,
    Semicolon,
    LParen,
    RParen,
    Equal,
    Top,
    Bottom,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Forall,
    Exists,
    Variable,
    Predicate,
    Constant,
}

impl Expected {
    // maps the name of a grammar terminal, as reported by the generated parser, to its kind.
    fn from_terminal(name: &str) -> Option<Self> {
        let kind = match name.trim_matches('"') {
            "_COMMA_" => Self::Comma,
            "_DOT_" => Self::Dot,
            "_SEMICOLON_" => Self::Semicolon,
            "_LPAREN_" => Self::LParen,
            "_RPAREN_" => Self::RParen,
            "_EQUAL_" => Self::Equal,
            "_TRUE_" => Self::Top,
            "_FALSE_" => Self::Bottom,
            "_NOT_" => Self::Not,
            "_AND_" => Self::And,
            "_OR_" => Self::Or,
            "_IMPLIES_" => Self::Implies,
            "_IFF_" => Self::Iff,
            "_FORALL_" => Self::Forall,
            "_EXISTS_" => Self::Exists,
            "_LOWER_" => Self::Variable,
            "_UPPER_" => Self::Predicate,
            "_CONST_" => Self::Constant,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Semicolon => "`;`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Equal => "`=`",
            Self::Top => "`⊤`",
            Self::Bottom => "`⟘`",
            Self::Not => "`¬`",
            Self::And => "`∧`",
            Self::Or => "`∨`",
            Self::Implies => "`→`",
            Self::Iff => "`⇔`",
            Self::Forall => "`∀`",
            Self::Exists => "`∃`",
            Self::Variable => "a variable",
            Self::Predicate => "a predicate",
            Self::Constant => "a constant (`'name`)",
        };
        write!(f, "{}", text)
    }
}

fn expecting(items: &[Expected]) -> String {
    match items {
        [] => "the end of input".into(),
        [item] => item.to_string(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!(
            "{}, or {}",
            init.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
            last
        ),
    }
}

/// Is a position in the parsed text. Lines and columns are counted from 1 and columns
/// count characters, not bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    // `offset` is a byte offset on a character boundary of `source`.
    fn locate(source: &str, offset: usize) -> Self {
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Is the type of errors returned by the parser. Every error points at the position in the
/// text where it was detected.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a token cannot appear where it was found.
    #[error("{position}: found `{found}`, expecting {}", expecting(.expected))]
    UnexpectedToken {
        position: Position,
        found: String,
        expected: Vec<Expected>,
    },

    /// Is returned when the text ends before the formula or theory is complete.
    #[error("{position}: unexpected end of input, expecting {}", expecting(.expected))]
    UnexpectedEnd {
        position: Position,
        expected: Vec<Expected>,
    },

    /// Is returned when the text contains a character that does not start any token.
    #[error("{position}: unrecognized character `{found}`")]
    UnrecognizedCharacter { position: Position, found: String },

    /// Is returned when a well-formed text is rejected by the syntax layer, for instance when
    /// a predicate of a theory is used with two arities. The position is that of the formula
    /// where the problem shows.
    #[error("{position}: {source}")]
    Syntax {
        position: Position,
        source: syntax::Error,
    },
}

type GrammarError<T> = ParseError<usize, T, (usize, syntax::Error)>;

fn convert_error<T: fmt::Display>(text: &str, error: GrammarError<T>) -> Error {
    let at = |offset| Position::locate(text, offset);
    let kinds = |expected: Vec<String>| -> Vec<Expected> {
        expected
            .iter()
            .filter_map(|name| Expected::from_terminal(name))
            .collect()
    };

    match error {
        ParseError::InvalidToken { location } => Error::UnrecognizedCharacter {
            position: at(location),
            found: text[location..].chars().take(1).collect(),
        },
        ParseError::UnrecognizedEOF { location, expected } => Error::UnexpectedEnd {
            position: at(location),
            expected: kinds(expected),
        },
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => Error::UnexpectedToken {
            position: at(start),
            found: token.to_string(),
            expected: kinds(expected),
        },
        ParseError::ExtraToken {
            token: (start, token, _),
        } => Error::UnexpectedToken {
            position: at(start),
            found: token.to_string(),
            expected: Vec::new(),
        },
        ParseError::User {
            error: (location, source),
        } => Error::Syntax {
            position: at(location),
            source,
        },
    }
}

impl FromStr for Fof {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::FormulaParser::new()
            .parse(s)
            .map_err(|e| convert_error(s, e))
    }
}

impl FromStr for Theory {
    type Err = Error;

    /// Parses a theory and checks that each predicate is used with a single arity. An arity
    /// conflict is reported at the first formula that contradicts the formulae before it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let formulae = grammar::TheoryParser::new()
            .parse(s)
            .map_err(|e| convert_error(s, e))?;

        let mut sig = Sig::default();
        for (offset, formula) in &formulae {
            let merged = formula.signature().and_then(|other| sig.merge(other));
            sig = merged.map_err(|source| Error::Syntax {
                position: Position::locate(s, *offset),
                source,
            })?;
        }
        Ok(formulae.into_iter().map(|(_, formula)| formula).collect())
    }
}
