use std::cell::RefCell;
use term::{color::Color, Attr, StdoutTerminal};

/// Is the part of the output a piece of text belongs to. Each role is printed in its own
/// style.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Logo,
    Info,
    Theory,
    Query,
    Error,
}

impl Role {
    fn style(self) -> Style {
        match self {
            Role::Logo => Style::color(59).attribute(Attr::Dim),
            Role::Info => Style::color(59).attribute(Attr::Bold),
            Role::Theory => Style::color(252),
            Role::Query => Style::color(252).attribute(Attr::Bold),
            Role::Error => Style::color(term::color::BRIGHT_RED).attribute(Attr::Bold),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Style {
    color: Color,
    attr: Option<Attr>,
}

impl Style {
    fn color(color: Color) -> Self {
        Self { color, attr: None }
    }

    fn attribute(self, attr: Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}

/// Colors the standard output by [`Role`]. A plain stylus prints text as is.
pub struct Stylus {
    terminal: Option<RefCell<Box<StdoutTerminal>>>,
}

impl Stylus {
    /// Creates a stylus that colors the output if `color` is set and the standard output is
    /// a terminal that `term` recognizes. Otherwise the stylus is plain.
    pub fn new(color: bool) -> Self {
        let terminal = if color {
            term::stdout().map(RefCell::new)
        } else {
            None
        };
        Self { terminal }
    }

    pub fn is_plain(&self) -> bool {
        self.terminal.is_none()
    }

    /// Prints what follows in the style of `role`.
    pub fn set(&self, role: Role) {
        let style = role.style();
        self.with_terminal(|terminal| {
            terminal.reset()?;
            terminal.fg(style.color)?;
            if let Some(attr) = style.attr {
                terminal.attr(attr)?;
            }
            Ok(())
        });
    }

    pub fn reset(&self) {
        self.with_terminal(|terminal| terminal.reset());
    }

    // styling is best effort: a terminal that rejects a color or an attribute prints plain text.
    fn with_terminal<F>(&self, apply: F)
    where
        F: FnOnce(&mut StdoutTerminal) -> term::Result<()>,
    {
        if let Some(terminal) = &self.terminal {
            if let Ok(mut terminal) = terminal.try_borrow_mut() {
                let _ = apply(&mut **terminal);
            }
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_stylus() {
        let stylus = Stylus::new(false);
        assert!(stylus.is_plain());
        stylus.set(Role::Error);
        stylus.reset();
    }

    #[test]
    fn role_styles() {
        assert_eq!(
            Style {
                color: 252,
                attr: None
            },
            Role::Theory.style()
        );
        assert_eq!(Some(Attr::Bold), Role::Query.style().attr);
        assert_eq!(Role::Theory.style().color, Role::Query.style().color);
        assert_ne!(Role::Info.style(), Role::Logo.style());
        assert_eq!(term::color::BRIGHT_RED, Role::Error.style().color);
    }
}
