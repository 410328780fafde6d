//! Diagnostic sink.
//!
//! A small struct rather than a global: the scanner, parser and resolver
//! each take `&mut Diagnostics`, so a fresh sink (and a fresh "errors
//! occurred" flag) is just a fresh value, not a reset routine on some
//! process-wide state.

use crate::position::Position;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "***WARNING***"),
            Severity::Error => write!(f, "***ERROR***"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub position: Position,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position, self.severity, self.message)
    }
}

/// Collects diagnostics for a single compile, in call order.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    had_errors: bool,
    max: Option<usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Stop recording new diagnostics past `max` entries. Existing callers
    /// (scanner/parser/resolver) keep calling `warn`/`fatal` unconditionally;
    /// this only caps what gets stored and rendered, for pathological inputs.
    pub fn with_max(max: usize) -> Self {
        Diagnostics {
            max: Some(max),
            ..Diagnostics::default()
        }
    }

    pub fn warn(&mut self, position: Position, message: impl Into<String>) {
        self.push(Severity::Warning, position, message.into());
    }

    pub fn fatal(&mut self, position: Position, message: impl Into<String>) {
        self.had_errors = true;
        self.push(Severity::Error, position, message.into());
    }

    fn push(&mut self, severity: Severity, position: Position, message: String) {
        if let Some(max) = self.max {
            if self.entries.len() >= max {
                return;
            }
        }
        self.entries.push(Diagnostic {
            severity,
            position,
            message,
        });
    }

    pub fn had_errors(&self) -> bool {
        self.had_errors
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries, one per line, in call order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for d in &self.entries {
            out.push_str(&d.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_error_and_warning_lines() {
        let mut d = Diagnostics::new();
        d.warn(Position::new(1, 5), "integer literal too large; using max value");
        d.fatal(Position::new(2, 1), "Multiply declared identifier");

        assert!(d.had_errors());
        assert_eq!(
            d.render(),
            "1:5 ***WARNING*** integer literal too large; using max value\n\
             2:1 ***ERROR*** Multiply declared identifier\n"
        );
    }

    #[test]
    fn warn_alone_does_not_set_had_errors() {
        let mut d = Diagnostics::new();
        d.warn(Position::new(1, 1), "integer literal too large; using max value");
        assert!(!d.had_errors());
    }

    #[test]
    fn max_caps_recorded_entries() {
        let mut d = Diagnostics::with_max(1);
        d.fatal(Position::new(1, 1), "first");
        d.fatal(Position::new(2, 1), "second");
        assert_eq!(d.entries().len(), 1);
        assert!(d.had_errors());
    }
}
