//! Front-end configuration.
//!
//! Builder-style: a small struct
//! of knobs with a `default()` that reproduces the documented behavior
//! exactly, plus `with_*` setters so callers (the CLI, tests) can opt into
//! the non-default behaviors one at a time.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Whether the unparser prints `name(symbol)` annotations after
    /// resolution. On by default, matching the documented unparser output.
    pub annotate_symbols: bool,
    /// Stop recording diagnostics past this many entries. `None` (the
    /// default) means unbounded, matching the documented "no buffering
    /// limit" behavior; set for pathological inputs that would otherwise
    /// produce unbounded diagnostic output.
    pub max_diagnostics: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            annotate_symbols: true,
            max_diagnostics: None,
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        CompilerConfig::default()
    }

    pub fn with_annotate_symbols(mut self, annotate: bool) -> Self {
        self.annotate_symbols = annotate;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_unparser_and_diagnostics_behavior() {
        let config = CompilerConfig::default();
        assert!(config.annotate_symbols);
        assert_eq!(config.max_diagnostics, None);
    }

    #[test]
    fn builder_methods_are_additive_and_chainable() {
        let config = CompilerConfig::new()
            .with_annotate_symbols(false)
            .with_max_diagnostics(50);
        assert!(!config.annotate_symbols);
        assert_eq!(config.max_diagnostics, Some(50));
    }
}
