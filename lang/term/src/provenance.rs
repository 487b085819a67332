use std::fmt;

/// Where a user-authored rule came from.
///
/// The record is created once, when a rule is parsed or synthesized, and
/// is only ever read afterwards, to label diagnostics with the offending
/// rule's position and text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleProvenance {
    /// One-based line of the rule in its source document.
    pub row: usize,
    /// One-based column of the rule in its source document.
    pub column: usize,
    /// The rule text as the user wrote it.
    pub source: String,
}

impl RuleProvenance {
    pub fn new(row: usize, column: usize, source: impl Into<String>) -> Self {
        RuleProvenance { row, column, source: source.into() }
    }

    /// Provenance for a rule that is not tied to a concrete source
    /// position, e.g. a rule synthesized during proof search. The
    /// location fields are left at their defaults.
    pub fn synthesized(source: impl Into<String>) -> Self {
        RuleProvenance {
            row: usize::default(),
            column: usize::default(),
            source: source.into(),
        }
    }
}

impl fmt::Display for RuleProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Col {} : {}", self.row, self.column, self.source)
    }
}
