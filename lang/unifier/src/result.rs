use miette::Diagnostic;
use thiserror::Error;

use hornbeam_printer::PrintToString;
use hornbeam_term::{RuleProvenance, Term};

/// Diagnostic for a failed unification attempt.
///
/// The unification relations themselves report failure as a plain
/// `false`. This error is produced on request, for callers that have to
/// explain to the user why a proof step was not applicable, and it
/// distinguishes a guard veto from a structural mismatch.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    #[error("Cannot unify {lhs} with {rhs}")]
    #[diagnostic(code("U-001"))]
    Mismatch {
        lhs: String,
        rhs: String,
        #[help]
        origin: Option<String>,
    },
    #[error("Unification of {lhs} with {rhs} is forbidden by a guard")]
    #[diagnostic(code("U-002"))]
    Forbidden {
        lhs: String,
        rhs: String,
        #[help]
        origin: Option<String>,
    },
}

impl UnifyError {
    pub fn mismatch(lhs: &Term, rhs: &Term) -> Self {
        Self::Mismatch {
            lhs: lhs.print_to_string(None),
            rhs: rhs.print_to_string(None),
            origin: None,
        }
    }

    pub fn forbidden(lhs: &Term, rhs: &Term) -> Self {
        Self::Forbidden {
            lhs: lhs.print_to_string(None),
            rhs: rhs.print_to_string(None),
            origin: None,
        }
    }

    /// Label the diagnostic with the rule the terms came from.
    pub fn with_rule(self, provenance: &RuleProvenance) -> Self {
        let origin = Some(provenance.to_string());
        match self {
            Self::Mismatch { lhs, rhs, .. } => Self::Mismatch { lhs, rhs, origin },
            Self::Forbidden { lhs, rhs, .. } => Self::Forbidden { lhs, rhs, origin },
        }
    }
}
