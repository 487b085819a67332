use log::trace;

use hornbeam_printer::PrintToString;
use hornbeam_term::{HashMap, Subst, Term, Variable};

/// Accumulates the variable→term bindings discovered during one
/// unification attempt.
///
/// A builder is scoped to exactly one attempt: concurrent attempts must
/// each allocate their own builder, and a builder must not be reused once
/// its attempt has completed. On success the builder is finalized into an
/// immutable [`Subst`] with [`SubstBuilder::into_subst`]; on failure it is
/// discarded together with any partial bindings it holds.
#[derive(Debug, Clone)]
pub struct SubstBuilder {
    map: HashMap<Variable, Term>,
}

impl SubstBuilder {
    pub fn new() -> Self {
        Self { map: HashMap::default() }
    }

    /// Record the binding `var := term`.
    ///
    /// Fails and leaves the builder unchanged if `var` is already bound
    /// to a different term; recording an equal binding twice succeeds as
    /// a no-op. At most one binding per variable per attempt.
    pub fn try_add(&mut self, var: &Variable, term: Term) -> bool {
        match self.map.get(var) {
            Some(bound) => {
                let compatible = *bound == term;
                if !compatible {
                    trace!(
                        "rejecting binding {} := {}, already bound to {}",
                        var.print_to_string(None),
                        term.print_to_string(None),
                        bound.print_to_string(None)
                    );
                }
                compatible
            }
            None => {
                self.map.insert(var.clone(), term);
                true
            }
        }
    }

    /// The term `var` is bound to in this attempt, if any.
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Finalize the attempt into an immutable substitution.
    pub fn into_subst(self) -> Subst {
        Subst { map: self.map }
    }
}

impl Default for SubstBuilder {
    fn default() -> Self {
        Self::new()
    }
}
