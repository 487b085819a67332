use hornbeam_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::{ContainsVars, HashSet, Occurs, Substitutable, Substitution};

mod function;
mod name;
mod variable;

pub use function::*;
pub use name::*;
pub use variable::*;

// Term
//
//

/// A message of the symbolic protocol model.
///
/// Terms are immutable value objects: once constructed they are never
/// mutated, and all of their capabilities are pure queries or rewrites
/// that produce fresh terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Name(Name),
    Variable(Variable),
    Function(Function),
}

impl Term {
    /// Structural containment: whether `other` occurs as a subterm of
    /// `self`. For terms without substructure this degenerates to
    /// equality.
    pub fn contains_term(&self, other: &Term) -> bool {
        self.occurs(&|term| term == other)
    }
}

impl Occurs for Term {
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        if f(self) {
            return true;
        }
        match self {
            Term::Name(_) => {
                // Names have no subterms, therefore the check above is sufficient
                false
            }
            Term::Variable(_) => {
                // Variables have no subterms, therefore the check above is sufficient
                false
            }
            Term::Function(e) => e.occurs(f),
        }
    }
}

impl ContainsVars for Term {
    fn contains_vars(&self) -> bool {
        match self {
            Term::Name(e) => e.contains_vars(),
            Term::Variable(e) => e.contains_vars(),
            Term::Function(e) => e.contains_vars(),
        }
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        match self {
            Term::Name(e) => e.collect_vars(vars),
            Term::Variable(e) => e.collect_vars(vars),
            Term::Function(e) => e.collect_vars(vars),
        }
    }
}

impl Substitutable for Term {
    type Target = Term;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        match self {
            Term::Name(e) => Term::Name(e.subst(by)),
            Term::Variable(e) => e.subst(by),
            Term::Function(e) => Term::Function(e.subst(by)),
        }
    }
}

impl Print for Term {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Term::Name(e) => e.print_prec(cfg, alloc, prec),
            Term::Variable(e) => e.print_prec(cfg, alloc, prec),
            Term::Function(e) => e.print_prec(cfg, alloc, prec),
        }
    }
}
