use std::hash::{Hash, Hasher};

use derivative::Derivative;
use pretty::DocAllocator;

use hornbeam_printer::{Alloc, Builder, Print, PrintCfg};

use super::Term;
use crate::{ContainsVars, HashSet, Occurs, Substitutable, Substitution};

/// An unbound placeholder standing for an arbitrary message.
///
/// Unifying a variable with a term binds the variable to that term; the
/// bindings of one unification attempt are accumulated in a substitution
/// builder and finalized into a [`crate::Subst`].
///
/// A variable renders as its bare identifier, which distinguishes it from
/// the bracketed rendering of names and function applications.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq)]
pub struct Variable {
    id: String,
    /// Cached hash of `id`, computed once at construction.
    #[derivative(PartialEq = "ignore")]
    hash: u64,
}

impl Variable {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let hash = fxhash::hash64(&id);
        Variable { id, hash }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl From<Variable> for Term {
    fn from(val: Variable) -> Self {
        Term::Variable(val)
    }
}

impl ContainsVars for Variable {
    fn contains_vars(&self) -> bool {
        true
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        vars.insert(self.clone());
    }
}

impl Occurs for Variable {
    fn occurs<F>(&self, _f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        false
    }
}

impl Substitutable for Variable {
    type Target = Term;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        match by.get_subst(self) {
            None => Term::Variable(self.clone()),
            Some(term) => term,
        }
    }
}

impl Print for Variable {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(&self.id)
    }
}
