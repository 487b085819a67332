use std::hash::{Hash, Hasher};

use derivative::Derivative;
use lazy_static::lazy_static;
use pretty::DocAllocator;

use hornbeam_printer::tokens::{BRACKET_CLOSE, BRACKET_OPEN};
use hornbeam_printer::{Alloc, Builder, Print, PrintCfg};

use super::Term;
use crate::{ContainsVars, HashSet, Occurs, Substitutable, Substitution, Variable};

lazy_static! {
    /// Wildcard sentinel accepted wherever "any name" may appear.
    /// It is constructed once, before any concurrent use, and never
    /// mutated afterwards.
    pub static ref ANY: Name = Name::new("_");
}

/// A free name of the protocol model, e.g. a nonce, a key or an agent
/// identity. Names are ground: they contain no variables and are
/// invariant under substitution.
///
/// A name renders as `k[]`. The bracket suffix marks a term with zero
/// arguments, consistent with how function applications render.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq)]
pub struct Name {
    id: String,
    /// Cached hash of `id`, computed once at construction.
    #[derivative(PartialEq = "ignore")]
    hash: u64,
}

impl Name {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let hash = fxhash::hash64(&id);
        Name { id, hash }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl From<Name> for Term {
    fn from(val: Name) -> Self {
        Term::Name(val)
    }
}

impl ContainsVars for Name {
    fn contains_vars(&self) -> bool {
        false
    }

    fn collect_vars(&self, _vars: &mut HashSet<Variable>) {}
}

impl Occurs for Name {
    fn occurs<F>(&self, _f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        false
    }
}

impl Substitutable for Name {
    type Target = Name;
    fn subst<S: Substitution>(&self, _by: &S) -> Self::Target {
        self.clone()
    }
}

impl Print for Name {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(&self.id).append(BRACKET_OPEN).append(BRACKET_CLOSE)
    }
}
