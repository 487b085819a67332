use std::fmt::Debug;

use pretty::DocAllocator;

use hornbeam_printer::{Alloc, Builder, Print, PrintCfg};

use crate::term::{Term, Variable};
use crate::HashMap;

// Subst
//
//

/// A finalized substitution: an immutable mapping from variables to terms.
///
/// A substitution is produced by one successful unification attempt and is
/// then applied to rewrite terms. After construction it is never mutated,
/// so it can be shared freely across parallel proof-search branches.
/// Variables the map does not cover pass through application unchanged.
#[derive(Debug, Clone)]
pub struct Subst {
    pub map: HashMap<Variable, Term>,
}

impl Subst {
    pub fn empty() -> Self {
        Self { map: HashMap::default() }
    }

    /// Construct a substitution from a single variable→term binding.
    pub fn assign(var: Variable, term: Term) -> Self {
        let mut map = HashMap::default();
        map.insert(var, term);
        Subst { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl Substitution for Subst {
    fn get_subst(&self, var: &Variable) -> Option<Term> {
        self.map.get(var).cloned()
    }
}

impl Print for Subst {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let mut keys: Vec<_> = self.map.keys().collect();
        keys.sort_by(|lhs, rhs| lhs.id().cmp(rhs.id()));
        let assignments = keys.into_iter().map(|key| {
            key.print(cfg, alloc).append(" := ").append(self.map[key].print(cfg, alloc))
        });
        alloc.intersperse(assignments, ", ").enclose("{", "}")
    }
}

// Substitution
//
//

/// Trait for entities which can be used as a substitution.
/// In order to be used as a substitution an entity has to provide a method
/// to query it for the term bound to a given variable.
pub trait Substitution: Clone + Debug {
    fn get_subst(&self, var: &Variable) -> Option<Term>;
}

// Assign
//
//

/// An assignment is the simplest form of a substitution which provides just
/// one mapping from a variable to a term.
#[derive(Clone, Debug)]
pub struct Assign {
    pub var: Variable,
    pub term: Term,
}

impl Substitution for Assign {
    fn get_subst(&self, var: &Variable) -> Option<Term> {
        if self.var == *var { Some(self.term.clone()) } else { None }
    }
}

// Substitutable
//
//

/// A trait for all entities to which we can apply a substitution.
/// Every term variant implements this trait.
/// The result type of applying a substitution is parameterized, because
/// substituting for a variable does not, in general, yield another variable.
pub trait Substitutable: Sized {
    type Target;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target;
}

impl<T: Substitutable> Substitutable for Option<T> {
    type Target = Option<T::Target>;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        self.as_ref().map(|x| x.subst(by))
    }
}

impl<T: Substitutable> Substitutable for Vec<T> {
    type Target = Vec<T::Target>;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        self.iter().map(|x| x.subst(by)).collect()
    }
}

impl<T: Substitutable> Substitutable for Box<T> {
    type Target = Box<T::Target>;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        Box::new((**self).subst(by))
    }
}
