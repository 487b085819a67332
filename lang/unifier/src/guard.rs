use hornbeam_term::{HashMap, HashSet, Term};

/// Disequality constraints attached to a rule: pairs of terms that may
/// never be unified, e.g. "this variable may never equal the name
/// `secret[]`".
///
/// The guard is consulted by the guarded unification entry points before
/// the structural algorithm runs, so a forbidden pair never produces
/// bindings. Checking is a pure boolean gate without side effects.
#[derive(Debug, Clone, Default)]
pub struct Guard {
    forbidden: HashMap<Term, HashSet<Term>>,
}

impl Guard {
    /// A guard without constraints; it permits every pair.
    pub fn empty() -> Self {
        Self { forbidden: HashMap::default() }
    }

    /// Build a guard from forbidden pairs. Forbidding `(a, b)` also
    /// forbids `(b, a)`.
    pub fn new(pairs: impl IntoIterator<Item = (Term, Term)>) -> Self {
        let mut forbidden: HashMap<Term, HashSet<Term>> = HashMap::default();
        for (lhs, rhs) in pairs {
            forbidden.entry(lhs).or_default().insert(rhs);
        }
        Guard { forbidden }
    }

    /// Whether `lhs` and `rhs` may be unified: true unless the pair was
    /// explicitly forbidden, in either order.
    pub fn can_unify(&self, lhs: &Term, rhs: &Term) -> bool {
        !(self.forbids(lhs, rhs) || self.forbids(rhs, lhs))
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }

    fn forbids(&self, lhs: &Term, rhs: &Term) -> bool {
        self.forbidden.get(lhs).is_some_and(|terms| terms.contains(rhs))
    }
}

#[cfg(test)]
mod tests {
    use hornbeam_term::{Name, Variable};

    use super::*;

    fn name(id: &str) -> Term {
        Term::Name(Name::new(id))
    }

    fn var(id: &str) -> Term {
        Term::Variable(Variable::new(id))
    }

    #[test]
    fn empty_guard_permits_everything() {
        let guard = Guard::empty();
        assert!(guard.can_unify(&var("x"), &name("secret")));
        assert!(guard.is_empty());
    }

    #[test]
    fn forbidden_pairs_are_vetoed_symmetrically() {
        let guard = Guard::new([(var("x"), name("secret"))]);
        assert!(!guard.can_unify(&var("x"), &name("secret")));
        assert!(!guard.can_unify(&name("secret"), &var("x")));
    }

    #[test]
    fn unrelated_pairs_are_permitted() {
        let guard = Guard::new([(var("x"), name("secret"))]);
        assert!(guard.can_unify(&var("x"), &name("public")));
        assert!(guard.can_unify(&var("y"), &name("secret")));
    }
}
