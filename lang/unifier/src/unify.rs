//! The two unification relations of the term algebra.
//!
//! The *unified to* relation is asymmetric: it asks whether the left
//! term, possibly after binding variables occurring in the left term, can
//! be made structurally identical to the already-fixed right term. Only
//! the left term's variables may be bound.
//!
//! The *unifiable* relation is symmetric general unification: variables
//! on either side may be bound.
//!
//! Both relations share one structural algorithm per variant pair and
//! have guarded entry points that consult a [`Guard`] first. A pair the
//! guard forbids never reaches the structural algorithm, so it never
//! produces observable bindings.

use log::trace;

use hornbeam_printer::PrintToString;
use hornbeam_term::{Function, Name, Term, Variable, occurs_in};

use crate::builder::SubstBuilder;
use crate::guard::Guard;
use crate::result::UnifyError;

// Unify
//
//

/// The unification capability of terms. Every term variant implements
/// this trait; [`Term`] dispatches to its variants.
pub trait Unify {
    /// Whether `self` can be made structurally identical to the fixed
    /// target `other` by binding variables occurring in `self` only.
    /// Bindings are recorded in `sf`. A failed attempt may leave partial
    /// bindings behind; the builder is scoped to this attempt and must be
    /// discarded on failure.
    fn unified_to(&self, other: &Term, sf: &mut SubstBuilder) -> bool;

    /// Symmetric general unification of `self` and `other`: variables on
    /// either side may be bound. Bindings are recorded in `sf`. A failed
    /// attempt may leave partial bindings behind; the builder is scoped
    /// to this attempt and must be discarded on failure.
    fn unifiable(&self, other: &Term, sf: &mut SubstBuilder) -> bool;

    /// Whether the two terms unify at all. Runs the unguarded symmetric
    /// relation with a fresh builder and discards the bindings.
    fn is_unifiable_with(&self, other: &Term) -> bool {
        let mut sf = SubstBuilder::new();
        self.unifiable(other, &mut sf)
    }
}

/// Bind `var` to `other`, the one step of both relations that records a
/// binding. Binding a variable to itself succeeds without recording
/// anything; the occurs check rejects a binding that would create an
/// infinite term.
fn bind_variable(var: &Variable, other: &Term, sf: &mut SubstBuilder) -> bool {
    if let Term::Variable(o) = other {
        if var == o {
            return true;
        }
    }
    if occurs_in(var, other) {
        trace!(
            "occurs check failed: {} occurs in {}",
            var.print_to_string(None),
            other.print_to_string(None)
        );
        return false;
    }
    sf.try_add(var, other.clone())
}

impl Unify for Name {
    fn unified_to(&self, other: &Term, _sf: &mut SubstBuilder) -> bool {
        // A name is ground: it matches a fixed target only if the target
        // is the same name, and it never produces bindings.
        matches!(other, Term::Name(o) if self == o)
    }

    fn unifiable(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        match other {
            Term::Name(o) => self == o,
            Term::Variable(v) => sf.try_add(v, Term::Name(self.clone())),
            Term::Function(_) => false,
        }
    }
}

impl Unify for Variable {
    fn unified_to(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        // The variable is the left term's own, so it may be bound even
        // though the target is fixed.
        bind_variable(self, other, sf)
    }

    fn unifiable(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        bind_variable(self, other, sf)
    }
}

impl Unify for Function {
    fn unified_to(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        match other {
            Term::Function(o) => {
                self.id() == o.id()
                    && self.arity() == o.arity()
                    && self.args().iter().zip(o.args()).all(|(lhs, rhs)| lhs.unified_to(rhs, sf))
            }
            // The target's variables may not be bound, and a name has no
            // substructure to match an application against.
            Term::Name(_) | Term::Variable(_) => false,
        }
    }

    fn unifiable(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        match other {
            Term::Function(o) => {
                self.id() == o.id()
                    && self.arity() == o.arity()
                    && self.args().iter().zip(o.args()).all(|(lhs, rhs)| lhs.unifiable(rhs, sf))
            }
            Term::Variable(v) => bind_variable(v, &Term::Function(self.clone()), sf),
            Term::Name(_) => false,
        }
    }
}

impl Unify for Term {
    fn unified_to(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        match self {
            Term::Name(e) => e.unified_to(other, sf),
            Term::Variable(e) => e.unified_to(other, sf),
            Term::Function(e) => e.unified_to(other, sf),
        }
    }

    fn unifiable(&self, other: &Term, sf: &mut SubstBuilder) -> bool {
        match self {
            Term::Name(e) => e.unifiable(other, sf),
            Term::Variable(e) => e.unifiable(other, sf),
            Term::Function(e) => e.unifiable(other, sf),
        }
    }
}

// Guarded entry points
//
//

/// Guarded entry of the asymmetric relation. The guard is consulted
/// before the structural algorithm runs; a forbidden pair fails without
/// touching `sf`.
pub fn unified_to_under(guard: &Guard, lhs: &Term, rhs: &Term, sf: &mut SubstBuilder) -> bool {
    if !guard.can_unify(lhs, rhs) {
        trace!(
            "guard forbids matching {} against {}",
            lhs.print_to_string(None),
            rhs.print_to_string(None)
        );
        return false;
    }
    lhs.unified_to(rhs, sf)
}

/// Guarded entry of the symmetric relation. The guard is consulted
/// before the structural algorithm runs; a forbidden pair fails without
/// touching `sf`.
pub fn unifiable_under(guard: &Guard, lhs: &Term, rhs: &Term, sf: &mut SubstBuilder) -> bool {
    if !guard.can_unify(lhs, rhs) {
        trace!(
            "guard forbids unifying {} with {}",
            lhs.print_to_string(None),
            rhs.print_to_string(None)
        );
        return false;
    }
    lhs.unifiable(rhs, sf)
}

/// Variant of [`unifiable_under`] that reports why the attempt failed.
/// Through the boolean relations a guard veto and a structural mismatch
/// are indistinguishable; callers that have to explain the failure use
/// this entry point instead.
pub fn unifiable_under_or_explain(
    guard: &Guard,
    lhs: &Term,
    rhs: &Term,
    sf: &mut SubstBuilder,
) -> Result<(), UnifyError> {
    if !guard.can_unify(lhs, rhs) {
        return Err(UnifyError::forbidden(lhs, rhs));
    }
    if !lhs.unifiable(rhs, sf) {
        return Err(UnifyError::mismatch(lhs, rhs));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use hornbeam_term::RuleProvenance;

    use super::*;

    fn name(id: &str) -> Term {
        Term::Name(Name::new(id))
    }

    fn var(id: &str) -> Variable {
        Variable::new(id)
    }

    fn fun(id: &str, args: Vec<Term>) -> Term {
        Term::Function(Function::new(id, args))
    }

    #[test]
    fn names_match_fixed_targets_only_by_equality() {
        let mut sf = SubstBuilder::new();
        assert!(name("x").unified_to(&name("x"), &mut sf));
        assert!(!name("x").unified_to(&name("y"), &mut sf));
        assert!(sf.is_empty());
    }

    #[test]
    fn ground_terms_never_bind_a_fixed_variable_target() {
        let mut sf = SubstBuilder::new();
        assert!(!name("k").unified_to(&Term::Variable(var("x")), &mut sf));
        assert!(!fun("f", vec![name("k")]).unified_to(&Term::Variable(var("x")), &mut sf));
        assert!(sf.is_empty());
    }

    #[test]
    fn variables_match_any_fixed_target() {
        let mut sf = SubstBuilder::new();
        assert!(Term::Variable(var("x")).unified_to(&name("k"), &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&name("k")));
    }

    #[test]
    fn unified_to_is_asymmetric_in_the_arguments() {
        let mut sf = SubstBuilder::new();
        assert!(fun("f", vec![Term::Variable(var("x"))]).unified_to(&fun("f", vec![name("a")]), &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&name("a")));

        let mut sf = SubstBuilder::new();
        assert!(!fun("f", vec![name("a")]).unified_to(&fun("f", vec![Term::Variable(var("x"))]), &mut sf));
    }

    #[test]
    fn unifying_a_name_with_a_variable_binds_the_variable() {
        let mut sf = SubstBuilder::new();
        assert!(name("k").unifiable(&Term::Variable(var("x")), &mut sf));
        assert_eq!(sf.len(), 1);
        assert_eq!(sf.get(&var("x")), Some(&name("k")));
    }

    #[test]
    fn conflicting_bindings_in_one_attempt_fail() {
        let mut sf = SubstBuilder::new();
        assert!(sf.try_add(&var("x"), name("a")));
        assert!(!sf.try_add(&var("x"), name("b")));
    }

    #[test]
    fn unifiable_is_symmetric_for_variables() {
        let mut sf = SubstBuilder::new();
        assert!(Term::Variable(var("x")).unifiable(&name("k"), &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&name("k")));

        let mut sf = SubstBuilder::new();
        assert!(name("k").unifiable(&Term::Variable(var("x")), &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&name("k")));
    }

    #[test]
    fn identical_variables_unify_without_a_binding() {
        let mut sf = SubstBuilder::new();
        assert!(Term::Variable(var("x")).unifiable(&Term::Variable(var("x")), &mut sf));
        assert!(sf.is_empty());
    }

    #[test]
    fn distinct_variables_unify_by_binding_left_to_right() {
        let mut sf = SubstBuilder::new();
        assert!(Term::Variable(var("x")).unifiable(&Term::Variable(var("y")), &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&Term::Variable(var("y"))));
    }

    #[test]
    fn applications_unify_argument_by_argument() {
        let mut sf = SubstBuilder::new();
        let lhs = fun("enc", vec![Term::Variable(var("x")), name("c")]);
        let rhs = fun("enc", vec![name("a"), Term::Variable(var("y"))]);
        assert!(lhs.unifiable(&rhs, &mut sf));
        assert_eq!(sf.get(&var("x")), Some(&name("a")));
        assert_eq!(sf.get(&var("y")), Some(&name("c")));
    }

    #[test]
    fn repeated_variables_must_agree_across_arguments() {
        let mut sf = SubstBuilder::new();
        let lhs = fun("f", vec![Term::Variable(var("x")), Term::Variable(var("x"))]);
        assert!(!lhs.unifiable(&fun("f", vec![name("a"), name("b")]), &mut sf));

        let mut sf = SubstBuilder::new();
        assert!(lhs.unifiable(&fun("f", vec![name("a"), name("a")]), &mut sf));
        assert_eq!(sf.len(), 1);
    }

    #[test]
    fn applications_with_different_heads_do_not_unify() {
        let mut sf = SubstBuilder::new();
        assert!(!fun("f", vec![name("a")]).unifiable(&fun("g", vec![name("a")]), &mut sf));
        assert!(!fun("f", vec![name("a")]).unifiable(&fun("f", vec![]), &mut sf));
        assert!(!fun("f", vec![]).unifiable(&name("f"), &mut sf));
    }

    #[test]
    fn occurs_check_rejects_infinite_terms() {
        let mut sf = SubstBuilder::new();
        let x = var("x");
        assert!(!Term::Variable(x.clone()).unifiable(&fun("f", vec![Term::Variable(x.clone())]), &mut sf));

        let mut sf = SubstBuilder::new();
        assert!(Term::Variable(x.clone()).unifiable(&fun("f", vec![Term::Variable(var("y"))]), &mut sf));
        assert_eq!(sf.get(&x), Some(&fun("f", vec![Term::Variable(var("y"))])));
    }

    #[test]
    fn is_unifiable_with_discards_bindings() {
        assert!(Term::Variable(var("x")).is_unifiable_with(&name("k")));
        assert!(name("k").is_unifiable_with(&name("k")));
        assert!(!name("k").is_unifiable_with(&name("n")));
    }

    #[test]
    fn guard_vetoes_before_any_binding_is_recorded() {
        let x = Term::Variable(var("x"));
        let guard = Guard::new([(x.clone(), name("secret"))]);
        let mut sf = SubstBuilder::new();
        // The unguarded relation would succeed and bind x.
        assert!(!unifiable_under(&guard, &name("secret"), &x, &mut sf));
        assert!(sf.is_empty());
    }

    #[test]
    fn guard_prefilters_the_asymmetric_relation() {
        let x = Term::Variable(var("x"));
        let guard = Guard::new([(x.clone(), name("secret"))]);
        let mut sf = SubstBuilder::new();
        assert!(!unified_to_under(&guard, &x, &name("secret"), &mut sf));
        assert!(sf.is_empty());
        // Pairs the guard does not mention pass through to the algorithm.
        assert!(unified_to_under(&guard, &x, &name("public"), &mut sf));
    }

    #[test]
    fn explain_distinguishes_veto_from_mismatch() {
        let x = Term::Variable(var("x"));
        let guard = Guard::new([(x.clone(), name("secret"))]);

        let mut sf = SubstBuilder::new();
        let err = unifiable_under_or_explain(&guard, &name("secret"), &x, &mut sf).unwrap_err();
        assert_eq!(err, UnifyError::forbidden(&name("secret"), &x));

        let mut sf = SubstBuilder::new();
        let err = unifiable_under_or_explain(&guard, &name("a"), &name("b"), &mut sf).unwrap_err();
        assert_eq!(err, UnifyError::mismatch(&name("a"), &name("b")));

        let mut sf = SubstBuilder::new();
        assert!(unifiable_under_or_explain(&guard, &name("a"), &name("a"), &mut sf).is_ok());
    }

    #[test]
    fn explanations_can_carry_rule_provenance() {
        let prov = RuleProvenance::new(3, 5, "foo");
        let err = UnifyError::mismatch(&name("a"), &name("b")).with_rule(&prov);
        let UnifyError::Mismatch { origin, .. } = err else {
            panic!("expected a mismatch");
        };
        assert_eq!(origin.as_deref(), Some("Line 3, Col 5 : foo"));
    }

    #[test]
    fn independent_attempts_do_not_observe_each_other() {
        let mut fst = SubstBuilder::new();
        let mut snd = SubstBuilder::new();
        assert!(Term::Variable(var("x")).unifiable(&name("k"), &mut fst));
        assert!(Term::Variable(var("x")).unifiable(&name("n"), &mut snd));
        assert_eq!(fst.get(&var("x")), Some(&name("k")));
        assert_eq!(snd.get(&var("x")), Some(&name("n")));
    }
}
