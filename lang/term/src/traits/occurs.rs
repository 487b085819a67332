use crate::term::Term;
use crate::term::Variable;

pub trait Occurs {
    /// Whether a subterm that fulfills a predicate occurs
    ///
    /// # Parameters
    ///
    /// - `f`: the predicate which is called on all subterms
    ///
    /// # Returns
    ///
    /// Whether the predicate `f` evaluates to `true` on any subterm
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool;

    /// Whether the given variable occurs as a subterm
    fn occurs_var(&self, var: &Variable) -> bool {
        self.occurs(&|term| matches!(term, Term::Variable(v) if v == var))
    }
}

pub fn occurs_in(var: &Variable, in_term: &Term) -> bool {
    in_term.occurs_var(var)
}

impl<T: Occurs> Occurs for Box<T> {
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        T::occurs(self, f)
    }
}

impl<T: Occurs> Occurs for Vec<T> {
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        self.iter().any(|x| x.occurs(f))
    }
}

impl<T: Occurs> Occurs for Option<T> {
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        self.as_ref().map(|inner| inner.occurs(f)).unwrap_or_default()
    }
}
