use crate::{HashSet, Variable};

pub trait ContainsVars {
    /// Whether any variable occurs in the term.
    ///
    /// A term without variables is ground: it is invariant under
    /// substitution and unifies only structurally.
    fn contains_vars(&self) -> bool;

    /// Collect every variable occurring in the term into `vars`.
    fn collect_vars(&self, vars: &mut HashSet<Variable>);
}

impl<T: ContainsVars> ContainsVars for Box<T> {
    fn contains_vars(&self) -> bool {
        T::contains_vars(self)
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        T::collect_vars(self, vars)
    }
}

impl<T: ContainsVars> ContainsVars for Option<T> {
    fn contains_vars(&self) -> bool {
        self.as_ref().map(|inner| inner.contains_vars()).unwrap_or_default()
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        if let Some(inner) = self {
            inner.collect_vars(vars)
        }
    }
}

impl<T: ContainsVars> ContainsVars for Vec<T> {
    fn contains_vars(&self) -> bool {
        self.iter().any(|x| x.contains_vars())
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        for x in self {
            x.collect_vars(vars)
        }
    }
}
