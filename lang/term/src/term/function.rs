use std::hash::{Hash, Hasher};

use derivative::Derivative;
use fxhash::FxHasher;
use pretty::DocAllocator;

use hornbeam_printer::tokens::{BRACKET_CLOSE, BRACKET_OPEN, COMMA};
use hornbeam_printer::{Alloc, Builder, Print, PrintCfg};

use super::Term;
use crate::{ContainsVars, HashSet, Occurs, Substitutable, Substitution, Variable};

/// A constructor application `f[e1, ..., en]`.
/// Examples: `enc[m[], k[]]`, `pk[sk[]]`, `pair[x, y]`.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq)]
pub struct Function {
    /// The name of the constructor.
    /// The `f` in `f[e1, ..., en]`
    id: String,
    /// The arguments of the application.
    /// The `e1, ..., en` in `f[e1, ..., en]`
    args: Vec<Term>,
    /// Cached hash over `id` and `args`, computed once at construction.
    #[derivative(PartialEq = "ignore")]
    hash: u64,
}

impl Function {
    pub fn new(id: impl Into<String>, args: Vec<Term>) -> Self {
        let id = id.into();
        let mut hasher = FxHasher::default();
        id.hash(&mut hasher);
        args.hash(&mut hasher);
        let hash = hasher.finish();
        Function { id, args, hash }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl Hash for Function {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl From<Function> for Term {
    fn from(val: Function) -> Self {
        Term::Function(val)
    }
}

impl ContainsVars for Function {
    fn contains_vars(&self) -> bool {
        self.args.contains_vars()
    }

    fn collect_vars(&self, vars: &mut HashSet<Variable>) {
        self.args.collect_vars(vars)
    }
}

impl Occurs for Function {
    fn occurs<F>(&self, f: &F) -> bool
    where
        F: Fn(&Term) -> bool,
    {
        self.args.occurs(f)
    }
}

impl Substitutable for Function {
    type Target = Function;
    fn subst<S: Substitution>(&self, by: &S) -> Self::Target {
        Function::new(self.id.clone(), self.args.subst(by))
    }
}

impl Print for Function {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let sep = alloc.text(COMMA).append(alloc.space());
        let args = alloc.intersperse(self.args.iter().map(|arg| arg.print(cfg, alloc)), sep);
        alloc.text(&self.id).append(args.enclose(BRACKET_OPEN, BRACKET_CLOSE))
    }
}
