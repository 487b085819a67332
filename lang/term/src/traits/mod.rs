mod contains_vars;
mod occurs;
mod subst;

pub use contains_vars::*;
pub use occurs::*;
pub use subst::*;
