//! The message algebra of the verifier.
//!
//! Rules of the verifier match and combine facts by unifying first-order
//! terms ("messages"). This crate defines the term representation and the
//! capabilities every term variant provides: variable queries, structural
//! containment, substitution application and prettyprinting. The
//! unification relations themselves live in the `hornbeam-unifier` crate.

pub mod provenance;
pub mod term;
pub mod traits;

pub use provenance::*;
pub use term::*;
pub use traits::*;

// Terms sit on the hot path of proof search, so maps and sets keyed by
// terms use the fxhash hasher.
pub use fxhash::FxHashMap as HashMap;
pub use fxhash::FxHashSet as HashSet;
