//! Unification of messages.
//!
//! This crate implements the two unification relations of the term
//! algebra: the asymmetric "unified to" relation, which matches a term
//! against a fixed target, and the symmetric "unifiable" relation of
//! general unification. Both come with guarded entry points that consult
//! a [`Guard`] of disequality constraints before any structural work is
//! done. Bindings discovered during one attempt are accumulated in a
//! [`SubstBuilder`] and finalized into an immutable substitution.

mod builder;
mod guard;
mod result;
mod unify;

pub use builder::*;
pub use guard::*;
pub use result::*;
pub use unify::*;
