//! Type lattice and unification engine for a tensor IR.
//!
//! Answers three questions for a downstream compiler or interpreter:
//! - is type A usable where type B is expected ([`types::Type::is_subtype_of`]),
//! - what is the most specific common type of two observed types ([`unify::unify`]),
//! - which bindings of a generic signature's free variables make a call site
//!   consistent ([`matching::match_type_variables`], [`matching::evaluate`]).
//!
//! The crate only reasons about type descriptions; it never executes
//! operations or allocates tensor storage.

// Library code logs through `tracing`, never to stderr.
#![deny(clippy::print_stderr)]

pub mod api;
pub mod matching;
pub mod types;
pub mod unify;

pub use api::{
    evaluate, match_signature, match_variables, primitive_singleton, subtype,
    subtype_explained, unify_all,
};
pub use matching::{MatchError, TypeEnv};
pub use types::{Kind, Type, TypeError, TypeRef};
