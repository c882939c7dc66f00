//! Rust API for the execution and dispatch layers.
//!
//! Thin free-function entry points over the lattice, taking and returning
//! shared type handles.

use crate::matching::{self, MatchError, TypeEnv};
use crate::types::{self, Kind, TypeError, TypeRef};
use crate::unify;

/// Whether a value of type `sub` may be used where `sup` is expected.
pub fn subtype(sub: &TypeRef, sup: &TypeRef) -> bool {
    sub.is_subtype_of(sup)
}

/// Like [`subtype`], returning the explanation when the answer is no.
pub fn subtype_explained(sub: &TypeRef, sup: &TypeRef) -> Result<(), String> {
    let mut why_not = String::new();
    if sub.is_subtype_of_ext(sup, Some(&mut why_not)) {
        return Ok(());
    }
    if why_not.is_empty() {
        why_not = format!(
            "{} is not a subtype of {}",
            sub.annotation_str(),
            sup.annotation_str()
        );
    }
    Err(why_not)
}

pub fn unify(t1: &TypeRef, t2: &TypeRef) -> Option<TypeRef> {
    unify::unify(t1, t2)
}

pub fn unify_all(types: &[TypeRef]) -> Option<TypeRef> {
    unify::unify_all(types)
}

/// Bind the free variables of `formal` against `actual`.
pub fn match_variables(formal: &TypeRef, actual: &TypeRef) -> Result<TypeEnv, MatchError> {
    matching::match_variables(formal, actual)
}

/// Bind a whole signature: each formal against the actual at the same position.
///
/// All positions share one environment, so a variable used twice must be
/// consistent across arguments.
pub fn match_signature(formals: &[TypeRef], actuals: &[TypeRef]) -> Result<TypeEnv, MatchError> {
    if formals.len() != actuals.len() {
        return Err(MatchError::ArgumentCount {
            expected: formals.len(),
            found: actuals.len(),
        });
    }
    let mut env = TypeEnv::new();
    for (formal, actual) in formals.iter().zip(actuals.iter()) {
        matching::match_type_variables(formal, actual, &mut env)?;
    }
    Ok(env)
}

/// Substitute `env` into `generic`; `Ok(None)` when a variable is unbound.
pub fn evaluate(generic: &TypeRef, env: &TypeEnv) -> Result<Option<TypeRef>, TypeError> {
    matching::evaluate(generic, env)
}

/// Shared instance of a stateless kind; `None` for kinds that carry state.
pub fn primitive_singleton(kind: Kind) -> Option<TypeRef> {
    types::primitive_singleton(kind)
}
