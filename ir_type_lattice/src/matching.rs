//! Binding free type variables of a generic signature against call-site types.
//!
//! [`match_type_variables`] walks a formal type and an actual type together,
//! recording each variable's first observed type in a [`TypeEnv`] and checking
//! later observations for consistency. [`evaluate`] then substitutes the
//! bindings back into a formal type (e.g. a return type `List[List[t]]`
//! becomes `List[List[Int]]`).

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Type, TypeError, TypeRef};
use crate::unify::{unify, unify_all};

/// Variable name to the type bound to it during one matching pass.
pub type TypeEnv = HashMap<String, TypeRef>;

/// Why a formal type could not be matched against an actual type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A variable was already bound to a type that does not unify with the new one.
    #[error("Type variable '{var}' previously matched to type {previous} is matched to type {actual}")]
    Conflict {
        var: String,
        previous: String,
        actual: String,
    },

    #[error("Cannot match {formal} to {actual}")]
    CannotMatch { formal: String, actual: String },

    #[error("Cannot match tuples of mismatched size: expected arity {expected}, found arity {found}")]
    TupleArity { expected: usize, found: usize },

    /// A signature was matched against a different number of arguments.
    #[error("Expected {expected} argument(s) but found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("Cannot match a {container} to {actual}")]
    ContainerMismatch {
        container: &'static str,
        actual: String,
    },

    /// Malformed formal type; not a matching failure.
    #[error(transparent)]
    Fatal(#[from] TypeError),
}

impl MatchError {
    /// Fatal errors indicate a malformed request and must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MatchError::Fatal(_))
    }

    fn container_mismatch(container: &'static str, actual: &Type) -> Self {
        MatchError::ContainerMismatch {
            container,
            actual: actual.annotation_str(),
        }
    }
}

/// Match `formal` against `actual`, extending `env` with new bindings.
///
/// An existing binding is never widened: a repeated variable only has to
/// unify with its first binding. `None` against `Optional[T]` succeeds without
/// binding the variables of `T`.
pub fn match_type_variables(
    formal: &TypeRef,
    actual: &TypeRef,
    env: &mut TypeEnv,
) -> Result<(), MatchError> {
    if !formal.has_free_variables() {
        return Ok(());
    }

    match formal.as_ref() {
        Type::Var(name) => match env.get(name) {
            None => {
                tracing::debug!(var = %name, actual = %actual.annotation_str(), "bound type variable");
                env.insert(name.clone(), actual.clone());
                Ok(())
            }
            // unify allows subtyping in either direction; the binding stays as is
            Some(previous) if unify(previous, actual).is_some() => Ok(()),
            Some(previous) => {
                tracing::debug!(
                    var = %name,
                    previous = %previous.annotation_str(),
                    actual = %actual.annotation_str(),
                    "conflicting type variable binding"
                );
                Err(MatchError::Conflict {
                    var: name.clone(),
                    previous: previous.annotation_str(),
                    actual: actual.annotation_str(),
                })
            }
        },
        Type::List(formal_elem) => match actual.as_ref() {
            Type::List(actual_elem) => match_type_variables(formal_elem, actual_elem, env),
            Type::Tuple(tuple) => match unify_all(tuple.elements()) {
                Some(unified) => match_type_variables(formal_elem, &unified, env),
                None => Err(MatchError::CannotMatch {
                    formal: formal.annotation_str(),
                    actual: actual.annotation_str(),
                }),
            },
            _ => Err(MatchError::CannotMatch {
                formal: formal.annotation_str(),
                actual: actual.annotation_str(),
            }),
        },
        Type::Tuple(formal_tuple) => {
            let Type::Tuple(actual_tuple) = actual.as_ref() else {
                return Err(MatchError::container_mismatch("tuple", actual));
            };
            if formal_tuple.len() != actual_tuple.len() {
                return Err(MatchError::TupleArity {
                    expected: formal_tuple.len(),
                    found: actual_tuple.len(),
                });
            }
            formal_tuple
                .elements()
                .iter()
                .zip(actual_tuple.elements().iter())
                .try_for_each(|(f, a)| match_type_variables(f, a, env))
        }
        Type::Future(formal_elem) => match actual.as_ref() {
            Type::Future(actual_elem) => match_type_variables(formal_elem, actual_elem, env),
            _ => Err(MatchError::container_mismatch("future", actual)),
        },
        Type::Optional(formal_elem) => match actual.as_ref() {
            Type::Optional(actual_elem) => match_type_variables(formal_elem, actual_elem, env),
            // None is already an optional of unknown element; nothing to learn
            _ if actual.is_subtype_of(&Type::none()) => Ok(()),
            _ => match_type_variables(formal_elem, actual, env),
        },
        Type::Dict(formal_key, formal_value) => {
            let Type::Dict(actual_key, actual_value) = actual.as_ref() else {
                return Err(MatchError::container_mismatch("dict", actual));
            };
            match_type_variables(formal_key, actual_key, env)?;
            match_type_variables(formal_value, actual_value, env)
        }
        // Unreachable while has_free_variables only descends into the
        // containers handled above.
        _ => Err(TypeError::UnhandledFreeVariableContainer {
            formal: formal.annotation_str(),
        }
        .into()),
    }
}

/// Match `formal` against `actual` in a fresh environment and return the bindings.
pub fn match_variables(formal: &TypeRef, actual: &TypeRef) -> Result<TypeEnv, MatchError> {
    let mut env = TypeEnv::new();
    match_type_variables(formal, actual, &mut env)?;
    Ok(env)
}

/// Substitute the bindings of `env` into `ty`.
///
/// Returns `Ok(None)` if some variable of `ty` has no binding, and an error if
/// the substitution puts `Any` into a named tuple field.
pub fn evaluate(ty: &TypeRef, env: &TypeEnv) -> Result<Option<TypeRef>, TypeError> {
    if !ty.has_free_variables() {
        return Ok(Some(ty.clone()));
    }
    if let Type::Var(name) = ty.as_ref() {
        return Ok(env.get(name).cloned());
    }
    let mut contained = Vec::new();
    for child in ty.contained_types() {
        match evaluate(&child, env)? {
            Some(evaluated) => contained.push(evaluated),
            None => return Ok(None),
        }
    }
    ty.with_contained(contained).map(Some)
}
