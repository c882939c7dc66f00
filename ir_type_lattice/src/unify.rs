//! Least upper bounds of types observed at control-flow merge points.

use crate::types::{Type, TypeRef};

/// The supertype of `t1` and `t2` when one subsumes the other.
pub fn either_is_supertype(t1: &TypeRef, t2: &TypeRef) -> Option<TypeRef> {
    if t1.is_subtype_of(t2) {
        Some(t2.clone())
    } else if t2.is_subtype_of(t1) {
        Some(t1.clone())
    } else {
        None
    }
}

/// Replace every tensor anywhere in `ty` with the generic tensor.
///
/// Shape refinements do not change a value's runtime representation, so
/// containers compare on the unshaped form.
pub fn unshaped_type(ty: &TypeRef) -> TypeRef {
    match ty.as_ref() {
        Type::Tensor(_) => Type::tensor(),
        _ if !ty.kind().is_container() => ty.clone(),
        // swapping tensors for the generic tensor never introduces Any
        _ => ty
            .with_contained(ty.contained_types().iter().map(unshaped_type).collect())
            .unwrap_or_else(|_| ty.clone()),
    }
}

/// Most specific common supertype of `t1` and `t2`, if one exists.
///
/// # Examples
/// ```
/// use ir_type_lattice::types::Type;
/// use ir_type_lattice::unify::unify;
///
/// let unified = unify(&Type::none(), &Type::int());
/// assert_eq!(unified, Some(Type::optional(Type::int())));
/// assert_eq!(unify(&Type::int(), &Type::string()), None);
/// ```
pub fn unify(t1: &TypeRef, t2: &TypeRef) -> Option<TypeRef> {
    let unified = unify_inner(t1, t2);
    if unified.is_none() {
        tracing::trace!(
            lhs = %t1.annotation_str(),
            rhs = %t2.annotation_str(),
            "no common type"
        );
    }
    unified
}

fn unify_inner(t1: &TypeRef, t2: &TypeRef) -> Option<TypeRef> {
    // t1 == t2, or one is a refinement of the other
    if let Some(supertype) = either_is_supertype(t1, t2) {
        return Some(supertype);
    }

    if let (Type::Tensor(a), Type::Tensor(b)) = (t1.as_ref(), t2.as_ref()) {
        return Some(Type::tensor_of(a.merge(b)));
    }

    let tensor = Type::tensor();
    if t1.is_subtype_of(&tensor) && t2.is_subtype_of(&tensor) {
        return Some(tensor);
    }

    let none = Type::none();
    match (t1.is_subtype_of(&none), t2.is_subtype_of(&none)) {
        (true, false) => return Some(Type::optional(t2.clone())),
        (false, true) => return Some(Type::optional(t1.clone())),
        _ => {}
    }

    match (t1.as_ref(), t2.as_ref()) {
        // Lists never coerce across element representations; only shape
        // refinements may differ.
        (Type::List(_), Type::List(_)) => {
            either_is_supertype(&unshaped_type(t1), &unshaped_type(t2))
        }
        (Type::Tuple(a), Type::Tuple(b)) => {
            if a.len() != b.len() {
                return None;
            }
            let elements = a
                .elements()
                .iter()
                .zip(b.elements().iter())
                .map(|(x, y)| unify_inner(x, y))
                .collect::<Option<Vec<_>>>()?;
            Some(Type::tuple(elements))
        }
        (Type::Dict(key1, value1), Type::Dict(key2, value2)) => {
            let key = unify_inner(key1, key2)?;
            let value = either_is_supertype(&unshaped_type(value1), &unshaped_type(value2))?;
            Some(Type::dict(key, value))
        }
        _ => None,
    }
}

/// Left fold of [`unify`] over `types`; `None` for an empty slice or any failed step.
pub fn unify_all(types: &[TypeRef]) -> Option<TypeRef> {
    let (first, rest) = types.split_first()?;
    rest.iter()
        .try_fold(first.clone(), |acc, next| unify(&acc, next))
}
