//! Subtype checking for Type.

use std::fmt::Write as _;

use super::Type;
use crate::types::interface::InterfaceType;
use crate::types::tuple::TupleType;

impl Type {
    /// Check if `self` is a subtype of `other` (`self <: other`).
    ///
    /// # Examples
    /// ```
    /// use ir_type_lattice::types::Type;
    ///
    /// assert!(Type::int().is_subtype_of(&Type::number()));
    /// assert!(Type::int().is_subtype_of(&Type::optional(Type::int())));
    /// assert!(Type::none().is_subtype_of(&Type::optional(Type::float())));
    /// assert!(!Type::int().is_subtype_of(&Type::float()));
    /// ```
    pub fn is_subtype_of(&self, other: &Type) -> bool {
        self.is_subtype_of_ext(other, None)
    }

    /// [`is_subtype_of`](Self::is_subtype_of), appending the reasons for a
    /// negative answer to `why_not` when given.
    pub fn is_subtype_of_ext(&self, other: &Type, mut why_not: Option<&mut String>) -> bool {
        match (self, other) {
            // Refined tensors: other's known facts must survive the merge unchanged.
            (Type::Tensor(mine), Type::Tensor(theirs)) => {
                return std::ptr::eq(self, other) || mine.merge(theirs) == *theirs;
            }
            (Type::Int | Type::Float, Type::Number) => return true,
            (Type::None, Type::Optional(_)) => return true,
            _ => {}
        }

        if self.is_subtype_of_base(other, why_not.as_deref_mut()) {
            return true;
        }

        match (self, other) {
            (Type::Tuple(mine), Type::Tuple(theirs)) => tuple_is_subtype(mine, theirs, why_not),
            (Type::Interface(mine), Type::Interface(theirs)) => {
                interface_is_subtype(mine, theirs, why_not)
            }
            (Type::List(mine), Type::List(theirs))
            | (Type::Optional(mine), Type::Optional(theirs))
            | (Type::Future(mine), Type::Future(theirs)) => {
                mine.is_subtype_of_ext(theirs, why_not)
            }
            (Type::Dict(my_key, my_value), Type::Dict(their_key, their_value)) => {
                my_key.is_subtype_of_ext(their_key, why_not.as_deref_mut())
                    && my_value.is_subtype_of_ext(their_value, why_not)
            }
            _ => false,
        }
    }

    /// Rule shared by every kind: `Any` on the right, structural equality, or
    /// `Optional[T]` on the right with `self <: T`.
    fn is_subtype_of_base(&self, other: &Type, why_not: Option<&mut String>) -> bool {
        if matches!(other, Type::Any) || self == other {
            return true;
        }
        match other {
            Type::Optional(elem) => self.is_subtype_of_ext(elem, why_not),
            _ => false,
        }
    }
}

/// Covariant over elements; a named tuple may stand in for an unnamed one,
/// never the reverse.
fn tuple_is_subtype(mine: &TupleType, theirs: &TupleType, mut why_not: Option<&mut String>) -> bool {
    if mine.len() != theirs.len() {
        if let Some(sink) = why_not.as_deref_mut() {
            let _ = writeln!(
                sink,
                "Tuple of {} element(s) is not compatible with a tuple of {} element(s).",
                mine.len(),
                theirs.len()
            );
        }
        return false;
    }
    match (mine.field_names(), theirs.field_names()) {
        (None, Some(_)) => {
            if let Some(sink) = why_not.as_deref_mut() {
                let _ = writeln!(sink, "An unnamed tuple is not a subtype of a named tuple.");
            }
            return false;
        }
        (Some(my_fields), Some(their_fields)) if my_fields != their_fields => {
            if let Some(sink) = why_not.as_deref_mut() {
                let _ = writeln!(
                    sink,
                    "Named tuple fields ({}) do not match ({}).",
                    my_fields.join(", "),
                    their_fields.join(", ")
                );
            }
            return false;
        }
        _ => {}
    }
    mine.elements()
        .iter()
        .zip(theirs.elements().iter())
        .all(|(a, b)| a.is_subtype_of_ext(b, why_not.as_deref_mut()))
}

/// Structural: every method of `theirs` must exist on `mine` with a compatible signature.
fn interface_is_subtype(
    mine: &InterfaceType,
    theirs: &InterfaceType,
    mut why_not: Option<&mut String>,
) -> bool {
    for schema in theirs.methods() {
        let Some(own) = mine.method(schema.name()) else {
            if let Some(sink) = why_not.as_deref_mut() {
                let _ = writeln!(
                    sink,
                    "Interface '{}' does not have method '{}' but interface '{}' does.",
                    mine.name(),
                    schema.name(),
                    theirs.name()
                );
            }
            return false;
        };
        if !own.is_subtype_of(schema, why_not.as_deref_mut()) {
            if let Some(sink) = why_not.as_deref_mut() {
                let _ = writeln!(
                    sink,
                    "Method on interface '{}' (1) is not compatible with interface '{}' (2)",
                    mine.name(),
                    theirs.name()
                );
                let _ = writeln!(sink, "  (1) {}", own);
                let _ = writeln!(sink, "  (2) {}", schema);
            }
            return false;
        }
    }
    true
}
