//! Construction-time invariants of named aggregates.

use super::error::TypeError;
use super::ir_type::Type;

/// Whether `Any` occurs anywhere in `ty`, including `ty` itself.
pub fn contains_any(ty: &Type) -> bool {
    if matches!(ty, Type::Any) {
        return true;
    }
    let mut to_scan = ty.contained_types();
    while let Some(current) = to_scan.pop() {
        if matches!(*current, Type::Any) {
            return true;
        }
        to_scan.extend(current.contained_types());
    }
    false
}

/// Reject a named aggregate member whose type contains `Any`.
///
/// Consumers of named members rely on a concrete runtime layout, which an
/// unconstrained member cannot provide. `role` describes the member
/// ("attribute", "method argument", ...).
pub fn check_no_any(
    container: &str,
    role: &'static str,
    member: &str,
    member_type: &Type,
) -> Result<(), TypeError> {
    if contains_any(member_type) {
        tracing::debug!(container, role, member, "rejected Any-typed member");
        return Err(TypeError::any_in_named_member(
            container,
            role,
            member,
            member_type.annotation_str(),
        ));
    }
    Ok(())
}
