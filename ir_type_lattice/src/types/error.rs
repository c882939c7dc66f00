//! Fatal errors raised while constructing or traversing types.

use thiserror::Error;

/// Malformed type construction requests.
///
/// These are programming errors on the caller's side: the operation that
/// produced one must not be retried with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A named aggregate member whose type contains `Any` somewhere beneath it.
    #[error(
        "attempting to add {role} '{member}' of type {member_type} to '{container}' but it \
         contains an Any type. Any types cannot be members of interfaces or named tuples."
    )]
    AnyInNamedMember {
        container: String,
        role: &'static str,
        member: String,
        member_type: String,
    },

    /// Two members of one named aggregate share a name.
    #[error("duplicate member '{member}' in '{container}'")]
    DuplicateMember { container: String, member: String },

    /// A free-variable-bearing type the matcher cannot destructure.
    #[error("unhandled free variable container: {formal}")]
    UnhandledFreeVariableContainer { formal: String },

    /// Strict shape merge of two known ranks that differ.
    #[error("cannot merge shapes of rank {left} and rank {right}")]
    ShapeRankMismatch { left: usize, right: usize },
}

impl TypeError {
    pub fn any_in_named_member(
        container: impl Into<String>,
        role: &'static str,
        member: impl Into<String>,
        member_type: impl Into<String>,
    ) -> Self {
        TypeError::AnyInNamedMember {
            container: container.into(),
            role,
            member: member.into(),
            member_type: member_type.into(),
        }
    }

    pub fn duplicate_member(container: impl Into<String>, member: impl Into<String>) -> Self {
        TypeError::DuplicateMember {
            container: container.into(),
            member: member.into(),
        }
    }
}
