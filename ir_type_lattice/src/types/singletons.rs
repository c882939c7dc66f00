//! Process-wide registry of stateless types.
//!
//! Each entry is built on first access and shared afterwards. `Lazy` gives
//! exactly-once construction under concurrent first access, and lock-free
//! reads once initialized.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::ir_type::{Type, TypeRef};
use super::kind::Kind;
use super::tensor::TensorType;

static ANY: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Any));
static NONE: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::None));
static NUMBER: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Number));
static INT: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Int));
static FLOAT: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Float));
static BOOL: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Bool));
static STRING: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::String));
static DEVICE: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Device));
static GENERATOR: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Generator));
static CAPSULE: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Capsule));

static TENSOR: Lazy<TypeRef> = Lazy::new(|| Arc::new(Type::Tensor(TensorType::unknown())));
static OPTIONAL_TENSOR: Lazy<TypeRef> = Lazy::new(|| Type::optional(TENSOR.clone()));
static LIST_OF_TENSORS: Lazy<TypeRef> = Lazy::new(|| Type::list(TENSOR.clone()));
static LIST_OF_INTS: Lazy<TypeRef> = Lazy::new(|| Type::list(INT.clone()));
static LIST_OF_FLOATS: Lazy<TypeRef> = Lazy::new(|| Type::list(FLOAT.clone()));
static LIST_OF_BOOLS: Lazy<TypeRef> = Lazy::new(|| Type::list(BOOL.clone()));

/// The shared instance for a stateless kind; `None` for kinds that carry state.
pub fn primitive_singleton(kind: Kind) -> Option<TypeRef> {
    let cell = match kind {
        Kind::Any => &ANY,
        Kind::None => &NONE,
        Kind::Number => &NUMBER,
        Kind::Int => &INT,
        Kind::Float => &FLOAT,
        Kind::Bool => &BOOL,
        Kind::String => &STRING,
        Kind::Device => &DEVICE,
        Kind::Generator => &GENERATOR,
        Kind::Capsule => &CAPSULE,
        Kind::Tensor
        | Kind::List
        | Kind::Optional
        | Kind::Tuple
        | Kind::Dict
        | Kind::Future
        | Kind::Function
        | Kind::Interface
        | Kind::Var => return None,
    };
    Some(Lazy::force(cell).clone())
}

impl Type {
    pub fn any() -> TypeRef {
        ANY.clone()
    }

    pub fn none() -> TypeRef {
        NONE.clone()
    }

    pub fn number() -> TypeRef {
        NUMBER.clone()
    }

    pub fn int() -> TypeRef {
        INT.clone()
    }

    pub fn float() -> TypeRef {
        FLOAT.clone()
    }

    pub fn bool() -> TypeRef {
        BOOL.clone()
    }

    pub fn string() -> TypeRef {
        STRING.clone()
    }

    pub fn device() -> TypeRef {
        DEVICE.clone()
    }

    pub fn generator() -> TypeRef {
        GENERATOR.clone()
    }

    pub fn capsule() -> TypeRef {
        CAPSULE.clone()
    }

    /// The generic tensor: every fact unknown.
    pub fn tensor() -> TypeRef {
        TENSOR.clone()
    }

    pub fn optional_tensor() -> TypeRef {
        OPTIONAL_TENSOR.clone()
    }

    pub fn list_of_tensors() -> TypeRef {
        LIST_OF_TENSORS.clone()
    }

    pub fn list_of_ints() -> TypeRef {
        LIST_OF_INTS.clone()
    }

    pub fn list_of_floats() -> TypeRef {
        LIST_OF_FLOATS.clone()
    }

    pub fn list_of_bools() -> TypeRef {
        LIST_OF_BOOLS.clone()
    }
}
