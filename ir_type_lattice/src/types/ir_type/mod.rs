//! The type node model.
//!
//! A [`Type`] is one closed sum over [`Kind`]. Nodes are immutable once
//! built and shared through [`TypeRef`] (`Arc<Type>`), so containment forms
//! a DAG and any number of threads can traverse the same node without locks.
//!
//! ```text
//! Any
//!  ├── Number
//!  │    ├── Int
//!  │    └── Float
//!  ├── Tensor                (generic; refined tensors sit below it)
//!  ├── Optional[T]
//!  │    ├── T
//!  │    └── None
//!  ├── List[T], Future[T], Dict[K, V], Tuple[...]   (covariant)
//!  └── Interface             (structural over methods)
//! ```
//!
//! # Sub-modules
//!
//! - `comparison`: subtype checking with optional diagnostics
//! - `display`: short display form and annotation form

mod comparison;
mod display;

use std::sync::Arc;

use super::error::TypeError;
use super::function::FunctionType;
use super::interface::InterfaceType;
use super::kind::Kind;
use super::singletons;
use super::tensor::TensorType;
use super::tuple::TupleType;

/// Shared handle to an immutable type node.
pub type TypeRef = Arc<Type>;

/// A type in the IR lattice.
///
/// Primitive variants are stateless; obtain them through the singleton
/// constructors (`Type::int()`, ...) or [`Type::shared`] so that every caller
/// observes the same instance.
///
/// The variants stay public for pattern matching. Wrapping a primitive variant
/// with `Arc::new` directly yields a second instance outside the registry;
/// lattice answers are unaffected because equality is structural, but
/// `Arc::ptr_eq` against the singleton no longer holds. Pass such values
/// through [`Type::shared`] before publishing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Any,
    None,
    Number,
    Int,
    Float,
    Bool,
    String,
    Device,
    Generator,
    Capsule,
    Tensor(TensorType),
    List(TypeRef),
    Optional(TypeRef),
    Tuple(TupleType),
    Dict(TypeRef, TypeRef),
    Future(TypeRef),
    Function(FunctionType),
    Interface(InterfaceType),
    /// Free type variable; only appears in generic formal signatures.
    Var(std::string::String),
}

impl Type {
    pub fn kind(&self) -> Kind {
        match self {
            Type::Any => Kind::Any,
            Type::None => Kind::None,
            Type::Number => Kind::Number,
            Type::Int => Kind::Int,
            Type::Float => Kind::Float,
            Type::Bool => Kind::Bool,
            Type::String => Kind::String,
            Type::Device => Kind::Device,
            Type::Generator => Kind::Generator,
            Type::Capsule => Kind::Capsule,
            Type::Tensor(_) => Kind::Tensor,
            Type::List(_) => Kind::List,
            Type::Optional(_) => Kind::Optional,
            Type::Tuple(_) => Kind::Tuple,
            Type::Dict(_, _) => Kind::Dict,
            Type::Future(_) => Kind::Future,
            Type::Function(_) => Kind::Function,
            Type::Interface(_) => Kind::Interface,
            Type::Var(_) => Kind::Var,
        }
    }

    /// Wrap in a shared handle, reusing the registry instance for primitives.
    pub fn shared(self) -> TypeRef {
        match singletons::primitive_singleton(self.kind()) {
            Some(instance) => instance,
            None => Arc::new(self),
        }
    }

    pub fn list(element: TypeRef) -> TypeRef {
        Arc::new(Type::List(element))
    }

    pub fn optional(element: TypeRef) -> TypeRef {
        Arc::new(Type::Optional(element))
    }

    pub fn future(element: TypeRef) -> TypeRef {
        Arc::new(Type::Future(element))
    }

    pub fn dict(key: TypeRef, value: TypeRef) -> TypeRef {
        Arc::new(Type::Dict(key, value))
    }

    pub fn tuple(elements: Vec<TypeRef>) -> TypeRef {
        Arc::new(Type::Tuple(TupleType::new(elements)))
    }

    /// A named tuple; fails if any field type contains `Any`.
    pub fn named_tuple(
        name: Option<&str>,
        fields: Vec<(std::string::String, TypeRef)>,
    ) -> Result<TypeRef, TypeError> {
        let tuple = TupleType::named(name.map(str::to_string), fields)?;
        Ok(Arc::new(Type::Tuple(tuple)))
    }

    /// A refined tensor type. Use [`Type::tensor`] for the generic one.
    pub fn tensor_of(tensor: TensorType) -> TypeRef {
        Arc::new(Type::Tensor(tensor))
    }

    pub fn function(name: impl Into<std::string::String>) -> TypeRef {
        Arc::new(Type::Function(FunctionType::new(name)))
    }

    pub fn var(name: impl Into<std::string::String>) -> TypeRef {
        Arc::new(Type::Var(name.into()))
    }

    /// Structural children, in declaration order.
    pub fn contained_types(&self) -> Vec<TypeRef> {
        match self {
            Type::List(elem) | Type::Optional(elem) | Type::Future(elem) => vec![elem.clone()],
            Type::Dict(key, value) => vec![key.clone(), value.clone()],
            Type::Tuple(tuple) => tuple.elements().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Rebuild this container kind around new children.
    ///
    /// `contained` must have the same length as [`contained_types`](Self::contained_types).
    /// Named tuples keep their schema and re-check their fields, so a field
    /// that now contains `Any` is rejected. Leaf types are returned unchanged.
    pub fn with_contained(&self, contained: Vec<TypeRef>) -> Result<TypeRef, TypeError> {
        debug_assert_eq!(contained.len(), self.contained_types().len());
        let mut children = contained.into_iter();
        let node = match self {
            Type::List(_) => children.next().map(Type::List),
            Type::Optional(_) => children.next().map(Type::Optional),
            Type::Future(_) => children.next().map(Type::Future),
            Type::Dict(_, _) => match (children.next(), children.next()) {
                (Some(key), Some(value)) => Some(Type::Dict(key, value)),
                _ => None,
            },
            Type::Tuple(tuple) => Some(Type::Tuple(tuple.with_elements(children.collect())?)),
            _ => None,
        };
        Ok(node.unwrap_or_else(|| self.clone()).shared())
    }

    /// Whether a [`Type::Var`] occurs anywhere beneath this node.
    pub fn has_free_variables(&self) -> bool {
        match self {
            Type::Var(_) => true,
            Type::List(elem) | Type::Optional(elem) | Type::Future(elem) => {
                elem.has_free_variables()
            }
            Type::Dict(key, value) => key.has_free_variables() || value.has_free_variables(),
            Type::Tuple(tuple) => tuple.elements().iter().any(|t| t.has_free_variables()),
            _ => false,
        }
    }

    /// Element type of a single-element container (List, Optional, Future).
    pub fn element_type(&self) -> Option<&TypeRef> {
        match self {
            Type::List(elem) | Type::Optional(elem) | Type::Future(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&TensorType> {
        match self {
            Type::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleType> {
        match self {
            Type::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<(&TypeRef, &TypeRef)> {
        match self {
            Type::Dict(key, value) => Some((key, value)),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Type::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn var_name(&self) -> Option<&str> {
        match self {
            Type::Var(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Type::None)
    }
}
