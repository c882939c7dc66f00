//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ir_type_lattice::types::{
    Argument, Device, FunctionSchema, InterfaceBuilder, ScalarType, TensorType,
};
use ir_type_lattice::{Type, TypeRef};

/// Float tensor on the CPU with fully known sizes.
pub fn tensor_with_sizes(sizes: &[usize]) -> TypeRef {
    Type::tensor_of(TensorType::from_sizes(ScalarType::Float, Device::cpu(), sizes))
}

pub fn point() -> TypeRef {
    Type::named_tuple(
        Some("Point"),
        vec![("x".to_string(), Type::int()), ("y".to_string(), Type::int())],
    )
    .expect("Point has no Any fields")
}

pub fn module_interface() -> TypeRef {
    InterfaceBuilder::new("Module")
        .method(FunctionSchema::new(
            "forward",
            vec![Argument::new("x", Type::tensor())],
            vec![Type::tensor()],
        ))
        .finish()
        .expect("Module is well formed")
}

/// A spread of types over every kind the lattice orders.
pub fn sample_types() -> Vec<TypeRef> {
    vec![
        Type::any(),
        Type::none(),
        Type::number(),
        Type::int(),
        Type::float(),
        Type::bool(),
        Type::string(),
        Type::device(),
        Type::tensor(),
        tensor_with_sizes(&[2, 3]),
        tensor_with_sizes(&[4, 5]),
        Type::optional(Type::int()),
        Type::optional_tensor(),
        Type::list_of_ints(),
        Type::list_of_floats(),
        Type::list_of_tensors(),
        Type::list(tensor_with_sizes(&[2, 3])),
        Type::list(Type::optional(Type::int())),
        Type::tuple(vec![Type::int(), Type::int()]),
        Type::tuple(vec![Type::number(), Type::optional(Type::int())]),
        Type::tuple(vec![Type::int()]),
        point(),
        Type::dict(Type::string(), Type::int()),
        Type::dict(Type::string(), tensor_with_sizes(&[2, 3])),
        Type::dict(Type::string(), Type::tensor()),
        Type::future(Type::int()),
        Type::future(Type::number()),
        Type::function("torch.relu"),
        module_interface(),
    ]
}
