//! Algebraic laws of the type lattice, checked over a fixed sample of types.

mod common;

use common::{sample_types, tensor_with_sizes};
use ir_type_lattice::types::{Device, ScalarType, TensorType, VaryingShape};
use ir_type_lattice::{subtype, unify_all, Type};
use pretty_assertions::assert_eq;

// ==================== Subtyping laws ====================

#[test]
fn test_subtype_is_reflexive() {
    for ty in sample_types() {
        assert!(subtype(&ty, &ty), "{} <: {}", ty, ty);
    }
}

#[test]
fn test_everything_is_subtype_of_any() {
    for ty in sample_types() {
        assert!(subtype(&ty, &Type::any()), "{} <: Any", ty);
    }
}

#[test]
fn test_everything_is_subtype_of_its_optional() {
    for ty in sample_types() {
        let optional = Type::optional(ty.clone());
        assert!(subtype(&ty, &optional), "{} <: {}", ty, optional);
    }
}

#[test]
fn test_subtype_is_transitive_on_sample() {
    let types = sample_types();
    for a in &types {
        for b in &types {
            for c in &types {
                if subtype(a, b) && subtype(b, c) {
                    assert!(subtype(a, c), "{} <: {} <: {}", a, b, c);
                }
            }
        }
    }
}

// ==================== Merge laws ====================

fn sample_shapes() -> Vec<VaryingShape> {
    vec![
        VaryingShape::unknown(),
        VaryingShape::with_rank(0),
        VaryingShape::with_rank(2),
        VaryingShape::new(vec![Some(2), None]),
        VaryingShape::from_sizes(&[2, 3]),
        VaryingShape::from_sizes(&[4, 5]),
        VaryingShape::from_sizes(&[2, 3, 4]),
    ]
}

fn sample_tensors() -> Vec<TensorType> {
    vec![
        TensorType::unknown(),
        TensorType::from_sizes(ScalarType::Float, Device::cpu(), &[2, 3]),
        TensorType::from_sizes(ScalarType::Float, Device::cuda(0), &[2, 3]),
        TensorType::from_sizes(ScalarType::Long, Device::cpu(), &[7]),
        TensorType::unknown()
            .with_scalar_type(ScalarType::Float)
            .with_requires_grad(true),
        TensorType::unknown()
            .with_sizes(VaryingShape::with_rank(2))
            .with_undefined(true),
    ]
}

#[test]
fn test_shape_merge_idempotent_and_commutative() {
    let shapes = sample_shapes();
    for a in &shapes {
        assert_eq!(&a.merge(a), a);
        for b in &shapes {
            assert_eq!(a.merge(b), b.merge(a), "merge({a}, {b})");
        }
    }
}

#[test]
fn test_tensor_merge_idempotent_and_commutative() {
    let tensors = sample_tensors();
    for a in &tensors {
        assert_eq!(&a.merge(a), a);
        for b in &tensors {
            assert_eq!(a.merge(b), b.merge(a));
        }
    }
}

#[test]
fn test_tensor_merge_is_upper_bound() {
    let tensors = sample_tensors();
    for a in &tensors {
        for b in &tensors {
            let merged = Type::tensor_of(a.merge(b));
            assert!(subtype(&Type::tensor_of(a.clone()), &merged), "{merged}");
            assert!(subtype(&Type::tensor_of(b.clone()), &merged), "{merged}");
        }
    }
}

// ==================== Unification laws ====================

#[test]
fn test_unify_is_sound() {
    let types = sample_types();
    for a in &types {
        for b in &types {
            if let Some(unified) = ir_type_lattice::api::unify(a, b) {
                assert!(subtype(a, &unified), "{} <: unify({}, {}) = {}", a, a, b, unified);
                assert!(subtype(b, &unified), "{} <: unify({}, {}) = {}", b, a, b, unified);
            }
        }
    }
}

#[test]
fn test_unify_is_symmetric_in_success() {
    let types = sample_types();
    for a in &types {
        for b in &types {
            let forward = ir_type_lattice::api::unify(a, b);
            let backward = ir_type_lattice::api::unify(b, a);
            assert_eq!(forward.is_some(), backward.is_some(), "unify({a}, {b})");
        }
    }
}

#[test]
fn test_unify_all_of_refinements_is_common_supertype() {
    let tensors = vec![
        tensor_with_sizes(&[2, 3]),
        tensor_with_sizes(&[2, 5]),
        tensor_with_sizes(&[2, 7]),
    ];
    let unified = unify_all(&tensors).unwrap();
    for t in &tensors {
        assert!(subtype(t, &unified));
    }
    assert_eq!(
        unified.as_tensor().unwrap().sizes(),
        &VaryingShape::new(vec![Some(2), None])
    );
}
