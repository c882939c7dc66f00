//! Tests for least-upper-bound computation at merge points.

mod common;

use std::sync::Arc;

use common::{point, tensor_with_sizes};
use ir_type_lattice::types::{Device, ScalarType, TensorType, VaryingShape};
use ir_type_lattice::unify::{either_is_supertype, unify, unshaped_type};
use ir_type_lattice::{unify_all, Type};
use pretty_assertions::assert_eq;

// ==================== Subsumption ====================

#[test]
fn test_unify_identical_returns_same_instance() {
    let unified = unify(&Type::int(), &Type::int()).unwrap();
    assert!(Arc::ptr_eq(&unified, &Type::int()));
}

#[test]
fn test_unify_picks_supertype() {
    assert_eq!(unify(&Type::int(), &Type::number()), Some(Type::number()));
    assert_eq!(unify(&Type::number(), &Type::float()), Some(Type::number()));
    assert_eq!(unify(&Type::bool(), &Type::any()), Some(Type::any()));
    assert_eq!(
        unify(&Type::int(), &Type::optional(Type::int())),
        Some(Type::optional(Type::int()))
    );
}

#[test]
fn test_unify_unrelated_primitives_fails() {
    assert_eq!(unify(&Type::int(), &Type::float()), None);
    assert_eq!(unify(&Type::string(), &Type::tensor()), None);
    assert_eq!(unify(&Type::bool(), &Type::function("torch.relu")), None);
}

// ==================== None and Optional ====================

#[test]
fn test_unify_none_with_int_is_optional_int() {
    let expected = Some(Type::optional(Type::int()));
    assert_eq!(unify(&Type::none(), &Type::int()), expected);
    assert_eq!(unify(&Type::int(), &Type::none()), expected);
}

#[test]
fn test_unify_none_with_none_is_none() {
    assert_eq!(unify(&Type::none(), &Type::none()), Some(Type::none()));
}

#[test]
fn test_unify_none_with_optional_keeps_optional() {
    let optional = Type::optional(Type::float());
    assert_eq!(unify(&Type::none(), &optional), Some(optional.clone()));
    assert_eq!(unify(&optional, &Type::none()), Some(optional));
}

// ==================== Tensors ====================

#[test]
fn test_unify_tensors_merges_facts() {
    let a = tensor_with_sizes(&[2, 3]);
    let b = Type::tensor_of(TensorType::from_sizes(ScalarType::Float, Device::cuda(0), &[2, 4]));
    let unified = unify(&a, &b).unwrap();
    let tensor = unified.as_tensor().unwrap();
    assert_eq!(tensor.scalar_type(), Some(ScalarType::Float));
    assert_eq!(tensor.device(), None);
    assert_eq!(tensor.sizes(), &VaryingShape::new(vec![Some(2), None]));
}

#[test]
fn test_unify_tensors_of_different_rank() {
    let unified = unify(&tensor_with_sizes(&[2, 3]), &tensor_with_sizes(&[6])).unwrap();
    assert_eq!(unified.as_tensor().unwrap().dim(), None);
    assert_eq!(unified.to_string(), "FloatTensor");
}

#[test]
fn test_unify_refined_with_generic_tensor() {
    assert_eq!(
        unify(&tensor_with_sizes(&[2, 3]), &Type::tensor()),
        Some(Type::tensor())
    );
}

// ==================== Lists ====================

#[test]
fn test_unify_lists_across_shape_only() {
    let a = Type::list(tensor_with_sizes(&[2, 3]));
    let b = Type::list(tensor_with_sizes(&[4, 5]));
    assert_eq!(unify(&a, &b), Some(Type::list_of_tensors()));
    assert_eq!(unify(&Type::list_of_ints(), &Type::list_of_floats()), None);
}

#[test]
fn test_unify_lists_by_subsumption() {
    let widened = Type::list(Type::optional(Type::int()));
    assert_eq!(unify(&Type::list_of_ints(), &widened), Some(widened));
}

#[test]
fn test_unshaped_type_strips_nested_tensors() {
    let nested = Type::dict(
        Type::string(),
        Type::tuple(vec![tensor_with_sizes(&[2]), Type::optional(tensor_with_sizes(&[3]))]),
    );
    let expected = Type::dict(
        Type::string(),
        Type::tuple(vec![Type::tensor(), Type::optional_tensor()]),
    );
    assert_eq!(unshaped_type(&nested), expected);

    let int = Type::int();
    assert!(Arc::ptr_eq(&unshaped_type(&int), &int));
}

#[test]
fn test_either_is_supertype() {
    assert_eq!(
        either_is_supertype(&Type::int(), &Type::number()),
        Some(Type::number())
    );
    assert_eq!(
        either_is_supertype(&Type::number(), &Type::int()),
        Some(Type::number())
    );
    assert_eq!(either_is_supertype(&Type::int(), &Type::float()), None);
}

// ==================== Tuples ====================

#[test]
fn test_unify_tuples_elementwise() {
    let a = Type::tuple(vec![Type::int(), Type::none()]);
    let b = Type::tuple(vec![Type::number(), Type::float()]);
    assert_eq!(
        unify(&a, &b),
        Some(Type::tuple(vec![Type::number(), Type::optional(Type::float())]))
    );
}

#[test]
fn test_unify_tuples_arity_mismatch() {
    let pair = Type::tuple(vec![Type::int(), Type::int()]);
    let single = Type::tuple(vec![Type::int()]);
    assert_eq!(unify(&pair, &single), None);
}

#[test]
fn test_unify_tuples_any_element_failure() {
    let a = Type::tuple(vec![Type::int(), Type::string()]);
    let b = Type::tuple(vec![Type::int(), Type::bool()]);
    assert_eq!(unify(&a, &b), None);
}

#[test]
fn test_unify_named_tuples_drops_names() {
    let other = Type::named_tuple(
        Some("Pixel"),
        vec![("x".to_string(), Type::int()), ("y".to_string(), Type::none())],
    )
    .unwrap();
    let unified = unify(&point(), &other).unwrap();
    let tuple = unified.as_tuple().unwrap();
    assert!(!tuple.is_named());
    assert_eq!(unified, Type::tuple(vec![Type::int(), Type::optional(Type::int())]));
}

// ==================== Dicts ====================

#[test]
fn test_unify_dicts() {
    let a = Type::dict(Type::string(), tensor_with_sizes(&[2]));
    let b = Type::dict(Type::string(), tensor_with_sizes(&[3]));
    assert_eq!(
        unify(&a, &b),
        Some(Type::dict(Type::string(), Type::tensor()))
    );

    let ints = Type::dict(Type::string(), Type::int());
    let floats = Type::dict(Type::string(), Type::float());
    assert_eq!(unify(&ints, &floats), None);
}

#[test]
fn test_unify_dict_keys_unify() {
    let a = Type::dict(Type::none(), Type::list_of_ints());
    let b = Type::dict(Type::int(), Type::list_of_ints());
    assert_eq!(
        unify(&a, &b),
        Some(Type::dict(Type::optional(Type::int()), Type::list_of_ints()))
    );
}

// ==================== unify_all ====================

#[test]
fn test_unify_all_empty_is_none() {
    assert_eq!(unify_all(&[]), None);
}

#[test]
fn test_unify_all_single_is_itself() {
    assert_eq!(unify_all(&[Type::float()]), Some(Type::float()));
}

#[test]
fn test_unify_all_folds_left() {
    let types = [Type::int(), Type::none(), Type::int()];
    assert_eq!(unify_all(&types), Some(Type::optional(Type::int())));
}

#[test]
fn test_unify_all_short_circuits() {
    let types = [Type::int(), Type::string(), Type::any()];
    assert_eq!(unify_all(&types), None);
}
