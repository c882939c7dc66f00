//! IR type lattice: type nodes, tensor facts, and subtyping.
//!
//! # Module Organization
//!
//! - `ir_type/`: the `Type` sum type, subtyping, display
//! - `kind.rs`: `Kind` tags, scalar kinds, devices
//! - `shape.rs`: `VaryingShape` and fact merging
//! - `tensor.rs`: `TensorType` and its merge
//! - `tuple.rs`: plain and named tuples
//! - `interface.rs`: method signatures, interfaces, interface builder
//! - `function.rs`: first-class function types
//! - `singletons.rs`: shared instances of stateless types
//! - `invariants.rs`: the no-`Any` rule for named aggregates
//! - `error.rs`: `TypeError` for malformed construction requests

mod error;
mod function;
mod interface;
mod invariants;
mod ir_type;
mod kind;
mod shape;
mod singletons;
mod tensor;
mod tuple;


pub use error::TypeError;
pub use function::FunctionType;
pub use interface::{Argument, FunctionSchema, InterfaceBuilder, InterfaceType};
pub use invariants::{check_no_any, contains_any};
pub use ir_type::{Type, TypeRef};
pub use kind::{Device, DeviceKind, Kind, ScalarType};
pub use shape::{merge_facts, ShapeMergePolicy, VaryingShape};
pub use singletons::primitive_singleton;
pub use tensor::TensorType;
pub use tuple::{TupleSchema, TupleType};
