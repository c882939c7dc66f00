//! Refined tensor types and their merge.

use serde::{Deserialize, Serialize};

use super::error::TypeError;
use super::kind::{Device, ScalarType};
use super::shape::{merge_facts, ShapeMergePolicy, VaryingShape};

/// Facts known about a tensor value.
///
/// Every fact is independently optional; an absent fact is a weaker type,
/// never an error. The default value knows nothing and is the generic Tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TensorType {
    #[serde(default)]
    scalar_type: Option<ScalarType>,
    #[serde(default)]
    device: Option<Device>,
    #[serde(default)]
    sizes: VaryingShape,
    #[serde(default)]
    strides: VaryingShape,
    #[serde(default)]
    requires_grad: Option<bool>,
    #[serde(default)]
    undefined: Option<bool>,
}

impl TensorType {
    /// The generic tensor: nothing known.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn new(
        scalar_type: Option<ScalarType>,
        device: Option<Device>,
        sizes: VaryingShape,
        strides: VaryingShape,
        requires_grad: Option<bool>,
        undefined: Option<bool>,
    ) -> Self {
        Self {
            scalar_type,
            device,
            sizes,
            strides,
            requires_grad,
            undefined,
        }
    }

    /// A defined, contiguous tensor with fully known sizes.
    pub fn from_sizes(scalar_type: ScalarType, device: Device, sizes: &[usize]) -> Self {
        Self {
            scalar_type: Some(scalar_type),
            device: Some(device),
            sizes: VaryingShape::from_sizes(sizes),
            strides: VaryingShape::contiguous_strides(sizes),
            requires_grad: None,
            undefined: Some(false),
        }
    }

    pub fn with_scalar_type(mut self, scalar_type: ScalarType) -> Self {
        self.scalar_type = Some(scalar_type);
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    pub fn with_sizes(mut self, sizes: VaryingShape) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_strides(mut self, strides: VaryingShape) -> Self {
        self.strides = strides;
        self
    }

    pub fn with_requires_grad(mut self, requires_grad: bool) -> Self {
        self.requires_grad = Some(requires_grad);
        self
    }

    pub fn with_undefined(mut self, undefined: bool) -> Self {
        self.undefined = Some(undefined);
        self
    }

    pub fn scalar_type(&self) -> Option<ScalarType> {
        self.scalar_type
    }

    pub fn device(&self) -> Option<Device> {
        self.device
    }

    pub fn sizes(&self) -> &VaryingShape {
        &self.sizes
    }

    pub fn strides(&self) -> &VaryingShape {
        &self.strides
    }

    pub fn requires_grad(&self) -> Option<bool> {
        self.requires_grad
    }

    pub fn undefined(&self) -> Option<bool> {
        self.undefined
    }

    /// Known rank, if any.
    pub fn dim(&self) -> Option<usize> {
        self.sizes.rank()
    }

    /// Every fact known, sizes and strides complete.
    pub fn is_complete(&self) -> bool {
        self.scalar_type.is_some()
            && self.device.is_some()
            && self.sizes.is_complete()
            && self.strides.is_complete()
    }

    /// Least upper bound under the tensor subtyping rule.
    pub fn merge(&self, other: &TensorType) -> TensorType {
        TensorType {
            scalar_type: merge_facts(&self.scalar_type, &other.scalar_type),
            device: merge_facts(&self.device, &other.device),
            sizes: self.sizes.merge(&other.sizes),
            strides: self.strides.merge(&other.strides),
            requires_grad: merge_facts(&self.requires_grad, &other.requires_grad),
            undefined: merge_facts(&self.undefined, &other.undefined),
        }
    }

    /// [`merge`](Self::merge) applying `policy` to both shapes.
    pub fn merge_with(
        &self,
        other: &TensorType,
        policy: ShapeMergePolicy,
    ) -> Result<TensorType, TypeError> {
        Ok(TensorType {
            sizes: self.sizes.merge_with(&other.sizes, policy)?,
            strides: self.strides.merge_with(&other.strides, policy)?,
            ..self.merge(other)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::kind::DeviceKind;

    fn float_2x3() -> TensorType {
        TensorType::from_sizes(ScalarType::Float, Device::cpu(), &[2, 3])
    }

    #[test]
    fn test_unknown_is_default() {
        let t = TensorType::unknown();
        assert_eq!(t.scalar_type(), None);
        assert_eq!(t.device(), None);
        assert_eq!(t.sizes(), &VaryingShape::unknown());
        assert_eq!(t.dim(), None);
        assert!(!t.is_complete());
    }

    #[test]
    fn test_from_sizes_is_complete() {
        let t = float_2x3();
        assert!(t.is_complete());
        assert_eq!(t.dim(), Some(2));
        assert_eq!(t.strides(), &VaryingShape::from_sizes(&[3, 1]));
        assert_eq!(t.undefined(), Some(false));
    }

    #[test]
    fn test_from_huge_sizes_keeps_sizes_but_not_strides() {
        let huge = 1usize << 40;
        let t = TensorType::from_sizes(ScalarType::Float, Device::cpu(), &[1, huge, huge]);
        assert_eq!(t.sizes(), &VaryingShape::from_sizes(&[1, huge, huge]));
        assert_eq!(t.strides().dim(0), None);
        assert_eq!(t.strides().dim(2), Some(1));
        assert!(!t.is_complete());
    }

    #[test]
    fn test_merge_keeps_agreeing_facts() {
        let a = float_2x3().with_requires_grad(true);
        let b = TensorType::from_sizes(ScalarType::Float, Device::cuda(0), &[2, 5])
            .with_requires_grad(true);
        let merged = a.merge(&b);
        assert_eq!(merged.scalar_type(), Some(ScalarType::Float));
        assert_eq!(merged.device(), None);
        assert_eq!(merged.sizes(), &VaryingShape::new(vec![Some(2), None]));
        assert_eq!(merged.strides(), &VaryingShape::new(vec![None, Some(1)]));
        assert_eq!(merged.requires_grad(), Some(true));
        assert_eq!(merged.undefined(), Some(false));
    }

    #[test]
    fn test_merge_commutative_and_idempotent() {
        let a = float_2x3();
        let b = TensorType::unknown()
            .with_scalar_type(ScalarType::Double)
            .with_device(Device::new(DeviceKind::Cuda, Some(1)))
            .with_sizes(VaryingShape::with_rank(2));
        assert_eq!(a.merge(&b), b.merge(&a));
        assert_eq!(a.merge(&a), a);
        assert_eq!(b.merge(&b), b);
    }

    #[test]
    fn test_merge_with_unknown_is_unknown() {
        assert_eq!(float_2x3().merge(&TensorType::unknown()), TensorType::unknown());
    }

    #[test]
    fn test_merge_with_strict_policy() {
        let a = float_2x3();
        let b = TensorType::from_sizes(ScalarType::Float, Device::cpu(), &[6]);
        assert!(a.merge_with(&b, ShapeMergePolicy::Strict).is_err());
        assert_eq!(
            a.merge_with(&b, ShapeMergePolicy::Lenient),
            Ok(a.merge(&b))
        );
    }

    #[test]
    fn test_serialized_facts() {
        let json = serde_json::to_value(float_2x3()).unwrap();
        assert_eq!(json["scalar_type"], "Float");
        assert_eq!(json["device"]["kind"], "Cpu");
        assert_eq!(json["sizes"]["dims"], serde_json::json!([2, 3]));
        let back: TensorType = serde_json::from_value(json).unwrap();
        assert_eq!(back, float_2x3());
    }
}
