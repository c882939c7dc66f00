//! Partial knowledge of tensor rank and extents.
//!
//! A [`VaryingShape`] is the shape half of the tensor lattice:
//! ```text
//! (*)            unknown rank            (top)
//!  └── (*, *)    rank 2, extents unknown
//!       └── (2, *)
//!            └── (2, 3)                  (fully known)
//! ```
//! Merging walks up this order until both operands agree.

use serde::{Deserialize, Serialize};

use super::error::TypeError;

/// Merge two optional facts: a value survives only if both sides know it and agree.
///
/// `None` means "unknown", so merging anything with an unknown fact yields unknown.
pub fn merge_facts<T: PartialEq + Clone>(a: &Option<T>, b: &Option<T>) -> Option<T> {
    if a == b {
        a.clone()
    } else {
        None
    }
}

/// How to treat two known ranks that differ during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeMergePolicy {
    /// Degrade to unknown rank.
    #[default]
    Lenient,
    /// Report [`TypeError::ShapeRankMismatch`].
    Strict,
}

/// An optional ordered sequence of optional extents.
///
/// `dims == None` is unknown rank; a `None` entry is a known dimension with an
/// unknown extent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VaryingShape {
    dims: Option<Vec<Option<usize>>>,
}

impl VaryingShape {
    /// Fully unknown: rank and extents.
    pub fn unknown() -> Self {
        Self { dims: None }
    }

    /// Known rank, every extent unknown.
    pub fn with_rank(rank: usize) -> Self {
        Self {
            dims: Some(vec![None; rank]),
        }
    }

    pub fn new(dims: Vec<Option<usize>>) -> Self {
        Self { dims: Some(dims) }
    }

    /// Fully known shape.
    pub fn from_sizes(sizes: &[usize]) -> Self {
        Self::new(sizes.iter().copied().map(Some).collect())
    }

    /// Row-major strides of a fully known contiguous shape.
    ///
    /// A stride that does not fit in `usize` is unknown, as is every stride
    /// outside it.
    pub fn contiguous_strides(sizes: &[usize]) -> Self {
        let mut strides = vec![None; sizes.len()];
        let mut stride = Some(1usize);
        for (slot, size) in strides.iter_mut().zip(sizes.iter()).rev() {
            *slot = stride;
            stride = stride.and_then(|s| s.checked_mul((*size).max(1)));
        }
        Self::new(strides)
    }

    pub fn rank(&self) -> Option<usize> {
        self.dims.as_ref().map(Vec::len)
    }

    pub fn dims(&self) -> Option<&[Option<usize>]> {
        self.dims.as_deref()
    }

    /// Extent of dimension `index`; `None` when rank or extent is unknown.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.as_ref()?.get(index).copied().flatten()
    }

    /// Rank and every extent known.
    pub fn is_complete(&self) -> bool {
        self.dims
            .as_ref()
            .is_some_and(|dims| dims.iter().all(Option::is_some))
    }

    /// Concrete sizes when the shape is complete.
    pub fn concrete_sizes(&self) -> Option<Vec<usize>> {
        self.dims.as_ref()?.iter().copied().collect()
    }

    /// Least upper bound of two shapes.
    ///
    /// Unknown rank on either side, or two different ranks, yields unknown rank.
    pub fn merge(&self, other: &VaryingShape) -> VaryingShape {
        match (&self.dims, &other.dims) {
            (Some(lhs), Some(rhs)) if lhs.len() == rhs.len() => VaryingShape::new(
                lhs.iter()
                    .zip(rhs.iter())
                    .map(|(a, b)| merge_facts(a, b))
                    .collect(),
            ),
            _ => VaryingShape::unknown(),
        }
    }

    /// [`merge`](Self::merge) with an explicit policy for mismatched known ranks.
    pub fn merge_with(
        &self,
        other: &VaryingShape,
        policy: ShapeMergePolicy,
    ) -> Result<VaryingShape, TypeError> {
        if policy == ShapeMergePolicy::Strict {
            if let (Some(left), Some(right)) = (self.rank(), other.rank()) {
                if left != right {
                    tracing::debug!(left, right, "strict shape merge rejected");
                    return Err(TypeError::ShapeRankMismatch { left, right });
                }
            }
        }
        Ok(self.merge(other))
    }
}

impl From<Vec<Option<usize>>> for VaryingShape {
    fn from(dims: Vec<Option<usize>>) -> Self {
        Self::new(dims)
    }
}

impl std::fmt::Display for VaryingShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(dims) = &self.dims else {
            return f.write_str("(*)");
        };
        f.write_str("(")?;
        for (i, dim) in dims.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match dim {
                Some(extent) => write!(f, "{}", extent)?,
                None => f.write_str("*")?,
            }
        }
        f.write_str(")")
    }
}
