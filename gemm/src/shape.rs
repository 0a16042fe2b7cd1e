//! Tensor shapes and the layout of the reshaped RHS.

use malitile_dtype::DataType;
use smallvec::SmallVec;

use crate::types::GemmRhsMatrixInfo;

/// Maximum number of dimensions a tensor can have.
pub const MAX_DIMS: usize = 6;

/// Tensor dimensions, innermost first (dimension 0 is the row width).
///
/// Dimensions past the stored ones read as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TensorShape {
    dims: SmallVec<[usize; MAX_DIMS]>,
}

impl TensorShape {
    pub fn new(dims: &[usize]) -> Self {
        debug_assert!(dims.len() <= MAX_DIMS, "tensor shape has more than {MAX_DIMS} dimensions");
        Self { dims: SmallVec::from_slice(dims) }
    }

    pub fn dim(&self, index: usize) -> usize {
        self.dims.get(index).copied().unwrap_or(1)
    }

    /// Set dimension `index`, extending the shape with 1s if needed.
    pub fn set(&mut self, index: usize, value: usize) {
        if index >= self.dims.len() {
            self.dims.resize(index + 1, 1);
        }
        self.dims[index] = value;
    }

    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    pub fn total_size(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.dims
    }
}

impl<const N: usize> From<[usize; N]> for TensorShape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(&dims)
    }
}

/// Shape plus element type: enough to reason about a tensor without its data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorInfo {
    shape: TensorShape,
    data_type: DataType,
}

impl TensorInfo {
    pub fn new(shape: impl Into<TensorShape>, data_type: DataType) -> Self {
        Self { shape: shape.into(), data_type }
    }

    pub fn shape(&self) -> &TensorShape {
        &self.shape
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn element_size(&self) -> usize {
        self.data_type.bytes()
    }

    pub fn total_bytes(&self) -> usize {
        self.shape.total_size() * self.element_size()
    }
}

/// Shape of the RHS after it has been reshaped into `rhs` blocks.
///
/// The `[n, k, ...]` RHS is split into `n0 x k0` blocks; every `h0` horizontally adjacent blocks
/// are laid side by side in one output row. Outer (batch) dimensions are unchanged.
pub fn compute_rhs_reshaped_shape(rhs_shape: &TensorShape, rhs: &GemmRhsMatrixInfo) -> TensorShape {
    debug_assert!(rhs.n0 > 0 && rhs.k0 > 0 && rhs.h0 > 0, "zero block size in {rhs:?}");

    let n0 = rhs.n0 as usize;
    let k0 = rhs.k0 as usize;
    let h0 = rhs.h0 as usize;

    let num_horiz_blocks = rhs_shape.dim(0).div_ceil(n0);
    let num_vert_blocks = rhs_shape.dim(1).div_ceil(k0);

    let mut reshaped = rhs_shape.clone();
    reshaped.set(0, n0 * k0 * num_vert_blocks * h0);
    reshaped.set(1, num_horiz_blocks.div_ceil(h0));
    reshaped
}
