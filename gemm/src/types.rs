//! Problem descriptor and the tiling records handed to the GEMM kernel.

use malitile_dtype::DataType;

/// Shape and element type of a (possibly batched) matrix multiplication.
///
/// `m` rows of the LHS, `n` columns of the RHS, `k` the reduction depth, `b` the batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GemmProblem {
    pub m: u32,
    pub n: u32,
    pub k: u32,
    pub b: u32,
    pub data_type: DataType,
}

impl GemmProblem {
    pub const fn new(m: u32, n: u32, k: u32, b: u32, data_type: DataType) -> Self {
        Self { m, n, k, b, data_type }
    }

    /// A single LHS row: the kernel degenerates to a vector-by-matrix product.
    pub const fn is_vector_by_matrix(&self) -> bool {
        self.m == 1
    }

    /// Coarse cost proxy, `(m * n * b) / 16`.
    pub const fn workload(&self) -> u64 {
        (self.m as u64 * self.n as u64 * self.b as u64) / 16
    }
}

/// Block layout of the LHS matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemmLhsMatrixInfo {
    /// Rows processed per work-item.
    pub m0: u32,
    /// Partial accumulations per inner-loop iteration.
    pub k0: u32,
    /// Number of m0 x k0 blocks interleaved vertically.
    pub v0: u32,
    pub interleave: bool,
    pub transpose: bool,
}

/// Block layout of the reshaped RHS matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemmRhsMatrixInfo {
    /// Columns processed per work-item.
    pub n0: u32,
    /// Partial accumulations per inner-loop iteration.
    pub k0: u32,
    /// Number of n0 x k0 blocks interleaved horizontally.
    pub h0: u32,
    pub interleave: bool,
    /// Each k0 x n0 block is stored transposed.
    pub transpose: bool,
    /// The reshaped RHS is read through an OpenCL 2D image instead of a buffer.
    pub export_to_image: bool,
}

/// The pair of tiling records consumed by the reshaped-only-RHS kernel.
pub type GemmTiling = (GemmLhsMatrixInfo, GemmRhsMatrixInfo);
