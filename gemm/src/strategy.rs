//! Kernel configuration strategies.
//!
//! Each GEMM kernel family (reshaped LHS and RHS, reshaped RHS only, native) has one strategy
//! per GPU architecture. The caller picks the strategy for its kernel and device up front and
//! then asks it for tiling parameters per problem.

use malitile_device::GpuTarget;
use malitile_dtype::DataType;

use crate::error::Result;
use crate::types::{GemmProblem, GemmTiling};

/// Chooses the tiling of one GEMM kernel family for one GPU target.
pub trait GemmKernelConfiguration {
    /// Target the heuristics are tuned for.
    fn target(&self) -> GpuTarget;

    /// Tiling for `problem`.
    ///
    /// Fails with [`crate::Error::UnsupportedDataType`] if the element type has no heuristic on
    /// this target. That failure is a configuration error and must not be retried with another
    /// type's heuristics.
    fn configure(&self, problem: &GemmProblem) -> Result<GemmTiling>;

    /// Convenience form of [`configure`](Self::configure) taking the problem dimensions directly.
    fn configure_dims(&self, m: u32, n: u32, k: u32, b: u32, data_type: DataType) -> Result<GemmTiling> {
        self.configure(&GemmProblem::new(m, n, k, b, data_type))
    }
}
