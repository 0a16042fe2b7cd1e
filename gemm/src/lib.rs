//! Tiling selection for the reshaped-only-RHS GEMM kernel on Mali Bifrost GPUs.
//!
//! Given a problem `(m, n, k, b, data_type)` and the GPU it runs on, pick the block sizes of
//! the LHS and reshaped RHS matrices the kernel should use.
//!
//! - [`reshaped_only_rhs`]: per-target heuristic tables and the dispatcher.
//! - [`builder`]: turns raw block sizes into clamped [`GemmLhsMatrixInfo`] / [`GemmRhsMatrixInfo`].
//! - [`shape`] and [`image2d`]: reshaped RHS layout and whether it can be read through an image.
//! - [`probe`]: the hardware capabilities the heuristics consult.

pub mod builder;
pub mod config;
pub mod error;
pub mod image2d;
pub mod probe;
pub mod reshaped_only_rhs;
pub mod shape;
pub mod strategy;
pub mod types;


pub use builder::{BlockConfig, configure_lhs_rhs_info};
pub use config::ReshapedOnlyRhsConfig;
pub use error::{Error, Result};
pub use image2d::{Image2dError, validate_image2d_support_on_rhs};
pub use probe::CapabilityProbe;
pub use reshaped_only_rhs::{BifrostReshapedOnlyRhs, TargetFamily, configure};
pub use shape::{TensorInfo, TensorShape, compute_rhs_reshaped_shape};
pub use strategy::GemmKernelConfiguration;
pub use types::{GemmLhsMatrixInfo, GemmProblem, GemmRhsMatrixInfo, GemmTiling};
