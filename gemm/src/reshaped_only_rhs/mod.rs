//! Tiling heuristics for the reshaped-only-RHS GEMM kernel on Bifrost.
//!
//! Only the RHS is reshaped before the kernel runs; the LHS is read in its original layout.
//! Heuristics are tuned per target family ([`TargetFamily`]) and per element type:
//!
//! - **G76** and **G51** have dedicated tables.
//! - Every other target falls back to the generic **G7x** table.
//!
//! Every heuristic first splits vector-by-matrix problems (`m == 1`) from matrix-by-matrix
//! ones. The G7x 8-bit heuristic additionally depends on dot-product support, and the G76 f32
//! heuristic chooses between an RHS kept in a buffer and one exported to a 2D image.
//!
//! # Usage
//!
//! ```ignore
//! use malitile_gemm::{BifrostReshapedOnlyRhs, GemmKernelConfiguration, GemmProblem};
//!
//! let device = malitile_device::bind(DeviceInfo::builder().name("Mali-G76").build());
//! let strategy = BifrostReshapedOnlyRhs::for_device(device);
//! let (lhs, rhs) = strategy.configure(&GemmProblem::new(64, 1024, 256, 1, DataType::Float32))?;
//! ```

pub mod g51;
pub mod g76;
pub mod g7x;
pub mod table;

use std::sync::Arc;

use malitile_device::{DeviceInfo, GpuTarget};
use tracing::debug;

use crate::config::ReshapedOnlyRhsConfig;
use crate::error::{Result, UnsupportedDataTypeSnafu};
use crate::probe::CapabilityProbe;
use crate::strategy::GemmKernelConfiguration;
use crate::types::{GemmProblem, GemmTiling};

pub use table::{G7X_TABLE, G51_TABLE, G76_TABLE, HeuristicFn, HeuristicTable, TargetFamily};

/// What a heuristic may consult besides the problem itself.
pub struct Heuristics<'a> {
    pub probe: &'a dyn CapabilityProbe,
    pub config: &'a ReshapedOnlyRhsConfig,
}

/// Select the tiling for `problem` on `target`.
///
/// Resolves the target family, looks up the element type in that family's table and runs the
/// heuristic found there.
#[tracing::instrument(skip_all, fields(
    gpu = %target,
    m = problem.m,
    n = problem.n,
    k = problem.k,
    b = problem.b,
    data_type = %problem.data_type,
))]
pub fn configure(
    problem: &GemmProblem,
    target: GpuTarget,
    probe: &dyn CapabilityProbe,
    config: &ReshapedOnlyRhsConfig,
) -> Result<GemmTiling> {
    let family = TargetFamily::of(target);
    let Some(heuristic) = family.table().lookup(problem.data_type) else {
        return UnsupportedDataTypeSnafu { data_type: problem.data_type, target }.fail();
    };

    let (lhs, rhs) = heuristic(&Heuristics { probe, config }, problem);
    debug!(%family, ?lhs, ?rhs, "selected reshaped-only-RHS tiling");

    Ok((lhs, rhs))
}

/// Reshaped-only-RHS strategy for Bifrost GPUs.
#[derive(Debug, Clone)]
pub struct BifrostReshapedOnlyRhs<P> {
    target: GpuTarget,
    probe: P,
    config: ReshapedOnlyRhsConfig,
}

impl<P: CapabilityProbe> BifrostReshapedOnlyRhs<P> {
    pub fn new(target: GpuTarget, probe: P) -> Self {
        Self::with_config(target, probe, ReshapedOnlyRhsConfig::default())
    }

    /// A `config.target_override` replaces `target`.
    pub fn with_config(target: GpuTarget, probe: P, config: ReshapedOnlyRhsConfig) -> Self {
        let target = config.target_override.unwrap_or(target);
        Self { target, probe, config }
    }

    pub fn config(&self) -> &ReshapedOnlyRhsConfig {
        &self.config
    }

    pub fn family(&self) -> TargetFamily {
        TargetFamily::of(self.target)
    }
}

impl BifrostReshapedOnlyRhs<Arc<DeviceInfo>> {
    /// Strategy for a bound device, configured from the environment.
    pub fn for_device(device: Arc<DeviceInfo>) -> Self {
        let target = device.target();
        Self::with_config(target, device, ReshapedOnlyRhsConfig::from_env())
    }
}

impl<P: CapabilityProbe> GemmKernelConfiguration for BifrostReshapedOnlyRhs<P> {
    fn target(&self) -> GpuTarget {
        self.target
    }

    fn configure(&self, problem: &GemmProblem) -> Result<GemmTiling> {
        configure(problem, self.target, &self.probe, &self.config)
    }
}
