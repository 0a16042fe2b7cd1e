//! Assembly of the LHS/RHS tiling records from raw block sizes.

use crate::types::{GemmLhsMatrixInfo, GemmRhsMatrixInfo, GemmTiling};

/// Raw block sizes and layout flags chosen by a heuristic.
///
/// The flag defaults are the layout every Bifrost reshaped-only-RHS cell uses: LHS read as-is,
/// RHS interleaved and transposed, RHS kept in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bon::Builder)]
pub struct BlockConfig {
    pub m0: u32,
    pub n0: u32,
    pub k0: u32,
    pub v0: u32,
    pub h0: u32,
    #[builder(default = false)]
    pub lhs_interleave: bool,
    #[builder(default = true)]
    pub rhs_interleave: bool,
    #[builder(default = false)]
    pub lhs_transpose: bool,
    #[builder(default = true)]
    pub rhs_transpose: bool,
    #[builder(default = false)]
    pub export_to_image: bool,
}

impl BlockConfig {
    /// Block sizes with the default layout flags.
    pub const fn new(m0: u32, n0: u32, k0: u32, v0: u32, h0: u32) -> Self {
        Self {
            m0,
            n0,
            k0,
            v0,
            h0,
            lhs_interleave: false,
            rhs_interleave: true,
            lhs_transpose: false,
            rhs_transpose: true,
            export_to_image: false,
        }
    }
}

/// Build the tiling records for an `m x n` output from `config`.
///
/// Block sizes are clamped to the problem: `m0 <= m`, `n0 <= n`, and an interleave factor that
/// would not fit a single interleaved group collapses to 1. Every numeric field of the result
/// is at least 1, including for the degenerate `m == 0` or `n == 0` shapes.
pub fn configure_lhs_rhs_info(m: u32, n: u32, config: &BlockConfig) -> GemmTiling {
    let m0 = m.min(config.m0).max(1);
    let v0 = config.v0.max(1);
    let lhs = GemmLhsMatrixInfo {
        m0,
        k0: config.k0.max(1),
        v0: if fits(m, m0, v0) { v0 } else { 1 },
        interleave: config.lhs_interleave,
        transpose: config.lhs_transpose,
    };

    let n0 = n.min(config.n0).max(1);
    let h0 = config.h0.max(1);
    let rhs = GemmRhsMatrixInfo {
        n0,
        k0: config.k0.max(1),
        h0: if fits(n, n0, h0) { h0 } else { 1 },
        interleave: config.rhs_interleave,
        transpose: config.rhs_transpose,
        export_to_image: config.export_to_image,
    };

    (lhs, rhs)
}

/// Whether at least one group of `interleave` blocks of `block` elements fits in `size`.
fn fits(size: u32, block: u32, interleave: u32) -> bool {
    u64::from(size) / (u64::from(block) * u64::from(interleave)) != 0
}
