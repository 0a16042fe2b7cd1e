//! Generic Bifrost heuristics (G71, G72, G52 and any target without a dedicated table).

use super::Heuristics;
use crate::builder::{BlockConfig, configure_lhs_rhs_info};
use crate::types::{GemmProblem, GemmTiling};

/// Above this `n`, vector-by-matrix products switch to wider n0 blocks.
const WIDE_N_THRESHOLD: u32 = 2048;

pub fn float32(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    floating_point(problem)
}

pub fn float16(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    floating_point(problem)
}

fn floating_point(problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;

    let config = if problem.is_vector_by_matrix() {
        if n > WIDE_N_THRESHOLD {
            BlockConfig::new(1, 4, 4, 1, (n / 4).max(1))
        } else {
            BlockConfig::new(1, 2, 8, 1, (n / 2).max(1))
        }
    } else {
        BlockConfig::new(4, 4, 4, 1, 4)
    };

    configure_lhs_rhs_info(m, n, &config)
}

pub fn quantized8(heuristics: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;

    let config = if heuristics.probe.dot8_supported() {
        if problem.is_vector_by_matrix() {
            BlockConfig::new(1, 2, 16, 1, (n / 2).max(1))
        } else {
            BlockConfig::new(4, 4, 16, 1, (n / 4).max(1))
        }
    } else {
        let h0 = (n / 2).clamp(1, 128);
        if problem.is_vector_by_matrix() {
            BlockConfig::new(1, 2, 4, 1, h0)
        } else {
            BlockConfig::new(4, 2, 16, 1, h0)
        }
    };

    configure_lhs_rhs_info(m, n, &config)
}
