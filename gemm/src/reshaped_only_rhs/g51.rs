//! Mali-G51 heuristics.

use super::Heuristics;
use crate::builder::{BlockConfig, configure_lhs_rhs_info};
use crate::types::{GemmProblem, GemmTiling};

pub fn float32(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    floating_point(problem, 4)
}

pub fn float16(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    floating_point(problem, 8)
}

/// f32 and f16 differ only in the k0 of the vector-by-matrix branch.
fn floating_point(problem: &GemmProblem, vector_k0: u32) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;

    let config = if problem.is_vector_by_matrix() {
        let n0 = if n < 1280 { 2 } else { 4 };
        BlockConfig::new(1, n0, vector_k0, 1, (n / n0).max(1))
    } else {
        BlockConfig::new(4, 4, 4, 1, 2)
    };

    configure_lhs_rhs_info(m, n, &config)
}

pub fn quantized8(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;
    let h0 = (n / 2).max(1);

    let config = if problem.is_vector_by_matrix() {
        BlockConfig::new(1, 4, 16, 1, h0)
    } else {
        BlockConfig::new(4, 2, 16, 1, h0)
    };

    configure_lhs_rhs_info(m, n, &config)
}
