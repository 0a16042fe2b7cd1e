//! Mali-G76 heuristics.
//!
//! The f32 heuristic is the only one that can read the reshaped RHS through a 2D image. It
//! computes a buffer candidate and an image candidate and keeps the image one only when the
//! problem is large enough and the device can actually create the image.

use malitile_dtype::DataType;
use tracing::trace;

use super::Heuristics;
use crate::builder::{BlockConfig, configure_lhs_rhs_info};
use crate::shape::{TensorInfo, compute_rhs_reshaped_shape};
use crate::types::{GemmProblem, GemmTiling};

/// Workload (`m * n * b / 16`) from which the large-block configurations pay off.
const BIG_WORKLOAD: u64 = 2048;

/// Below [`BIG_WORKLOAD`], narrower outputs stay in a buffer.
const MIN_IMAGE_N: u32 = 128;

pub fn float32(heuristics: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, k, b, .. } = *problem;
    let big = problem.workload() >= BIG_WORKLOAD;
    let h0 = (n / 4).clamp(1, 16);

    let buffer = if problem.is_vector_by_matrix() {
        if n / 4 >= 2048 {
            BlockConfig::new(1, 4, 8, 1, (n / 4).max(1))
        } else {
            BlockConfig::new(1, 2, 8, 1, (n / 2).max(1))
        }
    } else if big {
        BlockConfig::new(4, 4, 4, 1, h0)
    } else {
        BlockConfig::new(2, 4, 8, 1, h0)
    };
    let buffer = configure_lhs_rhs_info(m, n, &buffer);

    let image = if big {
        BlockConfig::builder().m0(4).n0(4).k0(4).v0(1).h0(h0).rhs_transpose(false).export_to_image(true).build()
    } else {
        BlockConfig::builder().m0(2).n0(4).k0(8).v0(1).h0(h0).export_to_image(true).build()
    };
    let image = configure_lhs_rhs_info(m, n, &image);

    let rhs = TensorInfo::new([n as usize, k as usize, b as usize], DataType::Float32);
    let reshaped = TensorInfo::new(compute_rhs_reshaped_shape(rhs.shape(), &image.1), DataType::Float32);

    let wants_image = heuristics.config.allow_image2d
        && !(problem.is_vector_by_matrix() || (!big && n < MIN_IMAGE_N));
    let use_image = wants_image && heuristics.probe.image2d_supported(&reshaped, &image.1);

    trace!(big, wants_image, use_image, ?buffer, ?image, "G76 f32 candidates");

    if use_image { image } else { buffer }
}

pub fn float16(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;

    let config = if problem.is_vector_by_matrix() {
        BlockConfig::new(1, 2, 8, 1, (n / 2).max(1))
    } else {
        BlockConfig::new(4, 4, 4, 1, 2)
    };

    configure_lhs_rhs_info(m, n, &config)
}

pub fn quantized8(_: &Heuristics<'_>, problem: &GemmProblem) -> GemmTiling {
    let GemmProblem { m, n, .. } = *problem;

    let config = if problem.is_vector_by_matrix() {
        BlockConfig::new(1, 2, 16, 1, (n / 2).max(1))
    } else {
        BlockConfig::new(4, 4, 16, 1, 2)
    };

    configure_lhs_rhs_info(m, n, &config)
}
