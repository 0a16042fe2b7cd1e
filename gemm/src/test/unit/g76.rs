use malitile_device::{DeviceInfo, GpuTarget};
use malitile_dtype::DataType;
use test_case::test_case;

use crate::test::helpers::{StubProbe, image_capable_g76, lhs_blocks, problem, rhs_blocks, tile};
use crate::*;

fn f32_problem(m: u32, n: u32) -> GemmProblem {
    problem(m, n, 256, 1, DataType::Float32)
}

#[test_case(8192 => (4, 8, 2048) ; "quarter of n at threshold")]
#[test_case(8191 => (2, 8, 4095) ; "quarter of n below threshold")]
fn test_vector_by_matrix_always_buffer(n: u32) -> (u32, u32, u32) {
    let tiling = tile(GpuTarget::G76, StubProbe::ALL, &f32_problem(1, n));
    assert!(!tiling.1.export_to_image);
    assert!(tiling.1.transpose);
    rhs_blocks(&tiling)
}

#[test]
fn test_big_workload_prefers_image() {
    let (lhs, rhs) = tile(GpuTarget::G76, StubProbe::ALL, &f32_problem(8, 4096));
    assert_eq!((lhs.m0, lhs.k0, lhs.v0), (4, 4, 1));
    assert_eq!(rhs, GemmRhsMatrixInfo { n0: 4, k0: 4, h0: 16, interleave: true, transpose: false, export_to_image: true });
}

#[test]
fn test_big_workload_without_image_support() {
    let (lhs, rhs) = tile(GpuTarget::G76, StubProbe::NONE, &f32_problem(8, 4096));
    assert_eq!((lhs.m0, lhs.k0, lhs.v0), (4, 4, 1));
    assert_eq!(rhs, GemmRhsMatrixInfo { n0: 4, k0: 4, h0: 16, interleave: true, transpose: true, export_to_image: false });
}

#[test]
fn test_small_workload_wide_output_uses_transposed_image() {
    let tiling = tile(GpuTarget::G76, StubProbe::ALL, &f32_problem(2, 256));
    assert_eq!(lhs_blocks(&tiling), (2, 8, 1));
    assert_eq!(rhs_blocks(&tiling), (4, 8, 16));
    assert!(tiling.1.export_to_image);
    assert!(tiling.1.transpose);
}

#[test]
fn test_small_workload_narrow_output_stays_in_buffer() {
    let tiling = tile(GpuTarget::G76, StubProbe::ALL, &f32_problem(4, 64));
    assert_eq!(lhs_blocks(&tiling), (2, 8, 1));
    assert_eq!(rhs_blocks(&tiling), (4, 8, 16));
    assert!(!tiling.1.export_to_image);
}

#[test_case(512 => true ; "workload at threshold")]
#[test_case(511 => false ; "workload below threshold")]
fn test_narrow_output_workload_boundary(m: u32) -> bool {
    tile(GpuTarget::G76, StubProbe::ALL, &f32_problem(m, 64)).1.export_to_image
}

#[test]
fn test_batches_count_towards_workload() {
    let tiling = tile(GpuTarget::G76, StubProbe::ALL, &problem(128, 64, 256, 4, DataType::Float32));
    assert!(tiling.1.export_to_image);
    assert!(!tiling.1.transpose);
}

#[test]
fn test_image_disabled_by_config() {
    let config = ReshapedOnlyRhsConfig::builder().allow_image2d(false).build();
    let (_, rhs) = configure(&f32_problem(8, 4096), GpuTarget::G76, &StubProbe::ALL, &config).unwrap();
    assert!(!rhs.export_to_image);
    assert!(rhs.transpose);
}

#[test]
fn test_image_with_device_probe() {
    let strategy = BifrostReshapedOnlyRhs::new(GpuTarget::G76, image_capable_g76());
    let (_, rhs) = strategy.configure(&f32_problem(8, 4096)).unwrap();
    assert!(rhs.export_to_image);

    let strategy = BifrostReshapedOnlyRhs::new(GpuTarget::G76, DeviceInfo::builder().name("Mali-G76").build());
    let (_, rhs) = strategy.configure(&f32_problem(8, 4096)).unwrap();
    assert!(!rhs.export_to_image);
}

#[test_case(1, 100 => (2, 8, 50) ; "vector by matrix")]
#[test_case(64, 100 => (4, 4, 2) ; "matrix by matrix")]
fn test_f16(m: u32, n: u32) -> (u32, u32, u32) {
    rhs_blocks(&tile(GpuTarget::G76, StubProbe::ALL, &problem(m, n, 64, 1, DataType::Float16)))
}

#[test_case(1, 100 => (2, 16, 50) ; "vector by matrix")]
#[test_case(64, 100 => (4, 16, 2) ; "matrix by matrix")]
fn test_quantized(m: u32, n: u32) -> (u32, u32, u32) {
    rhs_blocks(&tile(GpuTarget::G76, StubProbe::NONE, &problem(m, n, 64, 1, DataType::QAsymm8)))
}
