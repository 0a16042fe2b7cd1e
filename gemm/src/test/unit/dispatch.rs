use enumset::EnumSet;
use malitile_device::{DeviceInfo, GpuTarget};
use malitile_dtype::DataType;
use test_case::test_case;

use crate::reshaped_only_rhs::TargetFamily;
use crate::test::helpers::{StubProbe, problem, rhs_blocks, tile};
use crate::*;

#[test_case(GpuTarget::G76 => TargetFamily::G76 ; "g76")]
#[test_case(GpuTarget::G51 => TargetFamily::G51 ; "g51")]
#[test_case(GpuTarget::G51Big => TargetFamily::G7x ; "g51 big")]
#[test_case(GpuTarget::G51Lit => TargetFamily::G7x ; "g51 lit")]
#[test_case(GpuTarget::G71 => TargetFamily::G7x ; "g71")]
#[test_case(GpuTarget::Bifrost => TargetFamily::G7x ; "bifrost")]
#[test_case(GpuTarget::T800 => TargetFamily::G7x ; "midgard part")]
fn test_target_family(target: GpuTarget) -> TargetFamily {
    TargetFamily::of(target)
}

#[test_case(TargetFamily::G76 ; "g76")]
#[test_case(TargetFamily::G51 ; "g51")]
#[test_case(TargetFamily::G7x ; "g7x")]
fn test_tables_cover_same_types(family: TargetFamily) {
    let table = family.table();
    assert_eq!(table.family, family);
    assert_eq!(table.supported(), DataType::Float32 | DataType::Float16 | DataType::QUANTIZED_8BIT);
}

#[test_case(GpuTarget::G76, DataType::Int32 ; "g76 s32")]
#[test_case(GpuTarget::G51, DataType::UInt8 ; "g51 u8")]
#[test_case(GpuTarget::G72, DataType::Float64 ; "g72 f64")]
#[test_case(GpuTarget::G51Big, DataType::BFloat16 ; "g51 big bf16")]
#[test_case(GpuTarget::G52, DataType::QSymm16 ; "g52 qsymm16")]
fn test_unsupported_data_type(target: GpuTarget, data_type: DataType) {
    let result = configure(&problem(16, 16, 16, 1, data_type), target, &StubProbe::ALL, &ReshapedOnlyRhsConfig::default());
    assert_eq!(result, Err(Error::UnsupportedDataType { data_type, target }));
}

#[test]
fn test_unsupported_data_type_message() {
    let err = Error::UnsupportedDataType { data_type: DataType::Int32, target: GpuTarget::G76 };
    assert_eq!(err.to_string(), "data type s32 is not supported by the reshaped-only-RHS configuration on G76");
}

#[test]
fn test_g51_variants_use_generic_table() {
    let dedicated = tile(GpuTarget::G51, StubProbe::NONE, &problem(1, 1279, 64, 1, DataType::Float32));
    let generic = tile(GpuTarget::G51Big, StubProbe::NONE, &problem(1, 1279, 64, 1, DataType::Float32));
    assert_eq!(rhs_blocks(&dedicated), (2, 4, 639));
    assert_eq!(rhs_blocks(&generic), (2, 8, 639));
}

#[test]
fn test_k_ignored() {
    let a = tile(GpuTarget::G71, StubProbe::NONE, &problem(64, 1024, 1, 1, DataType::Float16));
    let b = tile(GpuTarget::G71, StubProbe::NONE, &problem(64, 1024, 4096, 1, DataType::Float16));
    assert_eq!(a, b);
}

#[test]
fn test_strategy_matches_dispatcher() {
    let strategy = BifrostReshapedOnlyRhs::new(GpuTarget::G72, StubProbe::NONE);
    let problem = problem(32, 512, 128, 2, DataType::QAsymm8);

    assert_eq!(strategy.target(), GpuTarget::G72);
    assert_eq!(strategy.family(), TargetFamily::G7x);
    assert_eq!(strategy.configure(&problem), Ok(tile(GpuTarget::G72, StubProbe::NONE, &problem)));
    assert_eq!(strategy.configure_dims(32, 512, 128, 2, DataType::QAsymm8), strategy.configure(&problem));
}

#[test]
fn test_target_override() {
    let config = ReshapedOnlyRhsConfig::builder().target_override(GpuTarget::G51).build();
    let strategy = BifrostReshapedOnlyRhs::with_config(GpuTarget::G71, StubProbe::NONE, config);

    assert_eq!(strategy.target(), GpuTarget::G51);
    assert_eq!(strategy.family(), TargetFamily::G51);

    let (_, rhs) = strategy.configure_dims(1, 1280, 64, 1, DataType::Float32).unwrap();
    assert_eq!((rhs.n0, rhs.k0, rhs.h0), (4, 4, 320));
}

#[test]
fn test_strategy_as_trait_object() {
    let strategies: Vec<Box<dyn GemmKernelConfiguration>> = vec![
        Box::new(BifrostReshapedOnlyRhs::new(GpuTarget::G76, StubProbe::NONE)),
        Box::new(BifrostReshapedOnlyRhs::new(GpuTarget::G51, StubProbe::NONE)),
    ];
    let supported: Vec<_> =
        strategies.iter().map(|s| s.configure_dims(4, 4, 4, 1, DataType::Float16).is_ok()).collect();
    assert_eq!(supported, vec![true, true]);
}

#[test]
fn test_for_bound_device() {
    let device = malitile_device::bind(DeviceInfo::builder().name("Mali-G76 gemm-dispatch-test").build());
    let strategy = BifrostReshapedOnlyRhs::for_device(device);
    let expected = strategy.config().target_override.unwrap_or(GpuTarget::G76);
    assert_eq!(strategy.target(), expected);
    assert!(strategy.configure_dims(64, 256, 64, 1, DataType::Float32).is_ok());
}

#[test]
fn test_quantized_set_shares_heuristic() {
    let types: EnumSet<DataType> = DataType::QUANTIZED_8BIT;
    let tilings: Vec<_> = types.iter().map(|dt| tile(GpuTarget::G71, StubProbe::ALL, &problem(64, 300, 64, 1, dt))).collect();
    assert!(tilings.windows(2).all(|pair| pair[0] == pair[1]));
}
