use crate::{DEFAULT_IMAGE2D_MAX_SIZE, DeviceInfo, EXT_IMAGE2D_FROM_BUFFER, EXT_INTEGER_DOT_PRODUCT_INT8, GpuTarget};

#[test]
fn test_target_resolved_from_name() {
    let info = DeviceInfo::builder().name("Mali-G72").build();
    assert_eq!(info.target(), GpuTarget::G72);
    assert_eq!(info.image2d_max_width(), DEFAULT_IMAGE2D_MAX_SIZE);
    assert_eq!(info.image2d_max_height(), DEFAULT_IMAGE2D_MAX_SIZE);
    assert_eq!(info.image_pitch_alignment(), 0);
}

#[test]
fn test_explicit_target_wins() {
    let info = DeviceInfo::builder().name("Mali-G72").target(GpuTarget::G51).build();
    assert_eq!(info.target(), GpuTarget::G51);
}

#[test]
fn test_dot8_from_extension() {
    let info = DeviceInfo::builder()
        .name("Mali-G52")
        .extensions(vec![EXT_INTEGER_DOT_PRODUCT_INT8.to_string()])
        .build();
    assert!(info.dot8_supported());

    let info = DeviceInfo::builder().name("Mali-G52").build();
    assert!(!info.dot8_supported());
}

#[test]
fn test_dot8_g76_without_extension() {
    let info = DeviceInfo::builder().name("Mali-G76").build();
    assert!(info.dot8_supported());
}

#[test]
fn test_image2d_from_buffer() {
    let info = DeviceInfo::builder()
        .name("Mali-G76")
        .extensions(vec![EXT_IMAGE2D_FROM_BUFFER.to_string(), "cl_khr_fp16".to_string()])
        .image_pitch_alignment(64)
        .build();
    assert!(info.image2d_from_buffer_supported());
    assert!(info.supports_extension("cl_khr_fp16"));
    assert!(!info.supports_extension("cl_khr_fp64"));
    assert_eq!(info.image_pitch_alignment(), 64);
    assert_eq!(info.extensions().len(), 2);
}
