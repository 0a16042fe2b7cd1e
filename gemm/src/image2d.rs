//! Eligibility of a reshaped RHS for export to an OpenCL 2D image.
//!
//! An image is created on top of the reshaped RHS buffer (`cl_khr_image2d_from_buffer`), with
//! four elements per texel. Outer dimensions are collapsed into the image height since a 3D
//! image cannot be created from a buffer.

use malitile_device::DeviceInfo;
use malitile_dtype::DataType;
use snafu::{Snafu, ensure};

use crate::shape::TensorInfo;
use crate::types::GemmRhsMatrixInfo;

/// Elements packed in one RGBA texel.
pub const ELEMENTS_PER_TEXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Image2dError {
    #[snafu(display("export to image requires n0 of 4, 8 or 16 for a non-transposed RHS, got {n0}"))]
    UnsupportedN0 { n0: u32 },

    #[snafu(display("export to image requires k0 of 4, 8 or 16 for a transposed RHS, got {k0}"))]
    UnsupportedK0 { k0: u32 },

    #[snafu(display("export to image is only supported for f32 and f16, got {data_type}"))]
    UnsupportedDataType { data_type: DataType },

    #[snafu(display("device does not support cl_khr_image2d_from_buffer"))]
    Image2dFromBufferNotSupported,

    #[snafu(display("device did not report an image pitch alignment"))]
    UnknownPitchAlignment,

    #[snafu(display("reshaped width {width} exceeds the image limit of {max}"))]
    WidthExceeded { width: usize, max: usize },

    #[snafu(display("reshaped height {height} exceeds the image limit of {max}"))]
    HeightExceeded { height: usize, max: usize },
}

/// Check that the reshaped RHS described by `reshaped` can be read through a 2D image on `device`.
///
/// Always succeeds when `rhs.export_to_image` is off.
pub fn validate_image2d_support_on_rhs(
    device: &DeviceInfo,
    reshaped: &TensorInfo,
    rhs: &GemmRhsMatrixInfo,
) -> Result<(), Image2dError> {
    if !rhs.export_to_image {
        return Ok(());
    }

    ensure!(!(matches!(rhs.n0, 2 | 3) && !rhs.transpose), UnsupportedN0Snafu { n0: rhs.n0 });
    ensure!(!(matches!(rhs.k0, 2 | 3) && rhs.transpose), UnsupportedK0Snafu { k0: rhs.k0 });

    let data_type = reshaped.data_type();
    ensure!(matches!(data_type, DataType::Float32 | DataType::Float16), UnsupportedDataTypeSnafu { data_type });

    ensure!(device.image2d_from_buffer_supported(), Image2dFromBufferNotSupportedSnafu);
    ensure!(device.image_pitch_alignment() != 0, UnknownPitchAlignmentSnafu);

    let shape = reshaped.shape();
    let max_width = device.image2d_max_width() * ELEMENTS_PER_TEXEL;
    ensure!(shape.dim(0) <= max_width, WidthExceededSnafu { width: shape.dim(0), max: max_width });

    let height = shape.dim(1) * shape.dim(2);
    ensure!(height <= device.image2d_max_height(), HeightExceededSnafu { height, max: device.image2d_max_height() });

    Ok(())
}
