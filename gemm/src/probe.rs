//! Hardware capability queries consumed by the heuristics.

use std::sync::Arc;

use malitile_device::DeviceInfo;
use tracing::debug;

use crate::image2d::validate_image2d_support_on_rhs;
use crate::shape::TensorInfo;
use crate::types::GemmRhsMatrixInfo;

/// Capabilities of the device a GEMM kernel is configured for.
///
/// Implementations must answer from state captured when the device was bound; the heuristics
/// call them from any thread.
pub trait CapabilityProbe: Send + Sync {
    /// Whether 8-bit integer dot-product instructions are available.
    fn dot8_supported(&self) -> bool;

    /// Whether the reshaped RHS `reshaped`, tiled as `rhs`, can be exported to a 2D image.
    fn image2d_supported(&self, reshaped: &TensorInfo, rhs: &GemmRhsMatrixInfo) -> bool;
}

impl CapabilityProbe for DeviceInfo {
    fn dot8_supported(&self) -> bool {
        DeviceInfo::dot8_supported(self)
    }

    fn image2d_supported(&self, reshaped: &TensorInfo, rhs: &GemmRhsMatrixInfo) -> bool {
        match validate_image2d_support_on_rhs(self, reshaped, rhs) {
            Ok(()) => true,
            Err(reason) => {
                debug!(device.name = self.name(), %reason, "reshaped RHS cannot be exported to an image");
                false
            }
        }
    }
}

impl<P: CapabilityProbe + ?Sized> CapabilityProbe for &P {
    fn dot8_supported(&self) -> bool {
        (**self).dot8_supported()
    }

    fn image2d_supported(&self, reshaped: &TensorInfo, rhs: &GemmRhsMatrixInfo) -> bool {
        (**self).image2d_supported(reshaped, rhs)
    }
}

impl<P: CapabilityProbe + ?Sized> CapabilityProbe for Arc<P> {
    fn dot8_supported(&self) -> bool {
        (**self).dot8_supported()
    }

    fn image2d_supported(&self, reshaped: &TensorInfo, rhs: &GemmRhsMatrixInfo) -> bool {
        (**self).image2d_supported(reshaped, rhs)
    }
}
