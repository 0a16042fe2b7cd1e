//! Immutable capability record of a bound OpenCL device.
//!
//! Everything the tiling heuristics need to know about the hardware is captured once,
//! when the device is bound, and never re-queried afterwards.

use bon::bon;

use crate::target::GpuTarget;

/// Extension exposing the 8-bit integer dot-product instructions.
pub const EXT_INTEGER_DOT_PRODUCT_INT8: &str = "cl_arm_integer_dot_product_int8";

/// Extension allowing a 2D image to be created on top of an existing buffer.
pub const EXT_IMAGE2D_FROM_BUFFER: &str = "cl_khr_image2d_from_buffer";

/// Default `CL_DEVICE_IMAGE2D_MAX_WIDTH` / `_HEIGHT` reported by Bifrost drivers.
pub const DEFAULT_IMAGE2D_MAX_SIZE: usize = 65536;

/// Capabilities of a single OpenCL device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    name: String,
    target: GpuTarget,
    extensions: Vec<String>,
    image2d_max_width: usize,
    image2d_max_height: usize,
    image_pitch_alignment: usize,
    dot8: bool,
}

#[bon]
impl DeviceInfo {
    /// Capture the capabilities of a device.
    ///
    /// When `target` is not given it is resolved from `name` with [`GpuTarget::from_device_name`].
    /// An `image_pitch_alignment` of 0 means the driver could not report one.
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        target: Option<GpuTarget>,
        #[builder(default)] extensions: Vec<String>,
        #[builder(default = DEFAULT_IMAGE2D_MAX_SIZE)] image2d_max_width: usize,
        #[builder(default = DEFAULT_IMAGE2D_MAX_SIZE)] image2d_max_height: usize,
        #[builder(default)] image_pitch_alignment: usize,
    ) -> Self {
        let target = target.unwrap_or_else(|| GpuTarget::from_device_name(&name));

        // G76 drivers before r14p0 implement the dot-product instructions without advertising them.
        let dot8 = extensions.iter().any(|ext| ext == EXT_INTEGER_DOT_PRODUCT_INT8) || target == GpuTarget::G76;

        Self { name, target, extensions, image2d_max_width, image2d_max_height, image_pitch_alignment, dot8 }
    }
}

impl DeviceInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> GpuTarget {
        self.target
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn supports_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    /// Whether the device can execute 8-bit integer dot-product instructions.
    pub fn dot8_supported(&self) -> bool {
        self.dot8
    }

    pub fn image2d_from_buffer_supported(&self) -> bool {
        self.supports_extension(EXT_IMAGE2D_FROM_BUFFER)
    }

    /// Row pitch alignment, in pixels, required for images created from buffers.
    pub fn image_pitch_alignment(&self) -> usize {
        self.image_pitch_alignment
    }

    pub fn image2d_max_width(&self) -> usize {
        self.image2d_max_width
    }

    pub fn image2d_max_height(&self) -> usize {
        self.image2d_max_height
    }
}
