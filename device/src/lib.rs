//! Mali GPU targets and device capabilities.
//!
//! - [`GpuTarget`] / [`GpuArch`] identify the hardware a kernel is configured for.
//! - [`DeviceInfo`] records the capabilities the tiling heuristics query (dot-product
//!   support, image-from-buffer support, image size limits).
//! - [`registry`] holds the devices bound by the process.

pub mod error;
pub mod info;
pub mod registry;
pub mod target;


pub use error::{Error, Result};
pub use info::{DEFAULT_IMAGE2D_MAX_SIZE, DeviceInfo, EXT_IMAGE2D_FROM_BUFFER, EXT_INTEGER_DOT_PRODUCT_INT8};
pub use registry::{DeviceRegistry, bind, get_device, registry};
pub use target::{GpuArch, GpuTarget};
