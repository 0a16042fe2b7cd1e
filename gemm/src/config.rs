//! Configuration of the reshaped-only-RHS tiling strategy.
//!
//! Typed configuration with a bon builder and environment variable fallbacks. The defaults
//! reproduce the tuned heuristics exactly.

use bon::bon;
use malitile_device::GpuTarget;

/// Options of the reshaped-only-RHS tiling strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapedOnlyRhsConfig {
    /// Allow selecting an RHS exported to an OpenCL image. When false, heuristics with an
    /// image-backed candidate always fall back to the buffer-backed one.
    pub allow_image2d: bool,

    /// Tune for this target instead of the one the strategy was created with.
    pub target_override: Option<GpuTarget>,
}

impl Default for ReshapedOnlyRhsConfig {
    fn default() -> Self {
        Self { allow_image2d: true, target_override: None }
    }
}

#[bon]
impl ReshapedOnlyRhsConfig {
    /// Create a configuration with builder pattern.
    #[builder]
    pub fn new(#[builder(default = true)] allow_image2d: bool, target_override: Option<GpuTarget>) -> Self {
        Self { allow_image2d, target_override }
    }
}

impl ReshapedOnlyRhsConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `MALITILE_NO_IMAGE2D` - Never export the reshaped RHS to an image
    /// * `MALITILE_TARGET=G76` - Tune for the given target (ignored if unparsable)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let allow_image2d = lookup("MALITILE_NO_IMAGE2D").is_none();
        let target_override = lookup("MALITILE_TARGET").and_then(|s| s.trim().parse().ok());

        Self { allow_image2d, target_override }
    }
}
