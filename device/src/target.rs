//! Mali GPU models and their architecture generations.

use tracing::info;

/// Architecture generation of a Mali GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpuArch {
    Midgard,
    Bifrost,
    Valhall,
}

/// A Mali GPU model, or the generic member of an architecture when the exact model is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumString, strum::EnumIter, strum::VariantArray)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpuTarget {
    Midgard,
    T600,
    T700,
    T800,

    Bifrost,
    G71,
    G72,
    G51,
    G51Big,
    G51Lit,
    G52,
    G52Lit,
    G76,

    Valhall,
    G77,
    G78,
}

// Substring tables are scanned in order; longer model names come first so that
// "G51BIG" is not swallowed by "G51".
const MIDGARD_MODELS: &[(&str, GpuTarget)] =
    &[("T600", GpuTarget::T600), ("T700", GpuTarget::T700), ("T800", GpuTarget::T800)];

const BIFROST_MODELS: &[(&str, GpuTarget)] = &[
    ("G71", GpuTarget::G71),
    ("G72", GpuTarget::G72),
    ("G51BIG", GpuTarget::G51Big),
    ("G51LIT", GpuTarget::G51Lit),
    ("G51", GpuTarget::G51),
    ("G52LIT", GpuTarget::G52Lit),
    ("G52", GpuTarget::G52),
    ("G76", GpuTarget::G76),
];

const VALHALL_MODELS: &[(&str, GpuTarget)] = &[("G77", GpuTarget::G77), ("G78", GpuTarget::G78)];

fn lookup(models: &[(&str, GpuTarget)], version: &str) -> Option<GpuTarget> {
    models.iter().find(|(model, _)| version.contains(model)).map(|&(_, target)| target)
}

impl GpuTarget {
    pub const fn arch(&self) -> GpuArch {
        match self {
            Self::Midgard | Self::T600 | Self::T700 | Self::T800 => GpuArch::Midgard,
            Self::Bifrost
            | Self::G71
            | Self::G72
            | Self::G51
            | Self::G51Big
            | Self::G51Lit
            | Self::G52
            | Self::G52Lit
            | Self::G76 => GpuArch::Bifrost,
            Self::Valhall | Self::G77 | Self::G78 => GpuArch::Valhall,
        }
    }

    /// Returns true if this target is one of `targets`.
    pub fn is_in(&self, targets: &[GpuTarget]) -> bool {
        targets.contains(self)
    }

    /// Resolve the target from an OpenCL device name such as `"Mali-G76"`.
    ///
    /// Non-Mali devices resolve to [`GpuTarget::Midgard`]. Mali devices whose model is not recognised
    /// resolve to [`GpuTarget::Bifrost`].
    pub fn from_device_name(name: &str) -> Self {
        let Some(pos) = name.find("Mali-") else {
            info!(device.name = name, "not a Mali GPU, defaulting target to MIDGARD");
            return Self::Midgard;
        };

        let version = &name[pos + "Mali-".len()..];
        // Future parts are announced with an "X" suffix and follow the G-series naming.
        let is_future = version.contains('X');

        let target = match version.chars().next() {
            Some('G') => lookup(BIFROST_MODELS, version).or_else(|| lookup(VALHALL_MODELS, version)),
            Some('T') if !is_future => lookup(MIDGARD_MODELS, version),
            _ if is_future => lookup(BIFROST_MODELS, version).or_else(|| lookup(VALHALL_MODELS, version)),
            _ => None,
        };

        target.unwrap_or_else(|| {
            info!(device.name = name, "unknown Mali GPU, defaulting target to BIFROST");
            Self::Bifrost
        })
    }
}
