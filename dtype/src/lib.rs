//! Element types of the tensors fed to Mali GEMM kernels.
//!
//! [`DataType`] mirrors the numeric kinds an OpenCL compute library hands to
//! its kernel-configuration layer. Only a subset of them has tuned tiling
//! heuristics; the rest exist so callers can describe any tensor and get a
//! proper error back instead of a silent fallback.

use std::str::FromStr;

use enumset::{EnumSet, enum_set};

pub mod error;


pub use error::{Error, Result};

/// Numeric kind of a tensor element.
#[derive(Debug, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::IntoStaticStr)]
#[derive(enumset::EnumSetType)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[enumset(repr = "u32")]
pub enum DataType {
    UInt8,
    Int8,

    /// Asymmetric quantized unsigned 8-bit.
    QAsymm8,
    /// Symmetric quantized signed 8-bit.
    QSymm8,
    /// Asymmetric quantized signed 8-bit.
    QAsymm8Signed,
    /// Symmetric quantized signed 8-bit with one scale per output channel.
    QSymm8PerChannel,

    UInt16,
    Int16,
    QSymm16,
    QAsymm16,
    UInt32,
    Int32,

    BFloat16,
    Float16,
    Float32,
    Float64,
}

impl DataType {
    /// 8-bit quantized kinds. Kernel heuristics treat them as one class.
    pub const QUANTIZED_8BIT: EnumSet<Self> =
        enum_set!(Self::QAsymm8 | Self::QSymm8 | Self::QAsymm8Signed | Self::QSymm8PerChannel);

    pub const QUANTIZED: EnumSet<Self> = enum_set!(
        Self::QAsymm8 | Self::QSymm8 | Self::QAsymm8Signed | Self::QSymm8PerChannel | Self::QSymm16 | Self::QAsymm16
    );

    pub const FLOAT: EnumSet<Self> = enum_set!(Self::BFloat16 | Self::Float16 | Self::Float32 | Self::Float64);

    pub const fn bytes(&self) -> usize {
        match self {
            Self::UInt8 | Self::Int8 => 1,
            Self::QAsymm8 | Self::QSymm8 | Self::QAsymm8Signed | Self::QSymm8PerChannel => 1,
            Self::UInt16 | Self::Int16 | Self::QSymm16 | Self::QAsymm16 => 2,
            Self::BFloat16 | Self::Float16 => 2,
            Self::UInt32 | Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    pub fn is_float(&self) -> bool {
        Self::FLOAT.contains(*self)
    }

    pub fn is_quantized(&self) -> bool {
        Self::QUANTIZED.contains(*self)
    }

    pub fn is_quantized_8bit(&self) -> bool {
        Self::QUANTIZED_8BIT.contains(*self)
    }

    /// Short lower-case name, as used in kernel build options and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UInt8 => "u8",
            Self::Int8 => "s8",
            Self::QAsymm8 => "qasymm8",
            Self::QSymm8 => "qsymm8",
            Self::QAsymm8Signed => "qasymm8_signed",
            Self::QSymm8PerChannel => "qsymm8_per_channel",
            Self::UInt16 => "u16",
            Self::Int16 => "s16",
            Self::QSymm16 => "qsymm16",
            Self::QAsymm16 => "qasymm16",
            Self::UInt32 => "u32",
            Self::Int32 => "s32",
            Self::BFloat16 => "bf16",
            Self::Float16 => "f16",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    /// Accepts the short name (`f32`, `qasymm8`) or the variant name (`Float32`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        use strum::VariantArray;

        Self::VARIANTS
            .iter()
            .copied()
            .find(|dt| {
                let variant: &'static str = dt.into();
                dt.name().eq_ignore_ascii_case(s) || variant.eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| Error::UnknownDataType { name: s.to_string() })
    }
}
