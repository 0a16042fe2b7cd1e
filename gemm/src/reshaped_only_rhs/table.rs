//! Per-family dispatch tables from element type to heuristic.

use enumset::{EnumSet, enum_set};
use malitile_device::GpuTarget;
use malitile_dtype::DataType;

use super::{Heuristics, g7x, g51, g76};
use crate::types::{GemmProblem, GemmTiling};

/// A tiling heuristic for one element-type class on one target family.
pub type HeuristicFn = fn(&Heuristics<'_>, &GemmProblem) -> GemmTiling;

/// Group of targets sharing one set of tuned heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TargetFamily {
    G76,
    G51,
    /// Generic Bifrost heuristics, used by every target without a dedicated table.
    G7x,
}

impl TargetFamily {
    pub fn of(target: GpuTarget) -> Self {
        match target {
            GpuTarget::G76 => Self::G76,
            GpuTarget::G51 => Self::G51,
            _ => Self::G7x,
        }
    }

    pub fn table(self) -> &'static HeuristicTable {
        match self {
            Self::G76 => &G76_TABLE,
            Self::G51 => &G51_TABLE,
            Self::G7x => &G7X_TABLE,
        }
    }
}

/// Element-type classes and their heuristic, for one family.
#[derive(Debug)]
pub struct HeuristicTable {
    pub family: TargetFamily,
    pub entries: &'static [(EnumSet<DataType>, HeuristicFn)],
}

impl HeuristicTable {
    pub fn lookup(&self, data_type: DataType) -> Option<HeuristicFn> {
        self.entries.iter().find(|(types, _)| types.contains(data_type)).map(|&(_, heuristic)| heuristic)
    }

    /// Every element type with a heuristic in this table.
    pub fn supported(&self) -> EnumSet<DataType> {
        self.entries.iter().fold(EnumSet::empty(), |acc, &(types, _)| acc | types)
    }
}

pub static G76_TABLE: HeuristicTable = HeuristicTable {
    family: TargetFamily::G76,
    entries: &[
        (enum_set!(DataType::Float32), g76::float32 as HeuristicFn),
        (enum_set!(DataType::Float16), g76::float16 as HeuristicFn),
        (DataType::QUANTIZED_8BIT, g76::quantized8 as HeuristicFn),
    ],
};

pub static G51_TABLE: HeuristicTable = HeuristicTable {
    family: TargetFamily::G51,
    entries: &[
        (enum_set!(DataType::Float32), g51::float32 as HeuristicFn),
        (enum_set!(DataType::Float16), g51::float16 as HeuristicFn),
        (DataType::QUANTIZED_8BIT, g51::quantized8 as HeuristicFn),
    ],
};

pub static G7X_TABLE: HeuristicTable = HeuristicTable {
    family: TargetFamily::G7x,
    entries: &[
        (enum_set!(DataType::Float32), g7x::float32 as HeuristicFn),
        (enum_set!(DataType::Float16), g7x::float16 as HeuristicFn),
        (DataType::QUANTIZED_8BIT, g7x::quantized8 as HeuristicFn),
    ],
};
