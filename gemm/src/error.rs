use malitile_device::GpuTarget;
use malitile_dtype::DataType;
use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// No tiling heuristic exists for this element type on the target's family.
    #[snafu(display("data type {data_type} is not supported by the reshaped-only-RHS configuration on {target}"))]
    UnsupportedDataType { data_type: DataType, target: GpuTarget },
}
