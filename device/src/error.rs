use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// No device with this name has been bound to the registry.
    #[snafu(display("device not bound: {name}"))]
    DeviceNotBound { name: String },
}
