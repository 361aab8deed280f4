use core::fmt;

use syscall::error::{EDOM, EINVAL, ENXIO};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by the disk model
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The byte address lies at or beyond the end of the device
    AddressOutOfRange { address: u64, capacity: u64 },
    /// The request itself is malformed, for example zero bytes long
    InvalidArgument(&'static str),
    /// The construction parameters do not describe a usable disk
    InvalidGeometry(&'static str),
}

impl Error {
    /// The errno this error is reported as outside the library
    pub fn errno(&self) -> i32 {
        match self {
            Error::AddressOutOfRange { .. } => ENXIO,
            Error::InvalidArgument(_) => EINVAL,
            Error::InvalidGeometry(_) => EDOM,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AddressOutOfRange { address, capacity } => write!(
                f,
                "address {:#x} out of range (capacity {:#x})",
                address, capacity
            ),
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::InvalidGeometry(reason) => write!(f, "invalid geometry: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for syscall::error::Error {
    fn from(err: Error) -> Self {
        syscall::error::Error::new(err.errno())
    }
}
