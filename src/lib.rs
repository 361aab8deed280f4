#![crate_name = "hddsim"]
#![crate_type = "lib"]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(warnings)]

extern crate alloc;

pub use self::device::Device;
pub use self::error::{Error, Result};
pub use self::geometry::{DiskGeometry, GeometrySummary, MAX_TRACKS};
pub use self::hdd::Hdd;
pub use self::layout::TrackLayout;
pub use self::position::Position;
pub use self::trace::{Op, Request};

mod device;
mod error;
mod geometry;
mod hdd;
mod layout;
mod position;
pub mod timing;
pub mod trace;

#[cfg(test)]
mod tests;
