use crate::Result;

/// A storage device whose accesses take simulated time
///
/// Requests are serviced one at a time. Each call takes the simulated time at which the request
/// is issued and returns the time at which it completes. A failed request leaves the device
/// unchanged and the caller's clock should not advance.
pub trait Device {
    fn read(&mut self, timestamp: f64, address: u64, size: u64) -> Result<f64>;
    fn write(&mut self, timestamp: f64, address: u64, size: u64) -> Result<f64>;
    fn capacity(&self) -> u64;
}
