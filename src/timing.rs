//! Closed form costs of the mechanical parts of an access. All durations are in seconds.

use crate::DiskGeometry;

/// Time to move the head from `from_track` to `to_track`
///
/// Staying on the same track costs nothing, otherwise a fixed settle overhead is charged on top
/// of a cost linear in the distance travelled.
pub fn seek_time(geometry: &DiskGeometry, from_track: u32, to_track: u32) -> f64 {
    if from_track == to_track {
        return 0.0;
    }
    geometry.seek_overhead + geometry.seek_per_track * f64::from(from_track.abs_diff(to_track))
}

/// Average rotational latency, half a revolution
pub fn wait_time(geometry: &DiskGeometry) -> f64 {
    30.0 / f64::from(geometry.rpm)
}

/// Time for `sectors` sector units to pass under the head on `track`
pub fn transfer_time(geometry: &DiskGeometry, track: u32, sectors: u64) -> f64 {
    geometry.revolution_time() * sectors as f64 / geometry.sectors_in_track(track) as f64
}
