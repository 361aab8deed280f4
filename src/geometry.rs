use core::fmt;

use crate::{Error, Result};

/// Upper bound on tracks per surface, keeps the track offset table a sane size
pub const MAX_TRACKS: u32 = 1 << 24;

/// The fixed physical description of a rotating disk
///
/// Sector counts are interpolated linearly between the innermost track (index 0) and the
/// outermost track (index `tracks_per_surface - 1`), which models zoned bit recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskGeometry {
    /// Number of recordable platter faces, one head each
    pub surfaces: u32,
    /// Number of concentric tracks on every surface
    pub tracks_per_surface: u32,
    /// Sectors on track 0
    pub sectors_innermost: u32,
    /// Sectors on the last track
    pub sectors_outermost: u32,
    /// Bytes per sector
    pub sector_size: u32,
    /// Spindle speed in revolutions per minute
    pub rpm: u32,
    /// Fixed cost of any seek, in seconds
    pub seek_overhead: f64,
    /// Additional cost per track crossed, in seconds
    pub seek_per_track: f64,
}

impl DiskGeometry {
    /// Create a validated geometry. Arguments follow the order of the classic HDD constructor.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        surfaces: u32,
        tracks_per_surface: u32,
        sectors_innermost: u32,
        sectors_outermost: u32,
        rpm: u32,
        sector_size: u32,
        seek_overhead: f64,
        seek_per_track: f64,
    ) -> Result<DiskGeometry> {
        let geometry = DiskGeometry {
            surfaces,
            tracks_per_surface,
            sectors_innermost,
            sectors_outermost,
            sector_size,
            rpm,
            seek_overhead,
            seek_per_track,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<()> {
        if self.surfaces == 0 {
            return Err(Error::InvalidGeometry("surfaces must be at least 1"));
        }
        // Interpolation divides by tracks_per_surface - 1
        if self.tracks_per_surface < 2 {
            return Err(Error::InvalidGeometry("tracks per surface must be at least 2"));
        }
        if self.tracks_per_surface > MAX_TRACKS {
            return Err(Error::InvalidGeometry("too many tracks per surface"));
        }
        if self.sectors_innermost == 0 {
            return Err(Error::InvalidGeometry("innermost track needs at least 1 sector"));
        }
        if self.sectors_outermost < self.sectors_innermost {
            return Err(Error::InvalidGeometry(
                "outermost track has fewer sectors than innermost track",
            ));
        }
        if self.sector_size == 0 {
            return Err(Error::InvalidGeometry("sector size must be at least 1"));
        }
        if self.rpm == 0 {
            return Err(Error::InvalidGeometry("rpm must be greater than 0"));
        }
        if !(self.seek_overhead.is_finite() && self.seek_overhead >= 0.0) {
            return Err(Error::InvalidGeometry("seek overhead must be finite and non-negative"));
        }
        if !(self.seek_per_track.is_finite() && self.seek_per_track >= 0.0) {
            return Err(Error::InvalidGeometry("seek per track must be finite and non-negative"));
        }
        self.checked_capacity()
            .ok_or(Error::InvalidGeometry("capacity does not fit in 64 bits"))?;
        Ok(())
    }

    fn checked_capacity(&self) -> Option<u64> {
        (0..self.tracks_per_surface).try_fold(0u64, |capacity, track| {
            self.row_bytes()
                .checked_mul(self.sectors_in_track(track))
                .and_then(|bytes| capacity.checked_add(bytes))
        })
    }

    /// Number of sectors on one surface of `track`, truncated toward zero
    pub fn sectors_in_track(&self, track: u32) -> u64 {
        let spread = u64::from(self.sectors_outermost - self.sectors_innermost);
        u64::from(self.sectors_innermost)
            + spread * u64::from(track) / u64::from(self.tracks_per_surface - 1)
    }

    /// Bytes in one sector row, i.e. the same sector index across all surfaces
    pub fn row_bytes(&self) -> u64 {
        u64::from(self.surfaces) * u64::from(self.sector_size)
    }

    /// Bytes stored on `track` across all surfaces
    pub fn track_bytes(&self, track: u32) -> u64 {
        self.row_bytes() * self.sectors_in_track(track)
    }

    /// Total sectors on the device, counting every surface
    pub fn total_sectors(&self) -> u64 {
        let per_surface: u64 = (0..self.tracks_per_surface)
            .map(|track| self.sectors_in_track(track))
            .sum();
        per_surface * u64::from(self.surfaces)
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> u64 {
        self.total_sectors() * u64::from(self.sector_size)
    }

    /// Duration of one full revolution in seconds
    pub fn revolution_time(&self) -> f64 {
        60.0 / f64::from(self.rpm)
    }

    /// Human readable summary of the geometry, one attribute per line
    pub fn summary(&self) -> GeometrySummary<'_> {
        GeometrySummary(self)
    }
}

pub struct GeometrySummary<'a>(&'a DiskGeometry);

impl fmt::Display for GeometrySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let geometry = self.0;
        let total_sectors = geometry.total_sectors();
        let capacity_gb = (total_sectors as f64) * f64::from(geometry.sector_size) / 1e9;
        writeln!(f, "HDD:")?;
        writeln!(f, "  surfaces:                  {}", geometry.surfaces)?;
        writeln!(f, "  tracks/surface:            {}", geometry.tracks_per_surface)?;
        writeln!(f, "  sect on innermost track:   {}", geometry.sectors_innermost)?;
        writeln!(f, "  sect on outermost track:   {}", geometry.sectors_outermost)?;
        writeln!(f, "  rpm:                       {}", geometry.rpm)?;
        writeln!(f, "  sector size:               {}", geometry.sector_size)?;
        writeln!(f, "  number of sectors total:   {}", total_sectors)?;
        write!(f, "  capacity (GB):             {:.3}", capacity_gb)
    }
}
