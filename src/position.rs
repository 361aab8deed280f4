use crate::DiskGeometry;

/// A decoded physical location on the disk
///
/// `max_access` counts the sector rows from `sector` (inclusive) to the end of `track`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub surface: u32,
    pub sector: u64,
    pub track: u32,
    pub max_access: u64,
}

impl Position {
    /// Sector units from this position to the end of its track, this sector included
    pub fn remain_sectors(&self, surfaces: u32) -> u64 {
        let surfaces = u64::from(surfaces);
        (self.max_access - 1) * surfaces + (surfaces - u64::from(self.surface))
    }

    /// Sector units from this position up to and including `end`, which must be on the same
    /// track and not before this position
    pub fn remain_sectors_end(&self, end: &Position, surfaces: u32) -> u64 {
        debug_assert_eq!(self.track, end.track);
        (end.sector - self.sector) * u64::from(surfaces) + u64::from(end.surface) + 1
            - u64::from(self.surface)
    }

    /// Move to the first sector unit of the following track
    pub fn move_next_track(&mut self, geometry: &DiskGeometry) {
        self.surface = 0;
        self.sector = 0;
        self.track += 1;
        self.max_access = geometry.sectors_in_track(self.track);
    }
}
