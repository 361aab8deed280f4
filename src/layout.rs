use alloc::vec::Vec;

use crate::{DiskGeometry, Error, Position, Result};

/// Byte offsets of every track boundary, used to translate between linear addresses and
/// physical positions
///
/// Sectors are laid out sector-major: inside a track, one sector row spans every surface
/// before the next sector index begins.
#[derive(Clone, Debug)]
pub struct TrackLayout {
    geometry: DiskGeometry,
    /// `offsets[t]` is the first byte of track `t`, the final entry is the capacity
    offsets: Vec<u64>,
}

impl TrackLayout {
    pub fn new(geometry: DiskGeometry) -> Result<TrackLayout> {
        geometry.validate()?;

        let mut offsets = Vec::with_capacity(geometry.tracks_per_surface as usize + 1);
        let mut offset = 0u64;
        offsets.push(offset);
        for track in 0..geometry.tracks_per_surface {
            offset = geometry
                .row_bytes()
                .checked_mul(geometry.sectors_in_track(track))
                .and_then(|bytes| offset.checked_add(bytes))
                .ok_or(Error::InvalidGeometry("capacity does not fit in 64 bits"))?;
            offsets.push(offset);
        }

        Ok(TrackLayout { geometry, offsets })
    }

    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    pub fn capacity(&self) -> u64 {
        self.offsets[self.offsets.len() - 1]
    }

    /// Offset of the first byte of `track`
    pub fn track_start(&self, track: u32) -> u64 {
        self.offsets[track as usize]
    }

    /// Translate a byte address into the position of the sector unit holding it
    pub fn decode(&self, address: u64) -> Result<Position> {
        let capacity = self.capacity();
        if address >= capacity {
            return Err(Error::AddressOutOfRange { address, capacity });
        }

        // offsets[0] == 0 <= address < capacity, so the index lands on a real track
        let track = self.offsets.partition_point(|&start| start <= address) - 1;
        let residual = address - self.offsets[track];
        let row_bytes = self.geometry.row_bytes();
        let sector = residual / row_bytes;
        let surface = (residual % row_bytes) / u64::from(self.geometry.sector_size);

        let track = track as u32;
        Ok(Position {
            surface: surface as u32,
            sector,
            track,
            max_access: self.geometry.sectors_in_track(track) - sector,
        })
    }

    /// Translate a position back into the address of the first byte of its sector unit
    ///
    /// `pos.track` must be a track of this layout.
    pub fn encode(&self, pos: &Position) -> u64 {
        self.track_start(pos.track)
            + self.geometry.row_bytes() * pos.sector
            + u64::from(pos.surface) * u64::from(self.geometry.sector_size)
    }
}
