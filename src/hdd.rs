use log::{debug, info, trace, warn};

use crate::timing::{seek_time, transfer_time, wait_time};
use crate::{Device, DiskGeometry, Error, Position, Result, TrackLayout};

/// A rotating disk with a single actuator
///
/// All heads move together, so the only state carried between requests is the track the
/// actuator rests on.
#[derive(Clone, Debug)]
pub struct Hdd {
    layout: TrackLayout,
    head_pos: u32,
}

impl Hdd {
    /// Create a disk with its head parked on track 0
    ///
    /// With `verbose` set the geometry summary is logged at info level.
    pub fn new(geometry: DiskGeometry, verbose: bool) -> Result<Hdd> {
        let layout = TrackLayout::new(geometry)?;
        if verbose {
            info!("{}", geometry.summary());
        } else {
            debug!(
                "HDD: {} surfaces, {} tracks/surface, {} bytes",
                geometry.surfaces,
                geometry.tracks_per_surface,
                layout.capacity()
            );
        }
        Ok(Hdd {
            layout,
            head_pos: 0,
        })
    }

    pub fn geometry(&self) -> &DiskGeometry {
        self.layout.geometry()
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    pub fn capacity(&self) -> u64 {
        self.layout.capacity()
    }

    /// Track the head currently rests on
    pub fn head_position(&self) -> u32 {
        self.head_pos
    }

    pub fn decode(&self, address: u64) -> Result<Position> {
        self.layout.decode(address)
    }

    pub fn encode(&self, pos: &Position) -> u64 {
        self.layout.encode(pos)
    }

    pub fn seek_time(&self, from_track: u32, to_track: u32) -> f64 {
        seek_time(self.geometry(), from_track, to_track)
    }

    pub fn wait_time(&self) -> f64 {
        wait_time(self.geometry())
    }

    /// Time to read `sectors` sector units on the track under the head
    pub fn read_time(&self, sectors: u64) -> f64 {
        transfer_time(self.geometry(), self.head_pos, sectors)
    }

    /// Writes cost the same as reads
    pub fn write_time(&self, sectors: u64) -> f64 {
        self.read_time(sectors)
    }

    /// Simulate reading `size` bytes at `address`, issued at `ts`
    ///
    /// Returns the completion time. On error nothing is charged and the head does not move.
    pub fn read(&mut self, ts: f64, address: u64, size: u64) -> Result<f64> {
        self.request("read", ts, address, size)
    }

    /// Simulate writing `size` bytes at `address`, issued at `ts`
    ///
    /// There is no write cache, so this costs exactly as much as the matching read.
    pub fn write(&mut self, ts: f64, address: u64, size: u64) -> Result<f64> {
        self.request("write", ts, address, size)
    }

    fn request(&mut self, op: &str, ts: f64, address: u64, size: u64) -> Result<f64> {
        match self.access(address, size) {
            Ok(elapsed) => Ok(ts + elapsed),
            Err(err) => {
                warn!("HDD: {} of {} bytes at {:#x} rejected: {}", op, size, address, err);
                Err(err)
            }
        }
    }

    /// Time to service a request, moving the head to the last track touched
    fn access(&mut self, address: u64, size: u64) -> Result<f64> {
        if size == 0 {
            return Err(Error::InvalidArgument("request size must be at least 1 byte"));
        }
        let end_address = address
            .checked_add(size - 1)
            .ok_or(Error::AddressOutOfRange {
                address: u64::MAX,
                capacity: self.capacity(),
            })?;

        let mut curr = self.layout.decode(address)?;
        let to = self.layout.decode(end_address)?;
        let surfaces = self.geometry().surfaces;

        let mut elapsed = self.seek_time(self.head_pos, curr.track);
        self.head_pos = curr.track;

        while curr.track < to.track {
            let sectors = curr.remain_sectors(surfaces);
            elapsed += self.wait_time() + self.read_time(sectors);
            trace!("HDD: track {}: {} sectors", curr.track, sectors);

            curr.move_next_track(self.geometry());
            elapsed += self.seek_time(curr.track - 1, curr.track);
            self.head_pos += 1;
        }

        let sectors = curr.remain_sectors_end(&to, surfaces);
        elapsed += self.wait_time() + self.read_time(sectors);
        trace!("HDD: track {}: {} sectors, {}s total", to.track, sectors, elapsed);

        self.head_pos = to.track;
        Ok(elapsed)
    }
}

impl Device for Hdd {
    fn read(&mut self, timestamp: f64, address: u64, size: u64) -> Result<f64> {
        Hdd::read(self, timestamp, address, size)
    }

    fn write(&mut self, timestamp: f64, address: u64, size: u64) -> Result<f64> {
        Hdd::write(self, timestamp, address, size)
    }

    fn capacity(&self) -> u64 {
        Hdd::capacity(self)
    }
}
