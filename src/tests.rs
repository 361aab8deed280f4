use crate::{Device, DiskGeometry, Error, Hdd, Op, Request, TrackLayout};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// 1 surface, 10 tracks of 100 sectors, 7200 rpm
fn flat_hdd(seek_overhead: f64, seek_per_track: f64) -> Hdd {
    let geometry =
        DiskGeometry::new(1, 10, 100, 100, 7200, 512, seek_overhead, seek_per_track).unwrap();
    Hdd::new(geometry, false).unwrap()
}

#[test]
fn same_track_single_sector() {
    let mut hdd = flat_hdd(0.002, 0.001);

    let pos = hdd.decode(0).unwrap();
    assert_eq!((pos.track, pos.sector, pos.surface), (0, 0, 0));
    assert_eq!(hdd.seek_time(0, 0), 0.0);
    assert_close(hdd.wait_time(), 30.0 / 7200.0);
    assert_close(hdd.read_time(1), 60.0 / 7200.0 / 100.0);

    let ts = hdd.read(5.0, 0, 512).unwrap();
    assert_close(ts, 5.0 + 30.0 / 7200.0 + 60.0 / 7200.0 / 100.0);
    assert_eq!(hdd.head_position(), 0);
}

#[test]
fn head_position_persists() {
    let mut hdd = flat_hdd(0.002, 0.001);
    let track_bytes = 512 * 100;
    let single = hdd.wait_time() + hdd.read_time(1);

    let ts = hdd.read(0.0, 5 * track_bytes, 512).unwrap();
    assert_close(ts, 0.002 + 0.005 + single);
    assert_eq!(hdd.head_position(), 5);

    // Seeks back from track 5, not from the parking track
    let ts2 = hdd.read(ts, 2 * track_bytes, 512).unwrap();
    assert_close(ts2 - ts, 0.002 + 0.003 + single);
    assert_eq!(hdd.head_position(), 2);

    // Same track again, no seek at all
    let ts3 = hdd.write(ts2, 2 * track_bytes + 4096, 512).unwrap();
    assert_close(ts3 - ts2, single);
}

#[test]
fn multi_track_span() {
    let overhead = 0.002;
    let per_track = 0.0005;
    let geometry = DiskGeometry::new(2, 10, 100, 100, 6000, 512, overhead, per_track).unwrap();
    let mut hdd = Hdd::new(geometry, true).unwrap();
    let track_bytes = 2 * 512 * 100;

    // Track 1, sector 98, surface 1 through track 3, sector 1, surface 0
    let start = track_bytes + 98 * 1024 + 512;
    let end = 3 * track_bytes + 1024 + 511;
    let ts = hdd.read(1.0, start, end - start + 1).unwrap();

    let revolution = 0.01;
    let wait = 0.005;
    let expected = (overhead + per_track)
        + (wait + revolution * 3.0 / 100.0)
        + (overhead + per_track)
        + (wait + revolution * 200.0 / 100.0)
        + (overhead + per_track)
        + (wait + revolution * 3.0 / 100.0);
    assert_close(ts, 1.0 + expected);
    assert_eq!(hdd.head_position(), 3);
}

#[test]
fn zoned_transfer_uses_track_density() {
    let geometry = DiskGeometry::new(1, 3, 100, 300, 6000, 512, 0.0, 0.0).unwrap();
    let mut hdd = Hdd::new(geometry, false).unwrap();
    let outer_track = 512 * (100 + 200);

    // One full outer track is still one revolution
    let ts = hdd.read(0.0, outer_track, 512 * 300).unwrap();
    assert_close(ts, 0.005 + 0.01);
    assert_eq!(hdd.head_position(), 2);
    assert_close(hdd.read_time(30), 0.001);
}

#[test]
fn out_of_range_is_not_charged() {
    let mut hdd = flat_hdd(0.002, 0.001);
    let capacity = hdd.capacity();
    assert_eq!(capacity, 512 * 100 * 10);

    hdd.read(0.0, 4 * 512 * 100, 512).unwrap();
    assert_eq!(hdd.head_position(), 4);

    assert_eq!(
        hdd.read(7.0, capacity, 1),
        Err(Error::AddressOutOfRange {
            address: capacity,
            capacity
        })
    );
    // Start is valid but the end runs off the disk
    assert!(matches!(
        hdd.write(7.0, capacity - 512, 1024),
        Err(Error::AddressOutOfRange { .. })
    ));
    // The end of the range is past the last representable address
    assert_eq!(
        hdd.read(7.0, 512, u64::MAX),
        Err(Error::AddressOutOfRange {
            address: u64::MAX,
            capacity
        })
    );
    assert_eq!(hdd.head_position(), 4);
}

#[test]
fn zero_size_is_invalid() {
    let mut hdd = flat_hdd(0.002, 0.001);
    assert!(matches!(hdd.read(0.0, 0, 0), Err(Error::InvalidArgument(_))));
    assert!(matches!(hdd.write(0.0, 0, 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn write_costs_like_read() {
    let geometry = DiskGeometry::new(4, 50, 80, 160, 10000, 512, 0.001, 0.00002).unwrap();
    let mut reader = Hdd::new(geometry, false).unwrap();
    let mut writer = reader.clone();

    let mut read_ts = 0.0;
    let mut write_ts = 0.0;
    for (address, size) in [(0, 512), (1_000_000, 65536), (123_456, 7), (3_000_000, 1_000_000)].iter() {
        read_ts = reader.read(read_ts, *address, *size).unwrap();
        write_ts = writer.write(write_ts, *address, *size).unwrap();
        assert_eq!(read_ts, write_ts);
        assert_eq!(reader.head_position(), writer.head_position());
    }
}

#[test]
fn remaining_sectors_cover_request() {
    let geometry = DiskGeometry::new(3, 6, 4, 9, 7200, 8, 0.0, 0.0).unwrap();
    let layout = TrackLayout::new(geometry).unwrap();
    let capacity = layout.capacity();

    for start in (0..capacity).step_by(13) {
        for end in (start..capacity).step_by(29) {
            let mut curr = layout.decode(start).unwrap();
            let to = layout.decode(end).unwrap();
            let first = layout.encode(&curr);

            let mut units = 0;
            while curr.track < to.track {
                units += curr.remain_sectors(geometry.surfaces);
                curr.move_next_track(&geometry);
            }
            units += curr.remain_sectors_end(&to, geometry.surfaces);

            assert_eq!(units, (layout.encode(&to) - first) / 8 + 1);
        }
    }
}

#[test]
fn requests_through_device_trait() {
    let mut hdd = flat_hdd(0.002, 0.001);
    let device: &mut dyn Device = &mut hdd;
    assert_eq!(device.capacity(), 512 * 100 * 10);

    let request = Request {
        op: Op::Write,
        address: 3 * 512 * 100,
        size: 512,
    };
    let ts = request.issue(device, 1.0).unwrap();
    assert_close(ts, 1.0 + 0.002 + 0.003 + 30.0 / 7200.0 + 60.0 / 7200.0 / 100.0);
    assert_eq!(hdd.head_position(), 3);
}
