extern crate hddsim;

use std::io::{BufRead, BufReader};
use std::str::FromStr;
use std::{env, fs, io, process};

use hddsim::{DiskGeometry, Hdd, Request};

fn usage() -> ! {
    eprintln!(
        "hddsim [--verbose] [--trace FILE] [--start TIMESTAMP] SURFACES TRACKS SECTORS_INNER \
         SECTORS_OUTER RPM SECTOR_SIZE SEEK_OVERHEAD SEEK_PER_TRACK"
    );
    process::exit(1);
}

fn parse_arg<T: FromStr>(name: &str, value: Option<&String>) -> T {
    let value = match value {
        Some(value) => value,
        None => {
            eprintln!("hddsim: missing {}", name);
            usage();
        }
    };
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!("hddsim: invalid {}: {}", name, value);
            usage();
        }
    }
}

fn main() {
    let mut verbose = false;
    let mut trace_path_opt = None;
    let mut start: f64 = 0.0;
    let mut params = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--verbose" {
            verbose = true;
        } else if arg == "--trace" {
            trace_path_opt = Some(args.next().unwrap_or_else(|| usage()));
        } else if arg == "--start" {
            start = parse_arg("start timestamp", args.next().as_ref());
        } else {
            params.push(arg);
        }
    }
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if params.len() > 8 {
        eprintln!("hddsim: too many arguments provided");
        usage();
    }

    let mut params = params.iter();
    let geometry = DiskGeometry {
        surfaces: parse_arg("surfaces", params.next()),
        tracks_per_surface: parse_arg("tracks per surface", params.next()),
        sectors_innermost: parse_arg("sectors on innermost track", params.next()),
        sectors_outermost: parse_arg("sectors on outermost track", params.next()),
        rpm: parse_arg("rpm", params.next()),
        sector_size: parse_arg("sector size", params.next()),
        seek_overhead: parse_arg("seek overhead", params.next()),
        seek_per_track: parse_arg("seek per track", params.next()),
    };

    let mut hdd = match Hdd::new(geometry, verbose) {
        Ok(hdd) => hdd,
        Err(err) => {
            eprintln!("hddsim: {}", err);
            process::exit(err.errno());
        }
    };
    let reader: Box<dyn BufRead> = match trace_path_opt {
        Some(trace_path) => match fs::File::open(&trace_path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("hddsim: failed to open trace {}: {}", trace_path, err);
                process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut ts = start;
    let mut served = 0u64;
    let mut rejected = 0u64;
    for (i, line_res) in reader.lines().enumerate() {
        let line = match line_res {
            Ok(line) => line,
            Err(err) => {
                eprintln!("hddsim: failed to read trace: {}", err);
                process::exit(1);
            }
        };

        let request = match Request::parse(&line) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("hddsim: line {}: {}", i + 1, err);
                rejected += 1;
                continue;
            }
        };

        match request.issue(&mut hdd, ts) {
            Ok(end) => {
                println!("{} {:.9} {:.9}", request, ts, end);
                ts = end;
                served += 1;
            }
            // Already logged by the device, the clock stays put
            Err(_) => rejected += 1,
        }
    }

    eprintln!(
        "hddsim: served {} requests, rejected {}, finished at {:.9}",
        served, rejected, ts
    );
}
