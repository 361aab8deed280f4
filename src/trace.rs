//! Request traces, one request per line: `r ADDRESS SIZE` or `w ADDRESS SIZE`.
//!
//! Numbers are decimal or `0x` prefixed hexadecimal. Blank lines and lines starting with `#`
//! carry no request.

use core::fmt;

use crate::{Device, Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Read,
    Write,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Op::Read => write!(f, "r"),
            Op::Write => write!(f, "w"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Request {
    pub op: Op,
    pub address: u64,
    pub size: u64,
}

impl Request {
    /// Parse one trace line, returning `None` for lines without a request
    pub fn parse(line: &str) -> Result<Option<Request>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let op = match parts.next() {
            Some("r") | Some("R") => Op::Read,
            Some("w") | Some("W") => Op::Write,
            _ => return Err(Error::InvalidArgument("request must start with r or w")),
        };
        let address = parse_number(parts.next().ok_or(Error::InvalidArgument("missing address"))?)?;
        let size = parse_number(parts.next().ok_or(Error::InvalidArgument("missing size"))?)?;
        if parts.next().is_some() {
            return Err(Error::InvalidArgument("trailing fields after size"));
        }

        Ok(Some(Request { op, address, size }))
    }

    /// Issue this request to `device` at `timestamp`, returning the completion time
    pub fn issue<D: Device + ?Sized>(&self, device: &mut D, timestamp: f64) -> Result<f64> {
        match self.op {
            Op::Read => device.read(timestamp, self.address, self.size),
            Op::Write => device.write(timestamp, self.address, self.size),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:#x} {}", self.op, self.address, self.size)
    }
}

fn parse_number(text: &str) -> Result<u64> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    parsed.map_err(|_| Error::InvalidArgument("malformed number"))
}
