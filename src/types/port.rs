//! Port range types with validation, parsing and batch partitioning.
//!
//! A `PortRange` is an inclusive `[first, last]` interval over the full
//! `u16` port space (0 included) and is never empty. `PortRange::batches`
//! tiles it into consecutive sub-ranges of a fixed size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};
use std::str::FromStr;

/// Error type for port range parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("invalid port specification: {0}")]
    InvalidFormat(String),
    #[error("port {0} is out of valid range (0-65535)")]
    OutOfRange(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
}

impl PortError {
    /// True when the input was not of the form `N` or `N-M` at all.
    ///
    /// Out-of-bounds and inverted ranges are well-formed but unusable.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

/// An inclusive range of ports. Always holds at least one port.
///
/// Deserialization goes through [`PortRange::new`], so an inverted range
/// is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPortRange")]
pub struct PortRange {
    first: u16,
    last: u16,
}

impl PortRange {
    /// Create a new port range, rejecting `first > last`.
    pub fn new(first: u16, last: u16) -> Result<Self, PortError> {
        if first > last {
            Err(PortError::InvalidRange(first, last))
        } else {
            Ok(Self { first, last })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: u16) -> Self {
        Self {
            first: port,
            last: port,
        }
    }

    #[inline]
    pub const fn first(&self) -> u16 {
        self.first
    }

    #[inline]
    pub const fn last(&self) -> u16 {
        self.last
    }

    /// Number of ports in the range (65536 for the full range).
    pub const fn len(&self) -> usize {
        (self.last as usize) - (self.first as usize) + 1
    }

    /// Always false; kept for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Split the range into consecutive batches of `batch_size` ports.
    ///
    /// Every batch but the last holds exactly `batch_size` ports; the last
    /// holds whatever remains. Batches never overlap, never leave gaps and
    /// are yielded in ascending order. A `batch_size` at or above `len()`
    /// yields the whole range as a single batch.
    pub fn batches(&self, batch_size: NonZeroUsize) -> Batches {
        let size = u32::try_from(batch_size.get()).unwrap_or(u32::MAX);
        Batches {
            next: Some(u32::from(self.first)),
            last: u32::from(self.last),
            size,
        }
    }
}

/// Unchecked wire form of a [`PortRange`].
#[derive(Deserialize)]
struct RawPortRange {
    first: u16,
    last: u16,
}

impl TryFrom<RawPortRange> for PortRange {
    type Error = PortError;

    fn try_from(raw: RawPortRange) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.last)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = std::ops::RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.first..=self.last
    }
}

/// Parses `N` or `N-M`.
impl FromStr for PortRange {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bounds: Vec<&str> = s.split('-').collect();
        if bounds.len() > 2 {
            return Err(PortError::InvalidFormat(s.to_string()));
        }

        let first = parse_bound(bounds[0])?;
        let last = match bounds.get(1) {
            Some(b) => parse_bound(b)?,
            None => first,
        };

        Self::new(first, last)
    }
}

/// A bound made of digits but too large for a port is out of range, not
/// malformed, however many digits it has.
fn parse_bound(s: &str) -> Result<u16, PortError> {
    let s = s.trim();
    s.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => PortError::OutOfRange(s.to_string()),
        _ => PortError::InvalidFormat(s.to_string()),
    })
}

/// Iterator over the batches of a [`PortRange`].
///
/// Arithmetic runs in `u32` so a range ending at 65535 cannot overflow.
#[derive(Debug, Clone)]
pub struct Batches {
    next: Option<u32>,
    last: u32,
    size: u32,
}

impl Iterator for Batches {
    type Item = PortRange;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let end = start.saturating_add(self.size - 1).min(self.last);

        self.next = if end < self.last { Some(end + 1) } else { None };

        // start <= end <= last <= u16::MAX
        Some(PortRange {
            first: start as u16,
            last: end as u16,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(start) => {
                let ports = self.last - start + 1;
                ports.div_ceil(self.size) as usize
            }
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches {}
