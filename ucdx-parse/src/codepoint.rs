use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// The largest codepoint defined by Unicode.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// An inclusive range of Unicode codepoints.
///
/// A single codepoint is represented as a range whose start and end are
/// equal. Ranges order by their start and then by their end.
///
/// The canonical way to build a range is by parsing it from the hexadecimal
/// form used in the UCD, e.g., `0041` or `0000..007F`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodepointRange {
    from: u32,
    to: u32,
}

impl CodepointRange {
    /// Create a new range from its inclusive bounds.
    ///
    /// If either bound exceeds `0x10FFFF` or if `from > to`, then this
    /// returns an error.
    pub fn new(from: u32, to: u32) -> Result<CodepointRange, Error> {
        if from > MAX_CODEPOINT || to > MAX_CODEPOINT || from > to {
            return Err(Error::malformed_codepoint(&format!(
                "{:X}..{:X}",
                from, to
            )));
        }
        Ok(CodepointRange { from, to })
    }

    /// Return the first codepoint in this range.
    pub fn from(&self) -> u32 {
        self.from
    }

    /// Return the last codepoint in this range.
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Returns true if and only if this range contains exactly one codepoint.
    pub fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if and only if the given codepoint is in this range.
    pub fn contains(&self, cp: u32) -> bool {
        self.from <= cp && cp <= self.to
    }

    /// Return the number of codepoints in this range. This is never zero.
    pub fn len(&self) -> u32 {
        self.to - self.from + 1
    }
}

impl FromStr for CodepointRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<CodepointRange, Error> {
        static PARTS: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?P<from>[0-9A-Fa-f]+)(?:\.\.(?P<to>[0-9A-Fa-f]+))?$",
            )
            .unwrap()
        });

        let caps = match PARTS.captures(s) {
            Some(caps) => caps,
            None => return Err(Error::malformed_codepoint(s)),
        };
        let decode = |hex: &str| {
            u32::from_str_radix(hex, 16)
                .map_err(|_| Error::malformed_codepoint(s))
        };
        let from = decode(&caps["from"])?;
        let to = match caps.name("to") {
            Some(m) => decode(m.as_str())?,
            None => from,
        };
        CodepointRange::new(from, to)
            .map_err(|_| Error::malformed_codepoint(s))
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:X}", self.from)
        } else {
            write!(f, "{:X}..{:X}", self.from, self.to)
        }
    }
}

impl PartialEq<u32> for CodepointRange {
    fn eq(&self, other: &u32) -> bool {
        self.from == *other && self.to == *other
    }
}

impl PartialEq<(u32, u32)> for CodepointRange {
    fn eq(&self, other: &(u32, u32)) -> bool {
        (self.from, self.to) == *other
    }
}

impl IntoIterator for CodepointRange {
    type IntoIter = CodepointIter;
    type Item = u32;

    fn into_iter(self) -> CodepointIter {
        CodepointIter { next: self.from, end: self.to, done: false }
    }
}

/// An iterator over every codepoint in a `CodepointRange`.
#[derive(Clone, Debug)]
pub struct CodepointIter {
    next: u32,
    end: u32,
    done: bool,
}

impl Iterator for CodepointIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        let cp = self.next;
        if cp == self.end {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(cp)
    }
}
