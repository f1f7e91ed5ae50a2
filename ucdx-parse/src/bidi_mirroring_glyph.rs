use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::common::{parse_missing_value, parse_record_line, MissingValue};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, UcdFile};

/// Represents a single row in the `BidiMirroring.txt` file.
///
/// The field names were taken from the header of BidiMirroring.txt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidiMirroring {
    /// The codepoint corresponding to this row.
    pub codepoint: u32,
    /// The codepoint that has typically has a glyph that is the mirror image
    /// of `codepoint`.
    pub bidi_mirroring_glyph: u32,
}

/// Parses `BidiMirroring.txt`.
///
/// Its only `@missing` annotation gives the value `<none>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BidiMirroringParser;

impl FormatParser for BidiMirroringParser {
    type Record = BidiMirroring;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<BidiMirroring, Error> {
        fields.require(2)?;
        Ok(BidiMirroring {
            codepoint: fields.get(0)?.codepoint()?,
            bidi_mirroring_glyph: fields.get(1)?.codepoint()?,
        })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for BidiMirroringParser {
    fn relative_file_path() -> &'static Path {
        Path::new("BidiMirroring.txt")
    }
}

impl FromStr for BidiMirroring {
    type Err = Error;

    fn from_str(line: &str) -> Result<BidiMirroring, Error> {
        parse_record_line(&BidiMirroringParser, line)
    }
}

impl fmt::Display for BidiMirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}; {:04X}", self.codepoint, self.bidi_mirroring_glyph)
    }
}
