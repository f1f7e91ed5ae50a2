use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{
    parse_codepoint_association, parse_missing_value, parse_record_line,
    MissingValue,
};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, UcdFile};

/// A single row in the `EastAsianWidth.txt` file, describing the value of the
/// `East_Asian_Width` property.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EastAsianWidth {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// One of "A", "F", "H", "N", "Na", "W".
    pub width: String,
}

/// Parses `EastAsianWidth.txt`.
///
/// Unlisted codepoints mostly default to "N", but several blocks of
/// ideographs default to "W" through additional `@missing` annotations.
#[derive(Clone, Copy, Debug, Default)]
pub struct EastAsianWidthParser;

impl FormatParser for EastAsianWidthParser {
    type Record = EastAsianWidth;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<EastAsianWidth, Error> {
        let (codepoints, width) = parse_codepoint_association(fields)?;
        Ok(EastAsianWidth { codepoints, width: width.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for EastAsianWidthParser {
    fn relative_file_path() -> &'static Path {
        Path::new("EastAsianWidth.txt")
    }
}

impl FromStr for EastAsianWidth {
    type Err = Error;

    fn from_str(line: &str) -> Result<EastAsianWidth, Error> {
        parse_record_line(&EastAsianWidthParser, line)
    }
}
