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

/// A single row in the `extracted/DerivedLineBreak.txt` file.
///
/// This file gives the derived values of the Line_Break property.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedLineBreak {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The derived Line_Break of the codepoints in this entry.
    pub line_break: String,
}

/// Parses `extracted/DerivedLineBreak.txt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedLineBreakParser;

impl FormatParser for DerivedLineBreakParser {
    type Record = DerivedLineBreak;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedLineBreak, Error> {
        let (codepoints, line_break) = parse_codepoint_association(fields)?;
        Ok(DerivedLineBreak { codepoints, line_break: line_break.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for DerivedLineBreakParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedLineBreak.txt")
    }
}

impl FromStr for DerivedLineBreak {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedLineBreak, Error> {
        parse_record_line(&DerivedLineBreakParser, line)
    }
}
