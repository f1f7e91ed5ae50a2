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

/// A single row in the `auxiliary/SentenceBreakProperty.txt` file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceBreak {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The Sentence_Break value assigned to the codepoints in this entry.
    pub value: String,
}

/// Parses `auxiliary/SentenceBreakProperty.txt`.
///
/// Unlisted codepoints default to `Other`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceBreakParser;

impl FormatParser for SentenceBreakParser {
    type Record = SentenceBreak;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<SentenceBreak, Error> {
        let (codepoints, value) = parse_codepoint_association(fields)?;
        Ok(SentenceBreak { codepoints, value: value.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for SentenceBreakParser {
    fn relative_file_path() -> &'static Path {
        Path::new("auxiliary/SentenceBreakProperty.txt")
    }
}

impl FromStr for SentenceBreak {
    type Err = Error;

    fn from_str(line: &str) -> Result<SentenceBreak, Error> {
        parse_record_line(&SentenceBreakParser, line)
    }
}
