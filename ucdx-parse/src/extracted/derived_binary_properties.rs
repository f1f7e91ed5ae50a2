use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{parse_codepoint_association, parse_record_line};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, NoMissing, UcdFile};

/// A single row in the `extracted/DerivedBinaryProperties.txt` file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedBinaryProperties {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The derived property name, e.g., `Bidi_Mirrored`.
    pub property: String,
}

/// Parses `extracted/DerivedBinaryProperties.txt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedBinaryPropertiesParser;

impl FormatParser for DerivedBinaryPropertiesParser {
    type Record = DerivedBinaryProperties;
    type Missing = NoMissing;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedBinaryProperties, Error> {
        let (codepoints, property) = parse_codepoint_association(fields)?;
        Ok(DerivedBinaryProperties { codepoints, property: property.to_string() })
    }

    fn parse_missing(
        &self,
        _: &Fields<'_>,
    ) -> Result<Option<NoMissing>, Error> {
        Ok(None)
    }
}

impl UcdFile for DerivedBinaryPropertiesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedBinaryProperties.txt")
    }
}

impl FromStr for DerivedBinaryProperties {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedBinaryProperties, Error> {
        parse_record_line(&DerivedBinaryPropertiesParser, line)
    }
}
