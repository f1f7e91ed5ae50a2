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

/// A single row in the `extracted/DerivedCombiningClass.txt` file.
///
/// This file gives the derived values of the Canonical_Combining_Class property.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedCombiningClass {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The derived Canonical_Combining_Class of the codepoints in this entry.
    pub combining_class: String,
}

/// Parses `extracted/DerivedCombiningClass.txt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedCombiningClassParser;

impl FormatParser for DerivedCombiningClassParser {
    type Record = DerivedCombiningClass;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedCombiningClass, Error> {
        let (codepoints, combining_class) = parse_codepoint_association(fields)?;
        Ok(DerivedCombiningClass { codepoints, combining_class: combining_class.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for DerivedCombiningClassParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedCombiningClass.txt")
    }
}

impl FromStr for DerivedCombiningClass {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedCombiningClass, Error> {
        parse_record_line(&DerivedCombiningClassParser, line)
    }
}
