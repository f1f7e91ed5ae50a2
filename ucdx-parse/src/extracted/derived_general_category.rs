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

/// A single row in the `extracted/DerivedGeneralCategory.txt` file.
///
/// This file gives the derived values of the General_Category property.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedGeneralCategory {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The derived General_Category of the codepoints in this entry.
    pub general_category: String,
}

/// Parses `extracted/DerivedGeneralCategory.txt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedGeneralCategoryParser;

impl FormatParser for DerivedGeneralCategoryParser {
    type Record = DerivedGeneralCategory;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedGeneralCategory, Error> {
        let (codepoints, general_category) = parse_codepoint_association(fields)?;
        Ok(DerivedGeneralCategory { codepoints, general_category: general_category.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for DerivedGeneralCategoryParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedGeneralCategory.txt")
    }
}

impl FromStr for DerivedGeneralCategory {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedGeneralCategory, Error> {
        parse_record_line(&DerivedGeneralCategoryParser, line)
    }
}
