use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{
    parse_missing_property_value, parse_record_line, MissingPropertyValue,
};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, UcdFile};

/// A single row in the `DerivedNormalizationProps.txt` file.
///
/// Binary properties such as `Full_Composition_Exclusion` have no value
/// column. Quick check properties such as `NFC_QC` and mappings such as
/// `NFKC_CF` do.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedNormalizationProperty {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The property name assigned to the codepoints in this entry.
    pub property: String,
    /// The property value, if the property is not binary.
    ///
    /// For mappings, this is the raw mapping text and may be empty, which
    /// means the codepoint maps to nothing.
    pub value: Option<String>,
}

/// Parses `DerivedNormalizationProps.txt`.
///
/// Like `PropertyValueAliases.txt`, it describes many properties, so its
/// `@missing` annotations name the property they apply to.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedNormalizationPropertiesParser;

impl FormatParser for DerivedNormalizationPropertiesParser {
    type Record = DerivedNormalizationProperty;
    type Missing = MissingPropertyValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedNormalizationProperty, Error> {
        fields.require(2)?;
        let value = match fields.len() {
            2 => None,
            _ => Some(fields.get(2)?.as_str().to_string()),
        };
        Ok(DerivedNormalizationProperty {
            codepoints: fields.get(0)?.codepoints()?,
            property: fields.get(1)?.as_str().to_string(),
            value,
        })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingPropertyValue>, Error> {
        parse_missing_property_value(fields)
    }
}

impl UcdFile for DerivedNormalizationPropertiesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("DerivedNormalizationProps.txt")
    }
}

impl FromStr for DerivedNormalizationProperty {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedNormalizationProperty, Error> {
        parse_record_line(&DerivedNormalizationPropertiesParser, line)
    }
}
