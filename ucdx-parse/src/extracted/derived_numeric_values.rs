use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{parse_missing_value, parse_record_line, MissingValue};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, UcdFile};

/// A single row in the `extracted/DerivedNumericValues.txt` file.
///
/// This file gives the derived values of the Numeric_Value property. Its
/// third column is always empty.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedNumericValues {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The approximate Numeric_Value of the codepoints in this entry,
    /// as a decimal.
    pub numeric_value_decimal: String,
    /// The exact Numeric_Value of the codepoints in this entry, as
    /// a fraction.
    pub numeric_value_fraction: String,
}

/// Parses `extracted/DerivedNumericValues.txt`. Unlisted codepoints have
/// the value `NaN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedNumericValuesParser;

impl FormatParser for DerivedNumericValuesParser {
    type Record = DerivedNumericValues;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedNumericValues, Error> {
        fields.require(4)?;
        Ok(DerivedNumericValues {
            codepoints: fields.get(0)?.codepoints()?,
            numeric_value_decimal: fields.get(1)?.as_str().to_string(),
            numeric_value_fraction: fields.get(3)?.as_str().to_string(),
        })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for DerivedNumericValuesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedNumericValues.txt")
    }
}

impl FromStr for DerivedNumericValues {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedNumericValues, Error> {
        parse_record_line(&DerivedNumericValuesParser, line)
    }
}

#[cfg(test)]
mod tests {
    use super::DerivedNumericValues;

    #[test]
    fn parse_single() {
        let line = "0030          ; 0.0 ; ; 0 # Nd       DIGIT ZERO\n";
        let row: DerivedNumericValues = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x0030);
        assert_eq!(row.numeric_value_decimal, "0.0");
        assert_eq!(row.numeric_value_fraction, "0");
    }

    #[test]
    fn parse_range() {
        let line = "11FC9..11FCA  ; 0.0625 ; ; 1/16 # No   [2] TAMIL FRACTION ONE SIXTEENTH-1..TAMIL FRACTION ONE SIXTEENTH-2\n";
        let row: DerivedNumericValues = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x11FC9, 0x11FCA));
        assert_eq!(row.numeric_value_decimal, "0.0625");
        assert_eq!(row.numeric_value_fraction, "1/16");
    }

    #[test]
    fn parse_missing_fraction_column() {
        assert!("0030 ; 0.0 ;".parse::<DerivedNumericValues>().is_err());
    }
}
