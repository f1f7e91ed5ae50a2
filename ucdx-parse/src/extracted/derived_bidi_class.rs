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

/// A single row in the `extracted/DerivedBidiClass.txt` file.
///
/// This file gives the derived values of the Bidi_Class property.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedBidiClass {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The derived Bidi_Class of the codepoints in this entry.
    pub bidi_class: String,
}

/// Parses `extracted/DerivedBidiClass.txt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedBidiClassParser;

impl FormatParser for DerivedBidiClassParser {
    type Record = DerivedBidiClass;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<DerivedBidiClass, Error> {
        let (codepoints, bidi_class) = parse_codepoint_association(fields)?;
        Ok(DerivedBidiClass { codepoints, bidi_class: bidi_class.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for DerivedBidiClassParser {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedBidiClass.txt")
    }
}

impl FromStr for DerivedBidiClass {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedBidiClass, Error> {
        parse_record_line(&DerivedBidiClassParser, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    use super::{DerivedBidiClass, DerivedBidiClassParser};

    #[test]
    fn parse_single() {
        let line = "00B5          ; L # L&       MICRO SIGN\n";
        let row: DerivedBidiClass = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x00B5);
        assert_eq!(row.bidi_class, "L");
    }

    #[test]
    fn parse_range() {
        let line = "0030..0039    ; EN # Nd  [10] DIGIT ZERO..DIGIT NINE\n";
        let row: DerivedBidiClass = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x0030, 0x0039));
        assert_eq!(row.bidi_class, "EN");
    }

    #[test]
    fn parse_defaults_in_order() {
        let data = "\
# @missing: 0000..10FFFF; Left_To_Right
# @missing: 0590..05FF; Right_To_Left
# @missing: 0600..07BF; Arabic_Letter

0041..005A    ; L # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
";
        let file = parse(data.as_bytes(), &DerivedBidiClassParser).unwrap();
        assert_eq!(file.records.len(), 1);
        let values: Vec<&str> =
            file.defaults.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Left_To_Right", "Right_To_Left", "Arabic_Letter"]
        );
        assert_eq!(file.defaults[1].codepoints, (0x0590, 0x05FF));
    }
}
