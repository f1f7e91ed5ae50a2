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

/// A single row in the `auxiliary/GraphemeBreakProperty.txt` file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphemeClusterBreak {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The Grapheme_Cluster_Break value assigned to the codepoints in this entry.
    pub value: String,
}

/// Parses `auxiliary/GraphemeBreakProperty.txt`.
///
/// Unlisted codepoints default to `Other`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphemeClusterBreakParser;

impl FormatParser for GraphemeClusterBreakParser {
    type Record = GraphemeClusterBreak;
    type Missing = MissingValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<GraphemeClusterBreak, Error> {
        let (codepoints, value) = parse_codepoint_association(fields)?;
        Ok(GraphemeClusterBreak { codepoints, value: value.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for GraphemeClusterBreakParser {
    fn relative_file_path() -> &'static Path {
        Path::new("auxiliary/GraphemeBreakProperty.txt")
    }
}

impl FromStr for GraphemeClusterBreak {
    type Err = Error;

    fn from_str(line: &str) -> Result<GraphemeClusterBreak, Error> {
        parse_record_line(&GraphemeClusterBreakParser, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    use super::{GraphemeClusterBreak, GraphemeClusterBreakParser};

    #[test]
    fn parse_single() {
        let line = "093B          ; SpacingMark # Mc       DEVANAGARI VOWEL SIGN OOE\n";
        let row: GraphemeClusterBreak = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x093B);
        assert_eq!(row.value, "SpacingMark");
    }

    #[test]
    fn parse_range() {
        let line = "1F1E6..1F1FF  ; Regional_Indicator # So  [26] REGIONAL INDICATOR SYMBOL LETTER A..REGIONAL INDICATOR SYMBOL LETTER Z\n";
        let row: GraphemeClusterBreak = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x1F1E6, 0x1F1FF));
        assert_eq!(row.value, "Regional_Indicator");
    }

    #[test]
    fn parse_default() {
        let data = "#  @missing: 0000..10FFFF; Other\n";
        let file = parse(data.as_bytes(), &GraphemeClusterBreakParser).unwrap();
        assert!(file.records.is_empty());
        assert_eq!(file.defaults[0].value, "Other");
    }
}
