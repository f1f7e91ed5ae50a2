use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{parse_codepoint_association, parse_record_line};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, NoMissing, UcdFile};

/// A single row in the `PropList.txt` file.
///
/// The `PropList.txt` file is the source of truth on several binary
/// properties, e.g., `White_Space` and `Dash`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The property name assigned to the codepoints in this entry.
    pub property: String,
}

/// Parses `PropList.txt`. Binary properties have no default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropListParser;

impl FormatParser for PropListParser {
    type Record = Property;
    type Missing = NoMissing;

    fn parse_record(&self, fields: &Fields<'_>) -> Result<Property, Error> {
        let (codepoints, property) = parse_codepoint_association(fields)?;
        Ok(Property { codepoints, property: property.to_string() })
    }

    fn parse_missing(
        &self,
        _: &Fields<'_>,
    ) -> Result<Option<NoMissing>, Error> {
        Ok(None)
    }
}

impl UcdFile for PropListParser {
    fn relative_file_path() -> &'static Path {
        Path::new("PropList.txt")
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(line: &str) -> Result<Property, Error> {
        parse_record_line(&PropListParser, line)
    }
}

#[cfg(test)]
mod tests {
    use super::Property;

    #[test]
    fn parse_single() {
        let line =
            "061C          ; Bidi_Control # Cf       ARABIC LETTER MARK\n";
        let row: Property = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x061C);
        assert_eq!(row.property, "Bidi_Control");
    }

    #[test]
    fn parse_range() {
        let line = "0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>\n";
        let row: Property = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x0009, 0x000D));
        assert_eq!(row.property, "White_Space");
    }
}
