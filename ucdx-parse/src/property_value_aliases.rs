use std::path::Path;
use std::str::FromStr;

use crate::common::{
    parse_missing_property_value, parse_record_line, MissingPropertyValue,
};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, UcdFile};

/// A single row in the `PropertyValueAliases.txt` file.
///
/// The first field is the abbreviated alias of a property, the second field
/// is the abbreviated name of one of its values and the third field is the
/// long name of that value. Any further fields are additional aliases.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyValueAlias {
    /// The property name for which this value alias applies.
    pub property: String,
    /// The abbreviated name of this property value.
    pub abbreviation: String,
    /// The "long" name of this property value.
    pub long: String,
    /// Additional value aliases (if present), in file order.
    pub aliases: Vec<String>,
}

/// Parses `PropertyValueAliases.txt`.
///
/// Its `@missing` annotations name the property they apply to, e.g.,
/// `# @missing: 0000..10FFFF; NFD_QC; Yes`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyValueAliasesParser;

impl FormatParser for PropertyValueAliasesParser {
    type Record = PropertyValueAlias;
    type Missing = MissingPropertyValue;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<PropertyValueAlias, Error> {
        fields.require(3)?;
        Ok(PropertyValueAlias {
            property: fields.get(0)?.as_str().to_string(),
            abbreviation: fields.get(1)?.as_str().to_string(),
            long: fields.get(2)?.as_str().to_string(),
            aliases: fields
                .rest(3)
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
        })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingPropertyValue>, Error> {
        parse_missing_property_value(fields)
    }
}

impl UcdFile for PropertyValueAliasesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("PropertyValueAliases.txt")
    }
}

impl FromStr for PropertyValueAlias {
    type Err = Error;

    fn from_str(line: &str) -> Result<PropertyValueAlias, Error> {
        parse_record_line(&PropertyValueAliasesParser, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    use super::PropertyValueAlias;

    fn s(string: &str) -> String {
        string.to_string()
    }

    #[test]
    fn parse1() {
        let line = "blk; Arabic_PF_A                      ; Arabic_Presentation_Forms_A      ; Arabic_Presentation_Forms-A\n";
        let row: PropertyValueAlias = line.parse().unwrap();
        assert_eq!(
            row,
            PropertyValueAlias {
                property: s("blk"),
                abbreviation: s("Arabic_PF_A"),
                long: s("Arabic_Presentation_Forms_A"),
                aliases: vec![s("Arabic_Presentation_Forms-A")],
            }
        );
    }

    #[test]
    fn parse2() {
        let line = "AHex; N                               ; No                               ; F                                ; False\n";
        let row: PropertyValueAlias = line.parse().unwrap();
        assert_eq!(
            row,
            PropertyValueAlias {
                property: s("AHex"),
                abbreviation: s("N"),
                long: s("No"),
                aliases: vec![s("F"), s("False")],
            }
        );
    }

    #[test]
    fn parse3() {
        let line = "age; 1.1                              ; V1_1\n";
        let row: PropertyValueAlias = line.parse().unwrap();
        assert_eq!(
            row,
            PropertyValueAlias {
                property: s("age"),
                abbreviation: s("1.1"),
                long: s("V1_1"),
                aliases: vec![],
            }
        );
    }

    #[test]
    fn parse4() {
        let line = "ccc;   0; NR                         ; Not_Reordered\n";
        let row: PropertyValueAlias = line.parse().unwrap();
        assert_eq!(
            row,
            PropertyValueAlias {
                property: s("ccc"),
                abbreviation: s("0"),
                long: s("NR"),
                aliases: vec![s("Not_Reordered")],
            }
        );
    }

    #[test]
    fn parse_too_few_fields() {
        let err = "sc ; Zyyy".parse::<PropertyValueAlias>().unwrap_err();
        match *err.kind() {
            ErrorKind::StructuralMismatch { expected, found } => {
                assert_eq!((expected, found), (3, 2));
            }
            ref kind => panic!("unexpected error kind: {:?}", kind),
        }
    }

    #[test]
    fn parse_comment_only() {
        assert!("# Bidi_Class (bc)".parse::<PropertyValueAlias>().is_err());
    }
}
