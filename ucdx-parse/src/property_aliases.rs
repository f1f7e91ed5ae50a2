use std::path::Path;
use std::str::FromStr;

use crate::common::parse_record_line;
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, NoMissing, UcdFile};

/// A single row in the `PropertyAliases.txt` file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyAlias {
    /// An abbreviation for this property.
    pub abbreviation: String,
    /// The "long" name of this property.
    pub long: String,
    /// Additional aliases (if present).
    pub aliases: Vec<String>,
}

/// Parses `PropertyAliases.txt`, which has no default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyAliasesParser;

impl FormatParser for PropertyAliasesParser {
    type Record = PropertyAlias;
    type Missing = NoMissing;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<PropertyAlias, Error> {
        fields.require(2)?;
        Ok(PropertyAlias {
            abbreviation: fields.get(0)?.as_str().to_string(),
            long: fields.get(1)?.as_str().to_string(),
            aliases: fields
                .rest(2)
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
        })
    }

    fn parse_missing(
        &self,
        _: &Fields<'_>,
    ) -> Result<Option<NoMissing>, Error> {
        Ok(None)
    }
}

impl UcdFile for PropertyAliasesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("PropertyAliases.txt")
    }
}

impl FromStr for PropertyAlias {
    type Err = Error;

    fn from_str(line: &str) -> Result<PropertyAlias, Error> {
        parse_record_line(&PropertyAliasesParser, line)
    }
}
