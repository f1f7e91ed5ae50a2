use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::{parse_codepoint_association, parse_record_line};
use crate::error::Error;
use crate::line::Fields;
use crate::parser::{FormatParser, NoMissing, UcdFile};

/// A single row in the `emoji-data.txt` file.
///
/// The `emoji-data.txt` file is the source of truth on several Emoji-related
/// Unicode properties.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmojiProperty {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The property name assigned to the codepoints in this entry.
    pub property: String,
}

/// Parses `emoji/emoji-data.txt`. Its properties are binary, so it has no
/// default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiPropertiesParser;

impl FormatParser for EmojiPropertiesParser {
    type Record = EmojiProperty;
    type Missing = NoMissing;

    fn parse_record(
        &self,
        fields: &Fields<'_>,
    ) -> Result<EmojiProperty, Error> {
        let (codepoints, property) = parse_codepoint_association(fields)?;
        Ok(EmojiProperty { codepoints, property: property.to_string() })
    }

    fn parse_missing(
        &self,
        _: &Fields<'_>,
    ) -> Result<Option<NoMissing>, Error> {
        Ok(None)
    }
}

impl UcdFile for EmojiPropertiesParser {
    fn relative_file_path() -> &'static Path {
        Path::new("emoji/emoji-data.txt")
    }

    fn file_path<P: AsRef<Path>>(ucd_dir: P) -> PathBuf {
        let ucd_dir = ucd_dir.as_ref();
        // The standard location, but only on UCDs from 13.0.0 and up.
        let std = ucd_dir.join(Self::relative_file_path());
        if std.exists() {
            return std;
        }
        let legacy = ucd_dir.join("emoji-data.txt");
        if legacy.exists() {
            legacy
        } else {
            std
        }
    }
}

impl FromStr for EmojiProperty {
    type Err = Error;

    fn from_str(line: &str) -> Result<EmojiProperty, Error> {
        parse_record_line(&EmojiPropertiesParser, line)
    }
}
