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

/// A single row in the `Scripts.txt` file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The script name assigned to the codepoints in this entry.
    pub script: String,
}

/// Parses `Scripts.txt`.
///
/// Codepoints not listed default to the script in the file's `@missing`
/// annotation, which is `Unknown`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptsParser;

impl FormatParser for ScriptsParser {
    type Record = Script;
    type Missing = MissingValue;

    fn parse_record(&self, fields: &Fields<'_>) -> Result<Script, Error> {
        let (codepoints, script) = parse_codepoint_association(fields)?;
        Ok(Script { codepoints, script: script.to_string() })
    }

    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<MissingValue>, Error> {
        parse_missing_value(fields)
    }
}

impl UcdFile for ScriptsParser {
    fn relative_file_path() -> &'static Path {
        Path::new("Scripts.txt")
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(line: &str) -> Result<Script, Error> {
        parse_record_line(&ScriptsParser, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    use super::{Script, ScriptsParser};

    #[test]
    fn parse_single() {
        let line = "10A7F         ; Old_South_Arabian # Po       OLD SOUTH ARABIAN NUMERIC INDICATOR\n";
        let row: Script = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x10A7F);
        assert_eq!(row.script, "Old_South_Arabian");
    }

    #[test]
    fn parse_range() {
        let line = "1200..1248    ; Ethiopic # Lo  [73] ETHIOPIC SYLLABLE HA..ETHIOPIC SYLLABLE QWA\n";
        let row: Script = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x1200, 0x1248));
        assert_eq!(row.script, "Ethiopic");
    }

    #[test]
    fn parse_malformed_codepoint() {
        let line = "12G0..1248    ; Ethiopic\n";
        assert!(line.parse::<Script>().is_err());
    }

    #[test]
    fn parse_file() {
        let data = "\
# Scripts-15.0.0.txt

# @missing: 0000..10FFFF; Unknown

0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
0020          ; Common # Zs       SPACE

# Total code points: 8301

0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
";
        let file = parse(data.as_bytes(), &ScriptsParser).unwrap();
        assert_eq!(file.records.len(), 3);
        assert_eq!(file.records[0].codepoints, (0x0000, 0x001F));
        assert_eq!(file.records[1].codepoints, 0x0020);
        assert_eq!(file.records[2].script, "Latin");
        assert_eq!(file.defaults.len(), 1);
        assert_eq!(file.defaults[0].codepoints, (0, 0x10FFFF));
        assert_eq!(file.defaults[0].value, "Unknown");
    }
}
