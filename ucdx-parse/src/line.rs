use std::slice;

use crate::codepoint::CodepointRange;
use crate::error::Error;

/// The comment marker that introduces a default value annotation.
///
/// See: https://www.unicode.org/reports/tr44/#Missing_Conventions
const MISSING_MARKER: &str = "@missing:";

/// A single trimmed, semicolon-delimited token from a line in a UCD file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field<'a>(&'a str);

impl<'a> Field<'a> {
    /// Return the text of this field verbatim.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns true if and only if this field contains no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode this field as a codepoint or a codepoint range.
    pub fn codepoints(&self) -> Result<CodepointRange, Error> {
        self.0.parse()
    }

    /// Decode this field as exactly one codepoint.
    ///
    /// A range spanning more than one codepoint is malformed here.
    pub fn codepoint(&self) -> Result<u32, Error> {
        let range = self.codepoints()?;
        if !range.is_single() {
            return Err(Error::malformed_codepoint(self.0));
        }
        Ok(range.from())
    }
}

/// The ordered fields of a single line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fields<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    fn split(text: &'a str) -> Fields<'a> {
        Fields { fields: text.split(';').map(|f| Field(f.trim())).collect() }
    }

    /// Return the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if and only if there are no fields. Fields produced by
    /// `split_line` are never empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return the field at index `i`.
    ///
    /// If the line has no such field, then a structural mismatch error is
    /// returned.
    pub fn get(&self, i: usize) -> Result<Field<'a>, Error> {
        match self.fields.get(i) {
            Some(&field) => Ok(field),
            None => Err(Error::structural_mismatch(i + 1, self.len())),
        }
    }

    /// Return an error if there are fewer than `n` fields.
    pub fn require(&self, n: usize) -> Result<(), Error> {
        if self.len() < n {
            return Err(Error::structural_mismatch(n, self.len()));
        }
        Ok(())
    }

    /// Return every field starting at index `i`. This is empty if `i` is
    /// at or past the end.
    pub fn rest(&self, i: usize) -> &[Field<'a>] {
        self.fields.get(i..).unwrap_or(&[])
    }

    /// Return an iterator over all fields.
    pub fn iter(&self) -> slice::Iter<'_, Field<'a>> {
        self.fields.iter()
    }
}

impl<'a, 'f> IntoIterator for &'f Fields<'a> {
    type IntoIter = slice::Iter<'f, Field<'a>>;
    type Item = &'f Field<'a>;

    fn into_iter(self) -> slice::Iter<'f, Field<'a>> {
        self.fields.iter()
    }
}

/// The result of splitting one line of a UCD file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SplitLine<'a> {
    /// The data fields of the line, if the line has any content before its
    /// comment.
    pub fields: Option<Fields<'a>>,
    /// The fields of an `@missing` annotation, if the line's comment is one.
    pub missing: Option<Fields<'a>>,
}

/// Split a single line from a UCD file into its data fields and the fields
/// of its `@missing` annotation.
///
/// Everything after the first `#` is a comment. Comments are discarded
/// unless they start with `@missing:`, in which case the rest of the comment
/// is split into fields the same way as data.
///
/// Any amount of whitespace may separate the `#` from `@missing:`, so
/// `#@missing:` and `#   @missing:` are accepted as well as the canonical
/// `# @missing:`.
pub fn split_line(line: &str) -> SplitLine<'_> {
    let line = line.trim();
    let (content, comment) = match line.find('#') {
        Some(i) => (line[..i].trim(), Some(&line[i + 1..])),
        None => (line, None),
    };
    let fields = if content.is_empty() {
        None
    } else {
        Some(Fields::split(content))
    };
    let missing = comment
        .and_then(|c| c.trim_start().strip_prefix(MISSING_MARKER))
        .map(Fields::split);
    SplitLine { fields, missing }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    use super::{split_line, Field, Fields};

    fn strs<'a>(fields: &Fields<'a>) -> Vec<&'a str> {
        fields.iter().map(|f| f.as_str()).collect()
    }

    #[test]
    fn blank_and_comment_lines() {
        for line in &[
            "",
            "   \t",
            "# PropertyValueAliases-15.0.0.txt",
            "   # indented comment",
            "#",
            "# missing: 0000..10FFFF; Unknown",
            "# Note that @missing: is only special at the start",
        ] {
            let split = split_line(line);
            assert_eq!(split.fields, None, "line: {:?}", line);
            assert_eq!(split.missing, None, "line: {:?}", line);
        }
    }

    #[test]
    fn data_line_with_comment() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061; # comment";
        let split = split_line(line);
        assert_eq!(
            strs(&split.fields.unwrap()),
            vec![
                "0041",
                "LATIN CAPITAL LETTER A",
                "Lu",
                "0",
                "L",
                "",
                "",
                "",
                "",
                "N",
                "",
                "",
                "",
                "0061",
                "",
            ]
        );
        assert_eq!(split.missing, None);
    }

    #[test]
    fn data_line_trims_fields() {
        let split = split_line("  1F1E6..1F1FF  ; Regional_Indicator # So\r");
        assert_eq!(
            strs(&split.fields.unwrap()),
            vec!["1F1E6..1F1FF", "Regional_Indicator"]
        );
    }

    #[test]
    fn missing_line() {
        let split = split_line("# @missing: 0000..10FFFF; NFD_QC; Yes");
        assert_eq!(split.fields, None);
        assert_eq!(
            strs(&split.missing.unwrap()),
            vec!["0000..10FFFF", "NFD_QC", "Yes"]
        );
    }

    #[test]
    fn missing_line_without_space() {
        for line in &[
            "#@missing: 0000..10FFFF; Unknown",
            "#   @missing: 0000..10FFFF; Unknown",
            "#\t@missing: 0000..10FFFF; Unknown",
        ] {
            let split = split_line(line);
            assert_eq!(
                strs(&split.missing.unwrap()),
                vec!["0000..10FFFF", "Unknown"]
            );
        }
    }

    #[test]
    fn data_and_missing_on_one_line() {
        let split = split_line("0041; Latin # @missing: 0000..10FFFF; Zzzz");
        assert_eq!(strs(&split.fields.unwrap()), vec!["0041", "Latin"]);
        assert_eq!(
            strs(&split.missing.unwrap()),
            vec!["0000..10FFFF", "Zzzz"]
        );
    }

    #[test]
    fn comment_starts_at_first_hash() {
        let split = split_line("0023; NUMBER SIGN # # @missing: 0; X");
        assert_eq!(strs(&split.fields.unwrap()), vec!["0023", "NUMBER SIGN"]);
        assert_eq!(split.missing, None);
    }

    #[test]
    fn get_and_rest() {
        let split = split_line("sc ; Zyyy ; Common ; Zinh");
        let fields = split.fields.unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get(1).unwrap(), Field("Zyyy"));
        assert_eq!(fields.rest(3), &[Field("Zinh")][..]);
        assert!(fields.rest(4).is_empty());
        assert!(fields.rest(9).is_empty());

        let err = fields.get(4).unwrap_err();
        match *err.kind() {
            ErrorKind::StructuralMismatch { expected, found } => {
                assert_eq!((expected, found), (5, 4));
            }
            ref kind => panic!("unexpected error kind: {:?}", kind),
        }
        assert!(fields.require(4).is_ok());
        assert!(fields.require(5).is_err());
    }

    #[test]
    fn field_codepoints() {
        let split = split_line("0041..005A; 00C0; XYZ");
        let fields = split.fields.unwrap();
        assert_eq!(fields.get(0).unwrap().codepoints().unwrap(), (0x41, 0x5A));
        assert_eq!(fields.get(1).unwrap().codepoint().unwrap(), 0xC0);
        assert!(fields.get(0).unwrap().codepoint().is_err());
        assert!(fields.get(2).unwrap().codepoints().is_err());
    }
}
