use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::codepoint::CodepointRange;
use crate::common::parse_record_line;
use crate::error::Error;
use crate::line::{Field, Fields};
use crate::parser::{FormatParser, NoMissing, UcdFile};

/// Represents a single row in the `UnicodeData.txt` file.
///
/// These fields were taken from UAX44, Table 9, as part of the documentation
/// for the
/// [`UnicodeData.txt` file](https://www.unicode.org/reports/tr44/#UnicodeData.txt).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeData {
    /// The codepoint corresponding to this row.
    pub codepoint: u32,
    /// The name of this codepoint.
    pub name: String,
    /// The "general category" of this codepoint.
    pub general_category: String,
    /// The class of this codepoint used in the Canonical Ordering Algorithm.
    ///
    /// Note that some classes map to a particular symbol. See
    /// [UAX44, Table 15](https://www.unicode.org/reports/tr44/#Canonical_Combining_Class_Values).
    pub canonical_combining_class: u8,
    /// The bidirectional class of this codepoint.
    pub bidi_class: String,
    /// The decomposition mapping of this codepoint, verbatim. It is empty if
    /// the codepoint has no decomposition.
    pub decomposition: String,
    /// A decimal numeric representation of this codepoint, if it has the
    /// property `Numeric_Type=Decimal`.
    pub numeric_type_decimal: Option<u8>,
    /// A decimal numeric representation of this codepoint, if it has the
    /// property `Numeric_Type=Digit`.
    pub numeric_type_digit: Option<u8>,
    /// A numeric value of this codepoint, if it has the property
    /// `Numeric_Type=Numeric`. This may be a fraction such as `1/4`.
    pub numeric_type_numeric: Option<String>,
    /// A boolean indicating whether this codepoint is "mirrored" in
    /// bidirectional text.
    pub bidi_mirrored: bool,
    /// The "old" Unicode 1.0 or ISO 6429 name of this codepoint.
    pub unicode1_name: String,
    /// The ISO 10464 comment field. This no longer contains any non-NULL
    /// values.
    pub iso_comment: String,
    /// This codepoint's simple uppercase mapping, if it exists.
    pub simple_uppercase_mapping: Option<u32>,
    /// This codepoint's simple lowercase mapping, if it exists.
    pub simple_lowercase_mapping: Option<u32>,
    /// This codepoint's simple titlecase mapping, if it exists.
    pub simple_titlecase_mapping: Option<u32>,
}

impl UnicodeData {
    /// Returns true if and only if this record corresponds to the start of a
    /// range.
    pub fn is_range_start(&self) -> bool {
        self.name.starts_with('<') && self.name.ends_with(", First>")
    }

    /// Returns true if and only if this record corresponds to the end of a
    /// range.
    pub fn is_range_end(&self) -> bool {
        self.name.starts_with('<') && self.name.ends_with(", Last>")
    }
}

/// Parses `UnicodeData.txt`, which has no default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeDataParser;

impl FormatParser for UnicodeDataParser {
    type Record = UnicodeData;
    type Missing = NoMissing;

    fn parse_record(&self, fields: &Fields<'_>) -> Result<UnicodeData, Error> {
        fields.require(15)?;
        let ccc = fields.get(3)?.as_str();
        let canonical_combining_class = match ccc.parse::<u8>() {
            Ok(ccc) => ccc,
            Err(err) => {
                return err!(
                    "failed to parse canonical combining class '{}': {}",
                    ccc,
                    err
                )
            }
        };
        let bidi_mirrored = match fields.get(9)?.as_str() {
            "Y" => true,
            "N" => false,
            x => return err!("invalid bidi mirrored value: '{}'", x),
        };
        Ok(UnicodeData {
            codepoint: fields.get(0)?.codepoint()?,
            name: fields.get(1)?.as_str().to_string(),
            general_category: fields.get(2)?.as_str().to_string(),
            canonical_combining_class,
            bidi_class: fields.get(4)?.as_str().to_string(),
            decomposition: fields.get(5)?.as_str().to_string(),
            numeric_type_decimal: parse_digit(fields.get(6)?)?,
            numeric_type_digit: parse_digit(fields.get(7)?)?,
            numeric_type_numeric: non_empty(fields.get(8)?),
            bidi_mirrored,
            unicode1_name: fields.get(10)?.as_str().to_string(),
            iso_comment: fields.get(11)?.as_str().to_string(),
            simple_uppercase_mapping: parse_mapping(fields.get(12)?)?,
            simple_lowercase_mapping: parse_mapping(fields.get(13)?)?,
            simple_titlecase_mapping: parse_mapping(fields.get(14)?)?,
        })
    }

    fn parse_missing(
        &self,
        _: &Fields<'_>,
    ) -> Result<Option<NoMissing>, Error> {
        Ok(None)
    }
}

impl UcdFile for UnicodeDataParser {
    fn relative_file_path() -> &'static Path {
        Path::new("UnicodeData.txt")
    }
}

fn parse_digit(field: Field<'_>) -> Result<Option<u8>, Error> {
    if field.is_empty() {
        return Ok(None);
    }
    match field.as_str().parse::<u8>() {
        Ok(n) => Ok(Some(n)),
        Err(err) => {
            err!("failed to parse digit '{}': {}", field.as_str(), err)
        }
    }
}

fn parse_mapping(field: Field<'_>) -> Result<Option<u32>, Error> {
    if field.is_empty() {
        return Ok(None);
    }
    field.codepoint().map(Some)
}

fn non_empty(field: Field<'_>) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.as_str().to_string())
    }
}

impl FromStr for UnicodeData {
    type Err = Error;

    fn from_str(line: &str) -> Result<UnicodeData, Error> {
        parse_record_line(&UnicodeDataParser, line)
    }
}

impl fmt::Display for UnicodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(x: &Option<T>) -> String {
            x.as_ref().map(|x| x.to_string()).unwrap_or_default()
        }
        fn hex(x: &Option<u32>) -> String {
            x.map(|x| format!("{:04X}", x)).unwrap_or_default()
        }

        write!(f, "{:04X};", self.codepoint)?;
        write!(f, "{};", self.name)?;
        write!(f, "{};", self.general_category)?;
        write!(f, "{};", self.canonical_combining_class)?;
        write!(f, "{};", self.bidi_class)?;
        write!(f, "{};", self.decomposition)?;
        write!(f, "{};", opt(&self.numeric_type_decimal))?;
        write!(f, "{};", opt(&self.numeric_type_digit))?;
        write!(f, "{};", opt(&self.numeric_type_numeric))?;
        write!(f, "{};", if self.bidi_mirrored { "Y" } else { "N" })?;
        write!(f, "{};", self.unicode1_name)?;
        write!(f, "{};", self.iso_comment)?;
        write!(f, "{};", hex(&self.simple_uppercase_mapping))?;
        write!(f, "{};", hex(&self.simple_lowercase_mapping))?;
        write!(f, "{}", hex(&self.simple_titlecase_mapping))?;
        Ok(())
    }
}

/// A contiguous run of codepoints described by `UnicodeData.txt`.
///
/// Most rows describe a single codepoint. Large blocks of codepoints with
/// identical properties are instead described by a pair of rows whose names
/// end with `, First>` and `, Last>`. A range folds such a pair into one
/// entry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeDataRange {
    /// The codepoints described by this entry.
    pub codepoints: CodepointRange,
    /// The name of this entry. For a folded pair, this is the shared label,
    /// e.g., `<CJK Ideograph Extension A>`.
    pub name: String,
    /// The "general category" of every codepoint in this entry.
    pub general_category: String,
}

/// An iterator that folds `First`/`Last` pairs of `UnicodeData` rows into
/// single `UnicodeDataRange` entries.
#[derive(Debug)]
pub struct UnicodeDataRanges<I> {
    it: I,
}

impl<I: Iterator<Item = UnicodeData>> UnicodeDataRanges<I> {
    /// Create a new iterator over the given rows, in file order.
    pub fn new<T>(rows: T) -> UnicodeDataRanges<I>
    where
        T: IntoIterator<IntoIter = I, Item = UnicodeData>,
    {
        UnicodeDataRanges { it: rows.into_iter() }
    }
}

impl<I: Iterator<Item = UnicodeData>> Iterator for UnicodeDataRanges<I> {
    type Item = Result<UnicodeDataRange, Error>;

    fn next(&mut self) -> Option<Result<UnicodeDataRange, Error>> {
        let first = self.it.next()?;
        if !first.is_range_start() {
            let codepoints =
                match CodepointRange::new(first.codepoint, first.codepoint) {
                    Ok(codepoints) => codepoints,
                    Err(err) => return Some(Err(err)),
                };
            return Some(Ok(UnicodeDataRange {
                codepoints,
                name: first.name,
                general_category: first.general_category,
            }));
        }
        let last = match self.it.next() {
            Some(last) if last.is_range_end() => last,
            _ => {
                return Some(err!(
                    "expected range end after range start {:04X} '{}'",
                    first.codepoint,
                    first.name
                ))
            }
        };
        let codepoints = match CodepointRange::new(first.codepoint, last.codepoint)
        {
            Ok(codepoints) => codepoints,
            Err(err) => return Some(Err(err)),
        };
        let label = &first.name[..first.name.len() - ", First>".len()];
        Some(Ok(UnicodeDataRange {
            codepoints,
            name: format!("{}>", label),
            general_category: first.general_category,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{UnicodeData, UnicodeDataRanges};

    fn s(string: &str) -> String {
        string.to_string()
    }

    #[test]
    fn parse1() {
        let line = "249D;PARENTHESIZED LATIN SMALL LETTER B;So;0;L;<compat> 0028 0062 0029;;;;N;;;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(
            data,
            UnicodeData {
                codepoint: 0x249d,
                name: s("PARENTHESIZED LATIN SMALL LETTER B"),
                general_category: s("So"),
                canonical_combining_class: 0,
                bidi_class: s("L"),
                decomposition: s("<compat> 0028 0062 0029"),
                numeric_type_decimal: None,
                numeric_type_digit: None,
                numeric_type_numeric: None,
                bidi_mirrored: false,
                unicode1_name: s(""),
                iso_comment: s(""),
                simple_uppercase_mapping: None,
                simple_lowercase_mapping: None,
                simple_titlecase_mapping: None,
            }
        )
    }

    #[test]
    fn parse2() {
        let line = "000D;<control>;Cc;0;B;;;;;N;CARRIAGE RETURN (CR);;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(
            data,
            UnicodeData {
                codepoint: 0x000D,
                name: s("<control>"),
                general_category: s("Cc"),
                canonical_combining_class: 0,
                bidi_class: s("B"),
                decomposition: s(""),
                numeric_type_decimal: None,
                numeric_type_digit: None,
                numeric_type_numeric: None,
                bidi_mirrored: false,
                unicode1_name: s("CARRIAGE RETURN (CR)"),
                iso_comment: s(""),
                simple_uppercase_mapping: None,
                simple_lowercase_mapping: None,
                simple_titlecase_mapping: None,
            }
        )
    }

    #[test]
    fn parse3() {
        let line = "00BC;VULGAR FRACTION ONE QUARTER;No;0;ON;<fraction> 0031 2044 0034;;;1/4;N;FRACTION ONE QUARTER;;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(data.numeric_type_numeric.as_deref(), Some("1/4"));
        assert_eq!(data.unicode1_name, "FRACTION ONE QUARTER");
    }

    #[test]
    fn parse4() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(data.codepoint, 0x41);
        assert_eq!(data.general_category, "Lu");
        assert_eq!(data.simple_lowercase_mapping, Some(0x61));
        assert_eq!(data.simple_uppercase_mapping, None);
    }

    #[test]
    fn parse5() {
        let line = "0039;DIGIT NINE;Nd;0;EN;;9;9;9;N;;;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(data.numeric_type_decimal, Some(9));
        assert_eq!(data.numeric_type_digit, Some(9));
        assert_eq!(data.numeric_type_numeric.as_deref(), Some("9"));
    }

    #[test]
    fn parse_mirrored_and_ccc() {
        let line = "0F39;TIBETAN MARK TSA -PHRU;Mn;216;NSM;;;;;N;;;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert_eq!(data.canonical_combining_class, 216);
        assert!(!data.bidi_mirrored);

        let line = "0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;\n";
        let data: UnicodeData = line.parse().unwrap();
        assert!(data.bidi_mirrored);
    }

    #[test]
    fn parse_invalid() {
        // Too few fields.
        assert!("0041;LATIN CAPITAL LETTER A;Lu;0;L".parse::<UnicodeData>().is_err());
        // Ranges are not allowed in the codepoint column.
        assert!("0041..0042;A;Lu;0;L;;;;;N;;;;;".parse::<UnicodeData>().is_err());
        // Bad combining class.
        assert!("0041;A;Lu;x;L;;;;;N;;;;;".parse::<UnicodeData>().is_err());
        // Bad mirrored flag.
        assert!("0041;A;Lu;0;L;;;;;Q;;;;;".parse::<UnicodeData>().is_err());
    }

    #[test]
    fn display_round_trip() {
        let lines = [
            "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;",
            "00BC;VULGAR FRACTION ONE QUARTER;No;0;ON;<fraction> 0031 2044 0034;;;1/4;N;FRACTION ONE QUARTER;;;;",
            "0039;DIGIT NINE;Nd;0;EN;;9;9;9;N;;;;;",
        ];
        for line in &lines {
            let data: UnicodeData = line.parse().unwrap();
            assert_eq!(data.to_string(), *line);
        }
    }

    #[test]
    fn ranges() {
        let rows: Vec<UnicodeData> = vec![
            "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;",
            "4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;",
            "4DC0;HEXAGRAM FOR THE CREATIVE HEAVEN;So;0;ON;;;;;N;;;;;",
        ]
        .into_iter()
        .map(|line| line.parse().unwrap())
        .collect();
        assert!(rows[0].is_range_start());
        assert!(rows[1].is_range_end());

        let ranges: Vec<_> = UnicodeDataRanges::new(rows)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].codepoints, (0x3400, 0x4DBF));
        assert_eq!(ranges[0].name, "<CJK Ideograph Extension A>");
        assert_eq!(ranges[0].general_category, "Lo");
        assert_eq!(ranges[1].codepoints, 0x4DC0);
        assert_eq!(ranges[1].name, "HEXAGRAM FOR THE CREATIVE HEAVEN");
    }

    #[test]
    fn ranges_unterminated() {
        let rows: Vec<UnicodeData> = vec![
            "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;",
            "4DC0;HEXAGRAM FOR THE CREATIVE HEAVEN;So;0;ON;;;;;N;;;;;",
        ]
        .into_iter()
        .map(|line| line.parse().unwrap())
        .collect();
        let mut it = UnicodeDataRanges::new(rows);
        assert!(it.next().unwrap().is_err());
    }
}
