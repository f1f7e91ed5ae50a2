use crate::codepoint::CodepointRange;
use crate::error::Error;
use crate::line::{split_line, Fields};
use crate::parser::FormatParser;

/// A default value for a range of codepoints, from an `@missing` annotation
/// of the form `range; value`.
///
/// This is the form used by files that describe a single property, e.g.,
/// `# @missing: 0000..10FFFF; Unknown` in `Scripts.txt`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingValue {
    /// The codepoints that default to `value`.
    pub codepoints: CodepointRange,
    /// The default property value.
    pub value: String,
}

/// A default value of a named property for a range of codepoints, from an
/// `@missing` annotation of the form `range; property; value`.
///
/// This is the form used by files that describe many properties, e.g.,
/// `# @missing: 0000..10FFFF; NFD_QC; Yes`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingPropertyValue {
    /// The codepoints that default to `value`.
    pub codepoints: CodepointRange,
    /// The name of the property.
    pub property: String,
    /// The default property value.
    pub value: String,
}

/// Parse a line of the form `range; value`, which is shared by many UCD
/// files. Any fields after the second are ignored.
pub(crate) fn parse_codepoint_association<'a>(
    fields: &Fields<'a>,
) -> Result<(CodepointRange, &'a str), Error> {
    fields.require(2)?;
    Ok((fields.get(0)?.codepoints()?, fields.get(1)?.as_str()))
}

pub(crate) fn parse_missing_value(
    fields: &Fields<'_>,
) -> Result<Option<MissingValue>, Error> {
    let (codepoints, value) = parse_codepoint_association(fields)?;
    Ok(Some(MissingValue { codepoints, value: value.to_string() }))
}

pub(crate) fn parse_missing_property_value(
    fields: &Fields<'_>,
) -> Result<Option<MissingPropertyValue>, Error> {
    fields.require(3)?;
    Ok(Some(MissingPropertyValue {
        codepoints: fields.get(0)?.codepoints()?,
        property: fields.get(1)?.as_str().to_string(),
        value: fields.get(2)?.as_str().to_string(),
    }))
}

/// Parse a single data line into a record. This backs the `FromStr` impls
/// of record types.
pub(crate) fn parse_record_line<P: FormatParser>(
    parser: &P,
    line: &str,
) -> Result<P::Record, Error> {
    match split_line(line).fields {
        Some(ref fields) => parser.parse_record(fields),
        None => err!("no data fields in line: '{}'", line),
    }
}

#[cfg(test)]
mod tests {
    use crate::line::split_line;

    use super::{
        parse_codepoint_association, parse_missing_property_value,
        parse_missing_value,
    };

    #[test]
    fn association() {
        let split = split_line("0E40..0E44 ; Logical_Order_Exception # Lo");
        let (cps, value) =
            parse_codepoint_association(&split.fields.unwrap()).unwrap();
        assert_eq!(cps, (0x0E40, 0x0E44));
        assert_eq!(value, "Logical_Order_Exception");
    }

    #[test]
    fn association_too_short() {
        let split = split_line("0E40..0E44");
        assert!(parse_codepoint_association(&split.fields.unwrap()).is_err());
    }

    #[test]
    fn missing_forms() {
        let split = split_line("# @missing: 0000..10FFFF; Unknown");
        let def = parse_missing_value(&split.missing.unwrap()).unwrap().unwrap();
        assert_eq!(def.codepoints, (0, 0x10FFFF));
        assert_eq!(def.value, "Unknown");

        let split = split_line("# @missing: 0000..10FFFF; NFD_QC; Yes");
        let def = parse_missing_property_value(&split.missing.unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(def.property, "NFD_QC");
        assert_eq!(def.value, "Yes");

        let split = split_line("# @missing: 0000..10FFFF; Unknown");
        assert!(parse_missing_property_value(&split.missing.unwrap()).is_err());
    }
}
