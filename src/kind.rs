use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ucdx_parse::extracted::{
    DerivedBidiClassParser, DerivedBinaryPropertiesParser,
    DerivedCombiningClassParser, DerivedGeneralCategoryParser,
    DerivedLineBreakParser, DerivedNumericValuesParser,
};
use ucdx_parse::{
    BidiMirroringParser, DerivedNormalizationPropertiesParser,
    EastAsianWidthParser, EmojiPropertiesParser, GraphemeClusterBreakParser,
    PropListParser, PropertyAliasesParser, PropertyValueAliasesParser,
    ScriptsParser, SentenceBreakParser, UcdFile, UnicodeDataParser,
    WordBreakParser,
};

use crate::error::Error;

/// A UCD file that this program knows how to parse.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    PropertyValueAliases,
    PropertyAliases,
    UnicodeData,
    Scripts,
    PropList,
    EastAsianWidth,
    DerivedNormalizationProps,
    GraphemeBreakProperty,
    WordBreakProperty,
    SentenceBreakProperty,
    EmojiData,
    BidiMirroring,
    DerivedGeneralCategory,
    DerivedBidiClass,
    DerivedLineBreak,
    DerivedCombiningClass,
    DerivedNumericValues,
    DerivedBinaryProperties,
}

/// Every kind, in the order they are listed to users.
pub const ALL: &[Kind] = &[
    Kind::PropertyValueAliases,
    Kind::PropertyAliases,
    Kind::UnicodeData,
    Kind::Scripts,
    Kind::PropList,
    Kind::EastAsianWidth,
    Kind::DerivedNormalizationProps,
    Kind::GraphemeBreakProperty,
    Kind::WordBreakProperty,
    Kind::SentenceBreakProperty,
    Kind::EmojiData,
    Kind::BidiMirroring,
    Kind::DerivedGeneralCategory,
    Kind::DerivedBidiClass,
    Kind::DerivedLineBreak,
    Kind::DerivedCombiningClass,
    Kind::DerivedNumericValues,
    Kind::DerivedBinaryProperties,
];

/// The kinds cached when none are requested explicitly.
pub const DEFAULT_CACHED: &[Kind] = &[
    Kind::PropertyValueAliases,
    Kind::UnicodeData,
    Kind::PropList,
    Kind::Scripts,
];

/// An operation that is generic over a file's format parser.
///
/// `Kind::visit` picks the concrete parser, so code implementing this trait
/// never needs to know which file it is handling.
pub trait Visitor {
    type Output;

    fn visit<P>(self, parser: P) -> Self::Output
    where
        P: UcdFile + Sync,
        P::Record: Serialize + DeserializeOwned + Send,
        P::Missing: Serialize + DeserializeOwned + Send;
}

impl Kind {
    /// The name of this kind as given on the command line.
    pub fn name(&self) -> &'static str {
        match *self {
            Kind::PropertyValueAliases => "property-value-aliases",
            Kind::PropertyAliases => "property-aliases",
            Kind::UnicodeData => "unicode-data",
            Kind::Scripts => "scripts",
            Kind::PropList => "prop-list",
            Kind::EastAsianWidth => "east-asian-width",
            Kind::DerivedNormalizationProps => "derived-normalization-props",
            Kind::GraphemeBreakProperty => "grapheme-break-property",
            Kind::WordBreakProperty => "word-break-property",
            Kind::SentenceBreakProperty => "sentence-break-property",
            Kind::EmojiData => "emoji-data",
            Kind::BidiMirroring => "bidi-mirroring",
            Kind::DerivedGeneralCategory => "derived-general-category",
            Kind::DerivedBidiClass => "derived-bidi-class",
            Kind::DerivedLineBreak => "derived-line-break",
            Kind::DerivedCombiningClass => "derived-combining-class",
            Kind::DerivedNumericValues => "derived-numeric-values",
            Kind::DerivedBinaryProperties => "derived-binary-properties",
        }
    }

    /// The path of this kind's file relative to the UCD directory.
    pub fn relative_file_path(&self) -> &'static Path {
        struct RelativePath;

        impl Visitor for RelativePath {
            type Output = &'static Path;

            fn visit<P>(self, _: P) -> &'static Path
            where
                P: UcdFile + Sync,
                P::Record: Serialize + DeserializeOwned + Send,
                P::Missing: Serialize + DeserializeOwned + Send,
            {
                P::relative_file_path()
            }
        }

        self.visit(RelativePath)
    }

    /// Run the given visitor with this kind's format parser.
    pub fn visit<V: Visitor>(&self, visitor: V) -> V::Output {
        match *self {
            Kind::PropertyValueAliases => {
                visitor.visit(PropertyValueAliasesParser)
            }
            Kind::PropertyAliases => visitor.visit(PropertyAliasesParser),
            Kind::UnicodeData => visitor.visit(UnicodeDataParser),
            Kind::Scripts => visitor.visit(ScriptsParser),
            Kind::PropList => visitor.visit(PropListParser),
            Kind::EastAsianWidth => visitor.visit(EastAsianWidthParser),
            Kind::DerivedNormalizationProps => {
                visitor.visit(DerivedNormalizationPropertiesParser)
            }
            Kind::GraphemeBreakProperty => {
                visitor.visit(GraphemeClusterBreakParser)
            }
            Kind::WordBreakProperty => visitor.visit(WordBreakParser),
            Kind::SentenceBreakProperty => visitor.visit(SentenceBreakParser),
            Kind::EmojiData => visitor.visit(EmojiPropertiesParser),
            Kind::BidiMirroring => visitor.visit(BidiMirroringParser),
            Kind::DerivedGeneralCategory => {
                visitor.visit(DerivedGeneralCategoryParser)
            }
            Kind::DerivedBidiClass => visitor.visit(DerivedBidiClassParser),
            Kind::DerivedLineBreak => visitor.visit(DerivedLineBreakParser),
            Kind::DerivedCombiningClass => {
                visitor.visit(DerivedCombiningClassParser)
            }
            Kind::DerivedNumericValues => {
                visitor.visit(DerivedNumericValuesParser)
            }
            Kind::DerivedBinaryProperties => {
                visitor.visit(DerivedBinaryPropertiesParser)
            }
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Kind, Error> {
        match ALL.iter().find(|k| k.name() == name) {
            Some(&kind) => Ok(kind),
            None => err!("unrecognized UCD file kind: {}", name),
        }
    }
}

/// Return the name of every kind, for use as clap's possible values.
pub fn names() -> Vec<&'static str> {
    ALL.iter().map(|k| k.name()).collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Kind, ALL};

    #[test]
    fn names_round_trip() {
        for kind in ALL {
            assert_eq!(kind.name().parse::<Kind>().unwrap(), *kind);
        }
        assert!("Scripts.txt".parse::<Kind>().is_err());
    }

    #[test]
    fn relative_paths() {
        assert_eq!(
            Kind::Scripts.relative_file_path(),
            Path::new("Scripts.txt")
        );
        assert_eq!(
            Kind::DerivedBidiClass.relative_file_path(),
            Path::new("extracted/DerivedBidiClass.txt")
        );
        assert_eq!(
            Kind::GraphemeBreakProperty.relative_file_path(),
            Path::new("auxiliary/GraphemeBreakProperty.txt")
        );
    }
}
