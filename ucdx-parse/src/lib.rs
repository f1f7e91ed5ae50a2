/*!
A library for parsing the data files of the Unicode character database.

Most UCD files share one line grammar: semicolon-delimited fields, trailing
`#` comments and `@missing` annotations that declare default values. This
crate parses that grammar once, and each supported file supplies a small
`FormatParser` that maps positional fields to a record.

```
use ucdx_parse::{parse, ScriptsParser};

let data = "\
## @missing: 0000..10FFFF; Unknown
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
";
let file = parse(data.as_bytes(), &ScriptsParser).unwrap();
assert_eq!(file.records[0].script, "Latin");
assert_eq!(file.defaults[0].value, "Unknown");
```
*/

#![deny(missing_docs)]

pub use crate::codepoint::{CodepointIter, CodepointRange, MAX_CODEPOINT};
pub use crate::common::{MissingPropertyValue, MissingValue};
pub use crate::error::{Error, ErrorKind};
pub use crate::line::{split_line, Field, Fields, SplitLine};
pub use crate::parser::{
    parse, parse_dir, parse_path, Entry, File, FormatParser, NoMissing,
    UcdFile, UcdLineParser,
};

pub use crate::bidi_mirroring_glyph::{BidiMirroring, BidiMirroringParser};
pub use crate::derived_normalization_properties::{
    DerivedNormalizationPropertiesParser, DerivedNormalizationProperty,
};
pub use crate::east_asian_width::{EastAsianWidth, EastAsianWidthParser};
pub use crate::emoji_properties::{EmojiPropertiesParser, EmojiProperty};
pub use crate::grapheme_cluster_break::{
    GraphemeClusterBreak, GraphemeClusterBreakParser,
};
pub use crate::prop_list::{PropListParser, Property};
pub use crate::property_aliases::{PropertyAlias, PropertyAliasesParser};
pub use crate::property_value_aliases::{
    PropertyValueAlias, PropertyValueAliasesParser,
};
pub use crate::scripts::{Script, ScriptsParser};
pub use crate::sentence_break::{SentenceBreak, SentenceBreakParser};
pub use crate::unicode_data::{
    UnicodeData, UnicodeDataParser, UnicodeDataRange, UnicodeDataRanges,
};
pub use crate::word_break::{WordBreak, WordBreakParser};

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

pub mod extracted;

mod codepoint;
mod common;
mod error;
mod line;
mod parser;

mod bidi_mirroring_glyph;
mod derived_normalization_properties;
mod east_asian_width;
mod emoji_properties;
mod grapheme_cluster_break;
mod prop_list;
mod property_aliases;
mod property_value_aliases;
mod scripts;
mod sentence_break;
mod unicode_data;
mod word_break;
