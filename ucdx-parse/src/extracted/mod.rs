//! Parsers for files in the `extracted` subdirectory.
//!
//! These are placed here, rather than at the top level, to help keep
//! the number of structs in any given module managable.

pub use self::derived_bidi_class::{DerivedBidiClass, DerivedBidiClassParser};
pub use self::derived_binary_properties::{
    DerivedBinaryProperties, DerivedBinaryPropertiesParser,
};
pub use self::derived_combining_class::{
    DerivedCombiningClass, DerivedCombiningClassParser,
};
pub use self::derived_general_category::{
    DerivedGeneralCategory, DerivedGeneralCategoryParser,
};
pub use self::derived_line_break::{DerivedLineBreak, DerivedLineBreakParser};
pub use self::derived_numeric_values::{
    DerivedNumericValues, DerivedNumericValuesParser,
};

mod derived_bidi_class;
mod derived_binary_properties;
mod derived_combining_class;
mod derived_general_category;
mod derived_line_break;
mod derived_numeric_values;
