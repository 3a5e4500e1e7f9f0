//! Country code translation for the visa status service.
//!
//! The visa provider speaks ISO alpha-2, world map feeds speak numeric-3 and
//! alpha-3. This crate keeps the three universes reconciled:
//!
//! - `CountryCodes`: lookup tables built once, exposed through the
//!   `CodeTranslator` trait.
//! - `CountryNames`: English and Arabic display names.
//! - `FeatureResolver`: ordered rules turning a map feature into alpha-3.
//! - `collation_key`: locale-aware sort keys for names.
//!
//! # Examples
//!
//! ```
//! use visa_codes::{CodeTranslator, CountryCodes};
//!
//! let codes = CountryCodes::standard().unwrap();
//! assert_eq!(codes.numeric_to_alpha3("4"), Some("AFG"));
//! assert_eq!(codes.alpha3_to_alpha2("fra"), Some("FR"));
//! ```
#![warn(clippy::unwrap_used)]
mod codes;
mod collation;
mod names;
mod resolve;
mod table;

pub use codes::{
    CodeKind, CodeTableError, CodeTranslator, CountryCodes, CountryRecord,
    classify, normalize, pad_numeric,
};
pub use collation::{collation_key, compare};
pub use names::{CountryNames, Locale, UnsupportedLocale, flag_emoji};
pub use resolve::{FeatureId, FeatureResolver, MapFeature};
