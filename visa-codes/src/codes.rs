//! Bidirectional translation between ISO alpha-2, alpha-3 and numeric-3.
//!
//! Map feeds key their features by numeric or alpha-3 codes while the visa
//! provider keys everything by alpha-2. [`CountryCodes`] holds the three
//! lookup tables built once from [`CountryRecord`]s and is handed around as a
//! [`CodeTranslator`] so consumers can swap it for a test double.
use regex::Regex;
use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::LazyLock,
};

use crate::table::COUNTRY_TABLE;

static ALPHA2_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}$").expect("Failed to compile alpha-2 regex")
});

static ALPHA3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3}$").expect("Failed to compile alpha-3 regex")
});

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}$").expect("Failed to compile numeric regex")
});

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CodeTableError {
    #[error("Duplicate alpha-2 code: {0}")]
    DuplicateAlpha2(String),
    #[error("Duplicate alpha-3 code: {0}")]
    DuplicateAlpha3(String),
    #[error("Duplicate numeric code: {0}")]
    DuplicateNumeric(String),
    #[error("Malformed code in table: {0}")]
    Malformed(String),
}

/// One row of the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: Option<&'static str>,
    pub name_en: &'static str,
    pub name_ar: &'static str,
}

impl CountryRecord {
    pub const fn new(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: Option<&'static str>,
        name_en: &'static str,
        name_ar: &'static str,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name_en,
            name_ar,
        }
    }
}

/// Shape of a code after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Alpha2,
    Alpha3,
    Numeric,
    Unrecognized,
}

/// Trim and uppercase.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Zero-pad a numeric code to exactly three digits, `"4"` -> `"004"`.
pub fn pad_numeric(code: &str) -> Option<String> {
    let code = code.trim();
    NUMERIC_RE
        .is_match(code)
        .then(|| format!("{code:0>3}"))
}

pub fn classify(code: &str) -> CodeKind {
    let code = normalize(code);
    if ALPHA2_RE.is_match(&code) {
        CodeKind::Alpha2
    } else if ALPHA3_RE.is_match(&code) {
        CodeKind::Alpha3
    } else if NUMERIC_RE.is_match(&code) {
        CodeKind::Numeric
    } else {
        CodeKind::Unrecognized
    }
}

/// Lookup service over the three code universes.
///
/// Every method accepts untrimmed, mixed-case input and answers `None` for
/// codes it does not know. Nothing here panics on bad input.
pub trait CodeTranslator: Send + Sync + fmt::Debug {
    fn alpha2_to_alpha3(&self, code: &str) -> Option<&str>;

    fn alpha3_to_alpha2(&self, code: &str) -> Option<&str>;

    fn numeric_to_alpha3(&self, code: &str) -> Option<&str>;

    /// Resolve any of the three forms to the canonical alpha-3 code.
    fn to_alpha3(&self, code: &str) -> Option<&str> {
        match classify(code) {
            CodeKind::Alpha2 => self.alpha2_to_alpha3(code),
            CodeKind::Alpha3 => {
                let alpha2 = self.alpha3_to_alpha2(code)?;
                self.alpha2_to_alpha3(alpha2)
            }
            CodeKind::Numeric => self.numeric_to_alpha3(code),
            CodeKind::Unrecognized => None,
        }
    }

    /// Resolve any of the three forms to alpha-2.
    fn to_alpha2(&self, code: &str) -> Option<&str> {
        match classify(code) {
            CodeKind::Alpha2 => {
                let alpha3 = self.alpha2_to_alpha3(code)?;
                self.alpha3_to_alpha2(alpha3)
            }
            CodeKind::Alpha3 => self.alpha3_to_alpha2(code),
            CodeKind::Numeric => {
                let alpha3 = self.numeric_to_alpha3(code)?;
                self.alpha3_to_alpha2(alpha3)
            }
            CodeKind::Unrecognized => None,
        }
    }
}

pub struct CountryCodes {
    iso2_to_iso3: HashMap<&'static str, &'static str>,
    iso3_to_iso2: HashMap<&'static str, &'static str>,
    numeric_to_iso3: HashMap<&'static str, &'static str>,
}

impl fmt::Debug for CountryCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryCodes")
            .field("alpha2_count", &self.iso2_to_iso3.len())
            .field("numeric_count", &self.numeric_to_iso3.len())
            .finish()
    }
}

impl CountryCodes {
    /// Build the tables from the bundled country table.
    pub fn standard() -> Result<Self, CodeTableError> {
        Self::from_records(COUNTRY_TABLE)
    }

    /// Build the tables from arbitrary records, checking that every code is
    /// well-formed and that the alpha-3 inversion is lossless.
    pub fn from_records(
        records: &[CountryRecord],
    ) -> Result<Self, CodeTableError> {
        let mut iso2_to_iso3 = HashMap::with_capacity(records.len());
        let mut iso3_to_iso2 = HashMap::with_capacity(records.len());
        let mut numeric_to_iso3 = HashMap::with_capacity(records.len());

        for record in records {
            if !ALPHA2_RE.is_match(record.alpha2) {
                return Err(CodeTableError::Malformed(record.alpha2.to_string()));
            }
            if !ALPHA3_RE.is_match(record.alpha3) {
                return Err(CodeTableError::Malformed(record.alpha3.to_string()));
            }

            match iso2_to_iso3.entry(record.alpha2) {
                Entry::Occupied(_) => {
                    return Err(CodeTableError::DuplicateAlpha2(
                        record.alpha2.to_string(),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(record.alpha3);
                }
            }

            match iso3_to_iso2.entry(record.alpha3) {
                Entry::Occupied(_) => {
                    return Err(CodeTableError::DuplicateAlpha3(
                        record.alpha3.to_string(),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(record.alpha2);
                }
            }

            if let Some(numeric) = record.numeric {
                if numeric.len() != 3 || !NUMERIC_RE.is_match(numeric) {
                    return Err(CodeTableError::Malformed(numeric.to_string()));
                }
                if numeric_to_iso3.insert(numeric, record.alpha3).is_some() {
                    return Err(CodeTableError::DuplicateNumeric(
                        numeric.to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            iso2_to_iso3,
            iso3_to_iso2,
            numeric_to_iso3,
        })
    }

    pub fn alpha2_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iso2_to_iso3.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.iso2_to_iso3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iso2_to_iso3.is_empty()
    }
}

impl CodeTranslator for CountryCodes {
    fn alpha2_to_alpha3(&self, code: &str) -> Option<&str> {
        self.iso2_to_iso3.get(normalize(code).as_str()).copied()
    }

    fn alpha3_to_alpha2(&self, code: &str) -> Option<&str> {
        self.iso3_to_iso2.get(normalize(code).as_str()).copied()
    }

    fn numeric_to_alpha3(&self, code: &str) -> Option<&str> {
        let padded = pad_numeric(code)?;
        self.numeric_to_iso3.get(padded.as_str()).copied()
    }
}
