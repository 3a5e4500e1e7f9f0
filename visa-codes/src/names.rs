use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

use crate::{codes::CountryRecord, normalize, table::COUNTRY_TABLE};

/// Display locale for country names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-tagged forms like "ar-SA" or "en_US".
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Names {
    en: &'static str,
    ar: &'static str,
}

/// Localized country names keyed by alpha-2.
#[derive(Debug)]
pub struct CountryNames {
    names: HashMap<&'static str, Names>,
}

impl CountryNames {
    pub fn standard() -> Self {
        Self::from_records(COUNTRY_TABLE)
    }

    pub fn from_records(records: &[CountryRecord]) -> Self {
        let names = records
            .iter()
            .map(|r| {
                (
                    r.alpha2,
                    Names {
                        en: r.name_en,
                        ar: r.name_ar,
                    },
                )
            })
            .collect();
        Self { names }
    }

    /// Name in the requested locale, if the table has one.
    pub fn name(&self, alpha2: &str, locale: Locale) -> Option<&'static str> {
        let names = self.names.get(normalize(alpha2).as_str())?;
        let name = match locale {
            Locale::Ar => names.ar,
            Locale::En => names.en,
        };
        (!name.is_empty()).then_some(name)
    }

    /// Canonical English name.
    pub fn english(&self, alpha2: &str) -> Option<&'static str> {
        self.name(alpha2, Locale::En)
    }
}

/// Flag emoji built from regional indicator symbols, `"sa"` -> 🇸🇦.
pub fn flag_emoji(alpha2: &str) -> Option<String> {
    let code = normalize(alpha2);
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    code.bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}
