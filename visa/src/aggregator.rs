//! Turns a provider visa map into the localized, sorted destination list.
//!
//! Codes are normalized through the translator, so a provider that slips an
//! alpha-3 code into a bucket still lands on the right country. Home and
//! policy-excluded destinations are dropped. A map that yields nothing
//! tells the caller to fall back to the static list.
use std::{collections::HashSet, fmt, sync::Arc};

use tracing::debug;
use visa_codes::{CodeTranslator, CountryNames, Locale, collation_key, flag_emoji};

use crate::model::{Country, VisaMapData, VisaStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    Countries(Vec<Country>),
    UseFallback,
}

trait NameStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(&self, code: &str, locale: Locale, names: &CountryNames)
    -> Option<String>;
}

struct LocalizedName;

impl NameStrategy for LocalizedName {
    fn name(&self) -> &'static str {
        "localized"
    }

    fn resolve(
        &self,
        code: &str,
        locale: Locale,
        names: &CountryNames,
    ) -> Option<String> {
        names.name(code, locale).map(str::to_string)
    }
}

struct EnglishName;

impl NameStrategy for EnglishName {
    fn name(&self) -> &'static str {
        "english"
    }

    fn resolve(
        &self,
        code: &str,
        _locale: Locale,
        names: &CountryNames,
    ) -> Option<String> {
        names.english(code).map(str::to_string)
    }
}

struct RawCode;

impl NameStrategy for RawCode {
    fn name(&self) -> &'static str {
        "raw_code"
    }

    fn resolve(
        &self,
        code: &str,
        _locale: Locale,
        _names: &CountryNames,
    ) -> Option<String> {
        Some(code.to_string())
    }
}

/// Display names: localized, then English, then the code itself.
pub struct NameResolver {
    strategies: Vec<Box<dyn NameStrategy>>,
    names: Arc<CountryNames>,
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl NameResolver {
    pub fn new(names: Arc<CountryNames>) -> Self {
        Self {
            strategies: vec![
                Box::new(LocalizedName),
                Box::new(EnglishName),
                Box::new(RawCode),
            ],
            names,
        }
    }

    pub fn resolve(&self, code: &str, locale: Locale) -> String {
        self.strategies
            .iter()
            .find_map(|s| s.resolve(code, locale, &self.names))
            .unwrap_or_else(|| code.to_string())
    }
}

#[derive(Debug)]
pub struct Aggregator {
    translator: Arc<dyn CodeTranslator>,
    names: NameResolver,
    home: String,
    excluded: HashSet<String>,
}

impl Aggregator {
    /// `home` and `excluded` accept any code form and are stored as alpha-2.
    pub fn new(
        translator: Arc<dyn CodeTranslator>,
        names: Arc<CountryNames>,
        home: &str,
        excluded: &[String],
    ) -> Self {
        let canonical = |code: &str| {
            translator
                .to_alpha2(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.trim().to_ascii_uppercase())
        };
        let home = canonical(home);
        let excluded = excluded.iter().map(|code| canonical(code)).collect();
        Self {
            names: NameResolver::new(names),
            translator,
            home,
            excluded,
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn is_excluded(&self, alpha2: &str) -> bool {
        self.excluded.contains(alpha2)
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    /// Country entry for an already canonical code, without status logic.
    pub fn country(&self, code: &str, visa_status: VisaStatus) -> Country {
        Country {
            id: code.to_ascii_lowercase(),
            name: self.names.resolve(code, Locale::En),
            name_ar: self.names.resolve(code, Locale::Ar),
            flag: flag_emoji(code).unwrap_or_default(),
            visa_status,
            visa_color: None,
        }
    }

    pub fn build_country_list(
        &self,
        map: Option<&VisaMapData>,
        locale: Locale,
    ) -> Aggregation {
        let Some(map) = map else {
            return Aggregation::UseFallback;
        };

        let mut seen = HashSet::new();
        let mut countries = Vec::new();
        for (color, codes) in map.buckets() {
            let status = VisaStatus::from(&color);
            for raw in codes {
                let code = self
                    .translator
                    .to_alpha2(&raw)
                    .map(str::to_string)
                    .unwrap_or(raw);
                if code == self.home || self.excluded.contains(&code) {
                    continue;
                }
                if !seen.insert(code.clone()) {
                    debug!(%code, %color, "Duplicate code in visa map, keeping first");
                    continue;
                }
                let mut country = self.country(&code, status);
                country.visa_color = Some(color.clone());
                countries.push(country);
            }
        }

        if countries.is_empty() {
            return Aggregation::UseFallback;
        }

        sort_countries(&mut countries, locale);
        Aggregation::Countries(countries)
    }
}

/// Sort by locale collation of the display name, then by id.
pub fn sort_countries(countries: &mut [Country], locale: Locale) {
    countries.sort_by_cached_key(|country| {
        let display = match locale {
            Locale::Ar => &country.name_ar,
            Locale::En => &country.name,
        };
        (collation_key(display, locale), country.id.clone())
    });
}
