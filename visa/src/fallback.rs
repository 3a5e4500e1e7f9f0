//! Hand-curated destinations served when neither the cache nor the provider
//! can produce a list. Statuses are for Saudi passport holders; whatever the
//! configured home passport is, it never appears in the list.
use visa_codes::{CountryNames, Locale, flag_emoji};

use crate::{
    aggregator::sort_countries,
    model::{Country, VisaStatus},
};

const FALLBACK: &[(&str, VisaStatus)] = &[
    ("AE", VisaStatus::VisaFree),
    ("BH", VisaStatus::VisaFree),
    ("KW", VisaStatus::VisaFree),
    ("OM", VisaStatus::VisaFree),
    ("QA", VisaStatus::VisaFree),
    ("JO", VisaStatus::VisaFree),
    ("EG", VisaStatus::EVisa),
    ("TR", VisaStatus::EVisa),
    ("MY", VisaStatus::VisaFree),
    ("GE", VisaStatus::VisaFree),
    ("MA", VisaStatus::VisaFree),
    ("ID", VisaStatus::EVisa),
    ("TH", VisaStatus::EVisa),
    ("IN", VisaStatus::EVisa),
    ("GB", VisaStatus::EVisa),
    ("US", VisaStatus::VisaRequired),
    ("FR", VisaStatus::VisaRequired),
    ("DE", VisaStatus::VisaRequired),
    ("IT", VisaStatus::VisaRequired),
    ("ES", VisaStatus::VisaRequired),
    ("JP", VisaStatus::VisaRequired),
    ("KR", VisaStatus::EVisa),
    ("IL", VisaStatus::NotAllowed),
];

/// Static list without `home` (alpha-2), sorted for `locale`. Never empty.
pub fn fallback_countries(
    names: &CountryNames,
    locale: Locale,
    home: &str,
) -> Vec<Country> {
    let mut countries: Vec<Country> = FALLBACK
        .iter()
        .filter(|(code, _)| !code.eq_ignore_ascii_case(home))
        .map(|&(code, visa_status)| Country {
            id: code.to_ascii_lowercase(),
            name: names.english(code).unwrap_or(code).to_string(),
            name_ar: names.name(code, Locale::Ar).unwrap_or(code).to_string(),
            flag: flag_emoji(code).unwrap_or_default(),
            visa_status,
            visa_color: None,
        })
        .collect();
    sort_countries(&mut countries, locale);
    countries
}
