//! Sort keys for country names.
//!
//! Plain `str` ordering puts "Åland" after "Zimbabwe" and separates Arabic
//! names that differ only by hamza seat or diacritics. The keys built here
//! fold those differences away so that lists sort the way a reader of the
//! locale expects.
//!
//! Under the Arabic locale, names not written in Arabic script (raw codes
//! such as `ZZ` for unknown countries) sort after every Arabic name.
use crate::names::Locale;

/// Leads the Arabic-locale key of a name in another script.
const OTHER_SCRIPT: char = char::MAX;

/// Build a comparison key for `name` under `locale`.
pub fn collation_key(name: &str, locale: Locale) -> String {
    let folded: String = match locale {
        Locale::Ar => name.chars().filter_map(fold_arabic).collect(),
        Locale::En => name.chars().filter_map(fold_latin).collect(),
    };
    let key = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    let arabic_first = key
        .chars()
        .find(|c| c.is_alphanumeric())
        .is_none_or(is_arabic);
    if locale == Locale::Ar && !arabic_first {
        format!("{OTHER_SCRIPT}{key}")
    } else {
        key
    }
}

/// Compare two names under `locale`.
pub fn compare(a: &str, b: &str, locale: Locale) -> std::cmp::Ordering {
    collation_key(a, locale).cmp(&collation_key(b, locale))
}

fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

fn fold_arabic(c: char) -> Option<char> {
    match c {
        // harakat, superscript alef, tatweel
        '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{0640}' => None,
        'آ' | 'أ' | 'إ' | 'ٱ' => Some('ا'),
        'ؤ' => Some('و'),
        'ئ' | 'ى' => Some('ي'),
        'ة' => Some('ه'),
        _ => fold_latin(c),
    }
}

fn fold_latin(c: char) -> Option<char> {
    let c = c.to_lowercase().next().unwrap_or(c);
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\'' | '’' | '(' | ')' | '.' | ',' => return None,
        '-' => ' ',
        other => other,
    };
    Some(folded)
}
