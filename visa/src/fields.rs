//! Per-destination form fields for the application wizard.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Date,
    Number,
    Select,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: &'static str,
    pub label_en: &'static str,
    pub label_ar: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

fn no_options(options: &&[&str]) -> bool {
    options.is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFields {
    pub country_id: String,
    pub fields: Vec<FormField>,
}

const fn field(
    id: &'static str,
    label_en: &'static str,
    label_ar: &'static str,
    field_type: FieldType,
    required: bool,
) -> FormField {
    FormField {
        id,
        label_en,
        label_ar,
        field_type,
        required,
        options: &[],
    }
}

const PURPOSES: &[&str] =
    &["tourism", "business", "family_visit", "study", "medical"];

const COMMON: &[FormField] = &[
    field(
        "passport_number",
        "Passport number",
        "رقم جواز السفر",
        FieldType::Text,
        true,
    ),
    field(
        "passport_expiry",
        "Passport expiry date",
        "تاريخ انتهاء جواز السفر",
        FieldType::Date,
        true,
    ),
    FormField {
        options: PURPOSES,
        ..field(
            "travel_purpose",
            "Purpose of travel",
            "الغرض من السفر",
            FieldType::Select,
            true,
        )
    },
    field(
        "arrival_date",
        "Arrival date",
        "تاريخ الوصول",
        FieldType::Date,
        true,
    ),
    field(
        "departure_date",
        "Departure date",
        "تاريخ المغادرة",
        FieldType::Date,
        true,
    ),
    field(
        "personal_photo",
        "Passport-sized photo with white background",
        "صورة شخصية بخلفية بيضاء",
        FieldType::File,
        true,
    ),
];

const SCHENGEN: &[FormField] = &[
    field(
        "travel_insurance",
        "Travel insurance covering 30000 EUR",
        "تأمين السفر بتغطية 30000 يورو",
        FieldType::File,
        true,
    ),
    field(
        "bank_statement",
        "Bank statement for the last 3 months",
        "كشف حساب بنكي لآخر 3 أشهر",
        FieldType::File,
        true,
    ),
    field(
        "previous_schengen_visas",
        "Schengen visas in the last 5 years",
        "تأشيرات شنغن خلال آخر 5 سنوات",
        FieldType::Number,
        false,
    ),
];

const UNITED_STATES: &[FormField] = &[
    field(
        "ds160_confirmation",
        "DS-160 confirmation number",
        "رقم تأكيد نموذج DS-160",
        FieldType::Text,
        true,
    ),
    field(
        "us_address",
        "Address in the United States",
        "العنوان في الولايات المتحدة",
        FieldType::Text,
        true,
    ),
    field(
        "employment_letter",
        "Employment letter from employer",
        "خطاب تعريف من جهة العمل",
        FieldType::File,
        true,
    ),
];

const UNITED_KINGDOM: &[FormField] = &[
    field(
        "bank_statement",
        "Bank statement for the last 6 months",
        "كشف حساب بنكي لآخر 6 أشهر",
        FieldType::File,
        true,
    ),
    field(
        "previous_uk_visits",
        "Visits to the UK in the last 10 years",
        "الزيارات إلى المملكة المتحدة خلال آخر 10 سنوات",
        FieldType::Number,
        false,
    ),
];

const SCHENGEN_STATES: &[&str] = &[
    "at", "be", "ch", "cz", "de", "dk", "ee", "es", "fi", "fr", "gr", "hr",
    "hu", "is", "it", "li", "lt", "lu", "lv", "mt", "nl", "no", "pl", "pt",
    "se", "si", "sk",
];

fn extra_fields(id: &str) -> &'static [FormField] {
    match id {
        "us" => UNITED_STATES,
        "gb" => UNITED_KINGDOM,
        id if SCHENGEN_STATES.contains(&id) => SCHENGEN,
        _ => &[],
    }
}

/// Common fields followed by destination specific ones. `id` is a
/// lowercase alpha-2 code.
pub fn country_fields(id: &str) -> CountryFields {
    let id = id.trim().to_ascii_lowercase();
    let fields = COMMON.iter().chain(extra_fields(&id)).cloned().collect();
    CountryFields {
        country_id: id,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let fields = country_fields("ae");
        assert_eq!(fields.country_id, "ae");
        assert_eq!(fields.fields.len(), COMMON.len());
        assert_eq!(fields.fields[0].id, "passport_number");
    }

    #[test]
    fn test_schengen_extras() {
        let fields = country_fields("FR");
        assert_eq!(fields.country_id, "fr");
        assert!(fields.fields.iter().any(|f| f.id == "travel_insurance"));
        assert_eq!(fields.fields.len(), COMMON.len() + SCHENGEN.len());
    }

    #[test]
    fn test_field_serialization() {
        let fields = country_fields("us");
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["countryId"], "us");
        let purpose = &value["fields"][2];
        assert_eq!(purpose["fieldType"], "select");
        assert_eq!(purpose["options"][0], "tourism");
        assert!(value["fields"][0].get("options").is_none());
        assert!(
            value["fields"]
                .as_array()
                .unwrap()
                .iter()
                .any(|f| f["id"] == "ds160_confirmation")
        );
    }
}
