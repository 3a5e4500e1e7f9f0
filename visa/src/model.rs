//! Provider payloads and the domain types built from them.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt};
use visa_codes::CodeTranslator;

/// Provider color bucket. Unrecognized colors are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisaStatusColor {
    Green,
    Blue,
    Yellow,
    Red,
    Other(String),
}

impl VisaStatusColor {
    pub fn parse(color: &str) -> Self {
        match color.trim().to_ascii_lowercase().as_str() {
            "green" => VisaStatusColor::Green,
            "blue" => VisaStatusColor::Blue,
            "yellow" => VisaStatusColor::Yellow,
            "red" => VisaStatusColor::Red,
            other => VisaStatusColor::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VisaStatusColor::Green => "green",
            VisaStatusColor::Blue => "blue",
            VisaStatusColor::Yellow => "yellow",
            VisaStatusColor::Red => "red",
            VisaStatusColor::Other(other) => other,
        }
    }
}

impl From<String> for VisaStatusColor {
    fn from(color: String) -> Self {
        Self::parse(&color)
    }
}

impl From<VisaStatusColor> for String {
    fn from(color: VisaStatusColor) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Display for VisaStatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain visa status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    VisaFree,
    EVisa,
    VisaRequired,
    /// Only in hand-curated data, never derived from the provider
    NotAllowed,
}

impl From<&VisaStatusColor> for VisaStatus {
    fn from(color: &VisaStatusColor) -> Self {
        match color {
            VisaStatusColor::Green => VisaStatus::VisaFree,
            VisaStatusColor::Blue | VisaStatusColor::Yellow => VisaStatus::EVisa,
            VisaStatusColor::Red => VisaStatus::VisaRequired,
            // unknown means most restrictive
            VisaStatusColor::Other(_) => VisaStatus::VisaRequired,
        }
    }
}

/// Destination as served to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Lowercase alpha-2
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub flag: String,
    pub visa_status: VisaStatus,
    /// Provider bucket, kept so blue (e-visa) and yellow (eTA) stay apart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_color: Option<VisaStatusColor>,
}

/// Bulk map response: `{ data: { passport, colors }, meta }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaMapResponse {
    pub data: VisaMapData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaMapData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<Value>,
    /// color name -> comma separated alpha-2 codes, in provider order
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl VisaMapData {
    /// Color buckets with codes split, trimmed and uppercased.
    pub fn buckets(
        &self,
    ) -> impl Iterator<Item = (VisaStatusColor, Vec<String>)> + '_ {
        self.colors.iter().map(|(color, csv)| {
            let codes = csv
                .split(',')
                .map(|code| code.trim().to_ascii_uppercase())
                .filter(|code| !code.is_empty())
                .collect();
            (VisaStatusColor::parse(color), codes)
        })
    }

    /// alpha-2 -> color; the first bucket listing a code wins.
    ///
    /// Bucket codes in any form are brought to alpha-2 through `translator`;
    /// codes it does not know are kept as listed.
    pub fn status_index(
        &self,
        translator: &dyn CodeTranslator,
    ) -> HashMap<String, VisaStatusColor> {
        let mut index = HashMap::new();
        for (color, codes) in self.buckets() {
            for raw in codes {
                let code = translator
                    .to_alpha2(&raw)
                    .map(str::to_string)
                    .unwrap_or(raw);
                index.entry(code).or_insert_with(|| color.clone());
            }
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.buckets().all(|(_, codes)| codes.is_empty())
    }

    /// Passport code the provider built this map for, if it says so. Both
    /// `{"code": "SA"}` and a bare `"SA"` are accepted.
    pub fn passport_code(&self) -> Option<&str> {
        match self.passport.as_ref()? {
            Value::String(code) => Some(code),
            other => other.get("code")?.as_str(),
        }
    }

    /// False only when the map names a different passport than `alpha2`.
    pub fn is_for_passport(&self, alpha2: &str) -> bool {
        self.passport_code()
            .is_none_or(|code| code.trim().eq_ignore_ascii_case(alpha2))
    }
}

/// Detailed single-route response. Fields the service does not interpret
/// are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaCheckResponse {
    pub data: VisaCheckData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaCheckData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_registration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_rules: Option<VisaRules>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_rule: Option<VisaRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_rule: Option<VisaRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<VisaStatusColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VisaCheckResponse {
    /// Status implied by the primary rule's color.
    pub fn primary_status(&self) -> Option<VisaStatus> {
        let rule = self.data.visa_rules.as_ref()?.primary_rule.as_ref()?;
        rule.color.as_ref().map(VisaStatus::from)
    }
}
