//! Resolution of map features to alpha-3 codes.
//!
//! World map feeds identify a feature by a numeric id (zero padding is often
//! lost on the way, `4` instead of `004`) and sometimes carry an `ISO_A3`
//! property as well. Resolution runs an ordered chain of rules and stops at
//! the first one that answers; the numeric id always goes first.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codes::CodeTranslator;

/// Feature id as found in TopoJSON/GeoJSON, either a number or a string.
///
/// Numbers are signed: Natural Earth tags unassigned features with `-99`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{n}"),
            FeatureId::Text(s) => f.write_str(s),
        }
    }
}

/// The part of a map feature the resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFeature {
    #[serde(default)]
    pub id: Option<FeatureId>,
    #[serde(default, rename = "ISO_A3", alias = "iso_a3")]
    pub iso_a3: Option<String>,
}

impl MapFeature {
    pub fn numeric(id: impl Into<String>) -> Self {
        Self {
            id: Some(FeatureId::Text(id.into())),
            iso_a3: None,
        }
    }

    pub fn with_iso_a3(mut self, iso_a3: impl Into<String>) -> Self {
        self.iso_a3 = Some(iso_a3.into());
        self
    }
}

trait ResolutionRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve<'a>(
        &self,
        feature: &MapFeature,
        codes: &'a dyn CodeTranslator,
    ) -> Option<&'a str>;
}

struct FeatureIdRule;

impl ResolutionRule for FeatureIdRule {
    fn name(&self) -> &'static str {
        "feature_id"
    }

    fn resolve<'a>(
        &self,
        feature: &MapFeature,
        codes: &'a dyn CodeTranslator,
    ) -> Option<&'a str> {
        let id = feature.id.as_ref()?.to_string();
        codes.to_alpha3(&id)
    }
}

struct IsoA3PropertyRule;

impl ResolutionRule for IsoA3PropertyRule {
    fn name(&self) -> &'static str {
        "iso_a3_property"
    }

    fn resolve<'a>(
        &self,
        feature: &MapFeature,
        codes: &'a dyn CodeTranslator,
    ) -> Option<&'a str> {
        let iso_a3 = feature.iso_a3.as_deref()?;
        let alpha2 = codes.alpha3_to_alpha2(iso_a3)?;
        codes.alpha2_to_alpha3(alpha2)
    }
}

/// Ordered resolution chain: feature id, then `ISO_A3` property.
pub struct FeatureResolver {
    rules: Vec<Box<dyn ResolutionRule>>,
}

impl fmt::Debug for FeatureResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureResolver")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for FeatureResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureResolver {
    pub fn new() -> Self {
        Self {
            rules: vec![Box::new(FeatureIdRule), Box::new(IsoA3PropertyRule)],
        }
    }

    /// Alpha-3 code for `feature`, or `None` when no rule recognizes it.
    pub fn resolve<'a>(
        &self,
        feature: &MapFeature,
        codes: &'a dyn CodeTranslator,
    ) -> Option<&'a str> {
        self.rules
            .iter()
            .find_map(|rule| rule.resolve(feature, codes))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CountryCodes;

    #[test]
    fn test_numeric_id_is_primary() {
        let codes = CountryCodes::standard().unwrap();
        let resolver = FeatureResolver::new();
        // numeric says France, property says Germany: numeric wins
        let feature = MapFeature::numeric("250").with_iso_a3("DEU");
        assert_eq!(resolver.resolve(&feature, &codes), Some("FRA"));
    }

    #[test]
    fn test_unpadded_numeric_id() {
        let codes = CountryCodes::standard().unwrap();
        let resolver = FeatureResolver::new();
        let feature = MapFeature {
            id: Some(FeatureId::Number(4)),
            iso_a3: None,
        };
        assert_eq!(resolver.resolve(&feature, &codes), Some("AFG"));
    }

    #[test]
    fn test_falls_back_to_iso_a3_property() {
        let codes = CountryCodes::standard().unwrap();
        let resolver = FeatureResolver::new();
        // Natural Earth marks Kosovo with -99
        let feature = MapFeature::numeric("-99").with_iso_a3("xkx");
        assert_eq!(resolver.resolve(&feature, &codes), Some("XKX"));
    }

    #[test]
    fn test_unknown_feature() {
        let codes = CountryCodes::standard().unwrap();
        let resolver = FeatureResolver::new();
        let feature = MapFeature::numeric("999").with_iso_a3("-99");
        assert_eq!(resolver.resolve(&feature, &codes), None);
        assert_eq!(resolver.resolve(&MapFeature::default(), &codes), None);
    }

    #[test]
    fn test_negative_id_does_not_break_batch() {
        let codes = CountryCodes::standard().unwrap();
        let resolver = FeatureResolver::new();
        let features: Vec<MapFeature> = serde_json::from_str(
            r#"[{"id":4},{"id":-99,"ISO_A3":"XKX"},{"id":"250"},{"id":-99}]"#,
        )
        .unwrap();
        assert_eq!(features.len(), 4);
        assert_eq!(features[1].id, Some(FeatureId::Number(-99)));

        let resolved: Vec<_> = features
            .iter()
            .map(|f| resolver.resolve(f, &codes))
            .collect();
        assert_eq!(resolved, vec![Some("AFG"), Some("XKX"), Some("FRA"), None]);
    }
}
