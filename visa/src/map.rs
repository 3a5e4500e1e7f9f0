//! Styling of world map features from the visa map.
//!
//! Features are resolved to alpha-3 (numeric id first, `ISO_A3` property
//! second) and then styled by the visa status of their alpha-2 code. The
//! home country always gets the home style; policy-excluded destinations
//! keep their color but cannot be clicked.
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use tracing::{debug, trace};
use visa_codes::{CodeTranslator, FeatureResolver, MapFeature};

use crate::model::{VisaMapData, VisaStatus, VisaStatusColor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureStyle {
    Home,
    Status {
        color: VisaStatusColor,
        status: VisaStatus,
    },
    /// Known country absent from the visa map
    NoData,
    /// Feature that no rule could resolve
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledFeature {
    pub alpha3: Option<String>,
    pub style: FeatureStyle,
    pub interactive: bool,
}

#[derive(Debug)]
pub struct MapColorizer {
    translator: Arc<dyn CodeTranslator>,
    resolver: FeatureResolver,
    home: Option<String>,
    excluded: HashSet<String>,
}

impl MapColorizer {
    /// `home` and `excluded` accept any code form; unknown ones are ignored.
    pub fn new(
        translator: Arc<dyn CodeTranslator>,
        home: &str,
        excluded: &[String],
    ) -> Self {
        let home = translator.to_alpha3(home).map(str::to_string);
        let excluded = excluded
            .iter()
            .filter_map(|code| translator.to_alpha3(code))
            .map(str::to_string)
            .collect();
        Self {
            translator,
            resolver: FeatureResolver::new(),
            home,
            excluded,
        }
    }

    pub fn style(
        &self,
        feature: &MapFeature,
        statuses: &HashMap<String, VisaStatusColor>,
    ) -> StyledFeature {
        let Some(alpha3) = self.resolver.resolve(feature, self.translator.as_ref())
        else {
            debug!(?feature, "Unresolved map feature");
            return StyledFeature {
                alpha3: None,
                style: FeatureStyle::Unknown,
                interactive: false,
            };
        };

        if self.home.as_deref() == Some(alpha3) {
            return StyledFeature {
                alpha3: Some(alpha3.to_string()),
                style: FeatureStyle::Home,
                interactive: false,
            };
        }

        let style = self
            .translator
            .alpha3_to_alpha2(alpha3)
            .and_then(|alpha2| statuses.get(alpha2))
            .map_or(FeatureStyle::NoData, |color| FeatureStyle::Status {
                status: VisaStatus::from(color),
                color: color.clone(),
            });
        let interactive = !self.excluded.contains(alpha3);
        trace!(alpha3, ?style, interactive, "Styled map feature");

        StyledFeature {
            alpha3: Some(alpha3.to_string()),
            style,
            interactive,
        }
    }

    /// Style a whole feature collection; bad features degrade individually.
    pub fn colorize_all(
        &self,
        features: &[MapFeature],
        map: &VisaMapData,
    ) -> Vec<StyledFeature> {
        let statuses = map.status_index(self.translator.as_ref());
        features.iter().map(|f| self.style(f, &statuses)).collect()
    }

    /// Lowercase alpha-2 id for a clicked feature, `None` when the feature
    /// is not clickable.
    pub fn alpha2_for_click(&self, alpha3: &str) -> Option<String> {
        let alpha3 = self.translator.to_alpha3(alpha3)?;
        if self.home.as_deref() == Some(alpha3) || self.excluded.contains(alpha3) {
            return None;
        }
        self.translator
            .alpha3_to_alpha2(alpha3)
            .map(|alpha2| alpha2.to_ascii_lowercase())
    }
}
