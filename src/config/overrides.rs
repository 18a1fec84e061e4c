use std::str::FromStr;

use crate::scoring::{AttributeKey, RawNumber, RawWeightConfig};

/// A `--weight ATTR=VALUE` argument.
///
/// Only the attribute must be valid; the value is kept as text so a
/// malformed number falls back to the default instead of aborting.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightOverride {
    pub attribute: AttributeKey,
    pub value: String,
}

impl FromStr for WeightOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (attr, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ATTR=VALUE, got '{}'", s))?;
        Ok(WeightOverride {
            attribute: attr.parse()?,
            value: value.trim().to_string(),
        })
    }
}

/// Command-line adjustments layered over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub prioritize: Vec<AttributeKey>,
    pub weights: Vec<WeightOverride>,
    pub ideal_average_temp: Option<String>,
    pub ideal_population_density: Option<String>,
}

impl Overrides {
    /// Apply on top of `raw`; later `--weight` arguments win over earlier ones.
    pub fn apply(&self, raw: &mut RawWeightConfig) {
        for key in &self.prioritize {
            raw.set_prioritized(*key, true);
        }
        for w in &self.weights {
            raw.set_weight(w.attribute, RawNumber::Text(w.value.clone()));
        }
        if let Some(ref temp) = self.ideal_average_temp {
            raw.ideal_average_temp = Some(RawNumber::Text(temp.clone()));
        }
        if let Some(ref density) = self.ideal_population_density {
            raw.ideal_population_density = Some(RawNumber::Text(density.clone()));
        }
    }
}
