use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 0.0..=2.0;
pub const DEFAULT_IDEAL_AVERAGE_TEMP: f64 = 55.0;
pub const DEFAULT_IDEAL_POPULATION_DENSITY: f64 = 50.0;
pub const IDEAL_RANGE: RangeInclusive<f64> = 20.0..=80.0;

/// One of the ten attributes a state is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    Conservativeness,
    LowCrime,
    Education,
    PopulationDensity,
    Cost,
    PropertyAppreciation,
    PropertyTaxes,
    Coastal,
    Beauty,
    AverageTemp,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 10] = [
        AttributeKey::Conservativeness,
        AttributeKey::LowCrime,
        AttributeKey::Education,
        AttributeKey::PopulationDensity,
        AttributeKey::Cost,
        AttributeKey::PropertyAppreciation,
        AttributeKey::PropertyTaxes,
        AttributeKey::Coastal,
        AttributeKey::Beauty,
        AttributeKey::AverageTemp,
    ];

    /// Key used in the YAML config and on the command line
    pub fn config_key(self) -> &'static str {
        match self {
            AttributeKey::Conservativeness => "conservativeness",
            AttributeKey::LowCrime => "low_crime",
            AttributeKey::Education => "education",
            AttributeKey::PopulationDensity => "population_density",
            AttributeKey::Cost => "cost",
            AttributeKey::PropertyAppreciation => "property_appreciation",
            AttributeKey::PropertyTaxes => "property_taxes",
            AttributeKey::Coastal => "coastal",
            AttributeKey::Beauty => "beauty",
            AttributeKey::AverageTemp => "average_temp",
        }
    }

    /// Human-readable label for breakdown output
    pub fn label(self) -> &'static str {
        match self {
            AttributeKey::Conservativeness => "Conservativeness",
            AttributeKey::LowCrime => "Low Crime",
            AttributeKey::Education => "Education",
            AttributeKey::PopulationDensity => "Population Density",
            AttributeKey::Cost => "Low Housing Cost",
            AttributeKey::PropertyAppreciation => "High Property Appreciation",
            AttributeKey::PropertyTaxes => "Low Property Taxes",
            AttributeKey::Coastal => "Coastal",
            AttributeKey::Beauty => "Natural Beauty",
            AttributeKey::AverageTemp => "Average Temperature",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl FromStr for AttributeKey {
    type Err = String;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "conservativeness" | "conservative" => Ok(AttributeKey::Conservativeness),
            "lowcrime" | "crime" | "crimerate" => Ok(AttributeKey::LowCrime),
            "education" => Ok(AttributeKey::Education),
            "populationdensity" | "density" => Ok(AttributeKey::PopulationDensity),
            "cost" => Ok(AttributeKey::Cost),
            "propertyappreciation" | "appreciation" => Ok(AttributeKey::PropertyAppreciation),
            "propertytaxes" | "taxes" => Ok(AttributeKey::PropertyTaxes),
            "coastal" | "costal" => Ok(AttributeKey::Coastal),
            "beauty" => Ok(AttributeKey::Beauty),
            "averagetemp" | "temp" | "temperature" => Ok(AttributeKey::AverageTemp),
            _ => Err(format!(
                "unknown attribute '{}' (expected one of: {})",
                s,
                AttributeKey::ALL
                    .iter()
                    .map(|k| k.config_key())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Priority flag and weight for a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeWeight {
    pub prioritized: bool,
    pub weight: f64,
}

impl Default for AttributeWeight {
    fn default() -> Self {
        Self {
            prioritized: false,
            weight: DEFAULT_WEIGHT,
        }
    }
}

/// Validated weight configuration for one scoring pass.
///
/// Every field is guaranteed to be within its documented range; invalid
/// input is replaced by the default when the value is built.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfig {
    attributes: [AttributeWeight; 10],
    ideal_average_temp: f64,
    ideal_population_density: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            attributes: [AttributeWeight::default(); 10],
            ideal_average_temp: DEFAULT_IDEAL_AVERAGE_TEMP,
            ideal_population_density: DEFAULT_IDEAL_POPULATION_DENSITY,
        }
    }
}

impl WeightConfig {
    /// Build a configuration from untrusted input.
    ///
    /// Missing, non-numeric and out-of-range values fall back to their defaults.
    /// Use [`super::validate_weights`] to find out which fields were discarded.
    pub fn from_raw(raw: &RawWeightConfig) -> Self {
        let mut config = Self::default();

        for key in AttributeKey::ALL {
            if let Some(attr) = raw.attribute(key) {
                let slot = &mut config.attributes[key.index()];
                slot.prioritized = attr.prioritized.as_ref().is_some_and(RawFlag::is_set);
                slot.weight = resolve_or_default(attr.weight.as_ref(), WEIGHT_RANGE, DEFAULT_WEIGHT);
            }
        }

        config.ideal_average_temp = resolve_or_default(
            raw.ideal_average_temp.as_ref(),
            IDEAL_RANGE,
            DEFAULT_IDEAL_AVERAGE_TEMP,
        );
        config.ideal_population_density = resolve_or_default(
            raw.ideal_population_density.as_ref(),
            IDEAL_RANGE,
            DEFAULT_IDEAL_POPULATION_DENSITY,
        );

        config
    }

    pub fn prioritize(mut self, key: AttributeKey) -> Self {
        self.attributes[key.index()].prioritized = true;
        self
    }

    /// Set an attribute weight; values outside `WEIGHT_RANGE` fall back to the default.
    pub fn with_weight(mut self, key: AttributeKey, weight: f64) -> Self {
        self.attributes[key.index()].weight = in_range_or(weight, WEIGHT_RANGE, DEFAULT_WEIGHT);
        self
    }

    pub fn with_ideal_average_temp(mut self, temp: f64) -> Self {
        self.ideal_average_temp = in_range_or(temp, IDEAL_RANGE, DEFAULT_IDEAL_AVERAGE_TEMP);
        self
    }

    pub fn with_ideal_population_density(mut self, density: f64) -> Self {
        self.ideal_population_density =
            in_range_or(density, IDEAL_RANGE, DEFAULT_IDEAL_POPULATION_DENSITY);
        self
    }

    pub fn attribute(&self, key: AttributeKey) -> AttributeWeight {
        self.attributes[key.index()]
    }

    pub fn is_prioritized(&self, key: AttributeKey) -> bool {
        self.attributes[key.index()].prioritized
    }

    pub fn weight(&self, key: AttributeKey) -> f64 {
        self.attributes[key.index()].weight
    }

    /// True if at least one attribute is prioritized
    pub fn any_prioritized(&self) -> bool {
        self.attributes.iter().any(|a| a.prioritized)
    }

    pub fn ideal_average_temp(&self) -> f64 {
        self.ideal_average_temp
    }

    pub fn ideal_population_density(&self) -> f64 {
        self.ideal_population_density
    }
}

fn in_range_or(value: f64, range: RangeInclusive<f64>, default: f64) -> f64 {
    if range.contains(&value) {
        value
    } else {
        default
    }
}

fn resolve_or_default(raw: Option<&RawNumber>, range: RangeInclusive<f64>, default: f64) -> f64 {
    raw.and_then(|n| n.resolve(&range).ok()).unwrap_or(default)
}

/// A number as it arrives from user input: either already numeric or still text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    /// Any other YAML value (bool, list, map); always unusable
    #[serde(skip_serializing)]
    Invalid(IgnoredAny),
}

impl RawNumber {
    /// Interpret the value and check it against `range`.
    /// The error describes why the value is unusable.
    pub fn resolve(&self, range: &RangeInclusive<f64>) -> Result<f64, String> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))?,
            RawNumber::Invalid(_) => return Err("value is not a number".to_string()),
        };

        if !value.is_finite() {
            return Err(format!("{} is not a finite number", value));
        }
        if !range.contains(&value) {
            return Err(format!(
                "{} is outside {}-{}",
                value,
                range.start(),
                range.end()
            ));
        }
        Ok(value)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

/// A yes/no flag as it arrives from user input.
///
/// Only `true` (or the text "true") sets the flag; anything else reads as unset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
    #[serde(skip_serializing)]
    Invalid(IgnoredAny),
}

impl RawFlag {
    pub fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            RawFlag::Invalid(_) => false,
        }
    }

    /// Err when the value is neither a bool nor "true"/"false"
    pub fn check(&self) -> Result<(), String> {
        match self {
            RawFlag::Bool(_) => Ok(()),
            RawFlag::Text(s)
                if s.trim().eq_ignore_ascii_case("true")
                    || s.trim().eq_ignore_ascii_case("false") =>
            {
                Ok(())
            }
            RawFlag::Text(s) => Err(format!("'{}' is not true or false", s)),
            RawFlag::Invalid(_) => Err("value is not true or false".to_string()),
        }
    }
}

impl From<bool> for RawFlag {
    fn from(value: bool) -> Self {
        RawFlag::Bool(value)
    }
}

/// Unvalidated per-attribute input.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawAttributeWeight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritized: Option<RawFlag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<RawNumber>,
}

/// Weight configuration as written by the user.
///
/// Every field is optional. Example YAML:
/// ```yaml
/// weights:
///   ideal_average_temp: 60
///   cost:
///     prioritized: true
///     weight: 1.5
///   coastal:
///     weight: 0.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawWeightConfig {
    /// Preferred yearly average temperature in Fahrenheit (20-80, default 55)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_average_temp: Option<RawNumber>,

    /// Preferred population per square mile (20-80, default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_population_density: Option<RawNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conservativeness: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_crime: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_density: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_appreciation: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_taxes: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coastal: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beauty: Option<RawAttributeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_temp: Option<RawAttributeWeight>,
}

impl RawWeightConfig {
    pub fn attribute(&self, key: AttributeKey) -> Option<&RawAttributeWeight> {
        match key {
            AttributeKey::Conservativeness => self.conservativeness.as_ref(),
            AttributeKey::LowCrime => self.low_crime.as_ref(),
            AttributeKey::Education => self.education.as_ref(),
            AttributeKey::PopulationDensity => self.population_density.as_ref(),
            AttributeKey::Cost => self.cost.as_ref(),
            AttributeKey::PropertyAppreciation => self.property_appreciation.as_ref(),
            AttributeKey::PropertyTaxes => self.property_taxes.as_ref(),
            AttributeKey::Coastal => self.coastal.as_ref(),
            AttributeKey::Beauty => self.beauty.as_ref(),
            AttributeKey::AverageTemp => self.average_temp.as_ref(),
        }
    }

    fn attribute_mut(&mut self, key: AttributeKey) -> &mut RawAttributeWeight {
        let slot = match key {
            AttributeKey::Conservativeness => &mut self.conservativeness,
            AttributeKey::LowCrime => &mut self.low_crime,
            AttributeKey::Education => &mut self.education,
            AttributeKey::PopulationDensity => &mut self.population_density,
            AttributeKey::Cost => &mut self.cost,
            AttributeKey::PropertyAppreciation => &mut self.property_appreciation,
            AttributeKey::PropertyTaxes => &mut self.property_taxes,
            AttributeKey::Coastal => &mut self.coastal,
            AttributeKey::Beauty => &mut self.beauty,
            AttributeKey::AverageTemp => &mut self.average_temp,
        };
        slot.get_or_insert_with(RawAttributeWeight::default)
    }

    pub fn set_prioritized(&mut self, key: AttributeKey, prioritized: bool) {
        self.attribute_mut(key).prioritized = Some(prioritized.into());
    }

    pub fn set_weight(&mut self, key: AttributeKey, weight: RawNumber) {
        self.attribute_mut(key).weight = Some(weight);
    }
}

impl From<&WeightConfig> for RawWeightConfig {
    /// Spell out every field, e.g. for writing a starter config file
    fn from(config: &WeightConfig) -> Self {
        let mut raw = RawWeightConfig {
            ideal_average_temp: Some(config.ideal_average_temp.into()),
            ideal_population_density: Some(config.ideal_population_density.into()),
            ..Default::default()
        };
        for key in AttributeKey::ALL {
            let attr = config.attribute(key);
            raw.set_prioritized(key, attr.prioritized);
            raw.set_weight(key, attr.weight.into());
        }
        raw
    }
}
