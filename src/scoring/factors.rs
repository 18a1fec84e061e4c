use super::config::{AttributeKey, WeightConfig};

/// Upper bound of the rank-style attribute scale
pub const SCALE_MAX: f64 = 50.0;

pub const COASTAL_BONUS: f64 = 25.0;
pub const INLAND_BONUS: f64 = 0.0;

/// Lowest value the population density transform may produce
pub const DENSITY_FLOOR: f64 = 0.0;

/// Priority tier of an attribute within a configuration.
///
/// Prioritizing any attribute doubles it and halves every attribute that
/// is not prioritized; with no priorities every attribute counts once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Prioritized,
    Deprioritized,
    Neutral,
}

impl Tier {
    pub fn of(attr: AttributeKey, config: &WeightConfig) -> Self {
        if config.is_prioritized(attr) {
            Tier::Prioritized
        } else if config.any_prioritized() {
            Tier::Deprioritized
        } else {
            Tier::Neutral
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            Tier::Prioritized => 2.0,
            Tier::Deprioritized => 0.5,
            Tier::Neutral => 1.0,
        }
    }
}

/// Weight times the tier factor of `attr`
pub fn attribute_multiplier(attr: AttributeKey, config: &WeightConfig) -> f64 {
    config.weight(attr) * Tier::of(attr, config).factor()
}

/// Turn "lower is better" into "higher is better"
pub fn flip(value: f64) -> f64 {
    SCALE_MAX - value
}

/// Score where a higher raw value earns more points. Crime rate is scored this way.
pub fn score_direct(value: f64, attr: AttributeKey, config: &WeightConfig) -> f64 {
    value * attribute_multiplier(attr, config)
}

/// Score where a lower raw value (e.g. rank #1 of 50) earns more points
pub fn score_flipped(value: f64, attr: AttributeKey, config: &WeightConfig) -> f64 {
    flip(value) * attribute_multiplier(attr, config)
}

/// Closeness to the ideal temperature before weighting. Not floored.
pub fn temperature_value(value: f64, config: &WeightConfig) -> f64 {
    flip((value - config.ideal_average_temp()).abs())
}

pub fn score_average_temp(value: f64, config: &WeightConfig) -> f64 {
    temperature_value(value, config) * attribute_multiplier(AttributeKey::AverageTemp, config)
}

/// Closeness to the ideal density before weighting, floored at `DENSITY_FLOOR`
pub fn density_value(value: f64, config: &WeightConfig) -> f64 {
    flip((value - config.ideal_population_density()).abs()).max(DENSITY_FLOOR)
}

pub fn score_population_density(value: f64, config: &WeightConfig) -> f64 {
    density_value(value, config) * attribute_multiplier(AttributeKey::PopulationDensity, config)
}

pub fn coastal_value(is_coastal: bool) -> f64 {
    if is_coastal {
        COASTAL_BONUS
    } else {
        INLAND_BONUS
    }
}

pub fn score_coastal(is_coastal: bool, config: &WeightConfig) -> f64 {
    coastal_value(is_coastal) * attribute_multiplier(AttributeKey::Coastal, config)
}
