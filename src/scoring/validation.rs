use super::config::{AttributeKey, RawWeightConfig, IDEAL_RANGE, WEIGHT_RANGE};

/// Report every field `WeightConfig::from_raw` will replace with its default.
/// Returns all problems at once (not just the first).
///
/// Scoring never fails on these; the list exists so callers can tell the user.
pub fn validate_weights(raw: &RawWeightConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref temp) = raw.ideal_average_temp {
        if let Err(e) = temp.resolve(&IDEAL_RANGE) {
            errors.push(format!("weights.ideal_average_temp: {}", e));
        }
    }

    if let Some(ref density) = raw.ideal_population_density {
        if let Err(e) = density.resolve(&IDEAL_RANGE) {
            errors.push(format!("weights.ideal_population_density: {}", e));
        }
    }

    for key in AttributeKey::ALL {
        let Some(attr) = raw.attribute(key) else {
            continue;
        };
        if let Some(Err(e)) = attr.prioritized.as_ref().map(|p| p.check()) {
            errors.push(format!("weights.{}.prioritized: {}", key, e));
        }
        if let Some(Err(e)) = attr.weight.as_ref().map(|w| w.resolve(&WEIGHT_RANGE)) {
            errors.push(format!("weights.{}.weight: {}", key, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
