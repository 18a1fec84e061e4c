use serde::Serialize;
use std::collections::HashMap;

use super::config::{AttributeKey, WeightConfig};
use super::factors::{attribute_multiplier, coastal_value, density_value, flip, temperature_value};
use crate::states::StateRecord;

/// 0-based position of each state when sorted by descending property appreciation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppreciationRanks {
    ranks: HashMap<String, usize>,
}

impl AppreciationRanks {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Rank of `name`, or one past the last rank if the state is unknown
    pub fn rank_or_last(&self, name: &str) -> usize {
        self.get(name).unwrap_or(self.ranks.len())
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Rank states by descending `property_appreciation`.
/// Ties keep input order; NaN appreciation sorts last.
pub fn compute_appreciation_ranks(states: &[StateRecord]) -> AppreciationRanks {
    let mut ordered: Vec<&StateRecord> = states.iter().collect();
    ordered.sort_by(|a, b| {
        descending_key(b.property_appreciation).total_cmp(&descending_key(a.property_appreciation))
    });

    let ranks = ordered
        .into_iter()
        .enumerate()
        .map(|(rank, state)| (state.name.clone(), rank))
        .collect();

    AppreciationRanks { ranks }
}

/// Sort key for descending orders: NaN compares as -inf so it lands last
fn descending_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub attribute: AttributeKey,
    pub value: f64,      // Transformed input (flipped, distance-based, bonus)
    pub multiplier: f64, // Weight times priority tier
    pub points: f64,     // value * multiplier
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    pub fn get(&self, attribute: AttributeKey) -> Option<&FactorContribution> {
        self.factors.iter().find(|f| f.attribute == attribute)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// A state together with its score for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredState {
    #[serde(flatten)]
    pub state: StateRecord,
    pub appreciation_rank: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score a state, keeping every attribute's contribution.
///
/// The total is unbounded and not normalized; only relative order is meaningful.
pub fn calculate_score(
    state: &StateRecord,
    config: &WeightConfig,
    ranks: &AppreciationRanks,
) -> ScoreResult {
    let appreciation_rank = ranks.rank_or_last(&state.name) as f64;

    let inputs = [
        (AttributeKey::Cost, flip(state.cost)),
        (AttributeKey::Beauty, flip(state.beauty)),
        (AttributeKey::Conservativeness, flip(state.conservativeness)),
        (AttributeKey::AverageTemp, temperature_value(state.average_temp, config)),
        (AttributeKey::Coastal, coastal_value(state.is_coastal)),
        (AttributeKey::Education, flip(state.education)),
        (
            AttributeKey::PopulationDensity,
            density_value(state.population_per_square_mile, config),
        ),
        (AttributeKey::LowCrime, state.crime_rate),
        (AttributeKey::PropertyTaxes, flip(state.property_taxes)),
        (AttributeKey::PropertyAppreciation, flip(appreciation_rank)),
    ];

    let mut score = 0.0;
    let mut factors = Vec::with_capacity(inputs.len());

    for (attribute, value) in inputs {
        let multiplier = attribute_multiplier(attribute, config);
        let points = value * multiplier;
        score += points;
        factors.push(FactorContribution {
            attribute,
            value,
            multiplier,
            points,
        });
    }

    ScoreResult {
        score,
        breakdown: ScoreBreakdown { factors },
    }
}

pub fn score_state(state: &StateRecord, config: &WeightConfig, ranks: &AppreciationRanks) -> f64 {
    calculate_score(state, config, ranks).score
}

/// Score every state and sort by descending score.
///
/// Exact ties keep dataset order, so the output is reproducible.
pub fn rank_states(states: &[StateRecord], config: &WeightConfig) -> Vec<ScoredState> {
    let ranks = compute_appreciation_ranks(states);

    let mut scored: Vec<ScoredState> = states
        .iter()
        .map(|state| {
            let result = calculate_score(state, config, &ranks);
            ScoredState {
                state: state.clone(),
                appreciation_rank: ranks.rank_or_last(&state.name),
                score: result.score,
                breakdown: result.breakdown,
            }
        })
        .collect();

    for s in scored.iter().filter(|s| !s.score.is_finite()) {
        tracing::warn!(state = %s.state.name, score = s.score, "non-finite score, ranked last");
    }

    // sort_by is stable, so equal scores stay in dataset order
    scored.sort_by(|a, b| descending_key(b.score).total_cmp(&descending_key(a.score)));

    tracing::debug!(
        states = scored.len(),
        any_prioritized = config.any_prioritized(),
        "ranked states"
    );

    scored
}

/// Find a state in a ranking by 1-based position or case-insensitive name.
/// Returns the 0-based position.
pub fn find_ranked(ranked: &[ScoredState], target: &str) -> Option<usize> {
    let target = target.trim();
    if let Ok(index) = target.parse::<usize>() {
        if (1..=ranked.len()).contains(&index) {
            return Some(index - 1);
        }
        return None;
    }
    ranked
        .iter()
        .position(|s| s.state.name.eq_ignore_ascii_case(target))
}
