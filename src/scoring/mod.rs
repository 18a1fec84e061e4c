pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_score, compute_appreciation_ranks, find_ranked, rank_states, score_state,
    AppreciationRanks, FactorContribution, ScoreBreakdown, ScoreResult, ScoredState,
};
pub use factors::{
    attribute_multiplier, score_average_temp, score_coastal, score_direct, score_flipped,
    score_population_density, Tier,
};
pub use validation::validate_weights;
