use serde::{Deserialize, Serialize};

/// Static fact sheet for one U.S. state.
///
/// Rank-style attributes (`conservativeness`, `beauty`, `cost`,
/// `property_taxes`, `crime_rate`, `education`) are positions out of 50
/// where 1 is "most" of the named quality.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StateRecord {
    pub name: String,
    pub conservativeness: f64,
    pub beauty: f64,
    pub cost: f64,
    pub average_temp: f64, // Fahrenheit
    pub property_taxes: f64,
    pub property_appreciation: f64, // Percent
    pub population_per_square_mile: f64,
    pub crime_rate: f64,
    pub education: f64,
    pub is_coastal: bool,
}
