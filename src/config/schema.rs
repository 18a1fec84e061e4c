use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::RawWeightConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CSV dataset to rank instead of the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    #[serde(default)]
    pub weights: RawWeightConfig,
}
