//! Rank U.S. states by a weighted combination of attributes.
//!
//! The [`scoring`] module is a pure function of the state list and a
//! [`scoring::WeightConfig`]; everything else loads input and renders output.

pub mod config;
pub mod output;
pub mod scoring;
pub mod states;
pub mod telemetry;
