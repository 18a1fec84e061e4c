pub mod dataset;
pub mod types;

pub use dataset::{default_states, load_states, parse_states};
pub use types::StateRecord;
