//! Crossover analysis between the series and logarithmic-integral
//! Hardy-Littlewood predictors.
//!
//! Samples even N on stratified logarithmic scales, computes the exact
//! Goldbach count and both predictions for each, and summarises where the
//! integral form overtakes the series form.

pub mod collect;
pub mod config;
pub mod error;
pub mod output;
pub mod sampling;
pub mod summary;

pub use collect::{collect_data, collect_record, CrossoverRecord};
pub use config::{CollectionConfig, Mode};
pub use error::CrossoverError;
pub use sampling::generate_sampling_points;
pub use summary::{summarize, CrossoverSummary};
