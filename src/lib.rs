mod config;
mod context;
mod cooccurrence;
mod error;
mod pipeline;
mod query;
mod similarity;
mod vocab;
mod weighting;

pub use config::{files_handling, Config, Params};
pub use context::{context_positions, context_window};
pub use cooccurrence::Counts;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use query::Query;
pub use similarity::{normalize, Metric, Similarity};
pub use vocab::{StopList, Tokenizer, Vocab};
pub use weighting::{idf, pmi, Weighting, WeightedVectors};
