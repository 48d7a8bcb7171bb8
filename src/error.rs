use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write results: {0}")]
    Write(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("cannot parse json config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown weighting '{0}', expected TF, TF-IDF or PMI")]
    UnknownWeighting(String),
    #[error("unknown metric '{0}', expected L1, EUCLIDEAN or COSINE")]
    UnknownMetric(String),
    #[error("word '{0}' is not in the vocabulary")]
    UnknownWord(String),
    #[error("malformed query line '{0}', expected <word> <weighting> <metric>")]
    MalformedQuery(String),
    #[error("inconsistent corpus statistics: {0}")]
    Inconsistent(String),
}
