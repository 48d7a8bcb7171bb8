use crate::error::{Error, Result};


/// One line of the query file, `<word> <weighting> <metric>`.
///
/// Weighting and metric stay as given so they can be echoed back and validated by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub word: String,
    pub weighting: String,
    pub metric: String,
}

impl Query {

    /// Parses a query line. Blank lines give `Ok(None)`, tokens past the third are ignored.
    pub fn parse(line: &str) -> Result<Option<Query>> {
        let mut toks = line.split_whitespace();
        let word = match toks.next() {
            Some(word) => word,
            None => return Ok(None),
        };
        match (toks.next(), toks.next()) {
            (Some(weighting), Some(metric)) => Ok(Some(Query {
                word: word.to_owned(),
                weighting: weighting.to_owned(),
                metric: metric.to_owned(),
            })),
            _ => Err(Error::MalformedQuery(line.trim().to_owned())),
        }
    }
}
