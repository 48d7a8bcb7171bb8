use crate::error::{Error, Result};
use crate::vocab::Vocab;
use crate::weighting::{Weighting, WeightedVectors};

use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use ndarray_stats::DeviationExt;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};


pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_MIN_COUNT: usize = 3;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    L1,
    Euclidean,
    Cosine,
}

impl Metric {

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::L1 => "L1",
            Metric::Euclidean => "EUCLIDEAN",
            Metric::Cosine => "COSINE",
        }
    }

    /// Distances grow as words drift apart, cosine grows as they get closer.
    pub fn is_distance(&self) -> bool {
        !matches!(self, Metric::Cosine)
    }

    /// Scores two already normalized vectors.
    pub fn score<S, T>(&self, a: &ArrayBase<S, Ix1>, b: &ArrayBase<T, Ix1>) -> Result<f64>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = f64> {

        let score = match self {
            Metric::L1 => a.l1_dist(b),
            Metric::Euclidean => a.l2_dist(b),
            Metric::Cosine => return Ok(a.dot(b)),
        };
        score.map_err(|e| Error::Inconsistent(format!("cannot compute {} distance: {}", self, e)))
    }
}

impl FromStr for Metric {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L1" => Ok(Metric::L1),
            "EUCLIDEAN" => Ok(Metric::Euclidean),
            "COSINE" => Ok(Metric::Cosine),
            other => Err(Error::UnknownMetric(other.to_owned())),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Divides `v` by its euclidean norm.
///
/// An all zero vector has no direction: every entry of the result is NaN.
pub fn normalize(v: ArrayView1<f64>) -> Array1<f64> {
    let norm = v.dot(&v).sqrt();
    v.mapv(|x| x / norm)
}


/// Ranks vocabulary words by how their context vectors compare to a query word's.
pub struct Similarity<'a> {
    vocab: &'a Vocab,
    vectors: &'a WeightedVectors,
    top_k: usize,
    min_count: usize,
    ascending_distances: bool,
}

impl<'a> Similarity<'a> {

    pub fn new(vocab: &'a Vocab, vectors: &'a WeightedVectors) -> Similarity<'a> {
        Self {
            vocab,
            vectors,
            top_k: DEFAULT_TOP_K,
            min_count: DEFAULT_MIN_COUNT,
            ascending_distances: false,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Candidates seen fewer than `min_count` times in the corpus are never ranked.
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Rank L1 and EUCLIDEAN nearest first instead of by descending distance.
    pub fn with_ascending_distances(mut self, ascending: bool) -> Self {
        self.ascending_distances = ascending;
        self
    }

    /// The `top_k` best scoring words for `word`, best first.
    ///
    /// Scores are sorted in descending order for every metric unless ascending distances
    /// were requested, so by default L1 and EUCLIDEAN list the farthest words first.
    /// A `metric` of `None` stands for an unrecognised metric name: every candidate scores 0.
    /// Equal scores keep vocabulary order.
    pub fn find_most_similar(&self, word: &str, weighting: Weighting, metric: Option<Metric>) -> Result<Vec<(String, f64)>> {

        let index = self.vocab.index_of(word).ok_or_else(|| Error::UnknownWord(word.to_owned()))?;
        let w = self.vectors.get(weighting);

        let query = normalize(w.row(index));
        if query.iter().any(|x| x.is_nan()) {
            warn!("'{}' has an all zero {} vector, its scores are NaN", word, weighting);
        }

        let mut indexed_scores: Vec<(usize, f64)> = Vec::new();
        let mut zero_candidates = 0;
        for i in 0..self.vocab.len() {

            // use only words seen often enough and do not compare the word to itself
            if i == index || self.vocab.count(i) < self.min_count {
                continue;
            }

            let candidate = normalize(w.row(i));
            if candidate.iter().any(|x| x.is_nan()) {
                zero_candidates += 1;
            }

            let score = match metric {
                Some(metric) => metric.score(&query, &candidate)?,
                None => 0.0,
            };
            indexed_scores.push((i, score));
        }

        if zero_candidates > 0 {
            warn!("{} candidates for '{}' have all zero {} vectors, their scores are NaN", zero_candidates, word, weighting);
        }
        debug!("scored {} candidates for '{}'", indexed_scores.len(), word);

        // stable sort, ties stay in vocabulary order
        match metric {
            Some(metric) if metric.is_distance() && self.ascending_distances => {
                indexed_scores.sort_by(|(_i, s), (_j, t)| s.total_cmp(t));
            },
            _ => indexed_scores.sort_by(|(_i, s), (_j, t)| t.total_cmp(s)),
        }
        indexed_scores.truncate(self.top_k);

        Ok(indexed_scores
            .into_iter()
            .map(|(i, score)| (self.vocab.word(i).to_owned(), score))
            .collect())
    }
}
