use crate::context::context_positions;
use crate::error::{Error, Result};
use crate::vocab::Vocab;

use ndarray::Array2;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;


/// The weighting applied to raw cooccurrence counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weighting {
    Tf,
    TfIdf,
    Pmi,
}

impl Weighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weighting::Tf => "TF",
            Weighting::TfIdf => "TF-IDF",
            Weighting::Pmi => "PMI",
        }
    }
}

impl FromStr for Weighting {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TF" => Ok(Weighting::Tf),
            "TF-IDF" => Ok(Weighting::TfIdf),
            "PMI" => Ok(Weighting::Pmi),
            other => Err(Error::UnknownWeighting(other.to_owned())),
        }
    }
}

impl Display for Weighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// `ln(num_sentences / df)`, rejecting document frequencies no correct count can produce.
pub fn idf(num_sentences: usize, df: usize) -> Result<f64> {
    if df == 0 || df > num_sentences {
        return Err(Error::Inconsistent(format!("document frequency {} with {} sentences", df, num_sentences)));
    }
    Ok((num_sentences as f64 / df as f64).ln())
}

/// Pointwise mutual information, 0 whenever the joint probability is not positive.
pub fn pmi(p_xy: f64, p_x: f64, p_y: f64) -> f64 {
    if p_xy > 0.0 {
        (p_xy / (p_x * p_y)).ln()
    } else {
        0.0
    }
}


/// The three families of context vectors, one row per vocabulary word.
/// Read only once built.
#[derive(Clone, Debug)]
pub struct WeightedVectors {
    tf: Array2<f64>,
    tf_idf: Array2<f64>,
    pmi: Array2<f64>,
}

impl WeightedVectors {

    pub fn build(vocab: &Vocab, tf: Array2<f64>, window_size: usize) -> Result<WeightedVectors> {

        let num_words = vocab.num_words() as f64;
        let mut tf_idf: Array2<f64> = Array2::zeros(tf.raw_dim());
        let mut pmi_mat: Array2<f64> = Array2::zeros(tf.raw_dim());

        let idfs = (0..vocab.len())
        .map(|c| idf(vocab.num_sentences(), vocab.df(c)))
        .collect::<Result<Vec<f64>>>()?;

        // only observed (word, context) pairs are visited, every other entry stays 0
        for sentence in vocab.sentences() {

            let ids = sentence
            .iter()
            .filter_map(|tok| vocab.index_of(tok))
            .collect::<Vec<usize>>();

            for (i, &w) in ids.iter().enumerate() {

                let p_x = vocab.count(w) as f64 / num_words;

                for j in context_positions(ids.len(), i, window_size) {
                    let c = ids[j];
                    tf_idf[[w, c]] = tf[[w, c]] * idfs[c];

                    let p_xy = tf[[w, c]] / num_words;
                    let p_y = vocab.count(c) as f64 / num_words;
                    pmi_mat[[w, c]] = pmi(p_xy, p_x, p_y);
                }
            }
        }

        debug!("weighted {} vectors of dimension {}", tf.nrows(), tf.ncols());
        Ok(Self { tf, tf_idf, pmi: pmi_mat })
    }

    pub fn get(&self, weighting: Weighting) -> &Array2<f64> {
        match weighting {
            Weighting::Tf => &self.tf,
            Weighting::TfIdf => &self.tf_idf,
            Weighting::Pmi => &self.pmi,
        }
    }
}
