// imports
use crate::vocab::Vocab;

use ndarray::Array2;
use tracing::debug;


pub struct Counts {}

impl Counts {

    // this method counts cooccurrences of every pair of vocabulary words.
    // row `i` of the returned matrix is the raw context vector of word `i`: entry `j` is the number of
    // times word `j` appeared within `window_size` positions of word `i`, anywhere in the corpus.
    // the counts are symmetric in the window (left and right), each neighbour adds 1 regardless of distance.
    pub fn count(window_size: usize, vocab: &Vocab) -> Array2<f64> {

        let v = vocab.len();
        let mut cooc: Array2<f64> = Array2::zeros((v, v));

        for sequence in vocab.sentences() {

            // sentences only hold vocabulary words, so the lookups cannot miss
            let ids = sequence
            .iter()
            .filter_map(|tok| vocab.index_of(tok))
            .collect::<Vec<usize>>();
            let n = ids.len();

            for i in 0..n {

                let token_i = ids[i];

                // words to the left
                for j in (i.saturating_sub(window_size)..i).rev() {
                    cooc[[token_i, ids[j]]] += 1.0;
                }

                // words to the right
                for j in i+1..=i.saturating_add(window_size).min(n - 1) {
                    cooc[[token_i, ids[j]]] += 1.0;
                }
            }
        }

        debug!("counted {} cooccurrence slots over {} words", cooc.sum(), v);
        cooc
    }
}
