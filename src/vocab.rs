use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Words removed from the corpus before any counting happens.
#[derive(Clone, Debug, Default)]
pub struct StopList {
    words: HashSet<String>,
}

impl StopList {

    pub fn new<I, S>(words: I) -> StopList
    where
        I: IntoIterator<Item = S>,
        S: Into<String> {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    // only the first whitespace delimited token of each line is a stopword, blank lines are ignored
    pub fn from_lines<I, S>(lines: I) -> StopList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> {
        let words = lines
        .into_iter()
        .filter_map(|line| line.as_ref().split_whitespace().next().map(str::to_owned))
        .collect::<HashSet<String>>();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}


// defines the behavior needed for tokenizing a corpus line
pub trait Tokenizer {
    fn tokenize(&self, line: &str) -> Vec<String>;
}

impl Tokenizer for StopList {
    // lower case, split on whitespace, keep purely alphabetic tokens that are not stopwords
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.to_lowercase()
        .split_whitespace()
        .filter(|tok| !self.contains(tok) && is_alphabetic(tok))
        .map(str::to_owned)
        .collect()
    }
}

fn is_alphabetic(tok: &str) -> bool {
    !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_lowercase())
}


/// Vocabulary and corpus statistics, built in a single pass over the corpus lines.
///
/// Indexes are handed out in order of first occurrence, so `i2t[t2i[w]] == w` and
/// every per-word vector in the crate is laid out along this order.
#[derive(Clone, Debug)]
pub struct Vocab {
    t2i: HashMap<String, usize>,
    i2t: Vec<String>,
    counts: Vec<usize>,
    df: Vec<usize>,
    num_words: usize,
    sentences: Vec<Vec<String>>,
}

impl Vocab {

    pub fn build<I, S, T>(lines: I, tokenizer: &T) -> Vocab
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: Tokenizer {

        let mut vocab = Vocab {
            t2i: HashMap::new(),
            i2t: Vec::new(),
            counts: Vec::new(),
            df: Vec::new(),
            num_words: 0,
            sentences: Vec::new(),
        };

        for line in lines {
            vocab.accumulate(tokenizer.tokenize(line.as_ref()));
        }

        debug!("vocab built: {} words, {} occurrences, {} sentences", vocab.len(), vocab.num_words, vocab.sentences.len());
        vocab
    }

    fn accumulate(&mut self, sentence: Vec<String>) {

        // document frequency is raised once per sentence, occurrence counts every time
        let mut in_sentence: HashSet<usize> = HashSet::new();
        for tok in &sentence {

            let next = self.i2t.len();
            let i = *self.t2i.entry(tok.to_owned()).or_insert(next);
            if i == next {
                self.i2t.push(tok.to_owned());
                self.counts.push(0);
                self.df.push(0);
            }

            self.counts[i] += 1;
            if in_sentence.insert(i) {
                self.df[i] += 1;
            }
            self.num_words += 1;
        }

        // empty sentences still count as documents
        self.sentences.push(sentence);
    }

    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i2t.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.t2i.get(word).copied()
    }

    pub fn word(&self, index: usize) -> &str {
        &self.i2t[index]
    }

    /// Words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.i2t.iter().map(String::as_str)
    }

    pub fn count(&self, index: usize) -> usize {
        self.counts[index]
    }

    pub fn df(&self, index: usize) -> usize {
        self.df[index]
    }

    /// Total number of kept word occurrences in the corpus.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }
}
