// imports
use crate::config::{files_handling, Config, Params};
use crate::cooccurrence::Counts;
use crate::error::{Error, Result};
use crate::query::Query;
use crate::similarity::{Metric, Similarity};
use crate::vocab::{StopList, Vocab};
use crate::weighting::{Weighting, WeightedVectors};

use std::env;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, warn};

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure -
    // -> configuration of arguments
    // -> reading stoplist, corpus and queries
    // -> vocab, cooccurrences and weights, then one ranking per query to stdout

    pub fn run() -> Result<()> {

        let args: Vec<String> = env::args().collect();
        let params = Config::new(&args)?.get_params();
        info!("{}", params);

        let stoplist = files_handling::read_input::<StopList>(&params.stoplist_file)?;
        let corpus = files_handling::read_input::<Vec<String>>(&params.corpus_file)?;
        let queries = files_handling::read_input::<Vec<String>>(&params.queries_file)?;
        info!("loaded {} stopwords, {} corpus lines, {} query lines", stoplist.len(), corpus.len(), queries.len());

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        Pipeline::execute(&params, &stoplist, &corpus, &queries, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn execute<W: Write>(params: &Params, stoplist: &StopList, corpus: &[String], queries: &[String], out: &mut W) -> Result<()> {

        let timer = Instant::now();
        let vocab = Vocab::build(corpus, stoplist);
        info!("built vocab of {} words, took {} ms", vocab.len(), timer.elapsed().as_millis());

        let timer = Instant::now();
        let tf = Counts::count(params.window_size, &vocab);
        info!("counted cooccurrences, took {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let weighted = WeightedVectors::build(&vocab, tf, params.window_size)?;
        info!("built TF-IDF and PMI vectors, took {} ms", timer.elapsed().as_millis());

        writeln!(out, "{} unique words", vocab.len())?;
        writeln!(out, "{} word occurences", vocab.num_words())?;
        writeln!(out, "{} sentences/lines/documents", vocab.num_sentences())?;
        writeln!(out)?;

        let similarity = Similarity::new(&vocab, &weighted)
        .with_top_k(params.top_k)
        .with_min_count(params.min_count)
        .with_ascending_distances(params.ascending_distances);

        let timer = Instant::now();
        for line in queries {

            // a bad line or an unknown word only skips that query
            let query = match Query::parse(line) {
                Ok(Some(query)) => query,
                Ok(None) => continue,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            let weighting: Weighting = query.weighting.parse()?;
            let metric = match query.metric.parse::<Metric>() {
                Ok(metric) => Some(metric),
                Err(e) => {
                    warn!("{}, every score of '{}' is 0", e, query.word);
                    None
                }
            };

            let ranking = match similarity.find_most_similar(&query.word, weighting, metric) {
                Ok(ranking) => ranking,
                Err(e @ Error::UnknownWord(_)) => {
                    warn!("skipping query '{}': {}", line.trim(), e);
                    continue;
                },
                Err(e) => return Err(e),
            };

            writeln!(out, "SIM: {} {} {}", query.word, query.weighting, query.metric)?;
            for (word, score) in ranking {
                writeln!(out, "{} {}", word, score)?;
            }
        }
        info!("answered queries, took {} ms", timer.elapsed().as_millis());

        Ok(())
    }
}


#[cfg(test)]
mod tests {

    use super::Pipeline;
    use crate::config::Params;
    use crate::error::Error;
    use crate::vocab::StopList;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn execute(corpus: &[&str], queries: &[&str]) -> Result<String, Error> {
        let params = Params::new("stop", "corpus", "queries");
        let stoplist = StopList::new(["the", "a"]);
        let mut out: Vec<u8> = Vec::new();
        Pipeline::execute(&params, &stoplist, &lines(corpus), &lines(queries), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn summary_and_empty_ranking() {
        let out = execute(&["the cat sat", "the dog sat"], &["sat TF COSINE"]).unwrap();
        assert_eq!(out, "3 unique words\n4 word occurences\n2 sentences/lines/documents\n\nSIM: sat TF COSINE\n");
    }

    #[test]
    fn rankings_are_printed_per_query() {
        let corpus = ["the cat sat on mat"; 3];
        let out = execute(&corpus, &["cat TF COSINE", "", "mat PMI L1"]).unwrap();
        let out_lines = out.lines().collect::<Vec<&str>>();

        assert_eq!(out_lines[0], "4 unique words");
        assert_eq!(out_lines[4], "SIM: cat TF COSINE");
        assert_eq!(out_lines[5..8].len(), 3);
        assert!(out_lines[5..8].iter().all(|l| !l.starts_with("cat ")));
        assert_eq!(out_lines[8], "SIM: mat PMI L1");
        assert_eq!(out_lines.len(), 12);
        assert_eq!(out.matches("SIM:").count(), 2);
    }

    #[test]
    fn per_query_errors_do_not_stop_later_queries() {
        let corpus = ["the cat sat on mat"; 3];
        let queries = ["zebra TF COSINE", "cat TF", "cat TF JACCARD", "sat TF-IDF EUCLIDEAN"];
        let out = execute(&corpus, &queries).unwrap();

        assert!(!out.contains("zebra"));
        assert!(out.contains("SIM: cat TF JACCARD\nsat 0\non 0\nmat 0\n"));
        assert!(out.contains("SIM: sat TF-IDF EUCLIDEAN\n"));
    }

    #[test]
    fn wide_window_from_params_does_not_overflow() {
        let mut params = Params::new("stop", "corpus", "queries");
        params.window_size = usize::MAX / 2;
        let corpus = lines(&["cat sat mat"; 3]);
        let mut out: Vec<u8> = Vec::new();
        Pipeline::execute(&params, &StopList::default(), &corpus, &lines(&["cat TF COSINE"]), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let out_lines = out.lines().collect::<Vec<&str>>();
        assert_eq!(out_lines[4], "SIM: cat TF COSINE");
        assert!(out_lines[5].starts_with("sat ") && out_lines[6].starts_with("mat "));
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn unknown_weighting_is_fatal() {
        let res = execute(&["the cat sat"], &["cat TFIDF COSINE"]);
        assert!(matches!(res, Err(Error::UnknownWeighting(w)) if w == "TFIDF"));
    }
}
