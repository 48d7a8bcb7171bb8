use crate::error::{Error, Result};
use crate::similarity::{DEFAULT_MIN_COUNT, DEFAULT_TOP_K};

use serde_json::Value;
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;

pub const DEFAULT_WINDOW_SIZE: usize = 2;
pub const MAX_WINDOW_SIZE: usize = 1024;

const USAGE: &str = "usage: word_similarity <stoplist> <corpus> <queries> | word_similarity <config.json>";


#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub stoplist_file: String,
    pub corpus_file: String,
    pub queries_file: String,
    pub window_size: usize,
    pub min_count: usize,
    pub top_k: usize,
    pub ascending_distances: bool,
}

impl Params {

    pub fn new(stoplist_file: &str, corpus_file: &str, queries_file: &str) -> Params {
        Self {
            stoplist_file: stoplist_file.to_owned(),
            corpus_file: corpus_file.to_owned(),
            queries_file: queries_file.to_owned(),
            window_size: DEFAULT_WINDOW_SIZE,
            min_count: DEFAULT_MIN_COUNT,
            top_k: DEFAULT_TOP_K,
            ascending_distances: false,
        }
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using params:
        stoplist_file: {}
        corpus_file: {}
        queries_file: {}
        window_size: {}
        min_count: {}
        top_k: {}
        ascending_distances: {}",
        self.stoplist_file, self.corpus_file, self.queries_file, self.window_size, self.min_count, self.top_k, self.ascending_distances)
    }
}

pub struct Config {
    params: Params
}

impl Config {

    pub fn get_params(&self) -> Params {
        self.params.clone()
    }

    // either the three input files, or a path to a json file holding them and the optional params
    pub fn new(args: &[String]) -> Result<Config> {

        let params = match args.len() {
            4 => Params::new(&args[1], &args[2], &args[3]),
            2 => {
                let f = File::open(&args[1]).map_err(|source| Error::Io { path: args[1].to_owned(), source })?;
                let json: Value = serde_json::from_reader(BufReader::new(f))?;
                Config::from_json(&json)?
            },
            _ => return Err(Error::Config(USAGE.to_owned())),
        };

        if params.window_size == 0 || params.window_size > MAX_WINDOW_SIZE {
            return Err(Error::Config(format!("window_size must be between 1 and {}", MAX_WINDOW_SIZE)));
        }

        Ok(Self { params })
    }

    fn from_json(json: &Value) -> Result<Params> {

        let required = |key: &str| -> Result<String> {
            match json.get(key) {
                Some(value) => value.as_str().map(str::to_owned).ok_or_else(|| Error::Config(format!("{} is not a string", key))),
                None => Err(Error::Config(format!("{} was not supplied through json", key))),
            }
        };
        let number = |key: &str, default: usize| -> Result<usize> {
            match json.get(key) {
                Some(value) => value.as_u64().map(|v| v as usize).ok_or_else(|| Error::Config(format!("given {} is not a non negative integer", key))),
                None => Ok(default),
            }
        };

        // handle default vs input parameters
        let ascending_distances = match json.get("ascending_distances") {
            Some(value) => value.as_bool().ok_or_else(|| Error::Config("given ascending_distances is not boolean".to_owned()))?,
            None => false,
        };

        Ok(Params {
            stoplist_file: required("stoplist_file")?,
            corpus_file: required("corpus_file")?,
            queries_file: required("queries_file")?,
            window_size: number("window_size", DEFAULT_WINDOW_SIZE)?,
            min_count: number("min_count", DEFAULT_MIN_COUNT)?,
            top_k: number("top_k", DEFAULT_TOP_K)?,
            ascending_distances,
        })
    }
}


pub mod files_handling {

    use crate::error::{Error, Result};
    use crate::vocab::StopList;
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<R> {
        R::read_file(file_path)
    }

    pub trait ReadFile: Sized {
        fn read_file(file_path: &str) -> Result<Self>;
    }

    impl ReadFile for Vec<String> {
        fn read_file(file_path: &str) -> Result<Self> {
            let io_err = |source| Error::Io { path: file_path.to_owned(), source };
            let f = BufReader::new(File::open(file_path).map_err(io_err)?);
            f.lines().collect::<std::io::Result<Vec<String>>>().map_err(io_err)
        }
    }

    impl ReadFile for StopList {
        fn read_file(file_path: &str) -> Result<Self> {
            let lines = read_input::<Vec<String>>(file_path)?;
            Ok(StopList::from_lines(lines))
        }
    }
}


#[cfg(test)]
mod tests {

    use super::{Config, Params, MAX_WINDOW_SIZE};
    use crate::error::Error;
    use serde_json::json;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_args_use_defaults() {
        let params = Config::new(&args(&["bin", "stop.txt", "corpus.txt", "queries.txt"])).unwrap().get_params();
        assert_eq!(params, Params::new("stop.txt", "corpus.txt", "queries.txt"));
        assert_eq!(params.window_size, 2);
        assert_eq!(params.min_count, 3);
        assert_eq!(params.top_k, 10);
        assert!(!params.ascending_distances);
    }

    #[test]
    fn wrong_number_of_args() {
        assert!(matches!(Config::new(&args(&["bin", "a", "b"])), Err(Error::Config(_))));
        assert!(matches!(Config::new(&args(&["bin", "/no/such/config.json"])), Err(Error::Io { .. })));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let path = std::env::temp_dir().join(format!("word_similarity_window_{}.json", std::process::id()));
        let json = json!({
            "stoplist_file": "s", "corpus_file": "c", "queries_file": "q",
            "window_size": (usize::MAX / 2) as u64
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let res = Config::new(&args(&["bin", path.to_str().unwrap()]));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(Error::Config(m)) if m.contains(&MAX_WINDOW_SIZE.to_string())));
    }

    #[test]
    fn json_params() {
        let json = json!({
            "stoplist_file": "s", "corpus_file": "c", "queries_file": "q",
            "top_k": 5, "ascending_distances": true
        });
        let params = Config::from_json(&json).unwrap();
        assert_eq!(params.top_k, 5);
        assert_eq!(params.min_count, 3);
        assert!(params.ascending_distances);

        let missing = json!({ "stoplist_file": "s", "corpus_file": "c" });
        assert!(matches!(Config::from_json(&missing), Err(Error::Config(m)) if m.contains("queries_file")));

        let mistyped = json!({ "stoplist_file": "s", "corpus_file": "c", "queries_file": "q", "min_count": "three" });
        assert!(matches!(Config::from_json(&mistyped), Err(Error::Config(_))));
    }
}
