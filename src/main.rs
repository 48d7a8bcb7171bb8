use std::process;
use tracing_subscriber::EnvFilter;
use word_similarity::Pipeline;

fn main() {

    // logs go to stderr, results to stdout
    tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

    if let Err(e) = Pipeline::run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
