use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Couldn't open output file {path} for appending: {source}")]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't remove previous output {path}: {source}")]
    OutputReset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
