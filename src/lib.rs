//! Scraper for the Indonesian postal code directory.
//!
//! Every entity kind (province, city, district, village) goes through the same pipeline:
//! count the listing pages, then fetch, parse and append each page to its CSV file.

mod error;
mod macros;

pub mod entity;
pub mod pager;
pub mod parse;
pub mod process;
pub mod request;
pub mod sink;

pub use error::{Error, Result};

const BASE_URL: &str = "https://kodepos.posindonesia.co.id";
const RECORDS_PER_PAGE: usize = 100;
const OUTPUT_DIR: &str = "output";
const USER_AGENT: &str = concat!("kodepos/", env!("CARGO_PKG_VERSION"));
/// Spans inside the pager; one of them reads "dari <total pages>".
const PAGER_SELECTOR: &str = "div.ew-pager > span";
const PAGER_PREFIX: &str = "dari ";

/// Where to fetch from and where to write to.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub records_per_page: usize,
    pub output_dir: std::path::PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            records_per_page: RECORDS_PER_PAGE,
            output_dir: OUTPUT_DIR.into(),
        }
    }
}
