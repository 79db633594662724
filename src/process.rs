use std::fs;
use std::path::Path;

use chrono::Local;

use crate::entity::{EntityConfig, Record, ENTITIES};
use crate::pager::{count_pages, PageCount};
use crate::parse::{parse_page, PageOutcome};
use crate::request::{create_client, Fetch};
use crate::sink::{append_page, reset_output};
use crate::{info_time, warn_time, Error, Result, Settings};

/// Short form of a page's [`PageOutcome`], kept after the records are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Rows(usize),
    Empty,
    TableMissing,
    FetchFailed,
}

impl From<&PageOutcome> for PageStatus {
    fn from(outcome: &PageOutcome) -> Self {
        match outcome {
            PageOutcome::Rows(records) => PageStatus::Rows(records.len()),
            PageOutcome::Empty => PageStatus::Empty,
            PageOutcome::TableMissing => PageStatus::TableMissing,
            PageOutcome::FetchFailed(_) => PageStatus::FetchFailed,
        }
    }
}

/// What happened while scraping one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub entity: &'static str,
    pub page_count: PageCount,
    /// One entry per page, in page order.
    pub pages: Vec<PageStatus>,
    pub rows_written: usize,
}

/// Scrapes every entity kind against the live directory, one after another.
pub async fn process_site() -> Result<Vec<ScrapeReport>> {
    let client = create_client()?;
    process_entities(&client, &Settings::default(), &ENTITIES).await
}

/// Runs [`scrape_entity`] for each entity in order.
/// Stops at the first error, which can only be a fatal output error
/// (previous output can't be removed, or the file can't be opened).
pub async fn process_entities(
    fetcher: &impl Fetch,
    settings: &Settings,
    entities: &[EntityConfig],
) -> Result<Vec<ScrapeReport>> {
    fs::create_dir_all(&settings.output_dir)?;

    let mut reports = Vec::with_capacity(entities.len());
    for entity in entities {
        reports.push(scrape_entity(fetcher, settings, entity).await?);
    }
    Ok(reports)
}

/// Scrapes one entity kind into its CSV file.
///
/// The old file is removed, the page count is read once, then every page goes through
/// fetch -> parse -> append before the next one is requested.
/// Page level failures only get logged; an output file that can't be removed or opened ends the run.
pub async fn scrape_entity(
    fetcher: &impl Fetch,
    settings: &Settings,
    entity: &EntityConfig,
) -> Result<ScrapeReport> {
    let start_time = Local::now();
    info_time!("Scraping {} data...", entity.name);

    let path = entity.output_path(&settings.output_dir);
    reset_output(&path)?;

    let listing_url = entity.listing_url(&settings.base_url, settings.records_per_page);
    let page_count = count_pages(fetcher, &listing_url).await;
    let total_pages = page_count.total();

    if total_pages == 0 {
        // Nothing to iterate, but the file still gets its header.
        write_page(&path, entity, 1, &[])?;
    }

    // Grows per page, the total comes from the remote pager.
    let mut pages = Vec::new();
    let mut rows_written = 0;
    for page in 1..=total_pages {
        let url = entity.page_url(&settings.base_url, settings.records_per_page, page);
        let outcome = fetch_page(fetcher, &url, entity).await;

        rows_written += write_page(&path, entity, page, outcome.records())?;
        pages.push(PageStatus::from(&outcome));
    }

    info_time!(
        start_time,
        "Finished {}: {} pages, {} rows written to {}",
        entity.name,
        total_pages,
        rows_written,
        path.display()
    );

    Ok(ScrapeReport {
        entity: entity.name,
        page_count,
        pages,
        rows_written,
    })
}

/// Appends a page and returns how many rows went out.
/// Only [`Error::OutputOpen`] is passed up, other write failures are logged and count as zero rows.
fn write_page(path: &Path, entity: &EntityConfig, page: usize, records: &[Record]) -> Result<usize> {
    match append_page(path, entity.header, page, records) {
        Ok(()) => Ok(records.len()),
        Err(e @ Error::OutputOpen { .. }) => Err(e),
        Err(e) => {
            warn_time!("Failed writing page {page} to {}: {e}", path.display());
            Ok(0)
        }
    }
}

/// Fetches and parses a single page. Never fails, failures become outcomes.
async fn fetch_page(fetcher: &impl Fetch, url: &str, entity: &EntityConfig) -> PageOutcome {
    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            warn_time!("Failed to fetch {url}: {e}");
            return PageOutcome::FetchFailed(e);
        }
    };

    match parse_page(&html, entity) {
        Ok(PageOutcome::TableMissing) => {
            warn_time!("No {} table on {url}", entity.table_id);
            PageOutcome::TableMissing
        }
        Ok(outcome) => outcome,
        Err(e) => {
            warn_time!("Failed to parse {url}: {e}");
            PageOutcome::TableMissing
        }
    }
}
