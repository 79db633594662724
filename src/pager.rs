use scraper::Html;

use crate::parse::create_selector;
use crate::request::Fetch;
use crate::{warn_time, Result, PAGER_PREFIX, PAGER_SELECTOR};

/// What the pager on a listing page told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCount {
    Known(usize),
    /// No pager span starts with "dari ".
    PagerMissing,
    /// The first matching span didn't end in a number.
    Unparsable(String),
    FetchFailed(String),
}

impl PageCount {
    /// Number of pages to iterate. Every failure counts as zero pages.
    pub fn total(&self) -> usize {
        match self {
            PageCount::Known(n) => *n,
            _ => 0,
        }
    }
}

/// Fetches the listing page once and reads the total page count from its pager.
/// Failures are logged and never returned, the caller just sees zero pages.
pub async fn count_pages(fetcher: &impl Fetch, listing_url: &str) -> PageCount {
    let count = match fetcher.fetch(listing_url).await {
        Ok(html) => parse_page_count(&html).unwrap_or_else(|e| {
            warn_time!("{e}");
            PageCount::PagerMissing
        }),
        Err(e) => PageCount::FetchFailed(e.to_string()),
    };

    match &count {
        PageCount::Known(_) => {}
        PageCount::PagerMissing => {
            warn_time!("Failed to find the page count on {listing_url}");
        }
        PageCount::Unparsable(text) => {
            warn_time!("Failed to convert page number to integer: {text:?}");
        }
        PageCount::FetchFailed(reason) => {
            warn_time!("Failed to fetch {listing_url}: {reason}");
        }
    }
    count
}

/// The first pager span (in document order) whose trimmed text starts with "dari " wins,
/// later ones are ignored even if they disagree.
pub fn parse_page_count(html: &str) -> Result<PageCount> {
    let doc = Html::parse_document(html);
    let pager_selector = create_selector(PAGER_SELECTOR)?;

    let first = doc
        .select(&pager_selector)
        .map(|span| span.text().collect::<String>())
        .find(|text| text.trim().starts_with(PAGER_PREFIX));

    let Some(text) = first else {
        return Ok(PageCount::PagerMissing);
    };

    let number = text.trim()[PAGER_PREFIX.len()..].trim();
    Ok(match number.parse::<usize>() {
        Ok(n) => PageCount::Known(n),
        Err(_) => PageCount::Unparsable(number.to_string()),
    })
}
