use scraper::{ElementRef, Html, Selector};

use crate::entity::{EntityConfig, Record};
use crate::{Error, Result};

/// What a single listing page produced.
#[derive(Debug)]
pub enum PageOutcome {
    Rows(Vec<Record>),
    /// The table was there but had no rows.
    Empty,
    /// The page came back without the entity's table.
    TableMissing,
    FetchFailed(Error),
}

impl PageOutcome {
    /// Records to write; every non-`Rows` outcome writes nothing.
    pub fn records(&self) -> &[Record] {
        match self {
            PageOutcome::Rows(records) => records,
            _ => &[],
        }
    }
}

/// Parses one listing page into records, one per `tr` of the table body, in page order.
/// Rows are never skipped: a missing or blank cell becomes an empty field.
pub fn parse_page(html: &str, entity: &EntityConfig) -> Result<PageOutcome> {
    let doc = Html::parse_document(html);
    let body_selector = create_selector(&entity.table_selector())?;

    let mut bodies = doc.select(&body_selector).peekable();
    if bodies.peek().is_none() {
        return Ok(PageOutcome::TableMissing);
    }

    let mut records = Vec::new();
    for body in bodies {
        for row in child_elements(body, "tr") {
            let cells: Vec<ElementRef> = child_elements(row, "td").collect();
            let fields = entity
                .columns
                .iter()
                .map(|&(position, _)| {
                    position
                        .checked_sub(1)
                        .and_then(|idx| cells.get(idx))
                        .map(|cell| cell.text().collect::<String>())
                        .unwrap_or_default()
                })
                .collect();
            records.push(Record { fields });
        }
    }

    if records.is_empty() {
        Ok(PageOutcome::Empty)
    } else {
        Ok(PageOutcome::Rows(records))
    }
}

/// Direct children with the given tag name, so nested tables don't leak in.
fn child_elements<'a>(parent: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
