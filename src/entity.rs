use std::path::{Path, PathBuf};

/// Declarative description of one entity kind.
/// Adding a kind means adding an entry to [`ENTITIES`], nothing else.
#[derive(Debug, Clone, Copy)]
pub struct EntityConfig {
    /// Used in log lines, e.g. "provinces".
    pub name: &'static str,
    /// Listing path under the base url, without query.
    pub listing: &'static str,
    /// Element id of the listing table.
    pub table_id: &'static str,
    /// `(1-based column position, field name)` in output column order.
    pub columns: &'static [(usize, &'static str)],
    /// Header row written on page 1.
    pub header: &'static [&'static str],
    /// File name inside the output directory.
    pub file_name: &'static str,
}

pub const PROVINCE: EntityConfig = EntityConfig {
    name: "provinces",
    listing: "propinsilist",
    table_id: "tbl_propinsilist",
    columns: &[(2, "code"), (3, "name")],
    header: &["Kode", "Nama"],
    file_name: "provinces.csv",
};

pub const CITY: EntityConfig = EntityConfig {
    name: "cities",
    listing: "kabupatenkotalist",
    table_id: "tbl_kabupatenkotalist",
    columns: &[(5, "code"), (6, "name"), (3, "province")],
    header: &["Kode", "Nama", "Provinsi"],
    file_name: "cities.csv",
};

pub const DISTRICT: EntityConfig = EntityConfig {
    name: "districts",
    listing: "kecamatanlist",
    table_id: "tbl_kecamatanlist",
    columns: &[(5, "code"), (6, "name"), (4, "city")],
    header: &["Kode", "Nama", "Kota"],
    file_name: "districts.csv",
};

pub const VILLAGE: EntityConfig = EntityConfig {
    name: "villages",
    listing: "kelurahandesalist",
    table_id: "tbl_kelurahandesalist",
    columns: &[(7, "code"), (8, "name"), (5, "district")],
    header: &["Kode", "Nama", "Kecamatan"],
    file_name: "villages.csv",
};

/// Scrape order. Nothing depends on it, it's just the natural top-down order.
pub const ENTITIES: [EntityConfig; 4] = [PROVINCE, CITY, DISTRICT, VILLAGE];

impl EntityConfig {
    /// `table#<id> > tbody`
    pub fn table_selector(&self) -> String {
        format!("table#{} > tbody", self.table_id)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }

    /// Listing url without a page parameter, used for counting pages.
    pub fn listing_url(&self, base_url: &str, records_per_page: usize) -> String {
        format!(
            "{}/{}?recperpage={records_per_page}",
            base_url.trim_end_matches('/'),
            self.listing
        )
    }

    pub fn page_url(&self, base_url: &str, records_per_page: usize, page: usize) -> String {
        format!("{}&page={page}", self.listing_url(base_url, records_per_page))
    }
}

/// One table row, fields in the entity's column order.
/// Values are the raw cell text, nothing is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<String>,
}
