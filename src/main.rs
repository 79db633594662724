use chrono::Local;
use kodepos::{info_time, process::process_site, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let reports = process_site().await?;
    let rows: usize = reports.iter().map(|r| r.rows_written).sum();
    info_time!(start_time, "Full program time: {} rows in {} files", rows, reports.len());

    Ok(())
}
