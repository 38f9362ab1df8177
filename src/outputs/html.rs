//! HTML page output.

use crate::utils::ensure_writable_dir;
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Path of the page for `date` inside `output_dir`: `{output_dir}/{YYYY-MM-DD}.html`.
pub fn page_path(output_dir: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(output_dir).join(format!("{date}.html"))
}

/// Write a rendered page to `{output_dir}/{today}.html`.
///
/// The directory is created and checked for writability first.
///
/// # Returns
///
/// The path that was written.
#[instrument(level = "info", skip_all, fields(%output_dir))]
pub async fn write_page(page: &str, output_dir: &str) -> Result<PathBuf, Box<dyn Error>> {
    ensure_writable_dir(output_dir).await?;

    let path = page_path(output_dir, Local::now().date_naive());
    fs::write(&path, page).await?;
    info!(path = %path.display(), bytes = page.len(), "Wrote HTML page");

    Ok(path)
}
