use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::WriteError;
use crate::models::ScrapeResult;

/// Serialize the result and overwrite `path` with it. Runs only after
/// extraction has fully completed, so a failed write never leaves partial
/// results behind.
pub fn write_result(result: &ScrapeResult, path: &Path) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(result)?;

    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} titles, {} prices, {} images to {}",
        result.titles.len(),
        result.prices.len(),
        result.images.len(),
        path.display()
    );

    Ok(())
}
