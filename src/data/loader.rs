use std::path::Path;

use crate::error::{Result, StatsError};

use super::model::{NameDataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a name dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "name": "...", "gender": "...", "count": 12 }, ...]`
/// * anything else – whitespace-separated `name gender count` triples
///
/// The file handle lives only for the duration of this call.
pub fn load_file(path: &Path) -> Result<NameDataset> {
    let bytes = std::fs::read(path).map_err(|source| StatsError::IoUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path, &bytes)?,
        _ => load_str(&String::from_utf8_lossy(&bytes)),
    };

    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Whitespace token loader
// ---------------------------------------------------------------------------

/// Parse whitespace-separated `name gender count` triples.
///
/// Line breaks carry no meaning; tokens are consumed three at a time.
/// When the third token of a window is not a non-negative integer the
/// window is rejected and parsing resumes one token further on, so a
/// group missing its count does not swallow the record after it.
/// Fewer than three trailing tokens are dropped.
pub fn load_str(text: &str) -> NameDataset {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut records = Vec::new();
    let mut pos = 0;

    while pos + 3 <= tokens.len() {
        let (name, gender, count) = (tokens[pos], tokens[pos + 1], tokens[pos + 2]);
        match count.parse::<u64>() {
            Ok(count) => {
                records.push(Record::new(name, gender, count));
                pos += 3;
            }
            Err(_) => {
                log::debug!("Skipping token '{name}': '{count}' is not a count");
                pos += 1;
            }
        }
    }

    if pos < tokens.len() {
        log::debug!("Dropping {} trailing token(s)", tokens.len() - pos);
    }

    NameDataset::from_records(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   { "name": "Anna", "gender": "female", "count": 10 },
///   ...
/// ]
/// ```
fn load_json(path: &Path, bytes: &[u8]) -> Result<NameDataset> {
    let records: Vec<Record> =
        serde_json::from_slice(bytes).map_err(|source| StatsError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(NameDataset::from_records(records))
}
