use std::path::Path;

use log::{debug, info};

use super::model::Dataset;
use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a numeric table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated numbers, optional header row of names
/// * `.json` – `[[1.0, 2.0], [3.0, 4.1], ...]`
/// * anything else (`.dat`, `.txt`, ...) – whitespace-separated columns
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        _ => load_table(path),
    }?;

    info!(
        "Loaded {} with shape {:?}",
        path.display(),
        dataset.shape()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Whitespace table loader
// ---------------------------------------------------------------------------

/// Whitespace-delimited numeric table, one sample per line.
///
/// Blank lines and `#` comments are skipped. Every data line must carry the
/// same number of fields as the first one.
pub fn load_table(path: &Path) -> Result<Dataset> {
    let text = read_text(path)?;
    parse_table(&text, path)
}

/// Read the whole file as UTF-8. Undecodable bytes are a malformed table,
/// not an unreadable file.
fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ExplorerError::file_access(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        ExplorerError::data_format(
            path,
            0,
            format!("not valid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        )
    })
}

/// Parse table text; `source` is only used in error messages.
pub fn parse_table(text: &str, source: &Path) -> Result<Dataset> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if content.trim().is_empty() {
            continue;
        }

        let row = content
            .split_whitespace()
            .enumerate()
            .map(|(j, tok)| {
                parse_number(tok).ok_or_else(|| {
                    ExplorerError::data_format(
                        source,
                        line_no,
                        format!("field {j}: '{tok}' is not a number"),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(ExplorerError::data_format(
                    source,
                    line_no,
                    format!("expected {w} fields, found {}", row.len()),
                ));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ExplorerError::data_format(source, 0, "no data rows"));
    }
    debug!("Parsed {} rows x {} columns", rows.len(), width.unwrap_or(0));
    Dataset::from_rows(rows)
}

/// Integers, decimals, exponents, `nan` and `inf` all read as `f64`.
fn parse_number(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Comma-separated numbers. A first record in which no field parses as a
/// number is taken as the header row.
fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| ExplorerError::file_access(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(file);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (rec_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line() as usize);
            ExplorerError::data_format(path, line, e.to_string())
        })?;
        let line = record.position().map_or(rec_no + 1, |p| p.line() as usize);

        if rec_no == 0 && record.iter().all(|f| parse_number(f).is_none()) {
            headers = Some(record.iter().map(|h| h.to_string()).collect());
            continue;
        }

        let parsed: Option<Vec<f64>> = record.iter().map(parse_number).collect();
        let row = match parsed {
            Some(row) => row,
            None => {
                let bad = record.iter().find(|f| parse_number(f).is_none()).unwrap_or("");
                return Err(ExplorerError::data_format(
                    path,
                    line,
                    format!("'{bad}' is not a number"),
                ));
            }
        };

        let expected = rows
            .first()
            .map(|r| r.len())
            .or_else(|| headers.as_ref().map(|h| h.len()));
        if let Some(w) = expected {
            if w != row.len() {
                return Err(ExplorerError::data_format(
                    path,
                    line,
                    format!("expected {w} fields, found {}", row.len()),
                ));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ExplorerError::data_format(path, 0, "no data rows"));
    }
    let dataset = Dataset::from_rows(rows)?;
    Ok(match headers {
        Some(h) => dataset.with_column_names(h),
        None => dataset,
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: an array of equally long numeric arrays.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = read_text(path)?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text)
        .map_err(|e| ExplorerError::data_format(path, e.line(), e.to_string()))?;

    if rows.is_empty() {
        return Err(ExplorerError::data_format(path, 0, "no data rows"));
    }
    let width = rows[0].len();
    if width == 0 {
        return Err(ExplorerError::data_format(path, 0, "rows have no fields"));
    }
    if let Some(i) = rows.iter().position(|r| r.len() != width) {
        return Err(ExplorerError::data_format(
            path,
            0,
            format!("row {i}: expected {width} fields, found {}", rows[i].len()),
        ));
    }
    Dataset::from_rows(rows)
}
