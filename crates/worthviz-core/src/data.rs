//! Dataset model and row parsing.
//!
//! The feed is one row per person: a possibly multi-word name, then a photo
//! URL, age, country, interest, and a currency-formatted net worth, all
//! whitespace-separated. The name/URL boundary is found by locating the first
//! `http://` or `https://` token preceded by whitespace, so names keep their
//! internal spaces without any quoting scheme.

use thiserror::Error;

/// One person from the dataset. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub name: String,
    pub photo_url: String,
    /// Kept as text; the feed sometimes carries non-numeric ages.
    pub age: String,
    pub country: String,
    pub interest: String,
    pub net_worth: f64,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("line {line}: no photo URL found; expected `name photo_url age country interest net_worth`")]
    MissingPhotoUrl { line: usize },
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: unparseable net worth {value:?}")]
    BadNetWorth { line: usize, value: String },
}

/// Observed net-worth extent of a dataset, used to normalize the color scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorthRange {
    pub min: f64,
    pub max: f64,
}

impl WorthRange {
    pub fn of(items: &[Item]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for item in items {
            min = min.min(item.net_worth);
            max = max.max(item.net_worth);
        }
        if min > max {
            // empty dataset
            Self { min: 0.0, max: 0.0 }
        } else {
            Self { min, max }
        }
    }
}

/// Parse a whole feed. Blank lines are skipped; any malformed row aborts with
/// an error carrying its 1-based line number.
pub fn parse_dataset(text: &str) -> Result<Vec<Item>, DatasetError> {
    let mut items = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        items.push(parse_row(line, idx + 1)?);
    }
    Ok(items)
}

/// Parse one row. `line_no` is only used for error reporting.
pub fn parse_row(line: &str, line_no: usize) -> Result<Item, DatasetError> {
    let url_start =
        photo_url_start(line).ok_or(DatasetError::MissingPhotoUrl { line: line_no })?;
    let name = line[..url_start].trim_end();

    let mut fields = line[url_start..].split_whitespace();
    let mut next = |field: &'static str| {
        fields
            .next()
            .ok_or(DatasetError::MissingField { line: line_no, field })
    };
    let photo_url = next("photo URL")?;
    let age = next("age")?;
    let country = next("country")?;
    let interest = next("interest")?;
    let worth_raw = next("net worth")?;

    let digits: String = worth_raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let net_worth: f64 = digits.parse().map_err(|_| DatasetError::BadNetWorth {
        line: line_no,
        value: worth_raw.to_string(),
    })?;

    Ok(Item {
        name: name.to_string(),
        photo_url: photo_url.to_string(),
        age: age.to_string(),
        country: country.to_string(),
        interest: interest.to_string(),
        net_worth,
    })
}

/// Byte offset of the first `http(s)://` that is preceded by whitespace, i.e.
/// the start of the photo URL field. A URL at the very start of the line does
/// not count; there would be no name before it.
fn photo_url_start(line: &str) -> Option<usize> {
    for (idx, _) in line.match_indices("http") {
        let rest = &line[idx..];
        if !rest.starts_with("http://") && !rest.starts_with("https://") {
            continue;
        }
        match line[..idx].chars().next_back() {
            Some(prev) if prev.is_whitespace() => return Some(idx),
            _ => continue,
        }
    }
    None
}
