//! Parsing of bulk vocabulary files for `vocab-cli import`.
//!
//! Three shapes are accepted, chosen by the first non-blank character:
//! a `{"words": [...]}` object, a bare JSON array of `{english, french}`
//! rows, or plain `english,french` lines. Rows with a blank side are skipped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkWord {
    pub english: String,
    pub french: String,
}

/// Body of `POST /api/add_vocab_bulk`.
#[derive(Debug, Serialize)]
pub struct BulkRequest<'a> {
    pub words: &'a [BulkWord],
}

#[derive(Debug, Deserialize)]
struct BulkFile {
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(default)]
    english: String,
    #[serde(default)]
    french: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: expected `english,french`")]
    MalformedLine { line: usize },
    #[error("no words found in input")]
    Empty,
}

/// Parse file contents into the list of words to upload.
///
/// # Errors
///
/// Returns an error for malformed JSON, a CSV line without a comma, or an
/// input with no usable rows.
pub fn parse_words(input: &str) -> Result<Vec<BulkWord>, ImportError> {
    let trimmed = input.trim_start();
    let raw = if trimmed.starts_with('{') {
        serde_json::from_str::<BulkFile>(trimmed)?.words
    } else if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<RawWord>>(trimmed)?
    } else {
        parse_lines(input)?
    };

    let words: Vec<BulkWord> = raw.into_iter().filter_map(normalize).collect();
    if words.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(words)
}

fn parse_lines(input: &str) -> Result<Vec<RawWord>, ImportError> {
    let mut rows = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (english, french) = line.split_once(',').ok_or(ImportError::MalformedLine { line: idx + 1 })?;
        rows.push(RawWord { english: english.to_owned(), french: french.to_owned() });
    }
    Ok(rows)
}

fn normalize(raw: RawWord) -> Option<BulkWord> {
    let english = raw.english.trim();
    let french = raw.french.trim();
    if english.is_empty() || french.is_empty() {
        return None;
    }
    Some(BulkWord { english: english.to_owned(), french: french.to_owned() })
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
