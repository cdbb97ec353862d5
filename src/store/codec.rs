//! `original|translated` record encoding.
//!
//! A store is persisted as a JSON array of record strings, which keeps the
//! user's ordering. Decoding is per record: a bad record is logged and
//! skipped, the rest of the list still loads.

use serde_json::Value;
use thiserror::Error;

use super::WordPair;

const DELIMITER: char = '|';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not a string")]
    NotAString,

    #[error("record {0:?} has no '|' delimiter")]
    MissingDelimiter(String),
}

/// Encode pairs as records, dropping pairs with an empty `original`.
///
/// Untranslated pairs are written with an empty translation so the
/// placeholder never reaches disk.
pub fn encode_records<'a>(pairs: impl IntoIterator<Item = &'a WordPair>) -> Vec<String> {
    pairs
        .into_iter()
        .filter(|p| !p.original.is_empty())
        .map(|p| {
            let translated = if p.has_translation() {
                p.translated.as_str()
            } else {
                ""
            };
            format!("{}{DELIMITER}{}", p.original, translated)
        })
        .collect()
}

/// Decode a single record.
///
/// The split happens at the first `|`, so a translation may itself contain
/// the delimiter.
pub fn decode_record(record: &str) -> Result<WordPair, RecordError> {
    let (original, translated) = record
        .split_once(DELIMITER)
        .ok_or_else(|| RecordError::MissingDelimiter(record.to_string()))?;
    Ok(WordPair::new(original, translated))
}

/// Encode pairs as a JSON array string of records.
pub fn encode_json<'a>(pairs: impl IntoIterator<Item = &'a WordPair>) -> String {
    Value::from(encode_records(pairs)).to_string()
}

/// Decode a JSON array string of records.
///
/// Fails only when the text is not a JSON array at all. Individual malformed
/// or blank records are skipped.
pub fn decode_json(json: &str) -> Result<Vec<WordPair>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let mut pairs = Vec::with_capacity(values.len());

    for (i, value) in values.iter().enumerate() {
        let decoded = value
            .as_str()
            .ok_or(RecordError::NotAString)
            .and_then(decode_record);
        match decoded {
            Ok(pair) if pair.is_blank() => {}
            Ok(pair) => pairs.push(pair),
            Err(e) => log::warn!("store: skipping saved record {i}: {e}"),
        }
    }

    Ok(pairs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
