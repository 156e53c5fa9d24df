//! Cleanup of raw text fragments scraped from dictionary pages.
//!
//! Every function here fails closed: a missing separator or line yields an
//! empty field, never an error.

use unicode_normalization::UnicodeNormalization;

/// Separator between headword, part of speech and transcription in entry headers
pub const HEADER_SEPARATOR: char = '\u{a0}';

const INFINITIVE_PARTICLE: &str = "to ";

/// Trim, NFC-normalize and collapse inner whitespace runs
pub fn clean_field(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfc().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split an entry header blob into (word, part of speech, transcription).
///
/// Fields are positional: a blank piece stays blank and does not shift the
/// ones after it. Pieces past the third are appended to the transcription.
pub fn split_header(blob: &str) -> (String, String, String) {
    let mut fields = blob.split(HEADER_SEPARATOR).map(clean_field);

    let word = fields.next().unwrap_or_default();
    let part_of_speech = fields.next().unwrap_or_default();
    let transcription = fields
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (word, part_of_speech, transcription)
}

/// The `index`-th line of a newline-separated definition blob
pub fn line_at(blob: &str, index: usize) -> String {
    blob.lines().nth(index).map(clean_field).unwrap_or_default()
}

/// Split a multi-sense translation on its first `/`.
///
/// Returns `(primary, supplementary)`; `supplementary` is the untouched
/// fragment when a split happened and empty otherwise.
pub fn split_senses(fragment: &str) -> (String, String) {
    match fragment.split_once('/') {
        Some((primary, _)) => (primary.to_string(), fragment.to_string()),
        None => (fragment.to_string(), String::new()),
    }
}

/// Key for the next lookup: drop a trailing `[...]` gender or usage annotation
pub fn lookup_key(translation: &str) -> String {
    let key = translation.split('[').next().unwrap_or_default();
    clean_field(key)
}

/// Drop the English infinitive particle from verb translations only
pub fn strip_infinitive(part_of_speech: &str, translation: &str) -> String {
    if part_of_speech.contains("verb")
        && let Some(rest) = translation.strip_prefix(INFINITIVE_PARTICLE)
    {
        return rest.to_string();
    }

    translation.to_string()
}

/// Drop a leading infinitive particle regardless of part of speech
pub fn strip_particle(word: &str) -> String {
    word.strip_prefix(INFINITIVE_PARTICLE)
        .unwrap_or(word)
        .to_string()
}
