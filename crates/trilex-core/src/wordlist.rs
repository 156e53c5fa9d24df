use std::path::Path;

use trilex_types::{Direction, PartOfSpeech, WordQuery};

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected '<word> <part-of-speech> <direction>', missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {source}")]
    UnknownPartOfSpeech {
        line: usize,
        #[source]
        source: trilex_types::UnknownPartOfSpeech,
    },

    #[error("line {line}: {source}")]
    UnknownDirection {
        line: usize,
        #[source]
        source: trilex_types::UnknownDirection,
    },
}

/// Read and parse a word list file
pub fn load(path: &Path) -> Result<Vec<WordQuery>, WordListError> {
    let data = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse(&data)?;
    tracing::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text. Blank lines and `#` comments are skipped; any
/// malformed line rejects the whole list.
pub fn parse(data: &str) -> Result<Vec<WordQuery>, WordListError> {
    let mut words = Vec::new();

    for (index, raw) in data.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let text = fields.next().ok_or(WordListError::MissingField { line, field: "word" })?;
        let part_of_speech = fields
            .next()
            .ok_or(WordListError::MissingField {
                line,
                field: "part of speech",
            })?
            .parse::<PartOfSpeech>()
            .map_err(|source| WordListError::UnknownPartOfSpeech { line, source })?;
        let direction = fields
            .next()
            .ok_or(WordListError::MissingField {
                line,
                field: "direction",
            })?
            .parse::<Direction>()
            .map_err(|source| WordListError::UnknownDirection { line, source })?;

        words.push(WordQuery::new(text, part_of_speech, direction));
    }

    Ok(words)
}
