use std::fs;
use std::path::{Path, PathBuf};

use trilex_types::{LookupResult, TrilingualRecord};

const SIDE_HEADER: [&str; 4] = ["word", "part of speech", "transcription", "translate"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("record has no English word to name its files")]
    MissingName,

    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Writes `<english word>.csv` and `<english word>.json` per record
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn export(&self, record: &TrilingualRecord) -> Result<ExportedFiles, ExportError> {
        let stem = file_stem(&record.source.word).ok_or(ExportError::MissingName)?;

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let files = ExportedFiles {
            csv: self.dir.join(format!("{stem}.csv")),
            json: self.dir.join(format!("{stem}.json")),
        };

        write_csv(&files.csv, record)?;
        write_json(&files.json, record)?;

        tracing::debug!("Exported {} and {}", files.csv.display(), files.json.display());
        Ok(files)
    }
}

fn write_csv(path: &Path, record: &TrilingualRecord) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    let header: Vec<&str> = SIDE_HEADER.iter().copied().cycle().take(12).collect();
    writer.write_record(&header).map_err(csv_err)?;

    let row: Vec<&str> = [&record.source, &record.target, &record.gloss]
        .into_iter()
        .flat_map(side_columns)
        .collect();
    writer.write_record(&row).map_err(csv_err)?;

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn side_columns(side: &LookupResult) -> [&str; 4] {
    [
        side.word.as_str(),
        side.part_of_speech.as_str(),
        side.transcription.as_str(),
        side.translation.as_str(),
    ]
}

fn write_json(path: &Path, record: &TrilingualRecord) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(record)?;

    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// File name for a word, with path separators replaced
fn file_stem(word: &str) -> Option<String> {
    let stem: String = word
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    (!stem.is_empty() && stem != "." && stem != "..").then_some(stem)
}
