pub mod export;

pub use export::{ExportError, ExportedFiles, Exporter};
