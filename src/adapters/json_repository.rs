//! JSON implementation of the record repository.
//!
//! This adapter implements the RecordRepository port for interchange-format
//! files on disk. Saved files are pretty-printed and end with a trailing
//! newline, matching what other kifu tools emit.

use std::{fs, path::Path};

use crate::{error::Error, ports::RecordRepository, record::KifuRecord, Result};

/// File-based JSON record repository.
///
/// # Examples
///
/// ```no_run
/// use kifu_notebook::adapters::JsonRecordRepository;
/// use kifu_notebook::ports::RecordRepository;
/// use std::path::Path;
///
/// let repo = JsonRecordRepository;
/// let record = repo.load(Path::new("game.jkf"))?;
/// repo.save(&record, Path::new("game-copy.jkf"))?;
/// # Ok::<(), kifu_notebook::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordRepository;

impl JsonRecordRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl RecordRepository for JsonRecordRepository {
    fn load(&self, path: &Path) -> Result<KifuRecord> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read file {path:?}"),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, record: &KifuRecord, path: &Path) -> Result<()> {
        let mut body = serde_json::to_string_pretty(record)?;
        body.push('\n');
        fs::write(path, body).map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })
    }
}
