//! Repository port for kifu record persistence.
//!
//! This module defines the trait boundary between the tree core and the
//! storage layer for interchange-format records.

use std::path::Path;

use crate::{record::KifuRecord, Result};

/// Port for loading and saving interchange-format records.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (JSON files, in-memory stores for tests, remote storage)
/// without coupling the tree core to a specific format or medium.
///
/// # Examples
///
/// ```no_run
/// use kifu_notebook::ports::RecordRepository;
/// use kifu_notebook::KifuRecord;
/// use std::path::Path;
///
/// fn reload<R: RecordRepository>(repo: &R, path: &Path) -> kifu_notebook::Result<KifuRecord> {
///     repo.load(path)
/// }
/// ```
pub trait RecordRepository {
    /// Load a record from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents do not
    /// parse as an interchange-format record.
    fn load(&self, path: &Path) -> Result<KifuRecord>;

    /// Save a record to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written or the record
    /// cannot be serialized.
    fn save(&self, record: &KifuRecord, path: &Path) -> Result<()>;
}
