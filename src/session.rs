//! Editing-session state for load/save.
//!
//! The session owns the active save destination instead of keeping it in
//! hidden process-wide state: it is created when a file is first opened (or
//! before the first save), lives for the editing session, and is discarded
//! when the session ends. Saving without an explicit destination reuses the
//! remembered one.

use std::path::{Path, PathBuf};

use crate::{error::Error, ports::RecordRepository, record::KifuRecord, Result};

/// Load/save state for one editing session.
///
/// # Examples
///
/// ```no_run
/// use kifu_notebook::{adapters::JsonRecordRepository, EditSession};
/// use std::path::Path;
///
/// let mut session = EditSession::new(JsonRecordRepository);
/// let record = session.open(Path::new("game.jkf"))?;
/// // ... edit ...
/// session.save(&record)?; // reuses game.jkf
/// # Ok::<(), kifu_notebook::Error>(())
/// ```
#[derive(Debug)]
pub struct EditSession<R: RecordRepository> {
    repository: R,
    destination: Option<PathBuf>,
}

impl<R: RecordRepository> EditSession<R> {
    /// Create a session with no destination chosen yet.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            destination: None,
        }
    }

    /// The remembered save destination, if one has been chosen.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Load a record and remember `path` as the session's destination.
    ///
    /// # Errors
    ///
    /// Propagates repository load errors; the destination is only remembered
    /// on success.
    pub fn open(&mut self, path: &Path) -> Result<KifuRecord> {
        let record = self.repository.load(path)?;
        self.destination = Some(path.to_path_buf());
        Ok(record)
    }

    /// Save to the remembered destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDestination`] if no file has been opened or saved
    /// yet in this session.
    pub fn save(&mut self, record: &KifuRecord) -> Result<()> {
        let Some(destination) = self.destination.clone() else {
            return Err(Error::NoDestination);
        };
        self.repository.save(record, &destination)
    }

    /// Save to `path` and remember it for subsequent saves.
    ///
    /// # Errors
    ///
    /// Propagates repository save errors; the destination is only remembered
    /// on success.
    pub fn save_as(&mut self, record: &KifuRecord, path: &Path) -> Result<()> {
        self.repository.save(record, path)?;
        self.destination = Some(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::adapters::JsonRecordRepository;

    #[test]
    fn save_without_destination_fails() {
        let mut session = EditSession::new(JsonRecordRepository);
        let err = session.save(&KifuRecord::empty()).unwrap_err();
        assert!(matches!(err, Error::NoDestination));
    }

    #[test]
    fn save_as_remembers_the_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.jkf");

        let mut session = EditSession::new(JsonRecordRepository);
        session.save_as(&KifuRecord::empty(), &path).unwrap();
        assert_eq!(session.destination(), Some(path.as_path()));

        // Subsequent plain saves reuse it.
        session.save(&KifuRecord::empty()).unwrap();
    }

    #[test]
    fn open_remembers_the_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.jkf");
        JsonRecordRepository::new()
            .save(&KifuRecord::empty(), &path)
            .unwrap();

        let mut session = EditSession::new(JsonRecordRepository);
        let record = session.open(&path).unwrap();
        assert_eq!(record, KifuRecord::empty());
        assert_eq!(session.destination(), Some(path.as_path()));
    }

    #[test]
    fn failed_open_leaves_destination_unset() {
        let dir = TempDir::new().unwrap();
        let mut session = EditSession::new(JsonRecordRepository);
        assert!(session.open(&dir.path().join("absent.jkf")).is_err());
        assert_eq!(session.destination(), None);
    }
}
