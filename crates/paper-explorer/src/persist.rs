//! Saving and reloading the fetched record.

use std::path::Path;

use crate::error::{PersistError, PersistResult};
use crate::formatters::to_pretty_json;
use crate::models::PaperRecord;

/// Write `record` as JSON to `path`, creating the parent directory.
/// An existing file is overwritten.
///
/// # Errors
///
/// Returns error if the directory or file cannot be written.
pub fn save_record(record: &PaperRecord, path: &Path) -> PersistResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| PersistError::io(dir, e))?;
    }

    let json = to_pretty_json(record)?;
    std::fs::write(path, json).map_err(|e| PersistError::io(path, e))?;

    tracing::info!(path = %path.display(), "Saved paper data");
    Ok(())
}

/// Read a record written by [`save_record`].
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid record.
pub fn load_record(path: &Path) -> PersistResult<PaperRecord> {
    let bytes = std::fs::read(path).map_err(|e| PersistError::io(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperRef;

    #[test]
    fn test_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs").join("paper_data.json");

        let mut record = PaperRecord::empty();
        save_record(&record, &path).unwrap();

        record.title = "Second".to_string();
        record.related_papers.push(PaperRef { title: "R".into(), doi: None, year: Some(2021) });
        save_record(&record, &path).unwrap();

        assert_eq!(load_record(&path).unwrap(), record);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_record(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_record(&path), Err(PersistError::Serialization(_))));
    }
}
