//! File-backed record source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{RecordSource, RecordSourceError};
use crate::domain::record::UserRecord;

/// Record source reading a JSON document from the local filesystem.
///
/// File access is capability-scoped to the document's parent directory
/// via `cap_std::fs::Dir`.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    /// Create a source reading `path` on every cache-missed load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<String, RecordSourceError> {
        let (parent, file_name) = split_path(&self.path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| self.unavailable(&error))?;
        directory
            .read_to_string(file_name)
            .map_err(|error| self.unavailable(&error))
    }

    fn unavailable(&self, error: &std::io::Error) -> RecordSourceError {
        RecordSourceError::unavailable(format!("{}: {error}", self.path.display()))
    }
}

fn split_path(path: &Path) -> Result<(&Path, &Path), RecordSourceError> {
    let file_name = path.file_name().map(Path::new).ok_or_else(|| {
        RecordSourceError::unavailable(format!("{} does not name a file", path.display()))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((parent, file_name))
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, RecordSourceError> {
        let document = self.read_document()?;
        serde_json::from_str(&document)
            .map_err(|error| RecordSourceError::decode(format!("invalid records JSON: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn write_document(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("users.json");
        std::fs::write(&path, contents).expect("write document");
        (dir, path)
    }

    #[rstest]
    #[tokio::test]
    async fn reads_records_from_a_json_document() {
        let (_dir, path) = write_document(
            r#"[
                {
                    "uid": "u-1",
                    "displayName": "Ada Lovelace",
                    "email": "ada@example.com",
                    "job_title": "Research and Development"
                }
            ]"#,
        );
        let source = FileRecordSource::new(path);

        let records = source.fetch_records().await.expect("document decodes");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name, "Ada Lovelace");
    }

    #[rstest]
    #[tokio::test]
    async fn reads_generated_demo_documents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("users.json");
        let members = example_data::generate_demo_members(42, 6).expect("generated");
        example_data::write_members_file(&path, &members).expect("document written");

        let records = FileRecordSource::new(path)
            .fetch_records()
            .await
            .expect("document decodes");

        assert_eq!(records.len(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_file_maps_to_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = FileRecordSource::new(dir.path().join("missing.json"));

        let error = source.fetch_records().await.expect_err("read should fail");

        assert!(matches!(error, RecordSourceError::Unavailable { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_document_maps_to_decode() {
        let (_dir, path) = write_document("{ not json");
        let source = FileRecordSource::new(path);

        let error = source.fetch_records().await.expect_err("decode should fail");

        assert!(matches!(error, RecordSourceError::Decode { .. }));
    }
}
