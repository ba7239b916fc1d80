//! Atomic members-document writing.
//!
//! Writes go to a hidden temporary file in the target directory followed
//! by a rename, so the backing document is never observed half-written.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::{ambient_authority, fs::Dir};

use crate::error::WriteError;
use crate::member::DemoMember;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Serialise `members` and write them atomically to `path`.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns [`WriteError`] when the path is unusable, serialisation fails,
/// or the filesystem rejects the write or rename.
pub fn write_members_file(path: &Path, members: &[DemoMember]) -> Result<(), WriteError> {
    let utf8_path = Utf8Path::from_path(path).ok_or_else(|| WriteError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;
    let file_name = file_name_component(utf8_path)?;
    let parent = match utf8_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let contents = serde_json::to_string_pretty(members).map_err(|error| WriteError::Serialize {
        message: error.to_string(),
    })?;

    Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let directory =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{}.tmp.{}.{}", file_name, std::process::id(), counter);

    directory
        .write(&tmp_name, contents.as_bytes())
        .map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    directory
        .rename(&tmp_name, &directory, file_name)
        .map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn file_name_component(path: &Utf8Path) -> Result<&str, WriteError> {
    match path.components().next_back() {
        Some(Utf8Component::Normal(file_name)) => Ok(file_name),
        _ => Err(WriteError::NotAFile {
            path: path.as_std_path().to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::generate_demo_members;

    #[rstest]
    fn written_document_round_trips_through_serde() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("users.json");
        let members = generate_demo_members(42, 8).expect("generated");

        write_members_file(&path, &members).expect("document written");

        let contents = std::fs::read_to_string(&path).expect("document readable");
        let decoded: Vec<DemoMember> = serde_json::from_str(&contents).expect("document decodes");
        assert_eq!(decoded, members);
    }

    #[rstest]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("data").join("users.json");
        let members = generate_demo_members(1, 2).expect("generated");

        write_members_file(&path, &members).expect("document written");

        assert!(path.exists());
    }

    #[rstest]
    fn no_temporary_files_survive_a_write() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("users.json");
        let members = generate_demo_members(3, 3).expect("generated");

        write_members_file(&path, &members).expect("document written");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("directory listing")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "temporary files left behind");
    }

    #[rstest]
    fn wire_format_uses_source_field_names() {
        let members = generate_demo_members(42, 30).expect("generated");
        let member = members
            .iter()
            .find(|member| member.email.is_some() && member.about_me.is_some())
            .expect("at least one fully populated member");

        let encoded = serde_json::to_value(member).expect("encodes");

        assert!(encoded.get("displayName").is_some());
        assert!(encoded.get("job_title").is_some());
        assert!(encoded.get("aboutMe").is_some());
        assert!(encoded.get("department").is_none(), "wire name only");
    }
}
