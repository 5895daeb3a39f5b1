use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// One entity collection mirrored to a JSON array file.
///
/// The file is read once at load time and the in-memory `Vec` is the working
/// set from then on. Every append rewrites the whole file; there is no
/// incremental storage and no record ever changes after it is written.
pub struct Collection<T> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the collection from `path`. A missing file is bootstrapped to an
    /// empty list and persisted immediately. A file that exists but does not
    /// parse as a JSON array of records is a fatal startup error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("malformed collection file {}", path.display()))?
        } else {
            write_records::<T>(&path, &[])?;
            Vec::new()
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Snapshot of the collection, insertion order.
    pub fn all(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.records.read().unwrap().iter().find(|r| pred(r)).cloned()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    pub fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.records.read().unwrap().iter().any(|r| pred(r))
    }

    /// Append a record and rewrite the backing file in full.
    pub fn append(&self, record: T) -> AppResult<T> {
        self.append_with(|_| Ok(record))
    }

    /// Run `build` over the current records and, if it yields a record,
    /// append it and rewrite the backing file. The whole sequence holds the
    /// collection's write lock, so a check inside `build` cannot interleave
    /// with a concurrent append to the same collection.
    ///
    /// If the file write fails the record stays in memory; there is no
    /// rollback.
    pub fn append_with(&self, build: impl FnOnce(&[T]) -> AppResult<T>) -> AppResult<T> {
        let mut records = self.records.write().unwrap();
        let record = build(&records)?;
        records.push(record.clone());
        write_records(&self.path, &records).map_err(AppError::Storage)?;
        Ok(record)
    }
}

/// Serialize the full record list to `path`, pretty-printed at a 4-space
/// indent to match the hand-seeded data files.
fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .with_context(|| format!("failed to serialize records for {}", path.display()))?;
    fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            age: None,
            post_ids: Vec::new(),
        }
    }

    #[test]
    fn missing_file_is_bootstrapped_to_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let collection: Collection<User> = Collection::load(&path).unwrap();
        assert!(collection.all().is_empty());

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "[]");
    }

    #[test]
    fn malformed_file_is_a_fatal_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not an array").unwrap();

        let result: Result<Collection<User>> = Collection::load(&path);
        assert!(result.is_err());
    }

    #[test]
    fn append_persists_and_reload_matches_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let collection: Collection<User> = Collection::load(&path).unwrap();
        collection.append(user("u1", "Ana", "a@x.com")).unwrap();
        collection.append(user("u2", "Ben", "b@x.com")).unwrap();

        let reloaded: Collection<User> = Collection::load(&path).unwrap();
        let in_memory: Vec<String> = collection.all().into_iter().map(|u| u.id).collect();
        let from_disk: Vec<String> = reloaded.all().into_iter().map(|u| u.id).collect();
        assert_eq!(in_memory, from_disk);
        assert_eq!(from_disk, vec!["u1", "u2"]);
    }

    #[test]
    fn append_with_rejection_leaves_collection_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let collection: Collection<User> = Collection::load(&path).unwrap();
        collection.append(user("u1", "Ana", "a@x.com")).unwrap();

        let result = collection.append_with(|records| {
            if records.iter().any(|u| u.email == "a@x.com") {
                return Err(crate::error::AppError::DuplicateEmail("a@x.com".into()));
            }
            Ok(user("u2", "Imposter", "a@x.com"))
        });
        assert!(result.is_err());
        assert_eq!(collection.all().len(), 1);

        // on-disk copy untouched as well
        let reloaded: Collection<User> = Collection::load(&path).unwrap();
        assert_eq!(reloaded.all().len(), 1);
    }

    #[test]
    fn records_keep_camel_case_field_names_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let collection: Collection<User> = Collection::load(&path).unwrap();
        collection.append(user("u1", "Ana", "a@x.com")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"postIds\""));
        assert!(!raw.contains("post_ids"));
    }
}
