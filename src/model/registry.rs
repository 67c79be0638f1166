use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChaincodeError;

/// Metadata and transferable quantity for one file held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "sha256")]
    pub hash: String,
    pub name: String,
    pub password: String,
    /// Integer quantity, stored as a string.
    #[serde(deserialize_with = "count_from_string_or_number")]
    pub count: String,
}

impl FileRecord {
    pub fn new(
        hash: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            name: name.into(),
            password: password.into(),
            count: count.into(),
        }
    }

    /// The count as an integer. `key` names the record in the error.
    pub fn quantity(&self, key: &str) -> Result<i64, ChaincodeError> {
        parse_count(key, &self.count)
    }
}

/// Parse an integer quantity, tolerating surrounding whitespace.
pub(crate) fn parse_count(key: &str, raw: &str) -> Result<i64, ChaincodeError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ChaincodeError::InvalidCount {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Text(String),
    Number(serde_json::Number),
}

// Older transfers wrote the remainder as a bare JSON number.
fn count_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CountRepr::deserialize(deserializer)? {
        CountRepr::Text(text) => text,
        CountRepr::Number(number) => number.to_string(),
    })
}

/// Per-user mapping from file id to [`FileRecord`].
///
/// Iterates in file-id order. An empty registry is a freshly created user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserFileRegistry {
    files: BTreeMap<String, FileRecord>,
}

impl UserFileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `file_id`.
    pub fn insert(&mut self, file_id: impl Into<String>, record: FileRecord) -> Option<FileRecord> {
        self.files.insert(file_id.into(), record)
    }

    /// Merge `other` on top of `self`; `other` wins on clashing file ids.
    pub fn merge(&mut self, other: UserFileRegistry) {
        self.files.extend(other.files);
    }

    pub fn get(&self, file_id: &str) -> Option<&FileRecord> {
        self.files.get(file_id)
    }

    pub fn get_mut(&mut self, file_id: &str) -> Option<&mut FileRecord> {
        self.files.get_mut(file_id)
    }

    pub fn contains(&self, file_id: &str) -> bool {
        self.files.contains_key(file_id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRecord)> {
        self.files.iter().map(|(id, record)| (id.as_str(), record))
    }
}

impl FromIterator<(String, FileRecord)> for UserFileRegistry {
    fn from_iter<I: IntoIterator<Item = (String, FileRecord)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
