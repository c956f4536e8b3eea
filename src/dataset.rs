//! Label/value dataset
//!
//! The pool of entries the autocomplete field matches against, plus loaders
//! for JSON files and stdin.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AutofillError;

/// A single label/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Human-readable text shown to and typed by the user
    pub label: String,
    /// Canonical value mirrored into the shadow input
    pub value: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for Entry {
    fn from((label, value): (L, V)) -> Self {
        Entry::new(label, value)
    }
}

/// Accepted shapes for a single dataset element on disk
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(String, String),
    Object { label: String, value: String },
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Pair(label, value) => Entry { label, value },
            RawEntry::Object { label, value } => Entry { label, value },
        }
    }
}

/// Ordered pool of entries; order is the unfiltered display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a dataset from a JSON value
    ///
    /// Returns `None` when the value is not an array. Elements must be
    /// `[label, value]` pairs or `{"label": .., "value": ..}` objects.
    pub fn from_value(value: &Value) -> Option<Result<Self, AutofillError>> {
        let Value::Array(items) = value else {
            return None;
        };

        let parsed = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                RawEntry::deserialize(item)
                    .map(Entry::from)
                    .map_err(|e| AutofillError::InvalidData(format!("entry {}: {}", idx, e)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Dataset::new);

        Some(parsed)
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, AutofillError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| AutofillError::InvalidData(e.to_string()))?;

        Self::from_value(&value).unwrap_or_else(|| {
            Err(AutofillError::InvalidData(
                "top-level value is not an array".to_string(),
            ))
        })
    }

    /// Read a dataset from a file path, or stdin when the path is `-`
    pub fn read(path: &Path) -> Result<Self, AutofillError> {
        let mut contents = String::new();
        if path == Path::new("-") {
            io::stdin().read_to_string(&mut contents)?;
        } else {
            File::open(path)?.read_to_string(&mut contents)?;
        }
        Self::from_json_str(&contents)
    }

    /// The ten Canadian provinces with their postal abbreviations
    pub fn provinces() -> Self {
        [
            ("Alberta", "AB"),
            ("British Columbia", "BC"),
            ("Manitoba", "MB"),
            ("New Brunswick", "NB"),
            ("Newfoundland and Labrador", "NL"),
            ("Nova Scotia", "NS"),
            ("Ontario", "ON"),
            ("Prince Edward Island", "PE"),
            ("Quebec", "QC"),
            ("Saskatchewan", "SK"),
        ]
        .into_iter()
        .collect()
    }
}

impl<E: Into<Entry>> FromIterator<E> for Dataset {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Entry>> for Dataset {
    fn from(entries: Vec<Entry>) -> Self {
        Dataset::new(entries)
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod dataset_tests;
