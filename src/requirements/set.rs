//! The requirements collection parsed from one text source.

use std::collections::HashMap;

use serde::Serialize;

use super::dialect::{Dialect, LineCodec};
use super::diff::{RequirementsDiff, VersionMismatch};

/// A single pinned package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageEntry {
    /// Package name, case-sensitive, as reported by the dialect.
    pub name: String,
    /// Opaque version string.
    pub version: String,
}

impl PackageEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Ordered, de-duplicated packages read from one source.
///
/// Built once from raw text and read-only afterwards. Names keep the order
/// in which they were first seen. When a name repeats, the first occurrence
/// wins and later lines are dropped silently; this mirrors what pip and
/// conda users have come to expect rather than any deliberate policy.
#[derive(Debug, Clone)]
pub struct Requirements {
    source: String,
    dialect: Dialect,
    entries: Vec<PackageEntry>,
    index: HashMap<String, usize>,
}

impl Requirements {
    /// Parse `text` line by line with the dialect's codec.
    ///
    /// Lines the codec cannot interpret are skipped. This never fails: the
    /// worst case is an empty collection.
    pub fn parse(text: &str, dialect: Dialect, source: impl Into<String>) -> Self {
        let source = source.into();
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for line in text.lines() {
            let Some((name, version)) = dialect.parse_line(line) else {
                continue;
            };
            if index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push(PackageEntry { name, version });
        }

        Self {
            source,
            dialect,
            entries,
            index,
        }
    }

    /// Label describing where the text came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Dialect used to parse and serialise this collection.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no packages were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Version recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].version.as_str())
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// Name to version mapping, ignoring order.
    pub fn as_mapping(&self) -> HashMap<&str, &str> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.version.as_str()))
            .collect()
    }

    /// Compare against `other`.
    ///
    /// Results follow `self`'s order, with names only found in `other`
    /// appended in `other`'s order.
    pub fn diff(&self, other: &Requirements) -> RequirementsDiff {
        let mut diff = RequirementsDiff::default();

        for entry in &self.entries {
            match other.get(&entry.name) {
                None => diff.only_in_self.push(entry.clone()),
                Some(theirs) if theirs != entry.version => {
                    diff.mismatched.push(VersionMismatch {
                        name: entry.name.clone(),
                        ours: entry.version.clone(),
                        theirs: theirs.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        diff.only_in_other = other
            .entries
            .iter()
            .filter(|e| !self.index.contains_key(&e.name))
            .cloned()
            .collect();

        diff
    }

    /// Render back to text, one line per entry, newline-joined.
    pub fn serialise(&self) -> String {
        self.entries
            .iter()
            .map(|e| self.dialect.serialise_line(&e.name, &e.version))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
