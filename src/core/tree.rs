use crate::core::{GitError, ObjectId, Result};

/// File mode of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Regular file ("100644")
    File,
    /// Subdirectory ("040000")
    Directory,
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::File => "100644",
            EntryMode::Directory => "040000",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "100644" => Some(EntryMode::File),
            "040000" => Some(EntryMode::Directory),
            _ => None,
        }
    }
}

/// A single named child of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub id: ObjectId,
}

/// An ordered list of named child entries.
///
/// Entries are sorted by name at construction so that equal directory
/// contents always serialize to the same bytes and hash identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Serialize to the canonical payload: per entry,
    /// `<mode> <name>` NUL and the 20 raw digest bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        for entry in &self.entries {
            payload.extend_from_slice(entry.mode.as_str().as_bytes());
            payload.push(b' ');
            payload.extend_from_slice(entry.name.as_bytes());
            payload.push(0);
            payload.extend_from_slice(entry.id.as_bytes());
        }
        payload
    }

    /// Parse a tree payload produced by `serialize`
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let mut entries = Vec::new();
        let mut index = 0;

        while index < payload.len() {
            let mode_end = payload[index..]
                .iter()
                .position(|&b| b == b' ')
                .map(|p| index + p)
                .ok_or_else(|| {
                    GitError::MalformedObject("tree entry: unable to find mode".to_string())
                })?;
            let mode_str = std::str::from_utf8(&payload[index..mode_end])
                .map_err(|_| GitError::MalformedObject("tree entry: mode is not UTF-8".to_string()))?;
            let mode = EntryMode::from_str(mode_str).ok_or_else(|| {
                GitError::MalformedObject(format!("tree entry: unknown mode '{}'", mode_str))
            })?;
            index = mode_end + 1;

            let name_end = payload[index..]
                .iter()
                .position(|&b| b == 0)
                .map(|p| index + p)
                .ok_or_else(|| {
                    GitError::MalformedObject("tree entry: unable to find name".to_string())
                })?;
            let name = std::str::from_utf8(&payload[index..name_end])
                .map_err(|_| GitError::MalformedObject("tree entry: name is not UTF-8".to_string()))?
                .to_string();
            index = name_end + 1;

            if index + 20 > payload.len() {
                return Err(GitError::MalformedObject(
                    "tree entry: truncated digest".to_string(),
                ));
            }
            let mut digest = [0u8; 20];
            digest.copy_from_slice(&payload[index..index + 20]);
            index += 20;

            entries.push(TreeEntry {
                mode,
                name,
                id: ObjectId::new(digest),
            });
        }

        Ok(Self { entries })
    }
}
