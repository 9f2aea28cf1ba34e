use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::core::{GitError, ObjectId, Result};

/// Represents a commit object
#[derive(Debug, Clone)]
pub struct Commit {
    /// The tree object ID
    pub tree: ObjectId,
    /// Parent commit ID; a commit with no parent is a root
    pub parent: Option<ObjectId>,
    /// The author of the commit
    pub author: Signature,
    /// The committer of the commit
    pub committer: Signature,
    /// The commit message
    pub message: String,
}

impl Commit {
    /// Create a new commit
    pub fn new(
        tree: ObjectId,
        parent: Option<ObjectId>,
        author: Signature,
        committer: Signature,
        message: String,
    ) -> Self {
        Self {
            tree,
            parent,
            author,
            committer,
            message,
        }
    }

    /// Format the commit payload.
    ///
    /// The `parent` line is omitted entirely for root commits.
    pub fn format(&self) -> String {
        let mut content = String::new();

        content.push_str(&format!("tree {}\n", self.tree));
        if let Some(parent) = &self.parent {
            content.push_str(&format!("parent {}\n", parent));
        }
        content.push_str(&format!("author {}\n", self.author));
        content.push_str(&format!("committer {}\n", self.committer));

        content.push('\n');
        content.push_str(&self.message);
        content.push('\n');

        content
    }

    /// Parse a commit from its raw payload
    pub fn parse(data: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(data)
            .map_err(|_| GitError::MalformedObject("commit is not valid UTF-8".to_string()))?;

        let mut lines = content.lines();
        let mut tree = None;
        let mut parent = None;
        let mut author = None;
        let mut committer = None;

        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            if let Some(tree_hex) = line.strip_prefix("tree ") {
                tree = Some(ObjectId::from_str(tree_hex)?);
            } else if let Some(parent_hex) = line.strip_prefix("parent ") {
                parent = Some(ObjectId::from_str(parent_hex)?);
            } else if let Some(author_str) = line.strip_prefix("author ") {
                author = Some(Signature::parse(author_str)?);
            } else if let Some(committer_str) = line.strip_prefix("committer ") {
                committer = Some(Signature::parse(committer_str)?);
            }
        }

        let mut message = lines.collect::<Vec<&str>>().join("\n");
        while message.ends_with('\n') {
            message.pop();
        }

        let tree = tree
            .ok_or_else(|| GitError::MalformedObject("commit is missing its tree".to_string()))?;
        let author = author
            .ok_or_else(|| GitError::MalformedObject("commit is missing its author".to_string()))?;
        let committer = committer.ok_or_else(|| {
            GitError::MalformedObject("commit is missing its committer".to_string())
        })?;

        Ok(Self {
            tree,
            parent,
            author,
            committer,
            message,
        })
    }
}

/// Represents a commit signature (author or committer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The name of the author/committer
    pub name: String,
    /// The email of the author/committer
    pub email: String,
    /// The timestamp when the commit was created
    pub time: DateTime<Utc>,
    /// The timezone offset in minutes
    pub tz_offset: i32,
}

impl Signature {
    /// Create a new signature
    pub fn new(name: &str, email: &str, time: DateTime<Utc>, tz_offset: i32) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            time,
            tz_offset,
        }
    }

    /// Create a signature with the current wall-clock UTC time
    pub fn now(name: &str, email: &str) -> Self {
        Self::new(name, email, Utc::now(), 0)
    }

    /// Parse a signature from "Name <email> timestamp timezone"
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(GitError::MalformedObject(format!(
                "invalid signature '{}'",
                s
            )));
        }

        let tz_str = parts[0];
        let timestamp_str = parts[1];
        let name_email = parts[2];

        let email_start = name_email.rfind('<').ok_or_else(|| {
            GitError::MalformedObject(format!("missing email start in signature '{}'", s))
        })?;
        let email_end = name_email.rfind('>').ok_or_else(|| {
            GitError::MalformedObject(format!("missing email end in signature '{}'", s))
        })?;
        if email_start >= email_end {
            return Err(GitError::MalformedObject(format!(
                "invalid email in signature '{}'",
                s
            )));
        }

        let name = name_email[..email_start].trim().to_string();
        let email = name_email[email_start + 1..email_end].to_string();

        let timestamp = timestamp_str.parse::<i64>().map_err(|_| {
            GitError::MalformedObject(format!("invalid timestamp '{}'", timestamp_str))
        })?;
        let time = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            GitError::MalformedObject(format!("timestamp '{}' out of range", timestamp))
        })?;

        if tz_str.len() != 5 || !(tz_str.starts_with('+') || tz_str.starts_with('-')) {
            return Err(GitError::MalformedObject(format!(
                "invalid timezone '{}'",
                tz_str
            )));
        }
        let sign = if tz_str.starts_with('+') { 1 } else { -1 };
        let hours = tz_str[1..3]
            .parse::<i32>()
            .map_err(|_| GitError::MalformedObject(format!("invalid timezone '{}'", tz_str)))?;
        let minutes = tz_str[3..5]
            .parse::<i32>()
            .map_err(|_| GitError::MalformedObject(format!("invalid timezone '{}'", tz_str)))?;

        Ok(Self {
            name,
            email,
            time,
            tz_offset: sign * (hours * 60 + minutes),
        })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tz_hours = self.tz_offset.abs() / 60;
        let tz_minutes = self.tz_offset.abs() % 60;
        let tz_sign = if self.tz_offset >= 0 { '+' } else { '-' };

        write!(
            f,
            "{} <{}> {} {}{:02}{:02}",
            self.name,
            self.email,
            self.time.timestamp(),
            tz_sign,
            tz_hours,
            tz_minutes
        )
    }
}
