use std::fmt;
use std::str::FromStr;

use hex::{FromHex, ToHex};
use sha1::{Digest, Sha1};

use crate::core::{GitError, Result};

/// Represents an object ID (SHA-1 hash of the canonical object bytes)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 20]);

impl ObjectId {
    /// Create a new ObjectId from bytes
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Hash a canonical byte sequence, header included
    pub fn hash_of(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        let hash = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash);

        Self(bytes)
    }

    /// Compute the object ID for the given payload
    pub fn compute(kind: ObjectType, payload: &[u8]) -> Self {
        Self::hash_of(&encode(kind, payload))
    }

    /// Get the object ID as bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Get a hex string representation
    pub fn to_hex(&self) -> String {
        self.0.encode_hex::<String>()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = <[u8; 20]>::from_hex(s)
            .map_err(|_| GitError::InvalidDigest(s.to_string()))?;
        Ok(Self(bytes))
    }
}

/// Enumeration of object types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Commit,
    Tree,
    Blob,
}

impl ObjectType {
    /// Convert the object type to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Commit => "commit",
            ObjectType::Tree => "tree",
            ObjectType::Blob => "blob",
        }
    }

    /// Try to parse an object type from a string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "commit" => Some(ObjectType::Commit),
            "tree" => Some(ObjectType::Tree),
            "blob" => Some(ObjectType::Blob),
            _ => None,
        }
    }
}

/// Produce the canonical byte sequence `"<kind> <len>\0<payload>"`
pub fn encode(kind: ObjectType, payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(payload.len() + 16);
    data.extend_from_slice(kind.as_str().as_bytes());
    data.push(b' ');
    data.extend_from_slice(payload.len().to_string().as_bytes());
    data.push(0);
    data.extend_from_slice(payload);
    data
}

/// Split a canonical byte sequence back into its kind and payload
pub fn decode(data: &[u8]) -> Result<(ObjectType, Vec<u8>)> {
    let header_end = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| GitError::MalformedObject("missing NUL separator".to_string()))?;

    let header = std::str::from_utf8(&data[..header_end])
        .map_err(|_| GitError::MalformedObject("header is not valid UTF-8".to_string()))?;

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 {
        return Err(GitError::MalformedObject(format!(
            "bad header '{}'",
            header
        )));
    }

    let kind = ObjectType::from_str(parts[0])
        .ok_or_else(|| GitError::MalformedObject(format!("unknown object type '{}'", parts[0])))?;

    let size = parts[1]
        .parse::<usize>()
        .map_err(|_| GitError::MalformedObject(format!("bad payload length '{}'", parts[1])))?;

    let payload = data[header_end + 1..].to_vec();
    if payload.len() != size {
        return Err(GitError::MalformedObject(format!(
            "payload length mismatch: header says {}, got {}",
            size,
            payload.len()
        )));
    }

    Ok((kind, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        for payload in [&b""[..], b"hello", b"\x00\x01\xff binary"] {
            let encoded = encode(ObjectType::Blob, payload);
            let (kind, decoded) = decode(&encoded).unwrap();
            assert_eq!(kind, ObjectType::Blob);
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let a = ObjectId::compute(ObjectType::Blob, b"hello");
        let b = ObjectId::compute(ObjectType::Blob, b"hello");
        assert_eq!(a, b);
        assert_ne!(a, ObjectId::compute(ObjectType::Blob, b"hello!"));
        assert_ne!(a, ObjectId::compute(ObjectType::Tree, b"hello"));
    }

    #[test]
    fn known_blob_digests() {
        // Digests of "blob 0\0" and "blob 5\0hello"
        let empty = ObjectId::compute(ObjectType::Blob, b"");
        assert_eq!(empty.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");

        let hello = ObjectId::compute(ObjectType::Blob, b"hello");
        assert_eq!(hello.to_hex(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");
    }

    #[test]
    fn hex_round_trip() {
        let id = ObjectId::compute(ObjectType::Blob, b"round trip");
        let parsed: ObjectId = id.to_hex().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_short_digest() {
        assert!("abc123".parse::<ObjectId>().is_err());
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(matches!(
            decode(b"blob 5 no separator"),
            Err(GitError::MalformedObject(_))
        ));
        assert!(matches!(
            decode(b"blob\0hello"),
            Err(GitError::MalformedObject(_))
        ));
        assert!(matches!(
            decode(b"blob 99\0hello"),
            Err(GitError::MalformedObject(_))
        ));
        assert!(matches!(
            decode(b"widget 5\0hello"),
            Err(GitError::MalformedObject(_))
        ));
    }
}
