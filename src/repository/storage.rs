use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::core::{decode, encode, GitError, ObjectId, ObjectType, Result};

/// Digest strings must at least cover the fan-out directory plus one
/// character of file name.
const MIN_DIGEST_LEN: usize = 3;

/// File system store for digest-addressed objects.
///
/// Objects live under `objects/<first-2-hex-chars>/<remaining-chars>`,
/// zlib-compressed. They are immutable: a digest is written at most once.
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    /// Create a store rooted at the given store directory
    pub fn new(store_dir: &Path) -> Self {
        Self {
            objects_dir: store_dir.join("objects"),
        }
    }

    /// The `objects` directory this store writes into
    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Map a digest string to its object file path, validating it first
    pub fn path_for_hex(&self, hex: &str) -> Result<PathBuf> {
        if hex.len() < MIN_DIGEST_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitError::InvalidDigest(hex.to_string()));
        }
        let (dir, file) = hex.split_at(2);
        Ok(self.objects_dir.join(dir).join(file))
    }

    fn object_path(&self, id: &ObjectId) -> PathBuf {
        let id_hex = id.to_hex();
        let dir = &id_hex[0..2];
        let file = &id_hex[2..];
        self.objects_dir.join(dir).join(file)
    }

    /// Whether an object with this digest has been stored
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object_path(id).exists()
    }

    /// Store an object, returning its digest.
    ///
    /// Idempotent: re-putting identical content is a no-op beyond the
    /// existence check. The compressed file is written atomically via a
    /// temporary file in the fan-out directory.
    pub fn put(&self, kind: ObjectType, payload: &[u8]) -> Result<ObjectId> {
        let data = encode(kind, payload);
        let id = ObjectId::hash_of(&data);
        let path = self.object_path(&id);

        if path.exists() {
            return Ok(id);
        }

        let dir = path
            .parent()
            .ok_or_else(|| GitError::InvalidDigest(id.to_hex()))?;
        fs::create_dir_all(dir)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut encoder = ZlibEncoder::new(temp_file.as_file_mut(), Compression::default());
            encoder.write_all(&data)?;
            encoder.finish()?;
        }
        temp_file
            .persist(&path)
            .map_err(|e| GitError::Io(e.error))?;

        Ok(id)
    }

    /// Read an object back by its digest string
    pub fn get_by_hex(&self, hex: &str) -> Result<(ObjectType, Vec<u8>)> {
        let path = self.path_for_hex(hex)?;
        if !path.exists() {
            return Err(GitError::ObjectNotFound(hex.to_string()));
        }

        let file = fs::File::open(&path)?;
        let mut decoder = ZlibDecoder::new(file);
        let mut data = Vec::new();
        decoder
            .read_to_end(&mut data)
            .map_err(|e| GitError::CorruptObject(format!("{}: {}", hex, e)))?;

        decode(&data)
    }

    /// Read an object back by its digest
    pub fn get(&self, id: &ObjectId) -> Result<(ObjectType, Vec<u8>)> {
        self.get_by_hex(&id.to_hex())
    }
}
