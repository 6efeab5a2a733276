//! # Hasher Module
//!
//! Computes whole-file content digests for byte-identity comparison.
//!
//! Files are streamed through an incremental MD5 state in fixed-size
//! chunks, so memory use stays constant regardless of file size.

use crate::error::HashError;
use md5::{Digest, Md5};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read size for the streaming loop
const CHUNK_SIZE: usize = 64 * 1024;

/// Hex-encoded 128-bit digest of a file's full contents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the content digest of one file.
///
/// Open or read failures are returned to the caller; no file is ever
/// silently skipped here.
pub fn hash_file(path: &Path) -> Result<ContentDigest, HashError> {
    let io_err = |source| HashError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buf).map_err(io_err)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(ContentDigest(format!("{:x}", hasher.finalize())))
}
