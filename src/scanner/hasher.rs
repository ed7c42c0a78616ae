//! BLAKE3 file fingerprinting with streaming support.
//!
//! # Overview
//!
//! A [`Fingerprint`] is the BLAKE3 digest of a file's full content. Files are
//! read in fixed-size chunks and folded into a digest state that lives only
//! for the duration of one call, so fingerprinting holds no shared state.
//!
//! # Example
//!
//! ```no_run
//! use dirdupe::scanner::hasher::fingerprint;
//! use std::path::Path;
//!
//! let fp = fingerprint(Path::new("photo.jpg")).unwrap();
//! println!("{}", fp.encoded());
//! ```

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::HashError;

/// Size of the read buffer used while streaming file content (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Raw digest bytes.
pub type Digest = [u8; 32];

/// Content fingerprint of a single file.
///
/// Two files with identical bytes always produce equal fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Digest);

impl Fingerprint {
    /// Wrap an existing digest.
    #[must_use]
    pub fn from_bytes(bytes: Digest) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &Digest {
        &self.0
    }

    /// Canonical textual encoding (standard padded base64).
    #[must_use]
    pub fn encoded(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Short prefix of the encoded form, for display.
    #[must_use]
    pub fn short(&self) -> String {
        self.encoded().chars().take(8).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

/// Fingerprint the file at `path`.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or a read fails
/// part-way through. A partial fingerprint is never returned.
pub fn fingerprint(path: &Path) -> Result<Fingerprint, HashError> {
    let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let fp = fingerprint_reader(file).map_err(|e| HashError::from_io(path, e))?;
    log::trace!("Fingerprinted {} -> {}", path.display(), fp.short());
    Ok(fp)
}

/// Fingerprint everything readable from `reader`.
///
/// # Errors
///
/// Propagates the first read error other than [`ErrorKind::Interrupted`].
pub fn fingerprint_reader<R: Read>(mut reader: R) -> std::io::Result<Fingerprint> {
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(Fingerprint(*hasher.finalize().as_bytes()))
}
