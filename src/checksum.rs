//! SHA-512 checksums in the base64 form Keygen and npm `integrity` use.

use crate::error::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha512};
use std::path::Path;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 64 * 1024;

/// Stream a file through SHA-512 and return the base64 digest
pub async fn checksum_file(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut hasher = Sha512::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(STANDARD.encode(hasher.finalize()))
}

/// Base64 SHA-512 digest of an in-memory buffer
pub fn checksum_bytes(data: &[u8]) -> String {
    STANDARD.encode(Sha512::digest(data))
}
