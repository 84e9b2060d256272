use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use flate2::write::GzEncoder;
use flate2::Compression;

/// Gzip-compresses the given bytes in one pass. Write errors propagate; a
/// partially written stream is never returned.
pub fn gzip_compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Base64-encodes bytes with the standard alphabet for transport in a
/// text-bodied response envelope.
pub fn base64_encode(data: &[u8]) -> String {
    BASE64.encode(data)
}
