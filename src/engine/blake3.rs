//! BLAKE3 combine backend.

use blake3::Hasher;

/// Output width of the BLAKE3 engine.
pub(crate) const WIDTH: usize = blake3::OUT_LEN;

pub(crate) fn combine(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Hasher::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().as_bytes().to_vec()
}
