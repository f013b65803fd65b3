//! Blake2s combine backends (full and truncated output widths).

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2s256, Blake2sVar, Digest as _};

/// Output width of the half-width Blake2s engine.
pub(crate) const HALF_WIDTH: usize = 16;

/// Output width of the full Blake2s engine.
pub(crate) const FULL_WIDTH: usize = 32;

pub(crate) fn combine_full(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2s256::new();
    blake2::Digest::update(&mut hasher, left);
    blake2::Digest::update(&mut hasher, right);
    hasher.finalize().to_vec()
}

pub(crate) fn combine_half(left: &[u8], right: &[u8]) -> Vec<u8> {
    // HALF_WIDTH is within Blake2s' 1..=32 output range, so neither the
    // constructor nor finalisation can fail.
    let mut hasher = Blake2sVar::new(HALF_WIDTH).expect("valid Blake2s output size");
    hasher.update(left);
    hasher.update(right);
    let mut out = vec![0u8; HALF_WIDTH];
    hasher
        .finalize_variable(&mut out)
        .expect("buffer sized to the configured output");
    out
}
