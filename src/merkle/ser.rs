use crate::engine::HashAlgo;

use super::proof::{Proof, PROOF_VERSION};
use super::types::{Digest, MerkleError, ProofStep, SerKind, Side};

/// Fixed header size: version (2), algo (1), digest width (2), step count (4).
const HEADER_LEN: usize = 9;

/// Serialises a [`Proof`] into the canonical byte layout.
///
/// Layout (little-endian): `version: u16`, `algo: u8`, `digest_width: u16`,
/// `step_count: u32`, then per step a side byte followed by the sibling
/// digest bytes.
pub fn encode_proof(proof: &Proof) -> Result<Vec<u8>, MerkleError> {
    let width = proof.digest_width as usize;
    let mut out = Vec::new();
    out.extend_from_slice(&proof.version.to_le_bytes());
    out.push(proof.algo.code());
    out.extend_from_slice(&proof.digest_width.to_le_bytes());
    out.extend_from_slice(&(proof.steps.len() as u32).to_le_bytes());
    for step in &proof.steps {
        if step.sibling.len() != width {
            return Err(MerkleError::Serialization(SerKind::Proof));
        }
        out.push(step.side.code());
        out.extend_from_slice(step.sibling.as_bytes());
    }
    Ok(out)
}

/// Deserialises a [`Proof`] from its canonical byte representation.
pub fn decode_proof(bytes: &[u8]) -> Result<Proof, MerkleError> {
    let mut cursor = 0usize;
    let mut take = |len: usize| -> Result<&[u8], MerkleError> {
        if cursor + len > bytes.len() {
            return Err(MerkleError::Serialization(SerKind::Proof));
        }
        let slice = &bytes[cursor..cursor + len];
        cursor += len;
        Ok(slice)
    };

    let mut version_bytes = [0u8; 2];
    version_bytes.copy_from_slice(take(2)?);
    let version = u16::from_le_bytes(version_bytes);
    if version != PROOF_VERSION {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }
    let algo =
        HashAlgo::from_code(take(1)?[0]).ok_or(MerkleError::Serialization(SerKind::Proof))?;
    let mut width_bytes = [0u8; 2];
    width_bytes.copy_from_slice(take(2)?);
    let digest_width = u16::from_le_bytes(width_bytes);
    if digest_width as usize != algo.digest_width() {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }
    let mut count_bytes = [0u8; 4];
    count_bytes.copy_from_slice(take(4)?);
    let step_count = u32::from_le_bytes(count_bytes) as usize;

    // The count field is untrusted input: bound it against the bytes that
    // actually follow the fixed-size header before allocating anything.
    let expected_len = step_count
        .checked_mul(1 + digest_width as usize)
        .ok_or(MerkleError::Serialization(SerKind::Proof))?;
    if bytes.len() - HEADER_LEN != expected_len {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }

    let mut steps = Vec::with_capacity(step_count);
    for _ in 0..step_count {
        let side =
            Side::from_code(take(1)?[0]).ok_or(MerkleError::Serialization(SerKind::Proof))?;
        let raw = take(digest_width as usize)?;
        steps.push(ProofStep {
            sibling: Digest::new(raw.to_vec()),
            side,
        });
    }
    if cursor != bytes.len() {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }

    Ok(Proof {
        version,
        algo,
        digest_width,
        steps,
    })
}
