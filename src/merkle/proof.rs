use serde::{Deserialize, Serialize};

use crate::engine::HashAlgo;

use super::tree::MerkleTree;
use super::types::{Digest, MerkleError, ProofStep, Side};

/// Version identifier for the canonical proof encoding.
pub const PROOF_VERSION: u16 = 1;

/// Portable inclusion proof: the ordered sibling steps from a leaf up to
/// (but not including) the root.
///
/// A proof holds copies of every digest it needs and outlives the tree it was
/// built from; validation requires only the engine selection carried inside
/// the proof, the claimed leaf and the candidate root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub version: u16,
    pub algo: HashAlgo,
    pub digest_width: u16,
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Ordered authentication steps, leaf level first.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Replays the combine fold and compares the result to `claimed_root`.
    ///
    /// Never errors: a malformed or tampered proof simply yields `false`.
    /// An empty proof is valid exactly when the leaf *is* the root, which is
    /// the single-leaf tree case.
    pub fn validate(&self, leaf: &Digest, claimed_root: &Digest) -> bool {
        let width = self.algo.digest_width();
        if self.digest_width as usize != width {
            return false;
        }
        if leaf.len() != width || claimed_root.len() != width {
            return false;
        }

        let mut running = leaf.clone();
        for step in &self.steps {
            if step.sibling.len() != width {
                return false;
            }
            running = match step.side {
                Side::Left => self.algo.combine(&step.sibling, &running),
                Side::Right => self.algo.combine(&running, &step.sibling),
            };
        }
        running == *claimed_root
    }
}

/// Builds inclusion proofs by walking a tree's stored levels.
pub struct ProofBuilder;

impl ProofBuilder {
    /// Builds a proof for the first leaf equal to `leaf`.
    ///
    /// Duplicate leaf digests are ambiguous under equality lookup: the
    /// earliest occurrence is the one proved.  Callers that need a proof for
    /// a specific position use [`build_at`](Self::build_at) instead.
    pub fn build(tree: &MerkleTree, leaf: &Digest) -> Result<Proof, MerkleError> {
        let expected = tree.algo().digest_width();
        if leaf.len() != expected {
            return Err(MerkleError::WidthMismatch {
                expected,
                got: leaf.len(),
            });
        }
        let leaves = tree.level(0).ok_or(MerkleError::InvalidState {
            reason: "cannot prove against an empty tree",
        })?;
        let index = leaves
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(MerkleError::NotFound)?;
        Self::walk(tree, index)
    }

    /// Builds a proof for the leaf at an explicit position.
    pub fn build_at(tree: &MerkleTree, index: usize) -> Result<Proof, MerkleError> {
        let leaves = tree.level(0).ok_or(MerkleError::InvalidState {
            reason: "cannot prove against an empty tree",
        })?;
        if index >= leaves.len() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                max: leaves.len() - 1,
            });
        }
        Self::walk(tree, index)
    }

    fn walk(tree: &MerkleTree, index: usize) -> Result<Proof, MerkleError> {
        let algo = tree.algo();
        // At most one step per level below the root, so reserving the full
        // height up front keeps the walk itself allocation-free.
        let mut steps = Vec::new();
        steps
            .try_reserve(tree.height())
            .map_err(|_| MerkleError::OutOfMemory)?;
        let mut i = index;
        let mut tier = 0usize;

        loop {
            let level = tree.level(tier).ok_or(MerkleError::InvalidState {
                reason: "level walk ran past the root",
            })?;
            if level.len() == 1 {
                break;
            }
            if i % 2 == 0 && i == level.len() - 1 {
                // Trailing node without a sibling: it propagates as its own
                // parent, so no step is recorded for this level.
            } else {
                let (sibling, side) = if i % 2 == 0 {
                    (i + 1, Side::Right)
                } else {
                    (i - 1, Side::Left)
                };
                steps.push(ProofStep {
                    sibling: level[sibling].clone(),
                    side,
                });
            }
            i /= 2;
            tier += 1;
        }

        Ok(Proof {
            version: PROOF_VERSION,
            algo,
            digest_width: algo.digest_width() as u16,
            steps,
        })
    }
}
