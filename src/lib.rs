//! `merkle-log` — an incremental, append-only Merkle hash tree.
//!
//! Digests are added one at a time; the root is available after every
//! addition; compact inclusion proofs are built against the current tree and
//! verified later without it.  The hash engine is selected per tree from a
//! closed registry ([`HashAlgo`]) and fixes the digest width for everything
//! that tree or its proofs touch.
//!
//! ```
//! use merkle_log::{Digest, HashAlgo, MerkleTree, ProofBuilder};
//!
//! let algo = HashAlgo::Blake3;
//! let mut tree = MerkleTree::new(algo);
//! let leaf = Digest::new(vec![7u8; algo.digest_width()]);
//! tree.add(leaf.clone()).unwrap();
//! tree.add(Digest::new(vec![9u8; algo.digest_width()])).unwrap();
//!
//! let root = tree.root().unwrap();
//! let proof = ProofBuilder::build(&tree, &leaf).unwrap();
//! assert!(proof.validate(&leaf, &root));
//! ```

pub mod engine;
pub mod merkle;
pub mod render;

pub use engine::HashAlgo;
pub use merkle::{
    decode_proof, encode_proof, Digest, MerkleError, MerkleTree, Proof, ProofBuilder, ProofStep,
    SerKind, Side, PROOF_VERSION,
};

/// Result type used throughout the library to surface recoverable errors.
pub type MerkleResult<T> = core::result::Result<T, MerkleError>;
