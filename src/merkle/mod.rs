//! Incremental Merkle tree core: level storage, tier-climbing insertion,
//! proof construction and tree-free verification.
//!
//! The module fixes the following behaviour:
//!
//! * **Insertion order is leaf order:** level 0 records digests exactly as
//!   they were added; upper levels hold the running parents and the top level
//!   always holds the single current root.
//! * **Carry/replace insertion:** a trailing node without a sibling stands in
//!   provisionally for its own parent and is overwritten in place once the
//!   sibling arrives, keeping every `add` at O(log n) amortized work.
//! * **Portable proofs:** a proof copies the sibling digests it needs and is
//!   verified without the tree, from the engine selection, the leaf and the
//!   candidate root alone.
//!
//! The public API re-exports the most relevant types for convenience.

mod proof;
mod ser;
mod store;
mod tree;
mod types;

pub use proof::{Proof, ProofBuilder, PROOF_VERSION};
pub use ser::{decode_proof, encode_proof};
pub use tree::MerkleTree;
pub use types::{Digest, MerkleError, ProofStep, SerKind, Side};
