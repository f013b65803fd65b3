//! Hash engine registry for the Merkle layer.
//!
//! Every engine is a pure, stateless combine function over two digests of a
//! fixed width, selected once at tree construction time.  Trees, proofs and
//! the verifier all dispatch through [`HashAlgo`]; adding an algorithm means
//! adding an enum case with its width and combine function, nothing else.

mod blake2s;
mod blake3;

use serde::{Deserialize, Serialize};

use crate::merkle::Digest;

/// Supported combine algorithms.
///
/// | Variant | Digest Width | Backend |
/// |---------|--------------|---------|
/// | `Blake2s128` | 16 bytes | Blake2s with truncated output |
/// | `Blake2s256` | 32 bytes | Blake2s |
/// | `Blake3` | 32 bytes | BLAKE3 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashAlgo {
    /// Blake2s configured for 16-byte digests.
    Blake2s128,
    /// Blake2s with its full 32-byte output.
    #[default]
    Blake2s256,
    /// BLAKE3 with its standard 32-byte output.
    Blake3,
}

impl HashAlgo {
    /// Width in bytes of every digest produced and consumed by this engine.
    pub const fn digest_width(self) -> usize {
        match self {
            HashAlgo::Blake2s128 => blake2s::HALF_WIDTH,
            HashAlgo::Blake2s256 => blake2s::FULL_WIDTH,
            HashAlgo::Blake3 => blake3::WIDTH,
        }
    }

    /// Combines two sibling digests into their parent digest.
    ///
    /// The concatenation order is always `H(left || right)`; both inputs and
    /// the output are exactly [`digest_width`](Self::digest_width) bytes.
    pub fn combine(self, left: &Digest, right: &Digest) -> Digest {
        debug_assert_eq!(left.len(), self.digest_width());
        debug_assert_eq!(right.len(), self.digest_width());
        let bytes = match self {
            HashAlgo::Blake2s128 => {
                blake2s::combine_half(left.as_bytes(), right.as_bytes())
            }
            HashAlgo::Blake2s256 => {
                blake2s::combine_full(left.as_bytes(), right.as_bytes())
            }
            HashAlgo::Blake3 => blake3::combine(left.as_bytes(), right.as_bytes()),
        };
        Digest::new(bytes)
    }

    pub(crate) const fn code(self) -> u8 {
        match self {
            HashAlgo::Blake2s128 => 1,
            HashAlgo::Blake2s256 => 2,
            HashAlgo::Blake3 => 3,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(HashAlgo::Blake2s128),
            2 => Some(HashAlgo::Blake2s256),
            3 => Some(HashAlgo::Blake3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(algo: HashAlgo, fill: u8) -> Digest {
        Digest::new(vec![fill; algo.digest_width()])
    }

    #[test]
    fn combine_output_width_matches_engine() {
        for algo in [HashAlgo::Blake2s128, HashAlgo::Blake2s256, HashAlgo::Blake3] {
            let out = algo.combine(&digest(algo, 0xaa), &digest(algo, 0xbb));
            assert_eq!(out.len(), algo.digest_width());
        }
    }

    #[test]
    fn combine_is_deterministic() {
        for algo in [HashAlgo::Blake2s128, HashAlgo::Blake2s256, HashAlgo::Blake3] {
            let a = digest(algo, 0x01);
            let b = digest(algo, 0x02);
            assert_eq!(algo.combine(&a, &b), algo.combine(&a, &b));
        }
    }

    #[test]
    fn combine_is_order_sensitive() {
        for algo in [HashAlgo::Blake2s128, HashAlgo::Blake2s256, HashAlgo::Blake3] {
            let a = digest(algo, 0x01);
            let b = digest(algo, 0x02);
            assert_ne!(algo.combine(&a, &b), algo.combine(&b, &a));
        }
    }

    #[test]
    fn codes_round_trip() {
        for algo in [HashAlgo::Blake2s128, HashAlgo::Blake2s256, HashAlgo::Blake3] {
            assert_eq!(HashAlgo::from_code(algo.code()), Some(algo));
        }
        assert_eq!(HashAlgo::from_code(0), None);
        assert_eq!(HashAlgo::from_code(4), None);
    }
}
