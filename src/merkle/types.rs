use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width digest stored in tree levels and proof steps.
///
/// The width is fixed per tree/proof instance by the selected
/// [`HashAlgo`](crate::engine::HashAlgo); all digests inside one tree or one
/// proof share it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Creates a digest from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the canonical zero digest of the provided width.
    pub fn zero(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
        }
    }

    /// Returns the digest width in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-width digest.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns a reference to the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the digest and returns the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Mutable view into the digest bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x")?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

/// Side of the concatenation a proof-step sibling occupies relative to the
/// digest being authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Sibling is the left operand: `combine(sibling, running)`.
    Left,
    /// Sibling is the right operand: `combine(running, sibling)`.
    Right,
}

impl Side {
    pub(crate) const fn code(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// One authentication step: the sibling digest and the side it sits on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub sibling: Digest,
    pub side: Side,
}

/// Canonical serialisation error domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerKind {
    Proof,
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// Backing storage could not grow; the operation left the tree unchanged.
    OutOfMemory,
    /// Proof requested for a digest absent from the leaf level.
    NotFound,
    /// `root()` or a proof was requested on a tree with no leaves.
    EmptyTree,
    /// A digest of the wrong width was supplied for the selected engine.
    WidthMismatch { expected: usize, got: usize },
    /// An explicit leaf index fell outside the leaf level.
    IndexOutOfRange { index: usize, max: usize },
    /// The tree cannot satisfy the request in its current shape.
    InvalidState { reason: &'static str },
    /// A canonical byte encoding could not be decoded.
    Serialization(SerKind),
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::OutOfMemory => write!(f, "level storage allocation failed"),
            MerkleError::NotFound => write!(f, "digest not present in the leaf level"),
            MerkleError::EmptyTree => write!(f, "tree has no leaves"),
            MerkleError::WidthMismatch { expected, got } => {
                write!(
                    f,
                    "digest width mismatch: expected {}, got {}",
                    expected, got
                )
            }
            MerkleError::IndexOutOfRange { index, max } => {
                write!(f, "leaf index {} out of range (max {})", index, max)
            }
            MerkleError::InvalidState { reason } => {
                write!(f, "invalid tree state: {}", reason)
            }
            MerkleError::Serialization(kind) => {
                write!(f, "serialisation error in {:?}", kind)
            }
        }
    }
}

impl std::error::Error for MerkleError {}
