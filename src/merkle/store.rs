use super::types::{Digest, MerkleError};

/// Initial number of level slots reserved by an empty tree.
const INIT_LEVELS: usize = 16;

/// Initial number of digest slots reserved per level.
const INIT_NODES: usize = 16;

/// One horizontal layer of the tree; level 0 holds the leaves.
#[derive(Clone, Debug, Default)]
pub(crate) struct Level {
    digests: Vec<Digest>,
}

impl Level {
    /// Creates a detached empty level with the initial node capacity
    /// reserved, surfacing growth failure instead of aborting.
    pub(crate) fn prepared() -> Result<Self, MerkleError> {
        let mut level = Level::default();
        level.reserve(INIT_NODES)?;
        Ok(level)
    }

    pub(crate) fn len(&self) -> usize {
        self.digests.len()
    }

    pub(crate) fn get(&self, index: usize) -> &Digest {
        &self.digests[index]
    }

    pub(crate) fn as_slice(&self) -> &[Digest] {
        &self.digests
    }

    /// Reserves room for `additional` digests without touching the contents.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), MerkleError> {
        self.digests
            .try_reserve(additional)
            .map_err(|_| MerkleError::OutOfMemory)
    }

    /// Appends a digest into capacity the caller reserved beforehand.
    pub(crate) fn push(&mut self, digest: Digest) {
        self.digests.push(digest);
    }

    /// Overwrites the last slot; the caller guarantees the level is non-empty.
    pub(crate) fn replace_top(&mut self, digest: Digest) {
        let top = self.digests.len() - 1;
        self.digests[top] = digest;
    }
}

/// Ordered sequence of levels backing a [`MerkleTree`](super::MerkleTree).
///
/// Maintains the shape invariant the incremental insertion relies on: after
/// every completed `add`, `len(level[k+1]) == ceil(len(level[k]) / 2)` for all
/// non-top levels and the top level holds exactly the root.
///
/// Growth is split into a fallible reservation step and an infallible
/// placement step so callers can reserve everything an operation needs before
/// mutating anything.
#[derive(Clone, Debug, Default)]
pub(crate) struct LevelStore {
    levels: Vec<Level>,
}

impl LevelStore {
    pub(crate) fn new() -> Self {
        Self {
            levels: Vec::with_capacity(INIT_LEVELS),
        }
    }

    /// Number of levels currently present.
    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub(crate) fn level_mut(&mut self, index: usize) -> &mut Level {
        &mut self.levels[index]
    }

    /// Reserves the slot a forthcoming level will occupy.
    pub(crate) fn reserve_level_slot(&mut self) -> Result<(), MerkleError> {
        self.levels
            .try_reserve(1)
            .map_err(|_| MerkleError::OutOfMemory)
    }

    /// Installs a prepared level on top, into a slot reserved beforehand.
    pub(crate) fn push_level(&mut self, level: Level) {
        self.levels.push(level);
    }
}
