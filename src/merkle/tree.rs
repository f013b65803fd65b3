use crate::engine::HashAlgo;

use super::store::{Level, LevelStore};
use super::types::{Digest, MerkleError};

/// Incremental append-only Merkle tree.
///
/// Leaf digests are added one at a time and the root is recomputed in
/// O(log n) amortized work per insertion by climbing the levels with
/// carry/replace semantics: a trailing node without a sibling provisionally
/// stands in for its own parent, and arrives at its final value once the
/// sibling shows up and triggers a carry.  The tree never shrinks and digests
/// are never removed.
///
/// A single instance supports one writer; `add` runs to completion before
/// `root` or proof construction observe the tree, and callers serialise
/// concurrent mutation externally.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    algo: HashAlgo,
    store: LevelStore,
}

impl MerkleTree {
    /// Creates an empty tree bound to the given hash engine.
    pub fn new(algo: HashAlgo) -> Self {
        Self {
            algo,
            store: LevelStore::new(),
        }
    }

    /// Returns the engine selected at construction time.
    pub fn algo(&self) -> HashAlgo {
        self.algo
    }

    /// Number of levels; zero for the empty tree.
    pub fn height(&self) -> usize {
        self.store.height()
    }

    /// Number of leaves added so far.
    pub fn leaf_count(&self) -> usize {
        self.store.level(0).map_or(0, |level| level.len())
    }

    /// Digests of level `index`, leaves first.  `None` past the top level.
    pub fn level(&self, index: usize) -> Option<&[Digest]> {
        self.store.level(index).map(|level| level.as_slice())
    }

    /// Returns the current root digest.
    pub fn root(&self) -> Result<Digest, MerkleError> {
        let height = self.store.height();
        if height == 0 {
            return Err(MerkleError::EmptyTree);
        }
        let top = self
            .store
            .level(height - 1)
            .ok_or(MerkleError::InvalidState {
                reason: "missing top level",
            })?;
        if top.len() != 1 {
            return Err(MerkleError::InvalidState {
                reason: "top level does not hold a single root",
            });
        }
        Ok(top.get(0).clone())
    }

    /// Appends a leaf digest and restores the root.
    ///
    /// Climbs the levels from the leaves upward.  At each level the incoming
    /// digest either appends a new slot or, once a carry has happened below,
    /// overwrites the provisional node left waiting for its sibling.  An even
    /// level length means the last two slots are complete siblings: their
    /// combined digest carries upward and every level above switches to the
    /// overwrite path.  An odd length leaves the just-placed digest to
    /// propagate as its own parent.
    ///
    /// The climb is deterministic, so every slot it will touch is reserved
    /// before the first mutation; a failed `add` leaves the tree unchanged.
    pub fn add(&mut self, digest: Digest) -> Result<(), MerkleError> {
        let expected = self.algo.digest_width();
        if digest.len() != expected {
            return Err(MerkleError::WidthMismatch {
                expected,
                got: digest.len(),
            });
        }

        let mut prepared = self.reserve_climb()?;

        let mut current = digest;
        let mut replacing = false;
        let mut tier = 0usize;

        loop {
            if self.store.height() == tier {
                debug_assert!(prepared.is_some(), "climb outran its reservation");
                self.store.push_level(prepared.take().unwrap_or_default());
            }

            let algo = self.algo;
            let level = self.store.level_mut(tier);
            if replacing && level.len() > 0 {
                level.replace_top(current);
            } else {
                level.push(current);
            }

            let len = level.len();
            if len == 1 {
                // This level is the root.
                break;
            }
            if len % 2 == 0 {
                current = algo.combine(level.get(len - 2), level.get(len - 1));
                replacing = true;
            } else {
                current = level.get(len - 1).clone();
            }

            tier += 1;
        }

        Ok(())
    }

    /// Reservation pass for `add`: walks the same append/overwrite decisions
    /// the climb will make, reserving one slot per level that gains a node
    /// and preparing the new top level when the height grows.  Only spare
    /// capacity changes; contents are untouched, so a failure here aborts the
    /// whole `add` with the tree as it was.
    fn reserve_climb(&mut self) -> Result<Option<Level>, MerkleError> {
        let mut replacing = false;
        let mut tier = 0usize;

        loop {
            if self.store.height() == tier {
                self.store.reserve_level_slot()?;
                return Ok(Some(Level::prepared()?));
            }

            let level = self.store.level_mut(tier);
            let len = level.len();
            let appended = !(replacing && len > 0);
            if appended {
                level.reserve(1)?;
            }

            let new_len = if appended { len + 1 } else { len };
            if new_len == 1 {
                return Ok(None);
            }
            if new_len % 2 == 0 {
                replacing = true;
            }

            tier += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_plan_tracks_level_growth() {
        let algo = HashAlgo::Blake2s128;
        let mut tree = MerkleTree::new(algo);
        for i in 0..40usize {
            let plans_new_level = tree.reserve_climb().unwrap().is_some();
            let before = tree.height();
            tree.add(Digest::new(vec![i as u8; 16])).unwrap();
            assert_eq!(tree.height() > before, plans_new_level, "leaf {i}");
        }
    }

    #[test]
    fn failed_width_check_leaves_tree_unchanged() {
        let algo = HashAlgo::Blake2s128;
        let mut tree = MerkleTree::new(algo);
        tree.add(Digest::new(vec![1u8; 16])).unwrap();
        tree.add(Digest::new(vec![2u8; 16])).unwrap();
        let root = tree.root().unwrap();

        assert!(tree.add(Digest::new(vec![3u8; 32])).is_err());
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.root().unwrap(), root);
    }
}
