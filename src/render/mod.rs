//! Presentation helpers for trees and digests.
//!
//! Pure consumers of [`MerkleTree`] accessors and digest bytes; no core
//! algorithm depends on this module.

use std::fmt::Write as _;

use crate::merkle::{Digest, MerkleTree};

/// Lowercase hex of the first `n` bytes of a digest.
pub fn hex_prefix(digest: &Digest, n: usize) -> String {
    let mut out = String::new();
    for byte in digest.as_bytes().iter().take(n) {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Renders the tree top-down as centered rows of `|`-separated digests.
///
/// `print_width` is the number of digest bytes shown per node and `columns`
/// the layout width the rows are centered within.
pub fn render_tree(tree: &MerkleTree, print_width: usize, columns: usize) -> String {
    let mut out = String::new();
    let height = tree.height();
    let midpoint = columns / 2;
    let _ = writeln!(out, "{:midpoint$}.", "");

    for tier in (0..height).rev() {
        let Some(level) = tree.level(tier) else {
            continue;
        };
        let mut indent = midpoint as isize
            - (print_width as isize / 2) * (1isize << (height - tier).min(62));
        if tier != height - 1 && height - tier >= 2 {
            indent -= (1isize << (height - tier - 2).min(62)) - 1;
        }
        let indent = indent.max(0) as usize;

        let _ = write!(out, "{:indent$}", "");
        for (position, digest) in level.iter().enumerate() {
            if position != 0 {
                out.push('|');
            }
            out.push_str(&hex_prefix(digest, print_width));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HashAlgo;

    #[test]
    fn hex_prefix_truncates() {
        let digest = Digest::new(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_prefix(&digest, 2), "dead");
        assert_eq!(hex_prefix(&digest, 8), "deadbeef");
    }

    #[test]
    fn render_lists_every_level() {
        let mut tree = MerkleTree::new(HashAlgo::Blake2s128);
        for fill in 1..=3u8 {
            tree.add(Digest::new(vec![fill; 16])).unwrap();
        }
        let rendered = render_tree(&tree, 4, 80);
        // Header row plus one row per level.
        assert_eq!(rendered.lines().count(), 1 + tree.height());
        let leaf_row = rendered.lines().last().unwrap();
        assert_eq!(leaf_row.matches('|').count(), 2);
    }
}
