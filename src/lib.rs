// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! A crit-bit tree keyed by 64-bit unsigned integers.
//!
//! [`CritBitTree`] is the price-level index of a decentralized-exchange
//! order book: given an integerised price tick it locates the tick-level
//! record in O(k) for k ≤ 64 key bits, and it traverses price levels in
//! ascending or descending order with O(1) steps between neighbors. Each
//! internal node discriminates keys by a single bit (its critical bit);
//! leaves carry the full key and the caller's value. The structure caches
//! the minimum and maximum leaves, so best-bid and best-ask are O(1).
//!
//! Nodes live in two index-addressed stores and refer to each other through
//! [`NodeHandle`]s. A handle also round-trips to a raw `u64` drawn from a
//! single namespace partitioned at [`PARTITION`]: internal indices below
//! it, one's-complement leaf indices above it, and the partition value
//! itself as null.
//!
//! The tree is not internally synchronised. Reads take `&self`, mutations
//! take `&mut self`; an embedding that shares the tree wraps it in its own
//! lock.
//!
//! ```
//! use critbit::CritBitTree;
//!
//! let mut asks = CritBitTree::new();
//! asks.insert(1_025, 40u64).unwrap();
//! asks.insert(1_050, 25u64).unwrap();
//! asks.insert(1_000, 10u64).unwrap();
//!
//! let (best_tick, _) = asks.min_leaf().unwrap();
//! assert_eq!(best_tick, 1_000);
//!
//! let ticks: Vec<u64> = asks.iter().map(|(tick, _)| tick).collect();
//! assert_eq!(ticks, vec![1_000, 1_025, 1_050]);
//! ```

mod iterator;
mod node_type;
mod store;
mod tree;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use crate::{
    iterator::CritBitIterator,
    node_type::{InternalNode, LeafNode, NodeHandle, LEAF_CAPACITY, PARTITION},
    tree::CritBitTree,
};

/// Errors surfaced by tree operations. All are fatal to the failing
/// operation and leave the tree unchanged.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TreeError {
    /// Leaf allocation would run past the leaf half of the handle
    /// namespace.
    #[error("leaf allocation would exceed the handle namespace")]
    CapacityExceeded,

    /// A tree with a null root still holds a non-zero leaf counter. Signals
    /// a corrupt tree.
    #[error("empty tree with a non-zero leaf counter")]
    TreeNotEmpty,

    /// The inserted key matches an existing leaf's key.
    #[error("key {0} already exists")]
    KeyAlreadyExists(u64),

    /// No leaf holds the requested key, or the tree is empty.
    #[error("no leaf with the requested key")]
    LeafNotFound,

    /// The leaf index is not live, or a non-root leaf had no parent.
    /// The latter signals a corrupt tree.
    #[error("leaf index {0} is not live")]
    IndexOutOfRange(u64),

    /// A child update was directed at a null parent.
    #[error("child update on a null parent")]
    NullParent,
}
