// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! Node types of [`CritBitTree`](crate::CritBitTree)
//!
//! This module defines the two node kinds of the tree: [`InternalNode`] and
//! [`LeafNode`]. An internal node discriminates keys by a single bit and
//! always has two children; a leaf stores the full key and the value
//! associated. Nodes refer to each other through [`NodeHandle`], which also
//! round-trips to the raw partitioned `u64` namespace used by embeddings
//! that exchange handles as plain integers.

use borsh::{BorshDeserialize, BorshSerialize};
use mirai_annotations::*;
#[cfg(any(test, feature = "fuzzing"))]
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

/// Boundary of the raw handle namespace. Raw values below it address
/// internal nodes, values above it are one's-complement encoded leaf
/// indices, and the boundary itself is the null handle.
pub const PARTITION: u64 = 1 << 63;

/// Exclusive upper bound on leaf indices. Keeps every encoded leaf handle
/// strictly above [`PARTITION`].
pub const LEAF_CAPACITY: u64 = PARTITION - 1;

/// A reference to a node of the tree: an internal node, a leaf, or nothing.
///
/// Internal nodes and leaves live in separate stores and are addressed by
/// dense indices, so the handle is self-identifying without consulting
/// either store.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub enum NodeHandle {
    /// No node. The root of an empty tree and the parent of the root.
    Null,
    /// An internal node, by index into the internal-node store.
    Internal(u64),
    /// A leaf, by index into the leaf store.
    Leaf(u64),
}

impl NodeHandle {
    /// Returns `true` if the handle refers to nothing.
    pub fn is_null(self) -> bool {
        matches!(self, NodeHandle::Null)
    }

    /// Returns `true` if the handle refers to an internal node.
    pub fn is_internal(self) -> bool {
        matches!(self, NodeHandle::Internal(_))
    }

    /// Returns `true` if the handle refers to a leaf.
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeHandle::Leaf(_))
    }

    /// The leaf index, if this handle refers to a leaf.
    pub fn as_leaf(self) -> Option<u64> {
        match self {
            NodeHandle::Leaf(index) => Some(index),
            _ => None,
        }
    }

    /// The internal-node index, if this handle refers to an internal node.
    pub fn as_internal(self) -> Option<u64> {
        match self {
            NodeHandle::Internal(index) => Some(index),
            _ => None,
        }
    }

    /// Encodes the handle into the partitioned `u64` namespace: internal
    /// indices map below [`PARTITION`], leaf indices map to their
    /// one's complement above it, and null maps to [`PARTITION`] itself.
    pub fn to_raw(self) -> u64 {
        match self {
            NodeHandle::Null => PARTITION,
            NodeHandle::Internal(index) => {
                precondition!(index < PARTITION);
                index
            }
            NodeHandle::Leaf(index) => {
                precondition!(index < LEAF_CAPACITY);
                !index
            }
        }
    }

    /// Decodes a raw `u64` handle. The inverse of [`NodeHandle::to_raw`].
    pub fn from_raw(raw: u64) -> Self {
        if raw == PARTITION {
            NodeHandle::Null
        } else if raw < PARTITION {
            NodeHandle::Internal(raw)
        } else {
            NodeHandle::Leaf(!raw)
        }
    }
}

#[cfg(any(test, feature = "fuzzing"))]
impl Arbitrary for NodeHandle {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![
            Just(NodeHandle::Null),
            (0..PARTITION).prop_map(NodeHandle::Internal),
            (0..LEAF_CAPACITY).prop_map(NodeHandle::Leaf),
        ]
        .boxed()
    }
}

/// A branch node. `mask` has exactly one bit set: keys with that bit clear
/// live under `left`, keys with that bit set live under `right`. Masks
/// strictly decrease from the root toward the leaves.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct InternalNode {
    pub(crate) mask: u64,
    pub(crate) left: NodeHandle,
    pub(crate) right: NodeHandle,
    pub(crate) parent: NodeHandle,
}

impl InternalNode {
    /// Creates a new internal node.
    pub(crate) fn new(mask: u64, left: NodeHandle, right: NodeHandle, parent: NodeHandle) -> Self {
        precondition!(mask.is_power_of_two());
        Self {
            mask,
            left,
            right,
            parent,
        }
    }

    /// Gets the critical-bit mask.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Gets the child holding keys with the mask bit clear.
    pub fn left(&self) -> NodeHandle {
        self.left
    }

    /// Gets the child holding keys with the mask bit set.
    pub fn right(&self) -> NodeHandle {
        self.right
    }

    /// Gets the parent handle. Null iff this node is the root.
    pub fn parent(&self) -> NodeHandle {
        self.parent
    }

    /// The child `key` descends into at this node.
    pub(crate) fn child_for(&self, key: u64) -> NodeHandle {
        if key & self.mask == 0 {
            self.left
        } else {
            self.right
        }
    }
}

/// A key-value pair resting at the bottom of the tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct LeafNode<V> {
    pub(crate) key: u64,
    pub(crate) value: V,
    pub(crate) parent: NodeHandle,
}

impl<V> LeafNode<V> {
    /// Creates a new leaf node.
    pub(crate) fn new(key: u64, value: V, parent: NodeHandle) -> Self {
        Self { key, value, parent }
    }

    /// Gets the key.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Gets the associated value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Gets the parent handle. Null iff this leaf is the sole node of the
    /// tree.
    pub fn parent(&self) -> NodeHandle {
        self.parent
    }
}

/// The mask of the highest-order bit in which two distinct keys differ.
pub(crate) fn critical_bit_mask(a: u64, b: u64) -> u64 {
    let xor = a ^ b;
    precondition!(xor != 0);
    1u64 << (63 - xor.leading_zeros())
}
