// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0


use std::collections::BTreeSet;

use rand::{rngs::StdRng, seq::SliceRandom, Rng};

/// Draws `count` distinct random keys in shuffled order.
pub(crate) fn distinct_keys(rng: &mut StdRng, count: usize) -> Vec<u64> {
    let mut keys = BTreeSet::new();
    while keys.len() < count {
        keys.insert(rng.gen::<u64>());
    }
    let mut keys: Vec<u64> = keys.into_iter().collect();
    keys.shuffle(rng);
    keys
}
