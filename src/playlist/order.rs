//! Play order over playlist positions.
//!
//! The playlist itself is never reordered. `PlayOrder` keeps a permutation
//! of its indices plus the inverse map, and answers "what comes after / before
//! this track" for either the natural or the shuffled order.

use rand::Rng;

#[derive(Debug, Clone)]
pub struct PlayOrder {
    shuffle: bool,
    /// `permutation[pos]` is the track played at position `pos`.
    permutation: Vec<usize>,
    /// `position[track]` is where `track` sits in `permutation`.
    position: Vec<usize>,
}

impl PlayOrder {
    /// Natural order over `len` tracks, shuffle off.
    pub fn new(len: usize) -> Self {
        Self {
            shuffle: false,
            permutation: (0..len).collect(),
            position: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    #[cfg(test)]
    pub(crate) fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Flip shuffle using the thread-local RNG. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.toggle_with(&mut rand::thread_rng())
    }

    /// Flip shuffle; turning it on reshuffles the permutation with `rng`.
    pub fn toggle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.shuffle = !self.shuffle;
        if self.shuffle {
            fisher_yates(&mut self.permutation, rng);
            self.rebuild_positions();
        }
        self.shuffle
    }

    /// The track played after `current`, wrapping at the end.
    pub fn next_after(&self, current: usize) -> usize {
        let len = self.len();
        if len <= 1 {
            return current;
        }
        if !self.shuffle {
            return (current + 1) % len;
        }
        let pos = self.position[current];
        self.permutation[(pos + 1) % len]
    }

    /// The track played before `current`, wrapping at the start.
    pub fn prev_before(&self, current: usize) -> usize {
        let len = self.len();
        if len <= 1 {
            return current;
        }
        if !self.shuffle {
            return (current + len - 1) % len;
        }
        let pos = self.position[current];
        self.permutation[(pos + len - 1) % len]
    }

    /// First track of the active order.
    pub fn first(&self) -> usize {
        if self.shuffle { self.permutation[0] } else { 0 }
    }

    /// Last track of the active order.
    pub fn last(&self) -> usize {
        let len = self.len();
        if self.shuffle {
            self.permutation[len - 1]
        } else {
            len - 1
        }
    }

    fn rebuild_positions(&mut self) {
        for (pos, &track) in self.permutation.iter().enumerate() {
            self.position[track] = pos;
        }
    }
}

/// In-place Fisher–Yates: walk `i` from the end down to 1 and swap it with a
/// uniformly drawn `j` in `[0, i]`.
pub(crate) fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
