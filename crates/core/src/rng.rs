//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm.
//! Each bag contains one of each piece (I, O, T, J, L, S, Z), shuffled.
//! Draws consume the bag from the front until empty, then a new bag is shuffled.
//!
//! Shuffling uses `rand`'s Fisher-Yates (`SliceRandom::shuffle`) over a seeded
//! `StdRng`, so every one of the 5040 orders is equally likely and a given seed
//! always replays the same sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::pieces::shape_of;
use crate::shape::Shape;
use crate::types::PieceKind;

/// Number of pieces in one bag
pub const BAG_SIZE: usize = 7;

/// Return a uniformly random permutation of all seven kinds
pub fn new_bag<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; BAG_SIZE] {
    let mut bag = PieceKind::ALL;
    bag.shuffle(rng);
    bag
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Current bag of pieces
    pieces: [PieceKind; BAG_SIZE],
    /// Index of the next piece to hand out; `BAG_SIZE` means empty
    index: usize,
    /// RNG for shuffling
    rng: StdRng,
}

impl Bag {
    /// Create a bag generator with the given seed and a freshly shuffled first bag
    pub fn new(seed: u64) -> Self {
        let mut bag = Self {
            pieces: PieceKind::ALL,
            index: BAG_SIZE,
            rng: StdRng::seed_from_u64(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.pieces = new_bag(&mut self.rng);
        self.index = 0;
    }

    /// Draw the next piece, refilling first if the bag is exhausted
    pub fn next(&mut self) -> (Shape, PieceKind) {
        if self.is_empty() {
            self.refill();
        }

        let kind = self.pieces[self.index];
        self.index += 1;
        (shape_of(kind), kind)
    }

    /// Peek at the next piece of the current bag without consuming it
    ///
    /// Returns `None` once the current bag is exhausted; the next bag is only
    /// shuffled by [`Bag::next`].
    pub fn peek(&self) -> Option<PieceKind> {
        self.pieces.get(self.index).copied()
    }

    /// Unconsumed tail of the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.pieces[self.index..]
    }

    pub fn is_empty(&self) -> bool {
        self.index >= BAG_SIZE
    }

    /// Draw a seed for a follow-up bag generator (used on replay)
    pub fn fork_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
