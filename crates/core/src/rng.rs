//! RNG module - piece selection
//!
//! The engine never picks pieces itself; it asks an injected [`Randomizer`].
//! Three are provided:
//!
//! - [`UniformRandomizer`]: every kind with equal probability on each draw
//! - [`BagRandomizer`]: the "7-bag" shuffle, each kind once per seven draws
//! - [`ScriptedRandomizer`]: a fixed, repeating sequence for tests and demos
//!
//! Seeded constructors use `StdRng` so a seed reproduces the same sequence.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, PIECE_KINDS};

/// Source of the next piece kind
pub trait Randomizer: Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform draw over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformRandomizer<R = StdRng> {
    rng: R,
}

impl<R: Rng> UniformRandomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformRandomizer<StdRng> {
    /// Reproducible sequence from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Debug> Randomizer for UniformRandomizer<R> {
    fn next_kind(&mut self) -> PieceKind {
        PIECE_KINDS[self.rng.gen_range(0..PIECE_KINDS.len())]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer<R = StdRng> {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    rng: R,
}

impl<R: Rng> BagRandomizer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            bag: PIECE_KINDS,
            // Forces a shuffle on the first draw.
            bag_index: PIECE_KINDS.len(),
            rng,
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PIECE_KINDS;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }
}

impl BagRandomizer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Debug> Randomizer for BagRandomizer<R> {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedRandomizer {
    /// An empty list falls back to repeating `O`.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, next: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl Randomizer for ScriptedRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(r: &mut dyn Randomizer, n: usize) -> Vec<PieceKind> {
        (0..n).map(|_| r.next_kind()).collect()
    }

    #[test]
    fn test_uniform_deterministic() {
        let mut a = UniformRandomizer::seeded(12345);
        let mut b = UniformRandomizer::seeded(12345);
        assert_eq!(draw(&mut a, 100), draw(&mut b, 100));
    }

    #[test]
    fn test_uniform_covers_all_kinds() {
        let mut r = UniformRandomizer::seeded(7);
        let drawn = draw(&mut r, 500);
        for kind in PIECE_KINDS {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut r = BagRandomizer::seeded(1);
        for _ in 0..3 {
            let mut drawn = draw(&mut r, 7);
            drawn.sort_by_key(|k| k.as_str());
            let mut expected = PIECE_KINDS.to_vec();
            expected.sort_by_key(|k| k.as_str());
            assert_eq!(drawn, expected);
        }
    }

    #[test]
    fn test_bag_seeded_deterministic() {
        let mut a = BagRandomizer::seeded(9);
        let mut b = BagRandomizer::seeded(9);
        assert_eq!(draw(&mut a, 21), draw(&mut b, 21));
    }

    #[test]
    fn test_scripted_cycles() {
        let mut r = ScriptedRandomizer::new([PieceKind::I, PieceKind::T]);
        assert_eq!(
            draw(&mut r, 5),
            vec![
                PieceKind::I,
                PieceKind::T,
                PieceKind::I,
                PieceKind::T,
                PieceKind::I
            ]
        );
    }

    #[test]
    fn test_scripted_empty_falls_back() {
        let mut r = ScriptedRandomizer::new(Vec::<PieceKind>::new());
        assert_eq!(r.next_kind(), PieceKind::O);
    }
}
