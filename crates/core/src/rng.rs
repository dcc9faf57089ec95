//! Piece sources
//!
//! The game draws each new piece uniformly at random from the seven kinds.
//! There is no bag or history, so repeats can happen back to back.
//! Tests and replays inject a seeded generator or a fixed sequence instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Tetromino;
use crate::types::PieceKind;

/// Anything that can hand out the next piece kind
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece kinds backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPieces<R = StdRng> {
    rng: R,
}

impl RandomPieces<StdRng> {
    /// Unseeded generator for normal play
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPieces<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceSource for RandomPieces<R> {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl FixedSequence {
    /// An empty list behaves like a list holding only `PieceKind::O`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, index: 0 }
    }

    /// The same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

/// Draw a fresh, unpositioned piece
pub fn random_tetromino<S: PieceSource + ?Sized>(source: &mut S) -> Tetromino {
    Tetromino::new(source.next_kind())
}
