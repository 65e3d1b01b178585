//! Shape factories
//!
//! A factory hands the engine fresh shapes at the spawn origin in rotation
//! zero. It never sees the game state. Each created shape gets a new
//! [`ShapeId`], starting at 1.

use crate::rng::SimpleRng;
use crate::shape::{Shape, ShapeId};
use crate::types::ShapeKind;

/// Source of new shapes for the engine.
pub trait ShapeFactory {
    fn create(&mut self) -> Shape;
}

/// Monotonic id source shared by the factories below.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IdSequence(u64);

impl IdSequence {
    fn new() -> Self {
        Self(ShapeId::STATIC.0)
    }

    fn next(&mut self) -> ShapeId {
        self.0 += 1;
        ShapeId(self.0)
    }
}

/// Uniformly random kinds from a seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct RandomShapeFactory {
    rng: SimpleRng,
    ids: IdSequence,
}

impl RandomShapeFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            ids: IdSequence::new(),
        }
    }
}

impl Default for RandomShapeFactory {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeFactory for RandomShapeFactory {
    fn create(&mut self) -> Shape {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        Shape::spawn(self.ids.next(), ShapeKind::ALL[idx])
    }
}

/// Cycles through a fixed list of kinds. Handy for scripted games.
#[derive(Debug, Clone)]
pub struct SequenceShapeFactory {
    kinds: Vec<ShapeKind>,
    cursor: usize,
    ids: IdSequence,
}

impl SequenceShapeFactory {
    /// Panics on an empty list.
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "sequence factory needs at least one kind");
        Self {
            kinds,
            cursor: 0,
            ids: IdSequence::new(),
        }
    }

    /// Always the same kind.
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeFactory for SequenceShapeFactory {
    fn create(&mut self) -> Shape {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        Shape::spawn(self.ids.next(), kind)
    }
}

impl<F: ShapeFactory + ?Sized> ShapeFactory for Box<F> {
    fn create(&mut self) -> Shape {
        (**self).create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, SPAWN_ORIGIN};

    #[test]
    fn test_random_factory_spawn_contract() {
        let mut factory = RandomShapeFactory::new(42);
        for _ in 0..50 {
            let shape = factory.create();
            assert_eq!(shape.rotation(), Rotation::North);
            assert_eq!(shape.origin(), SPAWN_ORIGIN);
        }
    }

    #[test]
    fn test_ids_are_monotonic_and_not_static() {
        let mut factory = RandomShapeFactory::new(42);
        let mut last = ShapeId::STATIC;
        for _ in 0..20 {
            let id = factory.create().id();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_random_factory_is_deterministic() {
        let mut a = RandomShapeFactory::new(99);
        let mut b = RandomShapeFactory::new(99);
        for _ in 0..100 {
            assert_eq!(a.create().kind(), b.create().kind());
        }
    }

    #[test]
    fn test_random_factory_distribution_is_roughly_uniform() {
        let mut factory = RandomShapeFactory::new(2024);
        let mut counts = [0u32; 7];
        let draws = 7_000;
        for _ in 0..draws {
            counts[factory.create().kind().index()] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (700..1300).contains(&count),
                "kind {:?} drawn {} times",
                ShapeKind::ALL[i],
                count
            );
        }
    }

    #[test]
    fn test_sequence_factory_cycles() {
        let mut factory = SequenceShapeFactory::new(vec![ShapeKind::I, ShapeKind::O]);
        let kinds: Vec<ShapeKind> = (0..5).map(|_| factory.create().kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::I,
                ShapeKind::O,
                ShapeKind::I,
                ShapeKind::O,
                ShapeKind::I
            ]
        );
    }
}
