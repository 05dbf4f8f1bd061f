//! Dice service seam
//!
//! The engine never owns randomness; resolution receives a dice service
//! from the caller. `SeededDice` gives replayable games and tests.

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Simple sum-of-dice roller
pub trait Dice {
    fn roll(&mut self, n_dice: u32, n_sides: u32) -> u32;

    fn d6(&mut self) -> u32 {
        self.roll(1, 6)
    }

    fn two_d6(&mut self) -> u32 {
        self.roll(2, 6)
    }
}

/// Deterministic roller seeded per game or per test
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn roll(&mut self, n_dice: u32, n_sides: u32) -> u32 {
        (0..n_dice).map(|_| self.rng.gen_range(1..=n_sides)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut dice = SeededDice::new(7);
        for _ in 0..200 {
            let roll = dice.two_d6();
            assert!((2..=12).contains(&roll));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededDice::new(42);
        let mut b = SeededDice::new(42);
        let first: Vec<u32> = (0..20).map(|_| a.two_d6()).collect();
        let second: Vec<u32> = (0..20).map(|_| b.two_d6()).collect();
        assert_eq!(first, second);
    }
}
