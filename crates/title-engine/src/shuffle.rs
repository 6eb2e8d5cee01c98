//! Selection of engaging title prefixes.
//!
//! Which prefixes decorate the main phrase is random by design. The
//! `PrefixShuffler` trait makes that choice injectable so callers and
//! tests can pin it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Trait for choosing `count` distinct prefixes out of `prefixes`.
pub trait PrefixShuffler: Send + Sync {
    /// Return at most `count` entries of `prefixes`, without repeats.
    fn pick(&self, prefixes: &[&'static str], count: usize) -> Vec<&'static str>;
}

/// Fresh random pick on every call, using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShuffler;

impl PrefixShuffler for RandomShuffler {
    fn pick(&self, prefixes: &[&'static str], count: usize) -> Vec<&'static str> {
        let mut shuffled = prefixes.to_vec();
        shuffled.shuffle(&mut rand::rng());
        shuffled.truncate(count);
        shuffled
    }
}

/// Deterministic pick: every call reseeds from the same seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededShuffler {
    seed: u64,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PrefixShuffler for SeededShuffler {
    fn pick(&self, prefixes: &[&'static str], count: usize) -> Vec<&'static str> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut shuffled = prefixes.to_vec();
        shuffled.shuffle(&mut rng);
        shuffled.truncate(count);
        shuffled
    }
}

/// No shuffling; the first `count` prefixes in list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrderShuffler;

impl PrefixShuffler for FixedOrderShuffler {
    fn pick(&self, prefixes: &[&'static str], count: usize) -> Vec<&'static str> {
        prefixes.iter().take(count).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::ENGAGING_PREFIXES;

    fn assert_distinct_members(picked: &[&'static str]) {
        for (i, prefix) in picked.iter().enumerate() {
            assert!(ENGAGING_PREFIXES.contains(prefix));
            assert!(!picked[..i].contains(prefix));
        }
    }

    #[test]
    fn test_random_picks_distinct() {
        let picked = RandomShuffler.pick(ENGAGING_PREFIXES, 3);
        assert_eq!(picked.len(), 3);
        assert_distinct_members(&picked);
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let shuffler = SeededShuffler::new(7);
        let first = shuffler.pick(ENGAGING_PREFIXES, 3);
        let second = shuffler.pick(ENGAGING_PREFIXES, 3);
        assert_eq!(first, second);
        assert_distinct_members(&first);
    }

    #[test]
    fn test_fixed_order() {
        let picked = FixedOrderShuffler.pick(ENGAGING_PREFIXES, 3);
        assert_eq!(
            picked,
            vec!["The Ultimate Guide to", "How to Master", "Quick Tips for"]
        );
    }

    #[test]
    fn test_count_larger_than_list() {
        assert_eq!(SeededShuffler::new(1).pick(ENGAGING_PREFIXES, 20).len(), 9);
        assert_eq!(FixedOrderShuffler.pick(&["a", "b"], 5), vec!["a", "b"]);
        assert!(RandomShuffler.pick(&[], 3).is_empty());
    }
}
