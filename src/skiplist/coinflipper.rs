use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

pub trait CoinFlipper: Send {
    fn flip(&mut self) -> bool;
}

pub struct CoinFlipperRand {}

impl CoinFlipper for CoinFlipperRand {
    fn flip(&mut self) -> bool {
        thread_rng().gen_bool(0.5)
    }
}

/// Same seed, same sequence of flips, same towers.
pub struct CoinFlipperSeeded {
    rng: StdRng,
}

impl CoinFlipperSeeded {
    pub fn new(seed: u64) -> CoinFlipperSeeded {
        CoinFlipperSeeded {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CoinFlipper for CoinFlipperSeeded {
    fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

// 1 + number of successes before the first failure, so P(h) = 2^-h
pub fn random_height(flipper: &mut dyn CoinFlipper) -> usize {
    let mut height = 1;
    while flipper.flip() {
        height += 1;
    }
    height
}

#[cfg(test)]
mod tests {
    use crate::skiplist::coinflipper::{random_height, CoinFlipper, CoinFlipperSeeded};

    struct Scripted(Vec<bool>);

    impl CoinFlipper for Scripted {
        fn flip(&mut self) -> bool {
            if self.0.is_empty() { false } else { self.0.remove(0) }
        }
    }

    #[test]
    fn height_counts_successes() {
        assert_eq!(random_height(&mut Scripted(vec![])), 1);
        assert_eq!(random_height(&mut Scripted(vec![true, true, false, true])), 3);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut first = CoinFlipperSeeded::new(9989);
        let mut second = CoinFlipperSeeded::new(9989);
        let a: Vec<usize> = (0..64).map(|_| random_height(&mut first)).collect();
        let b: Vec<usize> = (0..64).map(|_| random_height(&mut second)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn heights_are_roughly_geometric() {
        let mut flipper = CoinFlipperSeeded::new(42);
        let heights: Vec<usize> = (0..10_000).map(|_| random_height(&mut flipper)).collect();
        let count = |height: usize| heights.iter().filter(|h| **h == height).count();
        // expected 5000, 2500 and 1250
        assert!(count(1) > 4700 && count(1) < 5300, "ones = {}", count(1));
        assert!(count(2) > 2250 && count(2) < 2750, "twos = {}", count(2));
        assert!(count(3) > 1050 && count(3) < 1450, "threes = {}", count(3));
        assert!(heights.iter().all(|h| *h >= 1));
    }
}
