/*!
# Seeded Random-Number Pool

Randomized experiments often run one search worker per thread while still
demanding reproducible results. [`RngPool`] derives one PCG generator per
*slot* from a single master seed, so every worker draws from its own
deterministic stream without any synchronization between slots.

The pool takes `&mut self` for every draw: hand out one slot id per worker
and split the pool (or wrap it externally) before sharing it across threads.
Re-running with the same master seed reproduces every per-slot sequence.
*/

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64;

/// A pool of independently seeded random-number generators, one per slot.
///
/// All sampling methods are bounds-checked on the slot id.
#[derive(Debug, Clone)]
pub struct RngPool {
    slots: Vec<Pcg64>,
    master_seed: u64,
}

impl RngPool {
    /// Creates a pool of `num_slots` generators seeded from OS entropy.
    ///
    /// Not suitable for reproducible experiments; use [`RngPool::with_seed`]
    /// for those.
    pub fn new(num_slots: usize) -> Self {
        Self::with_seed(num_slots, rand::rng().random())
    }

    /// Creates a pool of `num_slots` generators derived from `master_seed`.
    ///
    /// A seeding generator expands the master seed into one sub-seed per
    /// slot, so the same master seed reproduces identical per-slot sequences
    /// across runs.
    pub fn with_seed(num_slots: usize, master_seed: u64) -> Self {
        let mut seeder = Pcg64::seed_from_u64(master_seed);
        let slots = (0..num_slots)
            .map(|_| Pcg64::seed_from_u64(seeder.random()))
            .collect();

        Self { slots, master_seed }
    }

    /// Re-derives every slot generator from a new master seed without
    /// changing the number of slots.
    pub fn reseed(&mut self, master_seed: u64) {
        self.master_seed = master_seed;

        let mut seeder = Pcg64::seed_from_u64(master_seed);
        for slot in &mut self.slots {
            *slot = Pcg64::seed_from_u64(seeder.random());
        }
    }

    /// Returns the number of slots in the pool
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the master seed the pool was last seeded with
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Returns a uniform integer in the closed interval `[min, max]`.
    /// ** Panics if `slot >= num_slots` or `min > max` **
    pub fn uniform_int(&mut self, slot: usize, min: i64, max: i64) -> i64 {
        self.slots[slot].random_range(min..=max)
    }

    /// Returns a uniform real in the half-open interval `[min, max)`.
    /// ** Panics if `slot >= num_slots` or the interval is empty **
    pub fn uniform_real(&mut self, slot: usize, min: f64, max: f64) -> f64 {
        self.slots[slot].random_range(min..max)
    }

    /// Returns a sample of the normal distribution `N(mean, stddev^2)`.
    /// ** Panics if `slot >= num_slots` or `stddev` is negative or not finite **
    pub fn normal(&mut self, slot: usize, mean: f64, stddev: f64) -> f64 {
        assert!(
            stddev.is_finite() && stddev >= 0.0,
            "standard deviation must be finite and non-negative"
        );
        Normal::new(mean, stddev).unwrap().sample(&mut self.slots[slot])
    }

    /// Returns *true* with probability `p`.
    /// ** Panics if `slot >= num_slots` or `p` is not in `[0, 1]` **
    pub fn bernoulli(&mut self, slot: usize, p: f64) -> bool {
        self.slots[slot].random_bool(p)
    }

    /// Shuffles `items` in place.
    /// ** Panics if `slot >= num_slots` **
    pub fn shuffle<T>(&mut self, slot: usize, items: &mut [T]) {
        items.shuffle(&mut self.slots[slot]);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn same_master_seed_reproduces_all_slots() {
        let mut a = RngPool::with_seed(4, 1234);
        let mut b = RngPool::with_seed(4, 1234);

        for slot in 0..4 {
            let xs = (0..32).map(|_| a.uniform_int(slot, 0, 1000)).collect_vec();
            let ys = (0..32).map(|_| b.uniform_int(slot, 0, 1000)).collect_vec();
            assert_eq!(xs, ys);
        }
    }

    #[test]
    fn slots_produce_independent_streams() {
        let mut pool = RngPool::with_seed(2, 99);

        let xs = (0..32).map(|_| pool.uniform_int(0, 0, 1_000_000)).collect_vec();
        let ys = (0..32).map(|_| pool.uniform_int(1, 0, 1_000_000)).collect_vec();
        assert_ne!(xs, ys);
    }

    #[test]
    fn reseed_restarts_the_sequences() {
        let mut pool = RngPool::with_seed(2, 7);
        let first = (0..16).map(|_| pool.uniform_int(1, 0, 1000)).collect_vec();

        pool.reseed(7);
        let again = (0..16).map(|_| pool.uniform_int(1, 0, 1000)).collect_vec();
        assert_eq!(first, again);

        pool.reseed(8);
        assert_eq!(pool.master_seed(), 8);
        let other = (0..16).map(|_| pool.uniform_int(1, 0, 1000)).collect_vec();
        assert_ne!(first, other);
    }

    #[test]
    fn uniform_int_is_inclusive_on_both_ends() {
        let mut pool = RngPool::with_seed(1, 42);

        assert_eq!(pool.uniform_int(0, 5, 5), 5);

        let mut seen = [false; 2];
        for _ in 0..256 {
            seen[pool.uniform_int(0, 0, 1) as usize] = true;
        }
        assert!(seen[0] && seen[1]);

        for _ in 0..256 {
            let x = pool.uniform_int(0, -3, 3);
            assert!((-3..=3).contains(&x));
        }
    }

    #[test]
    fn uniform_real_is_half_open() {
        let mut pool = RngPool::with_seed(1, 42);

        for _ in 0..256 {
            let x = pool.uniform_real(0, 2.0, 3.0);
            assert!((2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn normal_with_zero_stddev_is_the_mean() {
        let mut pool = RngPool::with_seed(1, 42);
        assert_eq!(pool.normal(0, 1.5, 0.0), 1.5);
    }

    #[test]
    fn bernoulli_respects_degenerate_probabilities() {
        let mut pool = RngPool::with_seed(1, 42);

        assert!((0..64).all(|_| !pool.bernoulli(0, 0.0)));
        assert!((0..64).all(|_| pool.bernoulli(0, 1.0)));
    }

    #[test]
    fn shuffle_permutes_in_place() {
        let mut pool = RngPool::with_seed(1, 1);

        let mut items = (0..100).collect_vec();
        pool.shuffle(0, &mut items);

        assert_eq!(items.iter().copied().sorted().collect_vec(), (0..100).collect_vec());
    }

    #[test]
    fn accessors() {
        let pool = RngPool::with_seed(3, 77);
        assert_eq!(pool.num_slots(), 3);
        assert_eq!(pool.master_seed(), 77);

        let random = RngPool::new(2);
        assert_eq!(random.num_slots(), 2);
    }

    #[test]
    #[should_panic]
    fn invalid_slot_id_panics() {
        let mut pool = RngPool::with_seed(2, 5);
        pool.uniform_int(2, 0, 10);
    }
}
