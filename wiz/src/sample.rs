//! Random selection from sequences.
//!
//! The plain functions draw from the thread local generator of `rand`,
//! which the library never seeds. To get reproducible output, pass a
//! generator to the `_with` variants or use a seeded [`Sampler`].

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// One element chosen uniformly at random, or `T::default()` when empty.
pub fn sample<T: Default + Clone>(seq: &[T]) -> T {
    sample_with(seq, &mut rand::thread_rng())
}

/// Like [`sample`], drawing from `rng`.
pub fn sample_with<T, R>(seq: &[T], rng: &mut R) -> T
where
    T: Default + Clone,
    R: Rng + ?Sized,
{
    if seq.is_empty() {
        return T::default();
    }
    seq[rng.gen_range(0..seq.len())].clone()
}

/// `n` elements chosen uniformly at random without replacement.
///
/// Every element of the input is picked at most once. If `n` is at least
/// the length of the input, all elements come back in random order. The
/// caller's collection type is preserved.
pub fn samples<C>(collection: C, n: usize) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
{
    samples_with(collection, n, &mut rand::thread_rng())
}

/// Like [`samples`], drawing from `rng`.
pub fn samples_with<C, R>(collection: C, n: usize, rng: &mut R) -> C
where
    C: IntoIterator + FromIterator<C::Item>,
    R: Rng + ?Sized,
{
    let mut items = collection.into_iter().collect::<Vec<_>>();
    let n = n.min(items.len());
    // partial Fisher-Yates: after step i the prefix [0, i] is a uniform
    // draw without replacement
    for i in 0..n {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }
    items.truncate(n);
    items.into_iter().collect()
}

/// An owned, seedable source of randomness for sampling.
///
/// Two samplers created with the same seed make the same choices for the
/// same sequence of calls.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: Xoshiro256PlusPlus,
}

impl Sampler {
    /// A sampler seeded from the thread local generator.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// A sampler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// A sampler seeded from another generator.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::seeded(rng.gen())
    }

    pub fn sample<T: Default + Clone>(&mut self, seq: &[T]) -> T {
        sample_with(seq, &mut self.rng)
    }

    pub fn samples<C>(&mut self, collection: C, n: usize) -> C
    where
        C: IntoIterator + FromIterator<C::Item>,
    {
        samples_with(collection, n, &mut self.rng)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
