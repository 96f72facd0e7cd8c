use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly random permutation of `items`, leaving the input untouched.
///
/// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every ordering is
/// equally likely given a uniform `rng`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
