//! In-place Fisher–Yates shuffling.

use rand::Rng;

/// Shuffle `items` in place, walking from the back and swapping each slot
/// with a uniformly drawn index in `0..=i`.
///
/// Every permutation is equally likely under a uniform `rng`. Empty and
/// single-element slices are left untouched and draw nothing from `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Method-call form of [`shuffle`] for slices, `Vec`s and arrays.
pub trait ShuffleExt {
    /// Shuffle in place with the given source.
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Shuffle in place with the calling thread's generator.
    fn shuffle_in_place(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }
}

impl<T> ShuffleExt for [T] {
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(self, rng);
    }
}
