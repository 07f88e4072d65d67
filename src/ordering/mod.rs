pub mod prng;

pub use prng::SeededRng;

/// Deterministic Fisher-Yates permutation of `items` driven by `seed`.
///
/// Walks from the last index down to 1, swapping each slot with
/// `floor(rand * (i + 1))`. The input is never mutated; the result is a copy.
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = SeededRng::from_seed(seed);
    let mut out = items.to_vec();

    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }

    debug_assert_eq!(out.len(), items.len());
    out
}
