/// Mulberry32: a 32-bit state generator with an additive Weyl step and an
/// integer mixing finalizer. Fully determined by its seed, so streams are
/// identical across runs and platforms.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

const WEYL_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds wider than 32 bits keep their low 32 bits.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL_INCREMENT);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be non-zero");
        let index = (self.next_f64() * bound as f64).floor() as usize;
        index.min(bound - 1)
    }
}
