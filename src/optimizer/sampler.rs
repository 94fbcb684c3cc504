use fastrand::Rng;

/// Mean of the underlying exponential distribution.
pub const SAMPLE_MEAN: f64 = 0.2;

/// Draws above this are discarded, not clamped.
pub const SAMPLE_CAP: f64 = 1.0;

/// Raw draws per refill. One RNG call each.
const BATCH_SIZE: usize = 10_000;

/// Endless stream of values in [0, 1] with density falling off like an
/// exponential of mean 0.2, truncated at 1.0.
///
/// Instances are independent; two samplers with the same seed yield the
/// same stream.
pub struct FrequencySampler {
    rng: Rng,
    buffer: Vec<f64>,
    cursor: usize,
}

impl FrequencySampler {
    pub fn new() -> Self {
        Self::from_rng(Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Rng::with_seed(seed))
    }

    pub fn from_rng(rng: Rng) -> Self {
        Self {
            rng,
            buffer: Vec::with_capacity(BATCH_SIZE),
            cursor: 0,
        }
    }

    fn refill(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        while self.buffer.is_empty() {
            for _ in 0..BATCH_SIZE {
                // Inverse CDF; 1 - u lies in (0, 1] so ln is finite
                let value = -SAMPLE_MEAN * (1.0 - self.rng.f64()).ln();
                if value <= SAMPLE_CAP {
                    self.buffer.push(value);
                }
            }
        }
    }
}

impl Default for FrequencySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrequencySampler {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.cursor >= self.buffer.len() {
            self.refill();
        }
        let value = self.buffer[self.cursor];
        self.cursor += 1;
        Some(value)
    }
}
