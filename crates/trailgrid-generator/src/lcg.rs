//! Reproducible linear congruential generator.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7FFF_FFFF;

/// A 31-bit linear congruential generator.
///
/// Each step computes `state = (state * 1103515245 + 12345) & 0x7FFFFFFF` in
/// exact integer arithmetic, so the stream is identical on every platform.
///
/// # Examples
///
/// ```
/// use trailgrid_generator::Lcg;
///
/// let mut a = Lcg::new(42);
/// let mut b = Lcg::new(42);
/// for _ in 0..10 {
///     let value = a.next_int(1, 5);
///     assert!((1..=5).contains(&value));
///     assert_eq!(value, b.next_int(1, 5));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator whose state starts at `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the current raw state.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state and returns it.
    pub fn next_raw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        // masked to 31 bits
        #[expect(clippy::cast_possible_truncation)]
        let raw = self.state as u32;
        raw
    }

    /// Advances the state and returns it scaled to `[0, 1]`.
    #[expect(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / MODULUS_MASK as f64
    }

    /// Returns an integer in `min..=max`.
    ///
    /// Computed as `floor(next_f64() * (max - min + 1)) + min`. The single state
    /// that maps to exactly `1.0` is clamped to `max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn next_int(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "empty range {min}..={max}");
        let span = f64::from(max - min) + 1.0;
        let offset = (self.next_f64() * span).floor() as u32;
        min.saturating_add(offset).min(max)
    }
}
