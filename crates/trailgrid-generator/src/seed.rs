//! Seed derivation from a calendar date.

use std::fmt::{self, Display};

use chrono::{Datelike as _, NaiveDate};
use trailgrid_core::GridSize;

/// Seed spacing between grid sizes, scaled by the size's center offset.
pub const SIZE_SEED_STRIDE: u64 = 1000;

/// The generator seed for one `(date, size)` puzzle.
///
/// The seed is derived from the unpadded `"{year}-{month}-{day}"` key: a
/// 31-multiplier rolling hash over its UTF-16 code units in wrapping signed
/// 32-bit arithmetic, made non-negative, plus `center_offset * 1000` so the
/// two sizes of the same day never share a stream.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trailgrid_core::GridSize;
/// use trailgrid_generator::DailySeed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let seed = DailySeed::new(date, GridSize::Small);
/// assert_eq!(seed.date_key(), "2024-3-7");
/// assert_eq!(seed.base_seed(), 1_922_421_040);
/// assert_eq!(seed.value(), 1_922_423_040);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailySeed {
    date: NaiveDate,
    size: GridSize,
    base_seed: u32,
}

impl DailySeed {
    /// Derives the seed for `date` and `size`.
    #[must_use]
    pub fn new(date: NaiveDate, size: GridSize) -> Self {
        let base_seed = rolling_hash(&date_key(date)).unsigned_abs();
        Self {
            date,
            size,
            base_seed,
        }
    }

    /// Returns the calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the unpadded date key the hash is computed over.
    #[must_use]
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// Returns the absolute value of the date hash, shared by both sizes.
    #[must_use]
    pub fn base_seed(&self) -> u32 {
        self.base_seed
    }

    /// Returns the final seed for this size.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.base_seed) + u64::from(self.size.center_offset()) * SIZE_SEED_STRIDE
    }
}

impl Display for DailySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Formats `date` as `"{year}-{month}-{day}"` without zero padding.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// `hash = hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
#[must_use]
pub fn rolling_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_unpadded() {
        assert_eq!(date_key(date(2024, 3, 7)), "2024-3-7");
        assert_eq!(date_key(date(2024, 12, 25)), "2024-12-25");
        assert_eq!(date_key(date(999, 1, 1)), "999-1-1");
    }

    #[test]
    fn rolling_hash_matches_known_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
        assert_eq!(rolling_hash("2024-3-7"), -1_922_421_040);
        assert_eq!(rolling_hash("2024-12-25"), -612_388_254);
    }

    #[test]
    fn rolling_hash_wraps() {
        // long input overflows 32 bits many times over
        let long = "2024-12-25".repeat(8);
        assert_eq!(rolling_hash(&long), -1_450_013_424);
    }

    #[test]
    fn sizes_differ_by_scaled_stride() {
        let d = date(2025, 1, 1);
        let small = DailySeed::new(d, GridSize::Small);
        let large = DailySeed::new(d, GridSize::Large);
        assert_eq!(small.base_seed(), large.base_seed());
        assert_eq!(large.value() - small.value(), SIZE_SEED_STRIDE);
        assert_eq!(small.value(), 1_921_499_447 + 2000);
        assert_eq!(large.value(), 1_921_499_447 + 3000);
    }
}
