//! Deterministic daily puzzle generation.
//!
//! A puzzle is fully determined by its calendar date and [`GridSize`]: the date
//! is hashed into a [`DailySeed`], which starts a fresh [`Lcg`] that draws one
//! value in `1..=5` per cell in row-major order. The same pair always yields
//! the same grid.
//!
//! [`GridSize`]: trailgrid_core::GridSize
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use trailgrid_core::GridSize;
//! use trailgrid_generator::generate_puzzle;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let a = generate_puzzle(date, GridSize::Large);
//! let b = generate_puzzle(date, GridSize::Large);
//! assert_eq!(a.grid, b.grid);
//! assert_eq!(a.start, GridSize::Large.start());
//! ```

mod date;
mod generator;
mod lcg;
mod seed;

pub use self::{
    date::{DateParseError, parse_date},
    generator::{GeneratedPuzzle, PuzzleGenerator, generate_puzzle},
    lcg::Lcg,
    seed::{DailySeed, SIZE_SEED_STRIDE, date_key, rolling_hash},
};
