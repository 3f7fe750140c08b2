//! # Unit Types
//!
//! Type-safe wrappers for the few units a print job is measured in. These
//! provide compile-time safety against mixing up seconds and hours (the input
//! schema carries both) while remaining lightweight (just f64 wrappers).
//!
//! The cost graph needs three conversions: preheat seconds to hours, machine
//! lifespan years to hours, and a per-kilogram material price applied to a
//! mass in grams.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Grams, Hours, Seconds, Years};
//!
//! let preheat: Hours = Seconds(1800.0).into();
//! assert_eq!(preheat.value(), 0.5);
//!
//! let lifespan: Hours = Years(2.0).into();
//! assert_eq!(lifespan.value(), 17532.0);
//!
//! assert!((Grams(500.0).cost_at(30.0) - 15.0).abs() < 1e-9);
//! ```

/// Hours in a year, averaged over leap years (365.25 * 24)
pub const HOURS_PER_YEAR: f64 = 8766.0;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Grams in a kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Hours(pub f64);

/// Duration in years
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Years(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Grams(pub f64);

impl From<Seconds> for Hours {
    fn from(s: Seconds) -> Self {
        Hours(s.0 / SECONDS_PER_HOUR)
    }
}

impl From<Years> for Hours {
    fn from(y: Years) -> Self {
        Hours(HOURS_PER_YEAR * y.0)
    }
}

impl Hours {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Grams {
    /// Cost of this mass at a per-kilogram price.
    ///
    /// The price is scaled down to a per-gram price first, then multiplied
    /// by the mass.
    pub fn cost_at(self, price_per_kg: f64) -> f64 {
        (price_per_kg / GRAMS_PER_KILOGRAM) * self.0
    }
}
