//! Unit newtypes for the quantities the network model exposes.
//!
//! The model stores "not computed for this state" as NaN rather than as an
//! explicit absence. The newtypes keep that sentinel untouched: they only
//! guard against mixing a megawatt figure with a megavar figure when a view
//! record is filled in. Stripping the sentinel is the job of the view layer.
//!
//! ```
//! use gridscope_core::units::{Megawatts, Kilovolts};
//!
//! let p = Megawatts(12.5);
//! assert_eq!((p + Megawatts(2.5)).value(), 15.0);
//!
//! let v = Kilovolts::nan();
//! assert!(v.is_nan());
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if self.0.is_nan() {
                    write!(f, "n/a {}", $unit_name)
                } else {
                    write!(f, "{:.4} {}", self.0, $unit_name)
                }
            }
        }

        impl $type {
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Value marking a quantity the model has not computed.
            #[inline]
            pub const fn nan() -> Self {
                Self(f64::NAN)
            }

            /// Raw numeric value, NaN included.
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn is_nan(self) -> bool {
                self.0.is_nan()
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }
        }
    };
}

// =============================================================================
// Power
// =============================================================================

/// Active power in megawatts (MW)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl_unit_ops!(Megawatts, "MW");

/// Reactive power in megavolt-amperes reactive (Mvar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Megavars(pub f64);

impl_unit_ops!(Megavars, "Mvar");

/// Apparent power in megavolt-amperes (MVA), used for machine and winding ratings
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MegavoltAmperes(pub f64);

impl_unit_ops!(MegavoltAmperes, "MVA");

// =============================================================================
// Voltage, current, angle
// =============================================================================

/// Voltage in kilovolts (kV)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kilovolts(pub f64);

impl_unit_ops!(Kilovolts, "kV");

impl Kilovolts {
    /// Square of the voltage, handy for `Q = B * V^2` style projections.
    #[inline]
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

/// Current in amperes (A)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Amperes(pub f64);

impl_unit_ops!(Amperes, "A");

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl_unit_ops!(Degrees, "°");

// =============================================================================
// Impedance, admittance
// =============================================================================

/// Series resistance or reactance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Ohms(pub f64);

impl_unit_ops!(Ohms, "Ω");

/// Conductance or susceptance in siemens
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Siemens(pub f64);

impl_unit_ops!(Siemens, "S");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_units() {
        let p1 = Megawatts(100.0);
        let p2 = Megawatts(40.0);

        assert_eq!((p1 + p2).value(), 140.0);
        assert_eq!((p1 - p2).value(), 60.0);
        assert_eq!((-p1).value(), -100.0);
        assert_eq!((p1 * 0.5).value(), 50.0);
    }

    #[test]
    fn nan_sentinel_survives_arithmetic() {
        let p = Megawatts::nan() + Megawatts(10.0);
        assert!(p.is_nan());
        assert!(Amperes::nan().abs().is_nan());
    }

    #[test]
    fn units_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&Kilovolts(225.0)).unwrap();
        assert_eq!(json, "225.0");
        let back: Siemens = serde_json::from_str("0.002").unwrap();
        assert_eq!(back, Siemens(0.002));
    }

    #[test]
    fn display_marks_missing_values() {
        assert_eq!(format!("{}", Megawatts(100.0)), "100.0000 MW");
        assert_eq!(format!("{}", Megavars::nan()), "n/a Mvar");
    }

    #[test]
    fn squared_voltage() {
        assert_eq!(Kilovolts(400.0).squared(), 160_000.0);
    }
}
