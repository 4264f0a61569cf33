//! NaN-to-absent normalization for computed quantities.
//!
//! The model stores "not computed for this state" as NaN. JSON has no NaN
//! literal, so every computed quantity goes through [`nan_to_none`] before it
//! lands in a view record.
//!
//! Two omission policies exist side by side and are chosen per field:
//!
//! - `skip_serializing_if = "Option::is_none"` omits a field when it is null;
//! - `skip_serializing_if = "is_null_or_nan"` also omits it when it holds NaN,
//!   for values copied from the model without normalization.

use gridscope_core::units::{
    Amperes, Degrees, Kilovolts, Megavars, MegavoltAmperes, Megawatts, Ohms, Siemens,
};

/// Anything that reduces to a raw `f64`, NaN included.
pub trait Quantity: Copy {
    fn raw(self) -> f64;
}

impl Quantity for f64 {
    #[inline]
    fn raw(self) -> f64 {
        self
    }
}

impl Quantity for f32 {
    #[inline]
    fn raw(self) -> f64 {
        f64::from(self)
    }
}

macro_rules! impl_quantity_for_units {
    ($($unit:ty),* $(,)?) => {
        $(
            impl Quantity for $unit {
                #[inline]
                fn raw(self) -> f64 {
                    self.value()
                }
            }
        )*
    };
}

impl_quantity_for_units!(
    Megawatts,
    Megavars,
    MegavoltAmperes,
    Kilovolts,
    Amperes,
    Degrees,
    Ohms,
    Siemens,
);

/// `Some(value)` unless the value is NaN.
#[inline]
pub fn nan_to_none<Q: Quantity>(value: Q) -> Option<f64> {
    let raw = value.raw();
    if raw.is_nan() {
        None
    } else {
        Some(raw)
    }
}

/// Serialization predicate: true when the field is null or NaN.
#[inline]
pub fn is_null_or_nan(value: &Option<f64>) -> bool {
    value.map_or(true, f64::is_nan)
}

/// Value read from an optional extension, keeping "extension missing" apart
/// from "extension present but value unset":
///
/// - `None`: no extension, the field is omitted;
/// - `Some(None)`: extension present with a NaN value, serialized as `null`;
/// - `Some(Some(v))`: the value.
pub fn extension_value<E, Q, F>(extension: Option<&E>, read: F) -> Option<Option<f64>>
where
    Q: Quantity,
    F: FnOnce(&E) -> Q,
{
    extension.map(|ext| nan_to_none(read(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_absent() {
        assert_eq!(nan_to_none(f64::NAN), None);
        assert_eq!(nan_to_none(f32::NAN), None);
        assert_eq!(nan_to_none(Megawatts::nan()), None);
    }

    #[test]
    fn ordinary_values_pass_through() {
        assert_eq!(nan_to_none(0.0), Some(0.0));
        assert_eq!(nan_to_none(Kilovolts(400.0)), Some(400.0));
        assert_eq!(nan_to_none(f64::INFINITY), Some(f64::INFINITY));
        assert_eq!(nan_to_none(1.5_f32), Some(1.5));

        let negative_zero = nan_to_none(-0.0_f64).unwrap();
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());
    }

    #[test]
    fn normalization_is_idempotent() {
        for x in [
            f64::NAN,
            -0.0,
            0.0,
            1.0,
            -273.15,
            f64::MAX,
            f64::NEG_INFINITY,
        ] {
            let once = nan_to_none(x);
            let twice = once.and_then(nan_to_none);
            match (once, twice) {
                (None, None) => {}
                (Some(a), Some(b)) => assert_eq!(a.to_bits(), b.to_bits()),
                other => panic!("normalization not idempotent for {x}: {other:?}"),
            }
        }
    }

    #[test]
    fn null_or_nan_predicate() {
        assert!(is_null_or_nan(&None));
        assert!(is_null_or_nan(&Some(f64::NAN)));
        assert!(!is_null_or_nan(&Some(0.0)));
        assert!(!is_null_or_nan(&Some(-12.0)));
    }

    #[test]
    fn extension_values_are_tri_state() {
        struct Ext {
            value: f64,
        }
        let set = Ext { value: 3.0 };
        let unset = Ext { value: f64::NAN };

        assert_eq!(extension_value(None::<&Ext>, |e| e.value), None);
        assert_eq!(extension_value(Some(&unset), |e| e.value), Some(None));
        assert_eq!(extension_value(Some(&set), |e| e.value), Some(Some(3.0)));
    }
}
