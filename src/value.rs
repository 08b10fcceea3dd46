//! The undefined-float sentinel used throughout style and layout.
//!
//! Absence of a numeric style value is represented by a quiet NaN rather
//! than `Option<f32>`, so that bounds arithmetic can stay plain `f32` math.
//! Every branch that cares about definedness must go through
//! [`FloatValue::is_defined`]/[`FloatValue::is_undefined`] rather than
//! trusting NaN's usual propagation through comparisons, since this type's
//! own `PartialEq` treats two undefined values as equal -- the opposite of
//! what raw `f32` NaN comparisons do.

use core::fmt;

/// Float-equality tolerance used for "same" comparisons across the engine
/// (measurement-cache compatibility, scenario assertions).
pub const FLOAT_EQ_EPSILON: f32 = 1e-4;

/// A floating point value that may be "not set".
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatValue(f32);

impl FloatValue {
    /// The sentinel representing an unset value.
    pub const UNDEFINED: FloatValue = FloatValue(f32::NAN);
    pub const ZERO: FloatValue = FloatValue(0.0);

    #[inline]
    pub const fn defined(value: f32) -> Self {
        FloatValue(value)
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        !self.0.is_nan()
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0.is_nan()
    }

    /// The raw value, including NaN when undefined. Prefer `unwrap_or` or
    /// `maybe` at call sites; this exists for interop with plain-`f32` APIs
    /// (e.g. measure-mode availability) that use NaN as their own sentinel.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn unwrap_or(self, default: f32) -> f32 {
        if self.is_defined() {
            self.0
        } else {
            default
        }
    }

    #[inline]
    pub fn maybe(self) -> Option<f32> {
        if self.is_defined() {
            Some(self.0)
        } else {
            None
        }
    }
}

impl Default for FloatValue {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl From<f32> for FloatValue {
    fn from(v: f32) -> Self {
        FloatValue(v)
    }
}

impl From<Option<f32>> for FloatValue {
    fn from(v: Option<f32>) -> Self {
        match v {
            Some(v) => FloatValue(v),
            None => FloatValue::UNDEFINED,
        }
    }
}

/// `undefined == undefined` is `true` here, matching the engine's contract;
/// raw IEEE-754 `==` on `f32` NaN would say otherwise.
impl PartialEq for FloatValue {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_defined(), other.is_defined()) {
            (false, false) => true,
            (true, true) => float_eq(self.0, other.0),
            _ => false,
        }
    }
}

impl fmt::Debug for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("undefined")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `|a - b| < `[`FLOAT_EQ_EPSILON`].
#[inline]
pub fn float_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < FLOAT_EQ_EPSILON
}

/// Is this raw availability/measurement float "set"? Used at seams where the
/// engine deals in plain `f32` + a measure-mode rather than [`FloatValue`]
/// (the two representations share one NaN sentinel).
#[inline]
pub fn is_defined(v: f32) -> bool {
    !v.is_nan()
}
