//! Unit-tagged length quantities.
//!
//! # Design
//!
//! A [`Length`] stores its magnitude as an `i64` at **micrometer resolution**.
//! Using an integer at a fixed resolution means all length arithmetic is exact
//! (no floating-point drift), comparisons are O(1) integer compares, and the
//! type supports full `Eq`/`Ord`/`Hash` so lengths can be map keys and sorted
//! collection elements without ceremony.
//!
//! The price is truncation: converting to a unit coarser than the stored
//! magnitude truncates toward zero, like integer division.
//! `Length::new(300, Units::Millimeter).get_in(Units::Meter)` is `0`.
//! Read in a fine enough unit when the fractional part matters, or use
//! [`Length::as_meters`] for an `f64` view.
//!
//! A raw untagged scalar cannot become a `Length`: every constructor takes a
//! [`Units`] tag, so unit mix-ups are rejected at the call site.
//!
//! Overflow is not checked.  At micrometer resolution an `i64` spans
//! ±9.2 billion km, far beyond any walkable geometry.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ── Units ─────────────────────────────────────────────────────────────────────

/// Supported length units.
///
/// The discriminant of each unit is its decimal exponent relative to meter
/// (SI style), so a unit conversion reduces to one decimal shift.
#[repr(i32)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Units {
    Micrometer = -6,
    Millimeter = -3,
    Centimeter = -2,
    Decimeter  = -1,
    Meter      = 0,
    Kilometer  = 3,
}

impl Units {
    /// Decimal exponent relative to meter.
    #[inline(always)]
    pub const fn exponent(self) -> i32 {
        self as i32
    }

    /// Short SI symbol, e.g. `"mm"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Units::Micrometer => "um",
            Units::Millimeter => "mm",
            Units::Centimeter => "cm",
            Units::Decimeter => "dm",
            Units::Meter => "m",
            Units::Kilometer => "km",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const DECIMAL_BASE: i64 = 10;

/// `10^exp` as a compile-time constant.
const fn pow10(exp: u32) -> i64 {
    let mut value = 1_i64;
    let mut i = 0;
    while i < exp {
        value *= DECIMAL_BASE;
        i += 1;
    }
    value
}

/// Scale `quantity` from `from` units to `to` units.
///
/// If `to` is coarser than `from` the result is truncated toward zero
/// (integer division).  Overflow is not checked.
const fn scale_quantity(quantity: i64, from: Units, to: Units) -> i64 {
    let diff_exp = from.exponent() - to.exponent();
    if diff_exp < 0 {
        quantity / pow10((-diff_exp) as u32)
    } else {
        quantity * pow10(diff_exp as u32)
    }
}

// ── Length ────────────────────────────────────────────────────────────────────

/// A physical length, stored as an integer count of micrometers.
///
/// Construct with a unit tag ([`Length::new`], [`Length::from_f64`]) or a
/// suffix helper from [`LengthExt`]:
///
/// ```
/// use ped_core::{Length, LengthExt, Units};
///
/// let step = 1.5.m();
/// assert_eq!(step, Length::new(150, Units::Centimeter));
/// assert_eq!(step.get_in(Units::Millimeter), 1_500);
/// assert_eq!(step.to_string(), "1.5000 m");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    um: i64,
}

impl Length {
    /// The unit in which the magnitude is stored internally.
    pub const RESOLUTION: Units = Units::Micrometer;

    pub const ZERO: Length = Length { um: 0 };

    /// A length of `quantity` in `unit`.
    #[inline]
    pub const fn new(quantity: i64, unit: Units) -> Self {
        Self {
            um: scale_quantity(quantity, unit, Self::RESOLUTION),
        }
    }

    /// A length of fractional `quantity` in `unit`.
    ///
    /// The magnitude is rounded to the nearest micrometer:
    /// `Length::from_f64(0.1, Units::Meter)` stores exactly 100 000 um.
    #[inline]
    pub fn from_f64(quantity: f64, unit: Units) -> Self {
        let exp = unit.exponent() - Self::RESOLUTION.exponent();
        Self {
            um: (quantity * pow10(exp as u32) as f64).round() as i64,
        }
    }

    /// Magnitude in the resolution unit (micrometers).
    #[inline(always)]
    pub const fn get(self) -> i64 {
        self.um
    }

    /// Magnitude expressed in `unit`, truncated toward zero.
    #[inline]
    pub const fn get_in(self, unit: Units) -> i64 {
        scale_quantity(self.um, Self::RESOLUTION, unit)
    }

    /// Magnitude in meters as a float, for formatting and export.
    #[inline]
    pub fn as_meters(self) -> f64 {
        self.um as f64 / pow10((-Self::RESOLUTION.exponent()) as u32) as f64
    }
}

/// Renders the magnitude in meters with four fractional digits: `"1.5000 m"`.
///
/// Downstream tooling and the Python `repr` rely on this exact form.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} m", self.as_meters())
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────
//
// Closed under addition, subtraction, negation, and scaling by a
// dimensionless scalar.  Length × Length is deliberately absent (that would
// be an area, which this layer does not model).

impl Add for Length {
    type Output = Length;
    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length { um: self.um + rhs.um }
    }
}

impl Sub for Length {
    type Output = Length;
    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length { um: self.um - rhs.um }
    }
}

impl Neg for Length {
    type Output = Length;
    #[inline]
    fn neg(self) -> Length {
        Length { um: -self.um }
    }
}

impl AddAssign for Length {
    #[inline]
    fn add_assign(&mut self, rhs: Length) {
        self.um += rhs.um;
    }
}

impl SubAssign for Length {
    #[inline]
    fn sub_assign(&mut self, rhs: Length) {
        self.um -= rhs.um;
    }
}

impl Mul<i64> for Length {
    type Output = Length;
    #[inline]
    fn mul(self, rhs: i64) -> Length {
        Length { um: self.um * rhs }
    }
}

impl Mul<Length> for i64 {
    type Output = Length;
    #[inline]
    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

/// Float scaling rounds to the nearest micrometer.
impl Mul<f64> for Length {
    type Output = Length;
    #[inline]
    fn mul(self, rhs: f64) -> Length {
        Length {
            um: (self.um as f64 * rhs).round() as i64,
        }
    }
}

impl Mul<Length> for f64 {
    type Output = Length;
    #[inline]
    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

/// Division by zero panics, as for any integer division.
impl Div<i64> for Length {
    type Output = Length;
    #[inline]
    fn div(self, rhs: i64) -> Length {
        Length { um: self.um / rhs }
    }
}

impl Div<f64> for Length {
    type Output = Length;
    #[inline]
    fn div(self, rhs: f64) -> Length {
        Length {
            um: (self.um as f64 / rhs).round() as i64,
        }
    }
}

impl MulAssign<i64> for Length {
    #[inline]
    fn mul_assign(&mut self, rhs: i64) {
        self.um *= rhs;
    }
}

impl MulAssign<f64> for Length {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<i64> for Length {
    #[inline]
    fn div_assign(&mut self, rhs: i64) {
        self.um /= rhs;
    }
}

impl DivAssign<f64> for Length {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// ── Suffix helpers ────────────────────────────────────────────────────────────

/// Short-form constructors, one per unit: `1.5.m()`, `300.mm()`, `2.km()`.
///
/// Implemented for `i64` (exact) and `f64` (rounded to the nearest
/// micrometer).
pub trait LengthExt {
    fn um(self) -> Length;
    fn mm(self) -> Length;
    fn cm(self) -> Length;
    fn dm(self) -> Length;
    fn m(self) -> Length;
    fn km(self) -> Length;
}

impl LengthExt for i64 {
    #[inline]
    fn um(self) -> Length {
        Length::new(self, Units::Micrometer)
    }
    #[inline]
    fn mm(self) -> Length {
        Length::new(self, Units::Millimeter)
    }
    #[inline]
    fn cm(self) -> Length {
        Length::new(self, Units::Centimeter)
    }
    #[inline]
    fn dm(self) -> Length {
        Length::new(self, Units::Decimeter)
    }
    #[inline]
    fn m(self) -> Length {
        Length::new(self, Units::Meter)
    }
    #[inline]
    fn km(self) -> Length {
        Length::new(self, Units::Kilometer)
    }
}

impl LengthExt for f64 {
    #[inline]
    fn um(self) -> Length {
        Length::from_f64(self, Units::Micrometer)
    }
    #[inline]
    fn mm(self) -> Length {
        Length::from_f64(self, Units::Millimeter)
    }
    #[inline]
    fn cm(self) -> Length {
        Length::from_f64(self, Units::Centimeter)
    }
    #[inline]
    fn dm(self) -> Length {
        Length::from_f64(self, Units::Decimeter)
    }
    #[inline]
    fn m(self) -> Length {
        Length::from_f64(self, Units::Meter)
    }
    #[inline]
    fn km(self) -> Length {
        Length::from_f64(self, Units::Kilometer)
    }
}
