//! Field elements and their checked arithmetic.
//!
//! A [`FieldElement`] is an immutable residue class modulo a prime.  Binary
//! operations between two elements go through the [`FieldArithmetic`] trait
//! and return a `Result`, because operands from different fields cannot be
//! combined.  Multiplying by a plain integer coefficient cannot fail and is
//! exposed through `std::ops::Mul` with the integer on the left.

use std::fmt;
use std::ops::{Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::PrimeField;

/// Arithmetic shared by elements of a prime field.
///
/// The methods mirror the usual operators.  Each binary method fails with
/// [`FieldError::MismatchedField`] when the operands belong to different
/// fields.
pub trait FieldArithmetic: Sized {
    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self) -> Result<Self, FieldError>;

    /// Returns `self - rhs`.
    fn sub(&self, rhs: &Self) -> Result<Self, FieldError>;

    /// Returns `self * rhs`.
    fn mul(&self, rhs: &Self) -> Result<Self, FieldError>;

    /// Returns `self / rhs`.
    ///
    /// Fails with [`FieldError::DivisionByZero`] when `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self, FieldError>;

    /// Raises `self` to an integer power of either sign.
    fn pow(&self, exponent: impl Into<i128>) -> Self;
}

/// One element of the prime field `GF(p)`.
///
/// The stored value is always the canonical residue in `[0, p)`.  Two
/// elements are equal iff both their values and their moduli match.
///
/// ```
/// use prime_field::{FieldArithmetic, FieldElement};
///
/// let a = FieldElement::new(-2, 7);
/// let b = FieldElement::new(3, 7);
/// assert_eq!(a.value(), 5);
/// assert_eq!(a.add(&b).unwrap(), FieldElement::new(1, 7));
/// assert_eq!(a.to_string(), "FieldElement_7(5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawFieldElement", try_from = "RawFieldElement")]
pub struct FieldElement {
    value: u64,
    field: PrimeField,
}

/// Wire form of an element; `value` may be unreduced on input.
#[derive(Serialize, Deserialize)]
struct RawFieldElement {
    value: u64,
    modulus: u64,
}

impl From<FieldElement> for RawFieldElement {
    fn from(elem: FieldElement) -> Self {
        RawFieldElement {
            value: elem.value,
            modulus: elem.modulus(),
        }
    }
}

impl TryFrom<RawFieldElement> for FieldElement {
    type Error = FieldError;

    fn try_from(raw: RawFieldElement) -> Result<Self, Self::Error> {
        if raw.modulus < 2 {
            return Err(FieldError::InvalidModulus {
                modulus: raw.modulus,
            });
        }
        Ok(FieldElement::new(raw.value, raw.modulus))
    }
}

impl FieldElement {
    /// Creates the element `x mod p`.
    ///
    /// `x` may be negative; the result is always reduced into `[0, p)`.
    /// Primality of `p` is not checked: with a composite modulus, division
    /// and exponentiation give meaningless results.
    ///
    /// # Panics
    ///
    /// Panics if `p < 2`.
    pub fn new(x: impl Into<i128>, p: u64) -> Self {
        PrimeField::new(p).element(x)
    }

    /// Creates the element `x mod p`, failing with
    /// [`FieldError::InvalidModulus`] unless `p` is prime.
    pub fn try_new(x: impl Into<i128>, p: u64) -> Result<Self, FieldError> {
        Ok(PrimeField::try_new(p)?.element(x))
    }

    pub(crate) fn from_residue(value: u64, field: PrimeField) -> Self {
        debug_assert!(value < field.modulus());
        FieldElement { value, field }
    }

    /// The additive identity of `GF(p)`.
    pub fn zero(p: u64) -> Self {
        Self::new(0, p)
    }

    /// The multiplicative identity of `GF(p)`.
    pub fn one(p: u64) -> Self {
        Self::new(1, p)
    }

    /// Returns the canonical residue.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the modulus of the field this element belongs to.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    /// Returns the field this element belongs to.
    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Returns `true` for the zero element.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Multiplies by a plain integer coefficient.
    pub fn scale(&self, coefficient: impl Into<i128>) -> Self {
        let c = self.field.reduce(coefficient);
        Self::from_residue(self.field.mul(c, self.value), self.field)
    }

    /// Returns the multiplicative inverse via Fermat's little theorem.
    pub fn inverse(&self) -> Result<Self, FieldError> {
        Ok(Self::from_residue(self.field.inv(self.value)?, self.field))
    }

    fn common_field(&self, rhs: &Self) -> Result<PrimeField, FieldError> {
        if self.field != rhs.field {
            return Err(FieldError::MismatchedField {
                left: self.modulus(),
                right: rhs.modulus(),
            });
        }
        Ok(self.field)
    }
}

impl FieldArithmetic for FieldElement {
    fn add(&self, rhs: &Self) -> Result<Self, FieldError> {
        let f = self.common_field(rhs)?;
        Ok(Self::from_residue(f.add(self.value, rhs.value), f))
    }

    fn sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        let f = self.common_field(rhs)?;
        Ok(Self::from_residue(f.sub(self.value, rhs.value), f))
    }

    fn mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        let f = self.common_field(rhs)?;
        Ok(Self::from_residue(f.mul(self.value, rhs.value), f))
    }

    fn div(&self, rhs: &Self) -> Result<Self, FieldError> {
        let f = self.common_field(rhs)?;
        Ok(Self::from_residue(f.div(self.value, rhs.value)?, f))
    }

    /// The exponent is first reduced modulo `p - 1` with a non-negative
    /// remainder, so negative exponents act as powers of the inverse.
    ///
    /// A reduced exponent of zero always yields one.  This includes `0^0`
    /// and, because `p - 1` reduces to zero, `0^(p-1)`.
    fn pow(&self, exponent: impl Into<i128>) -> Self {
        let order = (self.modulus() - 1) as i128;
        let e = exponent.into().rem_euclid(order) as u64;
        Self::from_residue(self.field.pow(self.value, e), self.field)
    }
}

impl PartialEq<Option<FieldElement>> for FieldElement {
    fn eq(&self, other: &Option<FieldElement>) -> bool {
        other.as_ref().is_some_and(|o| self == o)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Self::from_residue(self.field.neg(self.value), self.field)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<FieldElement> for $t {
                type Output = FieldElement;

                fn mul(self, rhs: FieldElement) -> FieldElement {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i32, i64, u32, u64);

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus(), self.value)
    }
}
