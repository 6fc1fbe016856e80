//! Prime field parameters and raw residue arithmetic.
//!
//! The [`PrimeField`] type carries a modulus `p` and implements addition,
//! subtraction, multiplication, exponentiation and inversion on plain `u64`
//! residues.  [`FieldElement`](crate::FieldElement) delegates every operation
//! here once it has checked that both operands share the same field.

use crate::element::FieldElement;
use crate::error::FieldError;
use crate::primality::is_prime;

/// A finite field defined by a prime modulus.
///
/// `PrimeField` does not test primality on [`PrimeField::new`]; the caller
/// is trusted to supply a prime.  With a composite modulus, inversion and
/// exponent reduction produce numerically defined but meaningless results.
/// Use [`PrimeField::try_new`] to reject composite moduli up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates a new field with the given modulus.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is less than 2.
    pub fn new(p: u64) -> Self {
        assert!(p >= 2, "modulus must be >= 2");
        PrimeField { p }
    }

    /// Creates a new field, rejecting moduli that are not prime.
    pub fn try_new(p: u64) -> Result<Self, FieldError> {
        if is_prime(p) {
            Ok(PrimeField { p })
        } else {
            Err(FieldError::InvalidModulus { modulus: p })
        }
    }

    /// Returns the modulus of the field.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Builds an element of this field from any native integer.
    pub fn element(&self, x: impl Into<i128>) -> FieldElement {
        FieldElement::from_residue(self.reduce(x), *self)
    }

    /// Maps an integer of any sign onto its canonical residue in `[0, p)`.
    #[inline]
    pub fn reduce(&self, x: impl Into<i128>) -> u64 {
        x.into().rem_euclid(self.p as i128) as u64
    }

    /// Adds two residues.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.p as u128) as u64
    }

    /// Subtracts `b` from `a`.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let a = a % self.p;
        let b = b % self.p;
        if a >= b {
            a - b
        } else {
            self.p - (b - a)
        }
    }

    /// Multiplies two residues.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.p as u128) as u64
    }

    /// Returns the additive inverse of `a`.
    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// Raises `a` to the non-negative power `e`.
    ///
    /// `e == 0` yields 1 for every base, zero included.
    #[inline]
    pub fn pow(&self, mut a: u64, mut e: u64) -> u64 {
        a %= self.p;
        let mut result = 1 % self.p;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, a);
            }
            a = self.mul(a, a);
            e >>= 1;
        }
        result
    }

    /// Computes the multiplicative inverse of `a` as `a^(p-2)`.
    ///
    /// Fails with [`FieldError::DivisionByZero`] when `a` is zero modulo `p`.
    #[inline]
    pub fn inv(&self, a: u64) -> Result<u64, FieldError> {
        let a = a % self.p;
        if a == 0 {
            return Err(FieldError::DivisionByZero { modulus: self.p });
        }
        // Fermat's little theorem: a^(p-2) mod p
        Ok(self.pow(a, self.p - 2))
    }

    /// Divides `a` by `b`.
    #[inline]
    pub fn div(&self, a: u64, b: u64) -> Result<u64, FieldError> {
        Ok(self.mul(a, self.inv(b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_is_euclidean() {
        let f = PrimeField::new(7);
        assert_eq!(f.reduce(-2i64), 5);
        assert_eq!(f.reduce(-7i64), 0);
        assert_eq!(f.reduce(15u32), 1);
        assert_eq!(f.reduce(i64::MIN), (i64::MIN as i128).rem_euclid(7) as u64);
    }

    #[test]
    fn test_arithmetic_near_u64_max() {
        let p = u64::MAX - 58;
        let f = PrimeField::new(p);
        assert_eq!(f.add(p - 1, p - 1), p - 2);
        assert_eq!(f.sub(0, 1), p - 1);
        assert_eq!(f.mul(p - 1, p - 1), 1);
        let a = 123_456_789;
        assert_eq!(f.mul(a, f.inv(a).unwrap()), 1);
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        let f = PrimeField::new(11);
        assert_eq!(f.inv(22), Err(FieldError::DivisionByZero { modulus: 11 }));
        assert!(f.div(3, 0).is_err());
    }

    #[test]
    fn test_try_new_rejects_composites() {
        assert!(PrimeField::try_new(101).is_ok());
        assert_eq!(
            PrimeField::try_new(100),
            Err(FieldError::InvalidModulus { modulus: 100 })
        );
        assert!(PrimeField::try_new(1).is_err());
    }

    #[test]
    fn test_pow_zero_exponent() {
        let f = PrimeField::new(2);
        assert_eq!(f.pow(0, 0), 1);
        assert_eq!(f.pow(1, 5), 1);
    }
}
