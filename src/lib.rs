#![deny(missing_docs)]

//! # prime_field
//!
//! **prime_field** implements arithmetic over the finite prime field `GF(p)`
//! for any prime modulus that fits in a `u64`.  Every element is kept as its
//! canonical residue in `[0, p)`, and every operation returns a fresh
//! immutable value.
//!
//! ## Features
//!
//! * **Field elements** via the [`FieldElement`](element/struct.FieldElement.html)
//!   type: construction from integers of any sign, equality, and a
//!   diagnostic `FieldElement_<p>(<value>)` rendering.
//! * **Checked arithmetic** through the [`FieldArithmetic`] trait.  Adding,
//!   subtracting, multiplying or dividing elements of different fields yields
//!   [`FieldError::MismatchedField`] instead of a wrong answer.
//! * **Fermat inversion**: division multiplies by `b^(p-2)`, and dividing by
//!   zero is reported as [`FieldError::DivisionByZero`].
//! * **Exponentiation** with exponents of either sign, reduced modulo `p - 1`.
//! * **Raw residue arithmetic** on [`PrimeField`] for callers that manage
//!   `u64` residues themselves.
//! * **Optional primality checking** with [`FieldElement::try_new`] and
//!   [`PrimeField::try_new`].  The plain constructors trust the caller.
//!
//! ## Usage
//!
//! ```rust
//! use prime_field::{FieldArithmetic, FieldElement, PrimeField};
//!
//! // Work in GF(7).
//! let field = PrimeField::new(7);
//! let a = field.element(3);
//! let b = field.element(-2);
//!
//! assert_eq!(a.add(&b).unwrap(), field.element(1));
//! assert_eq!(a.pow(6), FieldElement::one(7));
//! assert_eq!(a.div(&a).unwrap(), FieldElement::one(7));
//! assert_eq!(2 * a, field.element(6));
//!
//! // Elements of different fields never mix.
//! assert!(a.add(&FieldElement::new(3, 11)).is_err());
//! ```

pub mod element;
mod error;
mod field;
mod primality;

pub use element::{FieldArithmetic, FieldElement};
pub use error::FieldError;
pub use field::PrimeField;
pub use primality::is_prime;
