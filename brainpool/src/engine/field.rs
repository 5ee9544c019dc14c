//! Arithmetic in `GF(p)` for a modulus chosen at runtime.

use core::ops::{Add, Mul, Sub};
use num_bigint::BigUint;
use num_traits::Zero;

/// Element of a prime field, bound to the modulus it lives in.
///
/// The value is always kept in `[0, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FieldElement<'p> {
    value: BigUint,
    modulus: &'p BigUint,
}

impl<'p> FieldElement<'p> {
    /// Reduce `value` modulo `modulus`.
    pub fn new(value: &BigUint, modulus: &'p BigUint) -> Self {
        Self {
            value: value % modulus,
            modulus,
        }
    }

    /// Additive identity.
    pub fn zero(modulus: &'p BigUint) -> Self {
        Self {
            value: BigUint::zero(),
            modulus,
        }
    }

    /// Multiplicative identity.
    pub fn one(modulus: &'p BigUint) -> Self {
        Self::from_u64(1, modulus)
    }

    pub fn from_u64(value: u64, modulus: &'p BigUint) -> Self {
        Self::new(&BigUint::from(value), modulus)
    }

    pub fn modulus(&self) -> &'p BigUint {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn double(&self) -> Self {
        self + self
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        self.value.modinv(self.modulus).map(|value| Self {
            value,
            modulus: self.modulus,
        })
    }

    pub fn into_uint(self) -> BigUint {
        self.value
    }

    fn add_mod(&self, rhs: &Self) -> Self {
        let mut value = &self.value + &rhs.value;
        if value >= *self.modulus {
            value -= self.modulus;
        }

        Self {
            value,
            modulus: self.modulus,
        }
    }

    fn sub_mod(&self, rhs: &Self) -> Self {
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            (self.modulus - &rhs.value) + &self.value
        };

        Self {
            value,
            modulus: self.modulus,
        }
    }

    fn mul_mod(&self, rhs: &Self) -> Self {
        Self {
            value: (&self.value * &rhs.value) % self.modulus,
            modulus: self.modulus,
        }
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $inner:ident) => {
        impl<'p> $op<&FieldElement<'p>> for &FieldElement<'p> {
            type Output = FieldElement<'p>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<'p>) -> FieldElement<'p> {
                self.$inner(rhs)
            }
        }

        impl<'p> $op<FieldElement<'p>> for &FieldElement<'p> {
            type Output = FieldElement<'p>;

            #[inline]
            fn $op_fn(self, rhs: FieldElement<'p>) -> FieldElement<'p> {
                self.$inner(&rhs)
            }
        }

        impl<'p> $op<&FieldElement<'p>> for FieldElement<'p> {
            type Output = FieldElement<'p>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<'p>) -> FieldElement<'p> {
                self.$inner(rhs)
            }
        }

        impl<'p> $op<FieldElement<'p>> for FieldElement<'p> {
            type Output = FieldElement<'p>;

            #[inline]
            fn $op_fn(self, rhs: FieldElement<'p>) -> FieldElement<'p> {
                self.$inner(&rhs)
            }
        }
    };
}

impl_field_op!(Add, add, add_mod);
impl_field_op!(Sub, sub, sub_mod);
impl_field_op!(Mul, mul, mul_mod);
