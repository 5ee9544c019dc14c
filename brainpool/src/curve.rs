//! Operation contract shared by every curve handle.

use num_bigint::BigUint;

/// Domain parameters of a short Weierstrass curve `y² = x³ + a·x + b` over
/// `GF(p)`.
///
/// For the regular form of a Brainpool curve the coefficients are derived
/// from the isomorphism and are informational only: the arithmetic always
/// runs on the twisted curve, which never reads them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Curve name, e.g. `brainpoolP256r1`.
    pub name: &'static str,

    /// Size of the field prime in bits.
    pub bit_size: usize,

    /// Field prime.
    pub p: BigUint,

    /// Coefficient `a` in the curve equation.
    pub a: BigUint,

    /// Coefficient `b` in the curve equation.
    pub b: BigUint,

    /// Generator point's affine x-coordinate.
    pub gx: BigUint,

    /// Generator point's affine y-coordinate.
    pub gy: BigUint,

    /// Order of the generator.
    pub n: BigUint,

    /// Cofactor.
    pub h: u32,
}

/// Elliptic curve arithmetic on affine coordinates.
///
/// Coordinates are non-negative integers reduced modulo the field prime. The
/// point at infinity is written `(0, 0)`. Scalars are big-endian byte strings
/// interpreted as non-negative integers.
pub trait Curve: Send + Sync {
    /// Domain parameters of this curve.
    fn params(&self) -> &CurveParams;

    /// Returns `true` if `(x, y)` satisfies the curve equation.
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns `(x1, y1) + (x2, y2)`.
    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint);

    /// Returns `2·(x1, y1)`.
    fn double(&self, x1: &BigUint, y1: &BigUint) -> (BigUint, BigUint);

    /// Returns `k·(x1, y1)`.
    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> (BigUint, BigUint);

    /// Returns `k·G`.
    fn scalar_base_mult(&self, k: &[u8]) -> (BigUint, BigUint);
}
