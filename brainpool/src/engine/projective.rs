//! Projective points on a curve with `a = -3`.

use super::field::FieldElement;
use num_bigint::BigUint;

/// Point in homogeneous projective coordinates `(X : Y : Z)`.
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint<'p> {
    x: FieldElement<'p>,
    y: FieldElement<'p>,
    z: FieldElement<'p>,
}

impl<'p> ProjectivePoint<'p> {
    /// Additive identity of the curve group, a.k.a. point at infinity.
    pub fn identity(p: &'p BigUint) -> Self {
        Self {
            x: FieldElement::zero(p),
            y: FieldElement::one(p),
            z: FieldElement::zero(p),
        }
    }

    /// Lift affine coordinates, mapping `(0, 0)` to the identity.
    pub fn from_affine(x: &BigUint, y: &BigUint, p: &'p BigUint) -> Self {
        let x = FieldElement::new(x, p);
        let y = FieldElement::new(y, p);

        if x.is_zero() && y.is_zero() {
            return Self::identity(p);
        }

        Self {
            x,
            y,
            z: FieldElement::one(p),
        }
    }

    /// Returns the affine representation of this point, with the identity
    /// written as `(0, 0)`.
    pub fn to_affine(&self) -> (BigUint, BigUint) {
        match self.z.invert() {
            Some(zinv) => (
                (&self.x * &zinv).into_uint(),
                (&self.y * &zinv).into_uint(),
            ),
            None => (BigUint::default(), BigUint::default()),
        }
    }

    /// Implements complete addition for curves with `a = -3`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 4). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn add(&self, rhs: &Self, b: &FieldElement<'p>) -> Self {
        let lhs = self;

        let xx = &lhs.x * &rhs.x; // 1
        let yy = &lhs.y * &rhs.y; // 2
        let zz = &lhs.z * &rhs.z; // 3
        let xy_pairs = ((&lhs.x + &lhs.y) * (&rhs.x + &rhs.y)) - (&xx + &yy); // 4, 5, 6, 7, 8
        let yz_pairs = ((&lhs.y + &lhs.z) * (&rhs.y + &rhs.z)) - (&yy + &zz); // 9, 10, 11, 12, 13
        let xz_pairs = ((&lhs.x + &lhs.z) * (&rhs.x + &rhs.z)) - (&xx + &zz); // 14, 15, 16, 17, 18

        let bzz_part = &xz_pairs - (b * &zz); // 19, 20
        let bzz3_part = bzz_part.double() + &bzz_part; // 21, 22
        let yy_m_bzz3 = &yy - &bzz3_part; // 23
        let yy_p_bzz3 = &yy + &bzz3_part; // 24

        let zz3 = zz.double() + &zz; // 26, 27
        let bxz_part = (b * &xz_pairs) - (&zz3 + &xx); // 25, 28, 29
        let bxz3_part = bxz_part.double() + &bxz_part; // 30, 31
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 32, 33, 34

        Self {
            x: (&yy_p_bzz3 * &xy_pairs) - (&yz_pairs * &bxz3_part), // 35, 39, 40
            y: (&yy_p_bzz3 * &yy_m_bzz3) + (&xx3_m_zz3 * &bxz3_part), // 36, 37, 38
            z: (&yy_m_bzz3 * &yz_pairs) + (&xy_pairs * &xx3_m_zz3), // 41, 42, 43
        }
    }

    /// Implements point doubling for curves with `a = -3`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 6). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn double(&self, b: &FieldElement<'p>) -> Self {
        let point = self;

        let xx = point.x.square(); // 1
        let yy = point.y.square(); // 2
        let zz = point.z.square(); // 3
        let xy2 = (&point.x * &point.y).double(); // 4, 5
        let xz2 = (&point.x * &point.z).double(); // 6, 7

        let bzz_part = (b * &zz) - &xz2; // 8, 9
        let bzz3_part = bzz_part.double() + &bzz_part; // 10, 11
        let yy_m_bzz3 = &yy - &bzz3_part; // 12
        let yy_p_bzz3 = &yy + &bzz3_part; // 13
        let y_frag = &yy_p_bzz3 * &yy_m_bzz3; // 14
        let x_frag = &yy_m_bzz3 * &xy2; // 15

        let zz3 = zz.double() + &zz; // 16, 17
        let bxz2_part = (b * &xz2) - (&zz3 + &xx); // 18, 19, 20
        let bxz6_part = bxz2_part.double() + &bxz2_part; // 21, 22
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 23, 24, 25

        let y = y_frag + (&xx3_m_zz3 * &bxz6_part); // 26, 27
        let yz2 = (&point.y * &point.z).double(); // 28, 29
        let x = x_frag - (&bxz6_part * &yz2); // 30, 31
        let z = (&yz2 * &yy).double().double(); // 32, 33, 34

        Self { x, y, z }
    }

    /// Returns `k * self` for a big-endian scalar `k`.
    ///
    /// Left-to-right double-and-add; runs in time dependent on `k`.
    pub fn mul(&self, k: &[u8], b: &FieldElement<'p>) -> Self {
        let mut q = Self::identity(self.x.modulus());

        for byte in k {
            for bit in (0..8).rev() {
                q = q.double(b);
                if (byte >> bit) & 1 == 1 {
                    q = q.add(self, b);
                }
            }
        }

        q
    }
}
