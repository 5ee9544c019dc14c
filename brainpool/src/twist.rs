//! Regular-form curves computed on their `a = -3` twist.
//!
//! For a nonzero `z ∈ GF(p)` the map `φ(x, y) = (z²·x, z³·y)` is a group
//! isomorphism from `E: y² = x³ + a·x + b` onto
//! `E': y² = x³ + z⁴a·x + z⁶b`. Each Brainpool `z` is chosen so that
//! `z⁴·a ≡ -3`, which makes `E'` a curve the engine can work with. A
//! [`RegularCurve`] maps its operands through `φ`, runs the operation on `E'`,
//! and maps the result back through `φ⁻¹`.

use crate::{Curve, CurveParams, Error, Result, WeierstrassCurve};
use alloc::sync::Arc;
use num_bigint::BigUint;
use num_traits::Zero;

/// The coordinate map `φ` between a regular curve and its twist, with the
/// powers of `z` and `z⁻¹` precomputed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Isomorphism {
    p: BigUint,
    z: BigUint,
    zinv: BigUint,
    z2: BigUint,
    z3: BigUint,
    zinv2: BigUint,
    zinv3: BigUint,
}

impl Isomorphism {
    /// Build the isomorphism for scalar `z` over `GF(p)`.
    ///
    /// Returns `None` if `z ≡ 0 (mod p)` or `z` is otherwise not invertible.
    pub fn new(z: &BigUint, p: &BigUint) -> Option<Self> {
        let z = z % p;
        if z.is_zero() {
            return None;
        }

        let zinv = z.modinv(p)?;
        let z2 = (&z * &z) % p;
        let z3 = (&z2 * &z) % p;
        let zinv2 = (&zinv * &zinv) % p;
        let zinv3 = (&zinv2 * &zinv) % p;

        Some(Self {
            p: p.clone(),
            z,
            zinv,
            z2,
            z3,
            zinv2,
            zinv3,
        })
    }

    /// The isomorphism scalar `z`, reduced modulo `p`.
    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// `z⁻¹ mod p`.
    pub fn zinv(&self) -> &BigUint {
        &self.zinv
    }

    /// Map regular-curve coordinates onto the twisted curve: `(z²·x, z³·y)`.
    pub fn to_twisted(&self, x: &BigUint, y: &BigUint) -> (BigUint, BigUint) {
        ((x * &self.z2) % &self.p, (y * &self.z3) % &self.p)
    }

    /// Map twisted-curve coordinates back onto the regular curve:
    /// `(z⁻²·x, z⁻³·y)`.
    pub fn from_twisted(&self, x: &BigUint, y: &BigUint) -> (BigUint, BigUint) {
        ((x * &self.zinv2) % &self.p, (y * &self.zinv3) % &self.p)
    }

    /// Pull a twisted-curve coefficient pair `(a', b')` back to the regular
    /// curve: `(z⁻⁴·a', z⁻⁶·b')`.
    fn pull_back_coefficients(&self, a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
        let zinv4 = (&self.zinv2 * &self.zinv2) % &self.p;
        let zinv6 = (&self.zinv3 * &self.zinv3) % &self.p;
        ((a * zinv4) % &self.p, (b * zinv6) % &self.p)
    }
}

/// A curve with arbitrary coefficient `a`, evaluated on its `a = -3` twist.
///
/// Every coordinate pair crossing this handle is mapped through the
/// [`Isomorphism`]; the group operations themselves run on the twisted curve
/// `C`, which is shared rather than owned.
#[derive(Debug)]
pub struct RegularCurve<C = WeierstrassCurve> {
    twisted: Arc<C>,
    params: CurveParams,
    isomorphism: Isomorphism,
}

impl<C: Curve> RegularCurve<C> {
    /// Wrap `twisted` as the curve named `name` with generator `(gx, gy)`,
    /// related to it by the scalar `z`.
    ///
    /// Fails if `z` is not invertible modulo the field prime or if `φ` does not
    /// map `(gx, gy)` exactly onto the twisted curve's generator.
    pub fn new(
        name: &'static str,
        twisted: Arc<C>,
        gx: BigUint,
        gy: BigUint,
        z: &BigUint,
    ) -> Result<Self> {
        let twisted_params = twisted.params();
        let isomorphism =
            Isomorphism::new(z, &twisted_params.p).ok_or(Error::NotInvertible { curve: name })?;

        let (tx, ty) = isomorphism.to_twisted(&gx, &gy);
        if tx != twisted_params.gx || ty != twisted_params.gy {
            return Err(Error::BasePointMismatch { curve: name });
        }

        let (a, b) = isomorphism.pull_back_coefficients(&twisted_params.a, &twisted_params.b);
        tracing::trace!(curve = name, twisted = twisted_params.name, "isomorphism verified");

        let params = CurveParams {
            name,
            bit_size: twisted_params.bit_size,
            p: twisted_params.p.clone(),
            a,
            b,
            gx,
            gy,
            n: twisted_params.n.clone(),
            h: twisted_params.h,
        };

        Ok(Self {
            twisted,
            params,
            isomorphism,
        })
    }

    /// The twisted curve the arithmetic runs on.
    pub fn twisted(&self) -> &C {
        &self.twisted
    }

    /// The coordinate map onto the twisted curve.
    pub fn isomorphism(&self) -> &Isomorphism {
        &self.isomorphism
    }
}

impl<C: Curve> Curve for RegularCurve<C> {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let (tx, ty) = self.isomorphism.to_twisted(x, y);
        self.twisted.is_on_curve(&tx, &ty)
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> (BigUint, BigUint) {
        let (tx1, ty1) = self.isomorphism.to_twisted(x1, y1);
        let (tx2, ty2) = self.isomorphism.to_twisted(x2, y2);
        let (x, y) = self.twisted.add(&tx1, &ty1, &tx2, &ty2);
        self.isomorphism.from_twisted(&x, &y)
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> (BigUint, BigUint) {
        let (tx1, ty1) = self.isomorphism.to_twisted(x1, y1);
        let (x, y) = self.twisted.double(&tx1, &ty1);
        self.isomorphism.from_twisted(&x, &y)
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> (BigUint, BigUint) {
        let (tx1, ty1) = self.isomorphism.to_twisted(x1, y1);
        let (x, y) = self.twisted.scalar_mult(&tx1, &ty1, k);
        self.isomorphism.from_twisted(&x, &y)
    }

    fn scalar_base_mult(&self, k: &[u8]) -> (BigUint, BigUint) {
        // The twisted generator is φ(G), so no input mapping is needed.
        let (x, y) = self.twisted.scalar_base_mult(k);
        self.isomorphism.from_twisted(&x, &y)
    }
}
