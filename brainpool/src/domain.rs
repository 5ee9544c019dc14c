//! Domain parameters for the Brainpool curves.
//!
//! Each size has a twisted curve `y² = x³ - 3x + b'` given in full, and a
//! regular curve given only by its generator and the isomorphism scalar `z`:
//! every other regular-form parameter follows from the twisted curve.

mod bp160;
mod bp192;
mod bp224;
mod bp256;
mod bp320;
mod bp384;
mod bp512;

use crate::{CurveId, CurveParams, Error, Form, Result, Size};
use num_bigint::BigUint;

/// Hex-encoded RFC 5639 constants for one curve size.
pub(crate) struct Domain {
    pub size: Size,
    /// Field prime.
    pub p: &'static str,
    /// Order of the generator, shared by both forms.
    pub n: &'static str,
    pub twisted_b: &'static str,
    pub twisted_generator: (&'static str, &'static str),
    pub regular_generator: (&'static str, &'static str),
    /// Isomorphism scalar mapping the regular curve onto the twisted one.
    pub z: &'static str,
}

impl Domain {
    /// Brainpool curves have prime order.
    const COFACTOR: u32 = 1;

    pub fn for_size(size: Size) -> &'static Domain {
        match size {
            Size::P160 => &bp160::DOMAIN,
            Size::P192 => &bp192::DOMAIN,
            Size::P224 => &bp224::DOMAIN,
            Size::P256 => &bp256::DOMAIN,
            Size::P320 => &bp320::DOMAIN,
            Size::P384 => &bp384::DOMAIN,
            Size::P512 => &bp512::DOMAIN,
        }
    }

    pub fn twisted_name(&self) -> &'static str {
        CurveId::new(self.size, Form::Twisted).name()
    }

    pub fn regular_name(&self) -> &'static str {
        CurveId::new(self.size, Form::Regular).name()
    }

    /// Decode the full parameter set of the twisted curve.
    pub fn twisted_params(&self) -> Result<CurveParams> {
        let name = self.twisted_name();
        let p = decode(self.p, name)?;

        Ok(CurveParams {
            name,
            bit_size: self.size.bits(),
            a: p.clone() - 3u32,
            b: decode(self.twisted_b, name)?,
            gx: decode(self.twisted_generator.0, name)?,
            gy: decode(self.twisted_generator.1, name)?,
            n: decode(self.n, name)?,
            h: Self::COFACTOR,
            p,
        })
    }

    /// Decode the regular curve's generator.
    pub fn regular_generator(&self) -> Result<(BigUint, BigUint)> {
        let name = self.regular_name();
        Ok((
            decode(self.regular_generator.0, name)?,
            decode(self.regular_generator.1, name)?,
        ))
    }

    /// Decode the isomorphism scalar.
    pub fn z(&self) -> Result<BigUint> {
        decode(self.z, self.regular_name())
    }
}

fn decode(hex: &str, curve: &'static str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::MalformedConstant { curve })
}
