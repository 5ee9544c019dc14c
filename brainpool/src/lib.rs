#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod curve;
mod domain;
mod engine;
mod error;
mod id;
mod registry;
mod twist;

pub use crate::{
    curve::{Curve, CurveParams},
    engine::WeierstrassCurve,
    error::{Error, Result},
    id::{CurveId, Form, Size},
    registry::Registry,
    twist::{Isomorphism, RegularCurve},
};
pub use num_bigint::{self, BigUint};

#[cfg(any(feature = "std", feature = "critical-section"))]
pub use crate::registry::{
    curve, p160r1, p160t1, p192r1, p192t1, p224r1, p224t1, p256r1, p256t1, p320r1, p320t1,
    p384r1, p384t1, p512r1, p512t1, registry,
};
