//! Curve identifiers.

use crate::Error;
use core::{fmt, str::FromStr};

/// Brainpool curve size, named after the bit length of the field prime.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Size {
    /// 160-bit curves (RFC 5639 §3.1).
    P160,
    /// 192-bit curves (RFC 5639 §3.2).
    P192,
    /// 224-bit curves (RFC 5639 §3.3).
    P224,
    /// 256-bit curves (RFC 5639 §3.4).
    P256,
    /// 320-bit curves (RFC 5639 §3.5).
    P320,
    /// 384-bit curves (RFC 5639 §3.6).
    P384,
    /// 512-bit curves (RFC 5639 §3.7).
    P512,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 7] = [
        Size::P160,
        Size::P192,
        Size::P224,
        Size::P256,
        Size::P320,
        Size::P384,
        Size::P512,
    ];

    /// Bit length of the field prime.
    pub const fn bits(self) -> usize {
        match self {
            Size::P160 => 160,
            Size::P192 => 192,
            Size::P224 => 224,
            Size::P256 => 256,
            Size::P320 => 320,
            Size::P384 => 384,
            Size::P512 => 512,
        }
    }

    /// Position of this size in [`Size::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Size::P160 => 0,
            Size::P192 => 1,
            Size::P224 => 2,
            Size::P256 => 3,
            Size::P320 => 4,
            Size::P384 => 5,
            Size::P512 => 6,
        }
    }
}

/// Which of the two curves of a size.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Form {
    /// The standard curve with its natural coefficient `a` (`r1` curves).
    Regular,
    /// The quadratic twist with `a = -3` (`t1` curves).
    Twisted,
}

impl Form {
    /// Both forms, regular first.
    pub const ALL: [Form; 2] = [Form::Regular, Form::Twisted];
}

/// Identifies one of the fourteen Brainpool curves.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CurveId {
    /// Curve size.
    pub size: Size,
    /// Curve form.
    pub form: Form,
}

const NAMES: [[&str; 2]; 7] = [
    ["brainpoolP160r1", "brainpoolP160t1"],
    ["brainpoolP192r1", "brainpoolP192t1"],
    ["brainpoolP224r1", "brainpoolP224t1"],
    ["brainpoolP256r1", "brainpoolP256t1"],
    ["brainpoolP320r1", "brainpoolP320t1"],
    ["brainpoolP384r1", "brainpoolP384t1"],
    ["brainpoolP512r1", "brainpoolP512t1"],
];

const OIDS: [[&str; 2]; 7] = [
    ["1.3.36.3.3.2.8.1.1.1", "1.3.36.3.3.2.8.1.1.2"],
    ["1.3.36.3.3.2.8.1.1.3", "1.3.36.3.3.2.8.1.1.4"],
    ["1.3.36.3.3.2.8.1.1.5", "1.3.36.3.3.2.8.1.1.6"],
    ["1.3.36.3.3.2.8.1.1.7", "1.3.36.3.3.2.8.1.1.8"],
    ["1.3.36.3.3.2.8.1.1.9", "1.3.36.3.3.2.8.1.1.10"],
    ["1.3.36.3.3.2.8.1.1.11", "1.3.36.3.3.2.8.1.1.12"],
    ["1.3.36.3.3.2.8.1.1.13", "1.3.36.3.3.2.8.1.1.14"],
];

impl CurveId {
    /// Create a curve identifier.
    pub const fn new(size: Size, form: Form) -> Self {
        Self { size, form }
    }

    /// RFC 5639 name, e.g. `brainpoolP256r1`.
    pub const fn name(self) -> &'static str {
        NAMES[self.size.index()][self.form_index()]
    }

    /// Object identifier in dotted decimal notation.
    pub const fn oid(self) -> &'static str {
        OIDS[self.size.index()][self.form_index()]
    }

    /// Iterate over all fourteen curves, ordered by size and then form.
    pub fn all() -> impl Iterator<Item = CurveId> {
        Size::ALL
            .into_iter()
            .flat_map(|size| Form::ALL.into_iter().map(move |form| CurveId::new(size, form)))
    }

    const fn form_index(self) -> usize {
        match self.form {
            Form::Regular => 0,
            Form::Twisted => 1,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Parse an RFC 5639 curve name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Error> {
        CurveId::all()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownCurve)
    }
}
