//! Construction and lookup of the fourteen Brainpool curves.

use crate::{
    Curve, CurveId, Form, RegularCurve, Result, Size, WeierstrassCurve, domain::Domain,
};
use alloc::sync::Arc;

#[cfg(feature = "critical-section")]
use once_cell::sync::OnceCell as OnceLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::OnceLock;

/// Twisted and regular curve of one size.
#[derive(Debug)]
struct Family {
    twisted: Arc<WeierstrassCurve>,
    regular: RegularCurve<WeierstrassCurve>,
}

impl Family {
    fn new(size: Size) -> Result<Self> {
        let domain = Domain::for_size(size);

        let twisted = Arc::new(WeierstrassCurve::new(domain.twisted_params()?)?);
        let (gx, gy) = domain.regular_generator()?;
        let regular = RegularCurve::new(
            domain.regular_name(),
            Arc::clone(&twisted),
            gx,
            gy,
            &domain.z()?,
        )?;

        tracing::debug!(
            bits = size.bits(),
            regular = domain.regular_name(),
            twisted = domain.twisted_name(),
            "constructed curve family"
        );

        Ok(Self { twisted, regular })
    }
}

/// All Brainpool curves, built together and immutable afterwards.
///
/// Building a registry parses every domain parameter and checks, per size,
/// that the isomorphism maps the regular generator onto the twisted one. Most
/// callers want the shared instance returned by [`registry`] instead of
/// building their own.
#[derive(Debug)]
pub struct Registry {
    families: [Family; 7],
}

impl Registry {
    /// Build every curve.
    pub fn new() -> Result<Self> {
        let _span = tracing::debug_span!("brainpool_registry").entered();

        let families = [
            Family::new(Size::P160)?,
            Family::new(Size::P192)?,
            Family::new(Size::P224)?,
            Family::new(Size::P256)?,
            Family::new(Size::P320)?,
            Family::new(Size::P384)?,
            Family::new(Size::P512)?,
        ];

        Ok(Self { families })
    }

    /// Look up the curve of the given size and form.
    pub fn get(&self, size: Size, form: Form) -> &dyn Curve {
        match form {
            Form::Regular => self.regular(size),
            Form::Twisted => self.twisted(size),
        }
    }

    /// Look up a curve by identifier.
    pub fn by_id(&self, id: CurveId) -> &dyn Curve {
        self.get(id.size, id.form)
    }

    /// The `a = -3` curve of the given size.
    pub fn twisted(&self, size: Size) -> &WeierstrassCurve {
        &self.families[size.index()].twisted
    }

    /// The regular curve of the given size.
    pub fn regular(&self, size: Size) -> &RegularCurve<WeierstrassCurve> {
        &self.families[size.index()].regular
    }

    /// Iterate over all curves, ordered by size and then form.
    pub fn curves(&self) -> impl Iterator<Item = (CurveId, &dyn Curve)> + '_ {
        CurveId::all().map(move |id| (id, self.by_id(id)))
    }
}

#[cfg(any(feature = "std", feature = "critical-section"))]
static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Process-wide registry, built on first use.
///
/// Concurrent first callers block until the single construction finishes;
/// later calls only read.
///
/// # Panics
///
/// If the built-in domain parameters fail to validate. This cannot happen
/// unless the constants compiled into this crate are corrupted.
#[cfg(any(feature = "std", feature = "critical-section"))]
pub fn registry() -> &'static Registry {
    get_or_build(&REGISTRY, Registry::new)
}

/// Run `build` into `cell` unless it already holds a registry.
#[cfg(any(feature = "std", feature = "critical-section"))]
fn get_or_build<F>(cell: &OnceLock<Registry>, build: F) -> &Registry
where
    F: FnOnce() -> Result<Registry>,
{
    cell.get_or_init(|| {
        build().unwrap_or_else(|err| panic!("invalid Brainpool domain parameters: {err}"))
    })
}

/// Look up a curve in the process-wide [`registry`].
#[cfg(any(feature = "std", feature = "critical-section"))]
pub fn curve(size: Size, form: Form) -> &'static dyn Curve {
    registry().get(size, form)
}

macro_rules! curve_accessors {
    ($($name:ident: $size:ident, $form:ident, $doc:literal;)+) => {
        $(
            #[doc = $doc]
            #[cfg(any(feature = "std", feature = "critical-section"))]
            pub fn $name() -> &'static dyn Curve {
                curve(Size::$size, Form::$form)
            }
        )+
    };
}

curve_accessors! {
    p160r1: P160, Regular, "brainpoolP160r1";
    p160t1: P160, Twisted, "brainpoolP160t1";
    p192r1: P192, Regular, "brainpoolP192r1";
    p192t1: P192, Twisted, "brainpoolP192t1";
    p224r1: P224, Regular, "brainpoolP224r1";
    p224t1: P224, Twisted, "brainpoolP224t1";
    p256r1: P256, Regular, "brainpoolP256r1";
    p256t1: P256, Twisted, "brainpoolP256t1";
    p320r1: P320, Regular, "brainpoolP320r1";
    p320t1: P320, Twisted, "brainpoolP320t1";
    p384r1: P384, Regular, "brainpoolP384r1";
    p384t1: P384, Twisted, "brainpoolP384t1";
    p512r1: P512, Regular, "brainpoolP512r1";
    p512t1: P512, Twisted, "brainpoolP512t1";
}
