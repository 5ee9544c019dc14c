//! brainpoolP192r1 and brainpoolP192t1 (RFC 5639 §3.2)

use super::Domain;
use crate::Size;

pub(super) const DOMAIN: Domain = Domain {
    size: Size::P192,
    p: "c302f41d932a36cda7a3463093d18db78fce476de1a86297",
    n: "c302f41d932a36cda7a3462f9e9e916b5be8f1029ac4acc1",
    twisted_b: "13d56ffaec78681e68f9deb43b35bec2fb68542e27897b79",
    twisted_generator: (
        "3ae9e58c82f63c30282e1fe7bbf43fa72c446af6f4618129",
        "097e2c5667c2223a902ab5ca449d0084b7e5b3de7ccc01c9",
    ),
    regular_generator: (
        "c0a0647eaab6a48753b033c56cb0f0900a2f5c4853375fd6",
        "14b690866abd5bb88b5f4828c1490002e6773fa2fa299b8f",
    ),
    z: "1b6f5cc8db4dc7af19458a9cb80dc2295e5eb9c3732104cb",
};
