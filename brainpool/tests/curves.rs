//! Known-answer tests for every Brainpool curve.

#![cfg(feature = "std")]

use brainpool::{BigUint, Curve, Form, Size};
use hex_literal::hex;

struct Vector {
    size: Size,
    form: Form,
    x: &'static [u8],
    y: &'static [u8],
}

/// `3·G` for every curve.
const TRIPLE_GENERATOR: &[Vector] = &[
    Vector {
        size: Size::P160,
        form: Form::Regular,
        x: &hex!("8a7c28a550682cda519ce7bc73778ea9ac7812b5"),
        y: &hex!("868562a3f2101faf2fb5ee7a0f366dcbac9147fe"),
    },
    Vector {
        size: Size::P160,
        form: Form::Twisted,
        x: &hex!("c7fb4e367ed789413fc9648ce0e921156f37642b"),
        y: &hex!("554bba4e002e3f5c7cef7f0bd169cc5979d8ff3d"),
    },
    Vector {
        size: Size::P192,
        form: Form::Regular,
        x: &hex!("15372d94937774620bdbff366d5677d8464866c7b0b20626"),
        y: &hex!("240f7e24234c9ecc309f54b7d88002eaf78341ab1d1e4919"),
    },
    Vector {
        size: Size::P192,
        form: Form::Twisted,
        x: &hex!("1092182a330dcdbbab7bd585e1611b05d197df5745273fdc"),
        y: &hex!("65e8622349aa118d9e46dab8eddde2bcf7765f768c05e708"),
    },
    Vector {
        size: Size::P224,
        form: Form::Regular,
        x: &hex!("9051dae686fa68103a478db398818d048c2042f01f0ecab577e4598e"),
        y: &hex!("baa97f6f99cabf4a626c056b63f21f793589d36cd5981a3579782900"),
    },
    Vector {
        size: Size::P224,
        form: Form::Twisted,
        x: &hex!("347945949fc2a5a3c21d6c34f880545b85f9283ffc900fa0be1efc11"),
        y: &hex!("545ec6fcdf28122f82bfc658dce53035eca6267d49199a0cc00cee8e"),
    },
    Vector {
        size: Size::P256,
        form: Form::Regular,
        x: &hex!("a8f217b77338f1d4d6624c3ab4f6cc16d2aa843d0c0fca016b91e2ad25cae39d"),
        y: &hex!("4b49cafc7dac26bb0aa2a6850a1b40f5fac10e4589348fb77e65cc5602b74f9d"),
    },
    Vector {
        size: Size::P256,
        form: Form::Twisted,
        x: &hex!("46b2a45fdd881abea0cb4e5fea19c5a72d399245643b06e0fbe24a5e4058d806"),
        y: &hex!("4f88cd8d4bc69acc7b7032d98460b2c23160441f40562c00bee2aa7860c19aa8"),
    },
    Vector {
        size: Size::P320,
        form: Form::Regular,
        x: &hex!("c1e31fd7f03708ce169cfd15be47890edb83acdef8aef8ba0957fc7ac717c6efbce18f0bcf5e73c9"),
        y: &hex!("cdb9aece49778b79f7a6ef2ffa840297f67e4d269ad8a58e8a5f27ce8c5ada7d9303a9404c589400"),
    },
    Vector {
        size: Size::P320,
        form: Form::Twisted,
        x: &hex!("847758c1c7338efab1b79a22b4446f56c87fab0070b7858e8abdbbd94d454e0c340ebb42dcf91633"),
        y: &hex!("3d944522b6c1b7d42038e281d4d77ac75c2e0a37e33381c3f0d845cf32d54c39406ee208f7f322c1"),
    },
    Vector {
        size: Size::P384,
        form: Form::Regular,
        x: &hex!("7b63205bf00ddae73b17452b6a27ebf53df581348c6949f83ee1b6fcc7463bbe3c11ef6596a3b8897d7cc85b3035f11f"),
        y: &hex!("761d3a4a5f8093775521a326bc02baaf7b2eb481ead16a5c7b2bd39462363e0373c0edaea3b8f59381d7129d48772eb3"),
    },
    Vector {
        size: Size::P384,
        form: Form::Twisted,
        x: &hex!("03e7e83b88ba8d99a004f1c92ee361648a922f773f96d64b2bb66d1f3c0eeac30485cfef216f68b596b8861fbc005ea9"),
        y: &hex!("298585e0c24722037f09dd015c2fefeec87058d76a07fe43ed52e8641b7248d2c8baba631d9d68adc2bd7e748c753c0d"),
    },
    Vector {
        size: Size::P512,
        form: Form::Regular,
        x: &hex!("08dd87e12b0a4cc436cdd42543f20afe907c80ef3bc2459309c09cefd830151bc1f6fb975ceecade4780ae53e1853d62f56e34abfa9ac7205d4abf882ccb8d94"),
        y: &hex!("026ef5c6e1dab71d756ff0067376fa7543d903b4a6334c4bba0b382e1716d843acdab8eb772327b3febfcb69c0f37c5f8cce5bc75d8de6495cdeafba05b02c37"),
    },
    Vector {
        size: Size::P512,
        form: Form::Twisted,
        x: &hex!("6ebd6e634974f138300e1d9024e1132bf53bfdcb1d0142501efcbbd2a295f70fac1b86449310ab68d8c7e6aaafa22a0a4398aedacdcfadd2cbdd03a56ee4ff0d"),
        y: &hex!("2fbe930ec94f50e8031161d73095549c2d39e1085dedb61db91f1c931c1a0c1022effddc3f91bde114e87f77f544ee1ac6ddb5db1f55fe8406fb7f856ff951b0"),
    },
];

/// RFC 5639 coefficients `(a, b)` of the regular curves.
const REGULAR_COEFFICIENTS: &[(Size, &[u8], &[u8])] = &[
    (
        Size::P160,
        &hex!("340e7be2a280eb74e2be61bada745d97e8f7c300"),
        &hex!("1e589a8595423412134faa2dbdec95c8d8675e58"),
    ),
    (
        Size::P192,
        &hex!("6a91174076b1e0e19c39c031fe8685c1cae040e5c69a28ef"),
        &hex!("469a28ef7c28cca3dc721d044f4496bcca7ef4146fbf25c9"),
    ),
    (
        Size::P224,
        &hex!("68a5e62ca9ce6c1c299803a6c1530b514e182ad8b0042a59cad29f43"),
        &hex!("2580f63ccfe44138870713b1a92369e33e2135d266dbb372386c400b"),
    ),
    (
        Size::P256,
        &hex!("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9"),
        &hex!("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6"),
    ),
    (
        Size::P320,
        &hex!("3ee30b568fbab0f883ccebd46d3f3bb8a2a73513f5eb79da66190eb085ffa9f492f375a97d860eb4"),
        &hex!("520883949dfdbc42d3ad198640688a6fe13f41349554b49acc31dccd884539816f5eb4ac8fb1f1a6"),
    ),
    (
        Size::P384,
        &hex!("7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826"),
        &hex!("04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11"),
    ),
    (
        Size::P512,
        &hex!("7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca"),
        &hex!("3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723"),
    ),
];

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn identity() -> (BigUint, BigUint) {
    (BigUint::default(), BigUint::default())
}

#[test]
fn triple_generator_known_answers() {
    for vector in TRIPLE_GENERATOR {
        let curve = brainpool::curve(vector.size, vector.form);
        let params = curve.params();
        let expected = (uint(vector.x), uint(vector.y));

        let doubled = curve.double(&params.gx, &params.gy);
        let added = curve.add(&doubled.0, &doubled.1, &params.gx, &params.gy);
        let multiplied = curve.scalar_mult(&params.gx, &params.gy, &[3]);
        let base_multiplied = curve.scalar_base_mult(&[3]);

        assert_eq!(added, expected, "{}: 2G + G", params.name);
        assert_eq!(multiplied, expected, "{}: 3 * G", params.name);
        assert_eq!(base_multiplied, expected, "{}: 3 * base", params.name);
        assert!(curve.is_on_curve(&expected.0, &expected.1));
    }
}

#[test]
fn generators_are_on_curve() {
    for (id, curve) in brainpool::registry().curves() {
        let params = curve.params();
        assert!(curve.is_on_curve(&params.gx, &params.gy), "{id}");
        assert!(!curve.is_on_curve(&params.gx, &(&params.gy + 1u32)), "{id}");
    }
}

#[test]
fn generators_have_order_n() {
    for (id, curve) in brainpool::registry().curves() {
        let params = curve.params();
        assert_eq!(params.h, 1);
        assert_eq!(curve.scalar_base_mult(&params.n.to_bytes_be()), identity(), "{id}");

        let n_plus_one = (&params.n + 1u32).to_bytes_be();
        assert_eq!(
            curve.scalar_base_mult(&n_plus_one),
            (params.gx.clone(), params.gy.clone()),
            "{id}"
        );
    }
}

#[test]
fn point_plus_negation_is_identity() {
    for (id, curve) in brainpool::registry().curves() {
        let params = curve.params();
        let neg_y = &params.p - &params.gy;
        assert_eq!(curve.add(&params.gx, &params.gy, &params.gx, &neg_y), identity(), "{id}");
    }
}

#[test]
fn regular_coefficients_match_rfc5639() {
    for (size, a, b) in REGULAR_COEFFICIENTS {
        let params = brainpool::curve(*size, Form::Regular).params();
        assert_eq!(params.a, uint(a), "{}", params.name);
        assert_eq!(params.b, uint(b), "{}", params.name);
    }
}

#[test]
fn forms_share_field_and_order() {
    for size in Size::ALL {
        let regular = brainpool::curve(size, Form::Regular).params();
        let twisted = brainpool::curve(size, Form::Twisted).params();

        assert_eq!(regular.p, twisted.p);
        assert_eq!(regular.n, twisted.n);
        assert_eq!(regular.h, twisted.h);
        assert_eq!(regular.bit_size, size.bits());
        assert_eq!(twisted.a, twisted.p.clone() - 3u32);
    }
}

#[test]
fn base_point_maps_onto_twisted_base_point() {
    let registry = brainpool::registry();

    for size in Size::ALL {
        let regular = registry.regular(size);
        let twisted = registry.twisted(size).params();
        let params = regular.params();
        let iso = regular.isomorphism();

        let (tx, ty) = iso.to_twisted(&params.gx, &params.gy);
        assert_eq!((&tx, &ty), (&twisted.gx, &twisted.gy), "{}", params.name);
        assert_eq!(iso.from_twisted(&tx, &ty), (params.gx.clone(), params.gy.clone()));
    }
}

#[test]
fn isomorphism_scalar_inverse() {
    let registry = brainpool::registry();

    for size in Size::ALL {
        let regular = registry.regular(size);
        let iso = regular.isomorphism();
        let p = &regular.params().p;

        assert_eq!((iso.z() * iso.zinv()) % p, BigUint::from(1u32));
    }
}

#[test]
fn brainpool_p256r1_zinv() {
    let iso = brainpool::registry().regular(Size::P256).isomorphism();
    assert_eq!(
        *iso.zinv(),
        uint(&hex!("80c288a792252fe9479dab9f1bd7ac0ef9affae46c7be171fbb9de0ca79cc962"))
    );
}

#[test]
fn operations_are_deterministic() {
    let curve = brainpool::p384r1();
    let params = curve.params();
    let k = hex!("0123456789abcdef0123456789abcdef");

    let first = curve.scalar_mult(&params.gx, &params.gy, &k);
    let second = curve.scalar_mult(&params.gx, &params.gy, &k);
    assert_eq!(first, second);
    assert_eq!(curve.scalar_base_mult(&k), first);
}

#[test]
fn named_accessors() {
    let accessors: [fn() -> &'static dyn Curve; 14] = [
        brainpool::p160r1,
        brainpool::p160t1,
        brainpool::p192r1,
        brainpool::p192t1,
        brainpool::p224r1,
        brainpool::p224t1,
        brainpool::p256r1,
        brainpool::p256t1,
        brainpool::p320r1,
        brainpool::p320t1,
        brainpool::p384r1,
        brainpool::p384t1,
        brainpool::p512r1,
        brainpool::p512t1,
    ];

    for (accessor, id) in accessors.iter().zip(brainpool::CurveId::all()) {
        assert_eq!(accessor().params().name, id.name());
    }
}
