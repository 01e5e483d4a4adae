//! Named curves from SEC 2.

use crate::Curve;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

fn build(p: &[u8], a: &[u8], b: &[u8], gx: &[u8], gy: &[u8], n: &[u8]) -> Curve {
    Curve::from_parts(
        BigUint::from_bytes_be(p),
        BigUint::from_bytes_be(a),
        BigUint::from_bytes_be(b),
        (BigUint::from_bytes_be(gx), BigUint::from_bytes_be(gy)),
        BigUint::from_bytes_be(n),
        1,
    )
}

static SECP256K1: Lazy<Curve> = Lazy::new(|| {
    build(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
        &hex!("00"),
        &hex!("07"),
        &hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        &hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    )
});

static SECP256R1: Lazy<Curve> = Lazy::new(|| {
    build(
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
        &hex!("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        &hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        &hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        &hex!("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
    )
});

static SECP384R1: Lazy<Curve> = Lazy::new(|| {
    build(
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE"
            "FFFFFFFF0000000000000000FFFFFFFF"
        ),
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE"
            "FFFFFFFF0000000000000000FFFFFFFC"
        ),
        &hex!(
            "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875A"
            "C656398D8A2ED19D2A85C8EDD3EC2AEF"
        ),
        &hex!(
            "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A38"
            "5502F25DBF55296C3A545E3872760AB7"
        ),
        &hex!(
            "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C0"
            "0A60B1CE1D7E819D7A431D7C90EA0E5F"
        ),
        &hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF"
            "581A0DB248B0A77AECEC196ACCC52973"
        ),
    )
});

static SECP521R1: Lazy<Curve> = Lazy::new(|| {
    build(
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFF"
        ),
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFC"
        ),
        &hex!(
            "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF1"
            "09E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B50"
            "3F00"
        ),
        &hex!(
            "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D"
            "3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5"
            "BD66"
        ),
        &hex!(
            "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E"
            "662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD1"
            "6650"
        ),
        &hex!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
            "FFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E9138"
            "6409"
        ),
    )
});

/// secp256k1, the Bitcoin curve.
pub fn secp256k1() -> &'static Curve {
    &SECP256K1
}

/// secp256r1, a.k.a. NIST P-256.
pub fn secp256r1() -> &'static Curve {
    &SECP256R1
}

/// secp384r1, a.k.a. NIST P-384.
pub fn secp384r1() -> &'static Curve {
    &SECP384R1
}

/// secp521r1, a.k.a. NIST P-521.
pub fn secp521r1() -> &'static Curve {
    &SECP521R1
}

/// Look up a named curve by its SEC 2 or NIST name.
pub fn named_curve(name: &str) -> Option<&'static Curve> {
    match name {
        "secp256k1" => Some(secp256k1()),
        "secp256r1" | "prime256v1" | "P-256" => Some(secp256r1()),
        "secp384r1" | "P-384" => Some(secp384r1()),
        "secp521r1" | "P-521" => Some(secp521r1()),
        _ => None,
    }
}
