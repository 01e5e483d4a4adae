//! Point arithmetic tests against known multiples of the base point.

#![cfg(feature = "named-curves")]

use hex_literal::hex;
use weierstrass::{AffinePoint, BigUint, Error, sec1, secp256k1, secp256r1};

const COMPRESSED_P256_BASEPOINT: &[u8] =
    &hex!("03 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296");

/// `(k, x, y)` for `k·G` on secp256k1.
const SECP256K1_MULTIPLES: &[(u8, [u8; 32], [u8; 32])] = &[
    (
        2,
        hex!("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
        hex!("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
    ),
    (
        3,
        hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"),
        hex!("388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"),
    ),
];

fn point(x: &[u8], y: &[u8]) -> AffinePoint {
    AffinePoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
}

#[test]
fn small_multiples() {
    let curve = secp256k1();
    for (k, x, y) in SECP256K1_MULTIPLES {
        let expected = point(x, y);
        assert_eq!(curve.mul_generator(&BigUint::from(*k)), expected);
        assert_eq!(
            curve
                .mul(&BigUint::from(*k), curve.generator())
                .unwrap(),
            expected
        );
    }
}

#[test]
fn order_minus_one_is_negation() {
    let curve = secp256k1();
    let minus_g = curve.mul_generator(&(curve.n() - 1u32));
    assert_eq!(minus_g, curve.negate(curve.generator()));
    assert_eq!(
        minus_g.y(),
        &BigUint::from_bytes_be(&hex!(
            "B7C52588D95C3B9AA25B0403F1EEF75702E84BB7597AABE663B82F6F04EF2777"
        ))
    );
}

#[test]
fn shamir_matches_sum() {
    let curve = secp256k1();
    let two_g = curve.mul_generator(&BigUint::from(2u8));
    // 5·G + 3·(2·G) = 11·G
    let sum = curve
        .double_mul(&BigUint::from(5u8), curve.generator(), &BigUint::from(3u8), &two_g)
        .unwrap();
    assert_eq!(sum, curve.mul_generator(&BigUint::from(11u8)));

    // G + (n-1)·G = O
    let zero = curve
        .double_mul(
            &BigUint::from(1u8),
            curve.generator(),
            &(curve.n() - 1u32),
            curve.generator(),
        )
        .unwrap();
    assert!(zero.is_identity());
}

#[test]
fn p256_compressed_basepoint() {
    let curve = secp256r1();
    let g = sec1::point_from_octets(curve, COMPRESSED_P256_BASEPOINT).unwrap();
    assert_eq!(&g, curve.generator());
    assert_eq!(
        sec1::bytes_from_point(curve, &g, true).unwrap(),
        COMPRESSED_P256_BASEPOINT
    );
}

#[test]
fn p256_doubling_uses_minus_three() {
    let curve = secp256r1();
    let g = curve.generator();
    let doubled = curve.double(g).unwrap();
    assert!(curve.is_on_curve(&doubled));
    assert_eq!(doubled, curve.add(g, g).unwrap());
    assert_eq!(
        curve.add(&doubled, g).unwrap(),
        curve.mul_generator(&BigUint::from(3u8))
    );
}

#[test]
fn x_without_root() {
    let curve = secp256k1();
    assert_eq!(curve.y_even(&BigUint::from(5u8)), Err(Error::InvalidX));
    assert!(curve.y_even(&BigUint::from(1u8)).is_ok());
}
