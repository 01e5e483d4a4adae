//! End-to-end signing, verification and recovery.

use btc_dsa::{BigUint, Component, Curve, Error, Signature, recover, sign, verify, verify_der};
use sha2::Sha256;

/// `y² = x³ + 5x + 11` over `GF(1009)`: 1004 points, `G` of order 251.
fn toy_curve() -> Curve {
    Curve::new(
        BigUint::from(1009u32),
        BigUint::from(5u32),
        BigUint::from(11u32),
        (BigUint::from(845u32), BigUint::from(265u32)),
        BigUint::from(251u32),
        4,
    )
    .unwrap()
}

#[test]
fn custom_curve_with_cofactor() {
    let curve = toy_curve();
    let mut failed = Vec::new();

    for d in 1u32..251 {
        let key = BigUint::from(d);
        let q = curve.mul_generator(&key);
        let sig = match sign::<Sha256>(&curve, b"toy", &key, None) {
            Ok(sig) => sig,
            Err(err) => {
                assert_eq!(err, Error::SignatureFailed(Component::S));
                failed.push(d);
                continue;
            }
        };

        assert!(sig.is_low_s(&curve));
        assert!(verify::<Sha256>(&curve, b"toy", &q, &sig));

        let keys: Vec<_> = recover::<Sha256>(&curve, b"toy", &sig).unwrap().collect();
        assert!(keys.contains(&q));
        assert!(keys.len() <= 8);
    }

    // with n = 251 a deterministic nonce occasionally yields s = 0
    assert_eq!(failed, [202, 241]);
}

#[test]
fn recover_from_der_on_custom_curve() {
    let curve = toy_curve();
    let d = BigUint::from(7u8);
    let sig = sign::<Sha256>(&curve, b"hello", &d, None).unwrap();
    let der = sig.to_der(Some(0x01)).unwrap();

    let keys: Vec<_> = btc_dsa::recover_der::<Sha256>(&curve, b"hello", &der)
        .unwrap()
        .collect();
    assert_eq!(keys.len(), 4);
    assert!(keys.contains(&curve.mul_generator(&d)));
    assert!(verify_der::<Sha256>(&curve, b"hello", &keys[0], &der));
}

#[test]
fn rejects_custom_curve_out_of_range() {
    let curve = toy_curve();
    assert_eq!(
        Signature::from_scalars(&curve, BigUint::from(251u32), BigUint::from(1u8)),
        Err(Error::InvalidRange(Component::R))
    );
    assert_eq!(
        sign::<Sha256>(&curve, b"toy", &BigUint::from(251u32), None),
        Err(Error::InvalidRange(Component::PrivateKey))
    );
}

#[cfg(feature = "named-curves")]
mod named {
    use super::*;
    use btc_dsa::AffinePoint;
    use btc_dsa::weierstrass::{named_curve, secp256k1};
    use hex_literal::hex;
    use proptest::prelude::*;
    use sha2::{Sha384, Sha512};

    const SECRET: [u8; 32] = hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f");

    fn point(x: &[u8], y: &[u8]) -> AffinePoint {
        AffinePoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
    }

    #[test]
    fn secp256k1_recovery() {
        let curve = secp256k1();
        let d = BigUint::from_bytes_be(&SECRET);
        let sig = sign::<Sha256>(curve, b"hello", &d, None).unwrap();
        assert_eq!(
            sig.to_bytes(curve).unwrap(),
            hex!(
                "b083693fec62f5f51e833ad8e0d0d6eb549bf5fa43bf3722916e3574244c79ca"
                "062ce2a0b115c42ffd6a68073a2294526976ce30f1d9d5fb49db97f546652172"
            )
        );

        let keys: Vec<_> = recover::<Sha256>(curve, b"hello", &sig).unwrap().collect();
        assert_eq!(
            keys,
            [
                point(
                    &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
                    &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
                ),
                point(
                    &hex!("960a309c99d0fe80e77449398e3957e8090ae90605086ff924eed15cd752e73e"),
                    &hex!("c4ebb870d6f1939742cb0348fd26b026ea1a7b9e88bcbe168ef1989dcc867c52"),
                ),
            ]
        );
    }

    /// `x = 5` is not on secp256k1 and the cofactor is 1, so nothing is
    /// recovered.
    #[test]
    fn empty_recovery() {
        let curve = secp256k1();
        let sig = Signature::from_scalars(curve, BigUint::from(5u8), BigUint::from(1u8)).unwrap();
        assert_eq!(recover::<Sha256>(curve, b"hello", &sig).unwrap().count(), 0);
    }

    #[test]
    fn every_named_curve() {
        for name in ["secp256k1", "secp256r1", "secp384r1", "secp521r1"] {
            let curve = named_curve(name).unwrap();
            let d = BigUint::from_bytes_be(&SECRET);
            let q = curve.mul_generator(&d);

            let sig = sign::<Sha256>(curve, b"hello", &d, None).unwrap();
            assert!(verify::<Sha256>(curve, b"hello", &q, &sig), "{name}");

            let sig = sign::<Sha384>(curve, b"hello", &d, None).unwrap();
            assert!(verify::<Sha384>(curve, b"hello", &q, &sig), "{name}");

            let sig = sign::<Sha512>(curve, b"hello", &d, None).unwrap();
            assert!(verify::<Sha512>(curve, b"hello", &q, &sig), "{name}");
            assert!(
                recover::<Sha512>(curve, b"hello", &sig)
                    .unwrap()
                    .any(|key| key == q),
                "{name}"
            );
        }
    }

    proptest! {
        #[test]
        fn sign_verify_recover(d in 1u64.., msg in any::<Vec<u8>>()) {
            let curve = secp256k1();
            let d = BigUint::from(d);
            let q = curve.mul_generator(&d);
            let sig = sign::<Sha256>(curve, &msg, &d, None).unwrap();

            prop_assert!(verify::<Sha256>(curve, &msg, &q, &sig));
            prop_assert!(verify_der::<Sha256>(curve, &msg, &q, &sig.to_der(None).unwrap()));

            let keys: Vec<_> = recover::<Sha256>(curve, &msg, &sig).unwrap().collect();
            prop_assert!(!keys.is_empty() && keys.len() <= 2);
            prop_assert!(keys.contains(&q));
        }
    }
}
