//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces.
//!
//! They take the message digest already converted to an integer with
//! [`int_from_bits`](crate::int_from_bits) and, for signing, an explicit
//! ephemeral scalar. Reusing `k` for two different messages under the same
//! key leads to FULL PRIVATE KEY RECOVERY!
//!
//! None of these run in constant time. The point multiplications branch on
//! the bits of `k` and the big-integer operations on the size of their
//! operands, so timing leaks information about the nonce and the key.

use crate::{Component, Error, Result, Signature, check_scalar};
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::{AffinePoint, Curve, mod_inv};

pub use crate::recoverable::recover_prehashed;

/// Sign the digest integer `c` with private key `d` and ephemeral scalar `k`.
///
/// Both `d` and `k` must be in `[1, n-1]`. The returned signature is always
/// in low-s form. `r = 0` or `s = 0` is reported as
/// [`Error::SignatureFailed`] rather than retried, since a deterministic
/// `k` would only produce the same result again.
#[allow(non_snake_case)]
pub fn sign_prehashed(curve: &Curve, c: &BigUint, d: &BigUint, k: &BigUint) -> Result<Signature> {
    check_scalar(curve, d, Component::PrivateKey)?;
    check_scalar(curve, k, Component::Nonce)?;
    let n = curve.n();

    // Compute 𝑹 = 𝑘×𝑮
    let R = curve.mul_generator(k);

    // Reduce the x-coordinate of 𝑹 into the scalar field
    let r = R.x() % n;
    if r.is_zero() {
        return Err(Error::SignatureFailed(Component::R));
    }

    // Compute 𝒔 as a signature over 𝒓 and 𝒄
    let k_inv = mod_inv(k, n)?;
    let s = k_inv * (c + &r * d) % n;
    if s.is_zero() {
        return Err(Error::SignatureFailed(Component::S));
    }

    Ok(Signature { r, s }.normalize_s(curve))
}

/// Verify `signature` over the digest integer `c` against public key `q`.
///
/// Fails with [`Error::InvalidRange`] for out-of-range scalars,
/// [`Error::InvalidPoint`] for a public key that is off the curve or the
/// point at infinity, and [`Error::VerificationFailed`] otherwise.
#[allow(non_snake_case)]
pub fn verify_prehashed(
    curve: &Curve,
    c: &BigUint,
    q: &AffinePoint,
    signature: &Signature,
) -> Result<()> {
    let (r, s) = (signature.r(), signature.s());
    check_scalar(curve, r, Component::R)?;
    check_scalar(curve, s, Component::S)?;

    if q.is_identity() || !curve.is_on_curve(q) {
        return Err(Error::InvalidPoint);
    }

    let n = curve.n();
    let s_inv = mod_inv(s, n)?;
    let u1 = c * &s_inv % n;
    let u2 = r * &s_inv % n;

    // Compute 𝑹 = 𝑢₁×𝑮 + 𝑢₂×𝑸
    let R = curve.double_mul(&u1, curve.generator(), &u2, q)?;
    if R.is_identity() {
        return Err(Error::VerificationFailed);
    }

    if &(R.x() % n) == r {
        Ok(())
    } else {
        Err(Error::VerificationFailed)
    }
}

#[cfg(all(test, feature = "named-curves"))]
mod tests {
    use super::{sign_prehashed, verify_prehashed};
    use crate::{Component, Error, Signature};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use weierstrass::{AffinePoint, secp256k1};

    fn big(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    /// Explicit-nonce vector: d, k, digest, r, s.
    const D: [u8; 32] = hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f");
    const K: [u8; 32] = hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a");
    const M: [u8; 32] = hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a");
    const R: [u8; 32] = hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795");
    const S: [u8; 32] = hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e");

    #[test]
    fn explicit_nonce_vector() {
        let curve = secp256k1();
        let sig = sign_prehashed(curve, &big(&M), &big(&D), &big(&K)).unwrap();
        assert_eq!(sig.r(), &big(&R));
        assert_eq!(sig.s(), &big(&S));

        let q = curve.mul_generator(&big(&D));
        assert_eq!(
            q.x(),
            &big(&hex!(
                "779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"
            ))
        );
        verify_prehashed(curve, &big(&M), &q, &sig).unwrap();
    }

    #[test]
    fn high_s_still_verifies() {
        let curve = secp256k1();
        let q = curve.mul_generator(&big(&D));
        let high = Signature {
            r: big(&R),
            s: curve.n() - big(&S),
        };
        assert!(!high.is_low_s(curve));
        verify_prehashed(curve, &big(&M), &q, &high).unwrap();
    }

    #[test]
    fn nonce_out_of_range() {
        let curve = secp256k1();
        for k in [BigUint::from(0u8), curve.n().clone()] {
            assert_eq!(
                sign_prehashed(curve, &big(&M), &big(&D), &k),
                Err(Error::InvalidRange(Component::Nonce))
            );
        }
    }

    #[test]
    fn private_key_out_of_range() {
        let curve = secp256k1();
        assert_eq!(
            sign_prehashed(curve, &big(&M), curve.n(), &big(&K)),
            Err(Error::InvalidRange(Component::PrivateKey))
        );
    }

    #[test]
    fn s_zero_is_reported() {
        // c = -r·d (mod n) makes s vanish
        let curve = secp256k1();
        let n = curve.n();
        let r = curve.mul_generator(&big(&K)).x() % n;
        let c = (n - (&r * big(&D) % n)) % n;
        assert_eq!(
            sign_prehashed(curve, &c, &big(&D), &big(&K)),
            Err(Error::SignatureFailed(Component::S))
        );
    }

    #[test]
    fn rejects_bad_public_keys() {
        let curve = secp256k1();
        let sig = Signature {
            r: big(&R),
            s: big(&S),
        };

        assert_eq!(
            verify_prehashed(curve, &big(&M), &AffinePoint::identity(), &sig),
            Err(Error::InvalidPoint)
        );

        let off_curve = AffinePoint::new(BigUint::from(1u8), BigUint::from(1u8));
        assert_eq!(
            verify_prehashed(curve, &big(&M), &off_curve, &sig),
            Err(Error::InvalidPoint)
        );
    }

    #[test]
    fn rejects_wrong_digest() {
        let curve = secp256k1();
        let q = curve.mul_generator(&big(&D));
        let sig = Signature {
            r: big(&R),
            s: big(&S),
        };
        assert_eq!(
            verify_prehashed(curve, &(big(&M) + 1u32), &q, &sig),
            Err(Error::VerificationFailed)
        );
    }

    #[test]
    fn out_of_range_signature() {
        let curve = secp256k1();
        let q = curve.mul_generator(&big(&D));
        let sig = Signature {
            r: curve.n().clone(),
            s: big(&S),
        };
        assert_eq!(
            verify_prehashed(curve, &big(&M), &q, &sig),
            Err(Error::InvalidRange(Component::R))
        );
    }
}
