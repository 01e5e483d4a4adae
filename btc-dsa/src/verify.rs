//! ECDSA verification.
//!
//! The `*_strict` functions report why a signature was rejected; the others
//! collapse every failure into `false`.

use crate::{
    Result, Signature, hazmat::verify_prehashed, int_from_bits, rfc6979::check_digest_size,
};
use digest::Digest;
use weierstrass::{AffinePoint, Curve};

/// Verify `signature` over `msg`, hashed with `D`, against public key `q`.
pub fn verify<D: Digest>(curve: &Curve, msg: &[u8], q: &AffinePoint, signature: &Signature) -> bool {
    verify_strict::<D>(curve, msg, q, signature).is_ok()
}

/// Like [`verify`], but returning the reason for a rejection.
pub fn verify_strict<D: Digest>(
    curve: &Curve,
    msg: &[u8],
    q: &AffinePoint,
    signature: &Signature,
) -> Result<()> {
    verify_prehash_strict::<D>(curve, &D::digest(msg), q, signature)
}

/// Verify `signature` over the message digest `digest`.
pub fn verify_prehash<D: Digest>(
    curve: &Curve,
    digest: &[u8],
    q: &AffinePoint,
    signature: &Signature,
) -> bool {
    verify_prehash_strict::<D>(curve, digest, q, signature).is_ok()
}

/// Like [`verify_prehash`], but returning the reason for a rejection.
///
/// `digest` must be exactly one output of `D`.
pub fn verify_prehash_strict<D: Digest>(
    curve: &Curve,
    digest: &[u8],
    q: &AffinePoint,
    signature: &Signature,
) -> Result<()> {
    check_digest_size::<D>(digest)?;
    verify_prehashed(curve, &int_from_bits(curve, digest), q, signature)
}

/// Verify a DER-encoded signature over `msg`. A trailing sighash byte is
/// accepted and ignored.
pub fn verify_der<D: Digest>(curve: &Curve, msg: &[u8], q: &AffinePoint, der: &[u8]) -> bool {
    Signature::from_der(curve, der)
        .and_then(|(signature, _)| verify_strict::<D>(curve, msg, q, &signature))
        .is_ok()
}
