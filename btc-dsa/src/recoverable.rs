//! Public key recovery (SEC 1 v2 section 4.1.6).
//!
//! A signature alone does not determine the public key: each `x = r + j·n`
//! for `j` in `[0, h-1]` may be the x-coordinate of the nonce point, and
//! each such `x` has two `y` values. Up to `2h` keys can therefore verify
//! the same `(message, signature)`; [`RecoveredKeys`] yields every one that
//! does, lazily, even `y` before odd `y` and lower `j` first.

use crate::{
    Component, Result, Signature, check_scalar, hazmat::verify_prehashed, int_from_bits,
    rfc6979::check_digest_size,
};
use digest::Digest;
use num_bigint::BigUint;
use weierstrass::{AffinePoint, Curve, mod_inv};

/// Recover the candidate public keys for `signature` over `msg`, hashed
/// with `D`.
pub fn recover<'c, D: Digest>(
    curve: &'c Curve,
    msg: &[u8],
    signature: &Signature,
) -> Result<RecoveredKeys<'c>> {
    recover_prehash::<D>(curve, &D::digest(msg), signature)
}

/// Recover the candidate public keys for `signature` over the message
/// digest `digest`, which must be exactly one output of `D`.
pub fn recover_prehash<'c, D: Digest>(
    curve: &'c Curve,
    digest: &[u8],
    signature: &Signature,
) -> Result<RecoveredKeys<'c>> {
    check_digest_size::<D>(digest)?;
    recover_prehashed(curve, &int_from_bits(curve, digest), signature)
}

/// Recover the candidate public keys for a DER-encoded signature over
/// `msg`. A trailing sighash byte is accepted and ignored.
pub fn recover_der<'c, D: Digest>(
    curve: &'c Curve,
    msg: &[u8],
    der: &[u8],
) -> Result<RecoveredKeys<'c>> {
    let (signature, _) = Signature::from_der(curve, der)?;
    recover::<D>(curve, msg, &signature)
}

/// Recover the candidate public keys for `signature` over the digest
/// integer `c`.
///
/// Only a structurally invalid signature (a scalar outside `[1, n-1]`) is
/// an error; candidates that fail to verify are skipped, so the iterator
/// may be empty.
pub fn recover_prehashed<'c>(
    curve: &'c Curve,
    c: &BigUint,
    signature: &Signature,
) -> Result<RecoveredKeys<'c>> {
    check_scalar(curve, signature.r(), Component::R)?;
    check_scalar(curve, signature.s(), Component::S)?;

    let n = curve.n();
    let r_inv = mod_inv(signature.r(), n)?;
    let r_inv_s = &r_inv * signature.s() % n;
    let r_inv_c = (n - (&r_inv * c % n)) % n;

    Ok(RecoveredKeys {
        curve,
        c: c.clone(),
        signature: signature.clone(),
        r_inv_s,
        r_inv_c,
        j: 0,
        odd: false,
    })
}

/// Lazy sequence of public keys consistent with a signature.
///
/// Returned by [`recover`] and friends.
#[derive(Clone, Debug)]
pub struct RecoveredKeys<'c> {
    curve: &'c Curve,
    c: BigUint,
    signature: Signature,

    /// `r⁻¹·s mod n`
    r_inv_s: BigUint,

    /// `-r⁻¹·c mod n`
    r_inv_c: BigUint,

    /// Next multiple of `n` to add to `r`.
    j: u32,

    /// Whether the next candidate takes the odd root.
    odd: bool,
}

impl RecoveredKeys<'_> {
    #[allow(non_snake_case)]
    fn candidate(&self, j: u32, odd: bool) -> Option<AffinePoint> {
        let curve = self.curve;
        let x = (self.signature.r() + curve.n() * j) % curve.p();

        // x values that are not on the curve are skipped
        let y = curve.y_odd(&x, odd).ok()?;
        let R = AffinePoint::new(x, y);

        // 𝑸 = r⁻¹(𝒔×𝑹 - 𝒄×𝑮)
        let Q = curve
            .double_mul(&self.r_inv_s, &R, &self.r_inv_c, curve.generator())
            .ok()?;
        verify_prehashed(curve, &self.c, &Q, &self.signature).ok()?;
        Some(Q)
    }
}

impl Iterator for RecoveredKeys<'_> {
    type Item = AffinePoint;

    fn next(&mut self) -> Option<AffinePoint> {
        while self.j < self.curve.cofactor() {
            let (j, odd) = (self.j, self.odd);
            if odd {
                self.j += 1;
            }
            self.odd = !odd;

            if let Some(key) = self.candidate(j, odd) {
                return Some(key);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2 * (self.curve.cofactor() - self.j) as usize - self.odd as usize;
        (0, Some(remaining))
    }
}
