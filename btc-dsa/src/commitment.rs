//! ECDSA sign-to-contract.
//!
//! A signature already carries a curve point, so it can double as a
//! commitment to arbitrary data. The signer draws the usual nonce `k` with
//! `R = k·G`, then signs with the tweaked nonce
//!
//! ```text
//! e  = int_from_bits(hash(R || hash(contract))) mod n
//! k' = k + e mod n
//! ```
//!
//! whose nonce point is `W = R + e·G`. Publishing the [`Receipt`] `(r, R)`
//! lets anyone check that `W.x mod n = r`, i.e. that the signature commits
//! to `contract`, while the signature itself verifies as plain ECDSA.

use crate::{
    Component, Result, Signature, check_scalar, hazmat::sign_prehashed, int_from_bits,
    rfc6979::generate_k_from_int,
};
use alloc::vec::Vec;
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use num_bigint::BigUint;
use weierstrass::{AffinePoint, Curve, sec1::bytes_from_point};

/// Opening of a sign-to-contract commitment: the signature's `r` and the
/// untweaked nonce point `R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    r: BigUint,
    point: AffinePoint,
}

impl Receipt {
    /// Assemble a receipt from its parts.
    pub fn new(r: BigUint, point: AffinePoint) -> Self {
        Self { r, point }
    }

    /// The `r` value of the committing signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The nonce point before tweaking.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }
}

/// Sign `msg` with private key `d` while committing to `contract`.
///
/// `k` is the untweaked nonce; when `None` it is derived with RFC6979 as in
/// [`sign`](crate::sign).
#[allow(non_snake_case)]
pub fn sign_to_contract<D>(
    curve: &Curve,
    msg: &[u8],
    d: &BigUint,
    contract: &[u8],
    k: Option<&BigUint>,
) -> Result<(Signature, Receipt)>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    check_scalar(curve, d, Component::PrivateKey)?;
    let c = int_from_bits(curve, &D::digest(msg));

    let k = match k {
        Some(k) => {
            check_scalar(curve, k, Component::Nonce)?;
            k.clone()
        }
        None => generate_k_from_int::<D>(curve, &c, d)?,
    };

    let R = curve.mul_generator(&k);
    let e = tweak::<D>(curve, &R, contract)?;
    let signature = sign_prehashed(curve, &c, d, &((k + e) % curve.n()))?;

    let receipt = Receipt::new(signature.r().clone(), R);
    Ok((signature, receipt))
}

/// Check that `receipt` opens a commitment to `contract`.
///
/// Receipts whose point is off the curve or the point at infinity are
/// rejected.
#[allow(non_snake_case)]
pub fn verify_commit<D: Digest>(curve: &Curve, contract: &[u8], receipt: &Receipt) -> bool {
    let R = receipt.point();
    let Ok(e) = tweak::<D>(curve, R, contract) else {
        return false;
    };

    match curve.add(R, &curve.mul_generator(&e)) {
        Ok(W) if !W.is_identity() => &(W.x() % curve.n()) == receipt.r(),
        _ => false,
    }
}

/// `int_from_bits(hash(R || hash(contract))) mod n`, with `R` SEC1-compressed.
#[allow(non_snake_case)]
fn tweak<D: Digest>(curve: &Curve, R: &AffinePoint, contract: &[u8]) -> Result<BigUint> {
    let mut preimage: Vec<u8> = bytes_from_point(curve, R, true)?;
    preimage.extend_from_slice(&D::digest(contract));
    Ok(int_from_bits(curve, &D::digest(&preimage)) % curve.n())
}
