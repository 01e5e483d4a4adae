//! ECDSA signing.
//!
//! Scalar multiplication is arbitrary-precision and variable-time: the
//! time taken to compute `k·G` depends on the nonce. Do not sign where an
//! attacker can measure signing latency.

use crate::{
    Component, Result, Signature, check_scalar, hazmat::sign_prehashed, int_from_bits,
    rfc6979::{self, check_digest_size},
};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use num_bigint::BigUint;
use weierstrass::Curve;

/// Sign `msg` with private key `d`, hashing it with `D` first.
///
/// When `k` is `None` the ephemeral scalar is derived with RFC6979 using the
/// same hash function; an explicit `k` must be in `[1, n-1]`. The signature
/// is always in low-s form.
pub fn sign<D>(curve: &Curve, msg: &[u8], d: &BigUint, k: Option<&BigUint>) -> Result<Signature>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    sign_prehash::<D>(curve, &D::digest(msg), d, k)
}

/// Sign the message digest `digest`, which must be exactly one output of `D`.
pub fn sign_prehash<D>(
    curve: &Curve,
    digest: &[u8],
    d: &BigUint,
    k: Option<&BigUint>,
) -> Result<Signature>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    check_digest_size::<D>(digest)?;
    let c = int_from_bits(curve, digest);
    check_scalar(curve, d, Component::PrivateKey)?;

    match k {
        Some(k) => sign_prehashed(curve, &c, d, k),
        None => {
            let k = rfc6979::generate_k_from_int::<D>(curve, &c, d)?;
            sign_prehashed(curve, &c, d, &k)
        }
    }
}
