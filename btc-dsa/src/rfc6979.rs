//! Deterministic ephemeral keys as described in [RFC6979].
//!
//! The nonce is derived from the private key and the message digest with an
//! HMAC-DRBG, so the same `(digest, key, hash)` always yields the same `k`
//! and no entropy source is consulted.
//!
//! Candidates are read with `bits2int`, i.e. as the leftmost `nlen` bits of
//! the generator output, which matters when the order is not a whole number
//! of bytes (secp521r1, small custom curves).
//!
//! [RFC6979]: https://datatracker.ietf.org/doc/html/rfc6979

use crate::{Component, Error, Result, check_scalar, int_from_bits};
use ::rfc6979::HmacDrbg;
use alloc::vec;
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::{Curve, sec1::int_to_octets};

/// Deterministically generate the ephemeral scalar `k` for the message
/// digest `digest` and private key `d`.
///
/// `digest` must be exactly one output block of `D`.
pub fn generate_k<D>(curve: &Curve, digest: &[u8], d: &BigUint) -> Result<BigUint>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    check_scalar(curve, d, Component::PrivateKey)?;
    check_digest_size::<D>(digest)?;
    generate_k_from_int::<D>(curve, &int_from_bits(curve, digest), d)
}

/// Like [`generate_k`], but taking the digest already converted to an
/// integer with [`int_from_bits`].
pub fn generate_k_from_int<D>(curve: &Curve, c: &BigUint, d: &BigUint) -> Result<BigUint>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    check_scalar(curve, d, Component::PrivateKey)?;

    let n = curve.n();
    let size = curve.nsize();
    let x = int_to_octets(d, size)?;
    let h = int_to_octets(&(c % n), size)?;

    let mut hmac_drbg = HmacDrbg::<D>::new(&x, &h, &[]);
    let mut t = vec![0u8; size];

    loop {
        hmac_drbg.fill_bytes(&mut t);
        let k = int_from_bits(curve, &t);

        if !k.is_zero() && &k < n {
            return Ok(k);
        }
    }
}

/// Fail with [`Error::DigestSizeMismatch`] unless `digest` is as long as
/// the output of `D`.
pub(crate) fn check_digest_size<D: Digest>(digest: &[u8]) -> Result<()> {
    let expected = <D as Digest>::output_size();
    if digest.len() == expected {
        Ok(())
    } else {
        Err(Error::DigestSizeMismatch {
            expected,
            actual: digest.len(),
        })
    }
}
