//! Prime field helpers over arbitrary-precision integers.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Inverse of `a` modulo `m`.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::NotInvertible);
    }
    a.modinv(m).ok_or(Error::NotInvertible)
}

/// Square root of `a` modulo the odd prime `p`.
///
/// Uses `a^((p+1)/4)` when `p ≡ 3 (mod 4)` and Tonelli-Shanks otherwise.
/// Returns [`Error::InvalidX`] when `a` is a quadratic non-residue, since the
/// only caller-visible use is recovering `y` from `x`. A modulus below 3 or
/// even is [`Error::InvalidParameters`]; a composite modulus for which no
/// root can be found is reported as [`Error::InvalidX`].
pub fn mod_sqrt(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    if p < &BigUint::from(3u32) || p.is_even() {
        return Err(Error::InvalidParameters("modulus must be an odd prime"));
    }

    let a = a % p;
    if a.is_zero() {
        return Ok(a);
    }

    let one = BigUint::one();
    let p_minus_1 = p - &one;
    let legendre_exp = &p_minus_1 >> 1u32;

    // Euler's criterion
    if a.modpow(&legendre_exp, p) != one {
        return Err(Error::InvalidX);
    }

    if (p % 4u32) == BigUint::from(3u32) {
        let root = a.modpow(&((p + &one) >> 2u32), p);
        return if &root * &root % p == a {
            Ok(root)
        } else {
            Err(Error::InvalidX)
        };
    }

    // p - 1 = q * 2^e with q odd
    let mut q = p_minus_1.clone();
    let mut e = 0u32;
    while q.is_even() {
        q >>= 1u32;
        e += 1;
    }

    // a prime modulus always has a non-residue below it
    let mut z = BigUint::from(2u32);
    while z.modpow(&legendre_exp, p) != p_minus_1 {
        z += 1u32;
        if &z >= p {
            return Err(Error::InvalidX);
        }
    }

    let mut m = e;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) >> 1u32), p);

    while !t.is_one() {
        let mut i = 0u32;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = &t2 * &t2 % p;
            i += 1;
            if i >= m {
                return Err(Error::InvalidX);
            }
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    Ok(r)
}

/// `(a - b) mod p` for `a, b < p`.
#[inline]
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    if a >= b { a - b } else { p - (b - a) }
}

/// `a` left-padded with zeroes to `size` big-endian bytes.
pub(crate) fn to_padded_bytes(a: &BigUint, size: usize) -> Option<alloc::vec::Vec<u8>> {
    let bytes = if a.is_zero() {
        alloc::vec::Vec::new()
    } else {
        a.to_bytes_be()
    };

    if bytes.len() > size {
        return None;
    }

    let mut out = alloc::vec![0u8; size - bytes.len()];
    out.extend_from_slice(&bytes);
    Some(out)
}
