//! Digest-to-integer conversion (SEC 1 v2 section 4.1.3 step 5, RFC6979
//! section 2.3.2).

use num_bigint::BigUint;
use weierstrass::Curve;

/// Interpret the leftmost `nlen` bits of `bytes` as a big-endian integer,
/// where `nlen` is the bit length of the curve order.
///
/// Truncation happens at the bit level: a 66-byte input on a 521-bit curve
/// loses its 7 lowest bits. Shorter inputs are used whole. The result is not
/// reduced modulo `n`.
pub fn int_from_bits(curve: &Curve, bytes: &[u8]) -> BigUint {
    let i = BigUint::from_bytes_be(bytes);
    let bits = bytes.len() * 8;
    let nlen = curve.nlen();

    if bits > nlen { i >> (bits - nlen) } else { i }
}
