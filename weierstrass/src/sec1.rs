//! Octet-string encodings from SEC 1 v2 section 2.3.

use crate::{AffinePoint, Curve, Error, Result, field::to_padded_bytes};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_integer::Integer;

/// Tag byte for a compressed point with even `y`.
pub const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;

/// Tag byte for a compressed point with odd `y`.
pub const TAG_COMPRESSED_ODD_Y: u8 = 0x03;

/// Tag byte for an uncompressed point.
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Integer-to-octet-string conversion with a fixed output width.
pub fn int_to_octets(i: &BigUint, size: usize) -> Result<Vec<u8>> {
    to_padded_bytes(i, size).ok_or(Error::InvalidEncoding("integer too large"))
}

/// Encode a finite point as `02/03 || x` or `04 || x || y`.
pub fn bytes_from_point(curve: &Curve, q: &AffinePoint, compressed: bool) -> Result<Vec<u8>> {
    if q.is_identity() {
        return Err(Error::IdentityPoint);
    }
    curve.require_on_curve(q)?;

    let size = curve.psize();
    let mut out = Vec::with_capacity(if compressed { 1 + size } else { 1 + 2 * size });
    if compressed {
        out.push(if q.y().is_odd() {
            TAG_COMPRESSED_ODD_Y
        } else {
            TAG_COMPRESSED_EVEN_Y
        });
        out.extend_from_slice(&int_to_octets(q.x(), size)?);
    } else {
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&int_to_octets(q.x(), size)?);
        out.extend_from_slice(&int_to_octets(q.y(), size)?);
    }
    Ok(out)
}

/// Decode a compressed or uncompressed point, checking it lies on `curve`.
///
/// The point at infinity (a lone `00` byte) is rejected.
pub fn point_from_octets(curve: &Curve, bytes: &[u8]) -> Result<AffinePoint> {
    let size = curve.psize();
    let (tag, body) = bytes
        .split_first()
        .ok_or(Error::InvalidEncoding("empty point encoding"))?;

    match *tag {
        TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y => {
            if body.len() != size {
                return Err(Error::InvalidEncoding("wrong compressed point size"));
            }
            let x = BigUint::from_bytes_be(body);
            let y = curve.y_odd(&x, *tag == TAG_COMPRESSED_ODD_Y)?;
            Ok(AffinePoint::new(x, y))
        }
        TAG_UNCOMPRESSED => {
            if body.len() != 2 * size {
                return Err(Error::InvalidEncoding("wrong uncompressed point size"));
            }
            let (x, y) = body.split_at(size);
            let q = AffinePoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));
            curve.require_on_curve(&q)?;
            Ok(q)
        }
        0x00 if body.is_empty() => Err(Error::IdentityPoint),
        _ => Err(Error::InvalidEncoding("unknown point tag")),
    }
}
