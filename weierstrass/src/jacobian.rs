//! Points in Jacobian coordinates: `(X, Y, Z)` represents `(X/Z², Y/Z³)`.

use crate::{AffinePoint, Curve, CurveKind, field::sub_mod};
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl JacobianPoint {
    /// Point at infinity, `Z = 0`.
    pub fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn to_affine(&self, curve: &Curve) -> AffinePoint {
        if self.is_identity() {
            return AffinePoint::identity();
        }

        let p = curve.p();
        // Z is non-zero modulo the prime p, so Fermat gives its inverse
        let z_inv = self.z.modpow(&(p - 2u32), p);
        let z_inv2 = &z_inv * &z_inv % p;
        let x = &self.x * &z_inv2 % p;
        let y = &self.y * z_inv2 % p * z_inv % p;
        AffinePoint::new(x, y)
    }

    pub fn double(&self, curve: &Curve) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }

        let p = curve.p();
        let xx = &self.x * &self.x % p;
        let yy = &self.y * &self.y % p;
        let yyyy = &yy * &yy % p;

        // S = 4*X*Y^2
        let s = BigUint::from(4u32) * &self.x * &yy % p;

        // M = 3*X^2 + a*Z^4
        let m = match curve.kind() {
            CurveKind::Zero => BigUint::from(3u32) * xx % p,
            CurveKind::Minus3 => {
                let zz = &self.z * &self.z % p;
                BigUint::from(3u32) * (&self.x + &zz) % p * sub_mod(&self.x, &zz, p) % p
            }
            CurveKind::General => {
                let zz = &self.z * &self.z % p;
                let zzzz = &zz * &zz % p;
                (BigUint::from(3u32) * xx + curve.a() * zzzz) % p
            }
        };

        let x3 = sub_mod(&(&m * &m % p), &(BigUint::from(2u32) * &s % p), p);
        let y3 = sub_mod(
            &(&m * sub_mod(&s, &x3, p) % p),
            &(BigUint::from(8u32) * yyyy % p),
            p,
        );
        let z3 = BigUint::from(2u32) * &self.y * &self.z % p;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add(&self, other: &Self, curve: &Curve) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let p = curve.p();
        let z1z1 = &self.z * &self.z % p;
        let z2z2 = &other.z * &other.z % p;
        let u1 = &self.x * &z2z2 % p;
        let u2 = &other.x * &z1z1 % p;
        let s1 = &self.y * &other.z % p * &z2z2 % p;
        let s2 = &other.y * &self.z % p * &z1z1 % p;

        if u1 == u2 {
            return if s1 == s2 {
                self.double(curve)
            } else {
                Self::identity()
            };
        }

        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);
        let hh = &h * &h % p;
        let hhh = &h * &hh % p;
        let v = &u1 * &hh % p;

        let x3 = sub_mod(
            &sub_mod(&(&r * &r % p), &hhh, p),
            &(BigUint::from(2u32) * &v % p),
            p,
        );
        let y3 = sub_mod(
            &(&r * sub_mod(&v, &x3, p) % p),
            &(&s1 * &hhh % p),
            p,
        );
        let z3 = &self.z * &other.z % p * &h % p;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Left-to-right double-and-add. Variable-time in `k`.
    pub fn mul(&self, k: &BigUint, curve: &Curve) -> Self {
        let mut acc = Self::identity();
        for byte in k.to_bytes_be() {
            for i in (0..8).rev() {
                acc = acc.double(curve);
                if (byte >> i) & 1 == 1 {
                    acc = acc.add(self, curve);
                }
            }
        }
        acc
    }

    /// `u*H + v*Q` using Shamir's trick.
    pub fn double_mul(u: &BigUint, h: &Self, v: &BigUint, q: &Self, curve: &Curve) -> Self {
        let u_bytes = u.to_bytes_be();
        let v_bytes = v.to_bytes_be();
        let width = u_bytes.len().max(v_bytes.len());
        let u_bytes = left_pad(&u_bytes, width);
        let v_bytes = left_pad(&v_bytes, width);
        let hq = h.add(q, curve);

        let mut acc = Self::identity();
        for (ub, vb) in u_bytes.iter().zip(v_bytes.iter()) {
            for i in (0..8).rev() {
                acc = acc.double(curve);
                match ((ub >> i) & 1, (vb >> i) & 1) {
                    (1, 1) => acc = acc.add(&hq, curve),
                    (1, 0) => acc = acc.add(h, curve),
                    (0, 1) => acc = acc.add(q, curve),
                    _ => (),
                }
            }
        }
        acc
    }
}

impl From<&AffinePoint> for JacobianPoint {
    fn from(p: &AffinePoint) -> Self {
        if p.is_identity() {
            return Self::identity();
        }

        Self {
            x: p.x.clone(),
            y: p.y.clone(),
            z: BigUint::one(),
        }
    }
}

fn left_pad(bytes: &[u8], width: usize) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0u8; width - bytes.len()];
    out.extend_from_slice(bytes);
    out
}
