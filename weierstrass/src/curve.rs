//! Curve domain parameters and the group law.

use crate::{
    AffinePoint, Error, Result,
    field::{mod_sqrt, sub_mod},
    jacobian::JacobianPoint,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Special cases of the `a` coefficient with cheaper doubling formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// `a = 0`, e.g. secp256k1.
    Zero,

    /// `a = -3`, e.g. the NIST P-curves.
    Minus3,

    /// Any other `a`.
    General,
}

/// Domain parameters of the curve `y² = x³ + ax + b` over `GF(p)`, with a
/// generator `G` of prime order `n` and cofactor `h`.
///
/// A `Curve` is immutable once constructed and is shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: AffinePoint,
    n: BigUint,
    h: u32,
    kind: CurveKind,
    psize: usize,
    nsize: usize,
    nlen: usize,
}

impl Curve {
    /// Validate and build domain parameters.
    ///
    /// Checks that `p` is odd and greater than 3, that `a` and `b` are
    /// reduced, that the curve is non-singular, that `G` is a finite point on
    /// the curve and that `n·G` is the point at infinity. Primality of `p`
    /// and `n` is the caller's responsibility.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        n: BigUint,
        h: u32,
    ) -> Result<Self> {
        if p <= BigUint::from(3u32) || p.is_even() {
            return Err(Error::InvalidParameters(
                "field modulus must be an odd prime greater than 3",
            ));
        }
        if a >= p || b >= p {
            return Err(Error::InvalidParameters(
                "curve coefficients must be reduced modulo p",
            ));
        }

        // 4a^3 + 27b^2 != 0 (mod p)
        let discriminant = (BigUint::from(4u32) * a.modpow(&BigUint::from(3u32), &p)
            + BigUint::from(27u32) * &b * &b)
            % &p;
        if discriminant.is_zero() {
            return Err(Error::InvalidParameters("singular curve"));
        }
        if n <= BigUint::one() {
            return Err(Error::InvalidParameters(
                "group order must be greater than one",
            ));
        }
        if h == 0 {
            return Err(Error::InvalidParameters("cofactor must be positive"));
        }

        let curve = Self::from_parts(p, a, b, generator, n, h);
        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::InvalidParameters("generator is not on the curve"));
        }
        if !curve.mul_generator(&curve.n).is_identity() {
            return Err(Error::InvalidParameters(
                "generator does not have order n",
            ));
        }

        Ok(curve)
    }

    /// Build domain parameters known to be valid.
    pub(crate) fn from_parts(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        n: BigUint,
        h: u32,
    ) -> Self {
        let kind = if a.is_zero() {
            CurveKind::Zero
        } else if &a + 3u32 == p {
            CurveKind::Minus3
        } else {
            CurveKind::General
        };

        let psize = (p.bits() as usize).div_ceil(8);
        let nlen = n.bits() as usize;
        let nsize = nlen.div_ceil(8);

        Self {
            p,
            a,
            b,
            generator: AffinePoint::new(generator.0, generator.1),
            n,
            h,
            kind,
            psize,
            nsize,
            nlen,
        }
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.h
    }

    /// Shape of the `a` coefficient.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Byte length of a field element.
    pub fn psize(&self) -> usize {
        self.psize
    }

    /// Byte length of a scalar.
    pub fn nsize(&self) -> usize {
        self.nsize
    }

    /// Bit length of the group order.
    pub fn nlen(&self) -> usize {
        self.nlen
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod p`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x2 = x * x % p;
        (x2 * x + &self.a * x + &self.b) % p
    }

    /// Does `q` satisfy the curve equation? The identity is always accepted.
    pub fn is_on_curve(&self, q: &AffinePoint) -> bool {
        if q.is_identity() {
            return true;
        }
        if q.x >= self.p || q.y >= self.p {
            return false;
        }
        &q.y * &q.y % &self.p == self.rhs(&q.x)
    }

    /// Like [`Curve::is_on_curve`], but returning an error.
    pub fn require_on_curve(&self, q: &AffinePoint) -> Result<()> {
        if self.is_on_curve(q) {
            Ok(())
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// One of the two `y` values for `x`, with no parity guarantee.
    pub fn y(&self, x: &BigUint) -> Result<BigUint> {
        if x >= &self.p {
            return Err(Error::InvalidX);
        }
        mod_sqrt(&self.rhs(x), &self.p)
    }

    /// The `y` value of `x` with the requested parity.
    ///
    /// When `y = 0` there is a single (even) root; asking for the odd root
    /// of such an `x` is an error.
    pub fn y_odd(&self, x: &BigUint, odd: bool) -> Result<BigUint> {
        let root = self.y(x)?;
        if root.is_zero() {
            return if odd { Err(Error::InvalidX) } else { Ok(root) };
        }
        if root.is_odd() == odd {
            Ok(root)
        } else {
            Ok(&self.p - root)
        }
    }

    /// The even `y` value of `x`.
    pub fn y_even(&self, x: &BigUint) -> Result<BigUint> {
        self.y_odd(x, false)
    }

    /// `-Q`.
    pub fn negate(&self, q: &AffinePoint) -> AffinePoint {
        if q.is_identity() {
            return AffinePoint::identity();
        }
        AffinePoint::new(q.x.clone(), sub_mod(&BigUint::zero(), &q.y, &self.p))
    }

    /// `P + Q`.
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        self.require_on_curve(p)?;
        self.require_on_curve(q)?;
        Ok(JacobianPoint::from(p)
            .add(&JacobianPoint::from(q), self)
            .to_affine(self))
    }

    /// `2Q`.
    pub fn double(&self, q: &AffinePoint) -> Result<AffinePoint> {
        self.require_on_curve(q)?;
        Ok(JacobianPoint::from(q).double(self).to_affine(self))
    }

    /// `k·Q`. The scalar is not reduced modulo `n`.
    pub fn mul(&self, k: &BigUint, q: &AffinePoint) -> Result<AffinePoint> {
        self.require_on_curve(q)?;
        Ok(JacobianPoint::from(q).mul(k, self).to_affine(self))
    }

    /// `k·G`.
    pub fn mul_generator(&self, k: &BigUint) -> AffinePoint {
        JacobianPoint::from(&self.generator)
            .mul(k, self)
            .to_affine(self)
    }

    /// `u·H + v·Q`, computed with a single shared doubling chain.
    pub fn double_mul(
        &self,
        u: &BigUint,
        h: &AffinePoint,
        v: &BigUint,
        q: &AffinePoint,
    ) -> Result<AffinePoint> {
        self.require_on_curve(h)?;
        self.require_on_curve(q)?;
        Ok(JacobianPoint::double_mul(
            u,
            &JacobianPoint::from(h),
            v,
            &JacobianPoint::from(q),
            self,
        )
        .to_affine(self))
    }
}
