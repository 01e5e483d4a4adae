//! Affine curve points.

use num_bigint::BigUint;
use num_traits::Zero;

/// Point on a Weierstrass curve in affine coordinates.
///
/// A point carries no reference to its curve; use [`Curve::is_on_curve`]
/// to check it against a particular set of domain parameters.
///
/// [`Curve::is_on_curve`]: crate::Curve::is_on_curve
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    /// Finite point with the given coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Get the x-coordinate of this point. Zero for the identity.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Get the y-coordinate of this point. Zero for the identity.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}
