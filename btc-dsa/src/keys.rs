//! Signing and verifying keys bound to a curve and a hash function.

use crate::{
    Component, Error, Result, Signature, check_scalar, recover, sign, sign_prehash,
    verify_prehash_strict, verify_strict,
};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use num_bigint::BigUint;
use sha2::Sha256;
use weierstrass::{
    AffinePoint, Curve,
    sec1::{bytes_from_point, point_from_octets},
};

#[cfg(feature = "signature")]
use signature::{
    Signer, Verifier,
    hazmat::{PrehashSigner, PrehashVerifier},
};

/// ECDSA secret key used for signing messages and producing signatures.
///
/// ## Usage
///
/// With the `signature` feature, the [`signature`] crate traits are also
/// implemented:
///
/// - `Signer`: sign a message using this key
/// - `PrehashSigner`: sign the low-level raw output bytes of a message digest
pub struct SigningKey<'c, D = Sha256> {
    /// Secret scalar in `[1, n-1]`.
    d: BigUint,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey<'c, D>,
}

impl<'c, D> SigningKey<'c, D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    /// Create a signing key from a secret scalar in `[1, n-1]`.
    pub fn from_scalar(curve: &'c Curve, d: BigUint) -> Result<Self> {
        check_scalar(curve, &d, Component::PrivateKey)?;
        let verifying_key = VerifyingKey {
            curve,
            point: curve.mul_generator(&d),
            digest: PhantomData,
        };
        Ok(Self { d, verifying_key })
    }

    /// Parse a signing key from `nsize` big endian bytes.
    pub fn from_bytes(curve: &'c Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.nsize() {
            return Err(Error::InvalidEncoding("wrong private key size"));
        }
        Self::from_scalar(curve, BigUint::from_bytes_be(bytes))
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'c, D> {
        &self.verifying_key
    }

    /// Sign `msg` with an RFC6979 nonce.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        sign::<D>(self.verifying_key.curve, msg, &self.d, None)
    }

    /// Sign `msg` with the caller's ephemeral scalar `k`.
    ///
    /// Reusing `k` across messages reveals the private key.
    pub fn sign_with_nonce(&self, msg: &[u8], k: &BigUint) -> Result<Signature> {
        sign::<D>(self.verifying_key.curve, msg, &self.d, Some(k))
    }

    /// Sign a message digest, which must be exactly one output of `D`.
    pub fn sign_prehash(&self, digest: &[u8]) -> Result<Signature> {
        sign_prehash::<D>(self.verifying_key.curve, digest, &self.d, None)
    }
}

impl<D> Clone for SigningKey<'_, D> {
    fn clone(&self) -> Self {
        Self {
            d: self.d.clone(),
            verifying_key: self.verifying_key.clone(),
        }
    }
}

impl<D> Debug for SigningKey<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl<'c, D> AsRef<VerifyingKey<'c, D>> for SigningKey<'c, D> {
    fn as_ref(&self) -> &VerifyingKey<'c, D> {
        &self.verifying_key
    }
}

/// ECDSA public key used for verifying signatures.
///
/// Always a finite point on its curve.
pub struct VerifyingKey<'c, D = Sha256> {
    curve: &'c Curve,
    point: AffinePoint,
    digest: PhantomData<fn() -> D>,
}

impl<'c, D: Digest> VerifyingKey<'c, D> {
    /// Initialize from a public key point.
    pub fn from_affine(curve: &'c Curve, point: AffinePoint) -> Result<Self> {
        if point.is_identity() || !curve.is_on_curve(&point) {
            return Err(Error::InvalidPoint);
        }
        Ok(Self {
            curve,
            point,
            digest: PhantomData,
        })
    }

    /// Parse a SEC1-encoded public key, compressed or uncompressed.
    pub fn from_sec1_bytes(curve: &'c Curve, bytes: &[u8]) -> Result<Self> {
        Self::from_affine(curve, point_from_octets(curve, bytes)?)
    }

    /// Serialize as a SEC1 octet string.
    pub fn to_sec1_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        Ok(bytes_from_point(self.curve, &self.point, compressed)?)
    }

    /// Borrow the inner [`AffinePoint`].
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Curve this key lives on.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Verify `signature` over `msg`, reporting why it was rejected.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        verify_strict::<D>(self.curve, msg, &self.point, signature)
    }

    /// Verify `signature` over `msg`.
    pub fn is_valid(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify(msg, signature).is_ok()
    }

    /// Recover every key for which `signature` is valid over `msg`.
    pub fn recover(curve: &'c Curve, msg: &[u8], signature: &Signature) -> Result<Vec<Self>> {
        Ok(recover::<D>(curve, msg, signature)?
            .map(|point| Self {
                curve,
                point,
                digest: PhantomData,
            })
            .collect())
    }
}

impl<D> Clone for VerifyingKey<'_, D> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve,
            point: self.point.clone(),
            digest: PhantomData,
        }
    }
}

impl<D> Debug for VerifyingKey<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("point", &self.point)
            .finish_non_exhaustive()
    }
}

impl<D> PartialEq for VerifyingKey<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl<D> Eq for VerifyingKey<'_, D> {}

impl<D> AsRef<AffinePoint> for VerifyingKey<'_, D> {
    fn as_ref(&self) -> &AffinePoint {
        &self.point
    }
}

//
// `signature` crate trait impls
//

#[cfg(feature = "signature")]
fn signature_error(err: Error) -> signature::Error {
    #[cfg(feature = "std")]
    {
        signature::Error::from_source(err)
    }
    #[cfg(not(feature = "std"))]
    {
        let _ = err;
        signature::Error::new()
    }
}

#[cfg(feature = "signature")]
impl<D> PrehashSigner<Signature> for SigningKey<'_, D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        sign_prehash::<D>(self.verifying_key.curve, prehash, &self.d, None).map_err(signature_error)
    }
}

#[cfg(feature = "signature")]
impl<D> Signer<Signature> for SigningKey<'_, D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        sign::<D>(self.verifying_key.curve, msg, &self.d, None).map_err(signature_error)
    }
}

#[cfg(feature = "signature")]
impl<D: Digest> PrehashVerifier<Signature> for VerifyingKey<'_, D> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        verify_prehash_strict::<D>(self.curve, prehash, &self.point, signature)
            .map_err(signature_error)
    }
}

#[cfg(feature = "signature")]
impl<D: Digest> Verifier<Signature> for VerifyingKey<'_, D> {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        verify_strict::<D>(self.curve, msg, &self.point, signature).map_err(signature_error)
    }
}
