#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![doc = r#"
Elliptic Curve Digital Signature Algorithm (ECDSA) as used by Bitcoin:
deterministic RFC6979 nonces, canonical low-s signatures, verification and
public key recovery, over any short Weierstrass curve supplied at runtime.

Curve parameters are an immutable [`Curve`] passed by reference into every
operation; the hash function is a type parameter.

## Usage

```
# #[cfg(feature = "named-curves")]
# {
use btc_dsa::{BigUint, recover, sign, verify, weierstrass::secp256k1};
use sha2::Sha256;

let curve = secp256k1();
let d = BigUint::from(0xC0FFEEu32);
let q = curve.mul_generator(&d);

let sig = sign::<Sha256>(curve, b"hello", &d, None).unwrap();
assert!(sig.is_low_s(curve));
assert!(verify::<Sha256>(curve, b"hello", &q, &sig));
assert!(!verify::<Sha256>(curve, b"hello!", &q, &sig));

let keys: Vec<_> = recover::<Sha256>(curve, b"hello", &sig).unwrap().collect();
assert!(keys.contains(&q));
# }
```
"#]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod hazmat;
pub mod rfc6979;

mod bits;
mod commitment;
mod der;
mod error;
mod keys;
mod recoverable;
mod sign;
mod verify;

pub use crate::{
    bits::int_from_bits,
    commitment::{Receipt, sign_to_contract, verify_commit},
    error::{Component, Error, Result},
    keys::{SigningKey, VerifyingKey},
    recoverable::{RecoveredKeys, recover, recover_der, recover_prehash},
    sign::{sign, sign_prehash},
    verify::{verify, verify_der, verify_prehash, verify_prehash_strict, verify_strict},
};
pub use weierstrass::{self, AffinePoint, BigUint, Curve};

#[cfg(feature = "signature")]
pub use signature;

use alloc::vec::Vec;
use num_traits::Zero;
use weierstrass::sec1::int_to_octets;

/// ECDSA signature: a pair of scalars `(r, s)`, each in `[1, n-1]`.
///
/// Serialized either as fixed-width `r || s` ([`Signature::to_bytes`]) or in
/// strict ASN.1 DER with an optional sighash byte ([`Signature::to_der`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its `r` and `s` components, checking both
    /// against the order of `curve`.
    pub fn from_scalars(curve: &Curve, r: BigUint, s: BigUint) -> Result<Self> {
        check_scalar(curve, &r, Component::R)?;
        check_scalar(curve, &s, Component::S)?;
        Ok(Self { r, s })
    }

    /// Parse a fixed-width `r || s` signature, each scalar `nsize` bytes.
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let size = curve.nsize();
        if bytes.len() != 2 * size {
            return Err(Error::InvalidEncoding("wrong signature size"));
        }

        let (r, s) = bytes.split_at(size);
        Self::from_scalars(curve, BigUint::from_bytes_be(r), BigUint::from_bytes_be(s))
    }

    /// Serialize as fixed-width `r || s`.
    pub fn to_bytes(&self, curve: &Curve) -> Result<Vec<u8>> {
        let size = curve.nsize();
        let mut out = int_to_octets(&self.r, size)?;
        out.extend_from_slice(&int_to_octets(&self.s, size)?);
        Ok(out)
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self, curve: &Curve) -> Self {
        if self.is_low_s(curve) {
            self.clone()
        } else {
            Self {
                r: self.r.clone(),
                s: curve.n() - &self.s,
            }
        }
    }

    /// Is `s` in the lower half of `[1, n-1]`?
    pub fn is_low_s(&self, curve: &Curve) -> bool {
        self.s <= (curve.n() >> 1u32)
    }
}

/// Check that `x` lies in `[1, n-1]`.
pub(crate) fn check_scalar(curve: &Curve, x: &BigUint, component: Component) -> Result<()> {
    if x.is_zero() || x >= curve.n() {
        Err(Error::InvalidRange(component))
    } else {
        Ok(())
    }
}

#[cfg(all(test, feature = "named-curves"))]
mod tests {
    use super::{Component, Error, Signature};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use weierstrass::secp256k1;

    const HIGH_S_SIG: [u8; 64] = hex!(
        "241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"
        "fdeff9487c79f6cc6174bea5806534e35496b4d39459816ff83d0091ce427733"
    );

    #[test]
    fn normalize_s_high() {
        let curve = secp256k1();
        let sig = Signature::from_bytes(curve, &HIGH_S_SIG).unwrap();
        assert!(!sig.is_low_s(curve));

        let normalized = sig.normalize_s(curve);
        assert!(normalized.is_low_s(curve));
        assert_eq!(normalized.r(), sig.r());
        assert_eq!(
            normalized.s(),
            &BigUint::from_bytes_be(&hex!(
                "021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"
            ))
        );
        assert_eq!(normalized.normalize_s(curve), normalized);
    }

    #[test]
    fn fixed_width_bytes() {
        let curve = secp256k1();
        let sig = Signature::from_bytes(curve, &HIGH_S_SIG).unwrap();
        assert_eq!(sig.to_bytes(curve).unwrap(), HIGH_S_SIG);
        assert_eq!(
            Signature::from_bytes(curve, &HIGH_S_SIG[..63]),
            Err(Error::InvalidEncoding("wrong signature size"))
        );
    }

    #[test]
    fn scalars_out_of_range() {
        let curve = secp256k1();
        let n = curve.n().clone();
        let one = BigUint::from(1u8);

        assert_eq!(
            Signature::from_scalars(curve, BigUint::from(0u8), one.clone()),
            Err(Error::InvalidRange(Component::R))
        );
        assert_eq!(
            Signature::from_scalars(curve, one.clone(), n.clone()),
            Err(Error::InvalidRange(Component::S))
        );
        assert!(Signature::from_scalars(curve, &n - 1u32, one).is_ok());
    }
}
