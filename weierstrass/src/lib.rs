#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![doc = r#"
Arithmetic on short Weierstrass curves `y² = x³ + ax + b` over a prime
field `GF(p)`, with the domain parameters supplied at runtime.

Every operation takes the [`Curve`] it works on by reference. Points cross
the public API in affine form only; scalar multiplication runs internally in
Jacobian coordinates and normalizes once at the end.

## Usage

```
# #[cfg(feature = "named-curves")]
# {
use weierstrass::{secp256k1, sec1, BigUint};

let curve = secp256k1();
let q = curve.mul_generator(&BigUint::from(2u8));
let bytes = sec1::bytes_from_point(curve, &q, true).unwrap();
assert_eq!(sec1::point_from_octets(curve, &bytes).unwrap(), q);
# }
```
"#]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod sec1;

mod affine;
mod curve;
mod error;
mod field;
mod jacobian;
#[cfg(feature = "named-curves")]
mod named;

pub use crate::{
    affine::AffinePoint,
    curve::{Curve, CurveKind},
    error::{Error, Result},
    field::{mod_inv, mod_sqrt},
};
pub use num_bigint::{self, BigUint};

#[cfg(feature = "named-curves")]
pub use crate::named::{named_curve, secp256k1, secp256r1, secp384r1, secp521r1};
