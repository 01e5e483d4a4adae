//! ASN.1 DER signature encoding with an optional trailing sighash byte, as
//! used in Bitcoin transactions (BIP66).
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```
//!
//! followed by zero or one sighash byte. The `der` crate enforces the
//! canonical form: minimal lengths, no superfluous or missing zero padding
//! and no negative integers.

use crate::{Error, Result, Signature};
use alloc::vec::Vec;
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, SliceReader,
    Tag, Writer, asn1::UintRef,
};
use num_bigint::BigUint;
use weierstrass::Curve;

impl Signature {
    /// Serialize as ASN.1 DER, appending `sighash` when present.
    pub fn to_der(&self, sighash: Option<u8>) -> Result<Vec<u8>> {
        let r = self.r().to_bytes_be();
        let s = self.s().to_bytes_be();
        let mut out = SignatureRef {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        }
        .to_der()?;

        out.extend(sighash);
        Ok(out)
    }

    /// Parse an ASN.1 DER signature followed by at most one sighash byte.
    ///
    /// Both scalars must be in `[1, n-1]` for `curve`.
    pub fn from_der(curve: &Curve, bytes: &[u8]) -> Result<(Self, Option<u8>)> {
        let mut reader = SliceReader::new(bytes)?;
        let header = Header::decode(&mut reader)?;
        header.tag().assert_eq(Tag::Sequence)?;

        let len = usize::try_from((header.encoded_len()? + header.length())?)?;
        if bytes.len() < len {
            return Err(Error::InvalidEncoding("sequence length exceeds input"));
        }

        let (der_bytes, trailer) = bytes.split_at(len);
        let sighash = match trailer {
            [] => None,
            [sighash] => Some(*sighash),
            _ => return Err(Error::InvalidEncoding("trailing data after sighash")),
        };

        let SignatureRef { r, s } = SignatureRef::from_der(der_bytes)?;
        let signature = Self::from_scalars(
            curve,
            BigUint::from_bytes_be(r.as_bytes()),
            BigUint::from_bytes_be(s.as_bytes()),
        )?;

        Ok((signature, sighash))
    }
}

struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    type Error = der::Error;

    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}
