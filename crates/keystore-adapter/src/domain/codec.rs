//! # Signature Codec
//!
//! Pure translation between the raw keystore's byte encoding and the
//! curve-native [`CurveSignature`] form.
//!
//! ## Wire Format
//!
//! ```text
//! [ r: 32 bytes big-endian ][ s: 32 bytes big-endian ]
//! ```
//!
//! This is the layout `k256` itself emits for a fixed-width signature
//! (`Signature::to_bytes`). Any other total length is rejected outright;
//! there is no tolerance for trimmed leading zeros or DER framing.

use super::entities::{curve_order, Component, CurveSignature, HASH_LEN, SCALAR_LEN, SIGNATURE_LEN};
use super::errors::DecodeError;
use primitive_types::U256;

/// Decode a raw `r || s` byte sequence into a [`CurveSignature`].
///
/// Deterministic and side-effect free: identical input bytes always yield
/// an identical signature or an identical error.
///
/// # Errors
///
/// * [`DecodeError::InvalidLength`] - total length is not [`SIGNATURE_LEN`]
/// * [`DecodeError::ZeroComponent`] - a component parsed to zero
/// * [`DecodeError::ComponentNotBelowOrder`] - a component is `>=` the curve order
pub fn decode_signature(raw: &[u8]) -> Result<CurveSignature, DecodeError> {
    if raw.len() != SIGNATURE_LEN {
        return Err(DecodeError::InvalidLength {
            actual: raw.len(),
            expected: SIGNATURE_LEN,
        });
    }

    let r = U256::from_big_endian(&raw[..SCALAR_LEN]);
    let s = U256::from_big_endian(&raw[SCALAR_LEN..]);

    validate_field_element(Component::R, r)?;
    validate_field_element(Component::S, s)?;

    Ok(CurveSignature { r, s })
}

/// Encode a [`CurveSignature`] back into the fixed-width wire form.
///
/// Inverse of [`decode_signature`] for any signature satisfying the
/// field-element invariant.
pub fn encode_signature(sig: &CurveSignature) -> [u8; SIGNATURE_LEN] {
    let mut out = [0u8; SIGNATURE_LEN];
    sig.r.to_big_endian(&mut out[..SCALAR_LEN]);
    sig.s.to_big_endian(&mut out[SCALAR_LEN..]);
    out
}

/// Encode a message hash into the byte form the raw keystore signs.
///
/// Fixed 32-byte big-endian, never minimal-length: a digest with leading
/// zero bytes must encode to the same width as any other.
pub fn encode_message_hash(hash: U256) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    hash.to_big_endian(&mut out);
    out
}

/// Scalar range check: valid field elements lie in `[1, n - 1]`.
fn validate_field_element(component: Component, value: U256) -> Result<(), DecodeError> {
    if value.is_zero() {
        return Err(DecodeError::ZeroComponent(component));
    }
    if value >= curve_order() {
        return Err(DecodeError::ComponentNotBelowOrder(component));
    }
    Ok(())
}
