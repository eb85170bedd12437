//! # Domain Entities
//!
//! Core data structures and curve constants for the signing adapter.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one signature component (a secp256k1 scalar), in bytes.
pub const SCALAR_LEN: usize = 32;

/// Total width of the raw wire signature: `r || s`, big-endian.
pub const SIGNATURE_LEN: usize = 2 * SCALAR_LEN;

/// Width of the message hash handed to the raw keystore, in bytes.
pub const HASH_LEN: usize = 32;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// The curve order as a big unsigned integer.
///
/// Signature components must lie in `[1, curve_order() - 1]`.
pub fn curve_order() -> U256 {
    U256::from_big_endian(&SECP256K1_ORDER)
}

/// Which half of the wire signature a decode error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// First component (leading `SCALAR_LEN` bytes).
    R,
    /// Second component (trailing `SCALAR_LEN` bytes).
    S,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::R => write!(f, "r"),
            Component::S => write!(f, "s"),
        }
    }
}

/// An ECDSA signature in curve-native form.
///
/// Both components are field elements of the curve's scalar field: nonzero
/// and strictly below the curve order. Values are only constructed through
/// [`crate::domain::codec::decode_signature`], which enforces the invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveSignature {
    /// R component
    pub r: U256,
    /// S component
    pub s: U256,
}
