//! # Decode Errors
//!
//! Failures of the pure byte-to-signature decoding step.

use super::entities::Component;
use thiserror::Error;

/// Errors produced when decoding raw signature bytes.
///
/// Each condition is a distinct variant so callers can tell a
/// provider/format mismatch (wrong length) from a malformed signature
/// (component outside the scalar field).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The raw byte sequence does not have the expected total length.
    #[error("raw signature is {actual} bytes, expected {expected}")]
    InvalidLength { actual: usize, expected: usize },

    /// A decoded component equals zero, which no valid signature contains.
    #[error("signature component {0} is zero")]
    ZeroComponent(Component),

    /// A decoded component is not strictly below the curve order.
    #[error("signature component {0} is not below the curve order")]
    ComponentNotBelowOrder(Component),
}
