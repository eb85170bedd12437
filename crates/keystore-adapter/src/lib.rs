//! # Keystore Adapter
//!
//! Adapts a generic byte-oriented keystore (opaque message in, opaque
//! signature bytes out) to the curve-specific capability its consumers
//! need: a `(r, s)` pair of big unsigned integers on secp256k1.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure codec and validation logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires the inbound port to the outbound port
//! - **Adapters Layer** (`adapters/`): Concrete outbound-port implementations
//!
//! ## Correctness Notes
//!
//! - The decoder accepts exactly the fixed-width `r || s` big-endian form
//!   and enforces the field-element invariant (`0 < r, s < curve order`);
//!   malformed input is rejected, never corrected.
//! - The adapter never retries a failed signing call: a retried sign may
//!   legitimately produce a different signature, and retrying could mask a
//!   key-availability problem. Retry policy belongs to the caller.
//! - Cancellation is surfaced as a distinct error, checked before the
//!   delegated call and raced against it while in flight.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryRawKeystore;
pub use domain::codec::{decode_signature, encode_message_hash, encode_signature};
pub use domain::entities::{
    curve_order, Component, CurveSignature, HASH_LEN, SCALAR_LEN, SIGNATURE_LEN,
};
pub use domain::errors::DecodeError;
pub use ports::inbound::{CurveKeystore, SigningError};
pub use ports::outbound::{RawKeystore, RawKeystoreError};
pub use service::KeystoreAdapter;
