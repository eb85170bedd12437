//! # Inbound Port (Driving Port / API)
//!
//! The curve-specific signing capability this crate exposes.

use crate::domain::entities::CurveSignature;
use crate::domain::errors::DecodeError;
use crate::ports::outbound::RawKeystoreError;
use async_trait::async_trait;
use primitive_types::U256;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors surfaced by [`CurveKeystore::sign`].
///
/// The three kinds stay distinguishable so callers can fail fast on a
/// malformed signature, alert on a provider fault, or simply request a
/// fresh signature after cancellation. None of them is retried here:
/// signing is not blindly idempotent, and a silent retry could mask a
/// key-availability problem.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The delegated raw keystore call failed.
    #[error("raw keystore signing failed for account {account_id}")]
    Delegation {
        account_id: String,
        #[source]
        source: RawKeystoreError,
    },

    /// The operation was cancelled, before or during the delegated call.
    #[error("signing cancelled for account {account_id}")]
    Cancelled { account_id: String },

    /// The raw keystore returned bytes the codec rejected.
    #[error("failed to decode raw signature")]
    Decode(#[from] DecodeError),
}

/// Curve-specific signing capability: message hash in, `(r, s)` pair out.
///
/// Implementations must be thread-safe (`Send + Sync`); concurrent `sign`
/// calls on one instance must not interfere with one another.
#[async_trait]
pub trait CurveKeystore: Send + Sync {
    /// Sign `hash` with the key named by `account_id`.
    ///
    /// The account identifier is opaque here; its format is owned by the
    /// underlying keystore and is not validated at this layer.
    async fn sign(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
        hash: U256,
    ) -> Result<CurveSignature, SigningError>;
}
