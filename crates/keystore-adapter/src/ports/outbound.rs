//! # Outbound Port (Driven Port / SPI)
//!
//! The generic byte-oriented keystore this adapter delegates to.

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Error from the raw keystore.
#[derive(Debug, Error)]
pub enum RawKeystoreError {
    /// No key material exists for the requested account.
    #[error("no key found for account {account_id}")]
    KeyNotFound { account_id: String },

    /// The signing operation was cancelled before it completed.
    #[error("signing was cancelled")]
    Cancelled,

    /// Any other backend failure (I/O, HSM, revoked key, ...).
    #[error("keystore backend failure: {0}")]
    Backend(String),
}

/// A generic signing capability: byte message in, opaque signature bytes out.
///
/// The byte encoding of the returned signature is a contract between the
/// implementation and whoever decodes it; this port imposes no structure.
/// Implementations must be thread-safe (`Send + Sync`) and must honor the
/// cancellation token rather than blocking indefinitely.
#[async_trait]
pub trait RawKeystore: Send + Sync {
    /// Sign an opaque byte message with the key named by `account_id`.
    ///
    /// # Errors
    ///
    /// * [`RawKeystoreError::KeyNotFound`] - `account_id` names no key
    /// * [`RawKeystoreError::Cancelled`] - `cancel` fired while signing
    /// * [`RawKeystoreError::Backend`] - anything else the backend reports
    async fn sign(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
        message: &[u8],
    ) -> Result<Vec<u8>, RawKeystoreError>;
}
