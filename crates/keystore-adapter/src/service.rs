//! # Keystore Adapter Service
//!
//! Application service that implements the inbound [`CurveKeystore`] port
//! in terms of the outbound [`RawKeystore`] port.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`CurveKeystore`)
//! - Delegates byte signing to the outbound port (`RawKeystore`)
//! - Delegates byte decoding to the domain codec
//!
//! The adapter holds no state beyond the shared reference to the raw
//! keystore, so one instance may serve concurrent signing requests.

use crate::domain::codec;
use crate::domain::entities::CurveSignature;
use crate::domain::errors::DecodeError;
use crate::ports::inbound::{CurveKeystore, SigningError};
use crate::ports::outbound::{RawKeystore, RawKeystoreError};
use async_trait::async_trait;
use primitive_types::U256;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Adapts a generic byte keystore to the curve-specific signing capability.
///
/// The raw keystore must produce signatures in the fixed-width `r || s`
/// big-endian form the domain codec parses; wiring an incompatible backend
/// surfaces as a decode error on every call, never as a silently wrong
/// signature.
pub struct KeystoreAdapter<K: RawKeystore> {
    raw: Arc<K>,
}

impl<K: RawKeystore> KeystoreAdapter<K> {
    /// Create an adapter over the given raw keystore.
    pub fn new(raw: Arc<K>) -> Self {
        Self { raw }
    }

    /// The wrapped raw keystore, for callers that need the byte-oriented
    /// capability directly without re-wiring.
    pub fn raw_keystore(&self) -> &Arc<K> {
        &self.raw
    }

    /// Decode raw signature bytes into curve-native form.
    ///
    /// Pure pass-through to the domain codec; no I/O.
    pub fn decode(&self, raw_signature: &[u8]) -> Result<CurveSignature, DecodeError> {
        codec::decode_signature(raw_signature)
    }
}

#[async_trait]
impl<K: RawKeystore> CurveKeystore for KeystoreAdapter<K> {
    async fn sign(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
        hash: U256,
    ) -> Result<CurveSignature, SigningError> {
        // A context that is already dead never reaches the raw keystore.
        if cancel.is_cancelled() {
            return Err(SigningError::Cancelled {
                account_id: account_id.to_owned(),
            });
        }

        let message = codec::encode_message_hash(hash);

        // Exactly one delegated call; cancellation mid-flight wins the race.
        let delegated = tokio::select! {
            _ = cancel.cancelled() => {
                warn!(account_id, "signing cancelled while awaiting raw keystore");
                return Err(SigningError::Cancelled {
                    account_id: account_id.to_owned(),
                });
            }
            result = self.raw.sign(cancel, account_id, &message) => result,
        };

        let raw_signature = match delegated {
            Ok(bytes) => bytes,
            Err(RawKeystoreError::Cancelled) => {
                return Err(SigningError::Cancelled {
                    account_id: account_id.to_owned(),
                });
            }
            Err(source) => {
                warn!(account_id, error = %source, "raw keystore signing failed");
                return Err(SigningError::Delegation {
                    account_id: account_id.to_owned(),
                    source,
                });
            }
        };

        let signature = codec::decode_signature(&raw_signature)?;
        debug!(account_id, "decoded curve signature from raw keystore bytes");
        Ok(signature)
    }
}
