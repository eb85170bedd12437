//! # In-Memory Raw Keystore
//!
//! A [`RawKeystore`] backed by in-process secp256k1 keys, for development
//! and deterministic testing. Not a key-management product: keys live in
//! memory for the life of the process and are never exported.
//!
//! Signing uses RFC 6979 deterministic nonces, so the same key and digest
//! always produce the same signature bytes.

use crate::domain::entities::HASH_LEN;
use crate::ports::outbound::{RawKeystore, RawKeystoreError};
use async_trait::async_trait;
use k256::ecdsa::{SigningKey, VerifyingKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// In-process keystore mapping account identifiers to signing keys.
///
/// Keys are inserted at setup time and only read afterwards; the lock is
/// never held across an await point.
#[derive(Default)]
pub struct InMemoryRawKeystore {
    keys: RwLock<HashMap<String, SigningKey>>,
}

impl InMemoryRawKeystore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signing key under `account_id`, replacing any previous
    /// key for that account. Returns the corresponding verifying key.
    pub fn insert_key(&self, account_id: impl Into<String>, key: SigningKey) -> VerifyingKey {
        let verifying_key = *key.verifying_key();
        self.keys.write().insert(account_id.into(), key);
        verifying_key
    }

    /// Whether a key is registered for `account_id`.
    pub fn contains(&self, account_id: &str) -> bool {
        self.keys.read().contains_key(account_id)
    }
}

#[async_trait]
impl RawKeystore for InMemoryRawKeystore {
    async fn sign(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
        message: &[u8],
    ) -> Result<Vec<u8>, RawKeystoreError> {
        if cancel.is_cancelled() {
            return Err(RawKeystoreError::Cancelled);
        }

        // The message is a prehashed digest; anything else is a wiring bug.
        if message.len() != HASH_LEN {
            return Err(RawKeystoreError::Backend(format!(
                "message must be a {}-byte digest, got {} bytes",
                HASH_LEN,
                message.len()
            )));
        }

        let key = self
            .keys
            .read()
            .get(account_id)
            .cloned()
            .ok_or_else(|| RawKeystoreError::KeyNotFound {
                account_id: account_id.to_owned(),
            })?;

        let (signature, _recovery_id) = key
            .sign_prehash_recoverable(message)
            .map_err(|e| RawKeystoreError::Backend(e.to_string()))?;

        debug!(account_id, "signed digest with in-memory key");
        Ok(signature.to_bytes().to_vec())
    }
}
