//! # End-to-End Signing Flow Tests
//!
//! Drives the complete adapter path with real secp256k1 keys:
//!
//! ```text
//! caller ──hash──→ [KeystoreAdapter] ──digest bytes──→ [InMemoryRawKeystore]
//!                        │                                      │
//!                        │←──────── r || s (64 bytes) ──────────┘
//!                        ↓
//!                  CurveSignature ──→ verified against k256
//! ```
//!
//! ## Test Categories
//!
//! 1. **Happy Path**: sign and verify against the curve library
//! 2. **Concurrency**: one shared adapter, many in-flight signs
//! 3. **Cancellation**: prompt return, no hanging
//! 4. **Fault Propagation**: keystore faults keep their identity

// =============================================================================
// TEST FIXTURES (only compiled during tests)
// =============================================================================

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use k256::ecdsa::SigningKey;

#[cfg(test)]
use keystore_adapter::{InMemoryRawKeystore, KeystoreAdapter};

/// Builds an adapter over an in-memory keystore with one registered key,
/// returning the verifying key for signature checks.
#[cfg(test)]
fn adapter_with_key(
    account_id: &str,
) -> (
    Arc<KeystoreAdapter<InMemoryRawKeystore>>,
    k256::ecdsa::VerifyingKey,
) {
    let keystore = InMemoryRawKeystore::new();
    let verifying_key = keystore.insert_key(account_id, SigningKey::random(&mut rand::thread_rng()));
    (Arc::new(KeystoreAdapter::new(Arc::new(keystore))), verifying_key)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::signature::hazmat::PrehashVerifier;
    use k256::ecdsa::Signature;
    use keystore_adapter::{
        decode_signature, encode_message_hash, encode_signature, curve_order, CurveKeystore,
        RawKeystore, RawKeystoreError, SigningError, HASH_LEN,
    };
    use primitive_types::U256;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    /// Happy path: a signature produced through the adapter must verify
    /// under the curve library for the registered key.
    #[tokio::test]
    async fn test_sign_and_verify_against_curve_library() {
        let (adapter, verifying_key) = adapter_with_key("validator-7");

        let mut digest = [0u8; HASH_LEN];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut digest);
        let hash = U256::from_big_endian(&digest);

        let sig = adapter
            .sign(&CancellationToken::new(), "validator-7", hash)
            .await
            .expect("signing should succeed");

        assert!(!sig.r.is_zero() && sig.r < curve_order());
        assert!(!sig.s.is_zero() && sig.s < curve_order());

        let k256_sig =
            Signature::from_slice(&encode_signature(&sig)).expect("wire form parses as k256");
        verifying_key
            .verify_prehash(&digest, &k256_sig)
            .expect("signature must verify for the registered key");
    }

    /// The byte path and the curve path must agree: decoding what the raw
    /// keystore returns equals what `sign` returns (RFC 6979 determinism).
    #[tokio::test]
    async fn test_byte_path_agrees_with_curve_path() {
        let (adapter, _) = adapter_with_key("validator-7");
        let cancel = CancellationToken::new();
        let hash = U256::from(0x5eedu64);

        let raw_bytes = adapter
            .raw_keystore()
            .sign(&cancel, "validator-7", &encode_message_hash(hash))
            .await
            .unwrap();
        let via_bytes = adapter.decode(&raw_bytes).unwrap();

        let via_curve = adapter.sign(&cancel, "validator-7", hash).await.unwrap();

        assert_eq!(via_bytes, via_curve);
    }

    /// Known fixture: 64 bytes encoding (1, 2) decode to exactly that pair.
    #[test]
    fn test_known_fixture_decodes_to_one_two() {
        let raw = hex::decode(concat!(
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
        ))
        .unwrap();

        let sig = decode_signature(&raw).unwrap();

        assert_eq!(sig.r, U256::from(1u64));
        assert_eq!(sig.s, U256::from(2u64));
    }

    /// One shared adapter instance, many concurrent signs: no interference,
    /// every result verifies.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_signing_on_shared_adapter() {
        let (adapter, verifying_key) = adapter_with_key("validator-7");

        let handles: Vec<_> = (1u64..=16)
            .map(|i| {
                let adapter = adapter.clone();
                tokio::spawn(async move {
                    let hash = U256::from(i);
                    let sig = adapter
                        .sign(&CancellationToken::new(), "validator-7", hash)
                        .await
                        .expect("concurrent signing should succeed");
                    (hash, sig)
                })
            })
            .collect();

        for handle in handles {
            let (hash, sig) = handle.await.unwrap();
            let k256_sig = Signature::from_slice(&encode_signature(&sig)).unwrap();
            verifying_key
                .verify_prehash(&encode_message_hash(hash), &k256_sig)
                .expect("each concurrent signature must verify");
        }
    }

    /// A pre-cancelled context returns promptly instead of hanging.
    #[tokio::test]
    async fn test_precancelled_sign_returns_promptly() {
        let (adapter, _) = adapter_with_key("validator-7");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            adapter.sign(&cancel, "validator-7", U256::from(1u64)),
        )
        .await
        .expect("cancelled sign must not hang");

        assert!(matches!(
            result.unwrap_err(),
            SigningError::Cancelled { ref account_id } if account_id == "validator-7"
        ));
    }

    /// An unknown account surfaces as a delegation fault that still names
    /// the account and carries the keystore's own error as its cause.
    #[tokio::test]
    async fn test_unknown_account_keeps_fault_identity() {
        let (adapter, _) = adapter_with_key("validator-7");

        let err = adapter
            .sign(&CancellationToken::new(), "validator-8", U256::from(1u64))
            .await
            .unwrap_err();

        match err {
            SigningError::Delegation { account_id, source } => {
                assert_eq!(account_id, "validator-8");
                assert!(matches!(
                    source,
                    RawKeystoreError::KeyNotFound { ref account_id } if account_id == "validator-8"
                ));
            }
            other => panic!("expected Delegation, got {:?}", other),
        }
    }

    /// Signing the same hash twice yields the same signature (RFC 6979),
    /// and distinct hashes yield distinct signatures.
    #[tokio::test]
    async fn test_deterministic_signing() {
        let (adapter, _) = adapter_with_key("validator-7");
        let cancel = CancellationToken::new();

        let first = adapter
            .sign(&cancel, "validator-7", U256::from(42u64))
            .await
            .unwrap();
        let second = adapter
            .sign(&cancel, "validator-7", U256::from(42u64))
            .await
            .unwrap();
        let other = adapter
            .sign(&cancel, "validator-7", U256::from(43u64))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }
}
