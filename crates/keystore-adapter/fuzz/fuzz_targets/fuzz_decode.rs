//! Fuzz target for raw signature decoding.
//!
//! Exercises the decoder against arbitrary byte sequences: it must never
//! panic, must behave deterministically, and everything it accepts must
//! round-trip through the encoder unchanged.
//!
//! ## Running
//!
//! ```bash
//! cd crates/keystore-adapter
//! cargo +nightly fuzz run fuzz_decode
//! ```

#![no_main]

use keystore_adapter::{curve_order, decode_signature, encode_signature, SIGNATURE_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode - this should NEVER panic, regardless of input
    let result = decode_signature(data);

    // 1. Result should be deterministic
    assert_eq!(result, decode_signature(data));

    if let Ok(sig) = result {
        // 2. Only exactly-sized input can decode
        assert_eq!(data.len(), SIGNATURE_LEN);

        // 3. Accepted components satisfy the field-element invariant
        assert!(!sig.r.is_zero() && sig.r < curve_order());
        assert!(!sig.s.is_zero() && sig.s < curve_order());

        // 4. Round-trip is lossless
        assert_eq!(encode_signature(&sig).as_slice(), data);
    }
});
