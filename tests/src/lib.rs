//! # Curve-Keystore Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-layer signing flows
//!     └── signing_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p keystore-tests
//!
//! # By category
//! cargo test -p keystore-tests integration::
//! ```

#![allow(dead_code)]
