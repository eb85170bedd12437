//! # Ports Layer
//!
//! Trait definitions for the adapter's boundaries:
//! - **inbound**: the curve-specific signing capability this crate exposes
//! - **outbound**: the generic byte keystore this crate depends on

pub mod inbound;
pub mod outbound;
