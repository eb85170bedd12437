//! # Adapters Layer
//!
//! Concrete implementations of the outbound port.

pub mod memory;
