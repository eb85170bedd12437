//! # Domain Layer
//!
//! Pure signing-adapter logic: entities, byte codec, and errors.
//! No I/O and no async code lives here.

pub mod codec;
pub mod entities;
pub mod errors;
