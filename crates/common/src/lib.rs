//! Shared security plumbing
//!
//! Foundational types and patterns for handling sensitive cryptographic
//! material: buffers that zeroize themselves, constant-time comparison,
//! and fences around explicit wipes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod security;

pub use security::{barrier, SecretVec, SecureCompare};
