//! ECC MQV key-agreement primitives
//!
//! This crate implements the Menezes-Qu-Vanstone key-agreement primitive
//! over the NIST prime curves, together with a blinded variant that
//! tolerates a variable-time curve backend. The foundation is a
//! fixed-width constant-time integer used for all secret-scalar
//! bookkeeping; the curve arithmetic itself is consumed through a thin
//! adapter and never reimplemented here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Constant-time fixed-width integers
pub mod ct;
pub use ct::CtInt;

// Curve adapter, backends, key generation and blinding
pub mod ec;
pub use ec::{
    blind_key, generate_key, generate_keypair, scalar_mult_blind, Curve, Point, P224, P256, P384,
    P521,
};

// The MQV primitives
pub mod mqv;
pub use mqv::{blind_mqv, cofactor, mqv};

// Re-export the security types and parameter tables the API speaks in
pub use common::security::{SecretVec, SecureCompare};
pub use params::{EcParams, NIST_P224, NIST_P256, NIST_P384, NIST_P521};
