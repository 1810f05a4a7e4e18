//! Curve domain parameters
//!
//! Static tables describing the prime-order subgroups of the NIST curves
//! supported by the MQV primitives. The values here mirror the standard
//! parameters; the curve arithmetic itself lives in the backend crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod nist;

pub use nist::{EcParams, NIST_P224, NIST_P256, NIST_P384, NIST_P521};
