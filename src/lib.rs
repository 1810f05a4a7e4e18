//! # ecmqv
//!
//! ECC MQV key agreement (NIST SP 800-56A Rev. 3 §5.7.2) over the NIST
//! prime curves P-224, P-256, P-384 and P-521, with an additively blinded
//! variant that tolerates variable-time curve backends.
//!
//! This is a facade crate that re-exports functionality from the
//! workspace members:
//!
//! - [`ecmqv-params`](params): curve domain parameters
//! - [`ecmqv-common`](common): secret buffers, constant-time comparison
//! - [`ecmqv-algorithms`](algorithms): the constant-time integer, the
//!   curve adapter and the MQV/BlindMQV primitives
//!
//! ## Example
//!
//! ```
//! use ecmqv::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> Result<()> {
//! let mut rng = OsRng;
//!
//! // Each party holds a static and an ephemeral key pair.
//! let (alice_static, alice_static_pub) = generate_keypair(&P256, &mut rng)?;
//! let (alice_eph, alice_eph_pub) = generate_keypair(&P256, &mut rng)?;
//! let (bob_static, bob_static_pub) = generate_keypair(&P256, &mut rng)?;
//! let (bob_eph, bob_eph_pub) = generate_keypair(&P256, &mut rng)?;
//!
//! // Blinded agreement from Alice's side...
//! let shared_alice = blind_mqv(
//!     alice_static.as_slice(),
//!     alice_eph.as_slice(),
//!     alice_eph_pub.x(),
//!     &bob_static_pub,
//!     &bob_eph_pub,
//!     &P256,
//!     &mut rng,
//! )?;
//!
//! // ...matches the agreement from Bob's side.
//! let shared_bob = blind_mqv(
//!     bob_static.as_slice(),
//!     bob_eph.as_slice(),
//!     bob_eph_pub.x(),
//!     &alice_static_pub,
//!     &alice_eph_pub,
//!     &P256,
//!     &mut rng,
//! )?;
//!
//! assert_eq!(shared_alice, shared_bob);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use ecmqv_algorithms as algorithms;
pub use ecmqv_common as common;
pub use ecmqv_params as params;

/// Common imports for ecmqv users.
pub mod prelude {
    pub use ecmqv_algorithms::{
        blind_key, blind_mqv, cofactor, generate_key, generate_keypair, mqv, scalar_mult_blind,
        CtInt, Curve, Error, Point, Result, P224, P256, P384, P521,
    };
    pub use ecmqv_common::security::SecretVec;
    pub use ecmqv_params::{EcParams, NIST_P224, NIST_P256, NIST_P384, NIST_P521};
}
