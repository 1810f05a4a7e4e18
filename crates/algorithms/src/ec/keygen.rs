//! Private-key generation and additive blinding
//!
//! Everything here runs on the constant-time integer; the only
//! variable-time component is the rejection-sampling loop itself, whose
//! iteration count is independent of the accepted value.

use common::security::SecretVec;
use params::EcParams;
use rand::{CryptoRng, RngCore};

use super::{Curve, Point};
use crate::ct::CtInt;
use crate::error::{Error, Result};

/// Masks for the excess bits of the top byte, indexed by `n_bits % 8`.
/// Index 0 means the order occupies a whole number of bytes.
const TOP_BYTE_MASK: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Generate a uniformly distributed private scalar in `[1, n)`.
///
/// Rejection sampling: draw `⌈n_bits/8⌉` random bytes, mask the top byte
/// down to the order's bit length and retry until the value is below `n`.
/// The loop is part of the algorithm, not an error path.
///
/// The second byte is XORed with `0x42` before the range check so that a
/// deterministic all-zero test source cannot produce the zero scalar and
/// loop forever. For a cryptographic source the resulting bias is
/// statistically undetectable.
pub fn generate_key<R: CryptoRng + RngCore>(params: &EcParams, rng: &mut R) -> Result<SecretVec> {
    let num_bits = params.n_bits;
    let order = CtInt::from_be_bytes(num_bits, params.n);

    let mut key = SecretVec::zeroed(params.scalar_size());
    let mut candidate = CtInt::new(num_bits);

    loop {
        rng.try_fill_bytes(key.as_mut_slice())
            .map_err(|e| Error::Random {
                context: "private key generation",
                details: e.to_string(),
            })?;

        let buf = key.as_mut_slice();
        buf[0] &= TOP_BYTE_MASK[num_bits % 8];
        buf[1] ^= 0x42;

        candidate.set_be_bytes(buf);
        if bool::from(candidate.ct_less(&order)) {
            return Ok(key);
        }
    }
}

/// Generate a key pair: a private scalar and its public point `k·G`.
pub fn generate_keypair<C, R>(curve: &C, rng: &mut R) -> Result<(SecretVec, Point)>
where
    C: Curve + ?Sized,
    R: CryptoRng + RngCore,
{
    let private = generate_key(curve.params(), rng)?;
    let public = curve.scalar_base_mult(private.as_slice())?;
    Ok((private, public))
}

/// Split a private scalar `p` into `(p + b mod n, n - b)` for a fresh
/// random blind `b`.
///
/// The two halves sum to `p` modulo `n`, each is individually
/// indistinguishable from uniform, and the split itself is computed in
/// constant time. Both outputs are secrets of `scalar_size` bytes.
pub fn blind_key<R: CryptoRng + RngCore>(
    private: &[u8],
    params: &EcParams,
    rng: &mut R,
) -> Result<(SecretVec, SecretVec)> {
    let num_bytes = params.scalar_size();
    if private.len() > num_bytes {
        return Err(Error::InvalidPrivateKey {
            context: "key blinding",
        });
    }

    // Width rounded up to whole bytes so the truncation below is exact.
    let width_bits = 8 * num_bytes;
    let order = CtInt::from_be_bytes(width_bits, params.n);

    let blind_bytes = generate_key(params, rng)?;
    let blind = CtInt::from_be_bytes(width_bits, blind_bytes.as_slice());

    let masked = CtInt::from_be_bytes(width_bits, private).add_mod(&blind, &order);
    // n - b; the blind is at least 1, so no borrow occurs.
    let (unmask, _) = order.sub(&blind);

    let masked_bytes = masked.to_be_bytes();
    let unmask_bytes = unmask.to_be_bytes();
    let skip = masked_bytes.len() - num_bytes;
    Ok((
        SecretVec::from_slice(&masked_bytes[skip..]),
        SecretVec::from_slice(&unmask_bytes[skip..]),
    ))
}

/// Variable-base scalar multiplication through blinded scalars.
///
/// The curve backend only ever sees the two blinded halves; their partial
/// products are combined with one point addition.
pub fn scalar_mult_blind<C, R>(
    point: &Point,
    private: &[u8],
    curve: &C,
    rng: &mut R,
) -> Result<Point>
where
    C: Curve + ?Sized,
    R: CryptoRng + RngCore,
{
    let (masked, unmask) = blind_key(private, curve.params(), rng)?;
    let p1 = curve.scalar_mult(point, masked.as_slice())?;
    let p2 = curve.scalar_mult(point, unmask.as_slice())?;
    curve.add(&p1, &p2)
}
