//! ECC MQV key agreement
//!
//! The Menezes-Qu-Vanstone primitive from SP 800-56A Rev. 3 §5.7.2, plus
//! a blinded variant that never hands the raw private scalars to the
//! curve backend.
//!
//! In the full scheme C(2e, 2s) each party contributes a static and an
//! ephemeral key pair. The one-pass scheme C(1e, 2s) reuses the same
//! entry points: the sender passes the receiver's static public key in
//! place of the missing ephemeral key, and the receiver passes its own
//! static key twice.

#[cfg(test)]
mod tests;

use common::security::SecretVec;
use params::EcParams;
use rand::{CryptoRng, RngCore};

use crate::ec::{blind_key, Curve, Point};
use crate::error::{Error, Result};

/// Cofactor of the curve group over the base-point subgroup.
///
/// All supported curves are the NIST prime curves, whose cofactor is 1.
/// Anything else fails fast with [`Error::UnsupportedCurve`].
pub fn cofactor(params: &EcParams) -> Result<u64> {
    match params.name {
        "P-224" | "P-256" | "P-384" | "P-521" => Ok(1),
        other => Err(Error::UnsupportedCurve { name: other.into() }),
    }
}

/// Associative value function (SP 800-56A Rev. 3 §5.7.2.2).
///
/// For `f = ⌈log₂ n⌉` and `b = 2^⌈f/2⌉`, maps an x coordinate to
/// `(x mod b) + b`. The `+ b` term sets bit `⌈f/2⌉`, so the result is
/// always exactly `⌈f/2⌉ + 1` bits wide. The output is public.
fn avf(x: &[u8], params: &EcParams) -> Vec<u8> {
    let half = (params.n_bits + 1) / 2;
    let len = half / 8 + 1;
    let mut v = vec![0u8; len];

    let take = x.len().min(len);
    v[len - take..].copy_from_slice(&x[x.len() - take..]);

    // Clear everything at or above bit `half` in the top byte, then set
    // bit `half` itself.
    let shift = half % 8;
    v[0] &= (1u8 << shift).wrapping_sub(1);
    v[0] |= 1u8 << shift;
    v
}

/// The implicit-signature scalar
/// `h · (ownEphemeralPriv + avf(ownEphemeralX) · ownStaticPriv) mod n`.
///
/// The cofactor multiplication happens after the mod-`n` reduction; for
/// the supported curves `h = 1` makes it a no-op, but the order of
/// operations is what the standard prescribes.
fn mqv_sig<C: Curve + ?Sized>(
    curve: &C,
    own_static_priv: &[u8],
    own_ephemeral_priv: &[u8],
    own_ephemeral_x: &[u8],
    h: u64,
) -> Result<SecretVec> {
    let assoc = avf(own_ephemeral_x, curve.params());
    let sig = curve.mul_add_mod_n(&assoc, own_static_priv, own_ephemeral_priv)?;
    if h == 1 {
        return Ok(sig);
    }
    Ok(mul_small(&sig, h))
}

/// Schoolbook multiplication of a big-endian value by a small cofactor.
/// Only reachable if a curve with `h > 1` is ever added.
fn mul_small(value: &SecretVec, factor: u64) -> SecretVec {
    let bytes = value.as_slice();
    let mut out = vec![0u8; bytes.len() + 8];
    let mut carry: u128 = 0;
    for i in (0..bytes.len()).rev() {
        let v = bytes[i] as u128 * factor as u128 + carry;
        out[i + 8] = v as u8;
        carry = v >> 8;
    }
    for i in (0..8).rev() {
        out[i] = carry as u8;
        carry >>= 8;
    }
    SecretVec::new(out)
}

/// The shared base point
/// `otherEphemeralPublic + avf(otherEphemeralX) · otherStaticPublic`.
///
/// Depends only on the peer's public values.
fn mqv_base<C: Curve + ?Sized>(
    curve: &C,
    peer_static: &Point,
    peer_ephemeral: &Point,
) -> Result<Point> {
    let assoc = avf(peer_ephemeral.x(), curve.params());
    let shifted = curve.scalar_mult(peer_static, &assoc)?;
    curve.add(peer_ephemeral, &shifted)
}

/// ECC MQV primitive (SP 800-56A Rev. 3 §5.7.2.3).
///
/// Derives the shared point `Z = sig · B` from the caller's static and
/// ephemeral private keys and the peer's static and ephemeral public
/// keys. Fails with [`Error::PointAtInfinity`] if the result degenerates,
/// which indicates a malformed peer key.
///
/// For the one-pass scheme, pass the peer's static public key as
/// `peer_ephemeral`; a peer without an ephemeral key passes its own
/// static key for both private arguments.
pub fn mqv<C: Curve + ?Sized>(
    own_static_priv: &[u8],
    own_ephemeral_priv: &[u8],
    own_ephemeral_x: &[u8],
    peer_static: &Point,
    peer_ephemeral: &Point,
    curve: &C,
) -> Result<Point> {
    let h = cofactor(curve.params())?;

    let sig = mqv_sig(curve, own_static_priv, own_ephemeral_priv, own_ephemeral_x, h)?;
    let base = mqv_base(curve, peer_static, peer_ephemeral)?;

    let shared = curve.scalar_mult(&base, sig.as_slice())?;
    if shared.is_identity() {
        return Err(Error::PointAtInfinity {
            operation: "MQV shared secret",
        });
    }
    Ok(shared)
}

/// ECC MQV with additive key blinding.
///
/// The signature scalar is affine in the two private keys, so splitting
/// each key into `(d + r mod n, n - r)` and running the signature on the
/// halves yields two partial secrets whose sum on the curve equals the
/// unblinded result:
///
/// `s₁·B + s₂·B = (s₁ + s₂)·B = sig·B`
///
/// The curve backend only ever multiplies by blinded scalars, each
/// indistinguishable from uniform, so a variable-time backend learns
/// nothing about the private keys. The static key is blinded before the
/// ephemeral one, giving deterministic test sources a fixed draw order.
///
/// Unlike [`mqv`], the blinded variant does not test the result for the
/// point at infinity; callers that need the check re-verify the returned
/// point.
#[allow(clippy::too_many_arguments)]
pub fn blind_mqv<C, R>(
    own_static_priv: &[u8],
    own_ephemeral_priv: &[u8],
    own_ephemeral_x: &[u8],
    peer_static: &Point,
    peer_ephemeral: &Point,
    curve: &C,
    rng: &mut R,
) -> Result<Point>
where
    C: Curve + ?Sized,
    R: CryptoRng + RngCore,
{
    let params = curve.params();
    let h = cofactor(params)?;

    let (static_masked, static_unmask) = blind_key(own_static_priv, params, rng)?;
    let (eph_masked, eph_unmask) = blind_key(own_ephemeral_priv, params, rng)?;

    let base = mqv_base(curve, peer_static, peer_ephemeral)?;

    let s1 = mqv_sig(
        curve,
        static_masked.as_slice(),
        eph_masked.as_slice(),
        own_ephemeral_x,
        h,
    )?;
    let p1 = curve.scalar_mult(&base, s1.as_slice())?;

    let s2 = mqv_sig(
        curve,
        static_unmask.as_slice(),
        eph_unmask.as_slice(),
        own_ephemeral_x,
        h,
    )?;
    let p2 = curve.scalar_mult(&base, s2.as_slice())?;

    curve.add(&p1, &p2)
}
