use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::ec::{generate_keypair, P224, P256, P384, P521};
use params::{NIST_P224, NIST_P256, NIST_P384, NIST_P521};

struct Party {
    static_priv: SecretVec,
    static_pub: Point,
    ephemeral_priv: SecretVec,
    ephemeral_pub: Point,
}

fn new_party<C: Curve + ?Sized>(curve: &C) -> Party {
    let mut rng = OsRng;
    let (static_priv, static_pub) = generate_keypair(curve, &mut rng).expect("static keypair");
    let (ephemeral_priv, ephemeral_pub) =
        generate_keypair(curve, &mut rng).expect("ephemeral keypair");
    Party {
        static_priv,
        static_pub,
        ephemeral_priv,
        ephemeral_pub,
    }
}

fn assert_points_equal(a: &Point, b: &Point, msg: &str) {
    assert_eq!(hex::encode(a.x()), hex::encode(b.x()), "{}: x", msg);
    assert_eq!(hex::encode(a.y()), hex::encode(b.y()), "{}: y", msg);
}

fn assert_symmetry<C: Curve + ?Sized>(curve: &C) {
    let alice = new_party(curve);
    let bob = new_party(curve);

    let shared_alice = mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.ephemeral_pub,
        curve,
    )
    .expect("mqv for alice");

    let shared_bob = mqv(
        bob.static_priv.as_slice(),
        bob.ephemeral_priv.as_slice(),
        bob.ephemeral_pub.x(),
        &alice.static_pub,
        &alice.ephemeral_pub,
        curve,
    )
    .expect("mqv for bob");

    assert_points_equal(&shared_alice, &shared_bob, curve.params().name);
    assert!(!shared_alice.is_identity());
}

fn assert_blinded_matches_plain<C: Curve + ?Sized>(curve: &C) {
    let alice = new_party(curve);
    let bob = new_party(curve);

    let plain = mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.ephemeral_pub,
        curve,
    )
    .expect("plain mqv");

    let blinded = blind_mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.ephemeral_pub,
        curve,
        &mut OsRng,
    )
    .expect("blinded mqv");

    assert_points_equal(&plain, &blinded, curve.params().name);
}

#[test]
fn shared_secret_matches_between_peers_p224() {
    assert_symmetry(&P224);
}

#[test]
fn shared_secret_matches_between_peers_p256() {
    assert_symmetry(&P256);
}

#[test]
fn shared_secret_matches_between_peers_p384() {
    assert_symmetry(&P384);
}

#[test]
fn shared_secret_matches_between_peers_p521() {
    assert_symmetry(&P521);
}

#[test]
fn blinded_agreement_matches_plain_p224() {
    assert_blinded_matches_plain(&P224);
}

#[test]
fn blinded_agreement_matches_plain_p256() {
    assert_blinded_matches_plain(&P256);
}

#[test]
fn blinded_agreement_matches_plain_p384() {
    assert_blinded_matches_plain(&P384);
}

#[test]
fn blinded_agreement_matches_plain_p521() {
    assert_blinded_matches_plain(&P521);
}

#[test]
fn one_pass_scheme_agrees() {
    // Bob has no ephemeral key: Alice substitutes his static key, and he
    // runs the primitive with his static key doubling as the ephemeral.
    let alice = new_party(&P256);
    let bob = new_party(&P256);

    let shared_alice = mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.static_pub,
        &P256,
    )
    .expect("one-pass mqv for alice");

    let shared_bob = mqv(
        bob.static_priv.as_slice(),
        bob.static_priv.as_slice(),
        bob.static_pub.x(),
        &alice.static_pub,
        &alice.ephemeral_pub,
        &P256,
    )
    .expect("one-pass mqv for bob");

    assert_points_equal(&shared_alice, &shared_bob, "one-pass");
}

#[test]
fn blinding_draw_order_is_deterministic() {
    // The static key is blinded before the ephemeral one, so a fixed
    // random source reproduces the exact blinded computation.
    let alice = new_party(&P256);
    let bob = new_party(&P256);

    let run = |seed: u64| {
        blind_mqv(
            alice.static_priv.as_slice(),
            alice.ephemeral_priv.as_slice(),
            alice.ephemeral_pub.x(),
            &bob.static_pub,
            &bob.ephemeral_pub,
            &P256,
            &mut ChaCha20Rng::seed_from_u64(seed),
        )
        .expect("blinded mqv")
    };

    assert_eq!(run(9), run(9));
    // Different draws still land on the same shared point.
    assert_points_equal(&run(9), &run(10), "blinding independence");
}

#[test]
fn cofactor_is_one_for_supported_curves() {
    for params in [&NIST_P224, &NIST_P256, &NIST_P384, &NIST_P521] {
        assert_eq!(cofactor(params).expect("cofactor"), 1, "{}", params.name);
    }
}

#[test]
fn unknown_curves_are_rejected() {
    static BRAINPOOL: EcParams = EcParams {
        name: "brainpoolP256r1",
        n: &[0xa9],
        n_bits: 8,
        field_size: 32,
    };
    let err = cofactor(&BRAINPOOL).unwrap_err();
    assert!(matches!(err, Error::UnsupportedCurve { .. }));

    let bogus = Point::identity(32);
    let err = mqv(&[1], &[1], &[1], &bogus, &bogus, &Unsupported).unwrap_err();
    assert!(matches!(err, Error::UnsupportedCurve { .. }));
}

/// Adapter for a curve outside the supported set; the cofactor lookup
/// must fail before any arithmetic is attempted.
struct Unsupported;

impl Curve for Unsupported {
    fn params(&self) -> &'static EcParams {
        static PARAMS: EcParams = EcParams {
            name: "P-192",
            n: &[0xff],
            n_bits: 8,
            field_size: 24,
        };
        &PARAMS
    }
    fn scalar_base_mult(&self, _k: &[u8]) -> Result<Point> {
        unreachable!("cofactor lookup rejects the curve first")
    }
    fn scalar_mult(&self, _point: &Point, _k: &[u8]) -> Result<Point> {
        unreachable!("cofactor lookup rejects the curve first")
    }
    fn add(&self, _a: &Point, _b: &Point) -> Result<Point> {
        unreachable!("cofactor lookup rejects the curve first")
    }
    fn mul_add_mod_n(&self, _a: &[u8], _b: &[u8], _c: &[u8]) -> Result<SecretVec> {
        unreachable!("cofactor lookup rejects the curve first")
    }
}

#[test]
fn zero_signature_hits_the_infinity_check() {
    // Zero private keys force sig = 0 and therefore sig·B = O.
    let bob = new_party(&P256);
    let alice = new_party(&P256);
    let zero = vec![0u8; NIST_P256.scalar_size()];

    let err = mqv(
        &zero,
        &zero,
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.ephemeral_pub,
        &P256,
    )
    .unwrap_err();
    assert!(matches!(err, Error::PointAtInfinity { .. }));
}

#[test]
fn avf_sets_exactly_the_half_bit() {
    // P-256: f = 256, so v = (x mod 2^128) + 2^128 in 17 bytes.
    let x = vec![0xff; 32];
    let v = avf(&x, &NIST_P256);
    assert_eq!(v.len(), 17);
    assert_eq!(v[0], 0x01);
    assert!(v[1..].iter().all(|&b| b == 0xff));

    // Low bits survive unchanged.
    let mut x = vec![0u8; 32];
    x[31] = 0x2a;
    let v = avf(&x, &NIST_P256);
    assert_eq!(v[0], 0x01);
    assert_eq!(v[16], 0x2a);
    assert!(v[1..16].iter().all(|&b| b == 0));

    // P-521: f = 521, ceil(f/2) = 261, so bit 261 lands at 0x20 in the
    // top byte of a 33-byte value.
    let x = vec![0xff; 66];
    let v = avf(&x, &NIST_P521);
    assert_eq!(v.len(), 33);
    assert_eq!(v[0], 0x3f);
    assert!(v[1..].iter().all(|&b| b == 0xff));
}

#[test]
fn mul_small_carries_across_the_full_width() {
    let value = SecretVec::from_slice(&[0xff, 0xff]);
    let tripled = mul_small(&value, 3);
    // 0xffff * 3 = 0x02fffd, left-padded into len + 8 bytes
    assert_eq!(
        tripled.as_slice(),
        &[0, 0, 0, 0, 0, 0, 0, 0x02, 0xff, 0xfd]
    );
}

#[test]
fn distinct_peers_produce_distinct_secrets() {
    // Sanity: different peer keys must not collapse to the same secret.
    let alice = new_party(&P256);
    let bob = new_party(&P256);
    let carol = new_party(&P256);

    let with_bob = mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &bob.static_pub,
        &bob.ephemeral_pub,
        &P256,
    )
    .expect("mqv");
    let with_carol = mqv(
        alice.static_priv.as_slice(),
        alice.ephemeral_priv.as_slice(),
        alice.ephemeral_pub.x(),
        &carol.static_pub,
        &carol.ephemeral_pub,
        &P256,
    )
    .expect("mqv");

    assert_ne!(with_bob, with_carol);
}
