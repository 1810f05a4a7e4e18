//! NIST prime-curve subgroup parameters
//!
//! Orders are stored big-endian, exactly as published in SP 800-186. All
//! four curves have cofactor 1, so the base-point subgroup is the whole
//! curve group.

/// Domain parameters of a short-Weierstrass prime curve's base-point subgroup.
///
/// The struct is deliberately small: the MQV primitives only need the
/// subgroup order, its bit length and the coordinate width. Everything
/// else (field prime, curve coefficients, generator) stays inside the
/// curve backend.
#[derive(Debug)]
pub struct EcParams {
    /// Standard curve name, e.g. `"P-256"`.
    pub name: &'static str,
    /// Subgroup order `n` as big-endian bytes with no leading zeros.
    pub n: &'static [u8],
    /// Bit length of `n`.
    pub n_bits: usize,
    /// Width of one field element (point coordinate) in bytes.
    pub field_size: usize,
}

impl EcParams {
    /// Byte length of a private scalar: ⌈n_bits / 8⌉.
    pub const fn scalar_size(&self) -> usize {
        (self.n_bits + 7) >> 3
    }
}

/// NIST P-224 (secp224r1).
pub static NIST_P224: EcParams = EcParams {
    name: "P-224",
    n: &[
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x16, 0xa2,
        0xe0, 0xb8, 0xf0, 0x3e, 0x13, 0xdd, 0x29, 0x45,
        0x5c, 0x5c, 0x2a, 0x3d,
    ],
    n_bits: 224,
    field_size: 28,
};

/// NIST P-256 (secp256r1, prime256v1).
pub static NIST_P256: EcParams = EcParams {
    name: "P-256",
    n: &[
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84,
        0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
    ],
    n_bits: 256,
    field_size: 32,
};

/// NIST P-384 (secp384r1).
pub static NIST_P384: EcParams = EcParams {
    name: "P-384",
    n: &[
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xc7, 0x63, 0x4d, 0x81, 0xf4, 0x37, 0x2d, 0xdf,
        0x58, 0x1a, 0x0d, 0xb2, 0x48, 0xb0, 0xa7, 0x7a,
        0xec, 0xec, 0x19, 0x6a, 0xcc, 0xc5, 0x29, 0x73,
    ],
    n_bits: 384,
    field_size: 48,
};

/// NIST P-521 (secp521r1).
pub static NIST_P521: EcParams = EcParams {
    name: "P-521",
    n: &[
        0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfa, 0x51, 0x86, 0x87, 0x83, 0xbf, 0x2f,
        0x96, 0x6b, 0x7f, 0xcc, 0x01, 0x48, 0xf7, 0x09,
        0xa5, 0xd0, 0x3b, 0xb5, 0xc9, 0xb8, 0x89, 0x9c,
        0x47, 0xae, 0xbb, 0x6f, 0xb7, 0x1e, 0x91, 0x38,
        0x64, 0x09,
    ],
    n_bits: 521,
    field_size: 66,
};
