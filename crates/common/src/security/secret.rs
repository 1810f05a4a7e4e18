//! Secret data types with guaranteed zeroization

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret byte buffer that zeroizes itself on drop.
///
/// Private scalars in this workspace have curve-dependent lengths, so the
/// buffer size is a runtime property. The contents never appear in
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector, taking ownership of the data.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector by copying a slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Create an all-zero secret vector of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow the contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
