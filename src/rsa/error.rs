// RSA Error Types
// Failures reported by key generation and checked encryption

use num_bigint::BigInt;

use super::bigint::RsaBigInt;

/// Errors that can occur while generating keys or encrypting.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("both p and q must be prime numbers (got p={p}, q={q})")]
    InvalidInput { p: BigInt, q: BigInt },

    #[error("could not find a suitable encryption exponent 'e' for phi={phi}")]
    NoExponentFound { phi: RsaBigInt },

    #[error("could not find a suitable decryption exponent 'd' for e={e}, phi={phi}")]
    NoInverseFound { e: RsaBigInt, phi: RsaBigInt },

    #[error("character {character:?} (ordinal {ordinal}) does not fit under modulus {modulus}")]
    CharacterOutOfRange {
        character: char,
        ordinal: u32,
        modulus: RsaBigInt,
    },
}

pub type Result<T> = std::result::Result<T, RsaError>;
