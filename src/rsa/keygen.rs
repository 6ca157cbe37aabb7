// RSA Key Generation
// Deterministic textbook key pair from two caller-supplied primes

use std::fmt;

use num_bigint::BigInt;
use num_traits::One;

use super::bigint::{from_u64, gcd, mod_inverse, RsaBigInt};
use super::error::{Result, RsaError};
use super::prime::is_prime;

/// RSA Public Key `(e, n)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    e: RsaBigInt, // Public exponent
    n: RsaBigInt, // Modulus
}

/// RSA Private Key `(d, n)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    d: RsaBigInt, // Private exponent
    n: RsaBigInt, // Modulus (same as public)
}

impl PublicKey {
    #[inline]
    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    #[inline]
    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, message: &str) -> Vec<RsaBigInt> {
        super::encrypt::encrypt(message, self)
    }
}

impl PrivateKey {
    #[inline]
    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    #[inline]
    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    /// Decrypt a ciphertext using this private key
    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> String {
        super::decrypt::decrypt(ciphertext, self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

/// Smallest `e` in `[2, phi)` coprime with `phi`.
fn find_public_exponent(phi: &RsaBigInt) -> Option<RsaBigInt> {
    let mut e = from_u64(2);
    while &e < phi {
        if gcd(&e, phi).is_one() {
            return Some(e);
        }
        e += 1u8;
    }
    None
}

/// Generate an RSA key pair from primes `p` and `q`.
///
/// `n = p * q` and `phi = (p - 1)(q - 1)`. The public exponent is the
/// smallest value coprime with `phi` and the private exponent its smallest
/// inverse, so the same primes always give the same keys. `phi` itself is
/// not kept in either key.
///
/// # Errors
///
/// - [`RsaError::InvalidInput`] if `p` or `q` is not prime.
/// - [`RsaError::NoExponentFound`] if `phi <= 2` leaves no candidate for `e`.
/// - [`RsaError::NoInverseFound`] if `e` has no inverse in `[2, phi)`.
pub fn generate_keys(p: &BigInt, q: &BigInt) -> Result<(PublicKey, PrivateKey)> {
    if !(is_prime(p) && is_prime(q)) {
        return Err(RsaError::InvalidInput {
            p: p.clone(),
            q: q.clone(),
        });
    }

    // Both are >= 2 here, so the magnitudes are the values themselves
    let p = p.magnitude();
    let q = q.magnitude();

    let n = p * q;
    let phi = (p - 1u8) * (q - 1u8);

    let e = find_public_exponent(&phi).ok_or_else(|| RsaError::NoExponentFound {
        phi: phi.clone(),
    })?;

    let d = mod_inverse(&e, &phi).ok_or_else(|| RsaError::NoInverseFound {
        e: e.clone(),
        phi: phi.clone(),
    })?;

    let public_key = PublicKey { e, n: n.clone() };
    let private_key = PrivateKey { d, n };

    Ok((public_key, private_key))
}

#[cfg(test)]
pub(crate) fn test_keys(e: u64, d: u64, n: u64) -> (PublicKey, PrivateKey) {
    (
        PublicKey {
            e: from_u64(e),
            n: from_u64(n),
        },
        PrivateKey {
            d: from_u64(d),
            n: from_u64(n),
        },
    )
}
