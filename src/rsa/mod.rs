// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;

pub use bigint::{gcd, mod_inverse, mod_inverse_search, mod_pow, RsaBigInt};
pub use decrypt::decrypt;
pub use encrypt::{encrypt, encrypt_checked};
pub use error::{Result, RsaError};
pub use keygen::{generate_keys, PrivateKey, PublicKey};
pub use prime::{is_prime, is_prime_i64};
