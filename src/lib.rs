//! Textbook RSA and Caesar-cipher toolkit.
//!
//! Everything here is for teaching: RSA keys come from two caller-supplied
//! primes, messages are encrypted one character at a time with no padding,
//! and the exponents are the smallest values that work. None of it is secure.
//!
//! ```
//! use num_bigint::BigInt;
//! use textbook_rsa::rsa::{decrypt, encrypt, generate_keys};
//!
//! let (public_key, private_key) = generate_keys(&BigInt::from(61), &BigInt::from(53)).unwrap();
//! let ciphertext = encrypt("Hello RSA!", &public_key);
//! assert_eq!(decrypt(&ciphertext, &private_key), "Hello RSA!");
//! ```

pub mod caesar;
pub mod cli;
pub mod rsa;
pub mod util;
