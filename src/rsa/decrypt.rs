// RSA Decryption Implementation
// Inverse of the per-character textbook encryption

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::PrivateKey;

/// Decrypt a single value back to a character: c^d mod n
///
/// Results that are not Unicode scalar values become U+FFFD.
fn decrypt_value(value: &RsaBigInt, private_key: &PrivateKey) -> char {
    mod_pow(value, private_key.d(), private_key.n())
        .to_u32()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Decrypt a ciphertext into the original message.
///
/// Values are decoded in order, one character each. The round trip is exact
/// only when every original code point was below `n`.
pub fn decrypt(ciphertext: &[RsaBigInt], private_key: &PrivateKey) -> String {
    ciphertext
        .iter()
        .map(|value| decrypt_value(value, private_key))
        .collect()
}
