// RSA Encryption Implementation
// Textbook (unpadded) RSA, one ciphertext value per message character

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::error::{Result, RsaError};
use super::keygen::PublicKey;

/// Encrypt a single code point: ord^e mod n
fn encrypt_char(ch: char, public_key: &PublicKey) -> RsaBigInt {
    mod_pow(&from_u64(u64::from(ch as u32)), public_key.e(), public_key.n())
}

/// Encrypt a message character by character.
///
/// Returns exactly one value per character, in message order, each in
/// `[0, n)`. A character whose code point is `>= n` is reduced modulo `n`
/// and will not decrypt back to itself; use [`encrypt_checked`] to reject
/// such input instead.
pub fn encrypt(message: &str, public_key: &PublicKey) -> Vec<RsaBigInt> {
    message
        .chars()
        .map(|ch| encrypt_char(ch, public_key))
        .collect()
}

/// Encrypt a message, failing on the first character that does not fit
/// under the modulus.
pub fn encrypt_checked(message: &str, public_key: &PublicKey) -> Result<Vec<RsaBigInt>> {
    message
        .chars()
        .map(|ch| {
            let ordinal = ch as u32;
            if &from_u64(u64::from(ordinal)) >= public_key.n() {
                return Err(RsaError::CharacterOutOfRange {
                    character: ch,
                    ordinal,
                    modulus: public_key.n().clone(),
                });
            }
            Ok(encrypt_char(ch, public_key))
        })
        .collect()
}
