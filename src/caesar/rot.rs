// Caesar Cipher (ROT-n)
// Shifts ASCII letters along the alphabet; tries every shift to break a ciphertext

/// Number of letters in the alphabet, and so the number of distinct shifts
pub const ALPHABET_LEN: u8 = 26;

fn rotate_char(ch: char, shift: u8) -> char {
    let base = if ch.is_ascii_uppercase() {
        b'A'
    } else if ch.is_ascii_lowercase() {
        b'a'
    } else {
        return ch;
    };

    let offset = (ch as u8 - base + shift % ALPHABET_LEN) % ALPHABET_LEN;
    char::from(base + offset)
}

/// Shift every ASCII letter in `text` forward by `shift`, keeping its case.
/// Everything else is copied unchanged.
pub fn rotate(text: &str, shift: u8) -> String {
    text.chars().map(|ch| rotate_char(ch, shift)).collect()
}

/// All 26 candidate decryptions of `text`, ordered by shift.
pub fn brute_force(text: &str) -> Vec<(u8, String)> {
    (0..ALPHABET_LEN)
        .map(|shift| (shift, rotate(text, shift)))
        .collect()
}
