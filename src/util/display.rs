// Display Helpers
// Console formatting for ciphertexts

use crate::rsa::RsaBigInt;

/// Format a ciphertext as a decimal list, e.g. `[1087, 3071]`
pub fn format_ciphertext(ciphertext: &[RsaBigInt]) -> String {
    let values: Vec<String> = ciphertext.iter().map(|c| c.to_string()).collect();
    format!("[{}]", values.join(", "))
}

/// Format a ciphertext as space-separated big-endian hex values
pub fn format_ciphertext_hex(ciphertext: &[RsaBigInt]) -> String {
    ciphertext
        .iter()
        .map(|c| hex::encode(c.to_bytes_be()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    #[test]
    fn test_format_ciphertext() {
        let ciphertext = vec![from_u64(1087), from_u64(3071)];
        assert_eq!(format_ciphertext(&ciphertext), "[1087, 3071]");
        assert_eq!(format_ciphertext(&[]), "[]");
    }

    #[test]
    fn test_format_ciphertext_hex() {
        let ciphertext = vec![from_u64(1087), from_u64(0x0c), from_u64(0)];
        // BigUint zero encodes as a single 0x00 byte
        assert_eq!(format_ciphertext_hex(&ciphertext), "043f 0c 00");
    }
}
