// Caesar Cipher Module
// ROT-n shifting and brute-force breaking

pub mod rot;

pub use rot::{brute_force, rotate, ALPHABET_LEN};
