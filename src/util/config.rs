// Demo Configuration
// Inputs for the RSA walkthrough: the two primes and the plaintext

use num_bigint::BigInt;

/// Default primes and message from the classic worked example
pub const DEFAULT_P: i64 = 61;
pub const DEFAULT_Q: i64 = 53;
pub const DEFAULT_MESSAGE: &str = "Hello RSA!";

/// Configuration for the RSA demonstration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub p: BigInt,
    pub q: BigInt,
    pub message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            p: BigInt::from(DEFAULT_P),
            q: BigInt::from(DEFAULT_Q),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn with_primes(mut self, p: BigInt, q: BigInt) -> Self {
        self.p = p;
        self.q = q;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
