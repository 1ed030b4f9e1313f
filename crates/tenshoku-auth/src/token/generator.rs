//! Opaque bearer tokens.
//!
//! Tokens carry no claims; they are random lookup keys into the session
//! store.

use std::fmt::Write;

use argon2::password_hash::rand_core::{OsRng, RngCore};

use tenshoku_core::config::AuthConfig;

/// Shortest token the generator will issue, in random bytes.
const MIN_TOKEN_BYTES: usize = 16;

/// Produces hex-encoded random bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    byte_len: usize,
}

impl TokenGenerator {
    /// Creates a generator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            byte_len: config.token_bytes.max(MIN_TOKEN_BYTES),
        }
    }

    /// Generate a fresh token.
    pub fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.byte_len];
        OsRng.fill_bytes(&mut bytes);
        bytes.iter().fold(
            String::with_capacity(self.byte_len * 2),
            |mut out, b| {
                let _ = write!(out, "{b:02x}");
                out
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_hex_and_unique() {
        let generator = TokenGenerator::new(&AuthConfig::default());
        let a = generator.generate();
        let b = generator.generate();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_config_is_raised_to_minimum() {
        let config = AuthConfig {
            token_bytes: 2,
            ..AuthConfig::default()
        };
        assert_eq!(TokenGenerator::new(&config).generate().len(), 32);
    }
}
