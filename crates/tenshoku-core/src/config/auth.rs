//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Byte length of the random part of issued bearer tokens.
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
    /// Maximum accepted password length on login.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_bytes: default_token_bytes(),
            password_max_length: default_password_max(),
        }
    }
}

fn default_token_bytes() -> usize {
    32
}

fn default_password_max() -> usize {
    128
}
