//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenshoku_core::types::UserId;

/// A registered job seeker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Apply a profile update. Fields left as `None` keep their value.
    pub fn apply(&mut self, update: UpdateProfile) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }
}

/// Data for updating a user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New full name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New postal address.
    pub address: Option<String>,
}
