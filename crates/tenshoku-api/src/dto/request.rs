//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tenshoku_entity::user::UpdateProfile;
use tenshoku_service::job::ApplyRequest;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "メールアドレスを入力してください"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "パスワードを入力してください"))]
    pub password: String,
}

/// Update profile request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Full name.
    #[validate(length(min = 1, max = 100, message = "氏名は1〜100文字で入力してください"))]
    pub name: Option<String>,
    /// Phone number.
    #[validate(length(max = 30, message = "電話番号が長すぎます"))]
    pub phone: Option<String>,
    /// Postal address.
    #[validate(length(max = 200, message = "住所が長すぎます"))]
    pub address: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            address: req.address,
        }
    }
}

/// Job application request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationRequest {
    /// Applicant name.
    #[validate(length(min = 1, message = "氏名を入力してください"))]
    pub name: String,
    /// Applicant phone.
    #[validate(length(min = 1, message = "電話番号を入力してください"))]
    pub phone: String,
    /// Applicant address.
    #[validate(length(min = 1, message = "住所を入力してください"))]
    pub address: String,
    /// Cover message.
    #[serde(default)]
    #[validate(length(max = 2000, message = "メッセージが長すぎます"))]
    pub message: String,
}

impl From<ApplicationRequest> for ApplyRequest {
    fn from(req: ApplicationRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            address: req.address,
            message: req.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            email: String::new(),
            password: "x".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_profile_fields_are_optional() {
        assert!(UpdateProfileRequest::default().validate().is_ok());
        let blank_name = UpdateProfileRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());
    }
}
