//! Job application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenshoku_core::types::{ApplicationId, JobId, UserId};

use super::status::ApplicationStatus;

/// A user's application to a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Unique application identifier.
    pub id: ApplicationId,
    /// The job applied to.
    pub job_id: JobId,
    /// The applicant.
    pub user_id: UserId,
    /// Applicant name as entered on the form.
    pub name: String,
    /// Applicant phone as entered on the form.
    pub phone: String,
    /// Applicant address as entered on the form.
    pub address: String,
    /// Cover message.
    pub message: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to create an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplication {
    /// The job applied to.
    pub job_id: JobId,
    /// The applicant.
    pub user_id: UserId,
    /// Applicant name.
    pub name: String,
    /// Applicant phone.
    pub phone: String,
    /// Applicant address.
    pub address: String,
    /// Cover message.
    pub message: String,
}

impl JobApplication {
    /// Build a fresh `pending` application.
    pub fn new(input: CreateApplication) -> Self {
        Self {
            id: ApplicationId::generate(),
            job_id: input.job_id,
            user_id: input.user_id,
            name: input.name,
            phone: input.phone,
            address: input.address,
            message: input.message,
            status: ApplicationStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
