//! Recruitment API client: the single point of entry for all backend calls.
//!
//! ARCHITECTURAL RULE: workflows talk to the backend only through `RecruitmentApi`.
//! The real HTTP client and the in-process fake are chosen once at startup.
//!
//! Each call is one request/response round trip: no retry, no timeout, no cancellation.
//! Calls are not assumed idempotent; repeating one may create new backend artifacts.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::document::{UploadFile, UploadResult};
use crate::models::interview::InterviewQuestion;
use crate::models::job_spec::JobSpecPrompt;

pub mod fake;
pub mod http;

pub use fake::FakeRecruitmentApi;
pub use http::HttpRecruitmentApi;

pub const GENERATE_JOB_SPEC_PATH: &str = "/generate-job-spec";
pub const UPLOAD_PATH: &str = "/upload";
pub const GENERATE_QUESTIONS_PATH: &str = "/generate-interview-questions";

/// Failure of a single backend call. Workflows treat every variant the same way;
/// the distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    Status { status: u16 },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The backend contract. Implement this to swap backends without touching
/// workflow or presentation code.
///
/// Carried by the workflows as `Arc<dyn RecruitmentApi>`.
#[async_trait]
pub trait RecruitmentApi: Send + Sync {
    /// Generates a job specification and returns its text unchanged.
    async fn generate_job_spec(&self, prompt: &JobSpecPrompt) -> Result<String, ApiError>;

    /// Uploads a document and returns the backend's opaque handle for it.
    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResult, ApiError>;

    async fn generate_interview_questions(
        &self,
        job_spec_id: &str,
        cv_id: &str,
    ) -> Result<Vec<InterviewQuestion>, ApiError>;
}
