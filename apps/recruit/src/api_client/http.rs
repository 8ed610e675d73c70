use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::{
    ApiError, RecruitmentApi, GENERATE_JOB_SPEC_PATH, GENERATE_QUESTIONS_PATH, UPLOAD_PATH,
};
use crate::models::document::{UploadFile, UploadResult};
use crate::models::interview::{InterviewQuestion, InterviewQuestionRequest};
use crate::models::job_spec::{JobSpecPrompt, JobSpecResponse};

/// `RecruitmentApi` over HTTP. The base URL is injected at construction,
/// e.g. `http://localhost:8000/api`.
#[derive(Clone)]
pub struct HttpRecruitmentApi {
    client: Client,
    base_url: String,
}

impl HttpRecruitmentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Rejects non-2xx responses without reading the body, then decodes JSON.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

impl HttpRecruitmentApi {
    async fn post_job_spec(&self, prompt: &JobSpecPrompt) -> Result<String, ApiError> {
        debug!("POST {GENERATE_JOB_SPEC_PATH} role={:?}", prompt.role);

        let response = self
            .client
            .post(self.url(GENERATE_JOB_SPEC_PATH))
            .json(prompt)
            .send()
            .await?;

        let body: JobSpecResponse = decode(response).await?;
        Ok(body.job_spec)
    }

    async fn post_upload(&self, file: &UploadFile) -> Result<UploadResult, ApiError> {
        debug!(
            "POST {UPLOAD_PATH} file={} bytes={}",
            file.file_name,
            file.bytes.len()
        );

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(file.content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;

        decode(response).await
    }

    async fn post_questions(
        &self,
        job_spec_id: &str,
        cv_id: &str,
    ) -> Result<Vec<InterviewQuestion>, ApiError> {
        debug!("POST {GENERATE_QUESTIONS_PATH} job_spec_id={job_spec_id} cv_id={cv_id}");

        let response = self
            .client
            .post(self.url(GENERATE_QUESTIONS_PATH))
            .json(&InterviewQuestionRequest { job_spec_id, cv_id })
            .send()
            .await?;

        decode(response).await
    }
}

// Every failure is logged once here, with the operation it belongs to.
#[async_trait]
impl RecruitmentApi for HttpRecruitmentApi {
    async fn generate_job_spec(&self, prompt: &JobSpecPrompt) -> Result<String, ApiError> {
        self.post_job_spec(prompt)
            .await
            .inspect_err(|e| error!("Generating job specification failed: {e}"))
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResult, ApiError> {
        self.post_upload(file)
            .await
            .inspect_err(|e| error!("Uploading {} failed: {e}", file.file_name))
    }

    async fn generate_interview_questions(
        &self,
        job_spec_id: &str,
        cv_id: &str,
    ) -> Result<Vec<InterviewQuestion>, ApiError> {
        self.post_questions(job_spec_id, cv_id)
            .await
            .inspect_err(|e| error!("Generating interview questions failed: {e}"))
    }
}
