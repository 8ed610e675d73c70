//! In-process stand-in for the recruitment backend.
//!
//! Selected with `RECRUIT_BACKEND=fake`. Answers every call locally with
//! plausible content so the whole front-end can be exercised offline.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{ApiError, RecruitmentApi};
use crate::models::document::{UploadFile, UploadResult};
use crate::models::interview::InterviewQuestion;
use crate::models::job_spec::JobSpecPrompt;

const QUESTION_BANK: &[(&str, &str)] = &[
    ("Technical", "Walk us through the architecture of a system you built end to end."),
    ("Behavioural", "Describe a time you disagreed with a stakeholder and how it was resolved."),
    ("Technical", "How do you decide between consistency and availability in a distributed design?"),
    ("Experience", "Which project on your CV best matches this role, and why?"),
    ("Behavioural", "How do you prioritise when several deadlines collide?"),
];

#[derive(Debug, Clone, Default)]
pub struct FakeRecruitmentApi;

impl FakeRecruitmentApi {
    pub fn new() -> Self {
        Self
    }
}

/// Renders a job specification from the prompt. Blank optional fields are left out.
fn render_job_spec(prompt: &JobSpecPrompt) -> String {
    let mut spec = format!(
        "Job Specification: {}\n\nDepartment: {}\n",
        prompt.role.trim(),
        prompt.department.trim()
    );

    for (label, value) in [
        ("Location", &prompt.location),
        ("Experience", &prompt.experience),
        ("Required skills", &prompt.skills),
    ] {
        if !value.trim().is_empty() {
            spec.push_str(&format!("{label}: {}\n", value.trim()));
        }
    }

    spec.push_str(&format!(
        "\nAbout the role\nWe are looking for a {} to join the {} team. \
         You will own delivery within the team and work closely with stakeholders \
         across the business.\n",
        prompt.role.trim(),
        prompt.department.trim()
    ));
    spec
}

/// Fresh `file-<8 hex>` handle; every upload gets a new one.
fn mint_file_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("file-{}", &hex[..8])
}

#[async_trait]
impl RecruitmentApi for FakeRecruitmentApi {
    async fn generate_job_spec(&self, prompt: &JobSpecPrompt) -> Result<String, ApiError> {
        debug!("fake backend: generating job spec for {:?}", prompt.role);
        Ok(render_job_spec(prompt))
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResult, ApiError> {
        let id = mint_file_id();
        debug!("fake backend: stored {} ({} bytes) as {id}", file.file_name, file.bytes.len());
        Ok(UploadResult { id })
    }

    async fn generate_interview_questions(
        &self,
        job_spec_id: &str,
        cv_id: &str,
    ) -> Result<Vec<InterviewQuestion>, ApiError> {
        debug!("fake backend: questions for job_spec_id={job_spec_id} cv_id={cv_id}");
        Ok(QUESTION_BANK
            .iter()
            .zip(1..)
            .map(|((category, question), id)| InterviewQuestion {
                id,
                category: category.to_string(),
                question: question.to_string(),
            })
            .collect())
    }
}
