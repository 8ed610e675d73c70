//! Recording `RecruitmentApi` double shared by the workflow tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api_client::{
    ApiError, RecruitmentApi, GENERATE_JOB_SPEC_PATH, GENERATE_QUESTIONS_PATH,
};
use crate::models::document::{UploadFile, UploadResult};
use crate::models::interview::InterviewQuestion;
use crate::models::job_spec::JobSpecPrompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    JobSpec(JobSpecPrompt),
    Upload(String),
    Questions { job_spec_id: String, cv_id: String },
}

/// Records every call as soon as it arrives. Uploads answer `id-<file name>`;
/// job specs echo the role.
///
/// `set_failing` makes every call fail and `fail_upload_of` fails one file.
/// `hold`, `hold_job_spec` and `hold_questions` park a call until the returned
/// sender fires.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
    failing_uploads: Mutex<HashSet<String>>,
    questions: Mutex<Vec<InterviewQuestion>>,
    held: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fail_upload_of(&self, file_name: &str) {
        self.failing_uploads
            .lock()
            .unwrap()
            .insert(file_name.to_string());
    }

    pub fn set_questions(&self, questions: Vec<InterviewQuestion>) {
        *self.questions.lock().unwrap() = questions;
    }

    /// The upload of `file_name` will not complete until the returned sender fires.
    pub fn hold(&self, file_name: &str) -> oneshot::Sender<()> {
        self.hold_key(file_name)
    }

    pub fn hold_job_spec(&self) -> oneshot::Sender<()> {
        self.hold_key(GENERATE_JOB_SPEC_PATH)
    }

    pub fn hold_questions(&self) -> oneshot::Sender<()> {
        self.hold_key(GENERATE_QUESTIONS_PATH)
    }

    fn hold_key(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    /// Records `call`, waits on the gate for `key` if one is set, then applies failures.
    async fn handle(&self, call: Call, key: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);

        let gate = self.held.lock().unwrap().remove(key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let fails_alone = self.failing_uploads.lock().unwrap().contains(key);
        if fails_alone || self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(())
    }
}

pub fn question(id: i64, category: &str, text: &str) -> InterviewQuestion {
    InterviewQuestion {
        id,
        category: category.to_string(),
        question: text.to_string(),
    }
}

#[async_trait]
impl RecruitmentApi for RecordingApi {
    async fn generate_job_spec(&self, prompt: &JobSpecPrompt) -> Result<String, ApiError> {
        self.handle(Call::JobSpec(prompt.clone()), GENERATE_JOB_SPEC_PATH)
            .await?;
        Ok(format!("Job Specification: {}", prompt.role))
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResult, ApiError> {
        self.handle(Call::Upload(file.file_name.clone()), &file.file_name)
            .await?;
        Ok(UploadResult {
            id: format!("id-{}", file.file_name),
        })
    }

    async fn generate_interview_questions(
        &self,
        job_spec_id: &str,
        cv_id: &str,
    ) -> Result<Vec<InterviewQuestion>, ApiError> {
        let call = Call::Questions {
            job_spec_id: job_spec_id.to_string(),
            cv_id: cv_id.to_string(),
        };
        self.handle(call, GENERATE_QUESTIONS_PATH).await?;
        Ok(self.questions.lock().unwrap().clone())
    }
}
