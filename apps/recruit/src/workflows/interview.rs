//! Interview question generation from the two uploaded documents.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use super::upload::{SlotId, UploadWorkflow};
use super::BusyFlag;
use crate::api_client::RecruitmentApi;
use crate::errors::{Notice, WorkflowError};
use crate::models::interview::{group_by_category, InterviewQuestion, QuestionGroups};

pub struct InterviewWorkflow {
    api: Arc<dyn RecruitmentApi>,
    uploads: Arc<UploadWorkflow>,
    busy: BusyFlag,
    questions: Mutex<Vec<InterviewQuestion>>,
}

impl InterviewWorkflow {
    pub fn new(api: Arc<dyn RecruitmentApi>, uploads: Arc<UploadWorkflow>) -> Self {
        Self {
            api,
            uploads,
            busy: BusyFlag::default(),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn questions(&self) -> Vec<InterviewQuestion> {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current questions bucketed by category for display.
    pub fn grouped(&self) -> QuestionGroups {
        group_by_category(&self.questions.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Generates questions for the uploaded job specification and CV.
    ///
    /// Both slots must hold an uploaded document; otherwise nothing is sent.
    /// On success the question list is replaced wholesale, on failure it is left as is.
    pub async fn generate(&self) -> Result<Vec<InterviewQuestion>, WorkflowError> {
        let job_spec_id = self.uploads.uploaded_id(&SlotId::job_spec());
        let cv_id = self.uploads.uploaded_id(&SlotId::cv());
        let (Some(job_spec_id), Some(cv_id)) = (job_spec_id, cv_id) else {
            let uploading = [SlotId::job_spec(), SlotId::cv()]
                .iter()
                .any(|slot| self.uploads.state(slot).is_uploading());
            let msg = if uploading {
                "Please wait for both uploads to finish."
            } else {
                "Please upload both a job specification and CV."
            };
            return Err(WorkflowError::Validation(msg.to_string()));
        };

        let _busy = self
            .busy
            .try_enter()
            .ok_or(WorkflowError::Busy("question generation"))?;

        info!("Generating interview questions for job_spec_id={job_spec_id} cv_id={cv_id}");
        let questions = self
            .api
            .generate_interview_questions(&job_spec_id, &cv_id)
            .await?;
        info!("Received {} interview questions", questions.len());

        *self.questions.lock().unwrap_or_else(PoisonError::into_inner) = questions.clone();
        Ok(questions)
    }
}

pub fn generation_notice(result: &Result<Vec<InterviewQuestion>, WorkflowError>) -> Notice {
    match result {
        Ok(_) => Notice::success(
            "Questions Generated",
            "Interview questions have been generated successfully.",
        ),
        Err(WorkflowError::Validation(msg)) => Notice::destructive("Missing Files", msg.clone()),
        Err(e) => e.notice(
            "Generation Failed",
            "There was an error generating the interview questions.",
        ),
    }
}
