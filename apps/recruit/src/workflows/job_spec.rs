//! Job specification generation: validate the form, call the backend, keep the text.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use super::BusyFlag;
use crate::api_client::RecruitmentApi;
use crate::errors::{Notice, WorkflowError};
use crate::models::job_spec::JobSpecPrompt;

pub struct JobSpecWorkflow {
    api: Arc<dyn RecruitmentApi>,
    busy: BusyFlag,
    job_spec: Mutex<Option<String>>,
}

impl JobSpecWorkflow {
    pub fn new(api: Arc<dyn RecruitmentApi>) -> Self {
        Self {
            api,
            busy: BusyFlag::default(),
            job_spec: Mutex::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// The last successfully generated specification, exactly as the backend sent it.
    pub fn job_spec(&self) -> Option<String> {
        self.job_spec
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Generates a specification. Prompts without a role or department are
    /// rejected before any request is made. A failure keeps the previous text.
    pub async fn generate(&self, prompt: &JobSpecPrompt) -> Result<String, WorkflowError> {
        if !prompt.missing_required().is_empty() {
            return Err(WorkflowError::Validation(
                "Please provide at least a role and department".to_string(),
            ));
        }

        let _busy = self
            .busy
            .try_enter()
            .ok_or(WorkflowError::Busy("job specification generation"))?;

        info!(
            "Generating job specification for {:?} in {:?}",
            prompt.role, prompt.department
        );
        let spec = self.api.generate_job_spec(prompt).await?;

        *self.job_spec.lock().unwrap_or_else(PoisonError::into_inner) = Some(spec.clone());
        Ok(spec)
    }

    /// Writes the current specification to `path` byte for byte.
    pub async fn export(&self, path: &Path) -> Result<(), WorkflowError> {
        let spec = self.job_spec().ok_or_else(|| {
            WorkflowError::Validation("Generate a job specification first".to_string())
        })?;

        tokio::fs::write(path, spec.as_bytes())
            .await
            .inspect_err(|e| warn!("Writing {} failed: {e}", path.display()))?;
        info!("Job specification written to {}", path.display());
        Ok(())
    }
}

pub fn generation_notice(result: &Result<String, WorkflowError>) -> Notice {
    match result {
        Ok(_) => Notice::success(
            "Job Specification Generated",
            "Your job specification has been successfully created.",
        ),
        Err(e) => e.notice(
            "Generation Failed",
            "There was an error generating the job specification.",
        ),
    }
}
