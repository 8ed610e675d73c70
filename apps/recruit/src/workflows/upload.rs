//! Upload slots: one independent state machine per document slot.
//!
//! `Empty -> Uploading -> Uploaded(id)`; a failed upload drops straight back to
//! `Empty` with the selected file cleared so the user can pick again.
//! Slots never share state, so uploads to different slots may overlap freely.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::api_client::{ApiError, RecruitmentApi};
use crate::errors::{Notice, WorkflowError};
use crate::models::document::{UploadFile, UploadResult};

/// Identifies an upload slot. Any key is valid; `job_spec` and `cv` are the
/// two slots interview question generation depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    pub const JOB_SPEC: &'static str = "job_spec";
    pub const CV: &'static str = "cv";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn job_spec() -> Self {
        Self::new(Self::JOB_SPEC)
    }

    pub fn cv() -> Self {
        Self::new(Self::CV)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Heading form, e.g. "Job Specification".
    pub fn title(&self) -> String {
        match self.as_str() {
            Self::JOB_SPEC => "Job Specification".to_string(),
            Self::CV => "CV".to_string(),
            other => other.replace('_', " "),
        }
    }

    /// Running-text form, e.g. "job specification".
    pub fn noun(&self) -> String {
        match self.as_str() {
            Self::JOB_SPEC => "job specification".to_string(),
            Self::CV => "CV".to_string(),
            other => other.replace('_', " "),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    #[default]
    Empty,
    Uploading {
        file_name: String,
    },
    Uploaded {
        file_name: String,
        id: String,
    },
}

impl SlotState {
    pub fn uploaded_id(&self) -> Option<&str> {
        match self {
            SlotState::Uploaded { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, SlotState::Uploading { .. })
    }
}

/// What an upload call amounts to once it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The slot now holds this upload.
    Uploaded(UploadResult),
    /// A newer selection replaced this one while it was in flight; its result was discarded.
    Superseded,
}

impl UploadOutcome {
    pub fn id(&self) -> Option<&str> {
        match self {
            UploadOutcome::Uploaded(result) => Some(result.id.as_str()),
            UploadOutcome::Superseded => None,
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    state: SlotState,
    /// Bumped on every selection; completions for older attempts are ignored.
    attempt: u64,
}

pub struct UploadWorkflow {
    api: Arc<dyn RecruitmentApi>,
    slots: Mutex<IndexMap<SlotId, Slot>>,
}

impl UploadWorkflow {
    /// Creates the workflow with the given slots pre-registered in display order.
    pub fn new(api: Arc<dyn RecruitmentApi>, slots: impl IntoIterator<Item = SlotId>) -> Self {
        let slots = slots.into_iter().map(|id| (id, Slot::default())).collect();
        Self {
            api,
            slots: Mutex::new(slots),
        }
    }

    fn slots(&self) -> MutexGuard<'_, IndexMap<SlotId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self, slot: &SlotId) -> SlotState {
        self.slots()
            .get(slot)
            .map(|s| s.state.clone())
            .unwrap_or_default()
    }

    pub fn uploaded_id(&self, slot: &SlotId) -> Option<String> {
        self.slots()
            .get(slot)
            .and_then(|s| s.state.uploaded_id().map(String::from))
    }

    /// All known slots and their states, in registration order.
    pub fn snapshot(&self) -> Vec<(SlotId, SlotState)> {
        self.slots()
            .iter()
            .map(|(id, slot)| (id.clone(), slot.state.clone()))
            .collect()
    }

    /// Reads a document from disk and uploads it into `slot`.
    /// A rejected or unreadable file leaves the slot untouched.
    pub async fn upload_path(
        &self,
        slot: &SlotId,
        path: &Path,
    ) -> Result<UploadOutcome, WorkflowError> {
        let file = UploadFile::from_path(path)
            .await
            .inspect_err(|e| warn!("Could not select {} for slot {slot}: {e}", path.display()))?;
        self.upload(slot, file).await
    }

    /// Uploads `file` into `slot`. Selecting a file always starts a new attempt,
    /// replacing whatever the slot held before. If another selection lands while
    /// this one is in flight, the call resolves to `Superseded` whatever the
    /// backend answered.
    pub async fn upload(
        &self,
        slot: &SlotId,
        file: UploadFile,
    ) -> Result<UploadOutcome, WorkflowError> {
        let attempt = self.begin(slot, &file.file_name);
        info!("Uploading {} into slot {slot}", file.file_name);

        let result = self.api.upload_file(&file).await;
        if !self.finish(slot, attempt, file.file_name, &result) {
            return Ok(UploadOutcome::Superseded);
        }

        Ok(UploadOutcome::Uploaded(result?))
    }

    fn begin(&self, slot: &SlotId, file_name: &str) -> u64 {
        let mut slots = self.slots();
        let entry = slots.entry(slot.clone()).or_default();
        entry.attempt += 1;
        entry.state = SlotState::Uploading {
            file_name: file_name.to_string(),
        };
        entry.attempt
    }

    fn finish(
        &self,
        slot: &SlotId,
        attempt: u64,
        file_name: String,
        result: &Result<UploadResult, ApiError>,
    ) -> bool {
        let mut slots = self.slots();
        let entry = slots.entry(slot.clone()).or_default();

        if entry.attempt != attempt {
            info!("Dropping stale upload result for {file_name} in slot {slot}");
            return false;
        }

        entry.state = match result {
            Ok(uploaded) => {
                info!("Slot {slot} holds {file_name} as {}", uploaded.id);
                SlotState::Uploaded {
                    file_name,
                    id: uploaded.id.clone(),
                }
            }
            Err(_) => {
                info!("Slot {slot} cleared after failed upload of {file_name}");
                SlotState::Empty
            }
        };
        true
    }
}

/// Notice for the outcome of an upload into `slot`. A superseded upload gets none;
/// the selection that replaced it reports for the slot.
pub fn upload_notice(
    slot: &SlotId,
    result: &Result<UploadOutcome, WorkflowError>,
) -> Option<Notice> {
    match result {
        Ok(UploadOutcome::Uploaded(_)) => Some(Notice::success(
            format!("{} Uploaded", slot.title()),
            format!("Your {} file was successfully uploaded.", slot.noun()),
        )),
        Ok(UploadOutcome::Superseded) => None,
        Err(e) => Some(e.notice(
            "Upload Failed",
            &format!("There was an error uploading your {}.", slot.noun()),
        )),
    }
}
