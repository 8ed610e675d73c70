use std::sync::Arc;

use tracing::info;

use crate::api_client::{FakeRecruitmentApi, HttpRecruitmentApi, RecruitmentApi};
use crate::config::{BackendKind, Config};
use crate::workflows::interview::InterviewWorkflow;
use crate::workflows::job_spec::JobSpecWorkflow;
use crate::workflows::upload::{SlotId, UploadWorkflow};

/// Everything the presentation layer needs, wired to a single backend.
pub struct AppState {
    pub config: Config,
    pub job_spec: JobSpecWorkflow,
    pub uploads: Arc<UploadWorkflow>,
    pub interview: InterviewWorkflow,
}

impl AppState {
    /// Builds the workflows on top of the backend chosen in `config`.
    pub fn from_config(config: Config) -> Self {
        let api: Arc<dyn RecruitmentApi> = match config.backend {
            BackendKind::Http => {
                let http = HttpRecruitmentApi::new(config.api_url.clone());
                info!("Backend: HTTP at {}", http.base_url());
                Arc::new(http)
            }
            BackendKind::Fake => {
                info!("Backend: in-process fake");
                Arc::new(FakeRecruitmentApi::new())
            }
        };
        Self::new(config, api)
    }

    pub fn new(config: Config, api: Arc<dyn RecruitmentApi>) -> Self {
        let uploads = Arc::new(UploadWorkflow::new(
            api.clone(),
            [SlotId::job_spec(), SlotId::cv()],
        ));

        Self {
            config,
            job_spec: JobSpecWorkflow::new(api.clone()),
            interview: InterviewWorkflow::new(api, uploads.clone()),
            uploads,
        }
    }
}
