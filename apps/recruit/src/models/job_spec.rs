use serde::{Deserialize, Serialize};

/// Structured input for job specification generation.
/// `role` and `department` are required; the remaining fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpecPrompt {
    pub role: String,
    pub department: String,
    pub experience: String,
    pub skills: String,
    pub location: String,
}

impl JobSpecPrompt {
    /// Names of the required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("role", &self.role), ("department", &self.department)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Response body of `POST /generate-job-spec`.
#[derive(Debug, Deserialize)]
pub struct JobSpecResponse {
    pub job_spec: String,
}
