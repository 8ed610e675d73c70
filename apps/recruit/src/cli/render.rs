//! Plain-text rendering of workflow state. Pure functions, no I/O.

use crate::errors::Notice;
use crate::models::interview::QuestionGroups;
use crate::workflows::upload::{SlotId, SlotState};

const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn notice(notice: &Notice) -> String {
    let tag = if notice.is_destructive() { "[error]" } else { "[ok]" };
    format!("{tag} {}: {}", notice.title, notice.description)
}

pub fn slot_status(slot: &SlotId, state: &SlotState) -> String {
    let detail = match state {
        SlotState::Empty => "no file selected".to_string(),
        SlotState::Uploading { file_name } => format!("{file_name} (uploading...)"),
        SlotState::Uploaded { file_name, id } => format!("{file_name} (uploaded as {id})"),
    };
    format!("{}: {detail}", slot.title())
}

/// The specification text is emitted untouched between two rules.
pub fn job_spec(text: &str) -> String {
    format!("{}\n{text}\n{}", rule(), rule())
}

pub fn question_groups(groups: &QuestionGroups) -> String {
    if groups.is_empty() {
        return "No interview questions generated yet.".to_string();
    }

    let mut out = String::new();
    for (category, questions) in groups {
        out.push_str(&format!("{category} ({})\n", questions.len()));
        for q in questions {
            out.push_str(&format!("  {}. {}\n", q.id, q.question));
        }
    }
    out.trim_end().to_string()
}
