use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single generated interview question. `category` is free text chosen by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: i64,
    pub category: String,
    pub question: String,
}

/// Request body of `POST /generate-interview-questions`.
#[derive(Debug, Serialize)]
pub struct InterviewQuestionRequest<'a> {
    pub job_spec_id: &'a str,
    pub cv_id: &'a str,
}

/// Questions bucketed by category. Iteration order is the order in which each
/// category first appears in the flat list.
pub type QuestionGroups = IndexMap<String, Vec<InterviewQuestion>>;

/// Groups a flat question list by category, keeping first-seen category order
/// and the original order of questions within each category.
pub fn group_by_category(questions: &[InterviewQuestion]) -> QuestionGroups {
    let mut groups = QuestionGroups::new();
    for question in questions {
        groups
            .entry(question.category.clone())
            .or_default()
            .push(question.clone());
    }
    groups
}
