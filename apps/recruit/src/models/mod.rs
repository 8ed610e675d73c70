pub mod document;
pub mod interview;
pub mod job_spec;
