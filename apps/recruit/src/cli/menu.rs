//! Interactive CLI menu for the recruitment workflows.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::render;
use crate::errors::{Notice, WorkflowError};
use crate::models::job_spec::JobSpecPrompt;
use crate::state::AppState;
use crate::workflows::upload::{upload_notice, SlotId, UploadOutcome};
use crate::workflows::{interview, job_spec};

const DEFAULT_EXPORT_FILE: &str = "job-specification.txt";

/// Line-oriented prompt/response channel. Output is flushed after every write.
struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: AsyncBufRead + Unpin, W: Write> Console<R, W> {
    fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        self.out.flush()?;
        Ok(())
    }

    /// The line exactly as typed, without its line ending. `None` once input is exhausted.
    async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Form field input, passed on untouched.
    async fn ask_field(&mut self, label: &str) -> Result<String> {
        Ok(self.ask(label).await?.unwrap_or_default())
    }

    async fn ask_path(&mut self, label: &str) -> Result<String> {
        Ok(self.ask_field(label).await?.trim().to_string())
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        self.say(render::notice(notice))
    }

    fn upload_outcome(
        &mut self,
        slot: &SlotId,
        result: &Result<UploadOutcome, WorkflowError>,
    ) -> Result<()> {
        match upload_notice(slot, result) {
            Some(notice) => self.notice(&notice),
            None => Ok(()),
        }
    }
}

/// Runs the menu until the user exits or input ends.
pub async fn run_menu<R, W>(state: &AppState, input: R, out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut console = Console {
        lines: input.lines(),
        out,
    };

    console.say(format!("\n{}", render::rule()))?;
    console.say("  Recruitment Assistant")?;
    console.say(render::rule())?;

    loop {
        display_menu(&mut console)?;

        let Some(choice) = console.ask("Select action: ").await? else {
            break;
        };

        match choice.trim() {
            "0" => {
                console.say("\nExiting...")?;
                break;
            }
            "1" => generate_job_spec(state, &mut console).await?,
            "2" => export_job_spec(state, &mut console).await?,
            "3" => upload_one(state, &mut console, SlotId::job_spec()).await?,
            "4" => upload_one(state, &mut console, SlotId::cv()).await?,
            "5" => upload_both(state, &mut console).await?,
            "6" => generate_questions(state, &mut console).await?,
            "7" => display_status(state, &mut console)?,
            _ => console.say("\nInvalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn display_menu<R, W>(console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("")?;
    console.say("  1. Generate job specification")?;
    console.say("  2. Save job specification to file")?;
    console.say("  3. Upload job specification document")?;
    console.say("  4. Upload CV")?;
    console.say("  5. Upload job specification and CV together")?;
    console.say("  6. Generate interview questions")?;
    console.say("  7. Show status")?;
    console.say("  0. Exit")
}

async fn generate_job_spec<R, W>(state: &AppState, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("\nFields marked * are required.")?;
    let prompt = JobSpecPrompt {
        role: console.ask_field("Job Role/Title* (e.g. Senior Software Engineer): ").await?,
        department: console
            .ask_field("Department/Team* (e.g. Technology, Investment Banking): ")
            .await?,
        experience: console.ask_field("Experience Level (e.g. 5+ years): ").await?,
        skills: console.ask_field("Required Skills (e.g. Java, Python): ").await?,
        location: console.ask_field("Location (e.g. Zurich, London): ").await?,
    };

    if prompt.missing_required().is_empty() {
        console.say("Generating...")?;
    }
    let result = state.job_spec.generate(&prompt).await;
    console.notice(&job_spec::generation_notice(&result))?;

    if let Ok(spec) = result {
        console.say(render::job_spec(&spec))?;
    }
    Ok(())
}

async fn export_job_spec<R, W>(state: &AppState, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let default_path = state.config.export_dir.join(DEFAULT_EXPORT_FILE);
    let answer = console
        .ask_path(&format!("File path [{}]: ", default_path.display()))
        .await?;
    let path = if answer.is_empty() {
        default_path
    } else {
        PathBuf::from(answer)
    };

    let notice = match state.job_spec.export(&path).await {
        Ok(()) => Notice::success(
            "Saved",
            format!("Job specification written to {}.", path.display()),
        ),
        Err(e) => e.notice("Save Failed", "The job specification could not be saved."),
    };
    console.notice(&notice)
}

async fn upload_one<R, W>(state: &AppState, console: &mut Console<R, W>, slot: SlotId) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = console
        .ask_path(&format!(
            "Path to {} ({}): ",
            slot.noun(),
            crate::models::document::accepted_types_label()
        ))
        .await?;

    console.say("Uploading...")?;
    let result = state.uploads.upload_path(&slot, Path::new(&path)).await;
    console.upload_outcome(&slot, &result)?;
    console.say(render::slot_status(&slot, &state.uploads.state(&slot)))
}

async fn upload_both<R, W>(state: &AppState, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (job_slot, cv_slot) = (SlotId::job_spec(), SlotId::cv());
    let job_path = console
        .ask_path(&format!("Path to {}: ", job_slot.noun()))
        .await?;
    let cv_path = console.ask_path(&format!("Path to {}: ", cv_slot.noun())).await?;

    console.say("Uploading...")?;
    let (job, cv) = tokio::join!(
        state.uploads.upload_path(&job_slot, Path::new(&job_path)),
        state.uploads.upload_path(&cv_slot, Path::new(&cv_path)),
    );

    console.upload_outcome(&job_slot, &job)?;
    console.upload_outcome(&cv_slot, &cv)
}

async fn generate_questions<R, W>(state: &AppState, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("Generating...")?;
    let result = state.interview.generate().await;
    console.notice(&interview::generation_notice(&result))?;

    if result.is_ok() {
        console.say(render::question_groups(&state.interview.grouped()))?;
    }
    Ok(())
}

fn display_status<R, W>(state: &AppState, console: &mut Console<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say(format!("\n{}", render::rule()))?;
    console.say("Documents:")?;
    for (slot, slot_state) in state.uploads.snapshot() {
        console.say(format!("  {}", render::slot_status(&slot, &slot_state)))?;
    }

    console.say("\nJob specification:")?;
    if state.job_spec.is_busy() {
        console.say("  generating...")?;
    }
    match state.job_spec.job_spec() {
        Some(spec) => console.say(render::job_spec(&spec))?,
        None => console.say("  not generated yet")?,
    }

    console.say(format!(
        "\nInterview questions ({}):",
        state.interview.questions().len()
    ))?;
    if state.interview.is_busy() {
        console.say("  generating...")?;
    }
    console.say(render::question_groups(&state.interview.grouped()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::FakeRecruitmentApi;
    use crate::config::{BackendKind, Config};
    use crate::workflows::test_support::{Call, RecordingApi};
    use std::sync::Arc;

    fn config(export_dir: &Path) -> Config {
        Config {
            api_url: "http://unused".into(),
            backend: BackendKind::Fake,
            export_dir: export_dir.to_path_buf(),
            rust_log: "info".into(),
        }
    }

    async fn run_script(state: &AppState, script: &str) -> String {
        let mut out = Vec::new();
        run_menu(state, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_job_spec_round_trip_displays_and_saves_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config(dir.path()), Arc::new(FakeRecruitmentApi::new()));

        let output = run_script(&state, "1\nEngineer\nTech\n5 years\nGo\nZurich\n2\n\n0\n").await;

        let spec = state.job_spec.job_spec().unwrap();
        assert!(output.contains("[ok] Job Specification Generated"));
        assert!(output.contains(&spec));
        let saved = std::fs::read_to_string(dir.path().join(DEFAULT_EXPORT_FILE)).unwrap();
        assert_eq!(saved, spec);
    }

    #[tokio::test]
    async fn test_form_fields_are_sent_as_typed() {
        let dir = tempfile::tempdir().unwrap();
        let api = Arc::new(RecordingApi::new());
        let state = AppState::new(config(dir.path()), api.clone());

        run_script(&state, " 1 \nEngineer\nTech\n 5+ years \nRust, Go \n\n0\n").await;

        assert_eq!(
            api.calls(),
            vec![Call::JobSpec(JobSpecPrompt {
                role: "Engineer".into(),
                department: "Tech".into(),
                experience: " 5+ years ".into(),
                skills: "Rust, Go ".into(),
                location: String::new(),
            })]
        );
    }

    #[tokio::test]
    async fn test_missing_fields_show_validation_notice_without_request() {
        let dir = tempfile::tempdir().unwrap();
        let api = Arc::new(RecordingApi::new());
        let state = AppState::new(config(dir.path()), api.clone());

        let output = run_script(&state, "1\n\nTech\n\n\n\n0\n").await;

        assert!(output.contains("[error] Missing information"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_both_then_generate_questions() {
        let dir = tempfile::tempdir().unwrap();
        let job = dir.path().join("job.pdf");
        let cv = dir.path().join("cv.docx");
        std::fs::write(&job, "spec").unwrap();
        std::fs::write(&cv, "cv").unwrap();

        let api = Arc::new(RecordingApi::new());
        api.set_questions(vec![crate::workflows::test_support::question(
            1,
            "Technical",
            "Explain lifetimes.",
        )]);
        let state = AppState::new(config(dir.path()), api.clone());

        let script = format!("5\n{}\n{}\n6\n7\n0\n", job.display(), cv.display());
        let output = run_script(&state, &script).await;

        assert!(output.contains("[ok] Job Specification Uploaded"));
        assert!(output.contains("[ok] CV Uploaded"));
        assert!(output.contains("[ok] Questions Generated"));
        assert!(output.contains("Technical (1)\n  1. Explain lifetimes."));
        assert!(output.contains("CV: cv.docx (uploaded as id-cv.docx)"));
        assert!(api.calls().contains(&Call::Questions {
            job_spec_id: "id-job.pdf".into(),
            cv_id: "id-cv.docx".into()
        }));
    }

    #[tokio::test]
    async fn test_generate_questions_without_uploads_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let api = Arc::new(RecordingApi::new());
        let state = AppState::new(config(dir.path()), api.clone());

        let output = run_script(&state, "6\n0\n").await;

        assert!(output.contains("[error] Missing Files"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_choice_and_eof_end_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config(dir.path()), Arc::new(FakeRecruitmentApi::new()));

        let output = run_script(&state, "42\n").await;

        assert!(output.contains("Invalid choice"));
    }
}
