//! Step definitions and the fixed deployment plan.

/// Primary branch, the source of truth for published content.
pub const PRIMARY_BRANCH: &str = "main";

/// Publishing branch, force-reset to the primary branch and served by Pages.
pub const PUBLISH_BRANCH: &str = "gh-pages";

/// What the pipeline does when a step exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop the pipeline.
    Abort,
    /// Print the warning and stop: there is nothing to deploy.
    NothingToDo(&'static str),
    /// Print the warning and run the next step anyway.
    Continue(&'static str),
    /// Run the return-to-primary cleanup step, then stop.
    ReturnThenAbort,
}

/// One external command plus its description and failure policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: String,
    pub description: &'static str,
    pub on_failure: OnFailure,
}

impl Step {
    fn new(command: impl Into<String>, description: &'static str, on_failure: OnFailure) -> Self {
        Self {
            command: command.into(),
            description,
            on_failure,
        }
    }
}

/// Outcome of one command: exit status zero or not, plus captured text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// The ordered steps publishing `message`.
pub fn plan(message: &str) -> Vec<Step> {
    use OnFailure::*;

    vec![
        Step::new(
            "git status --short",
            "Checking git status",
            NothingToDo("No changes detected or error occurred"),
        ),
        Step::new("git add -A", "Adding all changes", Abort),
        Step::new(
            format!("git commit -m \"{}\"", escape_double_quoted(message)),
            "Committing changes",
            Continue("Nothing to commit or commit failed"),
        ),
        Step::new(
            format!("git push origin {PRIMARY_BRANCH}"),
            "Pushing to main branch",
            Abort,
        ),
        Step::new(
            format!("git checkout {PUBLISH_BRANCH}"),
            "Switching to gh-pages branch",
            Abort,
        ),
        Step::new(
            format!("git reset --hard {PRIMARY_BRANCH}"),
            "Syncing gh-pages with main",
            ReturnThenAbort,
        ),
        Step::new(
            format!("git push -f origin {PUBLISH_BRANCH}"),
            "Force pushing to gh-pages",
            ReturnThenAbort,
        ),
        return_to_primary(),
    ]
}

/// Checkout of the primary branch, also used as best-effort cleanup.
pub fn return_to_primary() -> Step {
    Step::new(
        format!("git checkout {PRIMARY_BRANCH}"),
        "Returning to main branch",
        OnFailure::Abort,
    )
}

/// Escape text for use inside a double-quoted shell word.
///
/// POSIX shells expand `\`, `"`, `$` and `` ` `` between double quotes;
/// `cmd.exe` only treats `"` specially.
fn escape_double_quoted(text: &str) -> String {
    let special: &[char] = if cfg!(windows) {
        &['"']
    } else {
        &['\\', '"', '$', '`']
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
