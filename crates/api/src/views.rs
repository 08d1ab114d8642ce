//! Server-rendered HTML pages.
//!
//! Templates are parsed once at startup from the configured directory.
//! Missing templates are a startup error; render failures surface as
//! [`tera::Error`] and become a 500 through [`crate::error::AppError`].

use std::path::Path;

use axum::response::Html;
use hourlypitch_db::models::idea::Idea;
use tera::{Context, Tera};

pub const INDEX_TEMPLATE: &str = "index.html";
pub const SUBMIT_TEMPLATE: &str = "submit.html";
pub const ADMIN_TEMPLATE: &str = "admin.html";

const REQUIRED_TEMPLATES: [&str; 3] = [INDEX_TEMPLATE, SUBMIT_TEMPLATE, ADMIN_TEMPLATE];

/// Outcome of a submission, carried back to the form via `?msg=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Rejected,
    Saved,
}

impl SubmitStatus {
    /// Parse the `msg` query flag. Unknown values show no message.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "err" => Some(SubmitStatus::Rejected),
            "good" => Some(SubmitStatus::Saved),
            _ => None,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            SubmitStatus::Rejected => "err",
            SubmitStatus::Saved => "good",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitStatus::Rejected => "There was a problem saving your idea. 500 chars maximum.",
            SubmitStatus::Saved => "Your idea has been submitted, it will show up eventually.",
        }
    }

    /// Where `/submit-save` sends the browser afterwards.
    pub fn redirect_target(&self) -> String {
        format!("/submit?msg={}", self.flag())
    }
}

/// The three page templates.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse every `*.html` file under `dir` and check the pages exist.
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let pattern = dir.join("**").join("*.html");
        let tera = Tera::new(&pattern.to_string_lossy())?;

        for name in REQUIRED_TEMPLATES {
            if !tera.get_template_names().any(|n| n == name) {
                return Err(tera::Error::msg(format!(
                    "Template '{name}' not found in {}",
                    dir.display()
                )));
            }
        }

        tracing::debug!(dir = %dir.display(), "Templates loaded");
        Ok(Self { tera })
    }

    /// Public landing page showing the current idea, if any.
    pub fn index(&self, current: Option<&Idea>) -> Result<Html<String>, tera::Error> {
        let mut context = Context::new();
        context.insert("idea", &current);
        self.render(INDEX_TEMPLATE, &context)
    }

    /// Submission form, with an optional status banner.
    pub fn submit(&self, status: Option<SubmitStatus>) -> Result<Html<String>, tera::Error> {
        let mut context = Context::new();
        context.insert("message", &status.map(|s| s.message()));
        self.render(SUBMIT_TEMPLATE, &context)
    }

    /// Moderation list of pending ideas.
    pub fn admin(
        &self,
        pending: &[Idea],
        awaiting_rotation: i64,
    ) -> Result<Html<String>, tera::Error> {
        let mut context = Context::new();
        context.insert("ideas", pending);
        context.insert("awaiting_rotation", &awaiting_rotation);
        self.render(ADMIN_TEMPLATE, &context)
    }

    fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, context).map(Html)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn template_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }

    fn sample_idea(id: i64, pitch: &str) -> Idea {
        Idea {
            id,
            pitch: pitch.to_string(),
            created: 1_700_000_000,
            approved: None,
            shown: None,
        }
    }

    #[test]
    fn test_submit_status_flags() {
        assert_eq!(SubmitStatus::from_flag("err"), Some(SubmitStatus::Rejected));
        assert_eq!(SubmitStatus::from_flag("good"), Some(SubmitStatus::Saved));
        assert_eq!(SubmitStatus::from_flag("other"), None);
        assert_eq!(SubmitStatus::Saved.redirect_target(), "/submit?msg=good");
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let result = Templates::load(Path::new("/definitely/not/a/template/dir"));
        assert!(result.is_err());
    }

    #[test]
    fn test_index_renders_pitch() {
        let templates = Templates::load(&template_dir()).unwrap();
        let idea = sample_idea(1, "Build a toaster");
        let Html(body) = templates.index(Some(&idea)).unwrap();
        assert!(body.contains("Build a toaster"));
    }

    #[test]
    fn test_index_without_current_idea() {
        let templates = Templates::load(&template_dir()).unwrap();
        let Html(body) = templates.index(None).unwrap();
        assert!(body.contains("No idea yet"));
    }

    #[test]
    fn test_pitch_is_html_escaped() {
        let templates = Templates::load(&template_dir()).unwrap();
        let idea = sample_idea(1, "<script>alert(1)</script>");
        let Html(body) = templates.index(Some(&idea)).unwrap();
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_submit_message() {
        let templates = Templates::load(&template_dir()).unwrap();
        let Html(body) = templates.submit(Some(SubmitStatus::Rejected)).unwrap();
        assert!(body.contains("500 chars maximum"));

        let Html(body) = templates.submit(None).unwrap();
        assert!(!body.contains("500 chars maximum"));
        assert!(!body.contains("has been submitted"));
    }

    #[test]
    fn test_admin_lists_pending() {
        let templates = Templates::load(&template_dir()).unwrap();
        let ideas = vec![sample_idea(7, "first pending"), sample_idea(8, "second pending")];
        let Html(body) = templates.admin(&ideas, 3).unwrap();
        assert!(body.contains("first pending"));
        assert!(body.contains("second pending"));
        assert!(body.contains("value=\"7\""));
        assert!(body.contains("3 approved"));
    }
}
