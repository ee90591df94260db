//! Resume form – the raw input a front end collects, the required-field
//! gate, and submission.
//!
//! The gate lives here rather than in [`Resume`]: the record and the
//! renderer accept anything, it is the form that refuses to submit without
//! a name, email and phone.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::{GenerationError, GenerationResult};
use crate::photo::Photo;
use crate::pipeline::{generate_resume_pdf, GeneratorConfig, ResumeDownload};
use crate::resume::Resume;

/// Warning shown when a required field is empty.
pub const INCOMPLETE_WARNING: &str = "Please fill in Name, Email, and Phone to continue.";

/// Outcome of a failed submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Required fields are empty; the renderer was not invoked.
    #[error("Please fill in Name, Email, and Phone to continue.")]
    Incomplete { missing: Vec<&'static str> },

    /// The renderer ran and failed.
    #[error("An error occurred: {}", .0.message())]
    Generation(#[from] GenerationError),
}

/// Everything a resume form collects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub education: String,
    pub experience: String,
    /// Comma separated, e.g. "Python, HTML, CSS".
    pub skills: String,
    #[serde(skip)]
    pub photo: Option<Photo>,
}

impl ResumeForm {
    /// Load form fields from a JSON object. Unknown keys are ignored and
    /// missing keys are empty.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Attach a photo read from `path`.
    pub fn with_photo_file(mut self, path: &Path) -> GenerationResult<Self> {
        self.photo = Some(Photo::from_path(path)?);
        Ok(self)
    }

    /// Names of the required fields that are empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// The resume record for the current input.
    pub fn to_resume(&self) -> Resume {
        Resume::new(
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.summary.as_str(),
            self.education.as_str(),
            self.experience.as_str(),
            &self.skills,
        )
    }

    /// Check the required fields, then generate the document.
    pub fn submit(&self, config: &GeneratorConfig) -> Result<ResumeDownload, SubmitError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            log::warn!("Resume form incomplete, missing: {}", missing.join(", "));
            return Err(SubmitError::Incomplete { missing });
        }
        let resume = self.to_resume();
        Ok(generate_resume_pdf(&resume, self.photo.as_ref(), config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ResumeForm {
        ResumeForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1234".into(),
            skills: "Python, SQL".into(),
            ..ResumeForm::default()
        }
    }

    #[test]
    fn empty_phone_blocks_submission() {
        let form = ResumeForm {
            phone: String::new(),
            ..filled()
        };
        match form.submit(&GeneratorConfig::default()) {
            Err(SubmitError::Incomplete { missing }) => assert_eq!(missing, ["phone"]),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_message_is_the_warning() {
        let err = ResumeForm::default()
            .submit(&GeneratorConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), INCOMPLETE_WARNING);
        if let SubmitError::Incomplete { missing } = err {
            assert_eq!(missing, ["name", "email", "phone"]);
        }
    }

    #[test]
    fn complete_form_generates() {
        let download = filled().submit(&GeneratorConfig::default()).unwrap();
        assert_eq!(download.file_name, "Jane_Doe_resume.pdf");
        assert!(!download.bytes.is_empty());
    }

    #[test]
    fn generation_failures_read_as_user_errors() {
        let form = ResumeForm {
            summary: "Ελληνικά".into(),
            ..filled()
        };
        let err = form.submit(&GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, SubmitError::Generation(_)));
        assert!(err.to_string().starts_with("An error occurred: summary contains"));
    }

    #[test]
    fn form_from_json_defaults_missing_keys() {
        let form = ResumeForm::from_json(r#"{"name": "Jane", "skills": "Go, Rust"}"#).unwrap();
        assert_eq!(form.name, "Jane");
        assert!(form.email.is_empty());
        assert_eq!(form.to_resume().skills().len(), 2);
        assert_eq!(form.missing_required(), ["email", "phone"]);
    }
}
