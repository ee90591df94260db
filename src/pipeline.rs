//! Pipeline – ties together photo staging, layout and rendering into a
//! single function call.

use std::path::PathBuf;

use crate::error::GenerationResult;
use crate::layout::layout_resume;
use crate::layout_config::ResumeLayout;
use crate::photo::{LoadedPhoto, Photo, TransientPhoto};
use crate::render::render_pdf;
use crate::resume::Resume;

/// Content type of the generated document.
pub const PDF_MIME: &str = "application/pdf";

/// Configuration for resume generation.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Document title embedded in the PDF metadata
    /// (default: "{name} Resume").
    pub title: Option<String>,
    /// Directory for the transient photo file (default: the system temp dir).
    pub temp_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// The title used for `resume`.
    pub fn title_for(&self, resume: &Resume) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} Resume", resume.name()))
    }
}

/// A finished document, ready to be offered for download.
#[derive(Debug, Clone)]
pub struct ResumeDownload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: &'static str,
    /// Number of pages in the document.
    pub pages: usize,
}

/// Suggested download name: spaces in the name become underscores.
pub fn suggested_file_name(name: &str) -> String {
    format!("{}_resume.pdf", name.replace(' ', "_"))
}

/// Stage the photo, decode it from its transient file and hand the decoded
/// pixels to `f`. The transient file is removed when this returns.
fn with_staged_photo<T>(
    photo: Option<&Photo>,
    config: &GeneratorConfig,
    f: impl FnOnce(Option<&LoadedPhoto>) -> GenerationResult<T>,
) -> GenerationResult<T> {
    match photo {
        None => f(None),
        Some(p) => {
            let staged = TransientPhoto::stage(p, config.temp_dir.as_deref())?;
            let loaded = staged.load()?;
            f(Some(&loaded))
        }
    }
}

/// Full pipeline: resume + optional photo → PDF download.
pub fn generate_resume_pdf(
    resume: &Resume,
    photo: Option<&Photo>,
    config: &GeneratorConfig,
) -> GenerationResult<ResumeDownload> {
    let title = config.title_for(resume);
    let (bytes, pages) = with_staged_photo(photo, config, |loaded| {
        let layout = layout_resume(resume, loaded, &title)?;
        let bytes = render_pdf(&layout, loaded)?;
        Ok((bytes, layout.pages.len()))
    })?;

    log::info!(
        "Generated resume for {:?}: {} bytes, {} page(s)",
        resume.name(),
        bytes.len(),
        pages
    );

    Ok(ResumeDownload {
        bytes,
        file_name: suggested_file_name(resume.name()),
        mime: PDF_MIME,
        pages,
    })
}

/// Generate only the layout (no PDF rendering) – useful for testing and
/// inspection.
pub fn compute_resume_layout(
    resume: &Resume,
    photo: Option<&Photo>,
    config: &GeneratorConfig,
) -> GenerationResult<ResumeLayout> {
    let title = config.title_for(resume);
    with_staged_photo(photo, config, |loaded| layout_resume(resume, loaded, &title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_basic() {
        let resume = Resume::new("Jane Doe", "j@x", "1", "", "", "", "Go");
        let download = generate_resume_pdf(&resume, None, &GeneratorConfig::default()).unwrap();
        assert_eq!(&download.bytes[0..5], b"%PDF-");
        assert_eq!(download.file_name, "Jane_Doe_resume.pdf");
        assert_eq!(download.mime, "application/pdf");
        assert_eq!(download.pages, 1);
    }

    #[test]
    fn file_name_replaces_every_space() {
        assert_eq!(suggested_file_name("Mary Ann  Lee"), "Mary_Ann__Lee_resume.pdf");
        assert_eq!(suggested_file_name("Solo"), "Solo_resume.pdf");
    }

    #[test]
    fn default_title_uses_the_name() {
        let resume = Resume::new("Jane Doe", "j@x", "1", "", "", "", "");
        let layout = compute_resume_layout(&resume, None, &GeneratorConfig::default()).unwrap();
        assert_eq!(layout.title, "Jane Doe Resume");

        let config = GeneratorConfig {
            title: Some("CV".into()),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.title_for(&resume), "CV");
    }
}
