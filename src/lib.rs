//! # resume-forge – fixed-template resume → PDF generator
//!
//! A resume is a handful of text fields and an optional photo. This crate
//! turns one into a PDF with a fixed look. The pipeline stages are:
//!
//! 1. **Gate** – a [`form::ResumeForm`] refuses to submit without a name,
//!    email and phone
//! 2. **Record** – the input is frozen into a [`resume::Resume`]
//! 3. **Stage** – an optional photo is staged in a transient file and
//!    decoded ([`photo`])
//! 4. **Layout** – blocks are placed on A4 pages in template order ([`layout`])
//! 5. **Render** – emit PDF bytes via printpdf ([`render`])
//!
//! A C-compatible FFI surface is exposed via the [`ffi`] module.

pub mod encoding;
pub mod error;
pub mod ffi;
pub mod fonts;
pub mod form;
pub mod layout;
pub mod layout_config;
pub mod photo;
pub mod pipeline;
pub mod render;
pub mod resume;
pub mod samples;

// Re-exports for convenience
pub use error::{GenerationError, GenerationResult};
pub use form::{ResumeForm, SubmitError};
pub use photo::Photo;
pub use pipeline::{
    compute_resume_layout, generate_resume_pdf, suggested_file_name, GeneratorConfig,
    ResumeDownload, PDF_MIME,
};
pub use resume::Resume;
