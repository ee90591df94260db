//! Resume layout – places the resume's blocks on A4 pages in the fixed
//! template order and produces a [`ResumeLayout`].
//!
//! Order, top to bottom:
//! 1. photo (centred, fixed width) or a blank spacer
//! 2. name, contact line
//! 3. "Professional Summary", "Education", "Work Experience" headings, each
//!    followed by its wrapped text
//! 4. "Skills" heading and one `- skill` line per skill
//!
//! Every heading is emitted even when its text is empty. Lines that would
//! cross the bottom margin continue on a new page; there is no other
//! pagination logic.

use crate::encoding::check_win_ansi;
use crate::error::GenerationResult;
use crate::fonts::{measure_text_width, wrap_text, Face};
use crate::layout_config::*;
use crate::photo::LoadedPhoto;
use crate::resume::Resume;

/// Left, right and top page margin in millimetres.
pub const PAGE_MARGIN_MM: f32 = 10.0;
/// Bottom margin; a line that would end below it moves to the next page.
pub const BOTTOM_MARGIN_MM: f32 = 20.0;
/// Height of every text cell.
pub const LINE_HEIGHT_MM: f32 = 10.0;

pub const PHOTO_WIDTH_MM: f32 = 50.0;
pub const PHOTO_TOP_MM: f32 = 10.0;
/// Vertical advance after the photo.
pub const PHOTO_ADVANCE_MM: f32 = 55.0;
/// Vertical blank used instead of the photo.
pub const NO_PHOTO_SPACER_MM: f32 = 20.0;

const CONTACT_GAP_MM: f32 = 10.0;
const SECTION_GAP_MM: f32 = 5.0;

const NAME_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

pub const SUMMARY_HEADING: &str = "Professional Summary";
pub const EDUCATION_HEADING: &str = "Education";
pub const EXPERIENCE_HEADING: &str = "Work Experience";
pub const SKILLS_HEADING: &str = "Skills";

/// Writes lines top-down, starting a new page when one is full.
struct PageCursor {
    layout: ResumeLayout,
    y: f32,
    margin: f32,
    bottom_limit: f32,
    line_height: f32,
}

impl PageCursor {
    fn new(title: &str) -> Self {
        let mut layout = ResumeLayout::a4(title);
        layout.pages.push(PageLayout {
            page_index: 0,
            elements: Vec::new(),
        });
        let bottom_limit = layout.page_height_pt - mm(BOTTOM_MARGIN_MM);
        Self {
            layout,
            y: mm(PAGE_MARGIN_MM),
            margin: mm(PAGE_MARGIN_MM),
            bottom_limit,
            line_height: mm(LINE_HEIGHT_MM),
        }
    }

    fn content_width(&self) -> f32 {
        self.layout.page_width_pt - 2.0 * self.margin
    }

    fn current_page(&mut self) -> &mut PageLayout {
        // `new` pushes the first page and pages are only ever added.
        let last = self.layout.pages.len() - 1;
        &mut self.layout.pages[last]
    }

    fn break_page_if_needed(&mut self) {
        if self.y + self.line_height <= self.bottom_limit {
            return;
        }
        let page_index = self.layout.pages.len();
        log::debug!("Text overflows at y={:.1}pt, starting page {}", self.y, page_index + 1);
        self.layout.pages.push(PageLayout {
            page_index,
            elements: Vec::new(),
        });
        self.y = self.margin;
    }

    fn gap(&mut self, height_mm: f32) {
        self.y += mm(height_mm);
    }

    fn line(&mut self, text: &str, font_size: f32, face: Face, align: TextAlign) {
        self.break_page_if_needed();
        let x = match align {
            TextAlign::Left => self.margin,
            TextAlign::Center => {
                let w = measure_text_width(text, font_size, face);
                ((self.layout.page_width_pt - w) / 2.0).max(self.margin)
            }
        };
        let line = TextLine {
            text: text.to_string(),
            x,
            y: self.y,
            height: self.line_height,
            font_size,
            bold: face == Face::Bold,
            align,
        };
        self.current_page().elements.push(Element::Text(line));
        self.y += self.line_height;
    }

    fn paragraph(&mut self, text: &str) {
        let width = self.content_width();
        for wrapped in wrap_text(text, BODY_SIZE, Face::Regular, width) {
            self.line(&wrapped, BODY_SIZE, Face::Regular, TextAlign::Left);
        }
    }

    fn section(&mut self, heading: &str, text: &str) {
        self.line(heading, HEADING_SIZE, Face::Bold, TextAlign::Left);
        self.paragraph(text);
        self.gap(SECTION_GAP_MM);
    }

    fn photo(&mut self, photo: &LoadedPhoto) {
        let width = mm(PHOTO_WIDTH_MM);
        let placement = PhotoPlacement {
            x: (self.layout.page_width_pt - width) / 2.0,
            y: mm(PHOTO_TOP_MM),
            width,
            height: photo.scaled_height(width),
        };
        self.current_page().elements.push(Element::Photo(placement));
        self.gap(PHOTO_ADVANCE_MM);
    }

    fn finish(self) -> ResumeLayout {
        self.layout
    }
}

/// Reject any field the built-in fonts cannot encode.
fn check_encodable(resume: &Resume) -> GenerationResult<()> {
    check_win_ansi("name", resume.name())?;
    check_win_ansi("email", resume.email())?;
    check_win_ansi("phone", resume.phone())?;
    check_win_ansi("summary", resume.summary())?;
    check_win_ansi("education", resume.education())?;
    check_win_ansi("experience", resume.experience())?;
    for skill in resume.skills() {
        check_win_ansi("skills", skill)?;
    }
    Ok(())
}

/// Lay out a resume. `photo`, when present, is placed at the top centre.
pub fn layout_resume(
    resume: &Resume,
    photo: Option<&LoadedPhoto>,
    title: &str,
) -> GenerationResult<ResumeLayout> {
    check_encodable(resume)?;

    let mut cursor = PageCursor::new(title);

    match photo {
        Some(p) => cursor.photo(p),
        None => cursor.gap(NO_PHOTO_SPACER_MM),
    }

    cursor.line(resume.name(), NAME_SIZE, Face::Bold, TextAlign::Center);
    cursor.line(&resume.contact_line(), BODY_SIZE, Face::Regular, TextAlign::Center);
    cursor.gap(CONTACT_GAP_MM);

    cursor.section(SUMMARY_HEADING, resume.summary());
    cursor.section(EDUCATION_HEADING, resume.education());
    cursor.section(EXPERIENCE_HEADING, resume.experience());

    cursor.line(SKILLS_HEADING, HEADING_SIZE, Face::Bold, TextAlign::Left);
    for skill in resume.skill_lines() {
        cursor.line(&skill, BODY_SIZE, Face::Regular, TextAlign::Left);
    }

    let layout = cursor.finish();
    log::debug!(
        "Laid out resume for {:?}: {} page(s)",
        resume.name(),
        layout.pages.len()
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Resume {
        Resume::new(
            "Jane Doe",
            "jane@x.com",
            "555-1234",
            "Engineer.",
            "BS CS",
            "5 yrs",
            "Python, SQL, Go",
        )
    }

    fn texts(layout: &ResumeLayout) -> Vec<&str> {
        layout.text_lines().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn fixed_section_order() {
        let layout = layout_resume(&jane(), None, "t").unwrap();
        assert_eq!(
            texts(&layout),
            [
                "Jane Doe",
                "Email: jane@x.com | Phone: 555-1234",
                "Professional Summary",
                "Engineer.",
                "Education",
                "BS CS",
                "Work Experience",
                "5 yrs",
                "Skills",
                "- Python",
                "- SQL",
                "- Go",
            ]
        );
        assert_eq!(layout.pages.len(), 1);
    }

    #[test]
    fn no_photo_uses_spacer() {
        let layout = layout_resume(&jane(), None, "t").unwrap();
        assert!(layout.photo().is_none());
        let name = layout.text_lines().next().unwrap();
        assert!((name.y - mm(PAGE_MARGIN_MM + NO_PHOTO_SPACER_MM)).abs() < 0.01);
        assert!(name.bold);
        assert_eq!(name.align, TextAlign::Center);
    }

    #[test]
    fn photo_is_centred_and_pushes_text_down() {
        let photo = LoadedPhoto {
            bytes: Vec::new(),
            px_width: 200,
            px_height: 300,
        };
        let layout = layout_resume(&jane(), Some(&photo), "t").unwrap();
        let placed = layout.photo().unwrap();
        assert!((placed.x + placed.width / 2.0 - layout.page_width_pt / 2.0).abs() < 0.01);
        assert!((placed.width - mm(PHOTO_WIDTH_MM)).abs() < 0.01);
        assert!((placed.height - mm(75.0)).abs() < 0.01);
        assert!((placed.y - mm(PHOTO_TOP_MM)).abs() < 0.01);

        let name = layout.text_lines().next().unwrap();
        assert!((name.y - mm(PAGE_MARGIN_MM + PHOTO_ADVANCE_MM)).abs() < 0.01);
    }

    #[test]
    fn empty_sections_keep_their_headings() {
        let r = Resume::new("A", "a@x", "1", "", "", "", "");
        let layout = layout_resume(&r, None, "t").unwrap();
        let lines = texts(&layout);
        for heading in [SUMMARY_HEADING, EDUCATION_HEADING, EXPERIENCE_HEADING, SKILLS_HEADING] {
            assert!(lines.contains(&heading), "missing {heading}");
        }
        assert_eq!(lines.last(), Some(&SKILLS_HEADING));
    }

    #[test]
    fn centred_lines_are_centred() {
        let layout = layout_resume(&jane(), None, "t").unwrap();
        let contact = layout.text_lines().nth(1).unwrap();
        let w = measure_text_width(&contact.text, contact.font_size, Face::Regular);
        let centre = contact.x + w / 2.0;
        assert!((centre - layout.page_width_pt / 2.0).abs() < 0.01);
    }

    #[test]
    fn long_text_overflows_to_a_new_page() {
        let experience = "Shipped things on time and under budget. ".repeat(120);
        let r = Resume::new("A", "a@x", "1", "", "", experience, "Rust");
        let layout = layout_resume(&r, None, "t").unwrap();
        assert!(layout.pages.len() >= 2);
        let limit = layout.page_height_pt - mm(BOTTOM_MARGIN_MM);
        for line in layout.text_lines() {
            assert!(line.y + line.height <= limit + 0.01);
        }
        let second = &layout.pages[1];
        assert_eq!(second.page_index, 1);
        match &second.elements[0] {
            Element::Text(t) => assert!((t.y - mm(PAGE_MARGIN_MM)).abs() < 0.01),
            Element::Photo(_) => panic!("photo on page 2"),
        }
        assert_eq!(texts(&layout).last(), Some(&"- Rust"));
    }

    #[test]
    fn unsupported_characters_are_rejected() {
        let r = Resume::new("Ana", "a@x", "1", "", "", "", "Rust, 日本語");
        let err = layout_resume(&r, None, "t").unwrap_err();
        assert!(err.message().contains("skills"));
    }
}
