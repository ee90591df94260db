//! Text measurement for the built-in Helvetica faces, and word wrapping.
//!
//! The resume uses the PDF standard fonts only, so glyph advances come from
//! the Adobe Helvetica / Helvetica-Bold AFM tables (units per em = 1000),
//! indexed by the character's WinAnsi byte.

use printpdf::BuiltinFont;

use crate::encoding::win_ansi_byte;

const UNITS_PER_EM: f32 = 1000.0;

/// Advance used for characters with no WinAnsi byte, and for the five
/// undefined WinAnsi codes.
const FALLBACK_ADVANCE: u16 = 556;

/// Helvetica advances for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advances for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Helvetica advances for WinAnsi 0x80..=0xFF.
#[rustfmt::skip]
const HELVETICA_HIGH: [u16; 128] = [
    556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
    556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Helvetica-Bold advances for WinAnsi 0x80..=0xFF.
#[rustfmt::skip]
const HELVETICA_BOLD_HIGH: [u16; 128] = [
    556, 556, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
    556, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 556, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// The two faces the resume template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    pub fn from_bold(bold: bool) -> Self {
        if bold {
            Face::Bold
        } else {
            Face::Regular
        }
    }

    /// The printpdf built-in font for this face.
    pub fn builtin(self) -> BuiltinFont {
        match self {
            Face::Regular => BuiltinFont::Helvetica,
            Face::Bold => BuiltinFont::HelveticaBold,
        }
    }

    fn advance(self, c: char) -> u16 {
        let (ascii, high) = match self {
            Face::Regular => (&HELVETICA, &HELVETICA_HIGH),
            Face::Bold => (&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH),
        };
        match win_ansi_byte(c) {
            Some(b @ 0x20..=0x7E) => ascii[(b - 0x20) as usize],
            Some(b @ 0x80..=0xFF) => high[(b - 0x80) as usize],
            _ => FALLBACK_ADVANCE,
        }
    }
}

/// Width of `text` in points at `font_size`.
pub fn measure_text_width(text: &str, font_size: f32, face: Face) -> f32 {
    let units: u32 = text.chars().map(|c| face.advance(c) as u32).sum();
    units as f32 * font_size / UNITS_PER_EM
}

/// Word-wrap text to fit within `max_width` points. Returns a vec of lines.
///
/// Explicit newlines always start a new line, and a blank paragraph yields an
/// empty line. Lines break at single spaces; the space a line breaks at is
/// dropped, every other space (indentation, runs of spaces) is kept. A word
/// wider than `max_width` on its own is split between characters.
pub fn wrap_text(text: &str, font_size: f32, face: Face, max_width: f32) -> Vec<String> {
    if max_width <= 0.0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let fits = |s: &str| measure_text_width(s, font_size, face) <= max_width;

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let mut current_line: Option<String> = None;
        for word in paragraph.split(' ') {
            if let Some(line) = current_line.as_mut() {
                let candidate = format!("{line} {word}");
                if fits(&candidate) {
                    *line = candidate;
                    continue;
                }
                lines.push(std::mem::take(line));
            }

            let mut line = String::new();
            if fits(word) {
                line.push_str(word);
            } else {
                // Hard-break the overlong word; the tail carries on.
                for c in word.chars() {
                    line.push(c);
                    if !fits(&line) && line.chars().count() > 1 {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(c);
                    }
                }
            }
            current_line = Some(line);
        }
        lines.extend(current_line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afm_text_width() {
        // "Hello" = 722 + 556 + 222 + 222 + 556 = 2278 units
        let w = measure_text_width("Hello", 10.0, Face::Regular);
        assert!((w - 22.78).abs() < 0.01, "got {w}");
    }

    #[test]
    fn bold_is_wider() {
        let regular = measure_text_width("Work Experience", 14.0, Face::Regular);
        let bold = measure_text_width("Work Experience", 14.0, Face::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn word_wrap_basic() {
        let lines = wrap_text("Hello world foo bar", 12.0, Face::Regular, 60.0);
        assert!(lines.len() >= 2, "Expected wrapping, got {:?}", lines);
        for line in &lines {
            assert!(measure_text_width(line, 12.0, Face::Regular) <= 60.0);
        }
    }

    #[test]
    fn newlines_are_kept() {
        let lines = wrap_text("one\n\ntwo", 12.0, Face::Regular, 500.0);
        assert_eq!(lines, ["one", "", "two"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 12.0, Face::Regular, 500.0), [""]);
    }

    #[test]
    fn overlong_word_is_split() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, 12.0, Face::Regular, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(measure_text_width(line, 12.0, Face::Regular) <= 100.0);
        }
    }

    #[test]
    fn winansi_glyphs_use_their_own_advances() {
        // AE, em-dash and trademark are all 1000 units wide in both faces.
        for face in [Face::Regular, Face::Bold] {
            for c in ['\u{00C6}', '\u{2014}', '\u{2122}', '\u{2026}', '\u{0152}'] {
                assert_eq!(face.advance(c), 1000, "{c:?} in {face:?}");
            }
        }
        assert_eq!(Face::Regular.advance('\u{00E9}'), 556);
        assert_eq!(Face::Regular.advance('\u{00A0}'), 278);
        assert_eq!(Face::Bold.advance('\u{00F6}'), 611);
    }

    #[test]
    fn wide_glyphs_wrap_inside_the_content_width() {
        // 210 mm page less two 10 mm margins.
        let content_width = 190.0 * 72.0 / 25.4;
        let text = "\u{00C6}ther \u{2014} ".repeat(40);
        let lines = wrap_text(&text, 12.0, Face::Regular, content_width);
        assert!(lines.len() > 1);
        for line in &lines {
            // Sum the true AFM units: AE 1000, em-dash 1000, t 278, h 556,
            // e 556, r 333, space 278.
            let units: u32 = line
                .chars()
                .map(|c| match c {
                    '\u{00C6}' | '\u{2014}' => 1000,
                    't' => 278,
                    'h' | 'e' => 556,
                    'r' => 333,
                    ' ' => 278,
                    other => panic!("unexpected {other:?}"),
                })
                .sum();
            let width = units as f32 * 12.0 / 1000.0;
            assert!(width <= content_width + 0.01, "{line:?} is {width}pt wide");
        }
    }

    #[test]
    fn indentation_and_space_runs_are_kept() {
        let lines = wrap_text("  indented  twice", 12.0, Face::Regular, 500.0);
        assert_eq!(lines, ["  indented  twice"]);
    }

    #[test]
    fn the_breaking_space_is_dropped() {
        let lines = wrap_text("aaaa bbbb", 12.0, Face::Regular, 30.0);
        assert_eq!(lines, ["aaaa", "bbbb"]);
    }
}
