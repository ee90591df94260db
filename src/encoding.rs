//! WinAnsi (Windows-1252) encoding for the built-in PDF fonts.
//!
//! The standard 14 fonts are written with WinAnsiEncoding: one byte per
//! glyph. Text outside that repertoire is rejected up front with an error
//! naming the character, rather than being silently replaced.

use crate::error::{GenerationError, GenerationResult};

/// Map a character to its Windows-1252 byte, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20AC}' => 0x80, // euro
        '\u{201A}' => 0x82, // single low-9 quote
        '\u{0192}' => 0x83, // florin
        '\u{201E}' => 0x84, // double low-9 quote
        '\u{2026}' => 0x85, // ellipsis
        '\u{2020}' => 0x86, // dagger
        '\u{2021}' => 0x87, // double dagger
        '\u{02C6}' => 0x88, // circumflex
        '\u{2030}' => 0x89, // per mille
        '\u{0160}' => 0x8A, // S caron
        '\u{2039}' => 0x8B, // single left angle quote
        '\u{0152}' => 0x8C, // OE ligature
        '\u{017D}' => 0x8E, // Z caron
        '\u{2018}' => 0x91, // left single quote
        '\u{2019}' => 0x92, // right single quote
        '\u{201C}' => 0x93, // left double quote
        '\u{201D}' => 0x94, // right double quote
        '\u{2022}' => 0x95, // bullet
        '\u{2013}' => 0x96, // en-dash
        '\u{2014}' => 0x97, // em-dash
        '\u{02DC}' => 0x98, // small tilde
        '\u{2122}' => 0x99, // trademark
        '\u{0161}' => 0x9A, // s caron
        '\u{203A}' => 0x9B, // single right angle quote
        '\u{0153}' => 0x9C, // oe ligature
        '\u{017E}' => 0x9E, // z caron
        '\u{0178}' => 0x9F, // Y diaeresis
        '\u{00A0}' => 0x20, // non-breaking space -> space
        c if (c as u32) < 0x80 => c as u8,
        c if (0xA1..=0xFF).contains(&(c as u32)) => c as u8,
        _ => return None,
    };
    Some(byte)
}

/// Check that every character of `text` is encodable. `field` names the
/// resume field in the error message.
pub fn check_win_ansi(field: &str, text: &str) -> GenerationResult<()> {
    match text.chars().find(|c| win_ansi_byte(*c).is_none()) {
        None => Ok(()),
        Some(c) => {
            log::warn!("Rejecting {field}: {c:?} (U+{:04X}) is not WinAnsi", c as u32);
            Err(GenerationError::new(format!(
                "{field} contains {c:?} (U+{:04X}), which the PDF fonts cannot encode; \
                 only Western European (Windows-1252) characters are supported",
                c as u32
            )))
        }
    }
}

/// Convert a UTF-8 string to raw Windows-1252 bytes then wrap in a String so
/// printpdf writes the bytes unchanged into the PDF stream.
pub(crate) fn to_win_ansi(text: &str) -> GenerationResult<String> {
    let bytes = text
        .chars()
        .map(|c| {
            win_ansi_byte(c).ok_or_else(|| {
                GenerationError::new(format!("{c:?} cannot be encoded as WinAnsi"))
            })
        })
        .collect::<GenerationResult<Vec<u8>>>()?;
    // SAFETY: intentionally non-UTF-8 for the 0x80-0xFF range. The String is
    // never inspected as `str` on our side; it only works because printpdf 0.8
    // hands builtin-font text to lopdf 0.35, whose `SimpleEncoding(b"WinAnsiEncoding")`
    // path writes `as_bytes()` into the content stream unchanged. Re-check that
    // pass-through (and `pdf_text_is_winansi_encoded` in the integration tests)
    // whenever printpdf or lopdf is upgraded.
    #[allow(unsafe_code)]
    unsafe {
        Ok(String::from_utf8_unchecked(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_are_encodable() {
        assert_eq!(win_ansi_byte('A'), Some(b'A'));
        assert_eq!(win_ansi_byte('é'), Some(0xE9));
        assert_eq!(win_ansi_byte('ÿ'), Some(0xFF));
        assert!(check_win_ansi("name", "José Müller-Ørsted").is_ok());
    }

    #[test]
    fn typographic_punctuation_maps_into_the_c1_range() {
        assert_eq!(win_ansi_byte('\u{2019}'), Some(0x92));
        assert_eq!(win_ansi_byte('\u{2014}'), Some(0x97));
        assert_eq!(win_ansi_byte('€'), Some(0x80));
        assert_eq!(win_ansi_byte('\u{00A0}'), Some(b' '));
    }

    #[test]
    fn other_scripts_are_rejected_with_the_field_name() {
        let err = check_win_ansi("summary", "Hello 世界").unwrap_err();
        assert!(err.message().contains("summary"));
        assert!(err.message().contains("U+4E16"));
        assert!(check_win_ansi("name", "Ivan Петров").is_err());
    }

    #[test]
    fn c1_controls_are_rejected() {
        assert_eq!(win_ansi_byte('\u{0085}'), None);
    }

    #[test]
    fn ascii_conversion_is_identity() {
        assert_eq!(to_win_ansi("- Python").unwrap(), "- Python");
    }
}
