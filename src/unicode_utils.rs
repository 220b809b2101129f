//! Unicode utilities for the built-in PDF fonts
//!
//! Base fonts are written with WinAnsiEncoding, so every character drawn on a
//! label has to be mapped to a single WinAnsi byte. The metrics use the same
//! mapping to decide which characters they can measure.

/// WinAnsiEncoding byte for a character, if it has one
pub fn winansi_code(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => {
            let byte = match ch {
                '€' => 0x80,
                '‚' => 0x82,
                'ƒ' => 0x83,
                '„' => 0x84,
                '…' => 0x85,
                '†' => 0x86,
                '‡' => 0x87,
                'ˆ' => 0x88,
                '‰' => 0x89,
                'Š' => 0x8A,
                '‹' => 0x8B,
                'Œ' => 0x8C,
                'Ž' => 0x8E,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '˜' => 0x98,
                '™' => 0x99,
                'š' => 0x9A,
                '›' => 0x9B,
                'œ' => 0x9C,
                'ž' => 0x9E,
                'Ÿ' => 0x9F,
                _ => return None,
            };
            Some(byte)
        }
    }
}

/// Convert Unicode text to WinAnsiEncoding bytes.
/// Characters outside the encoding become '?'.
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_code(ch).unwrap_or(b'?'))
        .collect()
}
