//! WinAnsi (CP1252) encoding for text drawn with the standard fonts.

/// Byte emitted for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Encode a string as WinAnsi bytes. Control characters become spaces and
/// anything outside the code page becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x00..=0x1F | 0x7F => b' ',
        0x20..=0x7E => code as u8,
        0xA0..=0xFF => code as u8,
        _ => cp1252_high(ch).unwrap_or(REPLACEMENT),
    }
}

/// Characters CP1252 places in the 0x80..=0x9F block.
const CP1252_HIGH: &[(char, u8)] = &[
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

fn cp1252_high(ch: char) -> Option<u8> {
    CP1252_HIGH
        .iter()
        .find(|(candidate, _)| *candidate == ch)
        .map(|&(_, byte)| byte)
}

fn cp1252_char(byte: u8) -> Option<char> {
    CP1252_HIGH
        .iter()
        .find(|(_, candidate)| *candidate == byte)
        .map(|&(ch, _)| ch)
}

/// Decode a PDF text string (UTF-16BE with BOM, otherwise single-byte).
pub fn decode_text_string(bytes: &[u8]) -> String {
    decode_utf16(bytes).unwrap_or_else(|| bytes.iter().map(|&byte| byte as char).collect())
}

/// Decode a field value written as WinAnsi bytes (or UTF-16BE with BOM).
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    decode_utf16(bytes).unwrap_or_else(|| {
        bytes
            .iter()
            .map(|&byte| cp1252_char(byte).unwrap_or(byte as char))
            .collect()
    })
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let rest = bytes.strip_prefix(&[0xFE, 0xFF])?;
    let units: Vec<u16> = rest
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    Some(String::from_utf16_lossy(&units))
}
