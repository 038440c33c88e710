//! Glyph normalization for the base-14 fonts.
//!
//! Helvetica with WinAnsi encoding has no glyphs for most Central European
//! letters, so every string headed for a page is folded to its ASCII base
//! letter first (`ą` -> `a`, `Ł` -> `L`). Characters outside the Latin
//! letter ranges pass through untouched and are left to the encoder.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Letters whose canonical decomposition does not yield an ASCII base.
const STROKED_LETTERS: &[(char, char)] = &[
    ('ł', 'l'),
    ('Ł', 'L'),
    ('đ', 'd'),
    ('Đ', 'D'),
    ('ø', 'o'),
    ('Ø', 'O'),
    ('ħ', 'h'),
    ('Ħ', 'H'),
    ('ı', 'i'),
    ('ŀ', 'l'),
    ('Ŀ', 'L'),
    ('ŧ', 't'),
    ('Ŧ', 'T'),
    ('ƀ', 'b'),
    ('ƶ', 'z'),
    ('Ƶ', 'Z'),
];

/// Fold a string to glyphs the embedded base fonts can render.
///
/// Idempotent: the output of one pass is a fixed point of the next.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_ascii() {
            normalized.push(ch);
        } else if is_combining_mark(ch) {
            // Stray accents from pre-decomposed input have no glyph.
            continue;
        } else {
            normalized.push(base_letter(ch).unwrap_or(ch));
        }
    }

    normalized
}

/// ASCII base letter of an accented Latin character, if it has one.
pub fn base_letter(ch: char) -> Option<char> {
    if let Some(&(_, base)) = STROKED_LETTERS.iter().find(|(letter, _)| *letter == ch) {
        return Some(base);
    }

    if !is_extended_latin(ch) {
        return None;
    }

    let mut base = None;
    decompose_canonical(ch, |part| {
        if base.is_none() {
            base = Some(part);
        }
    });

    base.filter(|part| *part != ch && part.is_ascii_alphabetic())
}

fn is_extended_latin(ch: char) -> bool {
    matches!(ch, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polish_letters_fold_to_ascii() {
        assert_eq!(normalize("ąćęłńóśźż"), "acelnoszz");
        assert_eq!(normalize("ĄĆĘŁŃÓŚŹŻ"), "ACELNOSZZ");
    }

    #[test]
    fn test_sentence_keeps_structure() {
        assert_eq!(normalize("Zażółć gęślą jaźń"), "Zazolc gesla jazn");
        assert_eq!(normalize("Łódź, ul. Piotrkowska 1"), "Lodz, ul. Piotrkowska 1");
    }

    #[test]
    fn test_other_latin_diacritics() {
        assert_eq!(normalize("Müller"), "Muller");
        assert_eq!(normalize("Dvořák"), "Dvorak");
        assert_eq!(normalize("Søren"), "Soren");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["Zażółć gęślą jaźń", "Ærø × ÷", "naïve café", "日本"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(normalize("×"), "×");
        assert_eq!(normalize("€ 100"), "€ 100");
    }

    #[test]
    fn test_decomposed_marks_are_dropped() {
        assert_eq!(normalize("a\u{0328}"), "a");
    }
}
