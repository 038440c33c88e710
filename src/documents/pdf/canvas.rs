//! Drawing primitives for a single page.
//!
//! A `PageCanvas` records content-stream operations in PDF user space
//! (origin bottom-left, y grows upward). All text is glyph-normalized and
//! WinAnsi-encoded before it is recorded, so callers hand over raw field
//! values.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use super::encoding::encode_win_ansi;
use crate::documents::glyphs::normalize;

/// Label size used by form fields.
pub const LABEL_SIZE: f32 = 9.0;
/// Default size for filled-in values.
pub const VALUE_SIZE: f32 = 10.0;
/// Approximate advance of one Helvetica glyph relative to the font size.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4_PORTRAIT: PageSize = PageSize {
        width: 595.0,
        height: 842.0,
    };
    pub const A4_LANDSCAPE: PageSize = PageSize {
        width: 842.0,
        height: 595.0,
    };
}

/// Fonts available to every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    /// ZapfDingbats, used for status glyphs.
    Symbol,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Symbol];

    /// Resource name; chosen to stay clear of names used by third-party templates.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "CdHelv",
            FontFace::Bold => "CdHelvB",
            FontFace::Symbol => "CdZapf",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Symbol => "ZapfDingbats",
        }
    }

    pub fn from_bold(bold: bool) -> Self {
        if bold {
            FontFace::Bold
        } else {
            FontFace::Regular
        }
    }
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.7, 0.7, 0.7);
    pub const DARK_GRAY: Color = Color::rgb(0.4, 0.4, 0.4);
    pub const LIGHT_GRAY: Color = Color::rgb(0.9, 0.9, 0.9);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 0.7);
    pub const INK_BLUE: Color = Color::rgb(0.0, 0.0, 0.8);
    pub const GREEN: Color = Color::rgb(0.0, 0.6, 0.0);
    pub const RED: Color = Color::rgb(0.8, 0.0, 0.0);
    pub const AMBER: Color = Color::rgb(0.9, 0.6, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn operands(self) -> Vec<Object> {
        vec![self.r.into(), self.g.into(), self.b.into()]
    }
}

/// Border and fill for rectangles. Both `None` draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectStyle {
    pub border: Option<(Color, f32)>,
    pub fill: Option<Color>,
}

impl RectStyle {
    pub fn outline(color: Color, thickness: f32) -> Self {
        Self {
            border: Some((color, thickness)),
            fill: None,
        }
    }

    pub fn filled(color: Color) -> Self {
        Self {
            border: None,
            fill: Some(color),
        }
    }
}

/// Content operations for one page.
#[derive(Debug, Clone)]
pub struct PageCanvas {
    size: PageSize,
    operations: Vec<Operation>,
}

impl PageCanvas {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            operations: Vec::new(),
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Draw a single line of text with its baseline at `(x, y)`.
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, font: FontFace, color: Color) {
        let encoded = encode_win_ansi(&normalize(text));
        self.push_text(encoded, x, y, size, font, color);
    }

    /// Draw a raw ZapfDingbats glyph code.
    pub fn draw_symbol(&mut self, code: u8, x: f32, y: f32, size: f32, color: Color) {
        self.push_text(vec![code], x, y, size, FontFace::Symbol, color);
    }

    pub fn draw_line(&mut self, start: (f32, f32), end: (f32, f32), thickness: f32, color: Color) {
        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("RG", color.operands()),
            Operation::new("w", vec![thickness.into()]),
            Operation::new("m", vec![start.0.into(), start.1.into()]),
            Operation::new("l", vec![end.0.into(), end.1.into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Rectangle with its bottom-left corner at `(x, y)`.
    pub fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, style: RectStyle) {
        let paint = match (style.fill, style.border) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };

        self.operations.push(Operation::new("q", vec![]));
        if let Some(fill) = style.fill {
            self.operations.push(Operation::new("rg", fill.operands()));
        }
        if let Some((color, thickness)) = style.border {
            self.operations.push(Operation::new("RG", color.operands()));
            self.operations.push(Operation::new("w", vec![thickness.into()]));
        }
        self.operations.extend([
            Operation::new(
                "re",
                vec![x.into(), y.into(), width.into(), height.into()],
            ),
            Operation::new(paint, vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Form label followed by an underline running to `x + width`.
    ///
    /// The underline starts five points after an estimated label width of
    /// five points per (normalized) character.
    pub fn draw_field(&mut self, label: &str, x: f32, y: f32, width: f32) {
        self.draw_text(label, x, y, LABEL_SIZE, FontFace::Regular, Color::BLACK);

        let label_width = normalize(label).chars().count() as f32 * 5.0;
        self.draw_line(
            (x + label_width + 5.0, y - 2.0),
            (x + width, y - 2.0),
            0.5,
            Color::BLACK,
        );
    }

    /// Bordered box for free-text answers.
    pub fn draw_text_box(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.draw_rectangle(x, y, width, height, RectStyle::outline(Color::BLACK, 0.5));
    }

    /// Draw a filled-in value. Empty values draw nothing; with a width bound
    /// the value is truncated by [`truncate_to_width`].
    pub fn fill_text(&mut self, value: &str, x: f32, y: f32, size: f32, max_width: Option<f32>) {
        self.fill_text_with(value, x, y, size, max_width, FontFace::Regular, Color::BLACK);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_text_with(
        &mut self,
        value: &str,
        x: f32,
        y: f32,
        size: f32,
        max_width: Option<f32>,
        font: FontFace,
        color: Color,
    ) {
        if value.is_empty() {
            return;
        }

        let text = match max_width {
            Some(width) => truncate_to_width(value, size, width),
            None => value.to_string(),
        };
        self.draw_text(&text, x, y, size, font, color);
    }

    /// Mark a checkbox whose box corner is at `(x, y)`.
    pub fn fill_checkbox(&mut self, x: f32, y: f32) {
        self.draw_text("X", x + 2.0, y - 2.0, 8.0, FontFace::Regular, Color::BLACK);
    }

    fn push_text(&mut self, bytes: Vec<u8>, x: f32, y: f32, size: f32, font: FontFace, color: Color) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    size.into(),
                ],
            ),
            Operation::new("rg", color.operands()),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::String(bytes, StringFormat::Hexadecimal)]),
            Operation::new("ET", vec![]),
        ]);
    }
}

/// Number of characters that fit in `max_width` at `font_size`.
pub fn max_chars(font_size: f32, max_width: f32) -> usize {
    let capacity = f64::from(max_width) / (f64::from(font_size) * GLYPH_WIDTH_RATIO);
    if capacity.is_finite() && capacity > 0.0 {
        capacity.floor() as usize
    } else {
        0
    }
}

/// Truncate `text` so it fits `max_width`, marking the cut with `...`.
///
/// Characters are counted after glyph normalization. Texts within the
/// estimated capacity are returned normalized; longer texts keep `capacity`
/// characters followed by the ellipsis.
pub fn truncate_to_width(text: &str, font_size: f32, max_width: f32) -> String {
    let normalized = normalize(text);
    let capacity = max_chars(font_size, max_width);
    if normalized.chars().count() <= capacity {
        return normalized;
    }

    let kept: String = normalized.chars().take(capacity).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_strings(canvas: &PageCanvas) -> Vec<Vec<u8>> {
        canvas
            .operations()
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    fn number(object: &Object) -> f32 {
        match object {
            Object::Real(value) => *value,
            Object::Integer(value) => *value as f32,
            other => panic!("not a number: {other:?}"),
        }
    }

    #[test]
    fn test_truncation_keeps_short_text() {
        assert_eq!(truncate_to_width("Kowalski", 9.0, 100.0), "Kowalski");
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        // 60 / (10 * 0.6) = 10 characters
        assert_eq!(max_chars(10.0, 60.0), 10);
        assert_eq!(truncate_to_width("Abcdefghijklmnop", 10.0, 60.0), "Abcdefghij...");
    }

    #[test]
    fn test_truncation_counts_normalized_characters() {
        // Ten letters plus one combining accent
        let decomposed = "Zo\u{301}lkiewski";
        assert_eq!(decomposed.chars().count(), 11);
        assert_eq!(truncate_to_width(decomposed, 10.0, 60.0), "Zolkiewski");

        assert_eq!(truncate_to_width("Łódź Bałuty", 10.0, 60.0), "Lodz Balut...");
    }

    #[test]
    fn test_truncation_at_exact_capacity() {
        assert_eq!(truncate_to_width("Abcdefghij", 10.0, 60.0), "Abcdefghij");
    }

    #[test]
    fn test_draw_text_normalizes_glyphs() {
        let mut canvas = PageCanvas::new(PageSize::A4_PORTRAIT);
        canvas.draw_text("Łódź", 10.0, 10.0, 10.0, FontFace::Regular, Color::BLACK);
        assert_eq!(shown_strings(&canvas), vec![b"Lodz".to_vec()]);
    }

    #[test]
    fn test_empty_fill_text_draws_nothing() {
        let mut canvas = PageCanvas::new(PageSize::A4_PORTRAIT);
        canvas.fill_text("", 10.0, 10.0, 10.0, Some(100.0));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_draw_field_underline_starts_after_label() {
        let mut canvas = PageCanvas::new(PageSize::A4_PORTRAIT);
        canvas.draw_field("Imię:", 50.0, 600.0, 200.0);

        let moveto = canvas
            .operations()
            .iter()
            .find(|op| op.operator == "m")
            .expect("underline start");
        // "Imie:" is five characters wide
        assert_eq!(number(&moveto.operands[0]), 80.0);
        assert_eq!(number(&moveto.operands[1]), 598.0);
    }

    #[test]
    fn test_checkbox_mark_offset() {
        let mut canvas = PageCanvas::new(PageSize::A4_PORTRAIT);
        canvas.fill_checkbox(160.0, 500.0);

        let position = canvas
            .operations()
            .iter()
            .find(|op| op.operator == "Td")
            .expect("text position");
        assert_eq!(number(&position.operands[0]), 162.0);
        assert_eq!(number(&position.operands[1]), 498.0);
        assert_eq!(shown_strings(&canvas), vec![b"X".to_vec()]);
    }

    #[test]
    fn test_rectangle_without_style_draws_nothing() {
        let mut canvas = PageCanvas::new(PageSize::A4_LANDSCAPE);
        canvas.draw_rectangle(0.0, 0.0, 10.0, 10.0, RectStyle::default());
        assert!(canvas.is_empty());
    }
}
