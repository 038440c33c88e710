//! Generator for the document checklist.

use async_trait::async_trait;

use super::common::ensure_room;
use super::traits::DocumentGenerator;
use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::{Color, FontFace, PageCanvas, RectStyle};
use crate::documents::pdf::PdfError;
use crate::documents::registry::checklist::{
    progress, ChecklistItem, Priority, CATALOGUE, CATEGORY_THRESHOLD, CONTINUATION_PAGE, CONTINUATION_TOP,
    HEADER_BOTTOM, PAGE_BOTTOM, PROGRESS_BAR_HEIGHT, PROGRESS_BAR_WIDTH,
};
use crate::documents::registry::{get_spec, start_document};

/// Width of the filled part of the progress bar.
pub fn progress_fill_width(percent: u8) -> f32 {
    PROGRESS_BAR_WIDTH * f32::from(percent.min(100)) / 100.0
}

fn draw_progress(canvas: &mut PageCanvas, percent: u8, y: f32) {
    canvas.draw_text(
        &format!("Overall progress: {percent}%"),
        50.0,
        y,
        10.0,
        FontFace::Regular,
        Color::BLACK,
    );

    let bar_y = y - 10.0 - PROGRESS_BAR_HEIGHT;
    let fill = progress_fill_width(percent);
    if fill > 0.0 {
        canvas.draw_rectangle(50.0, bar_y, fill, PROGRESS_BAR_HEIGHT, RectStyle::filled(Color::GREEN));
    }
    canvas.draw_rectangle(
        50.0,
        bar_y,
        PROGRESS_BAR_WIDTH,
        PROGRESS_BAR_HEIGHT,
        RectStyle::outline(Color::BLACK, 1.0),
    );
}

fn draw_item(canvas: &mut PageCanvas, item: &ChecklistItem, bundle: &FieldBundle, y: f32) {
    let status = item.status(bundle);
    canvas.draw_symbol(status.glyph(), 60.0, y, 12.0, status.color());
    canvas.fill_text_with(item.name, 80.0, y, 10.0, Some(360.0), FontFace::Bold, Color::BLACK);

    let priority_color = if item.priority == Priority::High {
        Color::RED
    } else {
        Color::BLACK
    };
    canvas.draw_text(
        &format!("[{}]", item.priority),
        450.0,
        y,
        8.0,
        FontFace::Regular,
        priority_color,
    );

    let detail_y = y - 15.0;
    canvas.fill_text_with(
        item.description,
        80.0,
        detail_y,
        8.0,
        Some(310.0),
        FontFace::Regular,
        Color::DARK_GRAY,
    );
    let uploaded = item.upload_date(bundle);
    if !uploaded.is_empty() {
        canvas.fill_text_with(
            &format!("Uploaded: {uploaded}"),
            400.0,
            detail_y,
            8.0,
            Some(145.0),
            FontFace::Regular,
            Color::DARK_GRAY,
        );
    }
}

/// Render the document checklist.
pub fn render_checklist(bundle: &FieldBundle) -> Result<Vec<u8>, PdfError> {
    let spec = get_spec(DocumentKind::DocumentChecklist);
    let mut builder = start_document(spec, bundle)?;

    draw_progress(builder.page_mut(0)?, progress(bundle), HEADER_BOTTOM);
    let mut y = HEADER_BOTTOM - 10.0 - PROGRESS_BAR_HEIGHT - 40.0;

    for category in CATALOGUE {
        y = ensure_room(&mut builder, y, CATEGORY_THRESHOLD, CONTINUATION_PAGE.size, CONTINUATION_TOP);
        builder.last_page_mut()?.draw_text(
            &category.name.to_uppercase(),
            50.0,
            y,
            12.0,
            FontFace::Bold,
            Color::INK_BLUE,
        );
        y -= 25.0;

        for item in category.items {
            // Each row needs its description line above the bottom margin too.
            y = ensure_room(&mut builder, y, PAGE_BOTTOM + 15.0, CONTINUATION_PAGE.size, CONTINUATION_TOP);
            draw_item(builder.last_page_mut()?, item, bundle, y);
            y -= 35.0;
        }
        y -= 10.0;
    }

    builder.finish()
}

/// Generator for the document checklist.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentChecklistGenerator;

#[async_trait]
impl DocumentGenerator for DocumentChecklistGenerator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::DocumentChecklist
    }

    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        let bytes = render_checklist(bundle)?;
        Ok(GeneratedDocument::new(self.kind(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fill_width() {
        assert_eq!(progress_fill_width(0), 0.0);
        assert_eq!(progress_fill_width(50), 247.5);
        assert_eq!(progress_fill_width(100), 495.0);
        assert_eq!(progress_fill_width(250), 495.0);
    }

    #[test]
    fn test_empty_progress_draws_only_the_border() {
        let mut canvas = PageCanvas::new(CONTINUATION_PAGE.size);
        draw_progress(&mut canvas, 0, 690.0);
        let rectangles = canvas.operations().iter().filter(|op| op.operator == "re").count();
        assert_eq!(rectangles, 1);
    }

    #[test]
    fn test_catalogue_paginates() {
        let bytes = render_checklist(&FieldBundle::new()).unwrap();
        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), 2);
    }
}
