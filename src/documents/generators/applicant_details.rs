//! Generator for the applicant details summary.

use async_trait::async_trait;

use super::common::ensure_room;
use super::traits::DocumentGenerator;
use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::{Color, FontFace, PageCanvas};
use crate::documents::pdf::{PdfBuilder, PdfError};
use crate::documents::registry::applicant_details::{
    DetailRow, CONTINUATION_PAGE, CONTINUATION_TOP, DOCUMENTS_THRESHOLD, LABEL_X, PAGE_BOTTOM, ROW_ADVANCE,
    SECTIONS, SECTIONS_TOP, SECTION_GAP, SECTION_RULE_WIDTH, SECTION_TITLE_SIZE, VALUE_OFFSET,
};
use crate::documents::registry::checklist::{all_items, ChecklistItem};
use crate::documents::registry::{get_spec, start_document};

const TITLE_ADVANCE: f32 = 25.0;
const BULLET_ADVANCE: f32 = 15.0;
const VALUE_WIDTH: f32 = 545.0 - LABEL_X - VALUE_OFFSET;

fn draw_section_title(canvas: &mut PageCanvas, title: &str, y: f32) {
    canvas.draw_text(title, LABEL_X, y, SECTION_TITLE_SIZE, FontFace::Bold, Color::BLUE);
    canvas.draw_line(
        (LABEL_X, y - 3.0),
        (LABEL_X + SECTION_RULE_WIDTH, y - 3.0),
        1.0,
        Color::BLUE,
    );
}

/// Value a row shows, or `None` when an optional row is blank.
fn row_value(row: &DetailRow, bundle: &FieldBundle) -> Option<String> {
    let value = row.binding.resolve(bundle);
    match (value.is_empty(), row.optional, row.fallback) {
        (true, true, _) => None,
        (true, false, Some(fallback)) => Some(fallback.to_string()),
        _ => Some(value),
    }
}

/// Draw a titled list of bullets, breaking pages below the bottom margin.
fn draw_bullet_list(
    builder: &mut PdfBuilder,
    mut y: f32,
    title: &str,
    items: &[&str],
    color: Color,
) -> Result<f32, PdfError> {
    y = ensure_room(builder, y, PAGE_BOTTOM + TITLE_ADVANCE, CONTINUATION_PAGE.size, CONTINUATION_TOP);
    draw_section_title(builder.last_page_mut()?, title, y);
    y -= TITLE_ADVANCE;

    for item in items {
        y = ensure_room(builder, y, PAGE_BOTTOM, CONTINUATION_PAGE.size, CONTINUATION_TOP);
        builder
            .last_page_mut()?
            .draw_text(&format!("• {item}"), 60.0, y, 10.0, FontFace::Regular, color);
        y -= BULLET_ADVANCE;
    }
    Ok(y)
}

/// Render the applicant details summary.
pub fn render_applicant_details(bundle: &FieldBundle) -> Result<Vec<u8>, PdfError> {
    let spec = get_spec(DocumentKind::ApplicantDetails);
    let mut builder = start_document(spec, bundle)?;
    let mut y = SECTIONS_TOP;

    {
        let page = builder.page_mut(0)?;
        for section in SECTIONS {
            y -= SECTION_GAP;
            draw_section_title(page, section.title, y);
            y -= TITLE_ADVANCE;

            for row in section.rows {
                let Some(value) = row_value(row, bundle) else {
                    continue;
                };
                page.draw_text(row.label, LABEL_X, y, 10.0, FontFace::Regular, Color::BLACK);
                page.fill_text(&value, LABEL_X + VALUE_OFFSET, y, 10.0, Some(VALUE_WIDTH));
                y -= ROW_ADVANCE;
            }
        }
    }

    let (provided, required): (Vec<&ChecklistItem>, Vec<&ChecklistItem>) = all_items().partition(|item| item.status(bundle).is_provided());
    let provided: Vec<&str> = provided.iter().map(|item| item.name).collect();
    let required: Vec<&str> = required.iter().map(|item| item.name).collect();

    if y < DOCUMENTS_THRESHOLD {
        builder.add_page(CONTINUATION_PAGE.size);
        y = CONTINUATION_TOP;
    } else {
        y -= SECTION_GAP;
    }

    if !provided.is_empty() {
        y = draw_bullet_list(&mut builder, y, "DOCUMENTS PROVIDED", &provided, Color::BLACK)?;
        y -= 20.0;
    }
    if !required.is_empty() {
        draw_bullet_list(&mut builder, y, "DOCUMENTS REQUIRED", &required, Color::RED)?;
    }

    builder.finish()
}

/// Generator for the applicant details summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplicantDetailsGenerator;

#[async_trait]
impl DocumentGenerator for ApplicantDetailsGenerator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::ApplicantDetails
    }

    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        let bytes = render_applicant_details(bundle)?;
        Ok(GeneratedDocument::new(self.kind(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str) -> &'static DetailRow {
        SECTIONS
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.label == label)
            .unwrap()
    }

    #[test]
    fn test_pesel_falls_back_to_na() {
        assert_eq!(row_value(row("PESEL:"), &FieldBundle::new()), Some("N/A".to_string()));
    }

    #[test]
    fn test_optional_rows_vanish_when_blank() {
        assert_eq!(row_value(row("Spouse:"), &FieldBundle::new()), None);
        let bundle = FieldBundle::new().with("spouse.firstName", "Maria");
        assert_eq!(row_value(row("Spouse:"), &bundle), Some("Maria".to_string()));
    }

    #[test]
    fn test_plain_rows_render_blank() {
        assert_eq!(row_value(row("Email:"), &FieldBundle::new()), Some(String::new()));
    }

    #[test]
    fn test_documents_move_to_second_page() {
        let bytes = render_applicant_details(&FieldBundle::new()).unwrap();
        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), 2);
    }
}
