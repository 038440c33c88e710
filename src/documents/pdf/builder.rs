//! Scratch PDF assembly.
//!
//! Pages are recorded on `PageCanvas`es and written out in one pass. Output
//! carries no wall-clock timestamps so equal input always yields equal bytes.

use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use super::canvas::{FontFace, PageCanvas, PageSize};
use super::PdfError;

/// Fixed creation date written into every document's info dictionary.
const EPOCH_PDF_DATE: &str = "D:19700101000000Z";
const PRODUCER: &str = "citizenship-docs-server";

/// Builder for documents drawn from scratch.
#[derive(Debug)]
pub struct PdfBuilder {
    title: String,
    pages: Vec<PageCanvas>,
}

impl PdfBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Builder with `sizes.len()` blank pages.
    pub fn with_pages(title: impl Into<String>, sizes: &[PageSize]) -> Self {
        let mut builder = Self::new(title);
        for size in sizes {
            builder.add_page(*size);
        }
        builder
    }

    /// Append a page and return its zero-based index.
    pub fn add_page(&mut self, size: PageSize) -> usize {
        self.pages.push(PageCanvas::new(size));
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_mut(&mut self, index: usize) -> Result<&mut PageCanvas, PdfError> {
        let count = self.pages.len();
        self.pages.get_mut(index).ok_or(PdfError::PageOutOfRange {
            page: index + 1,
            count,
        })
    }

    /// The most recently added page.
    pub fn last_page_mut(&mut self) -> Result<&mut PageCanvas, PdfError> {
        let index = self.pages.len().checked_sub(1).ok_or(PdfError::PageOutOfRange {
            page: 1,
            count: 0,
        })?;
        self.page_mut(index)
    }

    /// Write all pages into a PDF byte stream.
    pub fn finish(self) -> Result<Vec<u8>, PdfError> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        let fonts = add_standard_fonts(&mut document);
        let resources_id = document.add_object(dictionary! {
            "Font" => fonts,
        });

        let page_count = self.pages.len();
        let mut kids: Vec<Object> = Vec::with_capacity(page_count);
        for page in self.pages {
            let size = page.size();
            let content_id = add_content_stream(&mut document, page)?;
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = document.add_object(dictionary! {
            "Title" => Object::string_literal(self.title),
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(EPOCH_PDF_DATE),
            "ModDate" => Object::string_literal(EPOCH_PDF_DATE),
        });
        document.trailer.set("Root", catalog_id);
        document.trailer.set("Info", info_id);

        save_document(&mut document)
    }
}

/// Register the three standard fonts and return the `/Font` resource map.
pub(crate) fn add_standard_fonts(document: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let mut font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
        };
        if face != FontFace::Symbol {
            font.set("Encoding", "WinAnsiEncoding");
        }
        let font_id = document.add_object(font);
        fonts.set(face.resource_name(), font_id);
    }
    fonts
}

pub(crate) fn add_content_stream(
    document: &mut Document,
    page: PageCanvas,
) -> Result<lopdf::ObjectId, PdfError> {
    let content = Content {
        operations: page.into_operations(),
    };
    let encoded = content
        .encode()
        .map_err(|error| PdfError::Encode(error.to_string()))?;
    Ok(document.add_object(Stream::new(dictionary! {}, encoded)))
}

pub(crate) fn save_document(document: &mut Document) -> Result<Vec<u8>, PdfError> {
    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|error| PdfError::Serialize(error.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::pdf::canvas::{Color, FontFace};

    #[test]
    fn test_finish_writes_all_pages() {
        let mut builder = PdfBuilder::new("Test");
        builder.add_page(PageSize::A4_PORTRAIT);
        builder.add_page(PageSize::A4_LANDSCAPE);
        builder
            .page_mut(0)
            .unwrap()
            .draw_text("Hello", 50.0, 50.0, 10.0, FontFace::Regular, Color::BLACK);

        let bytes = builder.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let reloaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(reloaded.get_pages().len(), 2);
    }

    #[test]
    fn test_output_is_deterministic() {
        let render = || {
            let mut builder = PdfBuilder::with_pages("Same", &[PageSize::A4_PORTRAIT]);
            builder
                .page_mut(0)
                .unwrap()
                .draw_text("Zażółć", 10.0, 10.0, 12.0, FontFace::Bold, Color::BLUE);
            builder.finish().unwrap()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_page_out_of_range() {
        let mut builder = PdfBuilder::with_pages("One", &[PageSize::A4_PORTRAIT]);
        assert!(matches!(
            builder.page_mut(3),
            Err(PdfError::PageOutOfRange { page: 4, count: 1 })
        ));
    }
}
