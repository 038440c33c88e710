//! Operations on existing PDF documents: form lookup, value binding,
//! flattening and drawing overlays on top of the original page content.

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

use super::builder::{add_content_stream, add_standard_fonts, save_document};
use super::canvas::{Color, FontFace, PageCanvas, PageSize};
use super::encoding::{decode_text_string, decode_win_ansi, encode_win_ansi};
use super::PdfError;
use crate::documents::glyphs::normalize;

const MAX_FIELD_DEPTH: usize = 32;

/// A terminal form field discovered in the AcroForm tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: ObjectId,
    /// Dotted name including ancestor names.
    pub full_name: String,
    /// The field's own `/T` entry.
    pub partial_name: String,
    pub field_type: Option<Vec<u8>>,
}

/// A parsed template document.
pub struct TemplatePdf {
    document: Document,
    overlay_fonts: Option<Dictionary>,
}

impl TemplatePdf {
    pub fn load(bytes: &[u8]) -> Result<Self, PdfError> {
        let document = Document::load_mem(bytes).map_err(PdfError::Parse)?;
        Ok(Self {
            document,
            overlay_fonts: None,
        })
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    pub fn page_size(&self, index: usize) -> Result<PageSize, PdfError> {
        let page_id = self.page_id(index)?;
        Ok(self.media_box(page_id))
    }

    /// Every terminal field of the document's form.
    pub fn form_fields(&self) -> Result<Vec<FormField>, PdfError> {
        let form = self.acro_form()?;
        let roots = match form.get(b"Fields") {
            Ok(fields) => self.resolve(fields)?.as_array()?.clone(),
            Err(_) => Vec::new(),
        };

        let mut fields = Vec::new();
        self.collect_fields(&roots, None, None, &mut fields, 0);
        Ok(fields)
    }

    /// Look up a text field by full or partial name.
    pub fn text_field(&self, name: &str) -> Result<ObjectId, PdfError> {
        let fields = self.form_fields()?;
        let field = fields
            .iter()
            .find(|field| field.full_name == name)
            .or_else(|| fields.iter().find(|field| field.partial_name == name))
            .ok_or_else(|| PdfError::FieldNotFound(name.to_string()))?;

        match field.field_type.as_deref() {
            Some(b"Tx") => Ok(field.id),
            _ => Err(PdfError::FieldTypeMismatch(name.to_string())),
        }
    }

    /// Set the value of a text field previously resolved by [`Self::text_field`].
    pub fn set_text(&mut self, field: ObjectId, value: &str) -> Result<(), PdfError> {
        let encoded = encode_win_ansi(&normalize(value));
        let dictionary = self.document.get_object_mut(field)?.as_dict_mut()?;
        dictionary.set("V", Object::String(encoded, StringFormat::Literal));
        // Stale appearance streams would show the template's old value.
        dictionary.remove(b"AP");
        Ok(())
    }

    /// Burn widget values into page content and drop the interactive form.
    pub fn flatten(&mut self) -> Result<(), PdfError> {
        let pages: Vec<ObjectId> = self.document.get_pages().into_values().collect();

        for page_id in pages {
            let annotations = self.page_annotations(page_id)?;
            if annotations.is_empty() {
                continue;
            }

            let mut canvas = PageCanvas::new(self.media_box(page_id));
            let mut kept = Vec::new();
            for annotation in annotations {
                match self.widget(&annotation) {
                    Some(widget) => draw_widget_value(&mut canvas, &widget),
                    None => kept.push(annotation),
                }
            }

            if !canvas.is_empty() {
                self.overlay_on(page_id, canvas)?;
            }

            let page = self.document.get_object_mut(page_id)?.as_dict_mut()?;
            if kept.is_empty() {
                page.remove(b"Annots");
            } else {
                page.set("Annots", kept);
            }
        }

        let catalog_id = self.catalog_id()?;
        self.document
            .get_object_mut(catalog_id)?
            .as_dict_mut()?
            .remove(b"AcroForm");
        Ok(())
    }

    /// Draw `canvas` on top of the existing content of page `index` (zero-based).
    pub fn overlay(&mut self, index: usize, canvas: PageCanvas) -> Result<(), PdfError> {
        let page_id = self.page_id(index)?;
        self.overlay_on(page_id, canvas)
    }

    pub fn save(mut self) -> Result<Vec<u8>, PdfError> {
        save_document(&mut self.document)
    }

    fn overlay_on(&mut self, page_id: ObjectId, canvas: PageCanvas) -> Result<(), PdfError> {
        let overlay_fonts = match &self.overlay_fonts {
            Some(fonts) => fonts.clone(),
            None => {
                let fonts = add_standard_fonts(&mut self.document);
                self.overlay_fonts = Some(fonts.clone());
                fonts
            }
        };

        let mut resources = self.inherited_resources(page_id)?;
        let mut font_map = match resources.get(b"Font") {
            Ok(fonts) => self.resolve(fonts)?.as_dict()?.clone(),
            Err(_) => Dictionary::new(),
        };
        for (name, font) in overlay_fonts.iter() {
            font_map.set(name.clone(), font.clone());
        }
        resources.set("Font", font_map);

        let existing = self
            .document
            .get_object(page_id)?
            .as_dict()?
            .get(b"Contents")
            .ok()
            .cloned();
        let overlay_id = add_content_stream(&mut self.document, canvas)?;

        // Isolate the original graphics state so the overlay starts clean.
        let mut contents: Vec<Object> = Vec::new();
        let original = match existing {
            Some(Object::Reference(id)) => vec![Object::Reference(id)],
            Some(Object::Array(items)) => items,
            _ => Vec::new(),
        };
        if !original.is_empty() {
            let save_id = self.raw_stream(b"q\n".to_vec());
            let restore_id = self.raw_stream(b"\nQ\n".to_vec());
            contents.push(save_id.into());
            contents.extend(original);
            contents.push(restore_id.into());
        }
        contents.push(overlay_id.into());

        let page = self.document.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Contents", contents);
        page.set("Resources", resources);
        Ok(())
    }

    fn raw_stream(&mut self, content: Vec<u8>) -> ObjectId {
        self.document
            .add_object(lopdf::Stream::new(Dictionary::new(), content))
    }

    fn page_id(&self, index: usize) -> Result<ObjectId, PdfError> {
        let pages = self.document.get_pages();
        let count = pages.len();
        pages
            .values()
            .nth(index)
            .copied()
            .ok_or(PdfError::PageOutOfRange {
                page: index + 1,
                count,
            })
    }

    fn catalog_id(&self) -> Result<ObjectId, PdfError> {
        Ok(self.document.trailer.get(b"Root")?.as_reference()?)
    }

    fn acro_form(&self) -> Result<&Dictionary, PdfError> {
        let catalog = self.document.get_object(self.catalog_id()?)?.as_dict()?;
        let form = catalog.get(b"AcroForm").map_err(|_| PdfError::NoForm)?;
        Ok(self.resolve(form)?.as_dict()?)
    }

    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object, PdfError> {
        match object {
            Object::Reference(id) => Ok(self.document.get_object(*id)?),
            other => Ok(other),
        }
    }

    fn collect_fields(
        &self,
        nodes: &[Object],
        parent_name: Option<&str>,
        inherited_type: Option<&[u8]>,
        fields: &mut Vec<FormField>,
        depth: usize,
    ) {
        if depth > MAX_FIELD_DEPTH {
            return;
        }

        for node in nodes {
            let Object::Reference(id) = node else {
                continue;
            };
            let Ok(dictionary) = self.document.get_object(*id).and_then(Object::as_dict) else {
                continue;
            };

            let partial = dictionary.get(b"T").ok().and_then(text_value);
            let field_type = dictionary
                .get(b"FT")
                .ok()
                .and_then(name_value)
                .or_else(|| inherited_type.map(<[u8]>::to_vec));
            let full_name = match (parent_name, partial.as_deref()) {
                (Some(parent), Some(own)) => Some(format!("{parent}.{own}")),
                (None, Some(own)) => Some(own.to_string()),
                (Some(parent), None) => Some(parent.to_string()),
                (None, None) => None,
            };

            let kids = dictionary
                .get(b"Kids")
                .ok()
                .and_then(|kids| self.resolve(kids).ok())
                .and_then(|kids| kids.as_array().ok());
            let named_kids = kids.is_some_and(|kids| {
                kids.iter().any(|kid| {
                    self.resolve(kid)
                        .ok()
                        .and_then(|kid| kid.as_dict().ok())
                        .is_some_and(|kid| kid.has(b"T"))
                })
            });

            match (kids, named_kids) {
                (Some(kids), true) => self.collect_fields(
                    kids,
                    full_name.as_deref(),
                    field_type.as_deref(),
                    fields,
                    depth + 1,
                ),
                _ => {
                    if let (Some(full_name), Some(partial_name)) = (full_name, partial) {
                        fields.push(FormField {
                            id: *id,
                            full_name,
                            partial_name,
                            field_type,
                        });
                    }
                }
            }
        }
    }

    fn page_annotations(&self, page_id: ObjectId) -> Result<Vec<Object>, PdfError> {
        let page = self.document.get_object(page_id)?.as_dict()?;
        match page.get(b"Annots") {
            Ok(annotations) => Ok(self.resolve(annotations)?.as_array()?.clone()),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Rectangle and display value of a widget annotation; `None` for other annotations.
    fn widget(&self, annotation: &Object) -> Option<Widget> {
        let dictionary = self.resolve(annotation).ok()?.as_dict().ok()?;
        if dictionary.get(b"Subtype").ok().and_then(name_value)?.as_slice() != b"Widget" {
            return None;
        }

        let rect = dictionary
            .get(b"Rect")
            .ok()
            .and_then(|rect| self.resolve(rect).ok())
            .and_then(|rect| rect.as_array().ok())
            .and_then(|rect| numbers::<4>(rect));

        let mut value = None;
        let mut node = Some(dictionary);
        let mut depth = 0;
        while let Some(current) = node {
            if let Ok(found) = current.get(b"V") {
                value = self.resolve(found).ok().and_then(|found| match found {
                    Object::String(bytes, _) => Some(decode_win_ansi(bytes)),
                    Object::Name(name) if name.as_slice() != b"Off" => Some("X".to_string()),
                    _ => None,
                });
                break;
            }
            depth += 1;
            if depth > MAX_FIELD_DEPTH {
                break;
            }
            node = current
                .get(b"Parent")
                .ok()
                .and_then(|parent| self.resolve(parent).ok())
                .and_then(|parent| parent.as_dict().ok());
        }

        Some(Widget {
            rect,
            value: value.unwrap_or_default(),
        })
    }

    fn media_box(&self, page_id: ObjectId) -> PageSize {
        self.inherited(page_id, b"MediaBox")
            .and_then(|media_box| self.resolve(&media_box).ok().cloned())
            .and_then(|media_box| media_box.as_array().ok().and_then(|values| numbers::<4>(values)))
            .map(|[llx, lly, urx, ury]| PageSize {
                width: urx - llx,
                height: ury - lly,
            })
            .unwrap_or(PageSize::A4_PORTRAIT)
    }

    fn inherited_resources(&self, page_id: ObjectId) -> Result<Dictionary, PdfError> {
        match self.inherited(page_id, b"Resources") {
            Some(resources) => Ok(self.resolve(&resources)?.as_dict()?.clone()),
            None => Ok(Dictionary::new()),
        }
    }

    /// Page attribute, walking up the page tree for inheritable keys.
    fn inherited(&self, page_id: ObjectId, key: &[u8]) -> Option<Object> {
        let mut current = page_id;
        for _ in 0..MAX_FIELD_DEPTH {
            let dictionary = self.document.get_object(current).ok()?.as_dict().ok()?;
            if let Ok(value) = dictionary.get(key) {
                return Some(value.clone());
            }
            current = dictionary.get(b"Parent").ok()?.as_reference().ok()?;
        }
        None
    }
}

struct Widget {
    rect: Option<[f32; 4]>,
    value: String,
}

fn draw_widget_value(canvas: &mut PageCanvas, widget: &Widget) {
    let Some([llx, lly, urx, ury]) = widget.rect else {
        return;
    };
    if widget.value.is_empty() {
        return;
    }

    let height = (ury - lly).abs();
    let size = (height - 2.0).clamp(4.0, 10.0);
    let baseline = lly.min(ury) + (height - size) / 2.0 + 1.0;
    let width = (urx - llx).abs() - 4.0;
    canvas.fill_text_with(
        &widget.value,
        llx.min(urx) + 2.0,
        baseline,
        size,
        Some(width.max(0.0)),
        FontFace::Regular,
        Color::BLACK,
    );
}

fn text_value(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        _ => None,
    }
}

fn name_value(object: &Object) -> Option<Vec<u8>> {
    match object {
        Object::Name(name) => Some(name.clone()),
        _ => None,
    }
}

fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value as f32),
        _ => None,
    }
}

fn numbers<const N: usize>(values: &[Object]) -> Option<[f32; N]> {
    if values.len() != N {
        return None;
    }
    let mut parsed = [0.0; N];
    for (slot, value) in parsed.iter_mut().zip(values) {
        *slot = number(value)?;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Content;
    use lopdf::{dictionary, Stream};

    /// One-page document with a text field per name and a checkbox named `agree`.
    fn form_pdf(text_fields: &[&str]) -> Vec<u8> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let page_id = document.new_object_id();

        let mut fields: Vec<Object> = Vec::new();
        for (index, name) in text_fields.iter().enumerate() {
            let y = 700 - index as i64 * 40;
            let field_id = document.add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Widget",
                "FT" => "Tx",
                "T" => Object::string_literal(*name),
                "Rect" => vec![100.into(), y.into(), 300.into(), (y + 14).into()],
                "P" => page_id,
            });
            fields.push(field_id.into());
        }
        let checkbox_id = document.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Btn",
            "T" => Object::string_literal("agree"),
            "Rect" => vec![100.into(), 100.into(), 112.into(), 112.into()],
            "P" => page_id,
        });
        fields.push(checkbox_id.into());

        let content = Content {
            operations: vec![lopdf::content::Operation::new("BT", vec![]), lopdf::content::Operation::new("ET", vec![])],
        };
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        document.objects.insert(
            page_id,
            Object::Dictionary(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "Contents" => content_id,
                "Annots" => fields.clone(),
            }),
        );
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let form_id = document.add_object(dictionary! { "Fields" => fields });
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
            "AcroForm" => form_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes).unwrap();
        bytes
    }

    fn shown_text(bytes: &[u8]) -> Vec<String> {
        let document = Document::load_mem(bytes).unwrap();
        let mut shown = Vec::new();
        for page_id in document.get_pages().into_values() {
            let content = document.get_page_content(page_id).unwrap();
            for operation in Content::decode(&content).unwrap().operations {
                if operation.operator == "Tj" {
                    if let Some(Object::String(bytes, _)) = operation.operands.first() {
                        shown.push(String::from_utf8_lossy(bytes).into_owned());
                    }
                }
            }
        }
        shown
    }

    #[test]
    fn test_lists_form_fields() {
        let template = TemplatePdf::load(&form_pdf(&["imie", "nazwisko"])).unwrap();
        let names: Vec<String> = template
            .form_fields()
            .unwrap()
            .into_iter()
            .map(|field| field.full_name)
            .collect();
        assert_eq!(names, vec!["imie", "nazwisko", "agree"]);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let template = TemplatePdf::load(&form_pdf(&["imie"])).unwrap();
        assert!(matches!(
            template.text_field("nazwisko"),
            Err(PdfError::FieldNotFound(name)) if name == "nazwisko"
        ));
    }

    #[test]
    fn test_checkbox_is_not_a_text_field() {
        let template = TemplatePdf::load(&form_pdf(&["imie"])).unwrap();
        assert!(matches!(
            template.text_field("agree"),
            Err(PdfError::FieldTypeMismatch(_))
        ));
    }

    #[test]
    fn test_fill_and_flatten_removes_form() {
        let mut template = TemplatePdf::load(&form_pdf(&["imie"])).unwrap();
        let field = template.text_field("imie").unwrap();
        template.set_text(field, "Józef").unwrap();
        template.flatten().unwrap();
        let bytes = template.save().unwrap();

        assert!(shown_text(&bytes).contains(&"Jozef".to_string()));
        let reloaded = TemplatePdf::load(&bytes).unwrap();
        assert!(matches!(reloaded.form_fields(), Err(PdfError::NoForm)));
    }

    #[test]
    fn test_flatten_keeps_cp1252_punctuation() {
        let mut template = TemplatePdf::load(&form_pdf(&["sygnatura"])).unwrap();
        let field = template.text_field("sygnatura").unwrap();
        template.set_text(field, "Nr 12–15 €").unwrap();
        template.flatten().unwrap();
        let bytes = template.save().unwrap();

        let document = Document::load_mem(&bytes).unwrap();
        let page_id = *document.get_pages().values().next().unwrap();
        let content = Content::decode(&document.get_page_content(page_id).unwrap()).unwrap();
        let shown: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|operation| operation.operator == "Tj")
            .filter_map(|operation| match operation.operands.first() {
                Some(Object::String(bytes, _)) => Some(bytes.clone()),
                _ => None,
            })
            .collect();
        assert!(shown.contains(&b"Nr 12\x9615 \x80".to_vec()));
    }

    #[test]
    fn test_overlay_keeps_page_count_and_adds_text() {
        let mut template = TemplatePdf::load(&form_pdf(&["imie"])).unwrap();
        let mut canvas = PageCanvas::new(template.page_size(0).unwrap());
        canvas.draw_text("ANNA NOWAK", 242.0, 672.0, 11.0, FontFace::Bold, Color::INK_BLUE);
        template.overlay(0, canvas).unwrap();
        let bytes = template.save().unwrap();

        let reloaded = TemplatePdf::load(&bytes).unwrap();
        assert_eq!(reloaded.page_count(), 1);
        assert_eq!(reloaded.form_fields().unwrap().len(), 2);
        assert!(shown_text(&bytes).contains(&"ANNA NOWAK".to_string()));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            TemplatePdf::load(b"not a pdf"),
            Err(PdfError::Parse(_))
        ));
    }
}
