//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::Path;

use citizenship_docs_server::documents::FieldBundle;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A bundle covering the applicant, spouse, parents and an attorney.
pub fn sample_bundle() -> FieldBundle {
    FieldBundle::new()
        .with("applicant.firstName", "Jan")
        .with("applicant.lastName", "Kowalski")
        .with("applicant.birthDate", "12.04.1985")
        .with("applicant.birthPlace", "Chicago, USA")
        .with("applicant.passportNumber", "US1234567")
        .with("applicant.email", "jan.kowalski@example.com")
        .with("applicant.gender", "male")
        .with("spouse.firstName", "Maria")
        .with("spouse.lastName", "Kowalska")
        .with("father.firstName", "Stanisław")
        .with("father.lastName", "Kowalski")
        .with("father.birthPlace", "Kraków")
        .with("mother.firstName", "Anna")
        .with("mother.lastName", "Kowalska")
        .with("mother.maidenName", "Nowak")
        .with("attorney.fullName", "Piotr Zieliński")
        .with("document.date", "01.03.2024")
        .with("case.number", "PL-2024-0042")
        .with("documents.applicantBirthCertificate.status", "verified")
        .with("documents.applicantPassport.status", "in-review")
}

/// Template with `pages` A4 pages; page one carries a text field per name.
pub fn form_pdf(pages: usize, text_fields: &[&str]) -> Vec<u8> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();
    let page_ids: Vec<_> = (0..pages).map(|_| document.new_object_id()).collect();

    let mut fields: Vec<Object> = Vec::new();
    for (index, name) in text_fields.iter().enumerate() {
        let y = 700 - index as i64 * 48;
        let field_id = document.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::string_literal(*name),
            "Rect" => vec![240.into(), y.into(), 500.into(), (y + 14).into()],
            "P" => page_ids[0],
        });
        fields.push(field_id.into());
    }

    for (index, page_id) in page_ids.iter().enumerate() {
        let content = Content {
            operations: vec![Operation::new("BT", vec![]), Operation::new("ET", vec![])],
        };
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode().unwrap_or_default()));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Contents" => content_id,
        };
        if index == 0 {
            page.set("Annots", fields.clone());
        }
        document.objects.insert(*page_id, Object::Dictionary(page));
    }

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<_>>(),
            "Count" => pages as i64,
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
    document.save_to(&mut bytes).expect("fixture PDF serializes");
    bytes
}

pub fn write_template(dir: &Path, file_name: &str, bytes: &[u8]) {
    std::fs::write(dir.join(file_name), bytes).expect("fixture template is written");
}

pub fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).expect("output parses").get_pages().len()
}

pub fn has_form(bytes: &[u8]) -> bool {
    let document = Document::load_mem(bytes).expect("output parses");
    document
        .catalog()
        .map(|catalog| catalog.has(b"AcroForm"))
        .unwrap_or(false)
}

/// Strings shown by `Tj` on each page, in page order.
pub fn page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
    let document = Document::load_mem(bytes).expect("output parses");
    document
        .get_pages()
        .into_values()
        .map(|page_id| {
            let content = document.get_page_content(page_id).expect("page content decodes");
            Content::decode(&content)
                .expect("content stream parses")
                .operations
                .into_iter()
                .filter(|operation| operation.operator == "Tj")
                .filter_map(|operation| match operation.operands.first() {
                    Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

pub fn page_contains(bytes: &[u8], page: usize, needle: &str) -> bool {
    page_texts(bytes)
        .get(page)
        .is_some_and(|texts| texts.iter().any(|text| text.contains(needle)))
}
