//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, request defaults and flowing content
//! across page breaks.

use chrono::{Local, NaiveDate};

use crate::documents::bundle::FieldBundle;
use crate::documents::kind::{DocumentKind, PoaVariant};
use crate::documents::pdf::canvas::PageSize;
use crate::documents::pdf::PdfBuilder;

/// Format a date the way Polish offices write it (e.g. "05.03.2024").
pub fn format_polish_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Today's date in [`format_polish_date`] form.
pub fn today_polish_date() -> String {
    format_polish_date(Local::now().date_naive())
}

/// Visible placeholders for identity fields a power of attorney cannot leave blank.
const POA_PLACEHOLDERS: &[(&str, &[&str], &str)] = &[
    (
        "applicant.lastName",
        &["applicant.firstName", "applicant.lastName"],
        "NAZWISKO IMIONA",
    ),
    ("applicant.passportNumber", &["applicant.passportNumber"], "NUMER DOKUMENTU"),
];

const SPOUSE_PLACEHOLDERS: &[(&str, &[&str], &str)] = &[
    (
        "spouse.lastName",
        &["spouse.firstName", "spouse.lastName"],
        "NAZWISKO IMIONA MAŁŻONKA",
    ),
    ("spouse.passportNumber", &["spouse.passportNumber"], "NUMER DOKUMENTU"),
];

const CHILD_PLACEHOLDERS: &[(&str, &[&str], &str)] = &[(
    "child.lastName",
    &["child.firstName", "child.lastName"],
    "NAZWISKO IMIONA DZIECKA",
)];

/// Fill request-level defaults: `document.date` becomes `today` when absent,
/// and power-of-attorney kinds get placeholders for missing identity fields.
pub fn apply_request_defaults(bundle: &mut FieldBundle, kind: DocumentKind, today: &str) {
    if !bundle.is_set("document.date") {
        bundle.insert("document.date", today);
    }

    let Some(variant) = kind.poa_variant() else {
        return;
    };

    let mut tables = vec![POA_PLACEHOLDERS];
    match variant {
        PoaVariant::Married => tables.push(SPOUSE_PLACEHOLDERS),
        PoaVariant::Minor => tables.push(CHILD_PLACEHOLDERS),
        PoaVariant::Single | PoaVariant::Archives => {}
    }

    for table in tables {
        for (target, sources, placeholder) in table {
            if sources.iter().all(|key| !bundle.is_set(key)) {
                bundle.insert(*target, *placeholder);
            }
        }
    }
}

/// Start a fresh `size` page when `y` has dropped below `bottom`.
///
/// Returns the line to continue drawing at: `y` itself, or `top` on the new page.
pub fn ensure_room(builder: &mut PdfBuilder, y: f32, bottom: f32, size: PageSize, top: f32) -> f32 {
    if y >= bottom {
        return y;
    }
    builder.add_page(size);
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_polish_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_polish_date(date), "05.03.2024");
    }

    #[test]
    fn test_defaults_fill_date_and_poa_placeholders() {
        let mut bundle = FieldBundle::new();
        apply_request_defaults(&mut bundle, DocumentKind::PoaSingle, "01.02.2025");

        assert_eq!(bundle.text("document.date"), "01.02.2025");
        assert_eq!(bundle.text("applicant.lastName"), "NAZWISKO IMIONA");
        assert_eq!(bundle.text("applicant.passportNumber"), "NUMER DOKUMENTU");
        assert!(!bundle.is_set("spouse.lastName"));
    }

    #[test]
    fn test_defaults_keep_provided_values() {
        let mut bundle = FieldBundle::new()
            .with("applicant.firstName", "Jan")
            .with("document.date", "24.12.2024");
        apply_request_defaults(&mut bundle, DocumentKind::PoaMinor, "01.02.2025");

        assert_eq!(bundle.text("document.date"), "24.12.2024");
        assert!(!bundle.is_set("applicant.lastName"));
        assert_eq!(bundle.text("child.lastName"), "NAZWISKO IMIONA DZIECKA");
    }

    #[test]
    fn test_non_poa_kinds_only_get_a_date() {
        let mut bundle = FieldBundle::new();
        apply_request_defaults(&mut bundle, DocumentKind::FamilyTree, "01.02.2025");
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_ensure_room_adds_page_only_below_bottom() {
        let mut builder = PdfBuilder::with_pages("t", &[PageSize::A4_PORTRAIT]);
        assert_eq!(ensure_room(&mut builder, 100.0, 60.0, PageSize::A4_PORTRAIT, 800.0), 100.0);
        assert_eq!(builder.page_count(), 1);
        assert_eq!(ensure_room(&mut builder, 59.0, 60.0, PageSize::A4_PORTRAIT, 800.0), 800.0);
        assert_eq!(builder.page_count(), 2);
    }
}
