//! Applicant details summary: label/value sections on A4 portrait.

use super::{Binding, DocumentSpec, FieldSpec, PageLayout, StaticText};
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::PageSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub binding: Binding,
    /// Drawn when the value is blank.
    pub fallback: Option<&'static str>,
    /// Skipped entirely when blank.
    pub optional: bool,
}

const fn row(label: &'static str, binding: Binding) -> DetailRow {
    DetailRow {
        label,
        binding,
        fallback: None,
        optional: false,
    }
}

const fn optional_row(label: &'static str, binding: Binding) -> DetailRow {
    DetailRow {
        label,
        binding,
        fallback: None,
        optional: true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: &'static [DetailRow],
}

pub const SECTIONS: &[DetailSection] = &[
    DetailSection {
        title: "PERSONAL INFORMATION",
        rows: &[
            row(
                "Full name:",
                Binding::Joined(&["applicant.firstName", "applicant.middleName", "applicant.lastName"]),
            ),
            optional_row("Maiden name:", Binding::Field("applicant.maidenName")),
            row("Date of birth:", Binding::Field("applicant.birthDate")),
            row("Place of birth:", Binding::Field("applicant.birthPlace")),
            row("Gender:", Binding::Field("applicant.gender")),
            row("Marital status:", Binding::Field("applicant.maritalStatus")),
            DetailRow {
                label: "PESEL:",
                binding: Binding::Field("applicant.pesel"),
                fallback: Some("N/A"),
                optional: false,
            },
            row("Passport number:", Binding::Field("applicant.passportNumber")),
        ],
    },
    DetailSection {
        title: "CONTACT INFORMATION",
        rows: &[
            row("Email:", Binding::Field("applicant.email")),
            row("Phone:", Binding::Field("applicant.phone")),
            row("Address:", Binding::Field("applicant.address")),
            row("City:", Binding::Field("applicant.city")),
            row("Postal code:", Binding::Field("applicant.postalCode")),
            row("Country:", Binding::Field("applicant.country")),
        ],
    },
    DetailSection {
        title: "FAMILY INFORMATION",
        rows: &[
            row("Father:", Binding::Joined(&["father.firstName", "father.lastName"])),
            row("Mother:", Binding::Joined(&["mother.firstName", "mother.lastName"])),
            row("Mother's maiden name:", Binding::Field("mother.maidenName")),
            optional_row("Spouse:", Binding::Joined(&["spouse.firstName", "spouse.lastName"])),
            optional_row("Children:", Binding::Field("applicant.children")),
        ],
    },
    DetailSection {
        title: "POLISH ANCESTRY",
        rows: &[
            row("Polish ancestor:", Binding::Field("ancestor.name")),
            row("Relationship:", Binding::Field("ancestor.relationship")),
            row("Birthplace in Poland:", Binding::Field("ancestor.birthPlace")),
            row("Emigration date:", Binding::Field("ancestor.emigrationDate")),
            row("Naturalization date:", Binding::Field("ancestor.naturalizationDate")),
        ],
    },
];

pub const SECTIONS_TOP: f32 = 720.0;
pub const SECTION_GAP: f32 = 10.0;
pub const SECTION_TITLE_SIZE: f32 = 12.0;
pub const SECTION_RULE_WIDTH: f32 = 200.0;
pub const ROW_ADVANCE: f32 = 20.0;
pub const LABEL_X: f32 = 50.0;
pub const VALUE_OFFSET: f32 = 150.0;
/// Below this line the documents section moves to a fresh page.
pub const DOCUMENTS_THRESHOLD: f32 = 200.0;
pub const PAGE_BOTTOM: f32 = 60.0;
pub const CONTINUATION_TOP: f32 = 780.0;

const SUMMARY_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("APPLICANT DETAILS FORM", 180.0, 780.0, 18.0),
        StaticText::new("Formularz danych wnioskodawcy", 210.0, 760.0, 12.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[&[FieldSpec::captioned(
        "Case number:",
        50.0,
        740.0,
        150.0,
        10.0,
        Binding::Field("case.number"),
    )
    .optional()]],
};

/// Layout of documents-section overflow pages.
pub const CONTINUATION_PAGE: PageLayout = PageLayout::blank(PageSize::A4_PORTRAIT);

pub static APPLICANT_DETAILS: DocumentSpec = DocumentSpec {
    kind: DocumentKind::ApplicantDetails,
    title: "Applicant Details",
    pages: &[&SUMMARY_PAGE],
    footer: None,
    template: None,
};
