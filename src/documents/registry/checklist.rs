//! Document checklist: fixed catalogue of required documents grouped by category.

use std::fmt;

use super::{Binding, DocumentSpec, FieldSpec, PageLayout, StaticText};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::{Color, PageSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Verified,
    InReview,
    Pending,
    Missing,
}

impl DocumentStatus {
    /// Parse a status value; anything unrecognised counts as missing.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "verified" => DocumentStatus::Verified,
            "in-review" | "inreview" | "review" => DocumentStatus::InReview,
            "pending" => DocumentStatus::Pending,
            _ => DocumentStatus::Missing,
        }
    }

    /// ZapfDingbats code of the status glyph.
    ///
    /// ✔ verified, ◆ in review, ● pending, ✘ missing. The font has no
    /// clock or rotating-arrow glyph, so in-review (⟳) and pending (◷) use
    /// the diamond and the dot.
    pub fn glyph(self) -> u8 {
        match self {
            DocumentStatus::Verified => 0x34,
            DocumentStatus::InReview => 0x75,
            DocumentStatus::Pending => 0x6D,
            DocumentStatus::Missing => 0x38,
        }
    }

    pub fn color(self) -> Color {
        match self {
            DocumentStatus::Verified => Color::GREEN,
            DocumentStatus::InReview => Color::AMBER,
            DocumentStatus::Pending => Color::BLUE,
            DocumentStatus::Missing => Color::RED,
        }
    }

    /// Whether the document counts as provided on the applicant summary.
    pub fn is_provided(self) -> bool {
        matches!(self, DocumentStatus::Verified | DocumentStatus::InReview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Bundle key segment: status lives at `documents.<key>.status`.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

impl ChecklistItem {
    pub fn status(&self, bundle: &FieldBundle) -> DocumentStatus {
        DocumentStatus::parse(&bundle.text(&format!("documents.{}.status", self.key)))
    }

    pub fn upload_date(&self, bundle: &FieldBundle) -> String {
        bundle.text(&format!("documents.{}.uploadDate", self.key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistCategory {
    pub name: &'static str,
    pub items: &'static [ChecklistItem],
}

const fn item(key: &'static str, name: &'static str, description: &'static str, priority: Priority) -> ChecklistItem {
    ChecklistItem {
        key,
        name,
        description,
        priority,
    }
}

pub const CATALOGUE: &[ChecklistCategory] = &[
    ChecklistCategory {
        name: "Applicant documents",
        items: &[
            item(
                "applicantBirthCertificate",
                "Birth certificate",
                "Full birth certificate with apostille",
                Priority::High,
            ),
            item("applicantPassport", "Passport copy", "Copy of a valid passport", Priority::Medium),
            item(
                "applicantMarriageCertificate",
                "Marriage certificate",
                "Required when the applicant is or was married",
                Priority::Medium,
            ),
            item(
                "applicantNameChange",
                "Name change documents",
                "Court orders or deed polls for any change of name",
                Priority::Low,
            ),
        ],
    },
    ChecklistCategory {
        name: "Parent documents",
        items: &[
            item(
                "parentBirthCertificate",
                "Parent birth certificate",
                "Birth certificate of the parent in the Polish line",
                Priority::High,
            ),
            item(
                "parentMarriageCertificate",
                "Parents' marriage certificate",
                "Marriage certificate of the applicant's parents",
                Priority::Medium,
            ),
            item(
                "parentNaturalization",
                "Parent naturalization records",
                "Naturalization certificate or proof of no naturalization",
                Priority::Medium,
            ),
        ],
    },
    ChecklistCategory {
        name: "Polish ancestor documents",
        items: &[
            item(
                "ancestorBirthRecord",
                "Ancestor Polish birth record",
                "Birth record from a Polish civil registry or parish",
                Priority::High,
            ),
            item(
                "ancestorPolishPassport",
                "Polish passport or ID",
                "Pre-war Polish passport, ID card or military booklet",
                Priority::High,
            ),
            item(
                "ancestorNaturalization",
                "Ancestor naturalization records",
                "Naturalization date or proof the ancestor never naturalized",
                Priority::High,
            ),
            item(
                "ancestorEmigration",
                "Emigration records",
                "Ship manifests, emigration or residence records",
                Priority::Low,
            ),
        ],
    },
    ChecklistCategory {
        name: "Translations & certifications",
        items: &[
            item(
                "swornTranslations",
                "Sworn translations",
                "Polish sworn translations of all foreign documents",
                Priority::High,
            ),
            item(
                "apostilles",
                "Apostilles",
                "Apostille or legalization of foreign civil records",
                Priority::Medium,
            ),
        ],
    },
];

pub fn all_items() -> impl Iterator<Item = &'static ChecklistItem> {
    CATALOGUE.iter().flat_map(|category| category.items.iter())
}

/// Completion percentage: `case.progress` clamped to 0..=100, or the share of
/// verified catalogue items.
pub fn progress(bundle: &FieldBundle) -> u8 {
    if let Ok(value) = bundle.text("case.progress").trim_end_matches('%').parse::<f64>() {
        if value.is_finite() {
            return value.round().clamp(0.0, 100.0) as u8;
        }
    }

    let total = all_items().count();
    if total == 0 {
        return 0;
    }
    let verified = all_items()
        .filter(|item| item.status(bundle) == DocumentStatus::Verified)
        .count();
    (100.0 * verified as f64 / total as f64).round() as u8
}

pub const HEADER_BOTTOM: f32 = 690.0;
pub const PROGRESS_BAR_WIDTH: f32 = 495.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 20.0;
/// Categories starting below this line move to a new page.
pub const CATEGORY_THRESHOLD: f32 = 150.0;
pub const PAGE_BOTTOM: f32 = 60.0;
pub const CONTINUATION_TOP: f32 = 780.0;

const SUMMARY_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("DOCUMENT CHECKLIST", 200.0, 780.0, 18.0),
        StaticText::new("Lista kontrolna dokumentów", 220.0, 760.0, 12.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[&[
        FieldSpec::captioned(
            "Applicant:",
            50.0,
            735.0,
            150.0,
            10.0,
            Binding::Joined(&["applicant.firstName", "applicant.lastName"]),
        ),
        FieldSpec::captioned("Case number:", 50.0, 720.0, 150.0, 10.0, Binding::Field("case.number")),
        FieldSpec::captioned("Date:", 50.0, 705.0, 150.0, 10.0, Binding::Field("document.date")),
    ]],
};

pub const CONTINUATION_PAGE: PageLayout = PageLayout::blank(PageSize::A4_PORTRAIT);

pub static DOCUMENT_CHECKLIST: DocumentSpec = DocumentSpec {
    kind: DocumentKind::DocumentChecklist,
    title: "Document Checklist",
    pages: &[&SUMMARY_PAGE],
    footer: None,
    template: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(DocumentStatus::parse("Verified"), DocumentStatus::Verified);
        assert_eq!(DocumentStatus::parse("in_review"), DocumentStatus::InReview);
        assert_eq!(DocumentStatus::parse("pending"), DocumentStatus::Pending);
        assert_eq!(DocumentStatus::parse(""), DocumentStatus::Missing);
        assert_eq!(DocumentStatus::parse("lost in mail"), DocumentStatus::Missing);
    }

    #[test]
    fn test_status_glyph_codes() {
        assert_eq!(DocumentStatus::Verified.glyph(), 0x34);
        assert_eq!(DocumentStatus::InReview.glyph(), 0x75);
        assert_eq!(DocumentStatus::Pending.glyph(), 0x6D);
        assert_eq!(DocumentStatus::Missing.glyph(), 0x38);
    }

    #[test]
    fn test_progress_override_is_clamped() {
        let bundle = FieldBundle::new().with("case.progress", "140");
        assert_eq!(progress(&bundle), 100);
        let bundle = FieldBundle::new().with("case.progress", "-5");
        assert_eq!(progress(&bundle), 0);
        let bundle = FieldBundle::new().with("case.progress", "37%");
        assert_eq!(progress(&bundle), 37);
    }

    #[test]
    fn test_progress_from_verified_share() {
        let total = all_items().count();
        let mut bundle = FieldBundle::new();
        for item in all_items().take(total / 2) {
            bundle.insert(format!("documents.{}.status", item.key), "verified");
        }
        let expected = (100.0 * (total / 2) as f64 / total as f64).round() as u8;
        assert_eq!(progress(&bundle), expected);
        assert_eq!(progress(&FieldBundle::new()), 0);
    }

    #[test]
    fn test_catalogue_keys_are_unique() {
        let mut keys: Vec<&str> = all_items().map(|item| item.key).collect();
        let count = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }
}
