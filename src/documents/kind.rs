//! Document kind selectors and power-of-attorney variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A selector that names no known document kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported document kind '{0}'")]
pub struct UnknownKind(pub String);

/// Every document the engine can assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    CitizenshipApplication,
    PoaSingle,
    PoaMarried,
    PoaMinor,
    PoaArchives,
    FamilyTree,
    ApplicantDetails,
    DocumentChecklist,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 8] = [
        DocumentKind::CitizenshipApplication,
        DocumentKind::PoaSingle,
        DocumentKind::PoaMarried,
        DocumentKind::PoaMinor,
        DocumentKind::PoaArchives,
        DocumentKind::FamilyTree,
        DocumentKind::ApplicantDetails,
        DocumentKind::DocumentChecklist,
    ];

    /// Kinds generated when a package request names none.
    pub const CANONICAL_PACKAGE: [DocumentKind; 5] = [
        DocumentKind::CitizenshipApplication,
        DocumentKind::PoaSingle,
        DocumentKind::FamilyTree,
        DocumentKind::ApplicantDetails,
        DocumentKind::DocumentChecklist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::CitizenshipApplication => "citizenship-application",
            DocumentKind::PoaSingle => "poa-single",
            DocumentKind::PoaMarried => "poa-married",
            DocumentKind::PoaMinor => "poa-minor",
            DocumentKind::PoaArchives => "poa-archives",
            DocumentKind::FamilyTree => "family-tree",
            DocumentKind::ApplicantDetails => "applicant-details",
            DocumentKind::DocumentChecklist => "document-checklist",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            DocumentKind::CitizenshipApplication => "Polish_Citizenship_Application.pdf",
            DocumentKind::PoaSingle => "Power_of_Attorney_Single.pdf",
            DocumentKind::PoaMarried => "Power_of_Attorney_Married.pdf",
            DocumentKind::PoaMinor => "Power_of_Attorney_Minor.pdf",
            DocumentKind::PoaArchives => "Power_of_Attorney_Archives.pdf",
            DocumentKind::FamilyTree => "Family_Tree.pdf",
            DocumentKind::ApplicantDetails => "Applicant_Details.pdf",
            DocumentKind::DocumentChecklist => "Document_Checklist.pdf",
        }
    }

    pub fn poa_variant(self) -> Option<PoaVariant> {
        match self {
            DocumentKind::PoaSingle => Some(PoaVariant::Single),
            DocumentKind::PoaMarried => Some(PoaVariant::Married),
            DocumentKind::PoaMinor => Some(PoaVariant::Minor),
            DocumentKind::PoaArchives => Some(PoaVariant::Archives),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = UnknownKind;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let wanted = selector.trim().to_ascii_lowercase().replace('_', "-");
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownKind(selector.to_string()))
    }
}

/// Power-of-attorney variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoaVariant {
    Single,
    Married,
    Minor,
    Archives,
}

impl PoaVariant {
    pub const ALL: [PoaVariant; 4] = [
        PoaVariant::Single,
        PoaVariant::Married,
        PoaVariant::Minor,
        PoaVariant::Archives,
    ];

    pub fn kind(self) -> DocumentKind {
        match self {
            PoaVariant::Single => DocumentKind::PoaSingle,
            PoaVariant::Married => DocumentKind::PoaMarried,
            PoaVariant::Minor => DocumentKind::PoaMinor,
            PoaVariant::Archives => DocumentKind::PoaArchives,
        }
    }

    pub fn page_count(self) -> usize {
        match self {
            PoaVariant::Single | PoaVariant::Minor => 3,
            PoaVariant::Married => 4,
            PoaVariant::Archives => 1,
        }
    }

    /// File name of the fillable template inside the template directory.
    pub fn template_file(self) -> &'static str {
        match self {
            PoaVariant::Single => "POA_Citizenship_Single.pdf",
            PoaVariant::Married => "POA_Citizenship_Married.pdf",
            PoaVariant::Minor => "POA_Citizenship_Minor.pdf",
            PoaVariant::Archives => "POA_Citizenship_Archives.pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_round_trip_through_display() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.to_string().parse::<DocumentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_selector_parsing_is_lenient_on_case_and_underscores() {
        assert_eq!("POA_Single".parse(), Ok(DocumentKind::PoaSingle));
        assert_eq!(" family-tree ".parse(), Ok(DocumentKind::FamilyTree));
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(
            "birth-certificate".parse::<DocumentKind>(),
            Err(UnknownKind("birth-certificate".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&DocumentKind::DocumentChecklist).unwrap();
        assert_eq!(json, "\"document-checklist\"");
    }

    #[test]
    fn test_poa_page_counts() {
        let counts: Vec<usize> = PoaVariant::ALL.iter().map(|v| v.page_count()).collect();
        assert_eq!(counts, vec![3, 4, 3, 1]);
    }
}
