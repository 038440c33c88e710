//! Request and response bodies of the PDF routes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::package::PackageFailure;

pub const PDF_MIME: &str = "application/pdf";

/// Body of `POST /api/pdf/{kind}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Flat dotted keys (`applicant.firstName`) or nested role objects.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub fields: FieldBundle,
    /// Cache the PDF and answer with a view link instead of the bytes.
    #[serde(default)]
    pub return_url: Option<bool>,
}

/// Body of `POST /api/pdf/package`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub fields: FieldBundle,
    /// Kind selectors; the standard package when omitted.
    #[serde(default)]
    pub kinds: Option<Vec<String>>,
    #[serde(default)]
    pub return_url: Option<bool>,
}

/// Link to a cached PDF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ViewLink {
    pub id: String,
    pub url: String,
}

/// Answer to a single-document request that asked for a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ViewLinkResponse {
    pub id: String,
    pub url: String,
    pub filename: String,
}

/// Metadata for an inline file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
    /// ISO8601 creation time
    pub created_at: String,
}

impl FileMetadata {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            size_bytes,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A file carried inline as base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub metadata: FileMetadata,
    pub data: String,
}

impl FileContent {
    pub fn pdf(filename: impl Into<String>, data: &[u8]) -> Self {
        Self {
            metadata: FileMetadata::new(filename, PDF_MIME, data.len()),
            data: BASE64.encode(data),
        }
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }
}

/// One generated document of a package, either linked or inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PackageDocument {
    pub kind: DocumentKind,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ViewLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileContent>,
}

impl PackageDocument {
    pub fn linked(kind: DocumentKind, filename: impl Into<String>, link: ViewLink) -> Self {
        Self {
            kind,
            filename: filename.into(),
            link: Some(link),
            file: None,
        }
    }

    pub fn inline(kind: DocumentKind, filename: impl Into<String>, bytes: &[u8]) -> Self {
        let filename = filename.into();
        Self {
            kind,
            file: Some(FileContent::pdf(&filename, bytes)),
            filename,
            link: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PackageResponse {
    pub id: String,
    pub documents: Vec<PackageDocument>,
    pub failures: Vec<PackageFailure>,
}

/// Entry of `GET /api/pdf/kinds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct KindInfo {
    pub kind: DocumentKind,
    pub filename: String,
    /// Pages of the fixed layout; flowing documents may add more.
    pub pages: usize,
}
