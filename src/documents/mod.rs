//! Document assembly: field bundles in, PDF documents out.
//!
//! - `bundle` - flat dotted-key field values
//! - `registry` - static page layouts per document kind
//! - `pdf` - drawing, serialization and template forms
//! - `generators` - one generator per document kind
//! - `package` - batch generation with per-document failures
//! - `cache` - short-lived storage behind view links
//! - `handlers` / `models` - the HTTP surface

pub mod bundle;
pub mod cache;
pub mod generators;
pub mod glyphs;
pub mod handlers;
pub mod kind;
pub mod models;
pub mod package;
pub mod pdf;
pub mod registry;

pub use bundle::{FieldBundle, FieldValue};
pub use kind::{DocumentKind, PoaVariant, UnknownKind};
pub use package::{PackageError, PackageFailure, PackageManifest, PackageOrchestrator};
