//! Power-of-attorney rendering engine.
//!
//! Runs an explicit state machine over the variant's fillable template:
//!
//! ```text
//! TemplateLookup -> FieldBinding -> Flatten -> Serialize          (form fill)
//!                        \-> TemplateOverlay -> Flatten -> Serialize
//! any template failure -> ScratchOverlay                          (registry layout)
//! ```
//!
//! Every path ends in serialized bytes; template problems are logged and
//! degrade to the next path instead of surfacing as errors.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::documents::bundle::FieldBundle;
use crate::documents::kind::PoaVariant;
use crate::documents::pdf::canvas::{Color, FontFace, PageCanvas};
use crate::documents::pdf::{PdfError, TemplatePdf};
use crate::documents::registry::power_of_attorney::{spec_for, TEMPLATE_BINDINGS, TEMPLATE_TEXT_SIZE};
use crate::documents::registry::render_layout;

/// Where template files come from.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Bytes of `file_name`, or `None` when no such template exists.
    async fn load(&self, file_name: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Templates stored in a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskTemplateSource {
    root: PathBuf,
}

impl DiskTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateSource for DiskTemplateSource {
    async fn load(&self, file_name: &str) -> io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.root.join(file_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Which path produced a power of attorney.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    /// Template form fields were filled and flattened.
    FormFill,
    /// Values were drawn over the template pages at fixed anchors.
    TemplateOverlay,
    /// The registry layout was drawn from scratch.
    Scratch,
}

#[derive(Debug, Clone)]
pub struct PoaRender {
    pub bytes: Vec<u8>,
    pub path: RenderPath,
}

enum State {
    TemplateLookup,
    FieldBinding(TemplatePdf),
    TemplateOverlay(TemplatePdf, String),
    Flatten(TemplatePdf, RenderPath),
    Serialize(TemplatePdf, RenderPath),
    ScratchOverlay(String),
}

/// Engine for rendering power-of-attorney variants.
#[derive(Clone)]
pub struct PoaRenderEngine {
    source: Arc<dyn TemplateSource>,
}

impl PoaRenderEngine {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// Render `variant` for `bundle`.
    ///
    /// Only a failure of the scratch layout itself is returned as an error.
    pub async fn render(&self, variant: PoaVariant, bundle: &FieldBundle) -> Result<PoaRender, PdfError> {
        let file_name = variant.template_file();
        let mut state = State::TemplateLookup;

        loop {
            state = match state {
                State::TemplateLookup => match self.source.load(file_name).await {
                    Ok(Some(bytes)) => match TemplatePdf::load(&bytes) {
                        Ok(template) => State::FieldBinding(template),
                        Err(err) => State::ScratchOverlay(format!("template {file_name} is unreadable: {err}")),
                    },
                    Ok(None) => State::ScratchOverlay(format!("template {file_name} not found")),
                    Err(err) => State::ScratchOverlay(format!("failed to read template {file_name}: {err}")),
                },
                State::FieldBinding(mut template) => match bind_fields(&mut template, bundle) {
                    Ok(()) => State::Flatten(template, RenderPath::FormFill),
                    Err(err) => State::TemplateOverlay(template, err.to_string()),
                },
                State::TemplateOverlay(mut template, reason) => {
                    warn!("{file_name}: form binding failed ({reason}), drawing values over the template");
                    match overlay_fields(&mut template, bundle) {
                        Ok(()) => State::Flatten(template, RenderPath::TemplateOverlay),
                        Err(err) => State::ScratchOverlay(format!("overlay on {file_name} failed: {err}")),
                    }
                }
                State::Flatten(mut template, path) => match template.flatten() {
                    Ok(()) => State::Serialize(template, path),
                    // A template without a form has nothing to flatten.
                    Err(PdfError::NoForm) => State::Serialize(template, path),
                    Err(err) => State::ScratchOverlay(format!("flattening {file_name} failed: {err}")),
                },
                State::Serialize(template, path) => match template.save() {
                    Ok(bytes) => {
                        debug!("{file_name}: rendered via {path:?}");
                        return Ok(PoaRender { bytes, path });
                    }
                    Err(err) => State::ScratchOverlay(format!("saving {file_name} failed: {err}")),
                },
                State::ScratchOverlay(reason) => {
                    warn!("{variant:?} power of attorney drawn from scratch: {reason}");
                    let bytes = render_layout(spec_for(variant), bundle)?;
                    return Ok(PoaRender {
                        bytes,
                        path: RenderPath::Scratch,
                    });
                }
            };
        }
    }
}

/// Resolve every named field first, then set values, so a missing field
/// leaves the template untouched.
fn bind_fields(template: &mut TemplatePdf, bundle: &FieldBundle) -> Result<(), PdfError> {
    let mut resolved = Vec::with_capacity(TEMPLATE_BINDINGS.len());

    for binding in TEMPLATE_BINDINGS {
        let value = binding.binding.resolve(bundle);
        if binding.optional {
            if value.is_empty() {
                continue;
            }
            match template.text_field(binding.field) {
                Ok(id) => resolved.push((id, value)),
                Err(err) => debug!("skipping optional field: {err}"),
            }
            continue;
        }
        resolved.push((template.text_field(binding.field)?, value));
    }

    for (id, value) in resolved {
        template.set_text(id, &value)?;
    }
    Ok(())
}

/// Draw the bound values at their fixed anchors on every template page.
fn overlay_fields(template: &mut TemplatePdf, bundle: &FieldBundle) -> Result<(), PdfError> {
    for index in 0..template.page_count() {
        let mut canvas = PageCanvas::new(template.page_size(index)?);
        for binding in TEMPLATE_BINDINGS {
            let value = binding.binding.resolve(bundle);
            if value.is_empty() {
                continue;
            }
            canvas.draw_text(
                &value,
                binding.anchor.0,
                binding.anchor.1,
                TEMPLATE_TEXT_SIZE,
                FontFace::from_bold(binding.bold),
                Color::INK_BLUE,
            );
        }
        if !canvas.is_empty() {
            template.overlay(index, canvas)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MemorySource(HashMap<String, Vec<u8>>);

    #[async_trait]
    impl TemplateSource for MemorySource {
        async fn load(&self, file_name: &str) -> io::Result<Option<Vec<u8>>> {
            Ok(self.0.get(file_name).cloned())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl TemplateSource for BrokenSource {
        async fn load(&self, _file_name: &str) -> io::Result<Option<Vec<u8>>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn engine_with(files: &[(&str, Vec<u8>)]) -> PoaRenderEngine {
        let map = files
            .iter()
            .map(|(name, bytes)| (name.to_string(), bytes.clone()))
            .collect();
        PoaRenderEngine::new(Arc::new(MemorySource(map)))
    }

    #[tokio::test]
    async fn test_missing_template_renders_from_scratch() {
        let engine = engine_with(&[]);
        let render = engine
            .render(PoaVariant::Archives, &FieldBundle::new())
            .await
            .unwrap();
        assert_eq!(render.path, RenderPath::Scratch);
        assert!(render.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_garbage_template_renders_from_scratch() {
        let engine = engine_with(&[("POA_Citizenship_Single.pdf", b"not a pdf".to_vec())]);
        let render = engine
            .render(PoaVariant::Single, &FieldBundle::new())
            .await
            .unwrap();
        assert_eq!(render.path, RenderPath::Scratch);
    }

    #[tokio::test]
    async fn test_unreadable_source_renders_from_scratch() {
        let engine = PoaRenderEngine::new(Arc::new(BrokenSource));
        let render = engine
            .render(PoaVariant::Minor, &FieldBundle::new())
            .await
            .unwrap();
        assert_eq!(render.path, RenderPath::Scratch);
    }
}
