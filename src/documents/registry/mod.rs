//! Document template registry.
//!
//! Every document kind is described by a static [`DocumentSpec`]: its pages,
//! the static boilerplate on each page, and the fields bound to bundle keys
//! at fixed coordinates. The renderer in this module is generic over those
//! tables; generators with flowing content (family tree, applicant details,
//! checklist) draw their static frame from here and add the rest themselves.

pub mod applicant_details;
pub mod checklist;
pub mod citizenship;
pub mod family_tree;
pub mod power_of_attorney;

use crate::documents::bundle::FieldBundle;
use crate::documents::glyphs::normalize;
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::{Color, FontFace, PageCanvas, PageSize, VALUE_SIZE};
use crate::documents::pdf::{PdfBuilder, PdfError};

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    Field(&'static str),
    /// Space-joined non-empty values, e.g. first and last name.
    Joined(&'static [&'static str]),
}

impl Binding {
    pub fn resolve(&self, bundle: &FieldBundle) -> String {
        match self {
            Binding::Field(key) => bundle.text(key),
            Binding::Joined(keys) => bundle.joined(keys),
        }
    }

    pub fn keys(&self) -> &[&'static str] {
        match self {
            Binding::Field(key) => std::slice::from_ref(key),
            Binding::Joined(keys) => keys,
        }
    }
}

/// A printed option of a choice field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    /// Where the checkbox mark goes when the option is selected.
    pub mark: (f32, f32),
    /// Normalized, lowercase values that select this option.
    pub matches: &'static [&'static str],
}

/// How a field's label and value are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldStyle {
    /// Form label with an underline running to `x + width`; value at `value_x`.
    Underlined { width: f32, value_x: f32 },
    /// Caption with a bordered answer box below it.
    Boxed { width: f32, height: f32 },
    /// Caption plus printed options; the matching option gets an `X`.
    Choice {
        caption_width: f32,
        options: &'static [ChoiceOption],
    },
    /// Letter-style caption with a bold value at `value_x`.
    Captioned { value_x: f32, size: f32 },
    /// Value only.
    Bare { size: f32, bold: bool },
}

/// A field bound to the bundle at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub binding: Binding,
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub max_width: Option<f32>,
    /// Optional fields are skipped entirely, label included, when blank.
    pub optional: bool,
    pub style: FieldStyle,
}

impl FieldSpec {
    pub const fn underlined(
        label: &'static str,
        x: f32,
        y: f32,
        width: f32,
        value_x: f32,
        binding: Binding,
    ) -> Self {
        Self {
            binding,
            label,
            x,
            y,
            max_width: None,
            optional: false,
            style: FieldStyle::Underlined { width, value_x },
        }
    }

    pub const fn boxed(label: &'static str, x: f32, y: f32, width: f32, height: f32, binding: Binding) -> Self {
        Self {
            binding,
            label,
            x,
            y,
            max_width: None,
            optional: false,
            style: FieldStyle::Boxed { width, height },
        }
    }

    pub const fn choice(
        label: &'static str,
        x: f32,
        y: f32,
        caption_width: f32,
        options: &'static [ChoiceOption],
        binding: Binding,
    ) -> Self {
        Self {
            binding,
            label,
            x,
            y,
            max_width: None,
            optional: false,
            style: FieldStyle::Choice {
                caption_width,
                options,
            },
        }
    }

    pub const fn captioned(label: &'static str, x: f32, y: f32, value_x: f32, size: f32, binding: Binding) -> Self {
        Self {
            binding,
            label,
            x,
            y,
            max_width: None,
            optional: false,
            style: FieldStyle::Captioned { value_x, size },
        }
    }

    pub const fn bare(x: f32, y: f32, size: f32, binding: Binding) -> Self {
        Self {
            binding,
            label: "",
            x,
            y,
            max_width: None,
            optional: false,
            style: FieldStyle::Bare { size, bold: false },
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Truncation width for the value: explicit, or the space the style leaves.
    pub fn value_width(&self) -> Option<f32> {
        self.max_width.or(match self.style {
            FieldStyle::Underlined { width, value_x } => Some(self.x + width - value_x),
            FieldStyle::Boxed { width, .. } => Some(width - 20.0),
            FieldStyle::Captioned { value_x, .. } => Some(RIGHT_MARGIN - value_x),
            FieldStyle::Choice { .. } | FieldStyle::Bare { .. } => None,
        })
    }
}

/// Right edge for letter-style values on A4 portrait pages.
const RIGHT_MARGIN: f32 = 545.0;

/// One line of fixed text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticText {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
}

impl StaticText {
    pub const fn new(text: &'static str, x: f32, y: f32, size: f32) -> Self {
        Self {
            text,
            x,
            y,
            size,
            bold: false,
        }
    }

    pub const fn bold(text: &'static str, x: f32, y: f32, size: f32) -> Self {
        Self {
            text,
            x,
            y,
            size,
            bold: true,
        }
    }
}

/// Consecutive lines of fixed text, `leading` points apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paragraph {
    pub lines: &'static [&'static str],
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub leading: f32,
}

impl Paragraph {
    pub const fn new(lines: &'static [&'static str], x: f32, y: f32, size: f32, leading: f32) -> Self {
        Self {
            lines,
            x,
            y,
            size,
            leading,
        }
    }
}

/// A fixed line, e.g. a signature line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticRule {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub thickness: f32,
}

impl StaticRule {
    pub const fn new(from: (f32, f32), to: (f32, f32), thickness: f32) -> Self {
        Self {
            from,
            to,
            thickness,
        }
    }
}

/// Everything fixed on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub size: PageSize,
    pub texts: &'static [StaticText],
    pub paragraphs: &'static [Paragraph],
    pub rules: &'static [StaticRule],
    /// Field groups; groups let variants share blocks of fields.
    pub fields: &'static [&'static [FieldSpec]],
}

impl PageLayout {
    pub const fn blank(size: PageSize) -> Self {
        Self {
            size,
            texts: &[],
            paragraphs: &[],
            rules: &[],
            fields: &[],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().flat_map(|group| group.iter())
    }
}

/// Page-number footer (`strona n/N`) with an optional caption on the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footer {
    pub caption: Option<&'static str>,
    pub y: f32,
    pub size: f32,
}

/// Static description of one document kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentSpec {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub pages: &'static [&'static PageLayout],
    pub footer: Option<Footer>,
    /// Fillable template tried before drawing from scratch.
    pub template: Option<&'static str>,
}

impl DocumentSpec {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_sizes(&self) -> Vec<PageSize> {
        self.pages.iter().map(|page| page.size).collect()
    }

    /// All fields with their one-based page number.
    pub fn fields(&self) -> impl Iterator<Item = (usize, &'static FieldSpec)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.fields().map(move |field| (index + 1, field)))
    }
}

/// Registry lookup.
pub fn get_spec(kind: DocumentKind) -> &'static DocumentSpec {
    match kind {
        DocumentKind::CitizenshipApplication => &citizenship::CITIZENSHIP_APPLICATION,
        DocumentKind::PoaSingle => &power_of_attorney::POA_SINGLE,
        DocumentKind::PoaMarried => &power_of_attorney::POA_MARRIED,
        DocumentKind::PoaMinor => &power_of_attorney::POA_MINOR,
        DocumentKind::PoaArchives => &power_of_attorney::POA_ARCHIVES,
        DocumentKind::FamilyTree => &family_tree::FAMILY_TREE,
        DocumentKind::ApplicantDetails => &applicant_details::APPLICANT_DETAILS,
        DocumentKind::DocumentChecklist => &checklist::DOCUMENT_CHECKLIST,
    }
}

/// Render a fixed-layout document from scratch.
pub fn render_layout(spec: &DocumentSpec, bundle: &FieldBundle) -> Result<Vec<u8>, PdfError> {
    let mut builder = start_document(spec, bundle)?;
    draw_footers(spec, &mut builder)?;
    builder.finish()
}

/// Builder holding the spec's pages with their static content and fields drawn.
pub fn start_document(spec: &DocumentSpec, bundle: &FieldBundle) -> Result<PdfBuilder, PdfError> {
    let mut builder = PdfBuilder::with_pages(spec.title, &spec.page_sizes());
    for (index, layout) in spec.pages.iter().enumerate() {
        draw_page(builder.page_mut(index)?, layout, bundle);
    }
    Ok(builder)
}

/// Draw `strona n/N` on every page of the builder.
pub fn draw_footers(spec: &DocumentSpec, builder: &mut PdfBuilder) -> Result<(), PdfError> {
    let Some(footer) = spec.footer else {
        return Ok(());
    };

    let total = builder.page_count();
    for index in 0..total {
        let page = builder.page_mut(index)?;
        if let Some(caption) = footer.caption {
            page.draw_text(caption, 50.0, footer.y, footer.size, FontFace::Regular, Color::BLACK);
        }
        page.draw_text(
            &format!("strona {}/{}", index + 1, total),
            500.0,
            footer.y,
            footer.size,
            FontFace::Regular,
            Color::BLACK,
        );
    }
    Ok(())
}

/// Draw one page's static content and bound fields.
pub fn draw_page(canvas: &mut PageCanvas, layout: &PageLayout, bundle: &FieldBundle) {
    for text in layout.texts {
        canvas.draw_text(
            text.text,
            text.x,
            text.y,
            text.size,
            FontFace::from_bold(text.bold),
            Color::BLACK,
        );
    }

    for paragraph in layout.paragraphs {
        let mut y = paragraph.y;
        for line in paragraph.lines {
            if !line.is_empty() {
                canvas.draw_text(line, paragraph.x, y, paragraph.size, FontFace::Regular, Color::BLACK);
            }
            y -= paragraph.leading;
        }
    }

    for rule in layout.rules {
        canvas.draw_line(rule.from, rule.to, rule.thickness, Color::BLACK);
    }

    for field in layout.fields() {
        draw_field(canvas, field, bundle);
    }
}

/// Draw a single field's label and value.
pub fn draw_field(canvas: &mut PageCanvas, field: &FieldSpec, bundle: &FieldBundle) {
    let value = field.binding.resolve(bundle);
    if field.optional && value.is_empty() {
        return;
    }

    match field.style {
        FieldStyle::Underlined { width, value_x } => {
            canvas.draw_field(field.label, field.x, field.y, width);
            canvas.fill_text(&value, value_x, field.y, VALUE_SIZE, field.value_width());
        }
        FieldStyle::Boxed { width, height } => {
            canvas.draw_text(field.label, field.x, field.y, 10.0, FontFace::Regular, Color::BLACK);
            let top = field.y - 10.0;
            canvas.draw_text_box(field.x, top - height, width, height);
            canvas.fill_text(&value, field.x + 5.0, top - 15.0, 9.0, field.value_width());
        }
        FieldStyle::Choice {
            caption_width,
            options,
        } => {
            if !field.label.is_empty() {
                canvas.draw_field(field.label, field.x, field.y, caption_width);
            }
            let selected = normalize(&value).to_lowercase();
            for option in options {
                canvas.draw_text(option.label, option.x, option.y, 10.0, FontFace::Regular, Color::BLACK);
                if !selected.is_empty() && option.matches.contains(&selected.as_str()) {
                    canvas.fill_checkbox(option.mark.0, option.mark.1);
                }
            }
        }
        FieldStyle::Captioned { value_x, size } => {
            canvas.draw_text(field.label, field.x, field.y, size, FontFace::Regular, Color::BLACK);
            canvas.fill_text_with(
                &value,
                value_x,
                field.y,
                size,
                field.value_width(),
                FontFace::Bold,
                Color::BLACK,
            );
        }
        FieldStyle::Bare { size, bold } => {
            canvas.fill_text_with(
                &value,
                field.x,
                field.y,
                size,
                field.value_width(),
                FontFace::from_bold(bold),
                Color::BLACK,
            );
        }
    }
}
