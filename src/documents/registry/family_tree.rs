//! Drzewo genealogiczne: landscape card grid plus a portrait inventory page.

use super::{Binding, DocumentSpec, FieldSpec, PageLayout, StaticText};
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::PageSize;

/// A family role drawn as a card, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRole {
    pub role: &'static str,
    pub relationship: &'static str,
}

const fn role(role: &'static str, relationship: &'static str) -> MemberRole {
    MemberRole { role, relationship }
}

pub const MEMBER_ROLES: &[MemberRole] = &[
    role("applicant", "Applicant"),
    role("spouse", "Spouse"),
    role("father", "Father"),
    role("mother", "Mother"),
    role("fatherGrandpa", "Paternal grandfather"),
    role("fatherGrandma", "Paternal grandmother"),
    role("motherGrandpa", "Maternal grandfather"),
    role("motherGrandma", "Maternal grandmother"),
    role("fatherGreatGrandpa", "Paternal great-grandfather"),
    role("fatherGreatGrandma", "Paternal great-grandmother"),
    role("motherGreatGrandpa", "Maternal great-grandfather"),
    role("motherGreatGrandma", "Maternal great-grandmother"),
];

pub const GRID_COLUMNS: usize = 3;
pub const GRID_ROWS: usize = 3;
pub const MAX_CARDS: usize = GRID_COLUMNS * GRID_ROWS;

pub const GRID_LEFT: f32 = 50.0;
pub const GRID_TOP: f32 = 400.0;
pub const COLUMN_ADVANCE: f32 = 200.0;
pub const ROW_ADVANCE: f32 = 150.0;
pub const CARD_WIDTH: f32 = 180.0;
pub const CARD_HEIGHT: f32 = 120.0;

/// Zero-based (column, row) of card `index`.
pub fn card_cell(index: usize) -> (usize, usize) {
    (index % GRID_COLUMNS, index / GRID_COLUMNS)
}

/// Text origin of card `index`, or `None` when it falls outside the grid.
pub fn card_origin(index: usize) -> Option<(f32, f32)> {
    if index >= MAX_CARDS {
        return None;
    }
    let (column, row) = card_cell(index);
    Some((
        GRID_LEFT + column as f32 * COLUMN_ADVANCE,
        GRID_TOP - row as f32 * ROW_ADVANCE,
    ))
}

/// Card border rectangle `(x, y, width, height)` for a text origin.
pub fn card_frame(origin: (f32, f32)) -> (f32, f32, f32, f32) {
    (origin.0 - 10.0, origin.1 - 100.0, CARD_WIDTH, CARD_HEIGHT)
}

const TREE_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_LANDSCAPE,
    texts: &[
        StaticText::bold("DRZEWO GENEALOGICZNE", 320.0, 550.0, 20.0),
        StaticText::new("(FAMILY TREE)", 360.0, 525.0, 14.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[&[FieldSpec::captioned(
        "Ostatnia aktualizacja / Last updated:",
        50.0,
        30.0,
        230.0,
        9.0,
        Binding::Field("document.date"),
    )]],
};

const INVENTORY_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("DOKUMENTY GENEALOGICZNE", 180.0, 800.0, 16.0),
        StaticText::new("(GENEALOGICAL DOCUMENTS)", 200.0, 780.0, 12.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[],
};

/// Layout used for inventory overflow pages.
pub const CONTINUATION_PAGE: PageLayout = PageLayout::blank(PageSize::A4_PORTRAIT);

pub const INVENTORY_TOP: f32 = 740.0;
pub const CONTINUATION_TOP: f32 = 800.0;
pub const INVENTORY_BOTTOM: f32 = 60.0;

pub static FAMILY_TREE: DocumentSpec = DocumentSpec {
    kind: DocumentKind::FamilyTree,
    title: "Drzewo genealogiczne (Family Tree)",
    pages: &[&TREE_PAGE, &INVENTORY_PAGE],
    footer: None,
    template: None,
};
