//! Generator for the genealogical tree.
//!
//! Page one carries up to nine member cards in a three-column grid; the
//! following portrait page(s) list every member's records, including members
//! that did not fit on the grid.

use async_trait::async_trait;
use log::debug;

use super::common::ensure_room;
use super::traits::DocumentGenerator;
use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::{truncate_to_width, Color, FontFace, PageCanvas, RectStyle};
use crate::documents::pdf::PdfError;
use crate::documents::registry::family_tree::{
    card_frame, card_origin, MemberRole, CARD_WIDTH, CONTINUATION_PAGE, CONTINUATION_TOP, INVENTORY_BOTTOM,
    INVENTORY_TOP, MAX_CARDS, MEMBER_ROLES,
};
use crate::documents::registry::{draw_footers, get_spec, start_document};

const CARD_TEXT_WIDTH: f32 = CARD_WIDTH - 20.0;

/// One family member as read from the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub relationship: &'static str,
    pub name: String,
    pub birth_date: String,
    pub birth_place: String,
    pub death_date: String,
    pub emigration_date: String,
    pub naturalization_date: String,
    pub notes: String,
}

impl FamilyMember {
    fn from_bundle(role: &MemberRole, bundle: &FieldBundle) -> Self {
        let field = |name: &str| bundle.text(&format!("{}.{name}", role.role));
        let mut name = bundle.joined(&[
            &format!("{}.firstName", role.role),
            &format!("{}.lastName", role.role),
        ]);
        let maiden = field("maidenName");
        if !maiden.is_empty() {
            name = format!("{name} ({maiden})").trim().to_string();
        }

        Self {
            relationship: role.relationship,
            name,
            birth_date: field("birthDate"),
            birth_place: field("birthPlace"),
            death_date: field("deathDate"),
            emigration_date: field("emigrationDate"),
            naturalization_date: field("naturalizationDate"),
            notes: field("notes"),
        }
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "-"
        } else {
            &self.name
        }
    }

    /// Record lines for the inventory page.
    fn records(&self) -> Vec<String> {
        let mut records = Vec::new();
        match (self.birth_date.is_empty(), self.birth_place.is_empty()) {
            (false, false) => records.push(format!("Birth: {} in {}", self.birth_date, self.birth_place)),
            (false, true) => records.push(format!("Birth: {}", self.birth_date)),
            (true, false) => records.push(format!("Birth: in {}", self.birth_place)),
            (true, true) => {}
        }
        if !self.death_date.is_empty() {
            records.push(format!("Death: {}", self.death_date));
        }
        if !self.emigration_date.is_empty() {
            records.push(format!("Emigration: {}", self.emigration_date));
        }
        if !self.naturalization_date.is_empty() {
            records.push(format!("Naturalization: {}", self.naturalization_date));
        }
        if !self.notes.is_empty() {
            records.push(format!("Notes: {}", self.notes));
        }
        records
    }
}

/// Members present in the bundle, in canonical role order.
pub fn collect_members(bundle: &FieldBundle) -> Vec<FamilyMember> {
    MEMBER_ROLES
        .iter()
        .filter(|role| bundle.role_present(role.role))
        .map(|role| FamilyMember::from_bundle(role, bundle))
        .collect()
}

fn draw_card(canvas: &mut PageCanvas, member: &FamilyMember, origin: (f32, f32)) {
    let (frame_x, frame_y, width, height) = card_frame(origin);
    canvas.draw_rectangle(frame_x, frame_y, width, height, RectStyle::outline(Color::GRAY, 1.0));

    let (x, mut y) = origin;
    let fit = |text: &str, size: f32| truncate_to_width(text, size, CARD_TEXT_WIDTH);

    canvas.draw_text(&fit(member.display_name(), 10.0), x, y, 10.0, FontFace::Bold, Color::BLACK);
    y -= 15.0;
    canvas.draw_text(member.relationship, x, y, 9.0, FontFace::Regular, Color::DARK_GRAY);
    y -= 12.0;
    canvas.draw_text(&fit(&format!("Born: {}", member.birth_date), 8.0), x, y, 8.0, FontFace::Regular, Color::BLACK);
    y -= 10.0;
    canvas.draw_text(&fit(&format!("Place: {}", member.birth_place), 8.0), x, y, 8.0, FontFace::Regular, Color::BLACK);
    y -= 10.0;
    if !member.emigration_date.is_empty() {
        let line = fit(&format!("Emigrated: {}", member.emigration_date), 8.0);
        canvas.draw_text(&line, x, y, 8.0, FontFace::Regular, Color::BLUE);
        y -= 10.0;
    }
    if !member.naturalization_date.is_empty() {
        let line = fit(&format!("Naturalized: {}", member.naturalization_date), 8.0);
        canvas.draw_text(&line, x, y, 8.0, FontFace::Regular, Color::BLUE);
        y -= 10.0;
    }
    if !member.notes.is_empty() {
        canvas.draw_text(&fit(&member.notes, 7.0), x, y, 7.0, FontFace::Regular, Color::GRAY);
    }
}

/// Render the family tree document.
pub fn render_family_tree(bundle: &FieldBundle) -> Result<Vec<u8>, PdfError> {
    let spec = get_spec(DocumentKind::FamilyTree);
    let mut builder = start_document(spec, bundle)?;
    let members = collect_members(bundle);

    {
        let tree = builder.page_mut(0)?;
        if members.is_empty() {
            tree.draw_text(
                "Brak danych (no family members provided)",
                50.0,
                400.0,
                10.0,
                FontFace::Regular,
                Color::DARK_GRAY,
            );
        }
        for (index, member) in members.iter().enumerate() {
            if let Some(origin) = card_origin(index) {
                draw_card(tree, member, origin);
            }
        }
    }
    if members.len() > MAX_CARDS {
        debug!(
            "family tree: {} members, {} listed on the inventory only",
            members.len(),
            members.len() - MAX_CARDS
        );
    }

    let mut y = INVENTORY_TOP;
    for member in &members {
        y = ensure_room(&mut builder, y, INVENTORY_BOTTOM, CONTINUATION_PAGE.size, CONTINUATION_TOP);
        let heading = format!("{} ({})", member.display_name(), member.relationship);
        builder
            .last_page_mut()?
            .fill_text_with(&heading, 50.0, y, 10.0, Some(495.0), FontFace::Bold, Color::BLACK);
        y -= 15.0;

        for record in member.records() {
            y = ensure_room(&mut builder, y, INVENTORY_BOTTOM, CONTINUATION_PAGE.size, CONTINUATION_TOP);
            builder
                .last_page_mut()?
                .fill_text(&format!("• {record}"), 60.0, y, 9.0, Some(485.0));
            y -= 12.0;
        }
        y -= 10.0;
    }

    draw_footers(spec, &mut builder)?;
    builder.finish()
}

/// Generator for the two-part family tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct FamilyTreeGenerator;

#[async_trait]
impl DocumentGenerator for FamilyTreeGenerator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::FamilyTree
    }

    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        let bytes = render_family_tree(bundle)?;
        Ok(GeneratedDocument::new(self.kind(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_follow_canonical_order() {
        let bundle = FieldBundle::new()
            .with("mother.firstName", "Anna")
            .with("applicant.firstName", "Jan")
            .with("motherGrandma.lastName", "Wiśniewska");
        let relationships: Vec<&str> = collect_members(&bundle).iter().map(|m| m.relationship).collect();
        assert_eq!(relationships, vec!["Applicant", "Mother", "Maternal grandmother"]);
    }

    #[test]
    fn test_maiden_name_is_appended() {
        let bundle = FieldBundle::new()
            .with("mother.firstName", "Anna")
            .with("mother.lastName", "Nowak")
            .with("mother.maidenName", "Kowalczyk");
        assert_eq!(collect_members(&bundle)[0].name, "Anna Nowak (Kowalczyk)");
    }

    #[test]
    fn test_records_skip_absent_facts() {
        let bundle = FieldBundle::new()
            .with("father.birthPlace", "Kraków")
            .with("father.emigrationDate", "1921");
        let member = &collect_members(&bundle)[0];
        assert_eq!(member.records(), vec!["Birth: in Kraków", "Emigration: 1921"]);
    }

    #[test]
    fn test_long_inventory_spills_onto_extra_pages() {
        let mut bundle = FieldBundle::new();
        for role in MEMBER_ROLES {
            for field in ["firstName", "birthDate", "birthPlace", "deathDate", "emigrationDate", "notes"] {
                bundle.insert(format!("{}.{field}", role.role), "x".repeat(20));
            }
        }
        let bytes = render_family_tree(&bundle).unwrap();
        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(document.get_pages().len() > 2);
    }
}
