//! PDF world report
//!
//! Report generation is split in two: a pure planner that lays text out onto
//! pages with a running vertical cursor, and a thin renderer that turns the
//! plan into PDF bytes. All pagination decisions live in the planner so they
//! can be tested without touching the PDF backend.
//!
//! Page layout: A4 portrait, 15 mm margins, a centered title followed by a
//! Characters section and a Locations section. A page break is inserted
//! whenever the next block would overflow the bottom margin.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use lorecrafter_domain::{Character, Description, Location};

use crate::application::ServiceError;

pub const REPORT_TITLE: &str = "LoreCrafter World Export";
pub const REPORT_FILE_NAME: &str = "lorecrafter-world.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const WRAP_WIDTH_MM: f32 = 180.0;

const TITLE_SIZE_PT: f32 = 22.0;
const SECTION_SIZE_PT: f32 = 18.0;
const NAME_SIZE_PT: f32 = 14.0;
const BODY_SIZE_PT: f32 = 12.0;

const TITLE_ADVANCE_MM: f32 = 15.0;
const SECTION_ADVANCE_MM: f32 = 8.0;
const NAME_ADVANCE_MM: f32 = 6.0;
const BODY_LINE_MM: f32 = 5.0;
const ENTITY_GAP_MM: f32 = 10.0;
const SECTION_GAP_MM: f32 = 5.0;

// Reserve estimates used before starting a block, so a heading is never
// orphaned at the bottom of a page
const SECTION_RESERVE_MM: f32 = 20.0;
const CHARACTER_RESERVE_MM: f32 = 40.0;
const LOCATION_RESERVE_MM: f32 = 30.0;

/// One positioned piece of text; `y_mm` runs from the page top
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub size_pt: f32,
    pub bold: bool,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// Pages of positioned lines, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub pages: Vec<Vec<ReportLine>>,
}

/// Average glyph width estimate for the report face, in mm
///
/// Good enough for wrapping and centering; the renderer never re-measures.
fn char_width_mm(size_pt: f32) -> f32 {
    size_pt * 0.3528 * 0.5
}

/// Greedy word wrap against the wrap width; oversized words are hard-split
fn wrap_text(text: &str, size_pt: f32) -> Vec<String> {
    let max_chars = (WRAP_WIDTH_MM / char_width_mm(size_pt)).floor().max(1.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split words longer than a full line
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let (head, tail) = word.split_at(split_at);
            lines.push(head.to_string());
            word = tail;
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn field_or_na(description: &Description) -> &str {
    if description.is_empty() {
        "N/A"
    } else {
        description.as_str()
    }
}

struct ReportCursor {
    pages: Vec<Vec<ReportLine>>,
    y: f32,
}

impl ReportCursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: MARGIN_MM,
        }
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y + needed_mm > PAGE_HEIGHT_MM - MARGIN_MM {
            self.pages.push(Vec::new());
            self.y = MARGIN_MM;
        }
    }

    fn text(&mut self, text: impl Into<String>, size_pt: f32, bold: bool, x_mm: f32) {
        let line = ReportLine {
            text: text.into(),
            size_pt,
            bold,
            x_mm,
            y_mm: self.y,
        };
        // pages is never empty by construction
        if let Some(page) = self.pages.last_mut() {
            page.push(line);
        }
    }

    fn centered_text(&mut self, text: &str, size_pt: f32, bold: bool) {
        let width = text.chars().count() as f32 * char_width_mm(size_pt);
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_MM);
        self.text(text, size_pt, bold, x);
    }

    fn body_paragraph(&mut self, text: &str) {
        for line in wrap_text(text, BODY_SIZE_PT) {
            self.ensure_room(BODY_LINE_MM);
            self.text(line, BODY_SIZE_PT, false, MARGIN_MM);
            self.y += BODY_LINE_MM;
        }
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }
}

/// Lay out the full world report
pub fn plan_world_report(characters: &[Character], locations: &[Location]) -> ReportPlan {
    let mut cursor = ReportCursor::new();

    cursor.centered_text(REPORT_TITLE, TITLE_SIZE_PT, true);
    cursor.advance(TITLE_ADVANCE_MM);

    if !characters.is_empty() {
        cursor.ensure_room(SECTION_RESERVE_MM);
        cursor.text("Characters", SECTION_SIZE_PT, true, MARGIN_MM);
        cursor.advance(SECTION_ADVANCE_MM);

        for character in characters {
            cursor.ensure_room(CHARACTER_RESERVE_MM);
            cursor.text(character.name().as_str(), NAME_SIZE_PT, true, MARGIN_MM);
            cursor.advance(NAME_ADVANCE_MM);

            cursor.body_paragraph(&format!("Role: {}", field_or_na(character.role())));
            cursor.body_paragraph(&format!(
                "Physical: {}",
                field_or_na(character.physical_description())
            ));
            cursor.body_paragraph(&format!(
                "Personality: {}",
                field_or_na(character.personality_traits())
            ));
            cursor.body_paragraph(&format!("Backstory: {}", field_or_na(character.backstory())));
            cursor.advance(ENTITY_GAP_MM);
        }
    }

    if !locations.is_empty() {
        cursor.ensure_room(SECTION_RESERVE_MM);
        cursor.advance(SECTION_GAP_MM);
        cursor.text("Locations", SECTION_SIZE_PT, true, MARGIN_MM);
        cursor.advance(SECTION_ADVANCE_MM);

        for location in locations {
            cursor.ensure_room(LOCATION_RESERVE_MM);
            cursor.text(location.name().as_str(), NAME_SIZE_PT, true, MARGIN_MM);
            cursor.advance(NAME_ADVANCE_MM);

            let description = if location.description().is_empty() {
                "No description provided."
            } else {
                location.description().as_str()
            };
            cursor.body_paragraph(description);
            cursor.advance(ENTITY_GAP_MM);
        }
    }

    ReportPlan {
        pages: cursor.pages,
    }
}

/// Render a plan into PDF bytes
pub fn render_pdf(plan: &ReportPlan) -> Result<Vec<u8>, ServiceError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
    let regular = doc
        .add_builtin_font(BuiltinFont::TimesRoman)
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::TimesBold)
        .map_err(|e| ServiceError::Export(e.to_string()))?;

    for (index, page) in plan.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in page {
            let font = if line.bold { &bold } else { &regular };
            // Plan coordinates run from the top, PDF space from the bottom
            layer.use_text(
                line.text.clone(),
                line.size_pt,
                Mm(line.x_mm),
                Mm(PAGE_HEIGHT_MM - line.y_mm),
                font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ServiceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorecrafter_domain::{
        Character, CharacterId, CharacterName, Description, Location, LocationId, LocationName,
    };

    fn create_test_character(id: &str, name: &str) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new(name).unwrap(),
        )
    }

    fn create_test_location(id: &str, name: &str) -> Location {
        Location::new(
            LocationId::new(id).unwrap(),
            LocationName::new(name).unwrap(),
        )
    }

    fn all_lines(plan: &ReportPlan) -> Vec<&ReportLine> {
        plan.pages.iter().flatten().collect()
    }

    mod wrapping {
        use super::*;

        #[test]
        fn short_text_stays_on_one_line() {
            assert_eq!(wrap_text("hello world", BODY_SIZE_PT), vec!["hello world"]);
        }

        #[test]
        fn long_text_wraps_within_the_limit() {
            let max_chars = (WRAP_WIDTH_MM / char_width_mm(BODY_SIZE_PT)).floor() as usize;
            let text = "word ".repeat(60);
            let lines = wrap_text(&text, BODY_SIZE_PT);
            assert!(lines.len() > 1);
            for line in &lines {
                assert!(line.chars().count() <= max_chars);
            }
        }

        #[test]
        fn oversized_word_is_hard_split() {
            let max_chars = (WRAP_WIDTH_MM / char_width_mm(BODY_SIZE_PT)).floor() as usize;
            let text = "x".repeat(max_chars * 2 + 10);
            let lines = wrap_text(&text, BODY_SIZE_PT);
            assert_eq!(lines.len(), 3);
            for line in &lines {
                assert!(line.chars().count() <= max_chars);
            }
        }

        #[test]
        fn empty_text_produces_one_empty_line() {
            assert_eq!(wrap_text("", BODY_SIZE_PT), vec![String::new()]);
        }
    }

    mod planning {
        use super::*;

        #[test]
        fn empty_world_is_title_only() {
            let plan = plan_world_report(&[], &[]);
            assert_eq!(plan.pages.len(), 1);
            assert_eq!(plan.pages[0].len(), 1);
            assert_eq!(plan.pages[0][0].text, REPORT_TITLE);
            assert!(plan.pages[0][0].bold);
            assert!(plan.pages[0][0].x_mm > MARGIN_MM);
        }

        #[test]
        fn character_fields_use_na_fallback() {
            let characters = vec![create_test_character("c1", "Mira")];
            let plan = plan_world_report(&characters, &[]);
            let texts: Vec<&str> = all_lines(&plan).iter().map(|l| l.text.as_str()).collect();

            assert!(texts.contains(&"Characters"));
            assert!(texts.contains(&"Mira"));
            assert!(texts.contains(&"Role: N/A"));
            assert!(texts.contains(&"Backstory: N/A"));
        }

        #[test]
        fn location_without_description_gets_placeholder() {
            let locations = vec![create_test_location("l1", "Harbor")];
            let plan = plan_world_report(&[], &locations);
            let texts: Vec<&str> = all_lines(&plan).iter().map(|l| l.text.as_str()).collect();

            assert!(texts.contains(&"Locations"));
            assert!(texts.contains(&"Harbor"));
            assert!(texts.contains(&"No description provided."));
        }

        #[test]
        fn sections_are_skipped_when_empty() {
            let locations = vec![create_test_location("l1", "Harbor")];
            let plan = plan_world_report(&[], &locations);
            let texts: Vec<&str> = all_lines(&plan).iter().map(|l| l.text.as_str()).collect();
            assert!(!texts.contains(&"Characters"));
        }

        #[test]
        fn long_backstory_wraps_into_body_lines() {
            let backstory = "chapter ".repeat(100);
            let characters = vec![create_test_character("c1", "Mira")
                .with_backstory(Description::new(backstory.trim()).unwrap())];
            let plan = plan_world_report(&characters, &[]);

            let body_lines = all_lines(&plan)
                .iter()
                .filter(|l| l.size_pt == BODY_SIZE_PT)
                .count();
            assert!(body_lines > 5);
        }

        #[test]
        fn many_characters_paginate() {
            let characters: Vec<Character> = (0..40)
                .map(|i| create_test_character(&format!("c{}", i), &format!("Character {}", i)))
                .collect();
            let plan = plan_world_report(&characters, &[]);
            assert!(plan.pages.len() > 1);
        }

        #[test]
        fn every_line_lands_inside_the_margins() {
            let characters: Vec<Character> = (0..40)
                .map(|i| {
                    create_test_character(&format!("c{}", i), &format!("Character {}", i))
                        .with_backstory(Description::new("story ".repeat(40).trim()).unwrap())
                })
                .collect();
            let locations: Vec<Location> = (0..10)
                .map(|i| create_test_location(&format!("l{}", i), &format!("Place {}", i)))
                .collect();
            let plan = plan_world_report(&characters, &locations);

            for line in all_lines(&plan) {
                assert!(line.y_mm >= MARGIN_MM);
                assert!(line.y_mm <= PAGE_HEIGHT_MM - MARGIN_MM);
                assert!(line.x_mm >= MARGIN_MM);
            }
        }

        #[test]
        fn characters_section_precedes_locations() {
            let characters = vec![create_test_character("c1", "Mira")];
            let locations = vec![create_test_location("l1", "Harbor")];
            let plan = plan_world_report(&characters, &locations);
            let texts: Vec<&str> = all_lines(&plan).iter().map(|l| l.text.as_str()).collect();

            let chars_at = texts.iter().position(|t| *t == "Characters").unwrap();
            let locs_at = texts.iter().position(|t| *t == "Locations").unwrap();
            assert!(chars_at < locs_at);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn renders_non_empty_bytes() {
            let plan = plan_world_report(&[create_test_character("c1", "Mira")], &[]);
            let bytes = render_pdf(&plan).unwrap();
            assert!(!bytes.is_empty());
            assert_eq!(&bytes[..5], b"%PDF-");
        }
    }
}
