//! Page model of the document report.
//!
//! Coordinates are millimetres on A4 with the origin at the bottom-left
//! corner, matching what the PDF encoder expects. Layout runs top-down with a
//! descending cursor; entries are placed whole so none straddles a page break.

use super::fonts::FontResolution;
use crate::types::assessment::{AssessmentResult, EntryFlag, RiskTier};
use crate::types::language::{ui_text, UiText};
use crate::types::question::{option_label, Question, QuestionBank};
use chrono::NaiveDate;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const LEFT: f32 = 18.0;
const INDENT: f32 = 25.0;
const TITLE_Y: f32 = PAGE_HEIGHT - 28.0;
const NOTICE_Y: f32 = PAGE_HEIGHT - 35.0;
const RULE_Y: f32 = PAGE_HEIGHT - 42.0;
const BODY_TOP: f32 = PAGE_HEIGHT - 56.0;
const FOOTER_Y: f32 = 15.0;
/// Nothing in the body may be drawn below this line.
pub const BOTTOM_MARGIN: f32 = 30.0;

const ENTRY_HEIGHT: f32 = 13.0;
const ENTRY_DETAIL_OFFSET: f32 = 5.5;
const MODULE_HEADING_HEIGHT: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    Summary,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ink,
    Muted,
    Critical,
    Warning,
    Clear,
}

impl From<EntryFlag> for Tone {
    fn from(flag: EntryFlag) -> Self {
        match flag {
            EntryFlag::Critical => Tone::Critical,
            EntryFlag::Warning => Tone::Warning,
            EntryFlag::Clear => Tone::Clear,
        }
    }
}

impl From<RiskTier> for Tone {
    fn from(tier: RiskTier) -> Self {
        match tier {
            RiskTier::HighRisk => Tone::Critical,
            RiskTier::Moderate => Tone::Warning,
            RiskTier::LowRisk => Tone::Clear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Body,
    /// Part of the entry for the question at this bank position.
    Entry(usize),
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
    pub tone: Tone,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rule(Rule),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(run) => Some(run),
            Element::Rule(_) => None,
        })
    }

    #[cfg(test)]
    pub fn header(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|element| match element {
                Element::Text(run) => run.role == Role::Header,
                Element::Rule(_) => true,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
    pub resolution: FontResolution,
    pub title: String,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

struct PageBuilder {
    header: Vec<Element>,
    pages: Vec<Page>,
    cursor: f32,
}

impl PageBuilder {
    fn new(header: Vec<Element>) -> Self {
        let mut builder = Self {
            header,
            pages: Vec::new(),
            cursor: BODY_TOP,
        };
        builder.new_page();
        builder
    }

    fn new_page(&mut self) {
        self.pages.push(Page {
            elements: self.header.clone(),
        });
        self.cursor = BODY_TOP;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.cursor - height < BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn text(&mut self, x: f32, size: f32, text: impl Into<String>, tone: Tone, role: Role) {
        self.text_at(x, self.cursor, size, text, tone, role);
    }

    fn text_at(&mut self, x: f32, y: f32, size: f32, text: impl Into<String>, tone: Tone, role: Role) {
        self.push(Element::Text(TextRun {
            x,
            y,
            size,
            text: text.into(),
            tone,
            role,
        }));
    }

    fn advance(&mut self, height: f32) {
        self.cursor -= height;
    }
}

fn header(text: &UiText, resolution: &FontResolution) -> Vec<Element> {
    let mut elements = vec![Element::Text(TextRun {
        x: LEFT,
        y: TITLE_Y,
        size: 24.0,
        text: text.report_title.to_string(),
        tone: Tone::Ink,
        role: Role::Header,
    })];
    if resolution.fell_back() {
        elements.push(Element::Text(TextRun {
            x: LEFT,
            y: NOTICE_Y,
            size: 10.0,
            text: text.font_fallback_notice.to_string(),
            tone: Tone::Muted,
            role: Role::Header,
        }));
    }
    elements.push(Element::Rule(Rule {
        x1: LEFT,
        x2: PAGE_WIDTH - LEFT,
        y: RULE_Y,
    }));
    elements
}

/// Lays out the report. All strings come from the resolved render language.
pub fn render(
    bank: &QuestionBank,
    result: &AssessmentResult,
    resolution: &FontResolution,
    detail: DetailLevel,
    generated_on: NaiveDate,
) -> Document {
    let text = ui_text(resolution.render);
    let tier = result.risk_tier();
    let mut builder = PageBuilder::new(header(text, resolution));

    builder.text(
        LEFT,
        18.0,
        format!(
            "{}: {} / {}",
            text.report_score_label, result.total_score, result.max_score
        ),
        Tone::Ink,
        Role::Body,
    );
    builder.advance(10.0);
    builder.text(
        LEFT,
        18.0,
        format!("{}: {}", text.report_risk_label, text.tier(tier).report_risk),
        tier.into(),
        Role::Body,
    );
    builder.advance(16.0);
    builder.text(LEFT, 12.0, text.recommendations_heading, Tone::Ink, Role::Body);
    builder.advance(7.0);
    builder.text(
        INDENT,
        12.0,
        text.tier(tier).recommendation,
        tier.into(),
        Role::Body,
    );
    builder.advance(14.0);

    if detail == DetailLevel::Detailed {
        builder.ensure_room(9.0 + MODULE_HEADING_HEIGHT + ENTRY_HEIGHT);
        builder.text(LEFT, 14.0, text.breakdown_heading, Tone::Ink, Role::Body);
        builder.advance(9.0);

        let modules = [
            (text.module_a, bank.module_a(), 0),
            (text.module_b, bank.module_b(), bank.module_a().len()),
        ];
        for (heading, questions, offset) in modules {
            if questions.is_empty() {
                continue;
            }
            builder.ensure_room(MODULE_HEADING_HEIGHT + ENTRY_HEIGHT);
            builder.text(LEFT, 12.0, heading, Tone::Ink, Role::Body);
            builder.advance(MODULE_HEADING_HEIGHT);

            for (position, question) in questions.iter().enumerate() {
                draw_entry(&mut builder, text, resolution, result, question, offset + position);
            }
        }
    }

    let mut pages = builder.pages;
    let total = pages.len();
    for (number, page) in pages.iter_mut().enumerate() {
        page.elements.push(Element::Text(TextRun {
            x: LEFT,
            y: FOOTER_Y,
            size: 10.0,
            text: text.footer.to_string(),
            tone: Tone::Muted,
            role: Role::Footer,
        }));
        page.elements.push(Element::Text(TextRun {
            x: PAGE_WIDTH - LEFT - 42.0,
            y: FOOTER_Y - 5.0,
            size: 8.0,
            text: format!(
                "{} | {} {}/{}",
                generated_on.format("%Y-%m-%d"),
                text.page_label,
                number + 1,
                total
            ),
            tone: Tone::Muted,
            role: Role::Footer,
        }));
    }

    Document {
        pages,
        resolution: resolution.clone(),
        title: text.report_title.to_string(),
    }
}

fn draw_entry(
    builder: &mut PageBuilder,
    text: &UiText,
    resolution: &FontResolution,
    result: &AssessmentResult,
    question: &Question,
    position: usize,
) {
    let Some(answer) = result.answer(&question.id) else {
        return;
    };
    builder.ensure_room(ENTRY_HEIGHT);
    let role = Role::Entry(position);
    builder.text(
        INDENT,
        11.0,
        format!("{}  {}", question.id, question.text(resolution.render)),
        Tone::Ink,
        role,
    );
    let detail_y = builder.cursor - ENTRY_DETAIL_OFFSET;
    builder.text_at(
        INDENT + 4.0,
        detail_y,
        10.0,
        format!(
            "{}: {} | {} {}",
            text.selected_label,
            option_label(question, answer.index as i64, resolution.render),
            answer.points,
            text.points_label
        ),
        answer.flag().into(),
        role,
    );
    builder.advance(ENTRY_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::reference_bank;
    use crate::report::pdf::fonts::{FallbackReason, ReportFace};
    use crate::scoring::score;
    use crate::types::assessment::Selection;
    use crate::types::language::Language;
    use crate::types::question::fixtures;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
    }

    fn all_text(document: &Document) -> Vec<String> {
        document
            .pages
            .iter()
            .flat_map(|page| page.texts().map(|run| run.text.clone()))
            .collect()
    }

    fn fallback(requested: Language) -> FontResolution {
        FontResolution {
            requested,
            render: Language::English,
            face: ReportFace::Builtin,
            fallback: Some(FallbackReason::Missing(PathBuf::from("font_sc.ttf"))),
        }
    }

    #[test]
    fn summary_report_fits_one_page() {
        let bank = reference_bank();
        let result = score(&bank, &Selection::new());
        let document = render(
            &bank,
            &result,
            &FontResolution::base(Language::English),
            DetailLevel::Summary,
            date(),
        );

        assert_eq!(document.page_count(), 1);
        let text = all_text(&document);
        assert!(text.contains(&"Actuarial Governance Re-Check".to_string()));
        assert!(text.contains(&"Total Score: 0 / 100".to_string()));
        assert!(text.contains(&"Risk Level: HIGH RISK".to_string()));
        assert!(text.contains(&"- Critical: Immediate independent review required.".to_string()));
        assert!(!text.iter().any(|line| line.starts_with("DQ1")));
    }

    #[test]
    fn fallback_uses_base_labels_and_notice() {
        let bank = reference_bank();
        let result = score(&bank, &Selection::new());
        let document = render(
            &bank,
            &result,
            &fallback(Language::SimplifiedChinese),
            DetailLevel::Detailed,
            date(),
        );

        let text = all_text(&document);
        assert!(text.contains(&"(Font file missing, displaying in English mode)".to_string()));
        assert!(text.contains(&"DQ1  Data Automation Level".to_string()));
        assert!(text.iter().all(|line| line.is_ascii()));
        assert_eq!(document.resolution.requested, Language::SimplifiedChinese);
    }

    #[test]
    fn loaded_font_renders_requested_language() {
        let bank = reference_bank();
        let result = score(&bank, &Selection::new());
        let resolution = FontResolution {
            requested: Language::TraditionalChinese,
            render: Language::TraditionalChinese,
            face: ReportFace::Embedded {
                name: "TC".to_string(),
                bytes: Vec::new(),
            },
            fallback: None,
        };
        let document = render(&bank, &result, &resolution, DetailLevel::Summary, date());
        let text = all_text(&document);
        assert!(text.contains(&"再保險精算合規體檢報告".to_string()));
        assert!(!text.iter().any(|line| line.contains("Font file missing")));
    }

    #[test]
    fn detailed_entries_are_toned_by_points() {
        let bank = reference_bank();
        let selection: Selection = [("DQ1", 0), ("DQ2", 1), ("DQ3", 2)].into_iter().collect();
        let result = score(&bank, &selection);
        let document = render(
            &bank,
            &result,
            &FontResolution::base(Language::English),
            DetailLevel::Detailed,
            date(),
        );

        let tones: HashMap<usize, Tone> = document
            .pages
            .iter()
            .flat_map(|page| page.texts())
            .filter_map(|run| match run.role {
                Role::Entry(position) if run.tone != Tone::Ink => Some((position, run.tone)),
                _ => None,
            })
            .collect();
        assert_eq!(tones.get(&0), Some(&Tone::Critical));
        assert_eq!(tones.get(&1), Some(&Tone::Warning));
        assert_eq!(tones.get(&2), Some(&Tone::Clear));

        let text = all_text(&document);
        assert!(text.contains(&"Selected: Manual | 0 pts".to_string()));
        assert!(text.contains(&"Selected: Reactive | 5 pts".to_string()));
        assert!(text.contains(&"Selected: Documented | 10 pts".to_string()));
        assert!(text.contains(&"Module B: Reserving & Governance".to_string()));
    }

    #[test]
    fn long_detailed_report_paginates_without_splitting_entries() {
        let bank = fixtures::bank(60);
        let result = score(&bank, &Selection::new());
        let document = render(
            &bank,
            &result,
            &FontResolution::base(Language::English),
            DetailLevel::Detailed,
            date(),
        );

        assert!(document.page_count() > 1);

        let first_header = document.pages[0].header();
        let mut entry_pages: HashMap<usize, Vec<usize>> = HashMap::new();
        for (page_index, page) in document.pages.iter().enumerate() {
            assert_eq!(page.header(), first_header, "header differs on page {page_index}");
            for run in page.texts() {
                if run.role != Role::Footer {
                    assert!(run.y >= BOTTOM_MARGIN - ENTRY_DETAIL_OFFSET);
                }
                if let Role::Entry(position) = run.role {
                    entry_pages.entry(position).or_default().push(page_index);
                }
            }
        }

        assert_eq!(entry_pages.len(), 60);
        for (position, pages) in entry_pages {
            assert_eq!(pages.len(), 2, "entry {position} should have two lines");
            assert_eq!(pages[0], pages[1], "entry {position} was split across pages");
        }
    }

    #[test]
    fn every_page_carries_footer_with_page_number() {
        let bank = fixtures::bank(60);
        let result = score(&bank, &Selection::new());
        let document = render(
            &bank,
            &result,
            &FontResolution::base(Language::English),
            DetailLevel::Detailed,
            date(),
        );
        let total = document.page_count();
        for (index, page) in document.pages.iter().enumerate() {
            let expected = format!("2026-10-14 | Page {}/{}", index + 1, total);
            assert!(page.texts().any(|run| run.role == Role::Footer && run.text == expected));
        }
    }
}
