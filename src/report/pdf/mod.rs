pub mod encode;
pub mod fonts;
pub mod layout;

use crate::error::Result;
use crate::types::assessment::AssessmentResult;
use crate::types::language::Language;
use crate::types::question::QuestionBank;
use chrono::NaiveDate;
use fonts::{FontResolution, FontResources};
use layout::DetailLevel;

pub const MIME_TYPE: &str = "application/pdf";

/// A finished report ready for delivery. Writing it anywhere is the caller's job.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub resolution: FontResolution,
    pub pages: usize,
}

impl ReportFile {
    pub fn file_name_for(score: u32) -> String {
        format!("Report_{score}.pdf")
    }

    pub fn build(
        bank: &QuestionBank,
        result: &AssessmentResult,
        language: Language,
        detail: DetailLevel,
        fonts: &FontResources,
        generated_on: NaiveDate,
    ) -> Result<Self> {
        let resolution = fonts::resolve(language, fonts);
        let document = layout::render(bank, result, &resolution, detail, generated_on);
        let bytes = encode::encode(&document)?;
        Ok(Self {
            file_name: Self::file_name_for(result.total_score),
            mime: MIME_TYPE,
            bytes,
            pages: document.page_count(),
            resolution: document.resolution,
        })
    }
}
