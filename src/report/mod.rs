pub mod json;
pub mod md;
pub mod pdf;

use crate::branding::Branding;
use crate::error::RecheckError;
use crate::types::assessment::AssessmentResult;
use crate::types::language::Language;
use crate::types::question::QuestionBank;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Where the document report went, if one was produced.
#[derive(Debug, Clone)]
pub struct DeliveredReport {
    pub path: String,
    pub pages: usize,
    pub fallback: Option<String>,
}

/// Everything the on-screen dashboard shows for one assessment.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub bank: &'a QuestionBank,
    pub result: &'a AssessmentResult,
    pub language: Language,
    pub branding: &'a Branding,
    pub contact_email: &'a str,
    pub report: Option<DeliveredReport>,
}

pub fn render(dashboard: &Dashboard<'_>, format: OutputFormat) -> Result<String, RecheckError> {
    match format {
        OutputFormat::Json => json::to_json(dashboard).map_err(RecheckError::Json),
        OutputFormat::Md => Ok(md::to_markdown(dashboard)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::bank::reference_bank;
    use crate::scoring::score;
    use crate::types::assessment::Selection;

    pub fn scored(indices: &[(&str, i64)]) -> (QuestionBank, AssessmentResult) {
        let bank = reference_bank();
        let selection: Selection = indices.iter().copied().collect();
        let result = score(&bank, &selection);
        (bank, result)
    }
}
