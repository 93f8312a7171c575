use super::Dashboard;
use crate::types::assessment::{EntryFlag, RiskTier};
use crate::types::language::ui_text;
use crate::types::question::{option_label, Question};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DashboardView<'a> {
    language: &'a str,
    total_score: u32,
    max_score: u32,
    risk_tier: RiskTier,
    risk_label: &'a str,
    answers: Vec<AnswerView<'a>>,
    contact_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ReportView<'a>>,
}

#[derive(Debug, Serialize)]
struct AnswerView<'a> {
    module: &'static str,
    id: &'a str,
    question: &'a str,
    option_index: usize,
    option: &'a str,
    points: u32,
    flag: EntryFlag,
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    path: &'a str,
    pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<&'a str>,
}

fn answers<'a>(
    dashboard: &'a Dashboard<'_>,
    module: &'static str,
    questions: &'a [Question],
) -> Vec<AnswerView<'a>> {
    questions
        .iter()
        .filter_map(|question| {
            let answer = dashboard.result.answer(&question.id)?;
            Some(AnswerView {
                module,
                id: &question.id,
                question: question.text(dashboard.language),
                option_index: answer.index,
                option: option_label(question, answer.index as i64, dashboard.language),
                points: answer.points,
                flag: answer.flag(),
            })
        })
        .collect()
}

pub fn to_json(dashboard: &Dashboard<'_>) -> Result<String, serde_json::Error> {
    let tier = dashboard.result.risk_tier();
    let mut all = answers(dashboard, "A", dashboard.bank.module_a());
    all.extend(answers(dashboard, "B", dashboard.bank.module_b()));

    let view = DashboardView {
        language: dashboard.language.code(),
        total_score: dashboard.result.total_score,
        max_score: dashboard.result.max_score,
        risk_tier: tier,
        risk_label: ui_text(dashboard.language).tier(tier).risk_label,
        answers: all,
        contact_email: dashboard.contact_email,
        report: dashboard.report.as_ref().map(|report| ReportView {
            path: &report.path,
            pages: report.pages,
            fallback: report.fallback.as_deref(),
        }),
    };
    serde_json::to_string_pretty(&view)
}
