use crate::types::assessment::{Answer, AssessmentResult, Selection};
use crate::types::question::QuestionBank;

/// Scores a selection against the bank. Unanswered questions count as
/// option 0 and out-of-range indices are clamped; this never fails.
pub fn score(bank: &QuestionBank, selection: &Selection) -> AssessmentResult {
    for id in selection.ids() {
        if bank.get(id).is_none() {
            tracing::warn!(question = id, "ignoring selection for unknown question");
        }
    }

    let answers: Vec<Answer> = bank
        .questions()
        .iter()
        .map(|question| {
            let raw = match selection.get(&question.id) {
                Some(raw) => raw,
                None => {
                    tracing::debug!(question = %question.id, "unanswered, defaulting to option 0");
                    0
                }
            };
            let index = question.clamp_index(raw);
            if index as i64 != raw {
                tracing::debug!(question = %question.id, raw, index, "clamped option index");
            }
            Answer {
                question_id: question.id.clone(),
                index,
                points: question.points_at(index),
                max_points: question.max_points(),
            }
        })
        .collect();

    let total_score = answers.iter().map(|answer| answer.points).sum();

    AssessmentResult {
        total_score,
        max_score: bank.max_score(),
        answers,
        selection: selection.clone(),
    }
}
