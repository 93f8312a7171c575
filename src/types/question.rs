use crate::error::{RecheckError, Result};
use crate::types::language::{Language, Localized};
use std::collections::HashSet;

pub const OPTION_COUNT: usize = 3;

pub type QuestionId = String;

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub text: Localized<String>,
    pub options: Localized<Vec<String>>,
    pub points: Vec<u32>,
}

impl Question {
    pub fn text(&self, language: Language) -> &str {
        self.text.get(language)
    }

    pub fn max_points(&self) -> u32 {
        self.points.iter().copied().max().unwrap_or(0)
    }

    /// Clamps a raw option index into the valid option range.
    pub fn clamp_index(&self, index: i64) -> usize {
        let last = self.points.len().saturating_sub(1) as i64;
        index.clamp(0, last.max(0)) as usize
    }

    pub fn points_at(&self, index: usize) -> u32 {
        self.points.get(index).copied().unwrap_or(0)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RecheckError::InvalidQuestionBank(
                "question id must not be empty".to_string(),
            ));
        }
        if self.points.len() != OPTION_COUNT {
            return Err(RecheckError::InvalidQuestionBank(format!(
                "{}: expected {} point values, found {}",
                self.id,
                OPTION_COUNT,
                self.points.len()
            )));
        }
        for language in Language::ALL {
            let options = self.options.get(language);
            if options.len() != OPTION_COUNT {
                return Err(RecheckError::InvalidQuestionBank(format!(
                    "{}: expected {} options for {}, found {}",
                    self.id,
                    OPTION_COUNT,
                    language,
                    options.len()
                )));
            }
            if self.text.get(language).trim().is_empty() {
                return Err(RecheckError::InvalidQuestionBank(format!(
                    "{}: missing text for {}",
                    self.id, language
                )));
            }
        }
        Ok(())
    }
}

/// Label of an option, with the index clamped the same way scoring does.
pub fn option_label(question: &Question, index: i64, language: Language) -> &str {
    let index = question.clamp_index(index);
    question
        .options
        .get(language)
        .get(index)
        .map(String::as_str)
        .unwrap_or("")
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    split: usize,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, split: usize) -> Self {
        Self { questions, split }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn module_a(&self) -> &[Question] {
        &self.questions[..self.split.min(self.questions.len())]
    }

    pub fn module_b(&self) -> &[Question] {
        &self.questions[self.split.min(self.questions.len())..]
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.split > self.questions.len() {
            return Err(RecheckError::InvalidQuestionBank(format!(
                "module split {} exceeds question count {}",
                self.split,
                self.questions.len()
            )));
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(RecheckError::InvalidQuestionBank(format!(
                    "duplicate question id: {}",
                    question.id
                )));
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{bank, question};
    use super::*;

    #[test]
    fn module_split_partitions_questions() {
        let bank = bank(10);
        assert_eq!(bank.module_a().len(), 5);
        assert_eq!(bank.module_b().len(), 5);
        assert_eq!(bank.module_b()[0].id, "Q5");
    }

    #[test]
    fn validate_rejects_wrong_option_count() {
        let mut broken = question("Q0");
        broken.options.zh_hant.pop();
        let err = QuestionBank::new(vec![broken], 0)
            .validate()
            .expect_err("short option list should be rejected");
        assert!(err.to_string().contains("zh-hant"));
    }

    #[test]
    fn validate_rejects_point_count_mismatch() {
        let mut broken = question("Q0");
        broken.points.push(20);
        assert!(QuestionBank::new(vec![broken], 1).validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let bank = QuestionBank::new(vec![question("Q0"), question("Q0")], 1);
        let err = bank.validate().expect_err("duplicates should be rejected");
        assert!(err.to_string().contains("duplicate question id"));
    }

    #[test]
    fn validate_rejects_split_beyond_list() {
        let bank = QuestionBank::new(vec![question("Q0")], 2);
        assert!(bank.validate().is_err());
    }

    #[test]
    fn option_label_clamps_index() {
        let q = question("Q0");
        assert_eq!(option_label(&q, -4, Language::English), "Low");
        assert_eq!(option_label(&q, 1, Language::English), "Mid");
        assert_eq!(option_label(&q, 9, Language::English), "High");
    }
}
