use crate::types::question::QuestionId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Option index as received from the caller; may be out of range.
pub type OptionIndex = i64;

pub const HIGH_RISK_BELOW: u32 = 50;
pub const LOW_RISK_FROM: u32 = 80;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    choices: BTreeMap<QuestionId, OptionIndex>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<QuestionId>, index: OptionIndex) {
        self.choices.insert(id.into(), index);
    }

    pub fn get(&self, id: &str) -> Option<OptionIndex> {
        self.choices.get(id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, OptionIndex)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, OptionIndex)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (id, index) in iter {
            selection.select(id, index);
        }
        selection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    HighRisk,
    Moderate,
    LowRisk,
}

impl RiskTier {
    /// Lower bounds are inclusive: 50 is Moderate and 80 is LowRisk.
    pub fn classify(score: u32) -> Self {
        if score < HIGH_RISK_BELOW {
            Self::HighRisk
        } else if score < LOW_RISK_FROM {
            Self::Moderate
        } else {
            Self::LowRisk
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::HighRisk => "🔴",
            Self::Moderate => "🟡",
            Self::LowRisk => "🟢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryFlag {
    Critical,
    Warning,
    Clear,
}

impl EntryFlag {
    pub fn for_points(points: u32, max_points: u32) -> Self {
        if points == 0 {
            Self::Critical
        } else if points < max_points {
            Self::Warning
        } else {
            Self::Clear
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub index: usize,
    pub points: u32,
    pub max_points: u32,
}

impl Answer {
    pub fn flag(&self) -> EntryFlag {
        EntryFlag::for_points(self.points, self.max_points)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub max_score: u32,
    /// Resolved answers in question-bank order.
    pub answers: Vec<Answer>,
    pub selection: Selection,
}

impl AssessmentResult {
    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::classify(self.total_score)
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_score == 0 {
            return 0.0;
        }
        (self.total_score as f32 / self.max_score as f32).clamp(0.0, 1.0)
    }

    pub fn answer(&self, id: &str) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.question_id == id)
    }
}
