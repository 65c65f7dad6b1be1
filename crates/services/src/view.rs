use capitals_core::QuizEngine;
use capitals_core::model::{Expansion, Question};

/// One row of the active-countries panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryStanding {
    pub country: String,
    pub points: u32,
    pub mastered: bool,
}

/// Countries that just joined the rotation, for a celebratory notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionNotice {
    pub added: Vec<String>,
    pub active_len: usize,
}

impl From<&Expansion> for ExpansionNotice {
    fn from(expansion: &Expansion) -> Self {
        Self {
            added: expansion
                .added
                .iter()
                .map(|r| r.country().to_owned())
                .collect(),
            active_len: expansion.active_len,
        }
    }
}

/// Presentation-agnostic snapshot of everything a quiz screen shows.
///
/// No pre-formatted strings beyond the question prompt; the UI decides
/// how to render points and notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub question: Question,
    pub is_answer_correct: bool,
    pub selected_answer: Option<String>,
    pub current_country_points: u32,
    /// Highest points first; ties ordered by country name.
    pub active_countries: Vec<CountryStanding>,
    pub mastered_count: usize,
    pub mastery_threshold: u32,
    pub expansion: Option<ExpansionNotice>,
}

impl QuizView {
    #[must_use]
    pub fn build(engine: &QuizEngine, expansion: Option<&ExpansionNotice>) -> Self {
        let threshold = engine.settings().mastery_threshold();
        let mut active_countries: Vec<CountryStanding> = engine
            .active_with_points()
            .into_iter()
            .map(|(record, points)| CountryStanding {
                country: record.country().to_owned(),
                points,
                mastered: points >= threshold,
            })
            .collect();
        active_countries.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.country.cmp(&b.country))
        });
        let mastered_count = active_countries.iter().filter(|c| c.mastered).count();

        Self {
            question: engine.question().clone(),
            is_answer_correct: engine.is_answer_correct(),
            selected_answer: engine.selected_answer().map(str::to_owned),
            current_country_points: engine.current_points(),
            active_countries,
            mastered_count,
            mastery_threshold: threshold,
            expansion: expansion.cloned(),
        }
    }
}
