use crate::config::AppConfig;
use crate::data::{builtin_quiz, flatten};
use crate::model::{FlattenedQuestion, QuestionId, Quiz};
use std::collections::HashMap;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod scoring;
pub mod view_models;

pub use scoring::score_topics;

/// Controlador del quiz: puntero a la pregunta actual y mapa id → opción elegida.
/// Todo lo demás (pregunta actual, puntuaciones, estilos) se deriva de aquí.
pub struct QuizApp {
    pub(crate) quiz: Quiz,
    pub(crate) all_questions: Vec<FlattenedQuestion>,
    pub(crate) current_question_index: usize,
    pub(crate) user_answers: HashMap<QuestionId, String>,
    pub config: AppConfig,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_quiz(builtin_quiz().clone())
    }

    /// Construye el controlador sobre un banco ya validado (al menos una pregunta).
    pub fn with_quiz(quiz: Quiz) -> Self {
        let all_questions = flatten(&quiz);
        log::debug!("Quiz iniciado con {} preguntas", all_questions.len());
        Self {
            quiz,
            all_questions,
            current_question_index: 0,
            user_answers: HashMap::new(),
            config: AppConfig::default(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
