// src/data.rs

use crate::model::{FlattenedQuestion, Question, QuestionId, Quiz, Topic};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const EMBEDDED_QUIZ: &str = include_str!("data/quiz_topics.yaml");

static BUILTIN_QUIZ: LazyLock<Quiz> = LazyLock::new(|| {
    let quiz = parse_quiz(EMBEDDED_QUIZ).expect("No se pudo cargar el banco de preguntas YAML");
    log::info!(
        "Banco de preguntas cargado: {} temas, {} preguntas",
        quiz.topics().len(),
        quiz.question_count()
    );
    quiz
});

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("error al parsear el YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el banco no tiene preguntas")]
    NoQuestions,
    #[error("id de tema duplicado: {0}")]
    DuplicateTopic(String),
    #[error("id de pregunta duplicado: {0}")]
    DuplicateQuestionId(QuestionId),
    #[error("la pregunta {id} tiene {count} opciones, hacen falta al menos 2")]
    TooFewOptions { id: QuestionId, count: usize },
    #[error("la respuesta de la pregunta {id} no está entre sus opciones: {answer}")]
    AnswerNotAnOption { id: QuestionId, answer: String },
}

/// Banco embebido, cargado una sola vez y de solo lectura durante toda la ejecución.
pub fn builtin_quiz() -> &'static Quiz {
    &BUILTIN_QUIZ
}

/// Parsea y valida un banco de preguntas en YAML.
pub fn parse_quiz(source: &str) -> Result<Quiz, DatasetError> {
    let topics: Vec<Topic> = serde_yaml::from_str(source)?;
    Quiz::new(topics)
}

pub(crate) fn validate(topics: &[Topic]) -> Result<(), DatasetError> {
    let mut topic_ids = HashSet::new();
    let mut question_ids = HashSet::new();

    for topic in topics {
        if !topic_ids.insert(topic.topic_id.as_str()) {
            return Err(DatasetError::DuplicateTopic(topic.topic_id.clone()));
        }
        if topic.questions.is_empty() {
            log::warn!("El tema '{}' no tiene preguntas", topic.topic_id);
        }
        for q in &topic.questions {
            if !question_ids.insert(q.id) {
                return Err(DatasetError::DuplicateQuestionId(q.id));
            }
            validate_question(q)?;
        }
    }

    if question_ids.is_empty() {
        return Err(DatasetError::NoQuestions);
    }
    Ok(())
}

fn validate_question(q: &Question) -> Result<(), DatasetError> {
    if q.options.len() < 2 {
        return Err(DatasetError::TooFewOptions {
            id: q.id,
            count: q.options.len(),
        });
    }
    if !q.options.contains(&q.answer) {
        return Err(DatasetError::AnswerNotAnOption {
            id: q.id,
            answer: q.answer.clone(),
        });
    }
    Ok(())
}

/// Aplana todas las preguntas respetando el orden de los temas.
pub fn flatten(quiz: &Quiz) -> Vec<FlattenedQuestion> {
    quiz.topics()
        .iter()
        .flat_map(|topic| {
            topic.questions.iter().map(move |q| FlattenedQuestion {
                question: q.clone(),
                topic_id: topic.topic_id.clone(),
                topic_name: topic.topic.clone(),
            })
        })
        .collect()
}
