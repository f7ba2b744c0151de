use serde::{Deserialize, Serialize};

pub type QuestionId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId, // único entre todos los temas
    pub text: String,
    pub options: Vec<String>,
    pub answer: String, // siempre uno de `options`
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub topic_id: String,
    pub topic: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Banco de preguntas ya validado. Solo se construye con [`crate::data::parse_quiz`]
/// o [`Quiz::new`], así que ids únicos y respuestas válidas están garantizados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    topics: Vec<Topic>,
}

impl Quiz {
    pub fn new(topics: Vec<Topic>) -> Result<Self, crate::data::DatasetError> {
        crate::data::validate(&topics)?;
        Ok(Self { topics })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }
}

/// Pregunta etiquetada con su tema, tal y como aparece en la lista aplanada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedQuestion {
    pub question: Question,
    pub topic_id: String,
    pub topic_name: String,
}

impl FlattenedQuestion {
    pub fn id(&self) -> QuestionId {
        self.question.id
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.question.answer == option
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicScore {
    pub topic_id: String,
    pub topic_name: String,
    pub correct: u32,
    pub incorrect: u32,
}
