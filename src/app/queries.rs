use super::*;

pub(crate) fn find_question(
    questions: &[FlattenedQuestion],
    id: QuestionId,
) -> Option<&FlattenedQuestion> {
    questions.iter().find(|q| q.id() == id)
}

impl QuizApp {
    pub fn total_questions(&self) -> usize {
        self.all_questions.len()
    }

    /// Índice actual, siempre acotado a `[0, total - 1]`.
    pub fn current_index(&self) -> usize {
        self.current_question_index
            .min(self.total_questions().saturating_sub(1))
    }

    /// Número "humano" de la pregunta actual (1-based).
    pub fn current_question_number(&self) -> usize {
        self.current_index() + 1
    }

    pub fn current_question(&self) -> &FlattenedQuestion {
        &self.all_questions[self.current_index()]
    }

    pub fn all_questions(&self) -> &[FlattenedQuestion] {
        &self.all_questions
    }

    pub fn user_answers(&self) -> &HashMap<QuestionId, String> {
        &self.user_answers
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.user_answers
            .get(&self.current_question().id())
            .map(String::as_str)
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option().is_some()
    }

    pub fn is_first(&self) -> bool {
        self.current_index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index() + 1 >= self.total_questions()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_first()
    }

    pub fn can_go_next(&self) -> bool {
        self.is_answered() && !self.is_last()
    }

    pub fn active_topic_id(&self) -> &str {
        &self.current_question().topic_id
    }

    pub fn question_by_id(&self, id: QuestionId) -> Option<&FlattenedQuestion> {
        find_question(&self.all_questions, id)
    }

    /// Posición de la primera pregunta de un tema en la lista aplanada.
    pub fn first_index_of_topic(&self, topic_id: &str) -> Option<usize> {
        self.all_questions
            .iter()
            .position(|q| q.topic_id == topic_id)
    }
}
