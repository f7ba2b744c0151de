use super::*;

impl QuizApp {
    /// Avanza una pregunta. Solo si la actual está respondida y no es la última.
    pub fn go_next(&mut self) {
        if !self.is_answered() {
            log::debug!(
                "Siguiente ignorado: pregunta {} sin responder",
                self.current_question().id()
            );
            return;
        }
        if self.is_last() {
            log::debug!("Siguiente ignorado: ya estamos en la última pregunta");
            return;
        }
        self.current_question_index = self.current_index() + 1;
    }

    /// Retrocede una pregunta. Las respuestas guardadas no se tocan.
    pub fn go_previous(&mut self) {
        if self.is_first() {
            log::debug!("Anterior ignorado: ya estamos en la primera pregunta");
            return;
        }
        self.current_question_index = self.current_index() - 1;
    }

    /// Salta a la primera pregunta del tema. Tema desconocido o vacío: no hace nada.
    pub fn jump_to_topic(&mut self, topic_id: &str) {
        match self.first_index_of_topic(topic_id) {
            Some(idx) => {
                log::debug!("Saltando al tema '{topic_id}' (pregunta {})", idx + 1);
                self.current_question_index = idx;
            }
            None => log::debug!("Tema '{topic_id}' sin preguntas o desconocido"),
        }
    }
}
