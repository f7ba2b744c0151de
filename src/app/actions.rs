use super::*;

impl QuizApp {
    /// Registra la opción elegida para la pregunta actual.
    /// La primera respuesta es definitiva: si ya hay una, no se sobrescribe.
    pub fn select_option(&mut self, option: &str) {
        let question = self.current_question();
        let id = question.id();

        if let Some(previous) = self.user_answers.get(&id) {
            log::debug!("Pregunta {id} ya respondida con '{previous}', se ignora '{option}'");
            return;
        }
        if !question.question.options.iter().any(|o| o == option) {
            log::warn!("'{option}' no es una opción de la pregunta {id}");
            return;
        }

        let correct = question.is_correct(option);
        log::info!(
            "Pregunta {id} respondida: '{option}' ({})",
            if correct { "correcta" } else { "incorrecta" }
        );
        self.user_answers.insert(id, option.to_owned());
    }

    /// Igual que [`QuizApp::select_option`] pero por posición (A = 0, B = 1…).
    pub fn select_option_at(&mut self, index: usize) {
        let option = self
            .current_question()
            .question
            .options
            .get(index)
            .cloned();
        if let Some(option) = option {
            self.select_option(&option);
        }
    }
}
