use super::*;
use crate::view_models::{
    FINISH_LABEL, Feedback, NEXT_LABEL, NavButtons, OptionRow, OptionState, TopicRow,
    option_letter,
};

impl QuizApp {
    pub fn topic_rows(&self) -> Vec<TopicRow> {
        let active = self.active_topic_id();
        self.topic_scores()
            .into_iter()
            .map(|s| TopicRow {
                active: s.topic_id == active,
                topic_id: s.topic_id,
                name: s.topic_name,
                correct: s.correct,
                incorrect: s.incorrect,
            })
            .collect()
    }

    pub fn option_rows(&self) -> Vec<OptionRow> {
        let q = &self.current_question().question;
        let selected = self.selected_option();
        q.options
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRow {
                index,
                letter: option_letter(index),
                text: text.clone(),
                state: OptionState::derive(text, selected, &q.answer),
            })
            .collect()
    }

    /// Solo hay mensaje una vez respondida la pregunta actual.
    pub fn feedback(&self) -> Option<Feedback> {
        let selected = self.selected_option()?;
        Some(if self.current_question().is_correct(selected) {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        })
    }

    pub fn nav_buttons(&self) -> NavButtons {
        NavButtons {
            prev_enabled: self.can_go_previous(),
            next_enabled: self.can_go_next(),
            next_label: if self.is_last() { FINISH_LABEL } else { NEXT_LABEL },
        }
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.current_question_number(), self.total_questions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(app: &QuizApp) -> Vec<(String, OptionState)> {
        app.option_rows()
            .into_iter()
            .map(|r| (r.text, r.state))
            .collect()
    }

    #[test]
    fn answering_the_first_question_correctly() {
        let mut app = QuizApp::new();
        assert_eq!(app.progress_label(), "1/7");
        assert_eq!(app.feedback(), None);
        assert!(!app.nav_buttons().next_enabled);

        app.select_option("Building user interfaces");

        let react = &app.topic_rows()[0];
        assert_eq!((react.correct, react.incorrect), (1, 0));
        assert!(react.active);
        assert_eq!(app.feedback(), Some(Feedback::Correct));
        let nav = app.nav_buttons();
        assert!(nav.next_enabled);
        assert!(!nav.prev_enabled);
        assert_eq!(nav.next_label, NEXT_LABEL);

        app.go_next();
        assert_eq!(app.current_question().id(), 2);
        assert_eq!(app.progress_label(), "2/7");
    }

    #[test]
    fn wrong_answer_reveals_the_right_one() {
        let mut app = QuizApp::new();
        app.jump_to_topic("tailwind");
        app.select_option("Utility-first");
        app.go_next();
        app.select_option("flex");
        app.go_next();
        assert_eq!(app.current_question().id(), 5);
        app.select_option("hide");

        assert_eq!(
            states(&app),
            vec![
                ("hide".to_owned(), OptionState::IncorrectChosen),
                ("hidden".to_owned(), OptionState::CorrectRevealed),
                ("invisible".to_owned(), OptionState::Locked),
                ("display-none".to_owned(), OptionState::Locked),
            ]
        );
        assert_eq!(app.feedback(), Some(Feedback::Incorrect));
        assert!(app.option_rows().iter().all(|r| !r.state.is_interactive()));
    }

    #[test]
    fn wrong_answer_only_counts_as_incorrect() {
        let mut app = QuizApp::new();
        app.jump_to_topic("tailwind");
        app.select_option("Semantic");
        let tailwind = app
            .topic_rows()
            .into_iter()
            .find(|r| r.topic_id == "tailwind")
            .expect("tailwind row");
        assert_eq!((tailwind.correct, tailwind.incorrect), (0, 1));
    }

    #[test]
    fn last_question_shows_finish_and_stays_disabled() {
        let mut app = QuizApp::new();
        app.jump_to_topic("es6");
        app.select_option("let");
        app.go_next();
        assert_eq!(app.progress_label(), "7/7");

        let nav = app.nav_buttons();
        assert_eq!(nav.next_label, FINISH_LABEL);
        assert!(!nav.next_enabled);

        app.select_option("Copies array or object values");
        let nav = app.nav_buttons();
        assert_eq!(nav.next_label, FINISH_LABEL);
        assert!(!nav.next_enabled);
        assert!(nav.prev_enabled);
    }

    #[test]
    fn clicking_a_topic_before_answering_it() {
        let mut app = QuizApp::new();
        app.select_option("Building user interfaces");
        app.jump_to_topic("es6");

        assert_eq!(app.current_question().id(), 6);
        assert_eq!(app.selected_option(), None);
        assert!(states(&app).iter().all(|(_, s)| *s == OptionState::Selectable));

        let active: Vec<String> = app
            .topic_rows()
            .into_iter()
            .filter(|r| r.active)
            .map(|r| r.topic_id)
            .collect();
        assert_eq!(active, vec!["es6".to_owned()]);
    }

    #[test]
    fn option_rows_keep_dataset_order_and_letters() {
        let app = QuizApp::new();
        let labels: Vec<String> = app.option_rows().iter().map(OptionRow::label).collect();
        assert_eq!(
            labels,
            vec![
                "A: Server-side programming",
                "B: Building user interfaces",
                "C: Database management",
                "D: Data analysis",
            ]
        );
    }
}
