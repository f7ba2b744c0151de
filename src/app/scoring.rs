use super::*;
use super::queries::find_question;
use crate::model::{Topic, TopicScore};

/// Puntuación por tema a partir del mapa de respuestas.
///
/// Solo cuenta lo que hay en `answers`: las preguntas sin responder no suman
/// en ningún lado, y un id que no corresponde a ninguna pregunta se ignora.
pub fn score_topics(
    topics: &[Topic],
    questions: &[FlattenedQuestion],
    answers: &HashMap<QuestionId, String>,
) -> Vec<TopicScore> {
    let mut tallies: HashMap<&str, (u32, u32)> = topics
        .iter()
        .map(|t| (t.topic_id.as_str(), (0, 0)))
        .collect();

    for (id, answer) in answers {
        let Some(q) = find_question(questions, *id) else {
            log::debug!("Respuesta para la pregunta desconocida {id}, se ignora");
            continue;
        };
        if let Some((correct, incorrect)) = tallies.get_mut(q.topic_id.as_str()) {
            if q.is_correct(answer) {
                *correct += 1;
            } else {
                *incorrect += 1;
            }
        }
    }

    topics
        .iter()
        .map(|t| {
            let (correct, incorrect) = tallies
                .get(t.topic_id.as_str())
                .copied()
                .unwrap_or_default();
            TopicScore {
                topic_id: t.topic_id.clone(),
                topic_name: t.topic.clone(),
                correct,
                incorrect,
            }
        })
        .collect()
}

impl QuizApp {
    /// Se recalcula en cada llamada; no hay caché que invalidar.
    pub fn topic_scores(&self) -> Vec<TopicScore> {
        score_topics(self.quiz.topics(), &self.all_questions, &self.user_answers)
    }

    pub fn topic_score(&self, topic_id: &str) -> Option<TopicScore> {
        self.topic_scores()
            .into_iter()
            .find(|s| s.topic_id == topic_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(app: &QuizApp) -> Vec<(u32, u32)> {
        app.topic_scores()
            .iter()
            .map(|s| (s.correct, s.incorrect))
            .collect()
    }

    #[test]
    fn nothing_answered_scores_zero_everywhere() {
        let app = QuizApp::new();
        assert_eq!(counts(&app), vec![(0, 0), (0, 0), (0, 0)]);
    }

    #[test]
    fn correct_answer_counts_for_its_topic_only() {
        let mut app = QuizApp::new();
        app.select_option("Building user interfaces");
        assert_eq!(counts(&app), vec![(1, 0), (0, 0), (0, 0)]);
    }

    #[test]
    fn mixed_answers_are_tallied_per_topic() {
        let mut app = QuizApp::new();
        app.select_option("Building user interfaces");
        app.go_next();
        app.select_option("useContext()");
        app.go_next();
        app.select_option("Utility-first");
        app.jump_to_topic("es6");
        app.select_option("var");
        assert_eq!(counts(&app), vec![(1, 1), (1, 0), (0, 1)]);
    }

    #[test]
    fn replaying_the_same_answers_gives_the_same_scores() {
        let mut app = QuizApp::new();
        app.select_option("Server-side programming");
        app.jump_to_topic("tailwind");
        app.select_option("Utility-first");
        app.go_next();
        app.select_option("flexbox");
        let before = app.topic_scores();

        let replayed: HashMap<QuestionId, String> = app
            .user_answers()
            .iter()
            .map(|(id, a)| (*id, a.clone()))
            .collect();
        let after = score_topics(app.quiz().topics(), app.all_questions(), &replayed);
        assert_eq!(before, after);

        let cleared = score_topics(app.quiz().topics(), app.all_questions(), &HashMap::new());
        assert!(cleared.iter().all(|s| s.correct == 0 && s.incorrect == 0));
    }

    #[test]
    fn stale_ids_are_skipped_without_affecting_other_topics() {
        let app = QuizApp::new();
        let mut answers = HashMap::new();
        answers.insert(99, "whatever".to_owned());
        answers.insert(6, "let".to_owned());
        let scores = score_topics(app.quiz().topics(), app.all_questions(), &answers);
        let es6 = scores.iter().find(|s| s.topic_id == "es6").expect("es6 topic");
        assert_eq!((es6.correct, es6.incorrect), (1, 0));
        let total: u32 = scores.iter().map(|s| s.correct + s.incorrect).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn topic_score_lookup() {
        let mut app = QuizApp::new();
        app.jump_to_topic("tailwind");
        app.select_option("Component-based");
        let score = app.topic_score("tailwind").expect("tailwind score");
        assert_eq!((score.correct, score.incorrect), (0, 1));
        assert_eq!(score.topic_name, "Tailwind CSS");
        assert!(app.topic_score("rust").is_none());
    }
}
