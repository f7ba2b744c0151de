// src/view_models.rs

/// Estado visual de una opción, función pura de la opción elegida y la respuesta correcta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Selectable,      // pregunta sin responder
    CorrectChosen,   // elegida y correcta
    IncorrectChosen, // elegida e incorrecta
    CorrectRevealed, // no elegida, pero es la correcta
    Locked,          // ni elegida ni correcta
}

impl OptionState {
    pub fn derive(option: &str, selected: Option<&str>, answer: &str) -> Self {
        let Some(selected) = selected else {
            return OptionState::Selectable;
        };
        match (option == answer, option == selected) {
            (true, true) => OptionState::CorrectChosen,
            (false, true) => OptionState::IncorrectChosen,
            (true, false) => OptionState::CorrectRevealed,
            (false, false) => OptionState::Locked,
        }
    }

    pub fn is_interactive(self) -> bool {
        self == OptionState::Selectable
    }
}

/// Letra de la opción: A, B, C…
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

impl OptionRow {
    pub fn label(&self) -> String {
        format!("{}: {}", self.letter, self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub topic_id: String,
    pub name: String,
    pub correct: u32,
    pub incorrect: u32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct Answer! 🥳",
            Feedback::Incorrect => "Incorrect.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub next_label: &'static str,
}

pub const PREV_LABEL: &str = "<< Prev";
pub const NEXT_LABEL: &str = "Next >>";
pub const FINISH_LABEL: &str = "Finish";
