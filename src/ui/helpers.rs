// src/ui/helpers.rs
use crate::config::palette;
use crate::view_models::{Feedback, OptionRow, OptionState, TopicRow};
use egui::{
    Align, Button, Color32, CursorIcon, Frame, Layout, Margin, RichText, Sense, Stroke, Ui, Vec2,
};

/// Pastilla redonda con el contador de aciertos o fallos.
pub fn badge(ui: &mut Ui, text: String, fill: Color32) {
    Frame::default()
        .fill(fill)
        .corner_radius(14.0)
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        });
}

/// Fila de un tema. Devuelve `true` si se ha pulsado.
pub fn topic_item(ui: &mut Ui, row: &TopicRow) -> bool {
    let (fill, stroke) = if row.active {
        (palette::ACTIVE_TOPIC, Stroke::new(2.0, palette::ACTIVE_BORDER))
    } else {
        (Color32::TRANSPARENT, Stroke::new(2.0, Color32::TRANSPARENT))
    };

    let response = Frame::default()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&row.name).color(Color32::WHITE).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // right_to_left: lo primero que se añade queda más a la derecha
                    badge(ui, format!("✖{}", row.incorrect), palette::BADGE_INCORRECT);
                    badge(ui, format!("✔{}", row.correct), palette::BADGE_CORRECT);
                });
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    response.clicked()
}

fn option_colors(state: OptionState) -> (Color32, Stroke) {
    match state {
        OptionState::Selectable => (palette::OPTION, Stroke::NONE),
        OptionState::CorrectChosen => {
            (palette::CORRECT, Stroke::new(2.0, palette::CORRECT_BORDER))
        }
        OptionState::IncorrectChosen => {
            (palette::INCORRECT, Stroke::new(2.0, palette::INCORRECT_BORDER))
        }
        OptionState::CorrectRevealed => (palette::CORRECT_MUTED.gamma_multiply(0.8), Stroke::NONE),
        OptionState::Locked => (palette::OPTION, Stroke::NONE),
    }
}

/// Botón de opción coloreado según su estado. Una vez respondida la pregunta
/// los botones solo reaccionan al hover, nunca al clic.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    let (fill, stroke) = option_colors(row.state);
    let interactive = row.state.is_interactive();

    let mut button = Button::new(RichText::new(row.label()).color(Color32::WHITE).size(16.0))
        .fill(fill)
        .stroke(stroke)
        .corner_radius(12.0)
        .wrap()
        .min_size(Vec2::new(width, 44.0));
    if !interactive {
        button = button.sense(Sense::hover());
    }

    let response = ui.add(button);
    interactive && response.on_hover_cursor(CursorIcon::PointingHand).clicked()
}

pub fn feedback_banner(ui: &mut Ui, feedback: Feedback) {
    let (fill, text_color) = match feedback {
        Feedback::Correct => (palette::BADGE_CORRECT, Color32::BLACK),
        Feedback::Incorrect => (palette::BADGE_INCORRECT, Color32::WHITE),
    };
    Frame::default()
        .fill(fill)
        .corner_radius(12.0)
        .inner_margin(Margin::symmetric(12, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(feedback.message())
                        .color(text_color)
                        .size(20.0)
                        .strong(),
                );
            });
        });
}

/// Botón Anterior/Siguiente. Deshabilitado se pinta en gris.
pub fn nav_button(ui: &mut Ui, label: &str, enabled: bool, fill: Color32) -> bool {
    let (fill, text_color) = if enabled {
        (fill, Color32::WHITE)
    } else {
        (palette::NAV_DISABLED, Color32::GRAY)
    };
    let button = Button::new(RichText::new(label).color(text_color).strong().size(17.0))
        .fill(fill)
        .corner_radius(20.0)
        .min_size(Vec2::new(120.0, 38.0));
    ui.add_enabled(enabled, button).clicked()
}
