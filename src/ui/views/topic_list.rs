use crate::QuizApp;
use crate::config::palette;
use crate::ui::helpers::topic_item;
use crate::ui::layout::card;
use egui::{Color32, RichText, ScrollArea, Ui};

pub fn ui_topic_list(app: &mut QuizApp, ui: &mut Ui) {
    // Precomputar las filas para no mantener el borrow de `app` dentro de los closures
    let rows = app.topic_rows();
    let mut clicked: Option<String> = None;

    card(ui, palette::SIDEBAR, |ui| {
        ui.heading(RichText::new("Quiz Topics").color(Color32::WHITE).strong());
        ui.add_space(12.0);

        ScrollArea::vertical().show(ui, |ui| {
            for row in &rows {
                if topic_item(ui, row) {
                    clicked = Some(row.topic_id.clone());
                }
                ui.add_space(8.0);
            }
        });
    });

    if let Some(topic_id) = clicked {
        app.jump_to_topic(&topic_id);
    }
}
