use crate::QuizApp;
use crate::config::palette;
use crate::ui::helpers::{feedback_banner, nav_button, option_button};
use crate::ui::layout::card;
use crate::view_models::PREV_LABEL;
use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

pub fn ui_question(app: &mut QuizApp, ui: &mut Ui) {
    let progress = app.progress_label();
    let text = app.current_question().question.text.clone();
    let options = app.option_rows();
    let feedback = app.feedback();
    let nav = app.nav_buttons();

    let mut picked: Option<usize> = None;
    let mut go_prev = false;
    let mut go_next = false;

    card(ui, palette::QUESTION_PANEL, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let width = ui.available_width();

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(progress).color(palette::PROGRESS).strong().size(20.0));
                    ui.add_space(16.0);
                    ui.label(RichText::new(text).color(Color32::WHITE).strong().size(22.0));
                });
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(12.0);

                for row in &options {
                    if option_button(ui, row, width) {
                        picked = Some(row.index);
                    }
                    ui.add_space(8.0);
                }

                if let Some(feedback) = feedback {
                    ui.add_space(12.0);
                    feedback_banner(ui, feedback);
                }

                ui.add_space(32.0);
                ui.horizontal(|ui| {
                    go_prev = nav_button(ui, PREV_LABEL, nav.prev_enabled, palette::NAV_PREV);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        go_next =
                            nav_button(ui, nav.next_label, nav.next_enabled, palette::NAV_NEXT);
                    });
                });
            });
    });

    if let Some(idx) = picked {
        app.select_option_at(idx);
    }
    if go_prev {
        app.go_previous();
    }
    if go_next {
        app.go_next();
    }
}
