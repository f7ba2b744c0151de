mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::{Context, Event, InputState, Key};
use layout::{background_frame, bottom_panel};

// A..Z, en el mismo orden que las letras de las opciones
const LETTER_KEYS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        handle_shortcuts(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        let width = ctx.screen_rect().width();
        if self.config.is_narrow(width) {
            // Pantallas estrechas: temas arriba, pregunta debajo
            egui::TopBottomPanel::top("topics_panel")
                .resizable(false)
                .frame(background_frame())
                .show(ctx, |ui| views::topic_list::ui_topic_list(self, ui));
        } else {
            egui::SidePanel::left("topics_panel")
                .resizable(false)
                .exact_width(width / 3.0)
                .frame(background_frame())
                .show(ctx, |ui| views::topic_list::ui_topic_list(self, ui));
        }

        egui::CentralPanel::default()
            .frame(background_frame())
            .show(ctx, |ui| views::question::ui_question(self, ui));
    }

    // Sin `save`: las respuestas no sobreviven a la sesión.
}

/// Flechas para Anterior/Siguiente y letras para elegir opción.
/// Pasan por las mismas operaciones que los clics, así que aplican las mismas reglas.
/// Solo cuentan las teclas sin modificadores: Ctrl+A, Cmd+W… no responden nada.
fn handle_shortcuts(app: &mut QuizApp, ctx: &Context) {
    let (prev, next, letter) = ctx.input(|i| {
        (
            bare_key_pressed(i, Key::ArrowLeft),
            bare_key_pressed(i, Key::ArrowRight),
            LETTER_KEYS.iter().position(|k| bare_key_pressed(i, *k)),
        )
    });

    if let Some(idx) = letter {
        app.select_option_at(idx);
    }
    if prev {
        app.go_previous();
    }
    if next {
        app.go_next();
    }
}

fn bare_key_pressed(input: &InputState, key: Key) -> bool {
    input.modifiers.is_none()
        && input.events.iter().any(|e| {
            matches!(
                e,
                Event::Key { key: k, pressed: true, modifiers, .. }
                    if *k == key && modifiers.is_none()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, RawInput};

    fn press(app: &mut QuizApp, ctx: &Context, key: Key, modifiers: Modifiers) {
        let input = RawInput {
            modifiers,
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| handle_shortcuts(app, ctx));
    }

    #[test]
    fn letter_key_selects_option_by_position() {
        let ctx = Context::default();
        let mut app = QuizApp::new();
        press(&mut app, &ctx, Key::B, Modifiers::NONE);
        assert_eq!(app.selected_option(), Some("Building user interfaces"));
    }

    #[test]
    fn letter_chords_with_modifiers_do_not_answer() {
        let ctx = Context::default();
        let mut app = QuizApp::new();
        let chords = [Modifiers::CTRL, Modifiers::ALT, Modifiers::COMMAND, Modifiers::SHIFT];
        for modifiers in chords {
            press(&mut app, &ctx, Key::A, modifiers);
            assert_eq!(app.selected_option(), None);
        }
    }

    #[test]
    fn arrows_follow_navigation_rules() {
        let ctx = Context::default();
        let mut app = QuizApp::new();

        // sin responder, la flecha derecha no avanza
        press(&mut app, &ctx, Key::ArrowRight, Modifiers::NONE);
        assert_eq!(app.current_index(), 0);

        press(&mut app, &ctx, Key::A, Modifiers::NONE);
        press(&mut app, &ctx, Key::ArrowRight, Modifiers::NONE);
        assert_eq!(app.current_index(), 1);

        press(&mut app, &ctx, Key::ArrowLeft, Modifiers::CTRL);
        assert_eq!(app.current_index(), 1);
        press(&mut app, &ctx, Key::ArrowLeft, Modifiers::NONE);
        assert_eq!(app.current_index(), 0);
        assert_eq!(app.selected_option(), Some("Server-side programming"));
    }
}
