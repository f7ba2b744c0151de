use crate::config::palette;
use egui::{Align, Button, Color32, Context, Frame, Layout, Margin, RichText, Stroke, Ui, Visuals};

/// Barra inferior del host: un único interruptor de tema.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_bar")
        .frame(Frame::default().fill(palette::SIDEBAR).inner_margin(Margin::symmetric(12, 6)))
        .show(ctx, |ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Tema claro" } else { "🌙 Tema oscuro" };
                let toggle = Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(palette::NAV_PREV)
                    .corner_radius(12.0);
                if ui.add(toggle).clicked() {
                    ctx.set_visuals(theme_visuals(!dark));
                }
            });
        });
}

pub fn theme_visuals(dark: bool) -> Visuals {
    if dark { Visuals::dark() } else { Visuals::light() }
}

/// Fondo oscuro detrás de las tarjetas (sustituye a la imagen decorativa).
pub fn background_frame() -> Frame {
    Frame::default()
        .fill(palette::BACKGROUND)
        .inner_margin(Margin::symmetric(16, 16))
}

/// Tarjeta redondeada que ocupa todo el ancho disponible.
pub fn card(ui: &mut Ui, fill: Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(fill)
        .stroke(Stroke::new(1.0, palette::BORDER))
        .corner_radius(16.0)
        .inner_margin(Margin::symmetric(20, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}
