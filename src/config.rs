// src/config.rs

use egui::Color32;

/// Ajustes de la ventana y del layout. No se leen de fichero: todo va compilado.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Por debajo de este ancho la lista de temas se apila encima de la pregunta.
    pub narrow_breakpoint: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Topic Quiz",
            inner_size: [1024.0, 680.0],
            min_inner_size: [360.0, 480.0],
            narrow_breakpoint: 640.0,
        }
    }
}

impl AppConfig {
    pub fn is_narrow(&self, width: f32) -> bool {
        width < self.narrow_breakpoint
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title)
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn web_options(&self) -> eframe::WebOptions {
        eframe::WebOptions::default()
    }
}

/// Paleta fija del quiz (morados sobre fondo oscuro).
pub mod palette {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(12, 10, 18);
    pub const SIDEBAR: Color32 = Color32::from_rgb(59, 7, 100);
    pub const QUESTION_PANEL: Color32 = Color32::from_rgb(76, 29, 149);
    pub const BORDER: Color32 = Color32::from_rgb(109, 40, 217);
    pub const ACTIVE_TOPIC: Color32 = Color32::from_rgb(79, 70, 229);
    pub const ACTIVE_BORDER: Color32 = Color32::from_rgb(74, 222, 128);
    pub const OPTION: Color32 = Color32::from_rgb(109, 40, 217);
    pub const CORRECT: Color32 = Color32::from_rgb(22, 163, 74);
    pub const CORRECT_BORDER: Color32 = Color32::from_rgb(74, 222, 128);
    pub const CORRECT_MUTED: Color32 = Color32::from_rgb(21, 128, 61);
    pub const INCORRECT: Color32 = Color32::from_rgb(220, 38, 38);
    pub const INCORRECT_BORDER: Color32 = Color32::from_rgb(248, 113, 113);
    pub const BADGE_CORRECT: Color32 = Color32::from_rgb(34, 197, 94);
    pub const BADGE_INCORRECT: Color32 = Color32::from_rgb(239, 68, 68);
    pub const LETTER: Color32 = Color32::from_rgb(134, 239, 172);
    pub const PROGRESS: Color32 = Color32::from_rgb(74, 222, 128);
    pub const NAV_PREV: Color32 = Color32::from_rgb(99, 102, 241);
    pub const NAV_NEXT: Color32 = Color32::from_rgb(34, 197, 94);
    pub const NAV_DISABLED: Color32 = Color32::from_rgb(75, 85, 99);
}
