use std::env;
use std::path::PathBuf;

use egui::Color32;

pub const LOG_DIR_VAR: &str = "BOARD_LOG_DIR";
pub const LOG_ADVANCED_VAR: &str = "BOARD_LOG_ADVANCED";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareColors {
    pub light: Color32,
    pub dark: Color32,
    pub valid_move: Color32,
    pub invalid_move: Color32,
}

impl Default for SquareColors {
    fn default() -> Self {
        Self {
            light: Color32::WHITE,
            dark: Color32::from_rgb(211, 211, 211), // lightgrey
            valid_move: Color32::from_rgb(144, 238, 144), // lightgreen
            invalid_move: Color32::from_rgb(255, 192, 203), // pink
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub log_dir: PathBuf,
    pub save_log_on_exit: bool,
    pub advanced_logging: bool,
    pub colors: SquareColors,
    /// Opacity of a piece left behind on its square while it is dragged.
    pub dragged_opacity: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Drag and Drop Chessboard".to_string(),
            window_size: [640.0, 760.0],
            log_dir: PathBuf::from("logs"),
            save_log_on_exit: true,
            advanced_logging: false,
            colors: SquareColors::default(),
            dragged_opacity: 0.4,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(LOG_DIR_VAR).filter(|dir| !dir.is_empty()) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup(LOG_ADVANCED_VAR) {
            self.advanced_logging = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
        self
    }
}
