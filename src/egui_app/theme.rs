//! Color palette for the client views.

use egui::Color32;

pub const BG_DARK: Color32 = Color32::from_rgb(24, 26, 32);
pub const PANEL: Color32 = Color32::from_rgb(32, 35, 42);
pub const ACCENT: Color32 = Color32::from_rgb(79, 109, 245);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(230, 233, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 156, 170);
pub const ERROR: Color32 = Color32::from_rgb(235, 87, 87);
pub const DANGER: Color32 = Color32::from_rgb(192, 57, 43);
