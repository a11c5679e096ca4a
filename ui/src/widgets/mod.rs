//! Reusable widgets for the admin page.

pub mod dialogs;
pub mod table;

use egui::Color32;

/// Red color for error status
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
