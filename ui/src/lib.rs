#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod state;
pub mod widgets;

pub use app::CaronaAdminApp;

/// eframe storage key for the persisted session token. Matches the
/// browser storage key the rest of the carona frontend uses.
pub const TOKEN_STORAGE_KEY: &str = "token";
