//! Top-level pages, one per route.

mod admin_page;
mod login_page;

pub use admin_page::admin_page;
pub use login_page::login_page;
