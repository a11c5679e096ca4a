//! The admin table controller: state machine, row drafts, sorting, and
//! the HTTP calls behind the two tables.

pub mod api;
pub mod draft;
pub mod sort;
pub mod state;
