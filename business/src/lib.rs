//! Domain layer for the carona admin panel.
//!
//! Everything the UI crate renders lives here: the wire models, the
//! per-table field schema, the session state machine, and the admin
//! controller with its single-editor lock. UI code stays "dumb":
//! it reads state, renders it, and calls the transition methods.

pub mod admin;
pub mod config;
pub mod http;
pub mod models;
pub mod schema;
pub mod session;

pub use admin::api::{AdminEventReceiver, AdminEventSender, create_admin_channel};
pub use admin::draft::RowDraft;
pub use admin::sort::{ColumnSort, SortDir};
pub use admin::state::{
    Accepted, AdminEvent, AdminState, Editor, Effect, PendingConfirm, UpdateRequest,
};
pub use config::AppConfig;
pub use http::ApiError;
pub use models::{Driver, Ride, RideStatus, User};
pub use schema::{ChoiceSource, FieldKind, FieldSpec, SortKey, TableKind};
pub use session::{
    AuthPhase, Route, Session, SessionEvent, SessionEventReceiver, SessionEventSender, TokenCheck,
    create_session_channel,
};
