//! The admin controller state machine.
//!
//! Owns both table datasets, the single-editor lock, the staged
//! confirmation dialog, and the alert queue. The UI dispatches user
//! intents through the methods here and applies [`AdminEvent`]s drained
//! from the admin channel; both return [`Effect`]s naming the fetches
//! the caller must fire.

use std::collections::VecDeque;

use log::{info, warn};
use serde_json::{Map, Value};

use crate::admin::draft::RowDraft;
use crate::admin::sort::{self, ColumnSort};
use crate::http::ApiError;
use crate::models::{Driver, Ride, User};
use crate::schema::TableKind;

pub const EDIT_LOCK_ALERT: &str = "Finalize a edição atual antes de iniciar uma nova.";
pub const DELETE_LOCK_ALERT: &str = "Finalize a edição atual antes de excluir um item.";
pub const UPDATE_SUCCESS_ALERT: &str = "Atualização realizada com sucesso!";
pub const DRIVERS_LOAD_ALERT: &str =
    "Não foi possível carregar a lista de usuários para o dropdown de motoristas.";
pub const DRIVERS_REFRESH_ALERT: &str = "Não foi possível atualizar a lista de usuários.";

/// Who is editing, if anyone. The single-editor lock is this enum:
/// holding a draft in `Editing` is what locks both tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    #[default]
    Idle,
    Editing(RowDraft),
}

/// Fetches the caller must fire after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchUsers,
    FetchRides,
    FetchDrivers,
}

/// A PUT the UI must issue for a confirmed draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub table: TableKind,
    pub id: i64,
    pub payload: Map<String, Value>,
}

/// Destructive or lossy action staged behind the confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    Delete { table: TableKind, id: i64 },
    /// Switching sections would discard the open draft.
    SwitchSection(TableKind),
    /// First prompt of the logout chain while a draft is open.
    CancelEditForLogout,
    Logout,
}

impl PendingConfirm {
    /// Question shown in the confirm dialog.
    pub fn message(self) -> String {
        match self {
            Self::Delete { table, .. } => {
                format!("Tem certeza que deseja excluir este {}?", table.item_name())
            }
            Self::SwitchSection(_) => {
                "Você tem uma edição em andamento. Deseja cancelar e mudar de seção?".to_owned()
            }
            Self::CancelEditForLogout => {
                "Você tem uma edição em andamento. Deseja cancelar e sair?".to_owned()
            }
            Self::Logout => "Tem certeza que deseja sair?".to_owned(),
        }
    }
}

/// What the UI must do after the confirm dialog is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accepted {
    None,
    /// Fire the DELETE for this row.
    Delete { table: TableKind, id: i64 },
    /// Fire these fetches (a discarded draft restores its row this way).
    Refresh(Vec<Effect>),
    /// Clear the session; the caller drops the token and admin state.
    SignOut,
}

/// HTTP outcome delivered over the admin channel.
#[derive(Debug, Clone)]
pub enum AdminEvent {
    UsersLoaded(Result<Vec<User>, ApiError>),
    RidesLoaded(Result<Vec<Ride>, ApiError>),
    DriversLoaded(Result<Vec<Driver>, ApiError>),
    UpdateFinished {
        table: TableKind,
        result: Result<(), ApiError>,
    },
    DeleteFinished {
        table: TableKind,
        result: Result<(), ApiError>,
    },
}

impl AdminEvent {
    /// True when the backend rejected the token; the app signs out
    /// instead of applying the event.
    pub fn is_unauthorized(&self) -> bool {
        let result_err = match self {
            Self::UsersLoaded(r) => r.as_ref().err(),
            Self::RidesLoaded(r) => r.as_ref().err(),
            Self::DriversLoaded(r) => r.as_ref().err(),
            Self::UpdateFinished { result, .. } | Self::DeleteFinished { result, .. } => {
                result.as_ref().err()
            }
        };
        matches!(result_err, Some(ApiError::Unauthorized))
    }
}

#[derive(Debug, Default)]
pub struct AdminState {
    pub users: Vec<User>,
    pub rides: Vec<Ride>,
    /// Cached user list backing the ride editor's driver dropdown.
    pub drivers: Vec<Driver>,
    pub users_error: Option<String>,
    pub rides_error: Option<String>,
    pub users_loading: bool,
    pub rides_loading: bool,
    pub users_sort: Option<ColumnSort>,
    pub rides_sort: Option<ColumnSort>,
    pub editor: Editor,
    pub section: TableKind,
    pub confirm: Option<PendingConfirm>,
    alerts: VecDeque<String>,
    drivers_loaded_once: bool,
}

impl AdminState {
    /// Fetches to fire when the admin page is entered.
    pub fn initial_load(&mut self) -> Vec<Effect> {
        self.users_loading = true;
        self.rides_loading = true;
        vec![Effect::FetchUsers, Effect::FetchRides, Effect::FetchDrivers]
    }

    pub fn draft(&self) -> Option<&RowDraft> {
        match &self.editor {
            Editor::Editing(draft) => Some(draft),
            Editor::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut RowDraft> {
        match &mut self.editor {
            Editor::Editing(draft) => Some(draft),
            Editor::Idle => None,
        }
    }

    /// True while any row, in either table, is being edited.
    pub fn lock_held(&self) -> bool {
        self.draft().is_some()
    }

    pub fn is_editing_row(&self, table: TableKind, id: i64) -> bool {
        self.draft().is_some_and(|d| d.table == table && d.id == id)
    }

    /// Front of the alert queue, shown in the blocking dialog.
    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    /// Starts editing a row. Refused with an alert while another draft
    /// is open, in either table.
    pub fn begin_edit(&mut self, table: TableKind, id: i64) {
        if self.lock_held() {
            self.push_alert(EDIT_LOCK_ALERT);
            return;
        }
        let draft = match table {
            TableKind::Users => self.users.iter().find(|u| u.id == id).map(RowDraft::for_user),
            TableKind::Rides => self.rides.iter().find(|r| r.id == id).map(RowDraft::for_ride),
        };
        match draft {
            Some(draft) => {
                info!("editing {} row {id}", table.endpoint());
                self.editor = Editor::Editing(draft);
            }
            None => warn!("edit requested for missing {} row {id}", table.endpoint()),
        }
    }

    /// Confirms the open draft. Returns the PUT the caller must fire;
    /// the draft stays in place, marked in flight, until the outcome
    /// arrives as an [`AdminEvent::UpdateFinished`].
    pub fn confirm_edit(&mut self) -> Option<UpdateRequest> {
        let draft = self.draft_mut()?;
        if draft.in_flight {
            return None;
        }
        draft.in_flight = true;
        Some(UpdateRequest {
            table: draft.table,
            id: draft.id,
            payload: draft.payload(),
        })
    }

    /// Stages the delete confirm. Refused with an alert while a draft
    /// is open; no network call is made in that case.
    pub fn request_delete(&mut self, table: TableKind, id: i64) {
        if self.lock_held() {
            self.push_alert(DELETE_LOCK_ALERT);
            return;
        }
        self.confirm = Some(PendingConfirm::Delete { table, id });
    }

    /// Nav click. Switching away from an open draft is staged behind a
    /// confirm; otherwise the switch is immediate.
    pub fn request_switch_section(&mut self, table: TableKind) {
        if table == self.section {
            return;
        }
        if self.lock_held() {
            self.confirm = Some(PendingConfirm::SwitchSection(table));
        } else {
            self.section = table;
        }
    }

    /// "Sair" click. While editing, the cancel-edit prompt comes first;
    /// the unconditional logout confirm always follows.
    pub fn request_logout(&mut self) {
        self.confirm = Some(if self.lock_held() {
            PendingConfirm::CancelEditForLogout
        } else {
            PendingConfirm::Logout
        });
    }

    /// Applies the staged confirm.
    pub fn accept_confirm(&mut self) -> Accepted {
        let Some(confirm) = self.confirm.take() else {
            return Accepted::None;
        };
        match confirm {
            PendingConfirm::Delete { table, id } => Accepted::Delete { table, id },
            PendingConfirm::SwitchSection(table) => {
                let effects = self.discard_draft();
                self.section = table;
                Accepted::Refresh(effects)
            }
            PendingConfirm::CancelEditForLogout => {
                let effects = self.discard_draft();
                // Chain into the unconditional prompt.
                self.confirm = Some(PendingConfirm::Logout);
                Accepted::Refresh(effects)
            }
            PendingConfirm::Logout => Accepted::SignOut,
        }
    }

    pub fn decline_confirm(&mut self) {
        self.confirm = None;
    }

    /// Drops the open draft; the row's display data is restored by
    /// refetching the table that held it.
    fn discard_draft(&mut self) -> Vec<Effect> {
        match std::mem::take(&mut self.editor) {
            Editor::Idle => Vec::new(),
            Editor::Editing(draft) => {
                info!("discarded draft for {} row {}", draft.table.endpoint(), draft.id);
                vec![self.refetch(draft.table)]
            }
        }
    }

    fn refetch(&mut self, table: TableKind) -> Effect {
        match table {
            TableKind::Users => {
                self.users_loading = true;
                Effect::FetchUsers
            }
            TableKind::Rides => {
                self.rides_loading = true;
                Effect::FetchRides
            }
        }
    }

    /// Header click on the active section's `column`. Reorders the
    /// loaded rows in place; a later refetch discards the order.
    pub fn sort_clicked(&mut self, column: usize) {
        let table = self.section;
        let Some(key) = table.fields().get(column).and_then(|f| f.sort) else {
            return;
        };
        let next = sort::toggle(self.active_sort(), column);
        match table {
            TableKind::Users => {
                self.users_sort = Some(next);
                let field = &TableKind::Users.fields()[column];
                sort_rows(&mut self.users, next, |row| row.cell_text(field), key);
            }
            TableKind::Rides => {
                self.rides_sort = Some(next);
                let field = &TableKind::Rides.fields()[column];
                sort_rows(&mut self.rides, next, |row| row.cell_text(field), key);
            }
        }
    }

    /// The active section's sort, if any.
    pub fn active_sort(&self) -> Option<ColumnSort> {
        match self.section {
            TableKind::Users => self.users_sort,
            TableKind::Rides => self.rides_sort,
        }
    }

    /// Applies a finished HTTP outcome. Returned effects are the
    /// refetches the caller must fire.
    pub fn apply(&mut self, event: AdminEvent) -> Vec<Effect> {
        match event {
            AdminEvent::UsersLoaded(result) => {
                self.users_loading = false;
                self.users_sort = None;
                match result {
                    Ok(users) => {
                        info!("loaded {} users", users.len());
                        self.users = users;
                        self.users_error = None;
                    }
                    Err(err) => {
                        warn!("users load failed: {err}");
                        self.users.clear();
                        self.users_error = Some(format!("Erro ao carregar dados: {err}"));
                    }
                }
                Vec::new()
            }
            AdminEvent::RidesLoaded(result) => {
                self.rides_loading = false;
                self.rides_sort = None;
                match result {
                    Ok(rides) => {
                        info!("loaded {} rides", rides.len());
                        self.rides = rides;
                        self.rides_error = None;
                    }
                    Err(err) => {
                        warn!("rides load failed: {err}");
                        self.rides.clear();
                        self.rides_error = Some(format!("Erro ao carregar dados: {err}"));
                    }
                }
                Vec::new()
            }
            AdminEvent::DriversLoaded(result) => {
                match result {
                    Ok(drivers) => {
                        self.drivers = drivers;
                        self.drivers_loaded_once = true;
                    }
                    Err(err) => {
                        warn!("driver list load failed: {err}");
                        self.push_alert(if self.drivers_loaded_once {
                            DRIVERS_REFRESH_ALERT
                        } else {
                            DRIVERS_LOAD_ALERT
                        });
                    }
                }
                Vec::new()
            }
            AdminEvent::UpdateFinished { table, result } => match result {
                Ok(()) => {
                    info!("{} update confirmed", table.endpoint());
                    self.editor = Editor::Idle;
                    self.push_alert(UPDATE_SUCCESS_ALERT);
                    self.users_loading = true;
                    self.rides_loading = true;
                    vec![Effect::FetchUsers, Effect::FetchRides, Effect::FetchDrivers]
                }
                Err(err) => {
                    warn!("{} update failed: {err}", table.endpoint());
                    // The draft stays open for a retry; only the
                    // in-flight flag is cleared.
                    if let Some(draft) = self.draft_mut() {
                        draft.in_flight = false;
                    }
                    self.push_alert(format!("Erro ao atualizar os dados: {err}"));
                    Vec::new()
                }
            },
            AdminEvent::DeleteFinished { table, result } => match result {
                Ok(()) => {
                    info!("{} row deleted", table.endpoint());
                    self.push_alert(match table {
                        TableKind::Users => "Usuário deletado com sucesso!",
                        TableKind::Rides => "Carona deletado com sucesso!",
                    });
                    vec![self.refetch(table)]
                }
                Err(err) => {
                    warn!("{} delete failed: {err}", table.endpoint());
                    self.push_alert(err.to_string());
                    Vec::new()
                }
            },
        }
    }
}

fn sort_rows<T>(
    rows: &mut [T],
    sort: ColumnSort,
    cell: impl Fn(&T) -> String,
    key: crate::schema::SortKey,
) {
    rows.sort_by(|a, b| {
        let ord = sort::compare(key, &cell(a), &cell(b));
        match sort.dir {
            sort::SortDir::Asc => ord,
            sort::SortDir::Desc => ord.reverse(),
        }
    });
}
