//! `ehttp` calls behind the admin tables.
//!
//! Every call completes on a background callback that posts an
//! [`AdminEvent`] onto the admin channel and asks egui for a repaint;
//! the UI thread drains the channel at the top of the next frame.

use log::error;
use serde::de::DeserializeOwned;

use crate::admin::state::{AdminEvent, UpdateRequest};
use crate::config::AppConfig;
use crate::http::{ApiError, admin_headers, error_message};
use crate::schema::TableKind;

pub type AdminEventSender = flume::Sender<AdminEvent>;
pub type AdminEventReceiver = flume::Receiver<AdminEvent>;

pub fn create_admin_channel() -> (AdminEventSender, AdminEventReceiver) {
    flume::unbounded()
}

fn send(tx: &AdminEventSender, event: AdminEvent) {
    if tx.send(event).is_err() {
        error!("admin channel closed before the HTTP outcome arrived");
    }
}

/// Decodes a list response, mapping failure shapes onto [`ApiError`].
fn decode_list<T: DeserializeOwned>(
    result: Result<ehttp::Response, String>,
) -> Result<Vec<T>, ApiError> {
    match result {
        Ok(response) if response.status == 401 || response.status == 403 => {
            Err(ApiError::Unauthorized)
        }
        Ok(response) if response.ok => serde_json::from_slice(&response.bytes).map_err(|err| {
            error!("unreadable list response: {err}");
            ApiError::Backend(format!("Erro ao buscar dados ({})", response.status))
        }),
        Ok(response) => Err(ApiError::Backend(error_message(
            &response.bytes,
            format!("Erro ao buscar dados ({})", response.status),
        ))),
        Err(err) => Err(ApiError::Transport(err)),
    }
}

/// Maps a mutation response (PUT/DELETE) onto an [`ApiError`] outcome.
/// The body is only read for its `error` field.
fn decode_mutation(
    result: Result<ehttp::Response, String>,
    fallback: impl FnOnce(u16) -> String,
) -> Result<(), ApiError> {
    match result {
        Ok(response) if response.status == 401 || response.status == 403 => {
            Err(ApiError::Unauthorized)
        }
        Ok(response) if response.ok => Ok(()),
        Ok(response) => Err(ApiError::Backend(error_message(
            &response.bytes,
            fallback(response.status),
        ))),
        Err(err) => Err(ApiError::Transport(err)),
    }
}

/// GET `{admin_api}/usuarios`.
pub fn fetch_users(
    config: &AppConfig,
    token: &str,
    tx: &AdminEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/usuarios", config.admin_api());
    let mut request = ehttp::Request::get(&url);
    request.headers = admin_headers(token);

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        send(&tx, AdminEvent::UsersLoaded(decode_list(result)));
    });
}

/// GET `{admin_api}/caronas`.
pub fn fetch_rides(
    config: &AppConfig,
    token: &str,
    tx: &AdminEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/caronas", config.admin_api());
    let mut request = ehttp::Request::get(&url);
    request.headers = admin_headers(token);

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        send(&tx, AdminEvent::RidesLoaded(decode_list(result)));
    });
}

/// Refreshes the driver dropdown cache. Same endpoint as the users
/// table; only `id` and `nome` are kept.
pub fn fetch_drivers(
    config: &AppConfig,
    token: &str,
    tx: &AdminEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/usuarios", config.admin_api());
    let mut request = ehttp::Request::get(&url);
    request.headers = admin_headers(token);

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        send(&tx, AdminEvent::DriversLoaded(decode_list(result)));
    });
}

/// PUT `{admin_api}/{usuarios|caronas}/{id}` with the collected draft
/// payload.
pub fn update_row(
    config: &AppConfig,
    token: &str,
    update: &UpdateRequest,
    tx: &AdminEventSender,
    egui_ctx: &egui::Context,
) {
    let table = update.table;
    let url = format!("{}/{}/{}", config.admin_api(), table.endpoint(), update.id);
    let body = match serde_json::to_vec(&update.payload) {
        Ok(body) => body,
        Err(err) => {
            error!("failed to serialize update payload: {err}");
            send(
                tx,
                AdminEvent::UpdateFinished {
                    table,
                    result: Err(ApiError::Transport(err.to_string())),
                },
            );
            return;
        }
    };
    let request = ehttp::Request {
        method: "PUT".to_owned(),
        url,
        body,
        headers: admin_headers(token),
    };

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        let result = decode_mutation(result, |status| format!("Erro ao atualizar ({status})"));
        send(&tx, AdminEvent::UpdateFinished { table, result });
    });
}

/// DELETE `{admin_api}/{usuarios|caronas}/{id}`.
pub fn delete_row(
    config: &AppConfig,
    token: &str,
    table: TableKind,
    id: i64,
    tx: &AdminEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/{}/{}", config.admin_api(), table.endpoint(), id);
    let request = ehttp::Request {
        method: "DELETE".to_owned(),
        url,
        body: Vec::new(),
        headers: admin_headers(token),
    };

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        let result = decode_mutation(result, |_| {
            format!("Erro ao excluir {}.", table.item_name())
        });
        send(&tx, AdminEvent::DeleteFinished { table, result });
    });
}
