//! The admin table: one schema-driven renderer for both sections.
//!
//! Split into focused pieces:
//! - `columns`: column layout and fixed sizes
//! - `header`: header row with sort indicators
//! - `row`: display and editing row rendering
//!
//! The renderer never mutates [`AdminState`] directly; clicks come back
//! as [`TableAction`]s the page applies through the controller methods.

pub mod columns;
pub mod header;
pub mod row;

use carona_admin_business::{AdminState, TableKind};
use egui::Ui;
use egui_extras::TableBuilder;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{DisplayRow, RowAction, render_display_row, render_editing_row};
use crate::widgets::COLOR_RED;

/// User intent collected from one frame of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Sort(usize),
    Edit(i64),
    ConfirmEdit,
    Delete(i64),
}

/// Renders the active section's table and reports the clicks.
pub fn admin_table(ui: &mut Ui, admin: &mut AdminState) -> Vec<TableAction> {
    let table = admin.section;
    let fields = table.fields();
    let mut actions = Vec::new();

    let (error, loading) = match table {
        TableKind::Users => (admin.users_error.as_deref(), admin.users_loading),
        TableKind::Rides => (admin.rides_error.as_deref(), admin.rides_loading),
    };
    if let Some(error) = error {
        ui.colored_label(COLOR_RED, error);
        ui.add_space(4.0);
    }
    if loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Carregando dados...");
        });
        ui.add_space(4.0);
    }

    // Rows are snapshotted as display text so the body closures do not
    // contend with the draft's mutable borrow.
    let rows: Vec<DisplayRow> = match table {
        TableKind::Users => admin
            .users
            .iter()
            .map(|user| DisplayRow {
                id: user.id,
                cells: fields.iter().map(|field| user.cell_text(field)).collect(),
            })
            .collect(),
        TableKind::Rides => admin
            .rides
            .iter()
            .map(|ride| DisplayRow {
                id: ride.id,
                cells: fields.iter().map(|field| ride.cell_text(field)).collect(),
            })
            .collect(),
    };
    let drivers = admin.drivers.clone();
    let sort = admin.active_sort();
    let lock_held = admin.lock_held();
    let editing_row = admin.draft().map(|draft| (draft.table, draft.id));
    let mut draft = admin.draft_mut();

    let mut builder = TableBuilder::new(ui).striped(true);
    for column in table_columns(fields) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(column) = render_table_header(&mut header, fields, sort) {
                actions.push(TableAction::Sort(column));
            }
        })
        .body(|mut body| {
            for row_data in &rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    let is_editing = editing_row == Some((table, row_data.id));
                    if is_editing && let Some(draft) = draft.as_deref_mut() {
                        if render_editing_row(&mut table_row, fields, draft, &drivers) {
                            actions.push(TableAction::ConfirmEdit);
                        }
                    } else {
                        match render_display_row(&mut table_row, row_data, !lock_held) {
                            Some(RowAction::Edit) => actions.push(TableAction::Edit(row_data.id)),
                            Some(RowAction::Delete) => {
                                actions.push(TableAction::Delete(row_data.id));
                            }
                            None => {}
                        }
                    }
                });
            }
        });

    actions
}
