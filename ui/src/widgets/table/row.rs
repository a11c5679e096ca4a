//! Row rendering: display rows and the single editing row.

use carona_admin_business::{ChoiceSource, Driver, FieldKind, FieldSpec, RideStatus, RowDraft};
use egui::Ui;
use egui_extras::TableRow;

/// A row snapshotted to display text, one cell per schema field.
pub struct DisplayRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Click on a display row's action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Renders a row in display mode. While another row holds the edit
/// lock, `actions_enabled` is false and both buttons are grayed out.
#[inline]
pub fn render_display_row(
    row: &mut TableRow<'_, '_>,
    data: &DisplayRow,
    actions_enabled: bool,
) -> Option<RowAction> {
    let mut action = None;

    for cell in &data.cells {
        row.col(|ui| {
            ui.label(cell);
        });
    }
    row.col(|ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(actions_enabled, egui::Button::new("Editar"))
                .clicked()
            {
                action = Some(RowAction::Edit);
            }
            if ui
                .add_enabled(actions_enabled, egui::Button::new("Deletar"))
                .clicked()
            {
                action = Some(RowAction::Delete);
            }
        });
    });

    action
}

/// Renders the editing row: one editor widget per field kind, with the
/// draft buffers as the backing store. Returns true when "Confirmar"
/// was clicked.
#[inline]
pub fn render_editing_row(
    row: &mut TableRow<'_, '_>,
    fields: &[FieldSpec],
    draft: &mut RowDraft,
    drivers: &[Driver],
) -> bool {
    let mut confirm = false;

    for (index, field) in fields.iter().enumerate() {
        row.col(|ui| {
            render_editor_cell(ui, field, index, draft, drivers);
        });
    }
    row.col(|ui| {
        ui.horizontal(|ui| {
            if draft.in_flight {
                ui.add_enabled(false, egui::Button::new("Confirmar"));
                ui.spinner();
            } else if ui.button("Confirmar").clicked() {
                confirm = true;
            }
            // Deleting the row being edited makes no sense; the button
            // stays visible but inert, like every other locked action.
            ui.add_enabled(false, egui::Button::new("Deletar"));
        });
    });

    confirm
}

#[inline]
fn render_editor_cell(
    ui: &mut Ui,
    field: &FieldSpec,
    index: usize,
    draft: &mut RowDraft,
    drivers: &[Driver],
) {
    match field.kind {
        // Immutable fields keep their display text; the draft carries
        // it so the row still reads complete.
        FieldKind::Immutable => {
            ui.label(draft.input(index));
        }
        FieldKind::Text | FieldKind::Number { .. } => {
            if let Some(input) = draft.input_mut(index) {
                ui.text_edit_singleline(input);
            }
        }
        FieldKind::Choice(source) => {
            let selected = draft.input(index).to_owned();
            let salt = (draft.table.endpoint(), draft.id, field.key);
            let Some(input) = draft.input_mut(index) else {
                return;
            };
            egui::ComboBox::from_id_salt(salt)
                .selected_text(selected)
                .width(ui.available_width())
                .show_ui(ui, |ui| match source {
                    ChoiceSource::RideStatus => {
                        for status in RideStatus::OPTIONS {
                            ui.selectable_value(
                                input,
                                status.label().to_owned(),
                                status.label(),
                            );
                        }
                    }
                    ChoiceSource::Driver => {
                        // The label carries the id for disambiguation;
                        // the stored value is the bare name.
                        for driver in drivers {
                            ui.selectable_value(
                                input,
                                driver.nome.clone(),
                                driver.option_label(),
                            );
                        }
                    }
                });
        }
    }
}
