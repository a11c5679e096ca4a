//! Header row rendering with sort handling.

use carona_admin_business::{ColumnSort, FieldSpec, SortDir, schema::ACTIONS_LABEL};
use egui::Ui;
use egui_extras::TableRow;

/// Renders the header row. Sortable columns are clickable and the
/// active one carries a direction indicator; returns the clicked column
/// index, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    fields: &[FieldSpec],
    sort: Option<ColumnSort>,
) -> Option<usize> {
    let mut clicked = None;

    for (index, field) in fields.iter().enumerate() {
        header.col(|ui| {
            if field.sort.is_some() {
                if render_sortable_header_cell(ui, field.label, index, sort) {
                    clicked = Some(index);
                }
            } else {
                render_header_cell(ui, field.label);
            }
        });
    }
    header.col(|ui| {
        render_header_cell(ui, ACTIONS_LABEL);
    });

    clicked
}

/// Renders a single header cell with centered, bold text.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}

#[inline]
fn render_sortable_header_cell(
    ui: &mut Ui,
    label: &str,
    index: usize,
    sort: Option<ColumnSort>,
) -> bool {
    let active = sort.filter(|s| s.column == index);
    let text = match active.map(|s| s.dir) {
        Some(SortDir::Asc) => format!("{label} ▲"),
        Some(SortDir::Desc) => format!("{label} ▼"),
        None => label.to_owned(),
    };
    ui.centered_and_justified(|ui| {
        ui.selectable_label(active.is_some(), egui::RichText::new(text).strong())
            .clicked()
    })
    .inner
}
