//! The admin page: section navigation, the active table, and the
//! blocking dialogs.

use carona_admin_business::TableKind;

use crate::state::State;
use crate::widgets::{dialogs, table};

pub fn admin_page(ctx: &egui::Context, state: &mut State) {
    let section = state.admin.section;

    egui::TopBottomPanel::top("admin_nav").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for table in [TableKind::Users, TableKind::Rides] {
                if ui
                    .selectable_label(section == table, table.title())
                    .clicked()
                {
                    state.admin.request_switch_section(table);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Sair").clicked() {
                    state.admin.request_logout();
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(section.title());
        ui.add_space(8.0);

        let actions = table::admin_table(ui, &mut state.admin);
        for action in actions {
            match action {
                table::TableAction::Sort(column) => state.admin.sort_clicked(column),
                table::TableAction::Edit(id) => state.admin.begin_edit(section, id),
                table::TableAction::Delete(id) => state.admin.request_delete(section, id),
                table::TableAction::ConfirmEdit => {
                    if let Some(update) = state.admin.confirm_edit() {
                        state.fire_update(ui.ctx(), &update);
                    }
                }
            }
        }
    });

    dialogs::alert_dialog(ctx, &mut state.admin);
    if let Some(accepted) = dialogs::confirm_dialog(ctx, &mut state.admin) {
        state.apply_accepted(ctx, accepted);
    }
}
