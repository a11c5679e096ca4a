//! Blocking dialogs: the alert queue and the staged confirm.
//!
//! Both render as `egui::Modal`, so everything behind them stops
//! reacting until the admin answers, the way the original page's
//! `alert`/`confirm` calls blocked it.

use carona_admin_business::{Accepted, AdminState};
use egui::{Id, Modal};

/// Shows the front of the alert queue, if any. "OK" pops it; the next
/// queued alert (if any) shows on the following frame.
pub fn alert_dialog(ctx: &egui::Context, admin: &mut AdminState) {
    let Some(message) = admin.alert().map(str::to_owned) else {
        return;
    };

    Modal::new(Id::new("admin_alert")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(message);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                admin.dismiss_alert();
            }
        });
    });
}

/// Shows the staged confirm, if any. Returns what the acceptance asks
/// the caller to do; `None` while the dialog stays open or was
/// declined.
pub fn confirm_dialog(ctx: &egui::Context, admin: &mut AdminState) -> Option<Accepted> {
    // The alert dialog renders on top; answer it first.
    if admin.alert().is_some() {
        return None;
    }
    let confirm = admin.confirm?;

    let mut accepted = None;
    Modal::new(Id::new("admin_confirm")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(confirm.message());
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Confirmar").clicked() {
                accepted = Some(admin.accept_confirm());
            }
            if ui.button("Cancelar").clicked() {
                admin.decline_confirm();
            }
        });
    });
    accepted
}
