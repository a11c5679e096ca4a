//! Login page for unauthenticated admins.

use egui::{Align, Layout, Ui};

use carona_admin_business::session;

use crate::state::State;
use crate::widgets::COLOR_RED;

/// Renders the centered login form. Also shown, with a spinner, while a
/// login or a persisted-token check is in flight.
pub fn login_page(ctx: &egui::Context, state: &mut State) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(40.0);
            ui.heading("Caronas - Painel Administrativo");
            ui.add_space(40.0);

            if state.session.is_busy() {
                ui.spinner();
                ui.label("Entrando...");
                return;
            }

            show_login_form(ui, state);
        });
    });
}

fn show_login_form(ui: &mut Ui, state: &mut State) {
    if let Some(error) = state.session.error() {
        ui.colored_label(COLOR_RED, error);
        ui.add_space(8.0);
    }

    let mut should_login = false;

    ui.horizontal(|ui| {
        ui.label("Email:");
        ui.text_edit_singleline(&mut state.session.form.email);
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Senha:");
        let senha_response = ui.add(
            egui::TextEdit::singleline(&mut state.session.form.senha).password(true),
        );
        // Enter in the password field submits.
        if senha_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            should_login = true;
        }
    });

    ui.add_space(16.0);

    let can_login =
        !state.session.form.email.trim().is_empty() && !state.session.form.senha.is_empty();
    if ui
        .add_enabled(can_login, egui::Button::new("Entrar"))
        .clicked()
    {
        should_login = true;
    }

    if should_login && can_login {
        state.session.begin_login();
        session::login(
            &state.config,
            &state.session.form,
            &state.session_tx,
            ui.ctx(),
        );
    }
}
