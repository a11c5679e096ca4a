use carona_admin_business::{AuthPhase, Route, session};

use crate::{TOKEN_STORAGE_KEY, pages, state::State};

pub struct CaronaAdminApp {
    pub state: State,
    /// Tracks whether the persisted token's validation request has been
    /// fired yet.
    validation_started: bool,
    /// Tracks whether the admin page's initial fetches have been fired
    /// for the current sign-in.
    admin_loaded: bool,
}

impl CaronaAdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            validation_started: false,
            admin_loaded: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Drains the event channels filled by the `ehttp` callbacks and
    /// feeds the state machines.
    fn pump_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.state.session_rx.try_recv() {
            let _ = self.state.session.apply(event);
        }
        while let Ok(event) = self.state.admin_rx.try_recv() {
            if event.is_unauthorized() {
                self.state.expire();
                continue;
            }
            let effects = self.state.admin.apply(event);
            self.state.run_effects(ctx, effects);
        }
    }

    /// Fires the once-per-transition requests: token validation after a
    /// resume, the initial table loads after a sign-in.
    fn start_pending_requests(&mut self, ctx: &egui::Context) {
        if let AuthPhase::Validating { token } = &self.state.session.phase
            && !self.validation_started
        {
            self.validation_started = true;
            session::validate_token(&self.state.config, token, &self.state.session_tx, ctx);
        }

        if self.state.session.is_authenticated() {
            if !self.admin_loaded {
                self.admin_loaded = true;
                let effects = self.state.admin.initial_load();
                self.state.run_effects(ctx, effects);
            }
        } else {
            self.admin_loaded = false;
        }
    }
}

impl eframe::App for CaronaAdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_events(ctx);
        self.start_pending_requests(ctx);

        match self.state.session.route() {
            Route::Login => pages::login_page(ctx, &mut self.state),
            Route::Admin => pages::admin_page(ctx, &mut self.state),
        }
    }

    /// Persists the token (or its absence) so a restart can resume the
    /// session. On web this lands in browser local storage. A token
    /// still being validated is kept; an autosave during the startup
    /// check must not wipe it.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let token = match &self.state.session.phase {
            AuthPhase::Authenticated { token } | AuthPhase::Validating { token } => token.as_str(),
            _ => "",
        };
        storage.set_string(TOKEN_STORAGE_KEY, token.to_owned());
    }
}
