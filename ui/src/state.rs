use carona_admin_business::{
    Accepted, AdminEventReceiver, AdminEventSender, AdminState, AppConfig, Effect, Session,
    SessionEventReceiver, SessionEventSender, TableKind, UpdateRequest, admin,
    create_admin_channel, create_session_channel,
};

/// The main application state: config, the two state machines, and the
/// channels their HTTP outcomes arrive on.
///
/// Note: We manually implement Default because the event channels
/// don't implement Default.
pub struct State {
    pub config: AppConfig,
    pub session: Session,
    pub admin: AdminState,
    pub session_tx: SessionEventSender,
    pub session_rx: SessionEventReceiver,
    pub admin_tx: AdminEventSender,
    pub admin_rx: AdminEventReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::with_session(AppConfig::default(), Session::default())
    }
}

impl State {
    fn with_session(config: AppConfig, session: Session) -> Self {
        let (session_tx, session_rx) = create_session_channel();
        let (admin_tx, admin_rx) = create_admin_channel();

        Self {
            config,
            session,
            admin: AdminState::default(),
            session_tx,
            session_rx,
            admin_tx,
            admin_rx,
        }
    }

    /// State restored from a persisted token; the token still has to be
    /// validated before the admin page shows.
    pub fn resume(token: String) -> Self {
        Self::with_session(AppConfig::default(), Session::resume(token))
    }

    pub fn test(base_url: String) -> Self {
        Self::with_session(AppConfig::new(base_url), Session::default())
    }

    /// Fires the fetches a state transition asked for. A missing token
    /// means the session ended mid-flight; the effects are dropped.
    pub fn run_effects(&mut self, egui_ctx: &egui::Context, effects: Vec<Effect>) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        for effect in effects {
            match effect {
                Effect::FetchUsers => {
                    admin::api::fetch_users(&self.config, &token, &self.admin_tx, egui_ctx);
                }
                Effect::FetchRides => {
                    admin::api::fetch_rides(&self.config, &token, &self.admin_tx, egui_ctx);
                }
                Effect::FetchDrivers => {
                    admin::api::fetch_drivers(&self.config, &token, &self.admin_tx, egui_ctx);
                }
            }
        }
    }

    /// Fires the PUT for a confirmed draft.
    pub fn fire_update(&self, egui_ctx: &egui::Context, update: &UpdateRequest) {
        if let Some(token) = self.session.token() {
            admin::api::update_row(&self.config, token, update, &self.admin_tx, egui_ctx);
        }
    }

    /// Fires the DELETE for a confirmed row removal.
    pub fn fire_delete(&self, egui_ctx: &egui::Context, table: TableKind, id: i64) {
        if let Some(token) = self.session.token() {
            admin::api::delete_row(&self.config, token, table, id, &self.admin_tx, egui_ctx);
        }
    }

    /// Runs what the accepted confirm dialog asked for.
    pub fn apply_accepted(&mut self, egui_ctx: &egui::Context, accepted: Accepted) {
        match accepted {
            Accepted::None => {}
            Accepted::Delete { table, id } => self.fire_delete(egui_ctx, table, id),
            Accepted::Refresh(effects) => self.run_effects(egui_ctx, effects),
            Accepted::SignOut => self.sign_out(),
        }
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.admin = AdminState::default();
    }

    /// The backend rejected the token mid-session.
    pub fn expire(&mut self) {
        self.session.expire();
        self.admin = AdminState::default();
    }
}
