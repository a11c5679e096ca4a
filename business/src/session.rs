//! Authentication state and flow.
//!
//! Tracks the login form, the token, and where the app should be
//! routed. HTTP outcomes arrive as [`SessionEvent`]s over a channel so
//! the UI thread applies them between frames.

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::http::ApiError;

/// Shown on the login page when a persisted token is rejected.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Seu token expirou! Faça login novamente.";

const LOGIN_FALLBACK_ERROR: &str = "Erro no login";

/// Request payload for `POST /auth/login`.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

/// Response from the login endpoint; exactly one of the fields is set.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
    error: Option<String>,
}

/// Response from `GET /auth/validate-token`.
#[derive(Debug, Deserialize)]
struct ValidateTokenResponse {
    valid: bool,
}

/// Editable fields of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    SignedOut,
    /// Login request in flight.
    Authenticating,
    /// Persisted token check in flight.
    Validating { token: String },
    Authenticated { token: String },
    /// Login or validation failed; the message shows on the login form.
    Failed { message: String },
}

/// The page the app should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Admin,
}

/// Outcome of a persisted-token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCheck {
    Valid,
    /// The backend explicitly answered `valid: false`.
    Expired,
    /// The check never got a usable answer; drop the token silently.
    Unreachable,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoginFinished(Result<String, ApiError>),
    TokenChecked(TokenCheck),
}

pub type SessionEventSender = flume::Sender<SessionEvent>;
pub type SessionEventReceiver = flume::Receiver<SessionEvent>;

pub fn create_session_channel() -> (SessionEventSender, SessionEventReceiver) {
    flume::unbounded()
}

#[derive(Debug, Default)]
pub struct Session {
    pub phase: AuthPhase,
    pub form: LoginForm,
}

impl Session {
    /// Session restored from a persisted token, pending validation.
    pub fn resume(token: String) -> Self {
        Self {
            phase: AuthPhase::Validating { token },
            form: LoginForm::default(),
        }
    }

    pub fn route(&self) -> Route {
        match self.phase {
            AuthPhase::Authenticated { .. } => Route::Admin,
            _ => Route::Login,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated { .. })
    }

    /// Error to show on the login form, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// True while a login or token check is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            AuthPhase::Authenticating | AuthPhase::Validating { .. }
        )
    }

    /// Flips to `Authenticating`; call right before firing [`login`].
    pub fn begin_login(&mut self) {
        self.phase = AuthPhase::Authenticating;
    }

    /// Drops an authenticated session whose token the backend rejected.
    pub fn expire(&mut self) {
        info!("session expired, returning to login");
        self.phase = AuthPhase::Failed {
            message: TOKEN_EXPIRED_MESSAGE.to_owned(),
        };
    }

    pub fn sign_out(&mut self) {
        info!("signed out");
        *self = Self::default();
    }

    /// Applies a finished HTTP outcome. Returns `true` when the event
    /// completed authentication, so the caller can start the data loads.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::LoginFinished(Ok(token)) => {
                info!("login succeeded");
                self.form.senha.clear();
                self.phase = AuthPhase::Authenticated { token };
                true
            }
            SessionEvent::LoginFinished(Err(err)) => {
                error!("login failed: {err}");
                self.phase = AuthPhase::Failed {
                    message: err.to_string(),
                };
                false
            }
            SessionEvent::TokenChecked(check) => {
                let AuthPhase::Validating { token } = &self.phase else {
                    return false;
                };
                match check {
                    TokenCheck::Valid => {
                        info!("persisted token accepted");
                        self.phase = AuthPhase::Authenticated {
                            token: token.clone(),
                        };
                        true
                    }
                    TokenCheck::Expired => {
                        info!("persisted token expired");
                        self.phase = AuthPhase::Failed {
                            message: TOKEN_EXPIRED_MESSAGE.to_owned(),
                        };
                        false
                    }
                    TokenCheck::Unreachable => {
                        info!("token check failed, dropping persisted token");
                        self.phase = AuthPhase::SignedOut;
                        false
                    }
                }
            }
        }
    }
}

/// Fires the credential check against `POST /auth/login`. The outcome
/// lands on the session channel.
pub fn login(
    config: &AppConfig,
    form: &LoginForm,
    tx: &SessionEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/login", config.auth_api());
    let body = match serde_json::to_vec(&LoginRequest {
        email: form.email.trim(),
        senha: &form.senha,
    }) {
        Ok(body) => body,
        Err(err) => {
            error!("failed to serialize login request: {err}");
            let event = SessionEvent::LoginFinished(Err(ApiError::Transport(err.to_string())));
            if tx.send(event).is_err() {
                error!("session channel closed before the login result arrived");
            }
            return;
        }
    };

    let mut request = ehttp::Request::post(&url, body);
    request.headers.insert("Content-Type", "application/json");

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        let outcome = match result {
            Ok(response) => match serde_json::from_slice::<LoginResponse>(&response.bytes) {
                Ok(LoginResponse {
                    token: Some(token), ..
                }) => Ok(token),
                Ok(LoginResponse { error, .. }) => Err(ApiError::Backend(
                    error.unwrap_or_else(|| LOGIN_FALLBACK_ERROR.to_owned()),
                )),
                Err(_) => Err(ApiError::Backend(LOGIN_FALLBACK_ERROR.to_owned())),
            },
            Err(err) => Err(ApiError::Transport(err)),
        };
        if tx.send(SessionEvent::LoginFinished(outcome)).is_err() {
            error!("session channel closed before the login result arrived");
        }
    });
}

/// Checks a persisted token against `GET /auth/validate-token`.
pub fn validate_token(
    config: &AppConfig,
    token: &str,
    tx: &SessionEventSender,
    egui_ctx: &egui::Context,
) {
    let url = format!("{}/validate-token", config.auth_api());
    let mut request = ehttp::Request::get(&url);
    request.headers.insert("x-access-token", token);

    let tx = tx.clone();
    let egui_ctx = egui_ctx.clone();
    ehttp::fetch(request, move |result| {
        egui_ctx.request_repaint();
        let check = match result {
            Ok(response) if response.ok => {
                match serde_json::from_slice::<ValidateTokenResponse>(&response.bytes) {
                    Ok(body) if body.valid => TokenCheck::Valid,
                    Ok(_) => TokenCheck::Expired,
                    Err(err) => {
                        error!("unreadable validate-token response: {err}");
                        TokenCheck::Unreachable
                    }
                }
            }
            Ok(response) => {
                info!("token validation returned status {}", response.status);
                TokenCheck::Unreachable
            }
            Err(err) => {
                error!("token validation failed: {err}");
                TokenCheck::Unreachable
            }
        };
        if tx.send(SessionEvent::TokenChecked(check)).is_err() {
            error!("session channel closed before the token check arrived");
        }
    });
}
