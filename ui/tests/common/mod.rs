//! Shared harness setup for the integration tests: a wiremock backend
//! plus an `egui_kittest` harness driving the full app.

use carona_admin_business::AuthPhase;
use carona_admin_ui::CaronaAdminApp;
use carona_admin_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token carried by the signed-in test sessions; every mocked admin
/// call is expected to present it.
pub const TEST_TOKEN: &str = "test-token";

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    harness: Harness<'a, CaronaAdminApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, CaronaAdminApp> {
        &mut self.harness
    }

    /// Signed-out app against a backend with both admin list endpoints
    /// already mounted.
    #[allow(unused)]
    pub async fn new_app() -> TestCtx<'a> {
        let mock_server = start_backend().await;
        let state = State::test(mock_server.uri());
        Self::from_parts(mock_server, state)
    }

    /// App already past login, so the first frames fire the initial
    /// table loads against the mounted list endpoints.
    #[allow(unused)]
    pub async fn new_signed_in() -> TestCtx<'a> {
        let mock_server = start_backend().await;
        Self::signed_in_with(mock_server)
    }

    /// App restored with a persisted token. The validation endpoint
    /// answers with the given template; it is mounted before the first
    /// frame fires the check.
    #[allow(unused)]
    pub async fn new_resumed(validation: ResponseTemplate) -> TestCtx<'a> {
        let mock_server = start_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/validate-token"))
            .respond_with(validation)
            .mount(&mock_server)
            .await;

        let mut state = State::test(mock_server.uri());
        state.session.phase = AuthPhase::Validating {
            token: TEST_TOKEN.to_owned(),
        };
        Self::from_parts(mock_server, state)
    }

    /// Signed-in app over a server the test has already mounted its own
    /// endpoint behaviors on. Use when the canned list responses from
    /// [`start_backend`] do not fit.
    #[allow(unused)]
    pub fn signed_in_with(mock_server: MockServer) -> TestCtx<'a> {
        init_test_logger();
        let mut state = State::test(mock_server.uri());
        state.session.phase = AuthPhase::Authenticated {
            token: TEST_TOKEN.to_owned(),
        };
        Self::from_parts(mock_server, state)
    }

    fn from_parts(mock_server: MockServer, state: State) -> TestCtx<'a> {
        let app = CaronaAdminApp::new(state);
        let harness = Harness::new_eframe(|_| app);
        TestCtx {
            mock_server,
            harness,
        }
    }

    /// Steps the harness with short waits so in-flight HTTP work lands
    /// and the frames after it settle.
    #[allow(unused)]
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.harness.step();
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            for _ in 0..3 {
                self.harness.step();
            }
        }
    }
}

/// The user rows the mocked `GET /api/admin/usuarios` returns.
#[allow(unused)]
pub fn users_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "nome": "Ana Lima",
            "email": "ana@exemplo.com",
            "telefone": "21999990001",
            "criado_em": "2024-01-15T08:30:00.000Z"
        },
        {
            "id": 2,
            "nome": "Bruno Costa",
            "email": "bruno@exemplo.com",
            "telefone": null,
            "criado_em": null
        }
    ])
}

/// The ride rows the mocked `GET /api/admin/caronas` returns.
#[allow(unused)]
pub fn rides_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 3,
            "motorista": "Ana Lima",
            "local_partida": "Campus UFRJ",
            "destino": "Centro",
            "horario": "2024-05-20T17:45:00.000Z",
            "vagas_disponiveis": 2,
            "status": "Ativa"
        }
    ])
}

/// Starts a mock backend with both list endpoints mounted. The users
/// endpoint also backs the driver dropdown, so it answers an unbounded
/// number of calls.
#[allow(unused)]
pub async fn start_backend() -> MockServer {
    init_test_logger();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/usuarios"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/caronas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rides_body()))
        .mount(&mock_server)
        .await;

    mock_server
}

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
