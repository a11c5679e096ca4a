//! Admin tables: initial loads, row rendering, and section switching.

use carona_admin_business::TableKind;
use kittest::Queryable;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{TEST_TOKEN, TestCtx, rides_body, users_body};

mod common;

/// Tests that the users table renders the fetched rows after sign-in.
#[tokio::test]
async fn test_users_table_renders_fetched_rows() {
    let mut ctx = TestCtx::new_signed_in().await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label_contains("Nome").is_some(),
        "users header should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Ana Lima").is_some(),
        "first user row should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Bruno Costa").is_some(),
        "second user row should be displayed"
    );
    assert!(
        harness.query_by_label_contains("15/01/2024").is_some(),
        "creation date should render as DD/MM/YYYY"
    );
    assert!(
        harness.query_by_label_contains("21999990001").is_some(),
        "phone column should be displayed"
    );
}

/// Tests that switching to the rides section shows the rides table.
#[tokio::test]
async fn test_switching_section_shows_rides_table() {
    let mut ctx = TestCtx::new_signed_in().await;
    ctx.settle().await;

    {
        let harness = ctx.harness_mut();
        if let Some(nav) = harness.query_by_label_contains("Caronas") {
            nav.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label_contains("Campus UFRJ").is_some(),
        "ride departure should be displayed"
    );
    assert!(
        harness.query_by_label_contains("20/05/2024").is_some(),
        "departure date column should derive from the timestamp"
    );
    assert!(
        harness.query_by_label_contains("17:45").is_some(),
        "departure time column should derive from the timestamp"
    );
    assert!(
        harness
            .query_by_label_contains("bruno@exemplo.com")
            .is_none(),
        "user rows should be gone after the switch"
    );
    assert_eq!(
        harness.state().state().admin.section,
        TableKind::Rides,
        "active section should be rides"
    );
}

/// Tests the fetches fired by sign-in: the users endpoint answers both
/// the table and the driver dropdown, the rides endpoint answers once,
/// and no repeat fetch happens on subsequent renders.
#[tokio::test]
async fn test_initial_load_fetches_each_endpoint_expected_times() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/usuarios"))
        .and(header("x-access-token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/caronas"))
        .and(header("x-access-token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(rides_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::signed_in_with(mock_server);
    ctx.settle().await;

    // Extra frames to catch a stray repeat fetch.
    for _ in 0..5 {
        ctx.harness_mut().step();
    }

    // The mock expectations verify the call counts when the server drops.
}

/// Tests that a failing list load shows the error banner instead of rows.
#[tokio::test]
async fn test_failed_list_load_shows_error_banner() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/usuarios"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/caronas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rides_body()))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::signed_in_with(mock_server);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness
            .query_by_label_contains("Erro ao carregar dados")
            .is_some(),
        "error banner should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Ana Lima").is_none(),
        "no rows should render after a failed load"
    );
}
