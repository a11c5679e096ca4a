//! Login page flow: form rendering, successful sign-in, and backend
//! rejections surfacing on the form.

use kittest::Queryable;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TEST_TOKEN, TestCtx};

mod common;

/// Tests that the login form is displayed with all expected elements.
#[tokio::test]
async fn test_login_form_displayed() {
    let mut ctx = TestCtx::new_app().await;

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness
            .query_by_label_contains("Caronas - Painel Administrativo")
            .is_some(),
        "heading should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Email").is_some(),
        "Email field should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Senha").is_some(),
        "Senha field should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Entrar").is_some(),
        "Entrar button should be displayed"
    );
}

/// Tests the happy path: valid credentials reach the admin page and the
/// tables load.
#[tokio::test]
async fn test_login_success_reaches_admin_page() {
    let mut ctx = TestCtx::new_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "admin@exemplo.com",
            "senha": "s3cret"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": TEST_TOKEN })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness.step();

        let form = &mut harness.state_mut().state_mut().session.form;
        form.email = "admin@exemplo.com".to_owned();
        form.senha = "s3cret".to_owned();
        harness.step();

        if let Some(button) = harness.query_by_label_contains("Entrar") {
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label_contains("Sair").is_some(),
        "admin page should show after login"
    );
    assert!(
        harness.query_by_label_contains("Ana Lima").is_some(),
        "user rows should load after login"
    );
    assert!(
        harness.query_by_label_contains("Entrar").is_none(),
        "login form should be gone after login"
    );
}

/// Tests that a backend rejection keeps the login page up and shows the
/// server's message.
#[tokio::test]
async fn test_login_failure_shows_backend_message() {
    let mut ctx = TestCtx::new_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "Credenciais inválidas" })),
        )
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness.step();

        let form = &mut harness.state_mut().state_mut().session.form;
        form.email = "admin@exemplo.com".to_owned();
        form.senha = "errada".to_owned();
        harness.step();

        if let Some(button) = harness.query_by_label_contains("Entrar") {
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness
            .query_by_label_contains("Credenciais inválidas")
            .is_some(),
        "backend error message should show on the form"
    );
    assert!(
        harness.query_by_label_contains("Entrar").is_some(),
        "login form should still be displayed"
    );
}

/// Tests that a login response without a token falls back to the
/// generic error message.
#[tokio::test]
async fn test_login_malformed_response_falls_back_to_generic_error() {
    let mut ctx = TestCtx::new_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness.step();

        let form = &mut harness.state_mut().state_mut().session.form;
        form.email = "admin@exemplo.com".to_owned();
        form.senha = "s3cret".to_owned();
        harness.step();

        if let Some(button) = harness.query_by_label_contains("Entrar") {
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label_contains("Erro no login").is_some(),
        "fallback error message should show on the form"
    );
}
