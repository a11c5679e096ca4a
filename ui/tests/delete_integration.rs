//! Row deletion: the confirm dialog gates the DELETE, declining makes
//! no call, and a failure surfaces the fallback message.

use carona_admin_business::TableKind;
use kittest::Queryable;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TEST_TOKEN, TestCtx};

mod common;

/// Tests that accepting the confirm fires the DELETE and the table
/// refetches afterwards.
#[tokio::test]
async fn test_accepted_delete_fires_and_refetches() {
    let mut ctx = TestCtx::new_signed_in().await;
    ctx.settle().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/usuarios/2"))
        .and(header("x-access-token", TEST_TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Usuário removido" })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness
            .state_mut()
            .state_mut()
            .admin
            .request_delete(TableKind::Users, 2);
        harness.step();

        assert!(
            harness
                .query_by_label_contains("Tem certeza que deseja excluir este usuário?")
                .is_some(),
            "delete confirm should be displayed"
        );

        eprintln!("DBG tree: {:#?}", harness.node());
        let btn = harness.query_by_label_contains("Confirmar");
        eprintln!("DBG button found: {}", btn.is_some());
        if let Some(button) = btn {
            eprintln!("DBG node: {button:?}");
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    eprintln!("DBG confirm after settle: {:?}", harness.state().state().admin.confirm);
    assert!(
        harness
            .query_by_label_contains("Usuário deletado com sucesso!")
            .is_some(),
        "success alert should be displayed"
    );
}

/// Tests that declining the confirm makes no network call.
#[tokio::test]
async fn test_declined_delete_makes_no_call() {
    let mut ctx = TestCtx::new_signed_in().await;
    ctx.settle().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/usuarios/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness
            .state_mut()
            .state_mut()
            .admin
            .request_delete(TableKind::Users, 2);
        harness.step();

        if let Some(button) = harness.query_by_label_contains("Cancelar") {
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.state().state().admin.confirm.is_none(),
        "declining should clear the staged confirm"
    );
    assert!(
        harness.query_by_label_contains("Ana Lima").is_some(),
        "rows should still be displayed"
    );
}

/// Tests that a failed delete surfaces the fallback message.
#[tokio::test]
async fn test_failed_delete_shows_fallback_message() {
    let mut ctx = TestCtx::new_signed_in().await;
    ctx.settle().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/usuarios/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.mock_server)
        .await;

    {
        let harness = ctx.harness_mut();
        harness
            .state_mut()
            .state_mut()
            .admin
            .request_delete(TableKind::Users, 2);
        harness.step();

        if let Some(button) = harness.query_by_label_contains("Confirmar") {
            button.click();
        }
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness
            .query_by_label_contains("Erro ao excluir usuário.")
            .is_some(),
        "fallback delete error should be displayed"
    );
}
