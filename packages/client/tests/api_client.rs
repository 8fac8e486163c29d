//! Client integration tests against an in-process server.

use std::sync::Arc;

use tokio::net::TcpListener;
use uniborrow_client::{ClientError, api::ApiClient, concierge::ConciergeConnection};
use uniborrow_server::{
    domain::{Category, CatalogView},
    infrastructure::dto::http::SignUpRequestDto,
    ui::{AppState, create_router},
};

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let state = Arc::new(AppState::offline());
    tokio::spawn(async move {
        axum::serve(listener, create_router(state))
            .await
            .expect("Test server failed");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_catalog_filtered_locally() {
    // テスト項目: 取得したカタログをローカルで絞り込める
    // given (前提条件):
    let base_url = start_server().await;
    let api = ApiClient::new(reqwest::Client::new(), &base_url);
    let mut view = CatalogView::new(api.listings().await.unwrap());

    // when (操作):
    view.set_category(Some(Category::Photography));

    // then (期待する結果):
    let names: Vec<&str> = view.visible().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Canon EOS R5"]);

    // when (操作): 一致しない検索語
    view.set_category(None);
    view.set_search("zzz");

    // then (期待する結果):
    assert!(view.is_empty_result());
}

#[tokio::test]
async fn test_sign_up_me_sign_out() {
    // テスト項目: サインアップ後にプロフィールを取得でき、サインアウト後は未サインイン扱いになる
    // given (前提条件):
    let base_url = start_server().await;
    let mut api = ApiClient::new(reqwest::Client::new(), &base_url);

    // when (操作):
    let user = api
        .sign_up(SignUpRequestDto {
            name: "Ann Lee".to_string(),
            email: "ann@university.edu".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        })
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(user.unwrap().name, "Ann Lee");
    assert!(api.is_signed_in());
    assert_eq!(api.me().await.unwrap().name, "Ann Lee");

    api.sign_out().await.unwrap();
    assert!(matches!(api.me().await, Err(ClientError::NotSignedIn)));
}

#[tokio::test]
async fn test_sign_in_error_is_verbatim() {
    // テスト項目: サーバーのエラーメッセージがそのまま表示用に返される
    // given (前提条件):
    let base_url = start_server().await;
    let mut api = ApiClient::new(reqwest::Client::new(), &base_url);

    // when (操作):
    let result = api.sign_in("nobody@university.edu", "secret1").await;

    // then (期待する結果):
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Invalid login credentials");
    assert!(!api.is_signed_in());
}

#[tokio::test]
async fn test_concierge_falls_back_offline() {
    // テスト項目: 推薦サービスがない場合、コンシェルジュはフォールバック文言を返す
    // given (前提条件):
    let base_url = start_server().await;
    let mut connection = ConciergeConnection::connect(&base_url).await.unwrap();
    assert_eq!(connection.transcript().len(), 1);

    // when (操作):
    let mut typing_seen = false;
    let reply = connection
        .ask("I need something for hiking", || typing_seen = true)
        .await
        .unwrap();

    // then (期待する結果):
    assert!(typing_seen);
    assert_eq!(
        reply.content,
        "I'm not sure how to help with that. Try searching the main catalog!"
    );
    assert_eq!(connection.transcript().len(), 3);
}

#[tokio::test]
async fn test_concierge_blank_message_rejected() {
    // テスト項目: 空白のみのメッセージはサーバーに拒否される
    // given (前提条件):
    let base_url = start_server().await;
    let mut connection = ConciergeConnection::connect(&base_url).await.unwrap();

    // when (操作):
    let result = connection.ask("  ", || {}).await;

    // then (期待する結果):
    assert!(matches!(result, Err(ClientError::Rejected(_))));
    assert_eq!(connection.transcript().len(), 1);
}
