//! Hosted authentication and profile store over its REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::{
    domain::{
        Identity, IdentityProvider, ProfileRecord, ProfileRepository, ProviderError,
        ProviderSession, RepositoryError,
    },
    infrastructure::dto::supabase::{
        ErrorBodyDto, PasswordGrantRequest, SignUpMetadata, SignUpRequest, SignUpResponseDto,
        TokenResponseDto, UserDto,
    },
};

/// Client for the authentication (`/auth/v1`) and data (`/rest/v1`) APIs.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(http: Client, base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.anon_key)
    }

    fn authorized(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        self.with_key(request).bearer_auth(access_token)
    }

    /// Turn a non-success response into the provider's own message.
    async fn error_from(response: Response) -> ProviderError {
        let status = response.status();
        let body = response.json::<ErrorBodyDto>().await.unwrap_or_default();
        let message = body
            .into_message()
            .unwrap_or_else(|| format!("Authentication failed ({status})"));
        tracing::debug!("Identity provider returned {}: {}", status, message);
        ProviderError::new(message)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Identity provider unreachable: {}", e);
            ProviderError::new(format!("Unable to reach the authentication service: {e}"))
        })?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response)
    }

    fn malformed(e: reqwest::Error) -> ProviderError {
        tracing::warn!("Malformed identity provider response: {}", e);
        ProviderError::new("Unexpected response from the authentication service")
    }
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let request = self
            .with_key(self.http.post(self.url("/auth/v1/token")))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantRequest { email, password });

        let token: TokenResponseDto = Self::send(request)
            .await?
            .json()
            .await
            .map_err(Self::malformed)?;

        Ok(ProviderSession {
            identity: token.user.into(),
            access_token: token.access_token,
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        let request = self
            .with_key(self.http.post(self.url("/auth/v1/signup")))
            .json(&SignUpRequest {
                email,
                password,
                data: SignUpMetadata { name: display_name },
            });

        let response: SignUpResponseDto = Self::send(request)
            .await?
            .json()
            .await
            .map_err(Self::malformed)?;

        Ok(match response {
            SignUpResponseDto::Session(token) => Some(ProviderSession {
                identity: token.user.into(),
                access_token: token.access_token,
            }),
            SignUpResponseDto::PendingConfirmation(user) => {
                tracing::info!("Account '{}' created, confirmation pending", user.id);
                None
            }
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let request = self.authorized(self.http.post(self.url("/auth/v1/logout")), access_token);
        Self::send(request).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError> {
        let request = self.authorized(self.http.get(self.url("/auth/v1/user")), access_token);
        let user: UserDto = Self::send(request)
            .await?
            .json()
            .await
            .map_err(Self::malformed)?;
        Ok(user.into())
    }
}

#[async_trait]
impl ProfileRepository for SupabaseClient {
    async fn find_profile(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        let filter = format!("eq.{user_id}");
        let request = self
            .authorized(self.http.get(self.url("/rest/v1/profiles")), access_token)
            .query(&[("id", filter.as_str()), ("select", "*")]);

        let rows: Vec<ProfileRecord> = Self::send(request)
            .await
            .map_err(|e| RepositoryError::ProfileUnavailable(e.message))?
            .json()
            .await
            .map_err(|e| RepositoryError::ProfileUnavailable(e.to_string()))?;

        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::stub::StubServer;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn client_for(stub: &StubServer) -> SupabaseClient {
        SupabaseClient::new(Client::new(), stub.base_url(), "anon-key")
    }

    fn token_body() -> serde_json::Value {
        json!({
            "access_token": "access-123",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": "u1",
                "email": "ann@university.edu",
                "user_metadata": {"name": "Ann"}
            }
        })
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        // テスト項目: ベース URL 末尾のスラッシュは取り除かれる
        // when (操作):
        let client = SupabaseClient::new(Client::new(), "https://project.supabase.co/", "anon");

        // then (期待する結果):
        assert_eq!(
            client.url("/auth/v1/signup"),
            "https://project.supabase.co/auth/v1/signup"
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_reports_message() {
        // テスト項目: 接続できない場合は人間が読めるエラーメッセージが返される
        // given (前提条件): 何も待ち受けていないポート
        let client = SupabaseClient::new(Client::new(), "http://127.0.0.1:9", "anon");

        // when (操作):
        let result = client.sign_in("a@b.edu", "secret").await;

        // then (期待する結果):
        let err = result.unwrap_err();
        assert!(
            err.message
                .starts_with("Unable to reach the authentication service")
        );
    }

    #[tokio::test]
    async fn test_sign_in_uses_password_grant() {
        // テスト項目: パスワードグラントで API キー付きのリクエストを送り、セッションを返す
        // given (前提条件):
        let stub = StubServer::respond(StatusCode::OK, token_body()).await;

        // when (操作):
        let session = client_for(&stub)
            .sign_in("ann@university.edu", "secret1")
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(session.access_token, "access-123");
        assert_eq!(session.identity.id, "u1");
        assert_eq!(session.identity.display_name.as_deref(), Some("Ann"));

        let request = stub.single_request().await;
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/auth/v1/token");
        assert_eq!(request.query.as_deref(), Some("grant_type=password"));
        assert_eq!(request.header("apikey"), Some("anon-key"));
        assert_eq!(
            request.body,
            json!({"email": "ann@university.edu", "password": "secret1"})
        );
    }

    #[tokio::test]
    async fn test_sign_in_rejection_is_surfaced_verbatim() {
        // テスト項目: 認証失敗時はプロバイダーのメッセージがそのまま返される
        // given (前提条件):
        let stub = StubServer::respond(
            StatusCode::BAD_REQUEST,
            json!({"code": 400, "error_code": "invalid_credentials", "msg": "Invalid login credentials"}),
        )
        .await;

        // when (操作):
        let result = client_for(&stub).sign_in("ann@university.edu", "wrong").await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err().message, "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_error_without_message_reports_status() {
        // テスト項目: メッセージのないエラー応答ではステータスを含む文言になる
        // given (前提条件):
        let stub = StubServer::respond(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;

        // when (操作):
        let result = client_for(&stub).sign_in("ann@university.edu", "secret1").await;

        // then (期待する結果):
        let message = result.unwrap_err().message;
        assert!(message.starts_with("Authentication failed"));
        assert!(message.contains("500"));
    }

    #[tokio::test]
    async fn test_sign_up_sends_display_name_and_returns_session() {
        // テスト項目: サインアップは表示名をメタデータとして送り、即時確認ならセッションを返す
        // given (前提条件):
        let stub = StubServer::respond(StatusCode::OK, token_body()).await;

        // when (操作):
        let session = client_for(&stub)
            .sign_up("ann@university.edu", "secret1", "Ann")
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(session.map(|s| s.access_token).as_deref(), Some("access-123"));

        let request = stub.single_request().await;
        assert_eq!(request.path, "/auth/v1/signup");
        assert_eq!(request.header("apikey"), Some("anon-key"));
        assert_eq!(request.body["data"]["name"], "Ann");
        assert_eq!(request.body["email"], "ann@university.edu");
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation_returns_none() {
        // テスト項目: ユーザーのみが返された場合は確認待ちとして None になる
        // given (前提条件):
        let stub = StubServer::respond(
            StatusCode::OK,
            json!({"id": "u2", "email": "bob@university.edu", "user_metadata": {"name": "Bob"}}),
        )
        .await;

        // when (操作):
        let session = client_for(&stub)
            .sign_up("bob@university.edu", "secret1", "Bob")
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(session, None);
    }

    #[tokio::test]
    async fn test_sign_out_sends_bearer_token() {
        // テスト項目: サインアウトはアクセストークンを Bearer で送る
        // given (前提条件):
        let stub = StubServer::respond(StatusCode::OK, json!({})).await;

        // when (操作):
        let result = client_for(&stub).sign_out("access-123").await;

        // then (期待する結果):
        assert!(result.is_ok());
        let request = stub.single_request().await;
        assert_eq!(request.path, "/auth/v1/logout");
        assert_eq!(request.header("authorization"), Some("Bearer access-123"));
        assert_eq!(request.header("apikey"), Some("anon-key"));
    }

    #[tokio::test]
    async fn test_find_profile_filters_by_user_id() {
        // テスト項目: プロフィールはユーザー ID で絞り込んで取得される
        // given (前提条件):
        let stub = StubServer::respond(
            StatusCode::OK,
            json!([{"id": "u1", "name": "Ann Lee", "avatar": null, "rating": 4.7, "verified": true}]),
        )
        .await;

        // when (操作):
        let profile = client_for(&stub)
            .find_profile("u1", "access-123")
            .await
            .unwrap()
            .unwrap();

        // then (期待する結果):
        assert_eq!(profile.name.as_deref(), Some("Ann Lee"));
        assert_eq!(profile.avatar, None);
        assert_eq!(profile.rating, Some(4.7));
        assert_eq!(profile.verified, Some(true));

        let request = stub.single_request().await;
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/rest/v1/profiles");
        assert!(request.query.as_deref().unwrap().contains("id=eq.u1"));
        assert_eq!(request.header("authorization"), Some("Bearer access-123"));
    }

    #[tokio::test]
    async fn test_find_profile_without_row_returns_none() {
        // テスト項目: 該当行がない場合は None になる
        // given (前提条件):
        let stub = StubServer::respond(StatusCode::OK, json!([])).await;

        // when (操作):
        let profile = client_for(&stub).find_profile("u9", "access-123").await;

        // then (期待する結果):
        assert_eq!(profile, Ok(None));
    }
}
