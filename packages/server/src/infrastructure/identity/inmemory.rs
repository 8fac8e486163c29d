//! In-memory identity provider for local development and tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Identity, IdentityProvider, ProviderError, ProviderSession};

struct Account {
    password: String,
    identity: Identity,
}

#[derive(Default)]
struct Accounts {
    by_email: HashMap<String, Account>,
    /// access token → user id
    tokens: HashMap<String, String>,
}

/// Accounts and access tokens kept in process memory.
///
/// Sign-up confirms immediately and issues a session.
#[derive(Default, Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<Mutex<Accounts>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(accounts: &mut Accounts, identity: &Identity) -> ProviderSession {
        let access_token = Uuid::new_v4().to_string();
        accounts
            .tokens
            .insert(access_token.clone(), identity.id.clone());
        ProviderSession {
            identity: identity.clone(),
            access_token,
        }
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let mut accounts = self.accounts.lock().await;
        let identity = match accounts.by_email.get(&email.to_lowercase()) {
            Some(account) if account.password == password => account.identity.clone(),
            _ => return Err(ProviderError::new("Invalid login credentials")),
        };
        Ok(Self::issue(&mut accounts, &identity))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        let key = email.to_lowercase();
        let mut accounts = self.accounts.lock().await;
        if accounts.by_email.contains_key(&key) {
            return Err(ProviderError::new("User already registered"));
        }

        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            email: Some(email.to_string()),
            display_name: Some(display_name.to_string()).filter(|n| !n.is_empty()),
            avatar: None,
        };
        accounts.by_email.insert(
            key,
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        Ok(Some(Self::issue(&mut accounts, &identity)))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let mut accounts = self.accounts.lock().await;
        accounts.tokens.remove(access_token);
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError> {
        let accounts = self.accounts.lock().await;
        let user_id = accounts
            .tokens
            .get(access_token)
            .ok_or_else(|| ProviderError::new("Invalid JWT"))?;
        accounts
            .by_email
            .values()
            .find(|account| &account.identity.id == user_id)
            .map(|account| account.identity.clone())
            .ok_or_else(|| ProviderError::new("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        // テスト項目: 登録したアカウントでサインインできる
        // given (前提条件):
        let provider = InMemoryIdentityProvider::new();
        provider
            .sign_up("ann@university.edu", "secret1", "Ann")
            .await
            .unwrap();

        // when (操作):
        let session = provider
            .sign_in("ANN@university.edu", "secret1")
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(session.identity.display_name.as_deref(), Some("Ann"));
        let user = provider.get_user(&session.access_token).await.unwrap();
        assert_eq!(user, session.identity);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        // テスト項目: パスワードが違う場合はエラーメッセージが返される
        // given (前提条件):
        let provider = InMemoryIdentityProvider::new();
        provider
            .sign_up("ann@university.edu", "secret1", "Ann")
            .await
            .unwrap();

        // when (操作):
        let result = provider.sign_in("ann@university.edu", "wrong").await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err().message, "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_fails() {
        // テスト項目: 同じメールアドレスでは二重登録できない
        // given (前提条件):
        let provider = InMemoryIdentityProvider::new();
        provider
            .sign_up("ann@university.edu", "secret1", "Ann")
            .await
            .unwrap();

        // when (操作):
        let result = provider.sign_up("ann@university.edu", "secret2", "A").await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err().message, "User already registered");
    }

    #[tokio::test]
    async fn test_sign_out_revokes_token() {
        // テスト項目: サインアウト後はアクセストークンが無効になる
        // given (前提条件):
        let provider = InMemoryIdentityProvider::new();
        let session = provider
            .sign_up("ann@university.edu", "secret1", "Ann")
            .await
            .unwrap()
            .unwrap();

        // when (操作):
        provider.sign_out(&session.access_token).await.unwrap();

        // then (期待する結果):
        assert!(provider.get_user(&session.access_token).await.is_err());
    }
}
