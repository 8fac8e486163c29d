//! HTTP API client.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uniborrow_server::{
    domain::Listing,
    infrastructure::dto::http::{
        AuthResponseDto, CatalogDto, DescribeRequestDto, DescribeResponseDto, ErrorDto,
        ListingDto, SafeZoneDto, SignInRequestDto, SignUpRequestDto, UserProfileDto,
    },
};

use crate::error::ClientError;

/// Client for the marketplace REST API.
///
/// Holds the session token after a successful sign-in or sign-up.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_signed_in(&self) -> bool {
        self.session_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.session_token.as_ref().ok_or(ClientError::NotSignedIn)?;
        Ok(request.bearer_auth(token))
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorDto>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Server returned {status}"));
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Full catalog, converted back into domain listings.
    pub async fn listings(&self) -> Result<Vec<Listing>, ClientError> {
        let catalog: CatalogDto = Self::send_json(self.http.get(self.url("/api/listings"))).await?;
        tracing::debug!("Fetched {} listings", catalog.listings.len());
        catalog
            .listings
            .into_iter()
            .map(|dto| Listing::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    pub async fn listing(&self, id: &str) -> Result<ListingDto, ClientError> {
        Self::send_json(self.http.get(self.url(&format!("/api/listings/{id}")))).await
    }

    pub async fn safe_zones(&self) -> Result<Vec<SafeZoneDto>, ClientError> {
        Self::send_json(self.http.get(self.url("/api/safe-zones"))).await
    }

    pub async fn describe(&self, item_name: &str) -> Result<String, ClientError> {
        let request = self
            .http
            .post(self.url("/api/listings/describe"))
            .json(&DescribeRequestDto {
                item_name: item_name.to_string(),
            });
        let response: DescribeResponseDto = Self::send_json(request).await?;
        Ok(response.description)
    }

    pub async fn sign_in(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfileDto>, ClientError> {
        let request = self
            .http
            .post(self.url("/api/auth/sign-in"))
            .json(&SignInRequestDto {
                email: email.to_string(),
                password: password.to_string(),
            });
        let response: AuthResponseDto = Self::send_json(request).await?;
        Ok(self.accept(response))
    }

    /// `Ok(None)` when the account awaits email confirmation.
    pub async fn sign_up(
        &mut self,
        request: SignUpRequestDto,
    ) -> Result<Option<UserProfileDto>, ClientError> {
        let request = self.http.post(self.url("/api/auth/sign-up")).json(&request);
        let response: AuthResponseDto = Self::send_json(request).await?;
        Ok(self.accept(response))
    }

    /// Ends the session locally even when the server call fails.
    pub async fn sign_out(&mut self) -> Result<(), ClientError> {
        let request = self.authorized(self.http.post(self.url("/api/auth/sign-out")))?;
        self.session_token = None;
        Self::check(request.send().await?).await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<UserProfileDto, ClientError> {
        let request = self.authorized(self.http.get(self.url("/api/auth/me")))?;
        Self::send_json(request).await
    }

    fn accept(&mut self, response: AuthResponseDto) -> Option<UserProfileDto> {
        if let Some(token) = response.session_token {
            self.session_token = Some(token);
        }
        response.user
    }
}
