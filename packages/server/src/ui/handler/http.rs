//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

use crate::{
    domain::{
        ALL_CATEGORIES, Category, CatalogQuery, ListingId, Session, SessionToken, SignUpForm,
        parse_category_filter,
    },
    infrastructure::dto::http::{
        AuthResponseDto, CatalogDto, CatalogQueryParams, DescribeRequestDto, DescribeResponseDto,
        ListingDto, SafeZoneDto, SignInRequestDto, SignUpRequestDto, UserProfileDto,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{
        AuthError, BrowseCatalogUseCase, CurrentUserUseCase, ListSafeZonesUseCase, SignInUseCase,
        SignOutUseCase, SignUpUseCase, SuggestDescriptionUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Category choices, "All" first
pub async fn list_categories() -> Json<Vec<&'static str>> {
    let mut categories = vec![ALL_CATEGORIES];
    categories.extend(Category::ALL.iter().map(Category::as_str));
    Json(categories)
}

/// Filter the catalog by `q` and `category`
pub async fn list_listings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogQueryParams>,
) -> Result<Json<CatalogDto>, ApiError> {
    let category = parse_category_filter(params.category.as_deref().unwrap_or_default())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let query = CatalogQuery::new(params.q.unwrap_or_default(), category);

    let page = BrowseCatalogUseCase::new(state.listings.clone())
        .execute(&query)
        .await;

    Ok(Json(CatalogDto {
        listings: page.listings.iter().map(ListingDto::from).collect(),
        total: page.total,
    }))
}

/// Get listing detail by ID
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<String>,
) -> Result<Json<ListingDto>, ApiError> {
    // Convert String -> ListingId (Domain Model)
    let id = ListingId::try_from(listing_id.clone()).map_err(|_| {
        tracing::debug!("Invalid listing id: '{}'", listing_id);
        ApiError::NotFound(format!("Listing not found: {listing_id}"))
    })?;

    let listing = BrowseCatalogUseCase::new(state.listings.clone())
        .find(&id)
        .await?;
    Ok(Json(ListingDto::from(&listing)))
}

/// Safe exchange zone directory
pub async fn list_safe_zones(State(state): State<Arc<AppState>>) -> Json<Vec<SafeZoneDto>> {
    let zones = ListSafeZonesUseCase::new(state.safe_zones.clone())
        .execute()
        .await;
    Json(zones.into_iter().map(SafeZoneDto::from).collect())
}

/// Suggest a rental description for an item name
pub async fn describe_listing(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DescribeRequestDto>,
) -> Json<DescribeResponseDto> {
    let description = SuggestDescriptionUseCase::new(state.recommender.clone())
        .execute(&request.item_name)
        .await;
    Json(DescribeResponseDto { description })
}

/// Register an account
///
/// `session_token` and `user` are null while email confirmation is pending.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUpRequestDto>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let form = SignUpForm {
        name: request.name,
        email: request.email,
        password: request.password,
        confirm_password: request.confirm_password,
    };

    let session = SignUpUseCase::new(state.identity.clone(), state.sessions.clone())
        .execute(&form)
        .await?;

    let response = match session {
        Some(session) => signed_in_response(&state, &session).await,
        None => AuthResponseDto {
            session_token: None,
            user: None,
        },
    };
    Ok(Json(response))
}

/// Sign in with email and password
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignInRequestDto>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let session = SignInUseCase::new(state.identity.clone(), state.sessions.clone())
        .execute(&request.email, &request.password)
        .await?;
    Ok(Json(signed_in_response(&state, &session).await))
}

/// End the session named by the bearer token
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers)?;
    SignOutUseCase::new(state.identity.clone(), state.sessions.clone())
        .execute(&token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Profile of the signed-in user
pub async fn current_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserProfileDto>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = CurrentUserUseCase::new(state.sessions.clone(), state.profiles.clone())
        .execute(&token)
        .await?;
    Ok(Json(user.into()))
}

async fn signed_in_response(state: &AppState, session: &Session) -> AuthResponseDto {
    let user = CurrentUserUseCase::new(state.sessions.clone(), state.profiles.clone())
        .for_session(session)
        .await;
    AuthResponseDto {
        session_token: Some(session.token.to_string()),
        user: Some(user.into()),
    }
}

/// Extract the session token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<SessionToken, ApiError> {
    let unauthorized = || ApiError::from(AuthError::SessionNotFound);

    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;
    let token = value.strip_prefix("Bearer ").ok_or_else(unauthorized)?;
    SessionToken::new(token.trim().to_string()).map_err(|_| unauthorized())
}
