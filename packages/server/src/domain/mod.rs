//! Domain layer for the marketplace.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod auth;
pub mod catalog;
pub mod concierge;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod service;
pub mod value_object;

pub use auth::{SignUpForm, merge_profile};
pub use catalog::{
    ALL_CATEGORIES, CatalogQuery, CatalogView, filter_listings, parse_category_filter,
};
pub use concierge::{
    CONCIERGE_FALLBACK, CONCIERGE_GREETING, ConciergeSession, ConciergeState, Transcript,
};
pub use entity::{
    Availability, ChatMessage, ChatRole, Identity, Lister, Listing, ListingSnapshot,
    ProfileRecord, ProviderSession, SafeZone, Session, UserProfile,
};
pub use error::{
    ConciergeError, ProviderError, RepositoryError, SignUpValidationError, ValueObjectError,
};
pub use factory::{ConciergeSessionFactory, SessionTokenFactory};
pub use repository::{ListingRepository, ProfileRepository, SafeZoneRepository, SessionRepository};
pub use service::{IdentityProvider, RecommendationService};
pub use value_object::{
    Category, DailyFee, ListingId, MessageContent, Rating, SessionToken, Timestamp,
};
