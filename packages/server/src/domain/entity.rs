//! Core domain models for the marketplace.

use serde::{Deserialize, Serialize};

use super::value_object::{
    Category, DailyFee, ListingId, MessageContent, Rating, SessionToken, Timestamp,
};

/// Availability of a listing.
///
/// No operation in the marketplace changes it after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Rented,
    Maintenance,
}

/// The user who lists an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lister {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: Rating,
    pub verified: bool,
}

/// A rentable item shown in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub fee_per_day: DailyFee,
    pub rating: Rating,
    pub owner: Lister,
    pub image_url: String,
    pub availability: Availability,
}

/// The fields of a listing the recommendation step sees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub name: String,
    pub category: Category,
    pub fee: DailyFee,
}

impl From<&Listing> for ListingSnapshot {
    fn from(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            category: listing.category,
            fee: listing.fee_per_day,
        }
    }
}

/// A designated, monitored meetup location for exchanges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeZone {
    pub id: String,
    pub name: String,
    pub location: String,
    pub hours: String,
    pub security_features: Vec<String>,
}

/// Author of a concierge chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Represents a concierge chat message in the domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: MessageContent,
    pub sent_at: Timestamp,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: MessageContent, sent_at: Timestamp) -> Self {
        Self {
            role,
            content,
            sent_at,
        }
    }
}

/// User identity issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    /// Display name from the provider's user metadata
    pub display_name: Option<String>,
    /// Avatar URL from the provider's user metadata
    pub avatar: Option<String>,
}

/// Tokens handed back by the identity provider on successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub identity: Identity,
    pub access_token: String,
}

/// A signed-in session held by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub identity: Identity,
    /// Provider access token, used for sign-out
    pub access_token: String,
    pub created_at: Timestamp,
}

/// Stored profile row. Every column may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// The user shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: Rating,
    pub verified: bool,
}
