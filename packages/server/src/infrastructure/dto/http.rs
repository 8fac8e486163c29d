//! HTTP API request and response DTOs.

use serde::{Deserialize, Serialize};

use std::str::FromStr;

use crate::domain::{
    Availability, Category, DailyFee, Lister, Listing, ListingId, Rating, SafeZone, UserProfile,
    ValueObjectError,
};

/// Lister summary shown on a listing card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListerDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub verified: bool,
}

/// Listing as returned by the catalog endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub fee_per_day: f64,
    pub rating: f32,
    pub owner: ListerDto,
    pub image_url: String,
    pub availability: Availability,
}

impl From<&Listing> for ListingDto {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            name: listing.name.clone(),
            description: listing.description.clone(),
            category: listing.category.to_string(),
            fee_per_day: listing.fee_per_day.amount(),
            rating: listing.rating.value(),
            owner: ListerDto {
                id: listing.owner.id.clone(),
                name: listing.owner.name.clone(),
                avatar: listing.owner.avatar.clone(),
                rating: listing.owner.rating.value(),
                verified: listing.owner.verified,
            },
            image_url: listing.image_url.clone(),
            availability: listing.availability,
        }
    }
}

impl TryFrom<ListingDto> for Listing {
    type Error = ValueObjectError;

    fn try_from(dto: ListingDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ListingId::new(dto.id)?,
            name: dto.name,
            description: dto.description,
            category: Category::from_str(&dto.category)?,
            fee_per_day: DailyFee::new(dto.fee_per_day)?,
            rating: Rating::new(dto.rating)?,
            owner: Lister {
                id: dto.owner.id,
                name: dto.owner.name,
                avatar: dto.owner.avatar,
                rating: Rating::new(dto.owner.rating)?,
                verified: dto.owner.verified,
            },
            image_url: dto.image_url,
            availability: dto.availability,
        })
    }
}

/// Catalog list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDto {
    pub listings: Vec<ListingDto>,
    /// Size of the unfiltered collection
    pub total: usize,
}

/// Catalog query string (`?q=&category=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Safe zone entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeZoneDto {
    pub id: String,
    pub name: String,
    pub location: String,
    pub hours: String,
    pub security_features: Vec<String>,
}

impl From<SafeZone> for SafeZoneDto {
    fn from(zone: SafeZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            location: zone.location,
            hours: zone.hours,
            security_features: zone.security_features,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeRequestDto {
    pub item_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeResponseDto {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Result of sign-in / sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    /// Server session token; absent while email confirmation is pending
    pub session_token: Option<String>,
    pub user: Option<UserProfileDto>,
}

/// Profile shown in the navigation bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub verified: bool,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            avatar: profile.avatar,
            rating: profile.rating.value(),
            verified: profile.verified,
        }
    }
}

/// Error body for every failed API call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
