//! Text rendering for the terminal.

use uniborrow_server::{
    domain::{ChatRole, Listing},
    infrastructure::dto::{
        http::{ListingDto, SafeZoneDto, UserProfileDto},
        websocket::ChatMessageDto,
    },
};
use uniborrow_shared::time::millis_to_clock_label;

/// Shown when the filter matches nothing.
pub const EMPTY_STATE: &str = "No results found";

pub fn listing_line(listing: &Listing) -> String {
    format!(
        "[{}] {} | {} | {}/day | ★{} | {}{}",
        listing.id,
        listing.name,
        listing.category,
        listing.fee_per_day,
        listing.rating,
        listing.owner.name,
        if listing.owner.verified { " ✓" } else { "" }
    )
}

pub fn listing_detail(listing: &ListingDto) -> String {
    format!(
        "{name}\n  {description}\n  Category: {category}\n  Fee: ₱{fee}/day\n  Rating: {rating:.1}\n  Owner: {owner}{verified} (★{owner_rating:.1})\n  Status: {availability:?}\n  Image: {image}",
        name = listing.name,
        description = listing.description,
        category = listing.category,
        fee = listing.fee_per_day,
        rating = listing.rating,
        owner = listing.owner.name,
        verified = if listing.owner.verified { " ✓" } else { "" },
        owner_rating = listing.owner.rating,
        availability = listing.availability,
        image = listing.image_url,
    )
}

/// Visible listings, or the empty state.
pub fn catalog(visible: &[Listing], total: usize) -> String {
    if visible.is_empty() {
        return EMPTY_STATE.to_string();
    }
    let mut lines: Vec<String> = visible.iter().map(listing_line).collect();
    lines.push(format!("{} of {} listings", visible.len(), total));
    lines.join("\n")
}

pub fn safe_zone(zone: &SafeZoneDto) -> String {
    format!(
        "{}\n  {}\n  Hours: {}\n  {}",
        zone.name,
        zone.location,
        zone.hours,
        zone.security_features.join(" · ")
    )
}

pub fn profile(user: &UserProfileDto) -> String {
    format!(
        "{}{} (★{:.1})\n  {}",
        user.name,
        if user.verified { " ✓" } else { "" },
        user.rating,
        user.avatar
    )
}

pub fn chat_message(message: &ChatMessageDto) -> String {
    let speaker = match message.role {
        ChatRole::User => "You",
        ChatRole::Assistant => "Concierge",
    };
    format!(
        "[{}] {}: {}",
        millis_to_clock_label(message.sent_at),
        speaker,
        message.content
    )
}
