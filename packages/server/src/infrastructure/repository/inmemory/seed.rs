//! Catalog seed data.

use crate::domain::{
    Availability, Category, DailyFee, Lister, Listing, ListingId, Rating, SafeZone,
};

fn lister(id: &str, name: &str, seed: &str, rating: f32, verified: bool) -> Lister {
    Lister {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"),
        rating: Rating::new(rating).unwrap_or_else(|_| Rating::top()),
        verified,
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    fee: f64,
    rating: f32,
    owner: &Lister,
    photo: &str,
) -> Option<Listing> {
    Some(Listing {
        id: ListingId::new(id.to_string()).ok()?,
        name: name.to_string(),
        description: description.to_string(),
        category,
        fee_per_day: DailyFee::new(fee).ok()?,
        rating: Rating::new(rating).ok()?,
        owner: owner.clone(),
        image_url: format!("https://images.unsplash.com/{photo}?w=800"),
        availability: Availability::Available,
    })
}

/// The six launch listings.
pub fn seed_listings() -> Vec<Listing> {
    let felix = lister("u1", "Felix Chen", "Felix", 4.9, true);
    let sarah = lister("u2", "Sarah Miller", "Sarah", 4.8, true);
    let james = lister("u3", "James Wilson", "James", 4.5, false);

    [
        listing(
            "1",
            "Canon EOS R5",
            "High-end mirrorless camera with 45MP sensor. Includes 24-105mm lens.",
            Category::Photography,
            25.0,
            4.9,
            &felix,
            "photo-1516035069371-29a1b244cc32",
        ),
        listing(
            "2",
            "Camping Tent (4-Person)",
            "Easy setup, waterproof, includes rainfly and stakes. Perfect for weekend trips.",
            Category::Outdoors,
            15.0,
            4.7,
            &sarah,
            "photo-1504280390367-361c6d9f38f4",
        ),
        listing(
            "3",
            "Electric Scooter",
            "Foldable electric scooter with 15-mile range. Helmet included.",
            Category::Transport,
            10.0,
            4.5,
            &james,
            "photo-1558981285-6f0c94958bb6",
        ),
        listing(
            "4",
            "Calculus Early Transcendentals",
            "9th Edition textbook. Minimal highlighting. Essential for Math 101/102.",
            Category::Textbooks,
            5.0,
            5.0,
            &felix,
            "photo-1544947950-fa07a98d237f",
        ),
        listing(
            "5",
            "Noise Cancelling Headphones",
            "Sony WH-1000XM4. Great for studying in the loud student union.",
            Category::Electronics,
            8.0,
            4.8,
            &sarah,
            "photo-1505740420928-5e560c06d30e",
        ),
        listing(
            "6",
            "Power Drill & Bits",
            "Dewalt 20V Max cordless drill. Comes with battery and basic bit set.",
            Category::Tools,
            12.0,
            4.6,
            &james,
            "photo-1504148455328-c376907d081c",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn zone(id: &str, name: &str, location: &str, hours: &str, features: [&str; 3]) -> SafeZone {
    SafeZone {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        hours: hours.to_string(),
        security_features: features.iter().map(|f| f.to_string()).collect(),
    }
}

/// Campus safe exchange zones.
pub fn seed_safe_zones() -> Vec<SafeZone> {
    vec![
        zone(
            "sz1",
            "Central Library Lobby",
            "North Entrance, Level 1",
            "24/7 Access",
            ["CCTV", "Emergency Phone", "Staffed Desk Nearby"],
        ),
        zone(
            "sz2",
            "Student Union Hub",
            "Main Atrium, Ground Floor",
            "7:00 AM - 11:00 PM",
            ["High Visibility", "Security Patrols", "Lighting"],
        ),
        zone(
            "sz3",
            "Campus Police Station",
            "Safe Exchange Parking Lot",
            "24/7 Access",
            ["Police Presence", "Designated Signs", "Recording"],
        ),
    ]
}
