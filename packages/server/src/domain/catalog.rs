//! Catalog filtering.
//!
//! `filter_listings` is the pure predicate application used by the server
//! endpoint; `CatalogView` is the stateful holder a presentation layer keeps
//! so the visible subset is recomputed only when an input changes.

use std::str::FromStr;

use super::{entity::Listing, error::ValueObjectError, value_object::Category};

/// Label of the "no category" choice.
pub const ALL_CATEGORIES: &str = "All";

/// Parse a category filter as typed by a user.
///
/// Blank input and `All` (any case) mean no category restriction.
pub fn parse_category_filter(input: &str) -> Result<Option<Category>, ValueObjectError> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return Ok(None);
    }
    Category::from_str(input).map(Some)
}

/// Search string plus optional category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Option<Category>,
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Whether `listing` is visible under this query.
    ///
    /// The search matches case-insensitively against name or description.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing) && self.matches_category(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        listing.name.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, listing: &Listing) -> bool {
        self.category
            .is_none_or(|category| listing.category == category)
    }
}

/// Ordered subsequence of `listings` matching `query`.
pub fn filter_listings(listings: &[Listing], query: &CatalogQuery) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| query.matches(listing))
        .cloned()
        .collect()
}

/// Catalog state with a cached visible subset.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    listings: Vec<Listing>,
    query: CatalogQuery,
    visible: Vec<Listing>,
    dirty: bool,
    recomputations: usize,
}

impl CatalogView {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            dirty: true,
            ..Self::default()
        }
    }

    /// Replace the full collection.
    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        if self.listings != listings {
            self.listings = listings;
            self.dirty = true;
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.query.search != search {
            self.query.search = search;
            self.dirty = true;
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.query.category != category {
            self.query.category = category;
            self.dirty = true;
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Visible listings, recomputed only if an input changed since the
    /// last call.
    pub fn visible(&mut self) -> &[Listing] {
        if self.dirty {
            self.visible = filter_listings(&self.listings, &self.query);
            self.dirty = false;
            self.recomputations += 1;
        }
        &self.visible
    }

    /// Whether the current inputs select nothing.
    pub fn is_empty_result(&mut self) -> bool {
        self.visible().is_empty()
    }

    /// Number of times the visible subset has been recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
