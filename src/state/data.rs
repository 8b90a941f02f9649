//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the catalog client and the UI layer.

use serde::Deserialize;

/// Represents a single product returned by the catalog endpoint
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique catalog ID, used as the card key
    pub id: u64,
    /// Display title
    pub title: String,
    /// Price in the catalog's currency, shown with a `$` prefix
    pub price: f64,
    /// Full description text (display truncation never touches this)
    pub description: String,
    /// URI of the remote product image
    pub image: String,
    /// Average score and number of reviews
    pub rating: Rating,
}

/// Review summary attached to every product
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Average score (e.g. 3.9)
    pub rate: f64,
    /// Number of reviews
    pub count: u64,
}
