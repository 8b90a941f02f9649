/// Remote catalog access
///
/// This module handles:
/// - Fetching the product list from the catalog endpoint (client.rs)
/// - Fetching product image bytes for the cards (client.rs)
/// - The error kinds those fetches can produce (error.rs)

pub mod client;
pub mod error;

pub use client::CatalogClient;
pub use error::CatalogError;
