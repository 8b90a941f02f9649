use serde_json::Value;

use super::error::CatalogError;
use crate::state::data::Product;

/// HTTP client for the remote catalog.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool internally,
/// so every background task gets its own handle.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client for the given catalog endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client fetches the product list from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the product list.
    ///
    /// The body must be a JSON array; anything else (including a non-2xx
    /// status) is a `FetchFailed`. Elements that do not decode into a full
    /// `Product` are dropped, the rest keep server order.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<Value> = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(CatalogError::fetch)?
            .json()
            .await
            .map_err(CatalogError::fetch)?;

        Ok(decode_records(records))
    }

    /// Fetch the raw bytes of a product image
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| CatalogError::image(url, err))?
            .bytes()
            .await
            .map_err(|err| CatalogError::image(url, err))?;

        Ok(bytes.to_vec())
    }
}

/// Decode each array element on its own so one bad record doesn't sink the list
fn decode_records(records: Vec<Value>) -> Vec<Product> {
    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(index, error = %err, "⚠️  Dropping malformed catalog record");
                None
            }
        })
        .collect();

    if products.len() < total {
        tracing::warn!(
            kept = products.len(),
            dropped = total - products.len(),
            "Catalog response contained malformed records"
        );
    }

    products
}
