use std::collections::HashMap;

use iced::widget::image;

use super::data::Product;
use crate::api::CatalogError;

/// Where the one-shot catalog load stands for the current activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Activated, fetch not yet issued
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch completed (successfully or not); never re-fires
    Finished,
}

/// Ticket handed out when a load starts.
///
/// Results carry their ticket back so that responses from a previous
/// activation can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation(u64);

/// State owned by the catalog screen for the lifetime of one activation.
///
/// The product list starts empty, is replaced wholesale by the first
/// successful load and is never touched again until deactivation.
#[derive(Debug)]
pub struct CatalogScreen {
    products: Vec<Product>,
    images: HashMap<u64, image::Handle>,
    generation: u64,
    load: LoadState,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            images: HashMap::new(),
            generation: 0,
            load: LoadState::Idle,
        }
    }

    /// Products in server order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Decoded image for a product, if it has arrived
    pub fn image(&self, product_id: u64) -> Option<&image::Handle> {
        self.images.get(&product_id)
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Ticket identifying the current activation
    pub fn activation(&self) -> Activation {
        Activation(self.generation)
    }

    /// Claim the one-shot load for this activation.
    ///
    /// Returns `None` if a load was already issued, so a repeated trigger
    /// never produces a second request.
    pub fn begin_load(&mut self) -> Option<Activation> {
        if self.load != LoadState::Idle {
            tracing::debug!(state = ?self.load, "Catalog load already issued, ignoring trigger");
            return None;
        }

        self.load = LoadState::Loading;
        Some(Activation(self.generation))
    }

    /// Publish the result of a load.
    ///
    /// Success replaces the list. Failure is logged once and leaves the list
    /// as it was. Returns `true` only when the list was replaced.
    pub fn finish_load(
        &mut self,
        activation: Activation,
        result: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if !self.is_current(activation) || self.load != LoadState::Loading {
            tracing::debug!(
                generation = activation.0,
                current = self.generation,
                "Dropping stale catalog response"
            );
            return false;
        }

        self.load = LoadState::Finished;

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "📦 Catalog loaded");
                self.products = products;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching data");
                false
            }
        }
    }

    /// Attach a decoded image to its product.
    ///
    /// Ignored when the activation is stale or the product is no longer listed.
    pub fn set_image(&mut self, activation: Activation, product_id: u64, handle: image::Handle) -> bool {
        if !self.is_current(activation) || !self.products.iter().any(|p| p.id == product_id) {
            return false;
        }

        self.images.insert(product_id, handle);
        true
    }

    /// Tear down the screen: discard everything and invalidate in-flight work.
    ///
    /// A later `begin_load` starts a fresh activation.
    pub fn deactivate(&mut self) {
        self.products.clear();
        self.images.clear();
        self.generation += 1;
        self.load = LoadState::Idle;

        tracing::debug!(generation = self.generation, "Catalog screen deactivated");
    }

    fn is_current(&self, activation: Activation) -> bool {
        activation.0 == self.generation
    }
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Rating;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price: 10.0 + id as f64,
            description: "A product".to_string(),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn fetch_error() -> CatalogError {
        // A relative URL fails at build time, which yields a real reqwest::Error
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        CatalogError::fetch(err)
    }

    /// Counts ERROR events seen while installed
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_starts_empty_and_idle() {
        let screen = CatalogScreen::new();
        assert!(screen.products().is_empty());
        assert_eq!(screen.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_success_replaces_list_in_order() {
        let mut screen = CatalogScreen::new();
        let activation = screen.begin_load().unwrap();

        assert!(screen.finish_load(activation, Ok(vec![product(2), product(1), product(3)])));

        let ids: Vec<u64> = screen.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(screen.load_state(), LoadState::Finished);
    }

    #[test]
    fn test_failure_keeps_list_empty_and_logs_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let mut screen = CatalogScreen::new();
        let activation = screen.begin_load().unwrap();

        let replaced = tracing::subscriber::with_default(subscriber, || {
            screen.finish_load(activation, Err(fetch_error()))
        });

        assert!(!replaced);
        assert!(screen.products().is_empty());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_second_trigger_is_ignored() {
        let mut screen = CatalogScreen::new();

        assert!(screen.begin_load().is_some());
        assert!(screen.begin_load().is_none());
        assert_eq!(screen.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_repeated_results_do_not_duplicate_cards() {
        let mut screen = CatalogScreen::new();
        let activation = screen.begin_load().unwrap();

        screen.finish_load(activation, Ok(vec![product(1), product(2)]));
        assert!(!screen.finish_load(activation, Ok(vec![product(1), product(2)])));

        assert_eq!(screen.products().len(), 2);
    }

    #[test]
    fn test_no_retry_after_failure() {
        let mut screen = CatalogScreen::new();
        let activation = screen.begin_load().unwrap();
        screen.finish_load(activation, Err(fetch_error()));

        assert!(screen.begin_load().is_none());
    }

    #[test]
    fn test_late_response_after_deactivation_is_dropped() {
        let mut screen = CatalogScreen::new();
        let stale = screen.begin_load().unwrap();

        screen.deactivate();

        assert!(!screen.finish_load(stale, Ok(vec![product(1)])));
        assert!(screen.products().is_empty());
        assert_eq!(screen.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_deactivation_discards_list_and_allows_new_activation() {
        let mut screen = CatalogScreen::new();
        let first = screen.begin_load().unwrap();
        screen.finish_load(first, Ok(vec![product(1)]));

        screen.deactivate();
        assert!(screen.products().is_empty());

        let second = screen.begin_load().unwrap();
        assert_ne!(first, second);
        assert!(screen.finish_load(second, Ok(vec![product(5)])));
        assert_eq!(screen.products()[0].id, 5);
    }

    #[test]
    fn test_images_only_attach_to_listed_products() {
        let mut screen = CatalogScreen::new();
        let activation = screen.begin_load().unwrap();
        screen.finish_load(activation, Ok(vec![product(1)]));

        let handle = image::Handle::from_bytes(vec![0u8; 4]);
        assert!(screen.set_image(activation, 1, handle.clone()));
        assert!(!screen.set_image(activation, 99, handle.clone()));
        assert!(screen.image(1).is_some());
        assert!(screen.image(99).is_none());

        screen.deactivate();
        assert!(!screen.set_image(activation, 1, handle));
        assert!(screen.image(1).is_none());
    }
}
