use iced::widget::image;
use iced::{window, Element, Size, Subscription, Task, Theme};

mod api;
mod config;
mod logging;
mod state;
mod ui;

use api::{CatalogClient, CatalogError};
use config::Settings;
use state::data::Product;
use state::screen::{Activation, CatalogScreen};
use ui::actions::{CardAction, CardActionHandler, InertActions};

/// Main application state
struct ProductCatalog {
    /// Client for the catalog endpoint and product images
    client: CatalogClient,
    /// Product list and load guard for the current activation
    screen: CatalogScreen,
    /// Receives card button presses
    actions: Box<dyn CardActionHandler>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog fetch finished
    CatalogLoaded(Activation, Result<Vec<Product>, CatalogError>),
    /// Image bytes for one product arrived (or failed)
    ImageLoaded(Activation, u64, Result<Vec<u8>, CatalogError>),
    /// A card button was pressed
    Card(CardAction),
    /// The window is about to close; the screen deactivates
    CloseRequested(window::Id),
}

impl ProductCatalog {
    /// Create the application and activate the catalog screen
    fn new(settings: Settings) -> (Self, Task<Message>) {
        Self::with_actions(settings, Box::new(InertActions))
    }

    /// Same as `new`, routing card buttons to `actions`
    fn with_actions(settings: Settings, actions: Box<dyn CardActionHandler>) -> (Self, Task<Message>) {
        let mut app = ProductCatalog {
            client: CatalogClient::new(settings.endpoint),
            screen: CatalogScreen::new(),
            actions,
        };

        let task = app.activate();
        (app, task)
    }

    /// Issue the catalog fetch unless this activation already did
    fn activate(&mut self) -> Task<Message> {
        let Some(activation) = self.screen.begin_load() else {
            return Task::none();
        };

        tracing::info!(endpoint = self.client.endpoint(), "🛒 Fetching catalog");

        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_products().await },
            move |result| Message::CatalogLoaded(activation, result),
        )
    }

    /// One image fetch per listed product, all in flight together
    fn load_images(&self, activation: Activation) -> Task<Message> {
        Task::batch(self.screen.products().iter().map(|product| {
            let client = self.client.clone();
            let url = product.image.clone();
            let product_id = product.id;

            Task::perform(
                async move { client.fetch_image(&url).await },
                move |result| Message::ImageLoaded(activation, product_id, result),
            )
        }))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(activation, result) => {
                if self.screen.finish_load(activation, result) {
                    return self.load_images(activation);
                }
                Task::none()
            }
            Message::ImageLoaded(activation, product_id, result) => {
                match result {
                    Ok(bytes) => {
                        self.screen
                            .set_image(activation, product_id, image::Handle::from_bytes(bytes));
                    }
                    Err(err) => {
                        tracing::warn!(product_id, error = %err, "⚠️  Product image unavailable");
                    }
                }
                Task::none()
            }
            Message::Card(action) => {
                self.actions.handle(action);
                Task::none()
            }
            Message::CloseRequested(_id) => {
                self.screen.deactivate();
                iced::exit()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::list::view(&self.screen)
    }

    fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    // Settings errors are reported after logging is installed
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    logging::init(&settings);

    if let Some(err) = settings_error {
        tracing::warn!(error = %err, "⚠️  Ignoring invalid settings, using defaults");
    }

    iced::application("Products", ProductCatalog::update, ProductCatalog::view)
        .theme(ProductCatalog::theme)
        .subscription(ProductCatalog::subscription)
        .window(window::Settings {
            size: Size::new(440.0, 820.0),
            min_size: Some(Size::new(ui::list::MIN_WINDOW_WIDTH, 480.0)),
            position: window::Position::Centered,
            ..window::Settings::default()
        })
        .exit_on_close_request(false)
        .run_with(move || ProductCatalog::new(settings))
}
