//! Product card
//!
//! `CardModel` holds everything a card displays, derived from a `Product`
//! without touching it. `view` turns a model into widgets.
use std::borrow::Cow;

use iced::font::{self, Font};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Shadow, Theme, Vector};

use super::actions::{ActionKind, CardAction};
use super::text::clamp_lines;
use crate::state::data::Product;
use crate::Message;

/// Description is clamped to this many lines
pub const DESCRIPTION_LINES: usize = 3;

/// Upper bound on card width, the list centres cards in wider windows
pub const CARD_MAX_WIDTH: f32 = 420.0;

/// Padding inside a card, on every side
const CARD_PADDING: f32 = 16.0;

/// Card border width
const CARD_BORDER: f32 = 1.0;

/// Description font size
const DESCRIPTION_SIZE: f32 = 13.0;

/// Average glyph advance assumed for description text, rounded up so the
/// estimate errs towards fewer characters per line
const DESCRIPTION_GLYPH_WIDTH: f32 = DESCRIPTION_SIZE * 0.6;

/// Fixed footprint of the product image
const IMAGE_SIZE: f32 = 120.0;

/// Display strings for one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel<'a> {
    pub id: u64,
    pub title: &'a str,
    /// Clamped for display; the product keeps the full text
    pub description: Cow<'a, str>,
    pub rating: String,
    pub reviews: String,
    pub price: String,
}

impl<'a> CardModel<'a> {
    /// Display strings for `product`, wrapping the description at
    /// `chars_per_line` (see `description_chars_per_line`)
    pub fn from_product(product: &'a Product, chars_per_line: usize) -> Self {
        Self {
            id: product.id,
            title: &product.title,
            description: clamp_lines(&product.description, chars_per_line, DESCRIPTION_LINES),
            rating: format!("⭐ {}", product.rating.rate),
            reviews: format!("({} reviews)", product.rating.count),
            price: price_label(product.price),
        }
    }
}

/// How many description characters fit on one line of a card `card_width` wide
pub fn description_chars_per_line(card_width: f32) -> usize {
    let text_width = card_width - 2.0 * (CARD_PADDING + CARD_BORDER);
    ((text_width / DESCRIPTION_GLYPH_WIDTH).floor() as usize).max(1)
}

/// `$` followed by the price exactly as the number prints, no rounding
pub fn price_label(price: f64) -> String {
    format!("${price}")
}

/// Build the widgets for one card
pub fn view<'a>(model: CardModel<'a>, image: Option<&Handle>) -> Element<'a, Message> {
    let id = model.id;

    let picture: Element<'a, Message> = match image {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(IMAGE_SIZE))
            .height(Length::Fixed(IMAGE_SIZE))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Space::new(Length::Fixed(IMAGE_SIZE), Length::Fixed(IMAGE_SIZE)).into(),
    };

    let icons = column![
        round_button("↗", 32.0, 16, CardAction::new(ActionKind::Share, id)),
        round_button("♡", 32.0, 16, CardAction::new(ActionKind::Favorite, id)),
    ]
    .spacing(8);

    let header = container(row![picture, icons].spacing(16)).center_x(Length::Fill);

    let title = text(model.title).size(16).font(weighted(font::Weight::Bold));

    let description = text(model.description)
        .size(DESCRIPTION_SIZE)
        .line_height(text::LineHeight::Absolute(18.0.into()))
        .color(Color::from_rgb8(0x55, 0x55, 0x55));

    let rating = row![
        text(model.rating)
            .size(14)
            .font(weighted(font::Weight::Semibold))
            .color(Color::from_rgb8(0x33, 0x33, 0x33)),
        text(model.reviews).size(12).color(Color::from_rgb8(0x66, 0x66, 0x66)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let price = text(model.price)
        .size(20)
        .font(weighted(font::Weight::ExtraBold))
        .color(Color::BLACK);

    let add_to_cart = button(
        container(text("Add to cart").size(16).font(weighted(font::Weight::Bold)))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([12, 0])
    .on_press(Message::Card(CardAction::new(ActionKind::AddToCart, id)))
    .style(add_to_cart_style);

    let actions = row![
        round_button("🛒", 40.0, 18, CardAction::new(ActionKind::CartIcon, id)),
        add_to_cart,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let content = column![
        header,
        Space::with_height(Length::Fixed(16.0)),
        title,
        description,
        rating,
        price,
        Space::with_height(Length::Fixed(8.0)),
        actions,
    ]
    .spacing(8);

    container(content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

/// Violet of the "Add to cart" button
fn accent() -> Color {
    Color::from_rgb8(0x8B, 0x5C, 0xF6)
}

fn weighted(weight: font::Weight) -> Font {
    Font {
        weight,
        ..Font::DEFAULT
    }
}

/// Small white circular icon button
fn round_button<'a>(glyph: &'a str, diameter: f32, size: u16, action: CardAction) -> Element<'a, Message> {
    button(
        container(text(glyph).size(size).color(Color::BLACK))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(diameter))
    .height(Length::Fixed(diameter))
    .padding(0)
    .on_press(Message::Card(action))
    .style(move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Pressed => Color::from_rgb8(0xEE, 0xEE, 0xEE),
            _ => Color::WHITE,
        })),
        text_color: Color::BLACK,
        border: Border {
            radius: (diameter / 2.0).into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
    })
    .into()
}

fn add_to_cart_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed => accent().scale_alpha(0.7),
        _ => accent(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 25.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: Color::from_rgb8(0xC8, 0xC6, 0xC6),
            width: CARD_BORDER,
            radius: 16.0.into(),
        },
        shadow: Shadow::default(),
    }
}
