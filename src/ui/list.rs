use iced::widget::{container, keyed_column, responsive, scrollable};
use iced::{Background, Color, Element, Length, Size, Theme};

use super::card::{self, CardModel, CARD_MAX_WIDTH};
use crate::state::data::Product;
use crate::state::screen::CatalogScreen;
use crate::Message;

/// Narrowest window the app allows
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Padding around the list, on every side
const LIST_PADDING: f32 = 16.0;

/// Width kept free for the vertical scrollbar
const SCROLLBAR_ALLOWANCE: f32 = 12.0;

/// Width a card gets when the list has `available` pixels
pub fn card_width(available: f32) -> f32 {
    (available - 2.0 * LIST_PADDING - SCROLLBAR_ALLOWANCE).clamp(0.0, CARD_MAX_WIDTH)
}

/// One card model per product, in list order
pub fn card_models(products: &[Product], chars_per_line: usize) -> Vec<CardModel<'_>> {
    products
        .iter()
        .map(|product| CardModel::from_product(product, chars_per_line))
        .collect()
}

/// The scrollable catalog: a column of cards keyed by product id.
///
/// Pure function of the screen state and the available width; an empty
/// list renders no cards. Descriptions are clamped for the width the cards
/// actually get, so resizing re-clamps them.
pub fn view(screen: &CatalogScreen) -> Element<'_, Message> {
    let list = responsive(move |size: Size| {
        let chars_per_line = card::description_chars_per_line(card_width(size.width));

        let cards = keyed_column(
            card_models(screen.products(), chars_per_line)
                .into_iter()
                .map(|model| {
                    let id = model.id;
                    (id, card::view(model, screen.image(id)))
                }),
        )
        .spacing(16);

        let content = container(container(cards).max_width(CARD_MAX_WIDTH))
            .padding(LIST_PADDING)
            .center_x(Length::Fill);

        scrollable(content).width(Length::Fill).height(Length::Fill).into()
    });

    container(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(background_style)
        .into()
}

fn background_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0xEC, 0xEA, 0xEA))),
        ..container::Style::default()
    }
}
