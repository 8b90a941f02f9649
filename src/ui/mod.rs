/// User interface module
///
/// This module builds the catalog screen's widgets:
/// - The scrollable, keyed list of cards (list.rs)
/// - A single product card and its display strings (card.rs)
/// - Card button actions and the handler they are routed to (actions.rs)
/// - Line clamping for descriptions (text.rs)

pub mod actions;
pub mod card;
pub mod list;
pub mod text;
