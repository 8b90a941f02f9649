//! Card button actions
//!
//! Every button on a card emits a `CardAction`. The application forwards
//! them to a `CardActionHandler` instead of wiring behaviour into the view,
//! so cart or favorite logic can be attached later without touching the
//! render path.

/// Which button on a card was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// `↗` icon next to the image
    Share,
    /// `♡` icon next to the image
    Favorite,
    /// Round cart icon button
    CartIcon,
    /// "Add to cart" button
    AddToCart,
}

/// A button press on the card of a given product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAction {
    pub kind: ActionKind,
    pub product_id: u64,
}

impl CardAction {
    pub fn new(kind: ActionKind, product_id: u64) -> Self {
        Self { kind, product_id }
    }
}

/// Receives card button presses
pub trait CardActionHandler {
    fn handle(&mut self, action: CardAction);
}

/// The shipped handler: buttons are visual only
#[derive(Debug, Default)]
pub struct InertActions;

impl CardActionHandler for InertActions {
    fn handle(&mut self, action: CardAction) {
        tracing::debug!(kind = ?action.kind, product_id = action.product_id, "Card action (no handler attached)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<CardAction>);

    impl CardActionHandler for Recorder {
        fn handle(&mut self, action: CardAction) {
            self.0.push(action);
        }
    }

    #[test]
    fn test_handler_receives_actions_in_order() {
        let mut recorder = Recorder::default();
        recorder.handle(CardAction::new(ActionKind::Favorite, 3));
        recorder.handle(CardAction::new(ActionKind::AddToCart, 1));

        assert_eq!(
            recorder.0,
            vec![
                CardAction::new(ActionKind::Favorite, 3),
                CardAction::new(ActionKind::AddToCart, 1),
            ]
        );
    }

    #[test]
    fn test_inert_handler_accepts_every_kind() {
        let mut handler = InertActions;
        for kind in [ActionKind::Share, ActionKind::Favorite, ActionKind::CartIcon, ActionKind::AddToCart] {
            handler.handle(CardAction::new(kind, 7));
        }
    }
}
