//! Card tap navigation seam.
//!
//! # Responsibility
//! - Define the capability the host navigation system supplies.
//! - Route card taps to it exactly once per tap.

use crate::model::card::Card;

/// Navigation capability supplied by the host UI.
pub trait Navigator {
    fn navigate(&mut self, route_name: &str);
}

/// Handles a tap on a card.
///
/// Cards with a route navigate exactly once; cards without one are inert.
/// Returns whether a navigation was issued.
pub fn handle_card_tap(card: &Card, navigator: &mut dyn Navigator) -> bool {
    match card.route_name.as_deref() {
        Some(route_name) => {
            navigator.navigate(route_name);
            true
        }
        None => false,
    }
}
