//! Navigation card model.
//!
//! # Responsibility
//! - Define the display record rendered by each carousel slot.
//! - Keep the shape aligned with the host UI's card schema.
//!
//! # Invariants
//! - A card is immutable once built; the deck only ever copies it.
//! - `route_name` is the single trigger for tap navigation; cards without
//!   one are inert on tap.

use serde::{Deserialize, Serialize};

/// Display record for one navigation hub card.
///
/// `image_ref` and `route_name` are optional on purpose: decorative cards
/// exist, and not every card leads anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Host-provided stable id, unique among real cards.
    pub id: String,
    /// Primary label.
    pub title: String,
    /// Secondary label shown under the title.
    pub subtitle: String,
    /// Background color as the host schema spells it (e.g. `#13d6b2`).
    pub color: String,
    /// Serialized as `image` to match the host card schema.
    #[serde(rename = "image")]
    pub image_ref: Option<String>,
    /// Serialized as `route` to match the host navigation schema.
    #[serde(rename = "route")]
    pub route_name: Option<String>,
}

impl Card {
    /// Creates a card with no image and no navigation target.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            color: color.into(),
            image_ref: None,
            route_name: None,
        }
    }

    /// Sets the image reference; consumes and returns the card for chaining.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Sets the navigation target; consumes and returns the card for chaining.
    pub fn with_route(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = Some(route_name.into());
        self
    }
}
