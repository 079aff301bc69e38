//! Scroll offset ownership and the clone-boundary teleport.
//!
//! # Responsibility
//! - Consume scroll and settle events from the host scroll surface.
//! - Detect positions at or past a sentinel clone and correct the offset
//!   synchronously, before the next paint can render the clone at rest.
//! - Publish the wrapped logical index after every correction.
//!
//! # Invariants
//! - The teleport happens inside the same call that detected the boundary;
//!   it is never deferred to a later tick.
//! - The initial centering fires at most once and never against a disposed
//!   controller.
//! - For an empty deck every handler is a no-op and no index is published.

use crate::carousel::index::compute_logical_index;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Geometry of the horizontal card strip.
///
/// The pitch is the fixed distance between adjacent slot centers: one card
/// width plus the spacing on either side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub card_width: f64,
    pub spacing: f64,
}

impl CarouselLayout {
    pub fn pitch(&self) -> f64 {
        self.card_width + self.spacing * 2.0
    }
}

/// Construction failures for the scroll controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselError {
    /// A non-empty deck needs a positive pitch; offset/slot math would
    /// otherwise divide by zero.
    NonPositivePitch { pitch: f64 },
}

impl Display for CarouselError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositivePitch { pitch } => {
                write!(f, "carousel pitch must be positive, got {pitch}")
            }
        }
    }
}

impl Error for CarouselError {}

/// Result of handling one scroll or settle event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOutcome {
    /// Offset after any boundary correction; the host must apply it to the
    /// scroll surface without animation when `teleported` is set.
    pub offset: f64,
    /// Wrapped index of the currently centered real card; `None` only for
    /// an empty deck.
    pub logical_index: Option<usize>,
    /// Whether this event crossed a sentinel clone and was corrected.
    pub teleported: bool,
}

/// Owns the live scroll offset and the published logical index.
///
/// All handlers are synchronous pure arithmetic; they run on the host UI
/// thread between frames and must stay cheap.
#[derive(Debug)]
pub struct ScrollController {
    pitch: f64,
    real_count: usize,
    offset: f64,
    logical_index: Option<usize>,
    center_pending: bool,
    disposed: bool,
}

impl ScrollController {
    /// Creates a controller for a deck of `real_count` cards.
    ///
    /// The initial centering is left pending; the host fires it via
    /// [`fire_initial_center`](Self::fire_initial_center) before first
    /// paint, or cancels it by disposing the controller.
    ///
    /// # Errors
    /// - `NonPositivePitch` when `real_count >= 1` and the layout collapses
    ///   to a zero or negative pitch.
    pub fn new(real_count: usize, layout: CarouselLayout) -> Result<Self, CarouselError> {
        let pitch = layout.pitch();
        if real_count >= 1 && pitch <= 0.0 {
            return Err(CarouselError::NonPositivePitch { pitch });
        }
        Ok(Self {
            pitch,
            real_count,
            offset: 0.0,
            logical_index: None,
            center_pending: real_count >= 1,
            disposed: false,
        })
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Total slots including sentinel clones; `0` for an empty deck.
    pub fn slot_count(&self) -> usize {
        if self.real_count == 0 {
            0
        } else {
            self.real_count + 2
        }
    }

    /// Current scroll offset as last written by an event or a teleport.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Last published logical index; `None` before the initial centering
    /// and always `None` for an empty deck.
    pub fn logical_index(&self) -> Option<usize> {
        self.logical_index
    }

    /// Fires the one-shot initial centering onto slot 1 (first real card).
    ///
    /// Returns the offset the host must jump to without animation, or
    /// `None` when the centering already fired, the controller is disposed,
    /// or the deck is empty. Firing after dispose must not mutate state;
    /// the pending action dies with the view it was scheduled for.
    pub fn fire_initial_center(&mut self) -> Option<f64> {
        if self.disposed || !self.center_pending || self.real_count == 0 {
            return None;
        }
        self.center_pending = false;
        self.offset = self.pitch;
        self.logical_index = Some(0);
        Some(self.offset)
    }

    /// Cancels the pending centering and rejects all further events.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.center_pending = false;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Handles a continuous scroll tick (drag or momentum).
    ///
    /// Applies the boundary rule synchronously: at or past the trail clone
    /// the offset snaps back to slot 1; at or past the lead clone it snaps
    /// to slot `N`. A fast flick that skips several slots is handled by the
    /// same rounding and thresholds, with no special casing.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollOutcome {
        self.handle_event(offset, "scroll")
    }

    /// Handles the end of motion.
    ///
    /// Re-applies the identical boundary rule defensively (a settle can
    /// land exactly on a clone without an intervening scroll tick crossing
    /// it), then publishes the authoritative logical index. Settling twice
    /// at the same offset is idempotent: the corrected offset is already
    /// inside the real range, so the second call neither jumps nor changes
    /// the published index.
    pub fn on_scroll_settle(&mut self, offset: f64) -> ScrollOutcome {
        self.handle_event(offset, "settle")
    }

    fn handle_event(&mut self, offset: f64, event: &str) -> ScrollOutcome {
        if self.disposed || self.real_count == 0 {
            return ScrollOutcome {
                offset: self.offset,
                logical_index: self.logical_index,
                teleported: false,
            };
        }

        self.offset = if offset.is_finite() { offset } else { 0.0 };

        let slot_count = self.slot_count() as i64;
        let slot = (self.offset / self.pitch).round() as i64;

        // The correction must land in this same turn; deferring it one tick
        // would let a frame render the clone as a resting position.
        let teleported = if slot >= slot_count - 1 {
            self.offset = self.pitch;
            true
        } else if slot <= 0 {
            // Reset target is slot N (slot_count - 2), not the mirror of the
            // trailing rule; codified from observed host behavior.
            self.offset = self.pitch * (slot_count - 2) as f64;
            true
        } else {
            false
        };

        if teleported {
            debug!(
                "event=carousel_teleport module=carousel status=ok trigger={event} from_slot={slot} offset={}",
                self.offset
            );
        }

        self.logical_index = Some(compute_logical_index(
            self.offset,
            self.pitch,
            self.real_count,
        ));

        ScrollOutcome {
            offset: self.offset,
            logical_index: self.logical_index,
            teleported,
        }
    }
}
