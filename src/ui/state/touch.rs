// SPDX-License-Identifier: MPL-2.0
//! Touch session state management
//!
//! Classifies the interaction in progress from the list of active contacts
//! and turns successive contact lists into incremental transform deltas.

use iced_core::{Point, Vector};

/// Gesture in progress, decided when a contact starts and only read
/// while contacts move or end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureMode {
    /// No transform-producing gesture (unzoomed single finger, or none).
    #[default]
    Idle,
    /// Single-finger drag of a zoomed image.
    Panning {
        /// Anchor the next delta is measured from.
        last_point: Point,
    },
    /// Two-finger pinch.
    Pinching {
        /// Distance at the previous sample.
        last_distance: f32,
        /// Midpoint at the previous sample.
        last_center: Point,
    },
}

/// Output of feeding one touch event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchOutput {
    /// Nothing to apply.
    None,
    /// Multiply the current scale by this ratio.
    ScaleBy(f32),
    /// Translate the viewport by this delta.
    TranslateBy(Vector),
    /// The last contact was lifted.
    Released {
        /// The session was a simple tap: one finger that never panned or pinched.
        tap: bool,
    },
}

/// Per-interaction touch state. Cleared every time the contact count
/// drops to zero.
#[derive(Debug, Clone, Default)]
pub struct TouchSession {
    mode: GestureMode,
    contact_count: usize,
    /// Highest simultaneous contact count seen in this session.
    peak_contacts: usize,
    /// Whether this session produced any scale or translation.
    transformed: bool,
}

impl TouchSession {
    /// Current gesture classification.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Number of contacts reported by the latest event.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    /// Midpoint of the pinch, while pinching.
    #[must_use]
    pub fn pinch_center(&self) -> Option<Point> {
        match self.mode {
            GestureMode::Pinching { last_center, .. } => Some(last_center),
            _ => None,
        }
    }

    /// Handles a contact-start event.
    ///
    /// `contacts` lists every active contact, including the new one.
    /// `zoomed` is whether the image is currently above 1×.
    pub fn start(&mut self, contacts: &[Point], zoomed: bool) -> TouchOutput {
        self.contact_count = contacts.len();
        self.peak_contacts = self.peak_contacts.max(contacts.len());

        self.mode = match contacts {
            [a, b] => {
                log::debug!("Pinch started");
                GestureMode::Pinching {
                    last_distance: a.distance(*b),
                    last_center: midpoint(*a, *b),
                }
            }
            [point] if zoomed => {
                log::debug!("Pan started");
                GestureMode::Panning { last_point: *point }
            }
            _ => GestureMode::Idle,
        };

        TouchOutput::None
    }

    /// Handles a contact-move event.
    ///
    /// Moves without the contacts the current mode needs are ignored.
    pub fn moved(&mut self, contacts: &[Point]) -> TouchOutput {
        self.contact_count = contacts.len();

        match (&mut self.mode, contacts) {
            (
                GestureMode::Pinching {
                    last_distance,
                    last_center,
                },
                [a, b, ..],
            ) => {
                let distance = a.distance(*b);
                if !distance.is_finite() {
                    return TouchOutput::None;
                }

                let previous = *last_distance;
                *last_distance = distance;
                *last_center = midpoint(*a, *b);

                if previous <= f32::EPSILON {
                    log::warn!("Ignoring pinch sample with degenerate baseline distance");
                    return TouchOutput::None;
                }

                let ratio = distance / previous;
                if ratio.is_finite() && ratio > 0.0 {
                    self.transformed = true;
                    TouchOutput::ScaleBy(ratio)
                } else {
                    TouchOutput::None
                }
            }
            (GestureMode::Panning { last_point }, [point, ..]) => {
                let delta = *point - *last_point;
                *last_point = *point;

                if delta == Vector::new(0.0, 0.0) {
                    TouchOutput::None
                } else {
                    self.transformed = true;
                    TouchOutput::TranslateBy(delta)
                }
            }
            _ => TouchOutput::None,
        }
    }

    /// Handles a contact-end event.
    ///
    /// `contacts` lists the contacts still active after the lift.
    pub fn end(&mut self, contacts: &[Point]) -> TouchOutput {
        self.contact_count = contacts.len();

        if contacts.len() < 2 && matches!(self.mode, GestureMode::Pinching { .. }) {
            self.mode = GestureMode::Idle;
        }

        if !contacts.is_empty() {
            return TouchOutput::None;
        }

        let tap = self.peak_contacts == 1 && !self.transformed;
        *self = Self::default();

        TouchOutput::Released { tap }
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
