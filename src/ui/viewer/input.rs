// SPDX-License-Identifier: MPL-2.0
//! Translation of iced input events into viewer messages.
//!
//! iced reports touches one finger at a time; the viewer wants the full list of
//! active contacts with every event. [`ActiveContacts`] keeps that list, in
//! press order, so the first two fingers down are always the pinch pair.

use super::component::{Message, ViewerKey};
use iced_core::keyboard::{self, key::Named, Key};
use iced_core::touch::{self, Finger};
use iced_core::Point;
use std::time::Instant;

/// Fingers currently on the screen, in the order they were pressed.
#[derive(Debug, Clone, Default)]
pub struct ActiveContacts {
    fingers: Vec<(Finger, Point)>,
}

impl ActiveContacts {
    /// Folds a touch event into the contact table and returns the matching
    /// viewer message. Events for unknown fingers are dropped.
    pub fn apply(&mut self, event: touch::Event, at: Instant) -> Option<Message> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if let Some(slot) = self.slot_mut(id) {
                    // A repeated press for a tracked finger is just a move.
                    *slot = position;
                    return Some(Message::TouchMoved {
                        contacts: self.points(),
                    });
                }
                self.fingers.push((id, position));
                Some(Message::TouchStarted {
                    contacts: self.points(),
                })
            }
            touch::Event::FingerMoved { id, position } => {
                let slot = self.slot_mut(id)?;
                *slot = position;
                Some(Message::TouchMoved {
                    contacts: self.points(),
                })
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let index = self.fingers.iter().position(|(finger, _)| *finger == id)?;
                self.fingers.remove(index);
                Some(Message::TouchEnded {
                    contacts: self.points(),
                    at,
                })
            }
        }
    }

    /// Number of fingers down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Forgets every finger (e.g. when the viewer closes mid-gesture).
    pub fn clear(&mut self) {
        self.fingers.clear();
    }

    fn slot_mut(&mut self, id: Finger) -> Option<&mut Point> {
        self.fingers
            .iter_mut()
            .find(|(finger, _)| *finger == id)
            .map(|(_, point)| point)
    }

    fn points(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, point)| *point).collect()
    }
}

/// Maps a key press to a viewer key. Releases and other keys yield `None`.
#[must_use]
pub fn viewer_key(event: &keyboard::Event) -> Option<ViewerKey> {
    match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        } => match named {
            Named::Escape => Some(ViewerKey::Escape),
            Named::ArrowLeft => Some(ViewerKey::ArrowLeft),
            Named::ArrowRight => Some(ViewerKey::ArrowRight),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::keyboard::key::{Code, Physical};

    fn press(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerPressed {
            id: Finger(id),
            position: Point::new(x, y),
        }
    }

    fn moved(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerMoved {
            id: Finger(id),
            position: Point::new(x, y),
        }
    }

    fn lift(id: u64) -> touch::Event {
        touch::Event::FingerLifted {
            id: Finger(id),
            position: Point::ORIGIN,
        }
    }

    #[test]
    fn presses_accumulate_contacts_in_order() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();

        contacts.apply(press(7, 0.0, 0.0), now);
        let message = contacts.apply(press(3, 100.0, 0.0), now);

        assert_eq!(
            message,
            Some(Message::TouchStarted {
                contacts: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            })
        );
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn move_updates_only_that_finger() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();
        contacts.apply(press(1, 0.0, 0.0), now);
        contacts.apply(press(2, 100.0, 0.0), now);

        let message = contacts.apply(moved(2, 150.0, 10.0), now);

        assert_eq!(
            message,
            Some(Message::TouchMoved {
                contacts: vec![Point::new(0.0, 0.0), Point::new(150.0, 10.0)],
            })
        );
    }

    #[test]
    fn unknown_finger_events_are_dropped() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();
        assert_eq!(contacts.apply(moved(9, 1.0, 1.0), now), None);
        assert_eq!(contacts.apply(lift(9), now), None);
    }

    #[test]
    fn lift_reports_remaining_contacts() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();
        contacts.apply(press(1, 0.0, 0.0), now);
        contacts.apply(press(2, 100.0, 0.0), now);

        assert_eq!(
            contacts.apply(lift(1), now),
            Some(Message::TouchEnded {
                contacts: vec![Point::new(100.0, 0.0)],
                at: now,
            })
        );
        assert_eq!(
            contacts.apply(lift(2), now),
            Some(Message::TouchEnded {
                contacts: Vec::new(),
                at: now,
            })
        );
        assert!(contacts.is_empty());
    }

    #[test]
    fn lost_finger_counts_as_lift() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();
        contacts.apply(press(4, 5.0, 5.0), now);

        let message = contacts.apply(
            touch::Event::FingerLost {
                id: Finger(4),
                position: Point::new(5.0, 5.0),
            },
            now,
        );
        assert!(matches!(message, Some(Message::TouchEnded { .. })));
    }

    fn key_press(named: Named, code: Code) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }
    }

    #[test]
    fn escape_and_arrows_map_to_viewer_keys() {
        assert_eq!(
            viewer_key(&key_press(Named::Escape, Code::Escape)),
            Some(ViewerKey::Escape)
        );
        assert_eq!(
            viewer_key(&key_press(Named::ArrowLeft, Code::ArrowLeft)),
            Some(ViewerKey::ArrowLeft)
        );
        assert_eq!(
            viewer_key(&key_press(Named::ArrowRight, Code::ArrowRight)),
            Some(ViewerKey::ArrowRight)
        );
    }

    #[test]
    fn other_named_keys_are_ignored() {
        assert_eq!(viewer_key(&key_press(Named::Enter, Code::Enter)), None);
    }

    #[test]
    fn modifier_changes_are_not_viewer_keys() {
        let event = keyboard::Event::ModifiersChanged(keyboard::Modifiers::SHIFT);
        assert_eq!(viewer_key(&event), None);
    }

    #[test]
    fn repeated_press_is_treated_as_move() {
        let mut contacts = ActiveContacts::default();
        let now = Instant::now();
        contacts.apply(press(1, 0.0, 0.0), now);

        let message = contacts.apply(press(1, 4.0, 4.0), now);
        assert!(matches!(message, Some(Message::TouchMoved { .. })));
        assert_eq!(contacts.len(), 1);
    }
}
