// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording viewer activity.
//!
//! Events are kept in a bounded log owned by the viewer, so a host can
//! inspect (or serialize) what happened during a session without any I/O
//! from this crate. Once the log is full the oldest event is dropped.

mod events;

use std::collections::VecDeque;
use std::time::Instant;

pub use crate::domain::diagnostics::BufferCapacity;
pub use events::{CloseReason, DiagnosticEvent, DiagnosticEventKind, NavigationTrigger};

/// Bounded log of the events of one viewer session.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    started_at: Instant,
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            started_at: Instant::now(),
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Records an event stamped with the time elapsed since the log was created.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        let elapsed = self.started_at.elapsed();
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(DiagnosticEvent { elapsed_ms, kind });
    }

    /// Events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let mut log = DiagnosticsLog::default();
        log.record(DiagnosticEventKind::Opened {
            image_count: 3,
            index: 0,
        });
        log.record(DiagnosticEventKind::Closed {
            reason: CloseReason::Escape,
        });

        let kinds: Vec<_> = log.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Opened {
                    image_count: 3,
                    index: 0
                },
                DiagnosticEventKind::Closed {
                    reason: CloseReason::Escape
                },
            ]
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn log_is_bounded_by_capacity() {
        let capacity = BufferCapacity::new(0);
        let mut log = DiagnosticsLog::new(capacity);
        for i in 0..capacity.value() + 10 {
            log.record(DiagnosticEventKind::Navigated {
                from: i,
                to: i + 1,
                trigger: NavigationTrigger::Next,
            });
        }
        assert_eq!(log.len(), capacity.value());

        let first = log.events().next().map(|e| e.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::Navigated {
                from: 10,
                to: 11,
                trigger: NavigationTrigger::Next,
            })
        );
        assert_eq!(
            log.last().map(|e| e.kind.clone()),
            Some(DiagnosticEventKind::Navigated {
                from: capacity.value() + 9,
                to: capacity.value() + 10,
                trigger: NavigationTrigger::Next,
            })
        );
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = DiagnosticEvent {
            elapsed_ms: 12,
            kind: DiagnosticEventKind::Navigated {
                from: 2,
                to: 0,
                trigger: NavigationTrigger::Next,
            },
        };

        let text = toml::to_string(&event).expect("event serializes");
        assert!(text.contains("elapsed_ms = 12"));
        assert!(text.contains("type = \"navigated\""));
        assert!(text.contains("trigger = \"next\""));
    }
}
