// SPDX-License-Identifier: MPL-2.0
//! Viewer component orchestrating gestures, zoom/pan and carousel navigation.
//!
//! The [`Viewer`] owns every per-session tracker as a plain field and is
//! driven one [`Message`] at a time. Each call to [`Viewer::handle`] runs to
//! completion and leaves the state valid:
//!
//! - the current index is always inside the image sequence
//! - the scale stays within 1×–5×
//! - translation is `(0, 0)` whenever the scale is 1×
//! - every navigation resets the transform before the new image becomes current

use super::state::{Thumbnail, ViewerState};
use crate::config::{Config, GestureSettings};
use crate::diagnostics::{CloseReason, DiagnosticEventKind, DiagnosticsLog, NavigationTrigger};
use crate::image_navigation::{CarouselNavigator, ImageSequence};
use crate::ui::state::{DoubleTapDetector, GestureMode, TouchOutput, TouchSession, ZoomPanState};
use iced_core::Point;
use std::time::Instant;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Messages for the viewer.
///
/// Touch messages carry every contact active after the event.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TouchStarted { contacts: Vec<Point> },
    TouchMoved { contacts: Vec<Point> },
    TouchEnded { contacts: Vec<Point>, at: Instant },
    KeyPressed(ViewerKey),
    /// Next button.
    Next,
    /// Previous button.
    Previous,
    /// Thumbnail selection.
    Select(usize),
    /// Click outside the image.
    BackdropClicked,
    /// Close button or host request.
    Close,
}

/// Effects produced by viewer changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Scale or translation changed; redraw the active image.
    TransformChanged,
    /// The current image changed to this index (transform already reset).
    Navigated(usize),
    /// The viewer should be dismissed.
    Close(CloseReason),
}

/// Fullscreen carousel viewer state.
#[derive(Debug, Clone)]
pub struct Viewer {
    navigator: CarouselNavigator,
    transform: ZoomPanState,
    touch: TouchSession,
    double_tap: DoubleTapDetector,
    settings: GestureSettings,
    diagnostics: DiagnosticsLog,
}

impl Viewer {
    /// Creates a viewer with default gesture settings.
    #[must_use]
    pub fn new(images: ImageSequence, initial_index: usize) -> Self {
        Self::with_config(images, initial_index, &Config::default())
    }

    /// Creates a viewer tuned by `config`.
    #[must_use]
    pub fn with_config(images: ImageSequence, initial_index: usize, config: &Config) -> Self {
        let settings = config.gesture_settings();
        let navigator = CarouselNavigator::new(images, initial_index);
        let mut diagnostics = DiagnosticsLog::new(config.diagnostics_capacity());
        diagnostics.record(DiagnosticEventKind::Opened {
            image_count: navigator.len(),
            index: navigator.current_index(),
        });

        Self {
            navigator,
            transform: ZoomPanState::default(),
            touch: TouchSession::default(),
            double_tap: DoubleTapDetector::new(settings.double_tap_window),
            settings,
            diagnostics,
        }
    }

    /// Handle a viewer message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TouchStarted { contacts } => {
                let zoomed = self.transform.scale().is_zoomed();
                let output = self.touch.start(&contacts, zoomed);
                self.apply_touch_output(output, None)
            }
            Message::TouchMoved { contacts } => {
                let output = self.touch.moved(&contacts);
                self.apply_touch_output(output, None)
            }
            Message::TouchEnded { contacts, at } => {
                let output = self.touch.end(&contacts);
                self.apply_touch_output(output, Some(at))
            }
            Message::KeyPressed(ViewerKey::Escape) => Effect::Close(CloseReason::Escape),
            Message::KeyPressed(ViewerKey::ArrowLeft) | Message::Previous => {
                self.navigate(NavigationTrigger::Previous, CarouselNavigator::previous)
            }
            Message::KeyPressed(ViewerKey::ArrowRight) | Message::Next => {
                self.navigate(NavigationTrigger::Next, CarouselNavigator::next)
            }
            Message::Select(index) => {
                self.navigate(NavigationTrigger::Select, |nav| nav.select(index))
            }
            Message::BackdropClicked => {
                if self.transform.scale().is_zoomed() {
                    Effect::None
                } else {
                    Effect::Close(CloseReason::Backdrop)
                }
            }
            Message::Close => Effect::Close(CloseReason::Requested),
        }
    }

    fn apply_touch_output(&mut self, output: TouchOutput, at: Option<Instant>) -> Effect {
        match output {
            TouchOutput::None => Effect::None,
            TouchOutput::ScaleBy(ratio) => {
                let before = self.transform;
                self.transform.apply_scale_multiply(ratio);
                changed(before, self.transform)
            }
            TouchOutput::TranslateBy(delta) => {
                if self.transform.apply_translate(delta) {
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
            TouchOutput::Released { tap } => {
                let before = self.transform;

                let snapped = self.transform.snap_back(self.settings.snap_tolerance);
                if snapped && !before.is_identity() {
                    log::debug!("Snapped back to identity from {:.3}", before.scale().value());
                    self.diagnostics.record(DiagnosticEventKind::SnapBack {
                        scale: before.scale().value(),
                    });
                }

                if let (true, Some(at)) = (tap, at) {
                    if self.double_tap.register_tap(at) {
                        self.transform.toggle_double_tap_zoom(self.settings.double_tap_scale);
                        let scale = self.transform.scale().value();
                        log::debug!("Double-tap toggled zoom to {:.2}", scale);
                        self.diagnostics.record(DiagnosticEventKind::DoubleTap { scale });
                    }
                }

                changed(before, self.transform)
            }
        }
    }

    /// Single path for every index change, so the transform reset cannot be skipped.
    fn navigate(
        &mut self,
        trigger: NavigationTrigger,
        step: impl FnOnce(&mut CarouselNavigator) -> usize,
    ) -> Effect {
        let from = self.navigator.current_index();
        if self.double_tap.is_pending() {
            log::debug!("Discarding pending tap on image {}", from);
        }
        // Gestures never span images.
        self.transform.reset_to_identity();
        self.touch = TouchSession::default();
        self.double_tap.reset();
        let to = step(&mut self.navigator);

        log::debug!("Navigated {:?} from {} to {}", trigger, from, to);
        self.diagnostics.record(DiagnosticEventKind::Navigated { from, to, trigger });
        Effect::Navigated(to)
    }

    /// Snapshot for rendering the active image.
    #[must_use]
    pub fn state(&self) -> ViewerState {
        let translation = self.transform.translation();
        ViewerState {
            current_index: self.navigator.current_index(),
            scale: self.transform.scale().value(),
            translate_x: translation.x,
            translate_y: translation.y,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn current_image(&self) -> &str {
        self.navigator.current_image()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.navigator.len()
    }

    /// Whether prev/next controls and the thumbnail strip are worth showing.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.navigator.has_multiple()
    }

    /// Position indicator such as `"2 / 3"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.navigator.position_label()
    }

    /// Thumbnail strip entries, with the current image selected.
    pub fn thumbnails(&self) -> impl Iterator<Item = Thumbnail<'_>> {
        let current = self.navigator.current_index();
        self.navigator
            .images()
            .iter()
            .enumerate()
            .map(move |(index, image)| Thumbnail {
                index,
                image,
                selected: index == current,
            })
    }

    /// Gesture currently being tracked.
    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.touch.mode()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    pub(crate) fn record_closed(&mut self, reason: CloseReason) {
        self.diagnostics.record(DiagnosticEventKind::Closed { reason });
    }
}

fn changed(before: ZoomPanState, after: ZoomPanState) -> Effect {
    if before == after {
        Effect::None
    } else {
        Effect::TransformChanged
    }
}
