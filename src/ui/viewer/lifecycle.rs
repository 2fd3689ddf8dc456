// SPDX-License-Identifier: MPL-2.0
//! Open/close lifecycle of a fullscreen viewer.
//!
//! Opening a viewer takes two host-wide resources: the page/body scroll lock
//! and a window-level keyboard listener. Each is held by a guard that releases
//! it on drop, and [`ViewerSession::close`] drops both exactly once, whichever
//! path triggered the close (Escape, backdrop click, host request or drop).

use super::component::{Effect, Message, Viewer};
use super::input::{viewer_key, ActiveContacts};
use super::state::ViewerState;
use crate::config::Config;
use crate::diagnostics::CloseReason;
use crate::image_navigation::ImageSequence;
use iced_core::{keyboard, touch};
use std::rc::Rc;
use std::time::Instant;

/// Host hooks for the resources a fullscreen viewer holds while open.
///
/// Implementations are called once per acquire and once per release.
pub trait ViewerEnvironment {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn attach_keyboard_listener(&self);
    fn detach_keyboard_listener(&self);
}

struct ScrollLock {
    env: Rc<dyn ViewerEnvironment>,
}

impl ScrollLock {
    fn acquire(env: Rc<dyn ViewerEnvironment>) -> Self {
        env.lock_scroll();
        Self { env }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.env.unlock_scroll();
    }
}

struct KeyboardListener {
    env: Rc<dyn ViewerEnvironment>,
}

impl KeyboardListener {
    fn attach(env: Rc<dyn ViewerEnvironment>) -> Self {
        env.attach_keyboard_listener();
        Self { env }
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        self.env.detach_keyboard_listener();
    }
}

/// Resources held while the session is open.
/// Field order is release order: the listener goes first, then the scroll lock.
struct OpenResources {
    _keyboard: KeyboardListener,
    _scroll: ScrollLock,
}

/// A viewer plus the resources it holds while open.
pub struct ViewerSession {
    viewer: Viewer,
    contacts: ActiveContacts,
    resources: Option<OpenResources>,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl ViewerSession {
    /// Opens a viewer over `images`, acquiring the scroll lock and the
    /// keyboard listener. `on_close` runs once, when the session closes.
    pub fn open(
        env: Rc<dyn ViewerEnvironment>,
        images: ImageSequence,
        initial_index: usize,
        config: &Config,
        on_close: impl FnOnce() + 'static,
    ) -> Self {
        let viewer = Viewer::with_config(images, initial_index, config);
        let scroll = ScrollLock::acquire(Rc::clone(&env));
        let keyboard = KeyboardListener::attach(env);

        log::info!(
            "Viewer opened on image {} of {}",
            viewer.current_index() + 1,
            viewer.image_count()
        );

        Self {
            viewer,
            contacts: ActiveContacts::default(),
            resources: Some(OpenResources {
                _keyboard: keyboard,
                _scroll: scroll,
            }),
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Feeds a message to the viewer. A close effect closes the session
    /// before returning; messages after close are ignored.
    pub fn handle(&mut self, msg: Message) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }

        let effect = self.viewer.handle(msg);
        if let Effect::Close(reason) = effect {
            self.close(reason);
        }
        effect
    }

    /// Feeds a raw iced touch event through the session's contact table.
    pub fn handle_touch(&mut self, event: touch::Event, at: Instant) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        match self.contacts.apply(event, at) {
            Some(msg) => self.handle(msg),
            None => Effect::None,
        }
    }

    /// Feeds a raw iced keyboard event. Keys the viewer ignores yield no effect.
    pub fn handle_keyboard(&mut self, event: &keyboard::Event) -> Effect {
        match viewer_key(event) {
            Some(key) => self.handle(Message::KeyPressed(key)),
            None => Effect::None,
        }
    }

    /// Releases both resources and runs `on_close`.
    ///
    /// Returns false if the session was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let Some(resources) = self.resources.take() else {
            return false;
        };
        drop(resources);
        self.contacts.clear();

        self.viewer.record_closed(reason);
        log::info!("Viewer closed ({:?})", reason);

        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.resources.is_some()
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Render snapshot of the active image.
    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.viewer.state()
    }
}

impl Drop for ViewerSession {
    fn drop(&mut self) {
        self.close(CloseReason::Requested);
    }
}

impl std::fmt::Debug for ViewerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerSession")
            .field("viewer", &self.viewer)
            .field("open", &self.is_open())
            .finish()
    }
}
