// SPDX-License-Identifier: MPL-2.0
//! Fullscreen carousel viewer: the controller, its input adapters and its
//! open/close lifecycle.
//!
//! ```text
//! iced touch/keyboard events
//!     └── input        - contact table, key mapping → Message
//! component.rs (orchestrator)
//!     ├── TouchSession       - gesture classification and deltas
//!     ├── ZoomPanState       - bounded scale/translation
//!     ├── DoubleTapDetector  - tap pairing
//!     └── CarouselNavigator  - index and wraparound
//! lifecycle.rs
//!     └── ViewerSession - scroll lock + keyboard listener guards, on_close,
//!                         raw iced events through input
//! ```

pub mod component;
pub mod input;
pub mod lifecycle;
pub mod state;

pub use component::{Effect, Message, Viewer, ViewerKey};
pub use input::{viewer_key, ActiveContacts};
pub use lifecycle::{ViewerEnvironment, ViewerSession};
pub use state::{Thumbnail, ViewerState};
