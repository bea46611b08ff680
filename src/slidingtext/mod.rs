//! Sliding text component for Bubble Tea applications.
//!
//! A label that cycles through a list of texts on a timer, with a page
//! indicator underneath, optional swipe navigation and a push transition
//! whenever the text changes.
//!
//! # Basic Usage
//!
//! ```rust
//! use slidingtext::slidingtext::new;
//!
//! let mut widget = new();
//! widget.set_texts_source("Welcome|n Swipe to browse|n Enjoy");
//! widget.set_size(40, 5);
//! assert_eq!(widget.texts(), ["Welcome", "Swipe to browse", "Enjoy"]);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use slidingtext::slidingtext::Model as SlidingText;
//!
//! struct App {
//!     banner: SlidingText,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut banner = SlidingText::new();
//!         banner.set_texts_source("One|n Two|n Three");
//!         banner.set_gestures_enabled(true);
//!         let cmd = banner.init();
//!         (Self { banner }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Ticks, frames, swipes and arrow keys are all handled here.
//!         self.banner.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.banner.view()
//!     }
//! }
//! ```
//!
//! # States
//!
//! | State | Timer | Index |
//! |-------|-------|-------|
//! | Running | armed, ticks every `slide_interval` seconds | advances by one per tick |
//! | Paused | cancelled | frozen |
//!
//! `pause()` moves to Paused; `start()`/`resume()` move to Running from a
//! fresh interval window. Swipes always leave the widget Running.

pub mod keymap;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use types::{
    normalize_texts, parse_texts, Swipe, SwipeMsg, DEFAULT_SLIDE_INTERVAL, DELIMITER,
    INDICATOR_BOTTOM_INSET, LABEL_TOP_INSET, PLACEHOLDER_TEXT, SIDE_MARGIN,
};
