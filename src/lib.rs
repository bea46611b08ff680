#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/slidingtext/")]

//! # slidingtext
//!
//! A rotating text label for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. The widget shows one text at a time from a list, advances
//! to the next one on a repeating timer, draws a page indicator underneath
//! and, when gestures are enabled, lets the user swipe back and forth. Every
//! change of text is animated with a push transition.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture like every bubbletea-rs
//! component: `init()` hands out the first timer tick, `update()` consumes
//! ticks, animation frames, swipes and key presses, and `view()` renders
//! the current state.
//!
//! ```rust
//! use slidingtext::prelude::*;
//!
//! let mut widget = SlidingText::new();
//! widget.set_texts_source("Welcome|n Swipe to browse|n Enjoy");
//! widget.set_gestures_enabled(true);
//!
//! assert_eq!(widget.current_text(), "Welcome");
//! let _cmd = widget.swipe(Swipe::Left);
//! assert_eq!(widget.current_text(), "Swipe to browse");
//! ```
//!
//! ## Configuration
//!
//! A widget can also be built from TOML:
//!
//! ```rust
//! use slidingtext::{Config, SlidingText};
//!
//! let config = Config::from_toml_str(r#"
//!     texts = ["One", "Two"]
//!     slide_interval = 2.0
//! "#).unwrap();
//! let widget = SlidingText::from_config(&config).unwrap();
//! assert_eq!(widget.texts(), ["One", "Two"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`slidingtext`] | The widget itself |
//! | [`timer`] | Repeating, cancellable slide timer |
//! | [`transition`] | Push transition between two texts |
//! | [`label`] | Styled, wrapped and centered text |
//! | [`paginator`] | Dot page indicator |
//! | [`key`] | Key bindings used for swipe navigation |
//! | [`config`] | TOML configuration |
//! | [`error`] | Error type |

pub mod config;
pub mod error;
pub mod key;
pub mod label;
pub mod paginator;
pub mod slidingtext;
pub mod timer;
pub mod transition;

pub use config::{Config, Texts};
pub use error::{Error, Result};
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use label::Model as Label;
pub use paginator::Model as Paginator;
pub use slidingtext::{
    default_key_map as slidingtext_default_key_map, new as slidingtext_new,
    KeyMap as SlidingTextKeyMap, Model as SlidingText, Swipe, SwipeMsg, DELIMITER,
    PLACEHOLDER_TEXT,
};
pub use timer::{Model as Timer, TickMsg as TimerTickMsg};
pub use transition::{Edge, FrameMsg as TransitionFrameMsg};

/// Prelude module for convenient imports.
///
/// ```rust
/// use slidingtext::prelude::*;
///
/// let widget = slidingtext_new();
/// assert!(!widget.is_paused());
/// ```
pub mod prelude {
    pub use crate::config::{Config, Texts};
    pub use crate::error::{Error, Result};
    pub use crate::key::{
        matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::slidingtext::{
        default_key_map as slidingtext_default_key_map, new as slidingtext_new,
        KeyMap as SlidingTextKeyMap, Model as SlidingText, Swipe, SwipeMsg,
    };
}
