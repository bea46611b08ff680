//! Key bindings that stand in for swipe gestures.

use crate::key::{self, new_binding, with_disabled, with_help, with_keys_str, Binding};

/// Key bindings for swipe navigation.
///
/// The bindings start disabled and are switched on together with the
/// widget's gestures.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Acts as a left swipe: show the next text.
    pub next: Binding,
    /// Acts as a right swipe: show the previous text.
    pub prev: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Default swipe bindings: `→`/`l` for next, `←`/`h` for previous.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next: new_binding(vec![
            with_keys_str(&["right", "l"]),
            with_help("→/l", "next"),
            with_disabled(),
        ]),
        prev: new_binding(vec![
            with_keys_str(&["left", "h"]),
            with_help("←/h", "previous"),
            with_disabled(),
        ]),
    }
}

impl KeyMap {
    pub(super) fn set_enabled(&mut self, enabled: bool) {
        self.next.set_enabled(enabled);
        self.prev.set_enabled(enabled);
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.prev, &self.next]]
    }
}
