//! Key bindings for slidingtext components.
//!
//! A [`Binding`] groups one or more key presses with a short help entry.
//! Bindings are built with the option style used throughout the crate:
//!
//! ```rust
//! use slidingtext::key::{new_binding, with_help, with_keys_str};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next text"),
//! ]);
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key description such as `"left"`, `"l"` or `"ctrl+n"`.
    ///
    /// Returns `None` for names that do not map to a single key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Terminals report SHIFT inconsistently for printable characters.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        (self.modifiers & relevant) == (msg.modifiers & relevant)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Keys that trigger the binding.
    Keys(Vec<KeyPress>),
    /// Help text for the binding.
    Help(Help),
    /// Starts the binding disabled.
    Disabled,
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => b.keys = keys,
            BindingOpt::Help(help) => b.help = help,
            BindingOpt::Disabled => b.disabled = true,
        }
    }
    b
}

/// Sets the binding's keys from their string descriptions.
///
/// Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|k| KeyPress::parse(k)).collect())
}

/// Sets the binding's keys directly.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt::Keys(keys)
}

/// Sets the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

impl Binding {
    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the bound key presses.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled when it is not disabled and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key maps that can describe themselves for help views.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("left").map(|k| k.code), Some(KeyCode::Left));
        assert_eq!(KeyPress::parse("l").map(|k| k.code), Some(KeyCode::Char('l')));
        assert_eq!(KeyPress::parse("space").map(|k| k.code), Some(KeyCode::Char(' ')));
        assert!(KeyPress::parse("nonsense").is_none());
    }

    #[test]
    fn test_parse_modifiers() {
        let k = KeyPress::parse("ctrl+alt+n").unwrap();
        assert_eq!(k.code, KeyCode::Char('n'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
        assert!(k.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_binding_matches() {
        let b = new_binding(vec![with_keys_str(&["right", "l"]), with_help("→/l", "next")]);

        assert!(b.matches(&key(KeyCode::Right)));
        assert!(b.matches(&key(KeyCode::Char('l'))));
        assert!(!b.matches(&key(KeyCode::Left)));
        assert_eq!(b.help().desc, "next");
    }

    #[test]
    fn test_modifiers_must_agree() {
        let b = new_binding(vec![with_keys_str(&["ctrl+n"])]);
        assert!(!b.matches(&key(KeyCode::Char('n'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["h"]), with_disabled()]);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Char('h'))));

        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Char('h'))));
    }

    #[test]
    fn test_matches_any() {
        let a = new_binding(vec![with_keys_str(&["a"])]);
        let b = new_binding(vec![with_keys_str(&["b"])]);
        assert!(matches(&key(KeyCode::Char('b')), &[&a, &b]));
        assert!(!matches(&key(KeyCode::Char('c')), &[&a, &b]));
    }
}
