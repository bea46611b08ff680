//! Core types for the sliding text component.

use bubbletea_rs::Msg;

/// Separator between entries of a raw text source.
pub const DELIMITER: &str = "|n";

/// Shown when no texts have been configured.
pub const PLACEHOLDER_TEXT: &str = "Add your texts seperated by '|n'";

/// Default seconds between automatic advances.
pub const DEFAULT_SLIDE_INTERVAL: f64 = 4.0;

/// Blank rows between the top edge and the label.
pub const LABEL_TOP_INSET: usize = 1;
/// Blank columns on each side of the label.
pub const SIDE_MARGIN: usize = 1;
/// Blank rows between the indicator and the bottom edge.
pub const INDICATOR_BOTTOM_INSET: usize = 1;

/// A swipe gesture.
///
/// Directions follow the finger: swiping left pulls the next text in from
/// the right edge, swiping right brings back the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Advance to the next text.
    Left,
    /// Go back to the previous text.
    Right,
}

/// Swipe delivered by the host, for example from mouse drag tracking.
#[derive(Debug, Clone)]
pub struct SwipeMsg {
    /// Target widget id; 0 addresses every sliding text.
    pub id: i64,
    /// Direction of the swipe.
    pub direction: Swipe,
}

impl SwipeMsg {
    /// A swipe for every sliding text that receives it.
    pub fn new(direction: Swipe) -> Self {
        Self { id: 0, direction }
    }

    /// A swipe for the widget with `id` only.
    pub fn for_widget(id: i64, direction: Swipe) -> Self {
        Self { id, direction }
    }
}

impl From<SwipeMsg> for Msg {
    fn from(msg: SwipeMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Splits a raw source on [`DELIMITER`] into display texts.
///
/// Leading whitespace (newlines included) is trimmed from every entry. A
/// blank source yields the placeholder.
///
/// ```rust
/// use slidingtext::slidingtext::parse_texts;
///
/// assert_eq!(parse_texts("A|n  B|n C"), vec!["A", "B", "C"]);
/// ```
pub fn parse_texts(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return vec![PLACEHOLDER_TEXT.to_string()];
    }
    raw.split(DELIMITER)
        .map(|t| t.trim_start().to_string())
        .collect()
}

/// Trims leading whitespace from every text; an empty list yields the
/// placeholder.
pub fn normalize_texts<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let texts: Vec<String> = texts
        .into_iter()
        .map(|t| t.as_ref().trim_start().to_string())
        .collect();
    if texts.is_empty() {
        vec![PLACEHOLDER_TEXT.to_string()]
    } else {
        texts
    }
}
