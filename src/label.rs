//! Styled, centered, word-wrapped text label.
//!
//! The label keeps the font configuration a graphical host would use and
//! maps what a terminal can express onto lipgloss attributes: the color
//! becomes the foreground, font names containing "bold" or "italic" turn on
//! those attributes, and sizes of [`LARGE_FONT_SIZE`] and up render bold.
//!
//! Layout works on plain rows so callers (the push transition in
//! particular) can cut them by cell before styling.

use crate::error::{Error, Result};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Default label color.
pub const DEFAULT_COLOR: &str = "#000000";
/// Default font family.
pub const DEFAULT_FONT_NAME: &str = "Avenir Next";
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 17.0;
/// Font sizes at or above this render bold.
pub const LARGE_FONT_SIZE: f64 = 24.0;

/// A text label.
#[derive(Debug, Clone)]
pub struct Model {
    text: String,
    color: String,
    font_name: String,
    font_size: f64,
    style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self::new("")
    }
}

impl Model {
    /// Creates a label showing `text` with the default style.
    pub fn new(text: &str) -> Self {
        let mut m = Self {
            text: text.to_string(),
            color: DEFAULT_COLOR.to_string(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            style: Style::new(),
        };
        m.restyle();
        m
    }

    /// Text currently shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the shown text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Foreground color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the foreground color.
    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
        self.restyle();
    }

    /// Configured font family.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Sets the font family.
    pub fn set_font_name(&mut self, name: &str) {
        self.font_name = name.to_string();
        self.restyle();
    }

    /// Configured font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Sets the font size in points.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFontSize`] for zero, negative or non-finite sizes;
    /// the previous size stays in force.
    ///
    /// ```rust
    /// use slidingtext::label::Model;
    ///
    /// let mut label = Model::new("hi");
    /// label.set_font_size(28.0).unwrap();
    /// assert!(label.is_bold());
    ///
    /// assert!(label.set_font_size(f64::NAN).is_err());
    /// assert_eq!(label.font_size(), 28.0);
    /// ```
    pub fn set_font_size(&mut self, size: f64) -> Result<()> {
        if !valid_font_size(size) {
            return Err(Error::invalid_font_size(size));
        }
        self.font_size = size;
        self.restyle();
        Ok(())
    }

    /// Whether the current font renders bold.
    pub fn is_bold(&self) -> bool {
        self.font_name.to_lowercase().contains("bold") || self.font_size >= LARGE_FONT_SIZE
    }

    /// Whether the current font renders italic.
    pub fn is_italic(&self) -> bool {
        let name = self.font_name.to_lowercase();
        name.contains("italic") || name.contains("oblique")
    }

    fn restyle(&mut self) {
        self.style = Style::new()
            .foreground(lipgloss::Color::from(self.color.as_str()))
            .bold(self.is_bold())
            .italic(self.is_italic());
    }

    /// Applies the label style to a plain row.
    pub fn render_row(&self, row: &str) -> String {
        self.style.render(row)
    }

    /// Lays out the label's own text. See [`layout`].
    pub fn rows(&self, width: usize) -> Vec<String> {
        layout(&self.text, width)
    }

    /// Renders the label into `width` cells.
    pub fn view(&self, width: usize) -> String {
        self.rows(width)
            .iter()
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether `size` is usable as a font size in points.
pub fn valid_font_size(size: f64) -> bool {
    size.is_finite() && size > 0.0
}

/// Wraps `text` to `width` cells and centers every row.
///
/// Each returned row is exactly `width` cells wide. A `width` of 0 disables
/// wrapping; rows are then centered within the widest one.
///
/// ```rust
/// use slidingtext::label::layout;
///
/// assert_eq!(layout("hi", 6), vec!["  hi  "]);
/// assert_eq!(layout("one two", 4), vec!["one ", "two "]);
/// ```
pub fn layout(text: &str, width: usize) -> Vec<String> {
    let lines: Vec<String> = if width == 0 {
        text.split('\n').map(str::to_string).collect()
    } else {
        text.split('\n').flat_map(|p| wrap(p, width)).collect()
    };

    let width = if width == 0 {
        lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0)
    } else {
        width
    };

    lines.iter().map(|l| center(l, width)).collect()
}

/// Greedy word wrap by display width. Words wider than `width` are broken
/// between graphemes.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if word_width > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for g in word.graphemes(true) {
                let w = UnicodeWidthStr::width(g);
                if current_width + w > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(g);
                current_width += w;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn center(line: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(line);
    if w >= width {
        return line.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let label = Model::new("hello");
        assert_eq!(label.text(), "hello");
        assert_eq!(label.color(), DEFAULT_COLOR);
        assert_eq!(label.font_name(), DEFAULT_FONT_NAME);
        assert_eq!(label.font_size(), DEFAULT_FONT_SIZE);
        assert!(!label.is_bold());
        assert!(!label.is_italic());
    }

    #[test]
    fn test_font_attributes() {
        let mut label = Model::new("x");
        label.set_font_name("Avenir Next Bold Italic");
        assert!(label.is_bold());
        assert!(label.is_italic());

        label.set_font_name("Menlo");
        assert!(!label.is_bold());
        label.set_font_size(LARGE_FONT_SIZE).unwrap();
        assert!(label.is_bold());
    }

    #[test]
    fn test_rejects_bad_font_sizes() {
        let mut label = Model::new("x");
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let err = label.set_font_size(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidFontSize { .. }));
        }
        assert_eq!(label.font_size(), DEFAULT_FONT_SIZE);
        assert!(!label.is_bold());
    }

    #[test]
    fn test_center_odd_padding() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty_paragraph() {
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_layout_keeps_explicit_newlines() {
        assert_eq!(layout("a\nbb", 4), vec![" a  ", " bb "]);
    }

    #[test]
    fn test_layout_unbounded_width() {
        assert_eq!(layout("a\nbbb", 0), vec![" a ", "bbb"]);
    }

    #[test]
    fn test_view_contains_text() {
        let label = Model::new("hello");
        let plain = lipgloss::strip_ansi(&label.view(9)).to_string();
        assert_eq!(plain, "  hello  ");
    }
}
