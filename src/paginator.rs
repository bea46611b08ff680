//! Page indicator shown under the sliding label.
//!
//! The indicator renders one dot per text with the current one highlighted,
//! e.g. `"○ • ○"`. It only holds display state; the sliding text widget
//! decides which page is current.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Default tint for inactive dots.
pub const DEFAULT_TINT_COLOR: &str = "#000000";
/// Default tint for the active dot.
pub const DEFAULT_ACTIVE_TINT_COLOR: &str = "#00FF00";

/// A page indicator model.
///
/// # Examples
///
/// ```rust
/// use slidingtext::paginator::Model;
///
/// let mut indicator = Model::new();
/// indicator.set_total_pages(3);
/// indicator.set_page(1);
///
/// let plain = lipgloss_extras::lipgloss::strip_ansi(&indicator.view());
/// assert_eq!(plain, "○ • ○");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The character to use for the active page.
    pub active_dot: String,
    /// The character to use for inactive pages.
    pub inactive_dot: String,

    page: usize,
    total_pages: usize,
    tint_color: String,
    active_tint_color: String,
    tint_style: Style,
    active_tint_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            page: 0,
            total_pages: 1,
            tint_color: DEFAULT_TINT_COLOR.to_string(),
            active_tint_color: DEFAULT_ACTIVE_TINT_COLOR.to_string(),
            tint_style: tint(DEFAULT_TINT_COLOR),
            active_tint_style: tint(DEFAULT_ACTIVE_TINT_COLOR),
        }
    }
}

fn tint(color: &str) -> Style {
    Style::new().foreground(lipgloss::Color::from(color))
}

impl Model {
    /// Creates an indicator with a single page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page, 0-indexed.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages shown.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Sets the current page, clamped to the last page.
    ///
    /// ```rust
    /// use slidingtext::paginator::Model;
    ///
    /// let mut indicator = Model::new();
    /// indicator.set_total_pages(3);
    /// indicator.set_page(7);
    /// assert_eq!(indicator.page(), 2);
    /// ```
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Sets the total number of pages.
    ///
    /// The minimum value is 1. If the current page becomes out of bounds it
    /// is moved to the last valid page.
    ///
    /// ```rust
    /// use slidingtext::paginator::Model;
    ///
    /// let mut indicator = Model::new();
    /// indicator.set_total_pages(10);
    /// indicator.set_page(9);
    /// indicator.set_total_pages(5);
    /// assert_eq!(indicator.page(), 4);
    /// ```
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages.max(1);
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Color of the inactive dots.
    pub fn tint_color(&self) -> &str {
        &self.tint_color
    }

    /// Sets the color of the inactive dots.
    pub fn set_tint_color(&mut self, color: &str) {
        self.tint_color = color.to_string();
        self.tint_style = tint(color);
    }

    /// Color of the active dot.
    pub fn active_tint_color(&self) -> &str {
        &self.active_tint_color
    }

    /// Sets the color of the active dot.
    ///
    /// Only the styling changes; the rendered glyphs stay the same.
    ///
    /// ```rust
    /// use slidingtext::paginator::Model;
    ///
    /// let mut indicator = Model::new();
    /// indicator.set_active_tint_color("#FF00FF");
    /// assert_eq!(indicator.active_tint_color(), "#FF00FF");
    /// ```
    pub fn set_active_tint_color(&mut self, color: &str) {
        self.active_tint_color = color.to_string();
        self.active_tint_style = tint(color);
    }

    /// Renders the indicator.
    pub fn view(&self) -> String {
        let mut s = String::new();
        for i in 0..self.total_pages {
            if i == self.page {
                s.push_str(&self.active_tint_style.render(&self.active_dot));
            } else {
                s.push_str(&self.tint_style.render(&self.inactive_dot));
            }
            if i < self.total_pages - 1 {
                s.push(' ');
            }
        }
        s
    }
}
