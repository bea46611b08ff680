//! View rendering for the sliding text component.

use super::model::Model;
use super::types::{INDICATOR_BOTTOM_INSET, LABEL_TOP_INSET, SIDE_MARGIN};
use crate::label::layout;
use crate::transition::slide_row;
use lipgloss_extras::lipgloss;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the widget.
    ///
    /// With a height set, the label sits `LABEL_TOP_INSET` rows below the
    /// top and the indicator `INDICATOR_BOTTOM_INSET` rows above the
    /// bottom; label rows that do not fit are dropped. Without a height the
    /// label is followed by one blank row and the indicator.
    pub fn view(&self) -> String {
        let label_rows = self.label_rows();
        let label_width = label_rows
            .first()
            .map(|r| UnicodeWidthStr::width(r.as_str()))
            .unwrap_or(0);

        let indicator = self.indicator.view();
        let indicator_width = lipgloss::width_visible(&indicator);

        let (total_width, margin) = if self.width == 0 {
            (label_width.max(indicator_width), 0)
        } else {
            (self.width, self.width.saturating_sub(self.content_width()) / 2)
        };

        let blank = " ".repeat(total_width);
        let styled_label: Vec<String> = label_rows
            .iter()
            .map(|row| {
                let right = total_width.saturating_sub(margin + label_width);
                format!(
                    "{}{}{}",
                    " ".repeat(margin),
                    self.label.render_row(row),
                    " ".repeat(right)
                )
            })
            .collect();
        let indicator_row = pad_center(&indicator, indicator_width, total_width);

        let mut out: Vec<String> = Vec::new();
        if self.height == 0 {
            out.extend(styled_label);
            out.push(blank);
            out.push(indicator_row);
            return out.join("\n");
        }

        let available = self
            .height
            .saturating_sub(LABEL_TOP_INSET + 1 + INDICATOR_BOTTOM_INSET);
        for _ in 0..LABEL_TOP_INSET.min(self.height) {
            out.push(blank.clone());
        }
        out.extend(styled_label.into_iter().take(available));
        let indicator_at = self.height.saturating_sub(INDICATOR_BOTTOM_INSET + 1);
        while out.len() < indicator_at {
            out.push(blank.clone());
        }
        if out.len() < self.height {
            out.push(indicator_row);
        }
        while out.len() < self.height {
            out.push(blank.clone());
        }
        out.truncate(self.height);
        out.join("\n")
    }

    /// Cells available to the label: the width minus `SIDE_MARGIN` on each
    /// side, never less than one cell. 0 when the widget sizes to content.
    fn content_width(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.width.saturating_sub(2 * SIDE_MARGIN).max(1)
        }
    }

    /// Plain label rows, all the same width, mid-push if a transition runs.
    fn label_rows(&self) -> Vec<String> {
        let content_width = self.content_width();

        if !self.transition.is_animating() {
            return self.label.rows(content_width);
        }

        let from = self.transition.from();
        let to = self.transition.to();
        let width = if content_width == 0 {
            widest(from).max(widest(to))
        } else {
            content_width
        };

        let mut old_rows = layout(from, width);
        let mut new_rows = layout(to, width);
        let count = old_rows.len().max(new_rows.len());
        old_rows.resize(count, " ".repeat(width));
        new_rows.resize(count, " ".repeat(width));

        let offset = self.transition.offset(width);
        let edge = self.transition.edge();
        old_rows
            .iter()
            .zip(new_rows.iter())
            .map(|(old, new)| slide_row(old, new, width, offset, edge))
            .collect()
    }
}

fn widest(text: &str) -> usize {
    layout(text, 0)
        .first()
        .map(|r| UnicodeWidthStr::width(r.as_str()))
        .unwrap_or(0)
}

fn pad_center(styled: &str, visible_width: usize, width: usize) -> String {
    if visible_width >= width {
        return styled.to_string();
    }
    let left = (width - visible_width) / 2;
    let right = width - visible_width - left;
    format!("{}{}{}", " ".repeat(left), styled, " ".repeat(right))
}
