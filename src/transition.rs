//! Push transition for label text changes.
//!
//! A push slides the new text in from one edge while the old text leaves
//! through the opposite edge. The animation runs for [`DURATION`] with an
//! ease-in-ease-out curve and is driven by [`FrameMsg`]s, one per frame at
//! [`FPS`]. Like the timer, every push bumps a tag so frames belonging to a
//! superseded push are ignored.
//!
//! The model only tracks progress; [`slide_row`] does the cell-level work of
//! cutting a window out of the old and new rows.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames per second while a push is running.
pub const FPS: u32 = 60;
/// Length of one push.
pub const DURATION: Duration = Duration::from_millis(500);

/// The edge the new text enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// New text enters from the right, old text exits left.
    Trailing,
    /// New text enters from the left, old text exits right.
    Leading,
}

/// Advances a running push by one frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
    tag: i64,
}

/// Push transition state.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    tag: i64,
    edge: Edge,
    from: String,
    to: String,
    frame: u32,
    total_frames: u32,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle transition.
    pub fn new() -> Self {
        let total_frames = (DURATION.as_millis() as u32 * FPS).div_ceil(1000);
        Self {
            id: next_id(),
            tag: 0,
            edge: Edge::Trailing,
            from: String::new(),
            to: String::new(),
            frame: total_frames,
            total_frames,
        }
    }

    /// Starts pushing `to` over `from`, entering from `edge`.
    ///
    /// Any push already running is superseded.
    pub fn push(&mut self, from: &str, to: &str, edge: Edge) -> Cmd {
        self.from = from.to_string();
        self.to = to.to_string();
        self.edge = edge;
        self.frame = 0;
        self.tag += 1;
        tracing::trace!(id = self.id, tag = self.tag, ?edge, "push transition started");
        self.next_frame()
    }

    /// Stops any running push; the target text is shown as-is.
    pub fn finish(&mut self) {
        self.frame = self.total_frames;
        self.tag += 1;
    }

    /// Handles a frame message, returning the next frame while animating.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let frame_msg = msg.downcast_ref::<FrameMsg>()?;
        if frame_msg.id != self.id || frame_msg.tag != self.tag {
            return None;
        }
        if !self.is_animating() {
            return None;
        }

        self.frame += 1;
        if self.is_animating() {
            Some(self.next_frame())
        } else {
            None
        }
    }

    /// Whether frames are still pending.
    pub fn is_animating(&self) -> bool {
        self.frame < self.total_frames
    }

    /// The entering edge of the current (or last) push.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Text being pushed out.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Text being pushed in.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Eased completion in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_frames == 0 {
            return 1.0;
        }
        let t = (self.frame as f64 / self.total_frames as f64).clamp(0.0, 1.0);
        ease_in_ease_out(t)
    }

    /// How many cells of a `width`-wide row the new text has covered.
    pub fn offset(&self, width: usize) -> usize {
        ((width as f64) * self.progress()).round() as usize
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

fn ease_in_ease_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// One terminal cell of a row. Wide graphemes take a cell plus a
/// continuation cell holding `None`.
fn cells(row: &str, width: usize) -> Vec<Option<&str>> {
    let mut out = Vec::with_capacity(width);
    for g in row.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if w == 0 {
            continue;
        }
        if out.len() + w > width {
            break;
        }
        out.push(Some(g));
        for _ in 1..w {
            out.push(None);
        }
    }
    while out.len() < width {
        out.push(Some(" "));
    }
    out
}

/// Renders one row of a push at `offset` cells of progress.
///
/// `old` and `new` are plain (unstyled) rows; both are clipped or padded to
/// `width` cells. Wide graphemes cut by the window edges become spaces.
///
/// ```rust
/// use slidingtext::transition::{slide_row, Edge};
///
/// assert_eq!(slide_row("abc", "xyz", 3, 1, Edge::Trailing), "bcx");
/// assert_eq!(slide_row("abc", "xyz", 3, 1, Edge::Leading), "zab");
/// ```
pub fn slide_row(old: &str, new: &str, width: usize, offset: usize, edge: Edge) -> String {
    let offset = offset.min(width);
    let old_cells = cells(old, width);
    let new_cells = cells(new, width);

    let (strip, start) = match edge {
        Edge::Trailing => ([old_cells, new_cells].concat(), offset),
        Edge::Leading => ([new_cells, old_cells].concat(), width - offset),
    };
    let window = &strip[start..start + width];

    let mut s = String::with_capacity(width);
    for (i, cell) in window.iter().enumerate() {
        match cell {
            None => {
                // Continuation of a wide grapheme whose head is off-window.
                if i == 0 {
                    s.push(' ');
                }
            }
            Some(g) => {
                let w = UnicodeWidthStr::width(*g);
                if i + w > width {
                    s.push(' ');
                } else {
                    s.push_str(g);
                }
            }
        }
    }
    s
}
