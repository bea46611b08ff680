//! Core model implementation for the sliding text component.

use super::keymap::{default_key_map, KeyMap};
use super::types::{
    normalize_texts, parse_texts, Swipe, SwipeMsg, DEFAULT_SLIDE_INTERVAL, PLACEHOLDER_TEXT,
};
use crate::config::{Config, Texts};
use crate::error::{Error, Result};
use crate::label::Model as Label;
use crate::paginator::Model as Indicator;
use crate::timer::{Model as Timer, TickMsg};
use crate::transition::{Edge, FrameMsg, Model as Transition};
use bubbletea_rs::{batch, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A label that cycles through texts on a timer, with a page indicator,
/// optional swipe navigation and push transitions.
///
/// The widget is `Running` right after construction: its timer is armed
/// and [`Model::init`] hands out the first tick. Every live tick advances
/// the index by one, wrapping to 0 after the last text. Swipes (when
/// enabled) jump the index immediately and restart the timer from a fresh
/// interval.
///
/// # Examples
///
/// ```rust
/// use slidingtext::slidingtext::{new, Swipe};
///
/// let mut widget = new();
/// widget.set_texts_source("First|n Second|n Third");
/// widget.set_gestures_enabled(true);
///
/// assert_eq!(widget.current_text(), "First");
/// let _cmd = widget.swipe(Swipe::Right);
/// assert_eq!(widget.current_index(), 2);
/// assert!(!widget.is_paused());
/// ```
pub struct Model {
    /// Swipe key bindings. Only honored while gestures are enabled.
    pub key_map: KeyMap,

    pub(super) id: i64,
    pub(super) texts: Vec<String>,
    pub(super) texts_source: String,
    pub(super) index: usize,
    pub(super) slide_interval: f64,
    pub(super) gestures_enabled: bool,
    pub(super) width: usize,
    pub(super) height: usize,

    pub(super) label: Label,
    pub(super) indicator: Indicator,
    pub(super) timer: Timer,
    pub(super) transition: Transition,
}

/// Creates a running sliding text with the default style and the
/// placeholder text.
pub fn new() -> Model {
    Model::new()
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a running sliding text with the default style and the
    /// placeholder text.
    pub fn new() -> Self {
        let texts = vec![PLACEHOLDER_TEXT.to_string()];
        let mut indicator = Indicator::new();
        indicator.set_total_pages(texts.len());

        let mut m = Self {
            key_map: default_key_map(),
            id: next_id(),
            label: Label::new(&texts[0]),
            texts,
            texts_source: String::new(),
            index: 0,
            slide_interval: DEFAULT_SLIDE_INTERVAL,
            gestures_enabled: false,
            width: 0,
            height: 0,
            indicator,
            timer: Timer::new(Duration::from_secs_f64(DEFAULT_SLIDE_INTERVAL)),
            transition: Transition::new(),
        };
        m.timer.arm();
        m
    }

    /// Builds a widget from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut m = Self::new();
        match &config.texts {
            Some(Texts::Source(raw)) => m.set_texts_source(raw),
            Some(Texts::List(list)) => m.set_texts(list),
            None => {}
        }
        m.set_label_color(&config.label_color);
        m.set_label_font_name(&config.label_font_name);
        m.set_label_font_size(config.label_font_size)?;
        m.set_indicator_tint_color(&config.indicator_tint_color);
        m.set_indicator_active_tint_color(&config.indicator_active_tint_color);
        // Still armed from construction; the re-armed tick comes from init().
        std::mem::drop(m.set_slide_interval(config.slide_interval)?);
        m.set_gestures_enabled(config.gestures_enabled);
        m.set_size(config.width, config.height);
        Ok(m)
    }

    /// Unique id of this widget, used to address [`SwipeMsg`]s.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the first timer tick. Run it to start rotating.
    ///
    /// Calling it again hands out a fresh first tick and invalidates the
    /// previous one, so the widget never advances twice per interval. A
    /// paused widget stays paused.
    pub fn init(&mut self) -> Cmd {
        self.timer.init()
    }

    // --- rotation state ---

    /// Whether automatic rotation is stopped.
    pub fn is_paused(&self) -> bool {
        !self.timer.running()
    }

    /// Index of the text being shown.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The text being shown (the target text while a push is running).
    pub fn current_text(&self) -> &str {
        &self.texts[self.index]
    }

    /// Stops automatic rotation. Idempotent.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.pause();
    /// widget.pause();
    /// assert!(widget.is_paused());
    /// ```
    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// Starts or resumes automatic rotation from a fresh interval.
    ///
    /// Calling it while already running restarts the interval window.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.pause();
    /// let _tick = widget.start();
    /// assert!(!widget.is_paused());
    /// ```
    pub fn start(&mut self) -> Cmd {
        self.timer.start()
    }

    /// Alias for [`Model::start`].
    pub fn resume(&mut self) -> Cmd {
        self.start()
    }

    /// Applies a swipe gesture.
    ///
    /// Returns `None` and changes nothing while gestures are disabled.
    /// Otherwise the timer is cancelled, the index moves one step, a push
    /// transition starts and the timer is re-armed; the returned command
    /// carries both the first animation frame and the next tick.
    pub fn swipe(&mut self, direction: Swipe) -> Option<Cmd> {
        if !self.gestures_enabled {
            tracing::trace!(id = self.id, ?direction, "swipe ignored, gestures disabled");
            return None;
        }

        self.timer.pause();
        let len = self.texts.len();
        let (index, edge) = match direction {
            Swipe::Left => ((self.index + 1) % len, Edge::Trailing),
            Swipe::Right => ((self.index + len - 1) % len, Edge::Leading),
        };
        tracing::debug!(id = self.id, ?direction, from = self.index, to = index, "swipe");
        let frame = self.show(index, edge);
        let tick = self.timer.start();
        Some(batch(vec![frame, tick]))
    }

    /// Moves to `index`, pushing its text in from `edge`.
    fn show(&mut self, index: usize, edge: Edge) -> Cmd {
        let from = self.label.text().to_string();
        self.index = index;
        let to = self.texts[index].clone();
        self.label.set_text(&to);
        self.indicator.set_page(index);
        self.transition.push(&from, &to, edge)
    }

    fn advance(&mut self) -> Cmd {
        let index = (self.index + 1) % self.texts.len();
        tracing::trace!(id = self.id, from = self.index, to = index, "timer advance");
        self.show(index, Edge::Trailing)
    }

    /// Handles timer ticks, animation frames, swipe messages and, while
    /// gestures are enabled, the swipe key bindings.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.is::<TickMsg>() {
            let next_tick = self.timer.update(&msg)?;
            let frame = self.advance();
            return Some(batch(vec![frame, next_tick]));
        }

        if msg.is::<FrameMsg>() {
            return self.transition.update(&msg);
        }

        if let Some(swipe) = msg.downcast_ref::<SwipeMsg>() {
            if swipe.id != 0 && swipe.id != self.id {
                return None;
            }
            return self.swipe(swipe.direction);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.next.matches(key_msg) {
                return self.swipe(Swipe::Left);
            }
            if self.key_map.prev.matches(key_msg) {
                return self.swipe(Swipe::Right);
            }
        }

        None
    }

    // --- texts ---

    /// The texts being rotated.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The raw source last given to [`Model::set_texts_source`].
    pub fn texts_source(&self) -> &str {
        &self.texts_source
    }

    /// Replaces the texts from a raw `|n`-delimited source.
    ///
    /// Shows the first new text, resizes the indicator and resets the index
    /// to 0. The timer keeps its state.
    /// Entries are split on `|n` and lose their leading whitespace. A blank
    /// source shows the placeholder text.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::{new, PLACEHOLDER_TEXT};
    ///
    /// let mut widget = new();
    /// widget.set_texts_source("A|n  B|n\nC");
    /// assert_eq!(widget.texts(), ["A", "B", "C"]);
    /// assert_eq!(widget.current_text(), "A");
    ///
    /// widget.set_texts_source("");
    /// assert_eq!(widget.texts(), [PLACEHOLDER_TEXT]);
    /// ```
    pub fn set_texts_source(&mut self, raw: &str) {
        self.texts_source = raw.to_string();
        self.replace_texts(parse_texts(raw));
    }

    /// Replaces the texts with an explicit list. See
    /// [`Model::set_texts_source`] for the side effects.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.set_texts(&["First", "  Second"]);
    /// assert_eq!(widget.texts(), ["First", "Second"]);
    /// assert_eq!(widget.texts_source(), "");
    /// ```
    pub fn set_texts<S: AsRef<str>>(&mut self, texts: &[S]) {
        self.texts_source.clear();
        self.replace_texts(normalize_texts(texts));
    }

    fn replace_texts(&mut self, texts: Vec<String>) {
        tracing::debug!(id = self.id, count = texts.len(), "texts replaced");
        self.texts = texts;
        self.index = 0;
        self.transition.finish();
        self.label.set_text(&self.texts[0]);
        self.indicator.set_total_pages(self.texts.len());
        self.indicator.set_page(0);
    }

    // --- style ---

    /// Label foreground color.
    pub fn label_color(&self) -> &str {
        self.label.color()
    }

    /// Sets the label foreground color.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.set_label_color("#FAFAFA");
    /// assert_eq!(widget.label_color(), "#FAFAFA");
    /// ```
    pub fn set_label_color(&mut self, color: &str) {
        self.label.set_color(color);
    }

    /// Label font family.
    pub fn label_font_name(&self) -> &str {
        self.label.font_name()
    }

    /// Sets the label font family.
    ///
    /// Names containing "bold" or "italic" render with that attribute.
    pub fn set_label_font_name(&mut self, name: &str) {
        self.label.set_font_name(name);
    }

    /// Label font size in points.
    pub fn label_font_size(&self) -> f64 {
        self.label.font_size()
    }

    /// Sets the label font size in points.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFontSize`] for zero, negative or non-finite sizes;
    /// the previous size stays in force.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.set_label_font_size(24.0).unwrap();
    /// assert_eq!(widget.label_font_size(), 24.0);
    ///
    /// assert!(widget.set_label_font_size(-1.0).is_err());
    /// assert_eq!(widget.label_font_size(), 24.0);
    /// ```
    pub fn set_label_font_size(&mut self, size: f64) -> Result<()> {
        self.label.set_font_size(size).inspect_err(|_| {
            tracing::warn!(id = self.id, size, "rejected label font size");
        })
    }

    /// Inactive indicator dot color.
    pub fn indicator_tint_color(&self) -> &str {
        self.indicator.tint_color()
    }

    /// Sets the inactive indicator dot color.
    pub fn set_indicator_tint_color(&mut self, color: &str) {
        self.indicator.set_tint_color(color);
    }

    /// Active indicator dot color.
    pub fn indicator_active_tint_color(&self) -> &str {
        self.indicator.active_tint_color()
    }

    /// Sets the active indicator dot color.
    pub fn set_indicator_active_tint_color(&mut self, color: &str) {
        self.indicator.set_active_tint_color(color);
    }

    // --- timing ---

    /// Seconds between automatic advances.
    pub fn slide_interval(&self) -> f64 {
        self.slide_interval
    }

    /// Sets the seconds between automatic advances.
    ///
    /// A running widget cancels its timer and re-arms it with the new
    /// interval, so the next advance comes one new interval from now; run
    /// the returned command. A paused widget stores the value and stays
    /// paused.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInterval`] for zero, negative or non-finite values;
    /// the previous interval stays in force.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// let rearm = widget.set_slide_interval(2.5).unwrap();
    /// assert!(rearm.is_some());
    /// assert_eq!(widget.slide_interval(), 2.5);
    ///
    /// assert!(widget.set_slide_interval(0.0).is_err());
    /// assert_eq!(widget.slide_interval(), 2.5);
    /// ```
    pub fn set_slide_interval(&mut self, seconds: f64) -> Result<Option<Cmd>> {
        if !(seconds.is_finite() && seconds > 0.0) {
            tracing::warn!(id = self.id, seconds, "rejected slide interval");
            return Err(Error::invalid_interval(seconds));
        }
        self.slide_interval = seconds;
        Ok(self.timer.set_interval(Duration::from_secs_f64(seconds)))
    }

    // --- gestures ---

    /// Whether swipes are honored.
    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// Turns swipe handling on or off. Idempotent.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::{new, Swipe};
    ///
    /// let mut widget = new();
    /// widget.set_texts(&["a", "b"]);
    /// assert!(widget.swipe(Swipe::Left).is_none());
    ///
    /// widget.set_gestures_enabled(true);
    /// assert!(widget.swipe(Swipe::Left).is_some());
    /// assert_eq!(widget.current_index(), 1);
    /// ```
    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        if self.gestures_enabled != enabled {
            tracing::debug!(id = self.id, enabled, "gestures toggled");
        }
        self.gestures_enabled = enabled;
        self.key_map.set_enabled(enabled);
    }

    // --- geometry ---

    /// Width in cells; 0 means sized to content.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows; 0 means sized to content.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets the width in cells.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Sets the height in rows.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    /// Sets both dimensions.
    ///
    /// A width of 0 sizes the widget to its content; otherwise the label
    /// wraps inside one cell of margin on each side.
    ///
    /// ```rust
    /// use slidingtext::slidingtext::new;
    ///
    /// let mut widget = new();
    /// widget.set_texts(&["Hi"]);
    /// widget.set_size(10, 4);
    /// assert_eq!(widget.view().split('\n').count(), 4);
    /// ```
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Whether a push transition is still running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        let cmd = model.timer.init();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
