//! Repeating slide timer.
//!
//! The timer emits a [`TickMsg`] every `interval` while it is running. It is
//! built on `bubbletea_rs::tick`: each delivered tick is answered with the
//! command for the next one, so the chain keeps going until the timer is
//! paused or re-armed.
//!
//! Every arm bumps the timer's tag and replaces its schedule guard. Ticks
//! still in flight from an earlier schedule carry the old tag (or a
//! cancelled token) and are dropped by [`Model::update`], which guarantees
//! that at most one tick chain drives a timer at any moment.
//!
//! ```rust
//! use slidingtext::timer::Model;
//! use std::time::Duration;
//!
//! let mut timer = Model::new(Duration::from_secs(4));
//! let _first_tick = timer.start();
//! assert!(timer.running());
//!
//! timer.pause();
//! assert!(!timer.running());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered once per interval to the timer that scheduled it.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the timer that scheduled this tick.
    pub id: i64,
    tag: i64,
    cancelled: bool,
}

/// An armed tick chain. Dropping it cancels the chain.
#[derive(Debug)]
struct Schedule {
    cancelled: Arc<AtomicBool>,
}

impl Schedule {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    fn token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }
}

impl Drop for Schedule {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Repeating timer state.
#[derive(Debug)]
pub struct Model {
    interval: Duration,
    id: i64,
    tag: i64,
    schedule: Option<Schedule>,
}

impl Model {
    /// Creates a stopped timer that will tick every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            schedule: None,
        }
    }

    /// Unique id of this timer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick chain is armed.
    pub fn running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Arms a fresh tick chain and returns its first tick.
    ///
    /// Any chain that was already running is cancelled first, so the next
    /// tick always arrives one full interval from now.
    pub fn start(&mut self) -> Cmd {
        self.arm();
        self.tick()
    }

    /// Arms a fresh tick chain without producing its first tick.
    ///
    /// Used while constructing a widget that only hands out commands from
    /// `init`; call [`Model::init`] to obtain the tick.
    pub fn arm(&mut self) {
        self.cancel();
        self.tag += 1;
        self.schedule = Some(Schedule::new());
        tracing::debug!(id = self.id, tag = self.tag, interval = ?self.interval, "slide timer armed");
    }

    /// First tick of the armed chain.
    ///
    /// A running timer is re-armed first, so ticks handed out by earlier
    /// calls are superseded and only one chain stays live. On a stopped
    /// timer the returned tick is already cancelled and will be ignored on
    /// delivery.
    ///
    /// ```rust
    /// use slidingtext::timer::Model;
    /// use std::time::Duration;
    ///
    /// let mut timer = Model::new(Duration::from_secs(4));
    /// timer.arm();
    /// let _first = timer.init();
    /// let _again = timer.init();
    /// assert!(timer.running());
    /// ```
    pub fn init(&mut self) -> Cmd {
        if self.running() {
            self.arm();
        }
        self.tick()
    }

    /// Cancels the running chain, if any.
    pub fn pause(&mut self) {
        if self.cancel() {
            tracing::debug!(id = self.id, tag = self.tag, "slide timer cancelled");
        }
    }

    /// Changes the interval.
    ///
    /// A running timer is re-armed with the new interval and the returned
    /// command must be run; a stopped timer only records it.
    pub fn set_interval(&mut self, interval: Duration) -> Option<Cmd> {
        self.interval = interval;
        if self.running() {
            Some(self.start())
        } else {
            None
        }
    }

    /// Consumes a tick message.
    ///
    /// A live tick yields the command for the following tick; the caller
    /// advances when it gets `Some`. Ticks for another timer, an older
    /// schedule or a cancelled schedule yield `None`.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if !self.accepts(tick) {
            return None;
        }
        Some(self.tick())
    }

    /// Whether `tick` was produced by the currently armed schedule.
    pub fn accepts(&self, tick: &TickMsg) -> bool {
        self.running() && tick.id == self.id && tick.tag == self.tag && !tick.cancelled
    }

    fn cancel(&mut self) -> bool {
        self.schedule.take().is_some()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let token = self
            .schedule
            .as_ref()
            .map(Schedule::token)
            .unwrap_or_else(|| Arc::new(AtomicBool::new(true)));

        bubbletea_tick(self.interval, move |_| {
            Box::new(TickMsg {
                id,
                tag,
                cancelled: token.load(Ordering::SeqCst),
            }) as Msg
        })
    }

    #[cfg(test)]
    pub(crate) fn cancel_token(&self) -> Option<Arc<AtomicBool>> {
        self.schedule.as_ref().map(Schedule::token)
    }

    #[cfg(test)]
    pub(crate) fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
            cancelled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped() {
        let timer = Model::new(Duration::from_secs(4));
        assert!(!timer.running());
        assert_eq!(timer.interval(), Duration::from_secs(4));
        assert!(timer.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let a = Model::new(Duration::from_secs(1));
        let b = Model::new(Duration::from_secs(1));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_live_tick_is_accepted() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.start());

        let tick = timer.tick_msg();
        assert!(timer.update(&(Box::new(tick) as Msg)).is_some());
        // The chain continues with the same tag.
        assert!(timer.accepts(&timer.tick_msg()));
    }

    #[test]
    fn test_restart_invalidates_old_ticks() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.start());
        let stale = timer.tick_msg();

        std::mem::drop(timer.start());
        assert!(!timer.accepts(&stale));
        assert!(timer.update(&(Box::new(stale) as Msg)).is_none());
    }

    #[test]
    fn test_paused_rejects_ticks() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.start());
        let tick = timer.tick_msg();

        timer.pause();
        assert!(!timer.running());
        assert!(timer.update(&(Box::new(tick) as Msg)).is_none());
    }

    #[test]
    fn test_arm_then_init() {
        let mut timer = Model::new(Duration::from_secs(1));
        timer.arm();
        assert!(timer.running());
        std::mem::drop(timer.init());
        assert!(timer.accepts(&timer.tick_msg()));
    }

    #[test]
    fn test_repeated_init_keeps_one_chain() {
        let mut timer = Model::new(Duration::from_secs(1));
        timer.arm();
        std::mem::drop(timer.init());
        let first = timer.tick_msg();

        std::mem::drop(timer.init());
        let second = timer.tick_msg();
        assert!(!timer.accepts(&first));
        assert!(timer.accepts(&second));
    }

    #[test]
    fn test_init_on_stopped_timer_stays_stopped() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.init());
        assert!(!timer.running());
        assert!(!timer.accepts(&timer.tick_msg()));
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = Model::new(Duration::from_secs(1));
        timer.pause();
        timer.pause();
        assert!(!timer.running());
    }

    #[test]
    fn test_foreign_tick_ignored() {
        let mut a = Model::new(Duration::from_secs(1));
        let mut b = Model::new(Duration::from_secs(1));
        std::mem::drop(a.start());
        std::mem::drop(b.start());

        let tick = b.tick_msg();
        assert!(a.update(&(Box::new(tick) as Msg)).is_none());
    }

    #[test]
    fn test_cancelled_tick_ignored() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.start());
        let mut tick = timer.tick_msg();
        tick.cancelled = true;
        assert!(!timer.accepts(&tick));
    }

    #[test]
    fn test_dropping_schedule_cancels_token() {
        let mut timer = Model::new(Duration::from_secs(1));
        std::mem::drop(timer.start());
        let token = timer.cancel_token().unwrap();
        assert!(!token.load(Ordering::SeqCst));

        drop(timer);
        assert!(token.load(Ordering::SeqCst));
    }

    #[test]
    fn test_set_interval_rearms_only_when_running() {
        let mut timer = Model::new(Duration::from_secs(4));
        assert!(timer.set_interval(Duration::from_secs(2)).is_none());
        assert!(!timer.running());

        std::mem::drop(timer.start());
        let before = timer.tick_msg();
        assert!(timer.set_interval(Duration::from_secs(1)).is_some());
        assert!(timer.running());
        assert!(!timer.accepts(&before));
        assert_eq!(timer.interval(), Duration::from_secs(1));
    }
}
