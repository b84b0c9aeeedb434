//! Transient reset confirmation.
//!
//! After a reset the widget shows a short confirmation banner, then hides it
//! again once a fixed window has elapsed. The window restarts on every reset:
//! arming bumps a generation tag that the delayed command carries back, and
//! timers whose tag is no longer current are ignored. A superseded timer
//! still fires (delays are not cancelable) but cannot hide a banner that a
//! later reset re-armed.
//!
//! # Example
//!
//! ```rust
//! use tally::confirm::Confirmation;
//!
//! let mut confirmation = Confirmation::new();
//! assert!(!confirmation.visible());
//!
//! let _cmd = confirmation.arm(|timeout| timeout);
//! assert!(confirmation.visible());
//! ```

use std::time::Duration;

use crate::command::{Cmd, tick};

/// How long the confirmation banner stays visible.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

/// The banner text.
pub const BANNER_TEXT: &str = "The counter has been set to zero";

/// Message sent when a confirmation window elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutMsg {
    tag: u64,
}

impl TimeoutMsg {
    /// Creates a timeout message for the given generation tag.
    #[must_use]
    pub fn new(tag: u64) -> Self {
        Self { tag }
    }

    /// Returns the generation tag this timeout belongs to.
    #[must_use]
    pub fn tag(self) -> u64 {
        self.tag
    }
}

/// Visibility state of the reset confirmation banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    visible: bool,
    duration: Duration,
    tag: u64,
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmation {
    /// Creates a hidden confirmation with the default 1500 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: false,
            duration: DEFAULT_DURATION,
            tag: 0,
        }
    }

    /// Overrides the window duration. Mainly useful in tests.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns whether the banner is currently shown.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the configured window duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the current generation tag.
    #[must_use]
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Shows the banner and returns the delayed hide command.
    ///
    /// `wrap` lifts the [`TimeoutMsg`] into the caller's message type. Arming
    /// again before a pending window elapses restarts the window; the older
    /// timer's tag goes stale and its firing becomes a no-op.
    pub fn arm<M, F>(&mut self, wrap: F) -> Cmd<M>
    where
        F: FnOnce(TimeoutMsg) -> M + Send + 'static,
    {
        self.visible = true;
        self.tag = self.tag.wrapping_add(1);
        let tag = self.tag;
        tick(self.duration, move |_| wrap(TimeoutMsg { tag }))
    }

    /// Applies an elapsed window, hiding the banner if the tag is current.
    pub fn update(&mut self, msg: TimeoutMsg) {
        if msg.tag == self.tag {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let confirmation = Confirmation::new();
        assert!(!confirmation.visible());
        assert_eq!(confirmation.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_arm_shows_banner() {
        let mut confirmation = Confirmation::new();
        let _cmd = confirmation.arm(|timeout| timeout);
        assert!(confirmation.visible());
    }

    #[test]
    fn test_current_timeout_hides() {
        let mut confirmation = Confirmation::new();
        let _cmd = confirmation.arm(|timeout| timeout);
        confirmation.update(TimeoutMsg::new(confirmation.tag()));
        assert!(!confirmation.visible());
    }

    #[test]
    fn test_stale_timeout_ignored() {
        let mut confirmation = Confirmation::new();
        let _first = confirmation.arm(|timeout| timeout);
        let first_tag = confirmation.tag();
        let _second = confirmation.arm(|timeout| timeout);

        confirmation.update(TimeoutMsg::new(first_tag));
        assert!(confirmation.visible(), "superseded timer must not hide");

        confirmation.update(TimeoutMsg::new(confirmation.tag()));
        assert!(!confirmation.visible());
    }

    #[test]
    fn test_armed_command_delivers_matching_tag() {
        let mut confirmation =
            Confirmation::new().with_duration(Duration::from_millis(5));
        let cmd = confirmation.arm(|timeout| timeout);

        let msgs = cmd.execute();
        assert_eq!(msgs, vec![TimeoutMsg::new(confirmation.tag())]);

        confirmation.update(msgs[0]);
        assert!(!confirmation.visible());
    }
}
