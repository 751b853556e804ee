//! Idle timer that hides the floating controls.
//!
//! The controls are visible while the pointer hovers them, while a dialog is
//! open, or until the quiescence window passes without pointer movement.
//! The pending countdown is held as an optional token: re-arming replaces it
//! and teardown clears it, so an expiry from an older arm never applies.
//!
//! Time is passed in by the caller, which keeps the timer usable from any
//! event loop and deterministic under test.

use std::time::{Duration, Instant};

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(1000);

/// Handle of one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownToken(u64);

#[derive(Debug, Clone, Copy)]
struct Countdown {
    token: CountdownToken,
    deadline: Instant,
}

#[derive(Debug)]
pub struct VisibilityTimer {
    window: Duration,
    pending: Option<Countdown>,
    next_token: u64,
    active: bool,
    hovering: bool,
    dialog_open: bool,
}

impl VisibilityTimer {
    /// Creates the timer as the view mounts; the first countdown starts now.
    pub fn mounted(window: Duration, now: Instant) -> Self {
        let mut timer = Self {
            window,
            pending: None,
            next_token: 0,
            active: false,
            hovering: false,
            dialog_open: false,
        };
        timer.arm(now);
        timer
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Pointer moved: controls show and the countdown restarts.
    pub fn on_pointer_move(&mut self, now: Instant) -> CountdownToken {
        self.arm(now)
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    /// Fires the pending countdown if its deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(countdown) = self.pending
            && now >= countdown.deadline
        {
            self.expire(countdown.token);
        }
    }

    /// Applies the expiry of `token`. Ignored unless it is the pending one.
    pub fn expire(&mut self, token: CountdownToken) -> bool {
        match self.pending {
            Some(countdown) if countdown.token == token => {
                self.pending = None;
                self.active = false;
                true
            }
            _ => false,
        }
    }

    /// Cancels any pending countdown. Used when the view goes away.
    pub fn teardown(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<CountdownToken> {
        self.pending.map(|c| c.token)
    }

    /// Time until the pending countdown fires, for scheduling a wake-up.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|c| c.deadline.saturating_duration_since(now))
    }

    /// Visibility after firing any countdown that is due at `now`.
    pub fn is_visible(&mut self, now: Instant) -> bool {
        self.poll(now);
        self.hovering || self.dialog_open || self.active
    }

    fn arm(&mut self, now: Instant) -> CountdownToken {
        let token = CountdownToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(Countdown {
            token,
            deadline: now + self.window,
        });
        self.active = true;
        token
    }
}
