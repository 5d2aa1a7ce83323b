//! Scheduling seam between the feedback engine and whatever runs it.
//!
//! The browser implementation sits on `requestAnimationFrame` and
//! `setTimeout`. [`VirtualHost`] keeps the same bookkeeping on a manual clock
//! so the engine can be driven deterministically and its outstanding work
//! inspected after teardown.

use super::error::FxResult;
use super::feedback::FeedbackController;
use std::time::Duration;

pub type FrameHandle = i32;
pub type TimerHandle = i32;

pub trait Host {
    /// Monotonic time since the host's origin.
    fn now(&self) -> Duration;

    /// Ask for one `on_frame` call at the next display refresh.
    fn request_frame(&mut self) -> FxResult<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Ask for one `on_particle_timer(slot)` call after `delay`.
    fn set_timeout(&mut self, slot: usize, delay: Duration) -> FxResult<TimerHandle>;
    fn clear_timeout(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingTimer {
    handle: TimerHandle,
    slot: usize,
    due: Duration,
}

#[derive(Debug, Default)]
pub struct VirtualHost {
    now: Duration,
    next_handle: TimerHandle,
    frame: Option<FrameHandle>,
    timers: Vec<PendingTimer>,
}

impl VirtualHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    #[inline]
    pub fn pending_frames(&self) -> usize {
        self.frame.is_some() as usize
    }

    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Frames plus timers still scheduled.
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.pending_frames() + self.pending_timers()
    }

    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    /// Removes and returns the earliest timer due at or before `until`.
    /// Ties fire in scheduling order.
    pub fn take_due_timer(&mut self, until: Duration) -> Option<(Duration, usize)> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;
        let t = self.timers.remove(idx);
        Some((t.due, t.slot))
    }

    fn issue(&mut self) -> TimerHandle {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Host for VirtualHost {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_frame(&mut self) -> FxResult<FrameHandle> {
        let h = self.issue();
        self.frame = Some(h);
        Ok(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
    }

    fn set_timeout(&mut self, slot: usize, delay: Duration) -> FxResult<TimerHandle> {
        let handle = self.issue();
        self.timers.push(PendingTimer {
            handle,
            slot,
            due: self.now + delay,
        });
        Ok(handle)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

impl FeedbackController<VirtualHost> {
    /// Moves the clock forward by `by`, firing due particle timers in order.
    /// Frames are not run; see [`Self::run_frame`].
    pub fn advance(&mut self, by: Duration) {
        let target = self.host().now() + by;
        while let Some((due, slot)) = self.host_mut().take_due_timer(target) {
            self.host_mut().set_now(due);
            self.on_particle_timer(slot);
        }
        self.host_mut().set_now(target);
    }

    /// Runs the pending frame callback, if any. Returns whether one ran.
    pub fn run_frame(&mut self) -> bool {
        if self.host_mut().take_frame().is_none() {
            return false;
        }
        self.on_frame();
        true
    }
}
