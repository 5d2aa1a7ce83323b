//! Raw pointer capture, follower smoothing and interactive-target detection.

use glam::Vec2;
use std::time::Duration;

/// One pointer-move as seen by the engine.
///
/// `movement` is the per-event delta reported by the host; `None` when the
/// host has no such notion, in which case speed is estimated from positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub movement: Option<Vec2>,
    pub at: Duration,
}

/// Leading-edge throttle: the first event of each window is accepted, the
/// rest of the window is dropped without being replayed later.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last_accepted: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    pub fn accept(&mut self, now: Duration) -> bool {
        match self.last_accepted {
            Some(last) if now.saturating_sub(last) < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }

    #[inline]
    pub fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub over_interactive: bool,
}

impl PointerState {
    /// One smoothing step toward the latest raw position.
    #[inline]
    pub fn step(&mut self, factor: f32) {
        self.smoothed = lerp_toward(self.smoothed, self.raw, factor);
    }
}

#[inline]
pub fn lerp_toward(from: Vec2, to: Vec2, t: f32) -> Vec2 {
    from + (to - from) * t
}

/// Instantaneous pointer speed in length units per event.
///
/// With host-reported deltas this is just their magnitude. Without them the
/// displacement since the previous accepted sample is rescaled to one
/// throttle window so the two paths produce comparable sizes.
pub fn estimate_speed(
    sample: &PointerSample,
    previous: Option<(Vec2, Duration)>,
    window: Duration,
) -> f32 {
    if let Some(m) = sample.movement {
        return m.length();
    }
    let Some((prev_pos, prev_at)) = previous else {
        return 0.0;
    };
    let elapsed = sample.at.saturating_sub(prev_at).as_secs_f32();
    if elapsed <= f32::EPSILON {
        return 0.0;
    }
    let dist = (sample.position - prev_pos).length();
    dist * window.as_secs_f32() / elapsed
}

/// Tag names (upper-case, as the DOM reports them) that count as interactive.
pub const INTERACTIVE_TAGS: &[&str] = &["BUTTON", "A", "INPUT", "TEXTAREA", "SELECT"];

/// Selector form of the same set for hosts that prefer `closest()`.
pub const INTERACTIVE_SELECTOR: &str = "button, a, [role='button'], input, textarea, select";

#[inline]
pub fn is_interactive_element(tag_name: &str, role: Option<&str>) -> bool {
    INTERACTIVE_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name))
        || role.is_some_and(|r| r.trim().eq_ignore_ascii_case("button"))
}

/// Walks an ancestor chain (target first) and reports whether any element in
/// it is interactive.
pub fn chain_is_interactive<'a, I>(chain: I) -> bool
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    chain
        .into_iter()
        .any(|(tag, role)| is_interactive_element(tag, role))
}
