//! One-shot section visibility and staggered entrance timing.
//!
//! A [`VisibilityLatch`] is fed intersection ratios as the host reports them.
//! It flips to visible the first time a ratio reaches its threshold and then
//! ignores everything that follows; sections never re-hide on scroll-away.

use super::params::RevealParams;
use crate::constants::{CLASS_ENTRANCE, CLASS_SUPPRESSED};

#[derive(Clone, Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    triggered: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            triggered: false,
        }
    }

    /// Latch for a section whose items may already be showing, e.g. when the
    /// page is mounted again after a stop. A revealed section stays revealed.
    pub fn resume(threshold: f64, already_visible: bool) -> Self {
        Self {
            triggered: already_visible,
            ..Self::new(threshold)
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.triggered
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one observed intersection ratio. Returns `true` only on the
    /// observation that trips the latch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.triggered {
            return false;
        }
        // NaN never trips
        if ratio >= self.threshold {
            self.triggered = true;
            return true;
        }
        false
    }

    /// Used when the host cannot observe intersections: show the section now.
    pub fn fail_open(&mut self) -> bool {
        let tripped = !self.triggered;
        self.triggered = true;
        tripped
    }
}

/// Per-item animation delay: `base + index * step`, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base_sec: f32,
    pub step_sec: f32,
}

impl Stagger {
    #[inline]
    pub fn delay_sec(&self, index: u32) -> f32 {
        self.base_sec + index as f32 * self.step_sec
    }

    /// CSS `animation-delay` value for the item at `index`.
    pub fn css_delay(&self, index: u32) -> String {
        let d = self.delay_sec(index);
        // trim float noise such as 0.30000001
        format!("{}s", (d * 1000.0).round() / 1000.0)
    }
}

impl From<&RevealParams> for Stagger {
    fn from(p: &RevealParams) -> Self {
        Self {
            base_sec: p.stagger_base_sec,
            step_sec: p.stagger_step_sec,
        }
    }
}

/// Class an item carries for the given visibility: the entrance animation
/// once visible, the suppressed state before that.
#[inline]
pub fn entrance_class(visible: bool) -> &'static str {
    if visible {
        CLASS_ENTRANCE
    } else {
        CLASS_SUPPRESSED
    }
}
