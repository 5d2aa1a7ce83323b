//! Named, overridable motion parameters.
//!
//! Defaults come from `constants.rs`. The browser front-end feeds overrides
//! from `data-fx-*` attributes on `<body>` (feedback and page parameters) and
//! `data-reveal-*` attributes on each revealed section; the lookup closure
//! receives the camel-cased dataset key, e.g. `fxParticleCap`.

use super::error::{FxError, FxResult};
use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackParams {
    pub throttle: Duration,
    pub smoothing: f32,
    pub particle_cap: usize,
    pub particle_ttl: Duration,
    pub speed_to_size: f32,
    pub size_min: f32,
    pub size_max: f32,
}

impl Default for FeedbackParams {
    fn default() -> Self {
        Self {
            throttle: THROTTLE_INTERVAL,
            smoothing: SMOOTHING_FACTOR,
            particle_cap: PARTICLE_CAP,
            particle_ttl: PARTICLE_TTL,
            speed_to_size: PARTICLE_SPEED_TO_SIZE,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
        }
    }
}

impl FeedbackParams {
    /// Applies every present override, or none of them if any is invalid.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> FxResult<()> {
        let mut next = self.clone();
        if let Some(ms) = read(&lookup, "fxThrottleMs", 1.0, 1000.0)? {
            next.throttle = Duration::from_secs_f64(ms / 1000.0);
        }
        if let Some(f) = read(&lookup, "fxSmoothing", 0.001, 1.0)? {
            next.smoothing = f as f32;
        }
        if let Some(cap) = read_count(&lookup, "fxParticleCap", 64)? {
            next.particle_cap = cap;
        }
        if let Some(ms) = read(&lookup, "fxParticleTtlMs", 1.0, 10_000.0)? {
            next.particle_ttl = Duration::from_secs_f64(ms / 1000.0);
        }
        if let Some(k) = read(&lookup, "fxSpeedToSize", 0.0, 10.0)? {
            next.speed_to_size = k as f32;
        }
        if let Some(v) = read(&lookup, "fxSizeMin", 0.0, 256.0)? {
            next.size_min = v as f32;
        }
        if let Some(v) = read(&lookup, "fxSizeMax", 0.0, 256.0)? {
            next.size_max = v as f32;
        }
        if next.size_min > next.size_max {
            return Err(FxError::OutOfRange {
                name: "fxSizeMin",
                value: next.size_min as f64,
                min: 0.0,
                max: next.size_max as f64,
            });
        }
        *self = next;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealParams {
    pub threshold: f64,
    pub stagger_base_sec: f32,
    pub stagger_step_sec: f32,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            stagger_base_sec: STAGGER_BASE_SEC,
            stagger_step_sec: STAGGER_STEP_SEC,
        }
    }
}

impl RevealParams {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Applies every present override, or none of them if any is invalid.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> FxResult<()> {
        let mut next = self.clone();
        if let Some(t) = read(&lookup, "revealThreshold", 0.0, 1.0)? {
            next.threshold = t;
        }
        if let Some(s) = read(&lookup, "revealBase", 0.0, 60.0)? {
            next.stagger_base_sec = s as f32;
        }
        if let Some(s) = read(&lookup, "revealStep", 0.0, 60.0)? {
            next.stagger_step_sec = s as f32;
        }
        *self = next;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageParams {
    pub anchor_offset: f64,
    pub parallax_factor: f64,
    pub mobile_breakpoint: f64,
    pub floating_count: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            anchor_offset: ANCHOR_SCROLL_OFFSET,
            parallax_factor: PARALLAX_FACTOR,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            floating_count: FLOATING_DOT_COUNT,
        }
    }
}

impl PageParams {
    /// Applies every present override, or none of them if any is invalid.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> FxResult<()> {
        let mut next = self.clone();
        if let Some(v) = read(&lookup, "fxAnchorOffset", -10_000.0, 10_000.0)? {
            next.anchor_offset = v;
        }
        if let Some(v) = read(&lookup, "fxParallax", -4.0, 4.0)? {
            next.parallax_factor = v;
        }
        if let Some(v) = read(&lookup, "fxMobileBreakpoint", 0.0, 10_000.0)? {
            next.mobile_breakpoint = v;
        }
        if let Some(n) = read_count(&lookup, "fxFloatingCount", 200)? {
            next.floating_count = n;
        }
        *self = next;
        Ok(())
    }
}

fn read(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    min: f64,
    max: f64,
) -> FxResult<Option<f64>> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let value: f64 = raw.trim().parse().map_err(|_| FxError::Unparsable {
        name,
        value: raw.clone(),
    })?;
    if !value.is_finite() || value < min || value > max {
        return Err(FxError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(Some(value))
}

/// Whole-number variant of [`read`]; `"4.7"` is unparsable, not truncated.
fn read_count(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    max: usize,
) -> FxResult<Option<usize>> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let value: usize = raw.trim().parse().map_err(|_| FxError::Unparsable {
        name,
        value: raw.clone(),
    })?;
    if value > max {
        return Err(FxError::OutOfRange {
            name,
            value: value as f64,
            min: 0.0,
            max: max as f64,
        });
    }
    Ok(Some(value))
}
