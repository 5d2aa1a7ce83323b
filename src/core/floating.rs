//! Decorative background dots, generated once per page.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingDot {
    pub id: usize,
    /// Percent of the viewport, 0..100
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub opacity: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl FloatingDot {
    pub fn css(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;opacity:{:.3};animation-delay:{:.2}s;animation-duration:{:.2}s",
            self.x, self.y, self.size_px, self.size_px, self.opacity, self.delay_sec, self.duration_sec
        )
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingDot> {
    (0..count)
        .map(|id| FloatingDot {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size_px: FLOATING_SIZE_MIN + rng.gen::<f32>() * FLOATING_SIZE_SPAN,
            opacity: FLOATING_OPACITY_MIN + rng.gen::<f32>() * FLOATING_OPACITY_SPAN,
            delay_sec: rng.gen::<f32>() * FLOATING_DELAY_MAX_SEC,
            duration_sec: FLOATING_DURATION_MIN_SEC + rng.gen::<f32>() * FLOATING_DURATION_SPAN_SEC,
        })
        .collect()
}
