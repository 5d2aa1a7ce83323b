//! Page-level pointer feedback: throttled capture, smoothed follower,
//! interactive hover flag and the capped trail.
//!
//! The controller owns every piece of pointer state and every piece of work
//! it schedules on its [`Host`]. `stop` cancels all of it; once stopped the
//! controller ignores events, frames and timers until started again.

use super::error::FxResult;
use super::host::{FrameHandle, Host, TimerHandle};
use super::params::FeedbackParams;
use super::pointer::{estimate_speed, PointerSample, PointerState, Throttle};
use super::trail::{particle_size, ParticleId, ParticlePool, SlotChange, TrailParticle};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackStats {
    pub accepted: u64,
    pub coalesced: u64,
    pub spawned: u64,
    pub dropped: u64,
    pub expired: u64,
    pub ticks: u64,
}

pub struct FeedbackController<H: Host> {
    params: FeedbackParams,
    host: H,
    throttle: Throttle,
    pointer: PointerState,
    last_sample: Option<(Vec2, Duration)>,
    pool: ParticlePool,
    timers: SmallVec<[Option<TimerHandle>; 8]>,
    frame: Option<FrameHandle>,
    running: bool,
    stats: FeedbackStats,
}

impl<H: Host> FeedbackController<H> {
    pub fn new(params: FeedbackParams, host: H) -> Self {
        let cap = params.particle_cap;
        let mut timers = SmallVec::new();
        timers.resize(cap, None);
        Self {
            throttle: Throttle::new(params.throttle),
            pool: ParticlePool::with_capacity(cap),
            params,
            host,
            pointer: PointerState::default(),
            last_sample: None,
            timers,
            frame: None,
            running: false,
            stats: FeedbackStats::default(),
        }
    }

    pub fn start(&mut self) -> FxResult<()> {
        if self.running {
            return Ok(());
        }
        self.frame = Some(self.host.request_frame()?);
        self.running = true;
        log::info!(
            "[fx] pointer feedback started (cap={}, ttl={:?}, throttle={:?})",
            self.params.particle_cap,
            self.params.particle_ttl,
            self.params.throttle
        );
        Ok(())
    }

    /// Cancels the frame tick and every particle timer and empties the pool.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(h) = self.frame.take() {
            self.host.cancel_frame(h);
        }
        for t in self.timers.iter_mut() {
            if let Some(h) = t.take() {
                self.host.clear_timeout(h);
            }
        }
        self.pool.clear();
        self.throttle.reset();
        self.last_sample = None;
        log::info!("[fx] pointer feedback stopped ({:?})", self.stats);
    }

    /// Feeds one raw pointer-move. `classify` walks the target's ancestor
    /// chain and is only called when the event is accepted.
    ///
    /// Returns whether the event was accepted by the throttle.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        classify: impl FnOnce() -> bool,
    ) -> bool {
        if !self.running {
            return false;
        }
        if !self.throttle.accept(sample.at) {
            self.stats.coalesced += 1;
            return false;
        }
        self.stats.accepted += 1;
        self.pointer.raw = sample.position;
        self.pointer.over_interactive = classify();

        let speed = estimate_speed(&sample, self.last_sample, self.params.throttle);
        self.last_sample = Some((sample.position, sample.at));
        self.spawn_particle(sample.position, speed, sample.at);
        true
    }

    fn spawn_particle(&mut self, position: Vec2, speed: f32, at: Duration) {
        if self.pool.is_full() {
            self.stats.dropped += 1;
            return;
        }
        let p = &self.params;
        let size = particle_size(speed, p.speed_to_size, p.size_min, p.size_max);
        let Some((slot, particle)) = self.pool.spawn(position, size, at, p.particle_ttl) else {
            self.stats.dropped += 1;
            return;
        };
        self.stats.spawned += 1;
        self.arm_timer(slot, &particle);
    }

    fn arm_timer(&mut self, slot: usize, particle: &TrailParticle) {
        let delay = particle.expires_at.saturating_sub(self.host.now());
        match self.host.set_timeout(slot, delay) {
            Ok(h) => self.timers[slot] = Some(h),
            Err(e) => {
                // nothing would ever free the slot
                log::warn!("[fx] {e}; releasing particle {}", particle.id);
                self.pool.release_slot(slot);
            }
        }
    }

    /// One smoothing step, then re-arms the next frame.
    pub fn on_frame(&mut self) {
        if !self.running {
            return;
        }
        self.frame = None;
        self.pointer.step(self.params.smoothing);
        self.stats.ticks += 1;
        match self.host.request_frame() {
            Ok(h) => self.frame = Some(h),
            Err(e) => log::error!("[fx] smoothing loop halted: {e}"),
        }
    }

    /// Expiry callback for the particle in `slot`.
    pub fn on_particle_timer(&mut self, slot: usize) {
        if !self.running {
            return;
        }
        let Some(entry) = self.timers.get_mut(slot) else {
            return;
        };
        *entry = None;
        let Some(particle) = self.pool.get(slot).copied() else {
            return;
        };
        if self.host.now() < particle.expires_at {
            self.arm_timer(slot, &particle);
            return;
        }
        if self.pool.release_slot(slot).is_some() {
            self.stats.expired += 1;
        }
    }

    /// Removes a particle ahead of its expiry. Unknown ids are a no-op.
    pub fn despawn(&mut self, id: ParticleId) -> bool {
        let Some(slot) = self.pool.slot_of(id) else {
            return false;
        };
        if let Some(h) = self.timers[slot].take() {
            self.host.clear_timeout(h);
        }
        self.pool.release_slot(slot).is_some()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn params(&self) -> &FeedbackParams {
        &self.params
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.pointer.smoothed
    }

    #[inline]
    pub fn over_interactive(&self) -> bool {
        self.pointer.over_interactive
    }

    #[inline]
    pub fn live_particles(&self) -> usize {
        self.pool.live()
    }

    pub fn particles(&self) -> impl Iterator<Item = (usize, &TrailParticle)> {
        self.pool.iter()
    }

    /// Pool slot changes since the last call, for the renderer.
    pub fn drain_changes(&mut self) -> Vec<SlotChange> {
        self.pool.drain_changes()
    }

    #[inline]
    pub fn stats(&self) -> FeedbackStats {
        self.stats
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
