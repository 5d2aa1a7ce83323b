//! Fixed-capacity pool of trail particles.
//!
//! Slots are claimed on spawn and released on expiry; a spawn with every slot
//! taken is refused. Particle ids are never reused, so a release that names a
//! particle no longer in its slot is a no-op.

use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

pub type ParticleId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: ParticleId,
    pub position: Vec2,
    pub size: f32,
    pub spawned_at: Duration,
    pub expires_at: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotChange {
    Claimed { slot: usize, particle: TrailParticle },
    Released { slot: usize, id: ParticleId },
}

pub struct ParticlePool {
    slots: SmallVec<[Option<TrailParticle>; 8]>,
    next_id: ParticleId,
    live: usize,
    changes: Vec<SlotChange>,
}

impl ParticlePool {
    pub fn with_capacity(cap: usize) -> Self {
        let mut slots = SmallVec::new();
        slots.resize(cap, None);
        Self {
            slots,
            next_id: 0,
            live: 0,
            changes: Vec::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.live >= self.slots.len()
    }

    /// Claims a free slot. Returns `None` when the pool is full.
    pub fn spawn(
        &mut self,
        position: Vec2,
        size: f32,
        now: Duration,
        ttl: Duration,
    ) -> Option<(usize, TrailParticle)> {
        let slot = self.slots.iter().position(Option::is_none)?;
        let particle = TrailParticle {
            id: self.next_id,
            position,
            size,
            spawned_at: now,
            expires_at: now + ttl,
        };
        self.next_id += 1;
        self.slots[slot] = Some(particle);
        self.live += 1;
        self.changes.push(SlotChange::Claimed { slot, particle });
        Some((slot, particle))
    }

    /// Releases the particle `id` wherever it lives. Unknown or already
    /// released ids are ignored.
    pub fn release(&mut self, id: ParticleId) -> bool {
        match self.slot_of(id) {
            Some(slot) => self.release_slot(slot).is_some(),
            None => false,
        }
    }

    pub fn release_slot(&mut self, slot: usize) -> Option<TrailParticle> {
        let particle = self.slots.get_mut(slot)?.take()?;
        self.live -= 1;
        self.changes.push(SlotChange::Released {
            slot,
            id: particle.id,
        });
        Some(particle)
    }

    pub fn clear(&mut self) {
        for slot in 0..self.slots.len() {
            self.release_slot(slot);
        }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&TrailParticle> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn slot_of(&self, id: ParticleId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| p.id == id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &TrailParticle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|p| (i, p)))
    }

    /// Slot changes since the last drain, oldest first. The renderer applies
    /// these to the matching DOM nodes.
    pub fn drain_changes(&mut self) -> Vec<SlotChange> {
        std::mem::take(&mut self.changes)
    }
}

/// `clamp(speed * k, min, max)`
#[inline]
pub fn particle_size(speed: f32, k: f32, min: f32, max: f32) -> f32 {
    (speed * k).clamp(min, max)
}
