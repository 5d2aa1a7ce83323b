// Host-side tests for the fixed-capacity trail pool.

use glam::Vec2;
use landing_motion::core::{particle_size, ParticlePool, SlotChange};
use std::time::Duration;

const TTL: Duration = Duration::from_millis(800);

#[test]
fn twenty_rapid_spawns_fill_exactly_eight_slots() {
    let mut pool = ParticlePool::with_capacity(8);
    let spawned = (0..20)
        .filter(|i| {
            pool.spawn(Vec2::splat(*i as f32), 4.0, Duration::ZERO, TTL)
                .is_some()
        })
        .count();
    assert_eq!(spawned, 8);
    assert_eq!(pool.live(), 8);
    assert!(pool.is_full());
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut pool = ParticlePool::with_capacity(2);
    let (_, a) = pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL).unwrap();
    let (slot_b, b) = pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL).unwrap();
    assert!(pool.release(a.id));
    let (slot_c, c) = pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL).unwrap();
    assert_eq!((a.id, b.id, c.id), (0, 1, 2));
    // freed slot is reclaimed
    assert_eq!(slot_c, 0);
    assert_eq!(slot_b, 1);
}

#[test]
fn release_is_idempotent() {
    let mut pool = ParticlePool::with_capacity(4);
    let (slot, p) = pool.spawn(Vec2::ONE, 3.0, Duration::ZERO, TTL).unwrap();
    assert!(pool.release(p.id));
    assert!(!pool.release(p.id));
    assert!(pool.release_slot(slot).is_none());
    assert!(!pool.release(999));
    assert_eq!(pool.live(), 0);
}

#[test]
fn stale_id_does_not_release_slot_owner() {
    let mut pool = ParticlePool::with_capacity(1);
    let (_, old) = pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL).unwrap();
    pool.release(old.id);
    let (_, new) = pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL).unwrap();
    assert!(!pool.release(old.id));
    assert_eq!(pool.live(), 1);
    assert_eq!(pool.get(0).map(|p| p.id), Some(new.id));
}

#[test]
fn expiry_is_spawn_time_plus_ttl() {
    let mut pool = ParticlePool::with_capacity(1);
    let (_, p) = pool
        .spawn(Vec2::ZERO, 2.0, Duration::from_millis(1234), TTL)
        .unwrap();
    assert_eq!(p.expires_at, Duration::from_millis(2034));
}

#[test]
fn clear_reports_every_release() {
    let mut pool = ParticlePool::with_capacity(3);
    for _ in 0..3 {
        pool.spawn(Vec2::ZERO, 2.0, Duration::ZERO, TTL);
    }
    pool.drain_changes();
    pool.clear();
    let changes = pool.drain_changes();
    assert_eq!(changes.len(), 3);
    assert!(changes
        .iter()
        .all(|c| matches!(c, SlotChange::Released { .. })));
    assert_eq!(pool.live(), 0);
    assert_eq!(pool.iter().count(), 0);
}

#[test]
fn size_is_clamped_speed() {
    assert_eq!(particle_size(0.0, 0.3, 2.0, 8.0), 2.0);
    assert!((particle_size(20.0, 0.3, 2.0, 8.0) - 6.0).abs() < 1e-5);
    assert_eq!(particle_size(1000.0, 0.3, 2.0, 8.0), 8.0);
}
