// Host-side tests for page scroll math, the floating field and parameter
// overrides.

use landing_motion::core::floating;
use landing_motion::core::scroll::{
    anchor_scroll_top, in_page_anchor, is_mobile, parallax_offset, parallax_transform,
    rect_in_viewport,
};
use landing_motion::core::{FeedbackParams, FxError, PageParams, RevealParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Duration;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn only_fragment_links_are_intercepted() {
    assert_eq!(in_page_anchor("#pricing"), Some("#pricing"));
    assert_eq!(in_page_anchor("  #about "), Some("#about"));
    assert_eq!(in_page_anchor("#"), None);
    assert_eq!(in_page_anchor("/contact"), None);
    assert_eq!(in_page_anchor("https://example.com/#x"), None);
}

#[test]
fn anchor_target_leaves_room_for_the_nav_bar() {
    // element 300px below the viewport top, page already scrolled 1000px
    assert_eq!(anchor_scroll_top(300.0, 1000.0, 80.0), 1220.0);
    // never scrolls above the document
    assert_eq!(anchor_scroll_top(20.0, 0.0, 80.0), 0.0);
}

#[test]
fn hero_parallax_moves_at_half_speed() {
    assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    assert_eq!(parallax_offset(640.0, 0.5), 320.0);
    assert_eq!(parallax_transform(100.0, 0.5), "translateY(50px)");
}

#[test]
fn card_glow_needs_any_overlap() {
    let h = 800.0;
    assert!(rect_in_viewport(100.0, 400.0, h));
    assert!(rect_in_viewport(-200.0, 10.0, h)); // partially above
    assert!(rect_in_viewport(790.0, 1200.0, h)); // partially below
    assert!(!rect_in_viewport(800.0, 1200.0, h));
    assert!(!rect_in_viewport(-400.0, 0.0, h));
}

#[test]
fn mobile_breakpoint_is_exclusive() {
    assert!(is_mobile(375.0, 768.0));
    assert!(is_mobile(767.9, 768.0));
    assert!(!is_mobile(768.0, 768.0));
    assert!(!is_mobile(1440.0, 768.0));
}

#[test]
fn floating_dots_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let dots = floating::generate(&mut rng, 15);
    assert_eq!(dots.len(), 15);
    for (i, d) in dots.iter().enumerate() {
        assert_eq!(d.id, i);
        assert!((0.0..=100.0).contains(&d.x));
        assert!((0.0..=100.0).contains(&d.y));
        assert!((1.0..=5.0).contains(&d.size_px));
        assert!((0.1..=0.4).contains(&d.opacity));
        assert!((0.0..=5.0).contains(&d.delay_sec));
        assert!((6.0..=10.0).contains(&d.duration_sec));
    }
}

#[test]
fn floating_field_is_reproducible_per_seed() {
    let a = floating::generate(&mut StdRng::seed_from_u64(3), 5);
    let b = floating::generate(&mut StdRng::seed_from_u64(3), 5);
    assert_eq!(a, b);
    assert!(a[0].css().contains("animation-duration:"));
}

#[test]
fn defaults_match_the_page() {
    let fb = FeedbackParams::default();
    assert_eq!(fb.throttle, Duration::from_millis(16));
    assert_eq!(fb.particle_cap, 8);
    assert_eq!(fb.particle_ttl, Duration::from_millis(800));
    assert!((fb.smoothing - 0.15).abs() < f32::EPSILON);
    let page = PageParams::default();
    assert_eq!(page.anchor_offset, 80.0);
    assert_eq!(page.floating_count, 15);
}

#[test]
fn feedback_overrides_apply() {
    let mut p = FeedbackParams::default();
    p.apply_overrides(lookup(&[
        ("fxParticleCap", "4"),
        ("fxThrottleMs", "33"),
        ("fxSmoothing", " 0.25 "),
        ("fxParticleTtlMs", "500"),
    ]))
    .unwrap();
    assert_eq!(p.particle_cap, 4);
    assert_eq!(p.throttle, Duration::from_millis(33));
    assert!((p.smoothing - 0.25).abs() < 1e-6);
    assert_eq!(p.particle_ttl, Duration::from_millis(500));
}

#[test]
fn bad_override_is_rejected_and_nothing_changes() {
    let mut p = FeedbackParams::default();
    let err = p
        .apply_overrides(lookup(&[("fxParticleCap", "4"), ("fxSmoothing", "fast")]))
        .unwrap_err();
    assert!(matches!(err, FxError::Unparsable { name: "fxSmoothing", .. }));
    assert_eq!(p, FeedbackParams::default());

    let err = p
        .apply_overrides(lookup(&[("fxSmoothing", "1.5")]))
        .unwrap_err();
    assert!(matches!(err, FxError::OutOfRange { name: "fxSmoothing", .. }));
}

#[test]
fn inverted_size_range_is_rejected() {
    let mut p = FeedbackParams::default();
    let res = p.apply_overrides(lookup(&[("fxSizeMin", "9")]));
    assert!(res.is_err());
    assert_eq!(p.size_min, 2.0);
}

#[test]
fn reveal_overrides_apply() {
    let mut r = RevealParams::with_threshold(0.3);
    r.apply_overrides(lookup(&[("revealStep", "0.2")])).unwrap();
    assert_eq!(r.threshold, 0.3);
    assert!((r.stagger_step_sec - 0.2).abs() < 1e-6);

    let err = r
        .apply_overrides(lookup(&[("revealThreshold", "2")]))
        .unwrap_err();
    assert!(err.to_string().contains("revealThreshold"));
}

#[test]
fn page_overrides_apply() {
    let mut p = PageParams::default();
    p.apply_overrides(lookup(&[("fxAnchorOffset", "64"), ("fxFloatingCount", "0")]))
        .unwrap();
    assert_eq!(p.anchor_offset, 64.0);
    assert_eq!(p.floating_count, 0);
}

#[test]
fn counts_must_be_whole_numbers() {
    let mut fb = FeedbackParams::default();
    let err = fb
        .apply_overrides(lookup(&[("fxParticleCap", "4.7")]))
        .unwrap_err();
    assert!(matches!(err, FxError::Unparsable { name: "fxParticleCap", .. }));
    assert_eq!(fb.particle_cap, 8);
    assert!(fb.apply_overrides(lookup(&[("fxParticleCap", "-1")])).is_err());
    assert!(matches!(
        fb.apply_overrides(lookup(&[("fxParticleCap", "65")])),
        Err(FxError::OutOfRange { .. })
    ));

    let mut page = PageParams::default();
    assert!(page
        .apply_overrides(lookup(&[("fxFloatingCount", "2.5")]))
        .is_err());
    assert_eq!(page.floating_count, 15);
    page.apply_overrides(lookup(&[("fxFloatingCount", " 20 ")]))
        .unwrap();
    assert_eq!(page.floating_count, 20);
}
