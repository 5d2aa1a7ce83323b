/// Motion tuning constants.
///
/// Every value here is a default for a named parameter in `core::params`;
/// the page can override most of them through `data-fx-*` attributes.
use std::time::Duration;

// Pointer capture
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(16); // one accepted move per frame
pub const SMOOTHING_FACTOR: f32 = 0.15; // lerp weight per frame for the follower

// Trail particles
pub const PARTICLE_CAP: usize = 8; // hard admission limit for live particles
pub const PARTICLE_TTL: Duration = Duration::from_millis(800);
pub const PARTICLE_SPEED_TO_SIZE: f32 = 0.3;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 8.0;

// Follower element is 32px wide; positions are written as its centre
pub const FOLLOWER_HALF_EXTENT: f32 = 16.0;

// Section reveal
pub const PRICING_THRESHOLD: f64 = 0.2;
pub const ABOUT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const STAGGER_BASE_SEC: f32 = 0.0;
pub const STAGGER_STEP_SEC: f32 = 0.1;

// Page scroll
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Floating background field
pub const FLOATING_DOT_COUNT: usize = 15;
pub const FLOATING_SIZE_MIN: f32 = 1.0;
pub const FLOATING_SIZE_SPAN: f32 = 4.0;
pub const FLOATING_OPACITY_MIN: f32 = 0.1;
pub const FLOATING_OPACITY_SPAN: f32 = 0.3;
pub const FLOATING_DELAY_MAX_SEC: f32 = 5.0;
pub const FLOATING_DURATION_MIN_SEC: f32 = 6.0;
pub const FLOATING_DURATION_SPAN_SEC: f32 = 4.0;

// Element ids and class names shared with static/motion.css
pub const FOLLOWER_ID: &str = "cursor-follower";
pub const TRAIL_LAYER_ID: &str = "trail-layer";
pub const FLOATING_LAYER_ID: &str = "floating-layer";
pub const HERO_ID: &str = "home";
pub const GLASS_CARD_SELECTOR: &str = ".glass-card";
pub const REVEAL_SECTION_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_ITEM_SELECTOR: &str = "[data-reveal-index]";

pub const CLASS_ENTRANCE: &str = "fade-up";
pub const CLASS_SUPPRESSED: &str = "opacity-0";
pub const CLASS_INTERACTIVE: &str = "is-interactive";
pub const CLASS_LIVE: &str = "is-live";
pub const CLASS_GLOW: &str = "animate-glow";
pub const CLASS_MOBILE: &str = "is-mobile";
