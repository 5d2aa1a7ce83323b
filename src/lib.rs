//! Motion layer for the Humanize AI Designs landing page.
//!
//! `core` is plain Rust and builds on any target; it holds the visibility
//! latch, the pointer feedback controller and the page scroll math. The
//! remaining modules bind it to the browser and only build for wasm32.

mod constants;
pub mod core;

pub use constants::*;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod reveal;

#[cfg(target_arch = "wasm32")]
pub use page::{start, MotionPage};
