use crate::constants::{ABOUT_THRESHOLD, DEFAULT_THRESHOLD, PRICING_THRESHOLD, REVEAL_SECTION_SELECTOR};
use crate::core::floating;
use crate::core::{FeedbackParams, PageParams, RevealParams};
use crate::dom;
use crate::events::{self, ListenerSet};
use crate::frame::{build_feedback, SharedFeedback};
use crate::reveal::SectionReveal;
use crate::render::{self, TrailRenderer};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-motion loaded");
    Ok(())
}

/// Motion layer for the whole page. The page script owns the instance:
/// `mount()` once the sections are in the DOM, `stop()` when the view goes
/// away.
#[wasm_bindgen]
pub struct MotionPage {
    window: web::Window,
    document: web::Document,
    page: PageParams,
    feedback: SharedFeedback,
    renderer: Rc<RefCell<TrailRenderer>>,
    sections: Vec<SectionReveal>,
    listeners: ListenerSet,
}

#[wasm_bindgen]
impl MotionPage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MotionPage, JsValue> {
        Self::build().map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.feedback.borrow().is_running() {
            return Ok(());
        }
        self.feedback
            .borrow_mut()
            .start()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        events::wire_pointermove(&mut self.listeners, &self.window, self.feedback.clone());
        events::wire_anchor_clicks(&mut self.listeners, &self.window, &self.document, &self.page);
        events::wire_scroll_effects(&mut self.listeners, &self.window, &self.document, &self.page);
        events::wire_mobile_toggle(&mut self.listeners, &self.window, &self.document, &self.page);
        events::page::apply_scroll_effects(&self.window, &self.document, self.page.parallax_factor);

        if self.sections.is_empty() {
            self.sections = dom::query_all_in(&self.document, REVEAL_SECTION_SELECTOR)
                .into_iter()
                .map(|section| {
                    let params = reveal_params_for(&section);
                    SectionReveal::attach(section, params)
                })
                .collect();
        } else {
            // remounted: revealed sections keep their latch
            for section in self.sections.iter_mut() {
                section.resume();
            }
        }

        let dots = floating::generate(&mut rand::thread_rng(), self.page.floating_count);
        if let Err(e) = render::render_floating_field(&self.document, &dots) {
            log::warn!("[page] floating field skipped: {e:#}");
        }

        log::info!(
            "[page] mounted: {} listeners, {} revealed sections, {} floating dots",
            self.listeners.len(),
            self.sections.len(),
            dots.len()
        );
        Ok(())
    }

    /// Removes every listener, cancels the frame tick and particle timers and
    /// disconnects section observers. Section latches survive, so a later
    /// `mount` does not hide what the visitor has already seen.
    pub fn stop(&mut self) {
        let detached = self.listeners.detach_all();
        {
            let mut fb = self.feedback.borrow_mut();
            fb.stop();
            let changes = fb.drain_changes();
            self.renderer.borrow().apply_changes(changes);
        }
        for section in self.sections.iter_mut() {
            section.disconnect();
        }
        log::info!(
            "[page] stopped: {} listeners detached, {} sections disconnected",
            detached,
            self.sections.len()
        );
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.feedback.borrow().is_running()
    }

    #[wasm_bindgen(getter, js_name = liveParticles)]
    pub fn live_particles(&self) -> usize {
        self.feedback.borrow().live_particles()
    }

    #[wasm_bindgen(getter, js_name = revealedSections)]
    pub fn revealed_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.is_visible()).count()
    }
}

impl MotionPage {
    fn build() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        let lookup = dom::dataset_lookup(&body);

        let mut feedback_params = FeedbackParams::default();
        if let Err(e) = feedback_params.apply_overrides(&lookup) {
            log::warn!("[page] ignoring feedback overrides: {e}");
        }
        let mut page = PageParams::default();
        if let Err(e) = page.apply_overrides(&lookup) {
            log::warn!("[page] ignoring page overrides: {e}");
        }

        let renderer = Rc::new(RefCell::new(TrailRenderer::mount(
            &document,
            feedback_params.particle_cap,
            feedback_params.particle_ttl.as_secs_f64() * 1000.0,
        )?));
        let feedback = build_feedback(&window, feedback_params, renderer.clone());

        Ok(Self {
            window,
            document,
            page,
            feedback,
            renderer,
            sections: Vec::new(),
            listeners: ListenerSet::default(),
        })
    }
}

/// Section thresholds: the pricing table reveals at 20 %, the about section
/// at 30 %; `data-reveal-*` attributes override either.
fn reveal_params_for(section: &web::Element) -> RevealParams {
    let threshold = match section.id().as_str() {
        "pricing" => PRICING_THRESHOLD,
        "about" => ABOUT_THRESHOLD,
        _ => DEFAULT_THRESHOLD,
    };
    let mut params = RevealParams::with_threshold(threshold);
    if let Err(e) = params.apply_overrides(dom::dataset_lookup(section)) {
        log::warn!("[reveal] #{}: {e}", section.id());
    }
    params
}

impl Drop for MotionPage {
    fn drop(&mut self) {
        self.stop();
    }
}
