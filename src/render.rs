use crate::constants::{
    CLASS_INTERACTIVE, CLASS_LIVE, FLOATING_LAYER_ID, FOLLOWER_HALF_EXTENT, FOLLOWER_ID,
    TRAIL_LAYER_ID,
};
use crate::core::floating::FloatingDot;
use crate::core::{FeedbackController, Host, SlotChange, TrailParticle};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes the follower position and the trail pool into their DOM nodes.
///
/// The trail layer holds one `div.trail-particle` per pool slot, created at
/// mount; a slot is shown by adding `is-live` and hidden by removing it.
pub struct TrailRenderer {
    follower: web::HtmlElement,
    slots: Vec<web::HtmlElement>,
    interactive: bool,
}

impl TrailRenderer {
    pub fn mount(
        document: &web::Document,
        slot_count: usize,
        ttl_ms: f64,
    ) -> anyhow::Result<Self> {
        let follower = dom::ensure_element(document, FOLLOWER_ID, "cursor-follower")
            .ok_or_else(|| anyhow!("cannot create #{FOLLOWER_ID}"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let layer = dom::ensure_element(document, TRAIL_LAYER_ID, "trail-layer")
            .ok_or_else(|| anyhow!("cannot create #{TRAIL_LAYER_ID}"))?;
        layer.set_inner_html("");
        dom::set_style_property(&layer, "--trail-ttl", &format!("{ttl_ms}ms"));

        let mut slots = Vec::with_capacity(slot_count);
        for _ in 0..slot_count {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow!("{:?}", e))?;
            el.set_class_name("trail-particle");
            layer.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
            let el = el
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow!("{:?}", e))?;
            slots.push(el);
        }
        log::debug!("[render] trail layer mounted with {} slots", slots.len());
        Ok(Self {
            follower,
            slots,
            interactive: false,
        })
    }

    pub fn draw<H: Host>(&mut self, fb: &mut FeedbackController<H>) {
        let p = fb.smoothed();
        _ = self.follower.style().set_property(
            "transform",
            &format!(
                "translate3d({:.2}px, {:.2}px, 0)",
                p.x - FOLLOWER_HALF_EXTENT,
                p.y - FOLLOWER_HALF_EXTENT
            ),
        );
        let over = fb.over_interactive();
        if over != self.interactive {
            dom::toggle_class(&self.follower, CLASS_INTERACTIVE, over);
            self.interactive = over;
        }
        self.apply_changes(fb.drain_changes());
    }

    pub fn apply_changes(&self, changes: Vec<SlotChange>) {
        for change in changes {
            match change {
                SlotChange::Claimed { slot, particle } => {
                    if let Some(el) = self.slots.get(slot) {
                        show_particle(el, &particle);
                    }
                }
                SlotChange::Released { slot, .. } => {
                    if let Some(el) = self.slots.get(slot) {
                        _ = el.class_list().remove_1(CLASS_LIVE);
                    }
                }
            }
        }
    }
}

fn show_particle(el: &web::HtmlElement, particle: &TrailParticle) {
    let half = particle.size * 0.5;
    let style = el.style();
    _ = style.set_property("left", &format!("{:.2}px", particle.position.x - half));
    _ = style.set_property("top", &format!("{:.2}px", particle.position.y - half));
    _ = style.set_property("width", &format!("{:.2}px", particle.size));
    _ = style.set_property("height", &format!("{:.2}px", particle.size));
    // restart the fade animation when a slot is reused
    _ = el.class_list().remove_1(CLASS_LIVE);
    _ = el.offset_width();
    _ = el.class_list().add_1(CLASS_LIVE);
}

pub fn render_floating_field(document: &web::Document, dots: &[FloatingDot]) -> anyhow::Result<()> {
    let layer = dom::ensure_element(document, FLOATING_LAYER_ID, "floating-layer")
        .ok_or_else(|| anyhow!("cannot create #{FLOATING_LAYER_ID}"))?;
    layer.set_inner_html("");
    for dot in dots {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?;
        el.set_class_name("floating-dot");
        el.set_attribute("style", &dot.css())
            .map_err(|e| anyhow!("{:?}", e))?;
        layer.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
