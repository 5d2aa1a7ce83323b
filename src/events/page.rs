use super::ListenerSet;
use crate::constants::{CLASS_GLOW, CLASS_MOBILE, GLASS_CARD_SELECTOR, HERO_ID};
use crate::core::params::PageParams;
use crate::core::scroll::{
    anchor_scroll_top, in_page_anchor, is_mobile, parallax_transform, rect_in_viewport,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercepts clicks on in-page links and scrolls smoothly to the target,
/// leaving room for the fixed navigation bar.
pub fn wire_anchor_clicks(
    listeners: &mut ListenerSet,
    window: &web::Window,
    document: &web::Document,
    params: &PageParams,
) {
    let window = window.clone();
    let doc = document.clone();
    let offset = params.anchor_offset;
    listeners.listen(document.as_ref(), "click", move |ev: web::Event| {
        let Some(el) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[href]").ok().flatten())
        else {
            return;
        };
        let Some(href) = el.get_attribute("href") else {
            return;
        };
        let Some(selector) = in_page_anchor(&href) else {
            return;
        };
        let Ok(Some(target)) = doc.query_selector(selector) else {
            return;
        };
        ev.prevent_default();
        let page_y = window.page_y_offset().unwrap_or(0.0);
        let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_y, offset);
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    });
}

pub fn wire_scroll_effects(
    listeners: &mut ListenerSet,
    window: &web::Window,
    document: &web::Document,
    params: &PageParams,
) {
    let doc = document.clone();
    let factor = params.parallax_factor;
    let handler_window = window.clone();
    listeners.listen(window.as_ref(), "scroll", move |_ev: web::Event| {
        apply_scroll_effects(&handler_window, &doc, factor);
    });
}

pub fn apply_scroll_effects(window: &web::Window, document: &web::Document, factor: f64) {
    let scrolled = window.page_y_offset().unwrap_or(0.0);
    if let Some(hero) = document.get_element_by_id(HERO_ID) {
        dom::set_style_property(&hero, "transform", &parallax_transform(scrolled, factor));
    }
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    for card in dom::query_all_in(document, GLASS_CARD_SELECTOR) {
        let rect = card.get_bounding_client_rect();
        // glow is one-way; cards keep it after scrolling off
        if rect_in_viewport(rect.top(), rect.bottom(), viewport_h) {
            _ = card.class_list().add_1(CLASS_GLOW);
        }
    }
}

pub fn wire_mobile_toggle(
    listeners: &mut ListenerSet,
    window: &web::Window,
    document: &web::Document,
    params: &PageParams,
) {
    let handler_window = window.clone();
    let doc = document.clone();
    let breakpoint = params.mobile_breakpoint;
    apply_mobile_class(window, document, breakpoint);
    listeners.listen(window.as_ref(), "resize", move |_ev: web::Event| {
        apply_mobile_class(&handler_window, &doc, breakpoint);
    });
}

pub fn apply_mobile_class(window: &web::Window, document: &web::Document, breakpoint: f64) {
    let Some(root) = document.document_element() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(breakpoint);
    dom::toggle_class(&root, CLASS_MOBILE, is_mobile(width, breakpoint));
}
