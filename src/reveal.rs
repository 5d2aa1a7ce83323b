use crate::constants::{CLASS_ENTRANCE, CLASS_SUPPRESSED, REVEAL_ITEM_SELECTOR};
use crate::core::{entrance_class, RevealParams, Stagger, VisibilityLatch};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Entrance animation gate for one page section.
///
/// Items inside the section marked `data-reveal-index="N"` start suppressed
/// and switch to the entrance class, delayed by their stagger slot, the first
/// time the section crosses its visibility threshold.
///
/// Disconnecting keeps the latch, so [`SectionReveal::resume`] after a page
/// stop never hides a section that was already revealed.
pub struct SectionReveal {
    section: web::Element,
    items: Vec<web::Element>,
    threshold: f64,
    latch: Rc<RefCell<VisibilityLatch>>,
    observer: Option<web::IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl SectionReveal {
    pub fn attach(section: web::Element, params: RevealParams) -> Self {
        let items = dom::query_all(&section, REVEAL_ITEM_SELECTOR);
        // a previous mount may already have revealed this section
        let shown = items
            .iter()
            .any(|item| item.class_list().contains(CLASS_ENTRANCE));
        let latch = VisibilityLatch::resume(params.threshold, shown);

        let mut reveal = Self {
            section,
            items,
            threshold: params.threshold,
            latch: Rc::new(RefCell::new(latch)),
            observer: None,
            _callback: None,
        };
        if shown {
            log::debug!("[reveal] #{} already revealed", reveal.section.id());
            return reveal;
        }

        let stagger = Stagger::from(&params);
        for item in &reveal.items {
            let index = item
                .get_attribute("data-reveal-index")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(0);
            dom::set_style_property(item, "animation-delay", &stagger.css_delay(index));
            apply_visibility(item, false);
        }
        reveal.connect();
        reveal
    }

    /// Re-observes a disconnected section that has not been revealed yet.
    pub fn resume(&mut self) {
        if self.observer.is_some() || self.is_visible() {
            return;
        }
        self.connect();
    }

    fn connect(&mut self) {
        if let Err(e) = self.observe() {
            log::info!(
                "[reveal] #{} shown without observation: {e:?}",
                self.section.id()
            );
            self.show_now();
        }
    }

    fn observe(&mut self) -> Result<(), JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            return Err(JsValue::from_str("IntersectionObserver unsupported"));
        }

        let latch = self.latch.clone();
        let section = self.section.clone();
        let items = self.items.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    if latch.borrow_mut().observe(entry.intersection_ratio()) {
                        for item in &items {
                            apply_visibility(item, true);
                        }
                        // later ratios cannot change anything
                        observer.unobserve(&section);
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&self.section);
        log::debug!(
            "[reveal] observing #{} at threshold {}",
            self.section.id(),
            self.threshold
        );
        self.observer = Some(observer);
        self._callback = Some(callback);
        Ok(())
    }

    fn show_now(&self) {
        if self.latch.borrow_mut().fail_open() {
            for item in &self.items {
                apply_visibility(item, true);
            }
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.latch.borrow().is_visible()
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self._callback = None;
    }
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn apply_visibility(item: &web::Element, visible: bool) {
    let on = entrance_class(visible);
    let off = if visible {
        CLASS_SUPPRESSED
    } else {
        CLASS_ENTRANCE
    };
    let cl = item.class_list();
    _ = cl.remove_1(off);
    _ = cl.add_1(on);
}
