use super::ListenerSet;
use crate::core::{FeedbackController, Host, PointerSample};
use crate::dom;
use crate::frame::BrowserHost;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(
    listeners: &mut ListenerSet,
    window: &web::Window,
    feedback: Rc<RefCell<FeedbackController<BrowserHost>>>,
) {
    listeners.listen(window.as_ref(), "pointermove", move |ev: web::Event| {
        // PointerEvent inherits position and movement from MouseEvent
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut fb = feedback.borrow_mut();
        let sample = PointerSample {
            position: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            movement: Some(Vec2::new(ev.movement_x() as f32, ev.movement_y() as f32)),
            at: fb.host().now(),
        };
        let target = ev.target();
        fb.on_pointer_move(sample, move || dom::target_is_interactive(target));
    });
}
