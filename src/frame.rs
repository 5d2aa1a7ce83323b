use crate::core::{FeedbackController, FrameHandle, FxError, FxResult, Host, TimerHandle};
use crate::render::TrailRenderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedFeedback = Rc<RefCell<FeedbackController<BrowserHost>>>;

/// `requestAnimationFrame` + `setTimeout` host for the feedback controller.
///
/// The frame callback and one expiry callback per pool slot are created once
/// and reused for every request, so scheduling never allocates closures.
pub struct BrowserHost {
    window: web::Window,
    origin: Instant,
    frame_cb: Closure<dyn FnMut(f64)>,
    timer_cbs: Vec<Closure<dyn FnMut()>>,
}

impl BrowserHost {
    fn new(
        window: web::Window,
        feedback: Weak<RefCell<FeedbackController<BrowserHost>>>,
        renderer: Rc<RefCell<TrailRenderer>>,
        slots: usize,
    ) -> Self {
        let fb_frame = feedback.clone();
        let frame_cb = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(fb) = fb_frame.upgrade() else {
                return;
            };
            let mut fb = fb.borrow_mut();
            fb.on_frame();
            renderer.borrow_mut().draw(&mut fb);
        }) as Box<dyn FnMut(f64)>);

        let timer_cbs = (0..slots)
            .map(|slot| {
                let fb_timer = feedback.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(fb) = fb_timer.upgrade() {
                        fb.borrow_mut().on_particle_timer(slot);
                    }
                }) as Box<dyn FnMut()>)
            })
            .collect();

        Self {
            window,
            origin: Instant::now(),
            frame_cb,
            timer_cbs,
        }
    }
}

/// Builds the controller together with the host that calls back into it.
pub fn build_feedback(
    window: &web::Window,
    params: crate::core::FeedbackParams,
    renderer: Rc<RefCell<TrailRenderer>>,
) -> SharedFeedback {
    let slots = params.particle_cap;
    Rc::new_cyclic(|weak| {
        let host = BrowserHost::new(window.clone(), weak.clone(), renderer, slots);
        RefCell::new(FeedbackController::new(params, host))
    })
}

impl Host for BrowserHost {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn request_frame(&mut self) -> FxResult<FrameHandle> {
        self.window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
            .map_err(|e| FxError::Schedule {
                what: "animation frame",
                reason: format!("{e:?}"),
            })
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn set_timeout(&mut self, slot: usize, delay: Duration) -> FxResult<TimerHandle> {
        let cb = self.timer_cbs.get(slot).ok_or_else(|| FxError::Schedule {
            what: "particle expiry",
            reason: format!("no callback for slot {slot}"),
        })?;
        // round up so the timer never lands before the deadline
        let ms = delay.as_micros().div_ceil(1000).min(i32::MAX as u128) as i32;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .map_err(|e| FxError::Schedule {
                what: "particle expiry",
                reason: format!("{e:?}"),
            })
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle);
    }
}
