use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

/// Owns every event listener a view installs so teardown can remove them.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<Listener>,
}

impl ListenerSet {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {event}: {e:?}");
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes every listener and drops its closure. Returns how many were
    /// removed.
    pub fn detach_all(&mut self) -> usize {
        let n = self.entries.len();
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref());
        }
        n
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}
