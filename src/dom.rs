use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// A `window` event listener that unregisters itself on drop.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new<F>(window: &Window, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to register {} listener: {:?}", event, e);
            return None;
        }
        log::debug!("listening for {}", event);
        Some(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => log::debug!("released {} listener", self.event),
            Err(e) => log::warn!("failed to release {} listener: {:?}", self.event, e),
        }
    }
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    fn fire_resize(window: &Window) {
        let event = web_sys::Event::new("resize").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropped_listener_no_longer_fires() {
        let window = web_sys::window().unwrap();
        let hits = Rc::new(Cell::new(0u32));
        let listener = {
            let hits = hits.clone();
            WindowListener::new(&window, "resize", move |_e| hits.set(hits.get() + 1))
        };
        assert!(listener.is_some());
        fire_resize(&window);
        assert_eq!(hits.get(), 1);
        drop(listener);
        fire_resize(&window);
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn viewport_size_is_finite() {
        let window = web_sys::window().unwrap();
        let (w, h) = viewport_size(&window);
        assert!(w.is_finite() && w >= 0.0);
        assert!(h.is_finite() && h >= 0.0);
    }
}
