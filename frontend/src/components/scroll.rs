use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Function;
use web_sys::Window;

/// Live `scroll` listener on the window.
///
/// The listener is removed when the subscription is dropped, so holding it in
/// an effect and dropping it in the effect's teardown ties the listener to the
/// component's lifetime.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    /// Registers `on_offset` for every scroll event and feeds it the current
    /// offset once. Returns `None` when there is no window or the browser
    /// refuses the listener.
    ///
    /// The listener lives exactly as long as the returned guard; dropping it
    /// unregisters the callback.
    pub fn attach<F>(on_offset: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll tracking disabled");
            return None;
        };

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            match reader.scroll_y() {
                Ok(offset) => on_offset(offset),
                Err(err) => debug!("Could not read scroll offset: {:?}", err),
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) = window.add_event_listener_with_callback(
            "scroll",
            callback.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        // Initial sync for pages restored part-way down
        if let Err(err) = callback
            .as_ref()
            .unchecked_ref::<Function>()
            .call0(&JsValue::NULL)
        {
            debug!("Initial scroll sync failed: {:?}", err);
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self.window.remove_event_listener_with_callback(
            "scroll",
            self.callback.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}
