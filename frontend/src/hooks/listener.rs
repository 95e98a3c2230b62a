use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::reveal::RevealError;

/// A window event subscription that lives exactly as long as this value.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, RevealError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(RevealError::NoWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| RevealError::Listener(event))?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Like [`WindowListener::new`], but logs and gives up instead of erroring.
pub fn listen<F>(event: &'static str, handler: F) -> Option<WindowListener>
where
    F: FnMut(Event) + 'static,
{
    match WindowListener::new(event, handler) {
        Ok(listener) => Some(listener),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}
