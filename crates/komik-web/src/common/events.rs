use dominator::traits::StaticEvent;
use wasm_bindgen::JsCast;

pub use dominator::events::*;

/// Fired by `<img>` when the source cannot be loaded
pub struct Error {
    #[allow(dead_code)]
    event: web_sys::ErrorEvent,
}

impl StaticEvent for Error {
    const EVENT_TYPE: &'static str = "error";

    #[inline]
    fn unchecked_from_event(event: web_sys::Event) -> Self {
        Self {
            event: event.unchecked_into(),
        }
    }
}
