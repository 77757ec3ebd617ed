use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::prelude::*;
use web_sys::Url;

pub use komik_lib::route::Route;

/// Current route, following dominator's url signal
pub fn signal() -> impl Signal<Item = Route> {
    routing::url()
        .signal_ref(|url| Url::new(url).unwrap_throw())
        .map(|url| Route::from_pathname(&url.pathname()))
        .dedupe_cloned()
}
