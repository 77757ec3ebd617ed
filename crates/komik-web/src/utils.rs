use std::{
    cell::RefCell,
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::anyhow;
use dominator::routing;
use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use komik_lib::traits::Navigator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static LOCAL_STORAGE: Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
    static API_HOST: RefCell<String> = RefCell::new(DEFAULT_API_HOST.to_string());
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Runs one task at a time; starting a new one aborts the previous
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    pub fn cancel(&self) {
        self.replace(None)
    }

    fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    let mut loading = loading.lock_mut();

                    if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                        if current_id == id {
                            *loading = None;
                        }
                    }
                }
                Err(_) => {
                    debug!("task #{} aborted", id);
                }
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// Client side navigation through dominator's router
#[derive(Clone, Copy, Default)]
pub struct Router;

impl Navigator for Router {
    fn go_to(&self, path: &str) {
        routing::go_to_url(path);
    }
}

const DEFAULT_API_HOST: &str = "/api";

fn configured_api_host() -> Result<String, anyhow::Error> {
    if let Some(host) = js_sys::eval("window.__KOMIK_API__")
        .ok()
        .and_then(|val| val.as_string())
    {
        return Ok(host);
    }

    let origin = window()
        .location()
        .origin()
        .map_err(|e| anyhow!("error read origin: {:?}", e))?;

    Ok(format!("{}{}", origin, DEFAULT_API_HOST))
}

/// Picks the API base url. `window.__KOMIK_API__` wins over the page origin.
pub fn initialize_urls() {
    let api_host = configured_api_host().unwrap_or_else(|e| {
        warn!("{}, falling back to {}", e, DEFAULT_API_HOST);
        DEFAULT_API_HOST.to_string()
    });

    info!("api host: {}", api_host);
    API_HOST.with(|s| *s.borrow_mut() = api_host.trim_end_matches('/').to_string());
}

pub fn api_host() -> String {
    API_HOST.with(|v| v.borrow().clone())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn local_storage() -> Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}
