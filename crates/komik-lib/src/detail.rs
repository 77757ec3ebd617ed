//! State machine behind the manga detail page.
//!
//! A [`DetailView`] owns exactly one [`ViewState`] and moves it through
//! `Loading` to `Loaded` or `Error` as detail requests resolve. Every load takes
//! a new generation number and only the newest generation may write its result,
//! so a slow response from a superseded request never overwrites newer state.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

use futures_signals::signal::{Mutable, Signal};

use crate::{
    HOME_PATH,
    models::MangaDetail,
    payload::decode_detail,
    traits::{DetailSource, Navigator},
};

/// Headline of the error and empty displays
pub static HEADLINE: &str = "Failed to load manga details";
/// The only failure message users get to see
pub static FAILED_TO_LOAD: &str = "Failed to load manga details. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoHome,
    Retry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    /// Nothing to show, e.g. the route carried no slug
    Empty,
    Loaded(Rc<MangaDetail>),
}

impl ViewState {
    /// User actions offered while this state is displayed
    pub fn actions(&self) -> &'static [Action] {
        match self {
            ViewState::Loading => &[],
            ViewState::Error(_) => &[Action::GoHome, Action::Retry],
            ViewState::Empty | ViewState::Loaded(_) => &[Action::GoHome],
        }
    }

    pub fn manga(&self) -> Option<&Rc<MangaDetail>> {
        match self {
            ViewState::Loaded(manga) => Some(manga),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

pub struct DetailView<S, N> {
    source: S,
    navigator: N,
    slug: RefCell<Option<String>>,
    generation: Cell<u64>,
    state: Mutable<ViewState>,
}

impl<S, N> DetailView<S, N>
where
    S: DetailSource,
    N: Navigator,
{
    /// A view for `slug`. Without a slug there is nothing to load and the view
    /// starts out `Empty`.
    pub fn new(slug: Option<String>, source: S, navigator: N) -> Self {
        let slug = slug.filter(|slug| !slug.trim().is_empty());
        let state = if slug.is_some() {
            ViewState::Loading
        } else {
            ViewState::Empty
        };

        Self {
            source,
            navigator,
            slug: RefCell::new(slug),
            generation: Cell::new(0),
            state: Mutable::new(state),
        }
    }

    pub fn slug(&self) -> Option<String> {
        self.slug.borrow().clone()
    }

    pub fn state(&self) -> ViewState {
        self.state.get_cloned()
    }

    pub fn signal(&self) -> impl Signal<Item = ViewState> + use<S, N> {
        self.state.signal_cloned()
    }

    /// Starts loading `slug`. The request is issued and the view switches to
    /// `Loading` right away; the returned future applies the outcome.
    pub fn load_detail<'a>(&'a self, slug: &str) -> impl Future<Output = ()> + use<'a, S, N> {
        *self.slug.borrow_mut() = Some(slug.to_string());

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.state.set(ViewState::Loading);

        info!("fetching manga detail for slug: {}", slug);
        let request = self.source.fetch_detail(slug.to_string());

        async move {
            let result = request.await.and_then(|body| {
                debug!("detail response: {}", body);
                decode_detail(&body)
            });

            if self.generation.get() != generation {
                debug!("discarding stale detail response #{}", generation);
                return;
            }

            match result {
                Ok(manga) => self.state.set(ViewState::Loaded(Rc::new(manga))),
                Err(e) => {
                    error!("error fetching manga detail: {}", e);
                    self.state.set(ViewState::Error(FAILED_TO_LOAD.to_string()));
                }
            }
        }
    }

    /// Loads the most recent slug again, replacing whatever is shown
    pub async fn retry(&self) {
        let slug = self.slug();
        match slug {
            Some(slug) => self.load_detail(&slug).await,
            None => warn!("nothing to retry, no manga slug"),
        }
    }

    pub fn navigate_home(&self) {
        self.navigator.go_to(HOME_PATH);
    }
}
