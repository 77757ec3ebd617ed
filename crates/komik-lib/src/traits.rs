use std::{future::Future, rc::Rc};

use crate::error::Error;

/// Where manga detail records come from
pub trait DetailSource {
    /// Requests the detail record for `slug` and resolves to the raw body of
    /// a successful response. Network failures and non-2xx statuses are errors.
    fn fetch_detail(&self, slug: String) -> impl Future<Output = Result<String, Error>>;
}

/// Client side route changes
pub trait Navigator {
    fn go_to(&self, path: &str);
}

impl<T: DetailSource> DetailSource for Rc<T> {
    fn fetch_detail(&self, slug: String) -> impl Future<Output = Result<String, Error>> {
        (**self).fetch_detail(slug)
    }
}

impl<T: Navigator> Navigator for Rc<T> {
    fn go_to(&self, path: &str) {
        (**self).go_to(path)
    }
}
