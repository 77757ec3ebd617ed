#[macro_use]
extern crate log;

pub mod detail;
pub mod error;
pub mod models;
pub mod pagination;
pub mod payload;
pub mod prelude;
pub mod route;
pub mod traits;

/// Path of the landing page every "go home" action navigates to
pub static HOME_PATH: &str = "/";
