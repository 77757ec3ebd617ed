pub use crate::detail::{Action, DetailView, ViewState};
pub use crate::error::Error;
pub use crate::models::*;
pub use crate::pagination::Pagination;
pub use crate::payload::{Payload, decode_comments, decode_detail};
pub use crate::route::Route;
pub use crate::traits::{DetailSource, Navigator};
