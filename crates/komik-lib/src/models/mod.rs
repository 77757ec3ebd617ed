mod lenient;

pub mod manga_detail;
pub use manga_detail::*;

pub mod chapter;
pub use chapter::*;

pub mod comment;
pub use comment::*;

pub mod bookmark;
pub use bookmark::*;
