pub mod route;
pub use route::Route;

mod bookmark_button;
pub use bookmark_button::*;

mod chapter_list;
pub use chapter_list::ChapterList;

mod comment_section;
pub use comment_section::CommentSection;

pub mod events;

pub mod icons;

pub mod skeleton;

pub mod snackbar;
