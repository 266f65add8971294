//! Page scrolling
//!
//! `ScrollState` is the page viewport shared by the list and detail views.
//! `ScrollRestoration` remembers where the list was scrolled to while the
//! detail view is in front and puts it back when the list returns.

mod restoration;
mod scroll_state;
mod viewport;

pub use restoration::ScrollRestoration;
pub use scroll_state::ScrollState;
pub use viewport::Viewport;
