//! Small rendering helpers shared by the views

pub mod popup;
pub mod scrollbar;
pub mod text;
