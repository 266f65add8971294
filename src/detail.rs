//! Single contributor page

pub mod detail_events;
pub mod detail_render;

pub use detail_render::{build_detail_page, heatmap_reference_date};
