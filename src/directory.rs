//! Contributor list: search, sort, filters, layout and selection

pub mod directory_events;
mod directory_matcher;
pub mod directory_render;
mod directory_state;
mod view_options;

pub use directory_matcher::ContributorMatcher;
pub use directory_render::{
    PageContent, SEARCH_BAR_HEIGHT, build_directory_page, grid_columns, render_search_bar,
};
pub use directory_state::DirectoryState;
pub use view_options::{LayoutMode, SortKey, compare_contributors};
