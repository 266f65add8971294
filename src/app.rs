mod app_events;
mod app_render;
mod app_state;
mod mouse_scroll;

pub use app_state::App;
