use crate::app::App;

use super::backend::copy_to_clipboard;

/// Copy the open profile's URL; false when no profile is open or the copy failed
pub fn copy_profile_url(app: &mut App) -> bool {
    let Some(url) = app.detail_contributor().map(|c| c.profile_url()) else {
        return false;
    };

    match copy_to_clipboard(&url, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show("Copied profile URL!");
            true
        }
        Err(e) => {
            app.notification.show_warning(&e.to_string());
            false
        }
    }
}
