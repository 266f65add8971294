use chrono::{DateTime, Utc};

#[cfg(debug_assertions)]
use log::debug;

use crate::config::{ClipboardBackend, Config};
use crate::directory::DirectoryState;
use crate::help::HelpPopupState;
use crate::notification::NotificationState;
use crate::repository::{Contributor, Directory, DirectoryLoader};
use crate::scroll::{ScrollRestoration, ScrollState};

pub struct App {
    pub loader: Option<DirectoryLoader>,
    pub directory: DirectoryState,
    /// Index into `directory.contributors()` of the person being shown
    pub detail: Option<usize>,
    /// Shared by the list and the detail page
    pub page_scroll: ScrollState,
    pub restoration: ScrollRestoration,
    pub updated_at: Option<DateTime<Utc>>,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    /// Scroll the selection into view on the next render
    pub pending_reveal: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            loader: None,
            directory: DirectoryState::new(config.directory.layout, config.directory.sort),
            detail: None,
            page_scroll: ScrollState::new(),
            restoration: ScrollRestoration::new(),
            updated_at: None,
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            pending_reveal: false,
        }
    }

    /// Create an App whose data arrives later from `loader`
    pub fn new_with_loader(loader: DirectoryLoader, config: &Config) -> Self {
        let mut app = Self::new(config);
        app.loader = Some(loader);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|loader| loader.is_loading())
    }

    /// Pick up the background load result, if it has arrived
    pub fn poll_loader(&mut self) {
        let Some(loader) = &mut self.loader else {
            return;
        };

        match loader.poll() {
            None => {}
            Some(Ok(directory)) => self.apply_directory(directory),
            Some(Err(e)) => {
                #[cfg(debug_assertions)]
                debug!("Directory load failed: {}", e);
                self.notification.show_error(&e.to_string());
            }
        }
    }

    pub fn apply_directory(&mut self, directory: Directory) {
        #[cfg(debug_assertions)]
        debug!(
            "Loaded {} contributors ({} files skipped)",
            directory.contributors.len(),
            directory.skipped.len()
        );

        match directory.skipped.len() {
            0 => {}
            1 => self
                .notification
                .show_warning(&format!("Skipped {}", directory.skipped[0].path.display())),
            n => self
                .notification
                .show_warning(&format!("Skipped {} leaderboard files", n)),
        }

        self.updated_at = directory.updated_at;
        self.directory.set_directory(&directory);
        self.detail = None;
    }

    pub fn is_list_active(&self) -> bool {
        self.detail.is_none()
    }

    pub fn detail_contributor(&self) -> Option<&Contributor> {
        self.detail.and_then(|idx| self.directory.contributor(idx))
    }

    /// Show the selected person; the list's offset is kept for the way back
    pub fn open_detail(&mut self) -> bool {
        let Some(idx) = self.directory.selected_contributor_index() else {
            return false;
        };

        self.restoration.save_scroll_position(&self.page_scroll);
        self.page_scroll.jump_to_top();
        self.detail = Some(idx);
        self.directory.blur_search();
        true
    }

    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.page_scroll.jump_to_top();
        }
    }

    /// Call after every completed draw
    pub fn frame_rendered(&mut self) {
        self.restoration.frame_rendered(&mut self.page_scroll);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
