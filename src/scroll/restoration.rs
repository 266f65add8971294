//! Scroll restoration across list/detail view switches
//!
//! The list view and the detail view share one page viewport. When the list
//! goes to the background its offset is remembered, and when it comes back
//! the offset is re-applied once the list has been laid out again.

#[cfg(debug_assertions)]
use log::debug;

use super::viewport::Viewport;

/// Completed frames to wait before re-applying a saved offset.
///
/// The first frame after reactivation lays the list out again and recomputes
/// the scroll bounds; jumping earlier would be clamped against the detail
/// view's bounds.
const RESTORE_AFTER_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRestore {
    offset: u16,
    frames_remaining: u8,
}

/// Saves and restores the list view's scroll offset around activation changes.
///
/// One instance lives as long as the page that owns it. Dropping it drops any
/// restore that has not fired yet.
#[derive(Debug, Clone, Default)]
pub struct ScrollRestoration {
    /// `None` until the first `observe`
    last_active: Option<bool>,
    saved_offset: u16,
    suppress_next_save: bool,
    pending: Option<PendingRestore>,
}

impl ScrollRestoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current activation flag; call once per render.
    pub fn observe(&mut self, is_active: bool, viewport: &impl Viewport) {
        let Some(was_active) = self.last_active.replace(is_active) else {
            return;
        };

        match (was_active, is_active) {
            (true, false) => self.on_deactivate(viewport),
            (false, true) => self.on_activate(),
            _ => {}
        }
    }

    /// Capture the current offset now and skip the next automatic save.
    ///
    /// Callers that scroll the page to the top right before hiding the list
    /// call this first so the automatic save does not record that top.
    pub fn save_scroll_position(&mut self, viewport: &impl Viewport) {
        self.saved_offset = viewport.scroll_offset();
        self.suppress_next_save = true;

        #[cfg(debug_assertions)]
        debug!("Scroll restoration: explicit save at {}", self.saved_offset);
    }

    /// Notify that a frame finished rendering.
    ///
    /// Returns the offset jumped to when a pending restore fires on this frame.
    pub fn frame_rendered(&mut self, viewport: &mut impl Viewport) -> Option<u16> {
        let pending = self.pending.as_mut()?;
        pending.frames_remaining = pending.frames_remaining.saturating_sub(1);
        if pending.frames_remaining > 0 {
            return None;
        }

        let offset = pending.offset;
        self.pending = None;
        viewport.jump_to(offset);

        #[cfg(debug_assertions)]
        debug!("Scroll restoration: restored offset {}", offset);

        Some(offset)
    }

    pub fn saved_offset(&self) -> u16 {
        self.saved_offset
    }

    pub fn has_pending_restore(&self) -> bool {
        self.pending.is_some()
    }

    fn on_deactivate(&mut self, viewport: &impl Viewport) {
        // A restore still waiting for its frames targets the list, which is
        // no longer in front.
        self.pending = None;

        if self.suppress_next_save {
            self.suppress_next_save = false;
            return;
        }

        let current = viewport.scroll_offset();
        // A zero read mid-transition must not erase a real position
        if current != 0 || self.saved_offset == 0 {
            self.saved_offset = current;
        }

        #[cfg(debug_assertions)]
        debug!(
            "Scroll restoration: deactivated at {}, saved {}",
            current, self.saved_offset
        );
    }

    fn on_activate(&mut self) {
        if self.saved_offset == 0 {
            return;
        }

        self.pending = Some(PendingRestore {
            offset: self.saved_offset,
            frames_remaining: RESTORE_AFTER_FRAMES,
        });
    }
}

#[cfg(test)]
#[path = "restoration_tests.rs"]
mod restoration_tests;
