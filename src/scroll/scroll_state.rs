use super::viewport::Viewport;

/// Vertical scroll position of the page pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height / 2);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll the minimum amount needed so lines `top..top + height` are on screen.
    ///
    /// Content taller than the viewport is aligned to its top line.
    pub fn ensure_visible(&mut self, top: u16, height: u16) {
        if self.viewport_height == 0 {
            return;
        }

        let bottom = top.saturating_add(height);
        if top < self.offset || height >= self.viewport_height {
            self.offset = top;
        } else if bottom > self.offset.saturating_add(self.viewport_height) {
            self.offset = bottom.saturating_sub(self.viewport_height);
        }

        self.offset = self.offset.min(self.max_offset);
    }
}

impl Viewport for ScrollState {
    fn scroll_offset(&self) -> u16 {
        self.offset
    }

    // Bounds are stale while the other view is in front; the next
    // `update_bounds` clamps if the content shrank meanwhile.
    fn jump_to(&mut self, offset: u16) {
        self.offset = offset;
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
