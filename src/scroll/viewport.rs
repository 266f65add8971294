/// Vertical scroll surface a `ScrollRestoration` reads from and writes to.
///
/// Offsets are measured in terminal lines from the top of the content.
pub trait Viewport {
    /// Current distance from the top of the content
    fn scroll_offset(&self) -> u16;

    /// Jump straight to `offset` without any animation
    fn jump_to(&mut self, offset: u16);
}
