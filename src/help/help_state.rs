use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.scroll.jump_to_top();
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}
